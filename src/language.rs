//! Two-language display driven by `data-en` / `data-fr` attributes.

use std::cell::Cell;
use std::rc::Rc;

use crate::config;
use crate::dom::{Dom, DomElement};
use crate::events::EventSource;
use crate::prefs::PreferenceStore;

/// The two languages the page renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Fr,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
        }
    }

    /// Upper-cased code shown in the toggle label.
    pub fn label(self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Fr => "FR",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Lang::En),
            "fr" => Some(Lang::Fr),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Lang::En => Lang::Fr,
            Lang::Fr => Lang::En,
        }
    }
}

/// Holds the current language and rewrites every bilingual element when it
/// flips. Unknown or missing stored values start the page in English.
pub struct LanguageSwitcher<D: Dom, P: PreferenceStore> {
    dom: D,
    prefs: P,
    current: Cell<Lang>,
}

impl<D: Dom, P: PreferenceStore> LanguageSwitcher<D, P> {
    pub fn new(dom: D, prefs: P) -> Self {
        let current = prefs
            .load()
            .as_deref()
            .and_then(Lang::from_code)
            .unwrap_or(Lang::En);
        Self {
            dom,
            prefs,
            current: Cell::new(current),
        }
    }

    pub fn current(&self) -> Lang {
        self.current.get()
    }

    /// Flip the language, rewrite the page, then persist the choice.
    pub fn toggle(&self) {
        let next = self.current.get().other();
        self.current.set(next);
        self.apply(next);
        self.prefs.store(next.code());
    }

    fn apply(&self, lang: Lang) {
        if let Some(label) = self.dom.element_by_id(config::LANG_LABEL_ID) {
            label.set_text(lang.label());
        }
        let attribute = format!("data-{}", lang.code());
        for element in self.dom.select(config::BILINGUAL_SELECTOR) {
            // An empty or missing variant leaves the element untouched.
            match element.attribute(&attribute) {
                Some(text) if !text.is_empty() => element.set_text(&text),
                _ => {}
            }
        }
    }
}

/// Apply the stored language and hook up the toggle control if the page has
/// one. Returns the switcher so callers can inspect or drive it directly.
pub fn install<D, E, P>(dom: &D, events: &E, prefs: P) -> Rc<LanguageSwitcher<D, P>>
where
    D: Dom,
    E: EventSource<El = D::El>,
    P: PreferenceStore,
{
    let switcher = Rc::new(LanguageSwitcher::new(dom.clone(), prefs));
    switcher.apply(switcher.current());
    if let Some(toggle) = dom.element_by_id(config::LANG_TOGGLE_ID) {
        let handler = {
            let switcher = Rc::clone(&switcher);
            Box::new(move || switcher.toggle())
        };
        events.on_click(&toggle, false, handler);
    }
    switcher
}
