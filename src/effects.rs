//! Scroll-driven styling: the header shadow, card fade-ins, and the
//! highlighted nav link for the section currently in view.

use std::rc::Rc;

use crate::config;
use crate::dom::{Dom, DomElement};
use crate::events::EventSource;

pub struct ScrollEffects<D: Dom> {
    dom: D,
}

impl<D: Dom> ScrollEffects<D> {
    pub fn new(dom: D) -> Self {
        Self { dom }
    }

    /// Hide every tracked card so the first pass can fade it in.
    pub fn prime(&self) {
        for card in self.dom.select(config::CARD_SELECTOR) {
            card.set_style("opacity", "0");
            card.set_style("transform", "translateY(20px)");
            card.set_style("transition", "opacity 0.6s ease, transform 0.6s ease");
        }
    }

    /// One full pass; runs on every scroll event and once at startup.
    pub fn run(&self) {
        self.shade_header();
        self.reveal_cards();
        self.highlight_active_link();
    }

    fn shade_header(&self) {
        let Some(header) = self.dom.select(config::HEADER_SELECTOR).into_iter().next() else {
            return;
        };
        if self.dom.scroll_y() > config::HEADER_SHADOW_THRESHOLD_PX {
            header.set_style("box-shadow", config::HEADER_SHADOW);
        } else {
            header.set_style("box-shadow", "none");
        }
    }

    fn reveal_cards(&self) {
        let viewport_height = self.dom.viewport_height();
        for card in self.dom.select(config::CARD_SELECTOR) {
            let top = card.viewport_top();
            let bottom = card.viewport_bottom();
            if top < viewport_height - config::REVEAL_MARGIN_PX && bottom > 0.0 {
                // Revealed cards stay revealed; re-applying is idempotent.
                card.set_style("opacity", "1");
                card.set_style("transform", "translateY(0)");
            }
        }
    }

    fn highlight_active_link(&self) {
        let scroll_y = self.dom.scroll_y();
        let mut active = None;
        for section in self.dom.select(config::SECTION_SELECTOR) {
            let top = section.offset_top() - config::SECTION_LOOKAHEAD_PX;
            if scroll_y >= top && scroll_y < top + section.client_height() {
                // Later sections win when ranges overlap.
                active = Some(section.id());
            }
        }
        let target = active.map(|id| format!("#{id}"));
        for link in self.dom.select(config::NAV_LINK_SELECTOR) {
            link.clear_style("color");
            if let (Some(href), Some(target)) = (link.attribute("href"), target.as_deref()) {
                if href == target {
                    link.set_style("color", "var(--primary-color)");
                }
            }
        }
    }
}

pub fn install<D, E>(dom: &D, events: &E)
where
    D: Dom,
    E: EventSource<El = D::El>,
{
    let effects = Rc::new(ScrollEffects::new(dom.clone()));
    effects.prime();
    {
        let effects = Rc::clone(&effects);
        events.on_scroll(Box::new(move || effects.run()));
    }
    // First pass, so above-the-fold content shows without scrolling.
    effects.run();
}
