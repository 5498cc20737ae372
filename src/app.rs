//! Wires every handler group against the supplied capabilities.

use log::debug;

use crate::dom::Dom;
use crate::events::EventSource;
use crate::prefs::PreferenceStore;
use crate::{effects, language, menu, print, scroll};

/// Runs once, after the document is ready. Components only share the
/// document itself, so wiring order matches their dependency order.
pub fn start<D, E, P>(dom: D, events: E, prefs: P)
where
    D: Dom,
    E: EventSource<El = D::El>,
    P: PreferenceStore,
{
    let switcher = language::install(&dom, &events, prefs);
    debug!("starting in {}", switcher.current().code());
    menu::install(&dom, &events);
    scroll::install(&dom, &events);
    effects::install(&dom, &events);
    print::install(&dom, &events);
}
