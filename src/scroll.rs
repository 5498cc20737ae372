//! Smooth in-page scrolling for anchor links, offset by the fixed header.

use crate::config;
use crate::dom::{Dom, DomElement};
use crate::events::EventSource;

/// Intercept every in-page anchor click and glide to its target instead of
/// jumping. The default jump is suppressed even when the target is missing.
pub fn install<D, E>(dom: &D, events: &E)
where
    D: Dom,
    E: EventSource<El = D::El>,
{
    for link in dom.select(config::ANCHOR_SELECTOR) {
        let handler = {
            let dom = dom.clone();
            let anchor = link.clone();
            Box::new(move || {
                let Some(href) = anchor.attribute("href") else {
                    return;
                };
                if href == "#" {
                    return;
                }
                let Some(id) = href.strip_prefix('#') else {
                    return;
                };
                let Some(target) = dom.element_by_id(id) else {
                    return;
                };
                let top = target.viewport_top() + dom.scroll_y() - config::HEADER_OFFSET_PX;
                dom.scroll_to(top);
            })
        };
        events.on_click(&link, true, handler);
    }
}
