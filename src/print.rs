//! Hide navigation chrome while the page prints and restore it after.

use crate::config;
use crate::dom::{Dom, DomElement};
use crate::events::EventSource;

pub fn install<D, E>(dom: &D, events: &E)
where
    D: Dom,
    E: EventSource<El = D::El>,
{
    {
        let dom = dom.clone();
        events.on_before_print(Box::new(move || {
            for element in dom.select(config::PRINT_CHROME_SELECTOR) {
                element.set_style("display", "none");
            }
        }));
    }
    let dom = dom.clone();
    events.on_after_print(Box::new(move || {
        for element in dom.select(config::PRINT_CHROME_SELECTOR) {
            // Back to whatever the stylesheet says.
            element.clear_style("display");
        }
    }));
}
