//! Mobile navigation menu: an `active` class on the nav panel plus the
//! hamburger-to-X animation on the toggle button's three bars.

use crate::config;
use crate::dom::{Dom, DomElement};
use crate::events::EventSource;

const MENU_OPEN_CLASS: &str = "active";

/// Wire the hamburger button and nav panel. Without both present the page
/// has no mobile menu and nothing is registered.
pub fn install<D, E>(dom: &D, events: &E)
where
    D: Dom,
    E: EventSource<El = D::El>,
{
    let Some(toggle) = dom.element_by_id(config::MOBILE_TOGGLE_ID) else {
        return;
    };
    let Some(panel) = dom.select(config::NAV_MENU_SELECTOR).into_iter().next() else {
        return;
    };

    {
        let handler = {
            let dom = dom.clone();
            let toggle = toggle.clone();
            let panel = panel.clone();
            Box::new(move || {
                panel.toggle_class(MENU_OPEN_CLASS);
                let bars = dom.select_in(&toggle, "span");
                if panel.has_class(MENU_OPEN_CLASS) {
                    set_bars_open(&bars);
                } else {
                    set_bars_closed(&bars);
                }
            })
        };
        events.on_click(&toggle, false, handler);
    }

    // Clicking any nav link closes the menu.
    for link in dom.select(config::NAV_LINK_SELECTOR) {
        let handler = {
            let dom = dom.clone();
            let toggle = toggle.clone();
            let panel = panel.clone();
            Box::new(move || {
                panel.remove_class(MENU_OPEN_CLASS);
                set_bars_closed(&dom.select_in(&toggle, "span"));
            })
        };
        events.on_click(&link, false, handler);
    }
}

fn set_bars_open<E: DomElement>(bars: &[E]) {
    let [top, middle, bottom] = bars else {
        return;
    };
    top.set_style("transform", "rotate(45deg) translateY(8px)");
    middle.set_style("opacity", "0");
    bottom.set_style("transform", "rotate(-45deg) translateY(-8px)");
}

fn set_bars_closed<E: DomElement>(bars: &[E]) {
    let [top, middle, bottom] = bars else {
        return;
    };
    top.set_style("transform", "none");
    middle.set_style("opacity", "1");
    bottom.set_style("transform", "none");
}
