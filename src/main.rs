use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod app;
mod config;
mod dom;
mod effects;
mod events;
mod language;
mod menu;
mod prefs;
mod print;
mod scroll;
#[cfg(test)]
mod test_support;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(Level::Debug);

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let ready = Closure::once(wire);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref());
        ready.forget();
    } else {
        // Trunk injects the module after the document is parsed.
        wire();
    }
}

fn wire() {
    let (Some(browser_dom), Some(browser_events)) = (
        dom::browser::BrowserDom::attach(),
        dom::browser::BrowserEvents::attach(),
    ) else {
        return;
    };
    app::start(browser_dom, browser_events, prefs::LocalStoragePrefs);
    info!("page interactions wired");
}
