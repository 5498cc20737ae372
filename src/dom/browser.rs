//! `web-sys` implementations of the page capabilities.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions, Window};

use crate::dom::{Dom, DomElement};
use crate::events::EventSource;

#[derive(Clone)]
pub struct BrowserDom {
    window: Window,
    document: Document,
}

impl BrowserDom {
    /// Attach to the current browser window, if there is one.
    pub fn attach() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

#[derive(Clone)]
pub struct BrowserElement(Element);

impl BrowserElement {
    fn html(&self) -> Option<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>()
    }
}

fn collect(list: Result<NodeList, JsValue>) -> Vec<BrowserElement> {
    let Ok(list) = list else {
        return Vec::new();
    };
    let mut elements = Vec::new();
    for index in 0..list.length() {
        if let Some(element) = list
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            elements.push(BrowserElement(element));
        }
    }
    elements
}

impl Dom for BrowserDom {
    type El = BrowserElement;

    fn element_by_id(&self, id: &str) -> Option<BrowserElement> {
        self.document.get_element_by_id(id).map(BrowserElement)
    }

    fn select(&self, selector: &str) -> Vec<BrowserElement> {
        collect(self.document.query_selector_all(selector))
    }

    fn select_in(&self, root: &BrowserElement, selector: &str) -> Vec<BrowserElement> {
        collect(root.0.query_selector_all(selector))
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

impl DomElement for BrowserElement {
    fn id(&self) -> String {
        self.0.id()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(element) = self.html() {
            let _ = element.style().set_property(property, value);
        }
    }

    fn clear_style(&self, property: &str) {
        if let Some(element) = self.html() {
            let _ = element.style().remove_property(property);
        }
    }

    fn remove_class(&self, name: &str) {
        let _ = self.0.class_list().remove_1(name);
    }

    fn toggle_class(&self, name: &str) {
        let _ = self.0.class_list().toggle(name);
    }

    fn has_class(&self, name: &str) -> bool {
        self.0.class_list().contains(name)
    }

    fn viewport_top(&self) -> f64 {
        self.0.get_bounding_client_rect().top()
    }

    fn viewport_bottom(&self) -> f64 {
        self.0.get_bounding_client_rect().bottom()
    }

    fn offset_top(&self) -> f64 {
        self.html()
            .map(|element| f64::from(element.offset_top()))
            .unwrap_or(0.0)
    }

    fn client_height(&self) -> f64 {
        f64::from(self.0.client_height())
    }
}

#[derive(Clone)]
pub struct BrowserEvents {
    window: Window,
}

impl BrowserEvents {
    pub fn attach() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }

    fn listen(target: &web_sys::EventTarget, event: &str, mut handler: Box<dyn FnMut()>) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        // Handlers stay registered for the lifetime of the page.
        closure.forget();
    }
}

impl EventSource for BrowserEvents {
    type El = BrowserElement;

    fn on_scroll(&self, handler: Box<dyn FnMut()>) {
        Self::listen(&self.window, "scroll", handler);
    }

    fn on_click(&self, target: &BrowserElement, prevent_default: bool, mut handler: Box<dyn FnMut()>) {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if prevent_default {
                event.prevent_default();
            }
            handler();
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = target
            .0
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn on_before_print(&self, handler: Box<dyn FnMut()>) {
        Self::listen(&self.window, "beforeprint", handler);
    }

    fn on_after_print(&self, handler: Box<dyn FnMut()>) {
        Self::listen(&self.window, "afterprint", handler);
    }
}
