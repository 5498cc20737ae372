//! In-memory stand-ins for the page capabilities, so handler logic runs
//! under plain `cargo test` with no browser.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::dom::{Dom, DomElement};
use crate::events::EventSource;
use crate::prefs::PreferenceStore;

#[derive(Default)]
struct ElementState {
    id: String,
    attributes: BTreeMap<String, String>,
    text: String,
    styles: BTreeMap<String, String>,
    classes: Vec<String>,
    viewport_top: f64,
    viewport_bottom: f64,
    offset_top: f64,
    height: f64,
}

/// One fake element; cheap to clone, clones share state.
#[derive(Clone, Default)]
pub struct FakeElement(Rc<RefCell<ElementState>>);

impl FakeElement {
    pub fn new(id: &str) -> Self {
        let element = Self::default();
        element.0.borrow_mut().id = id.to_string();
        element
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.0.borrow_mut().text = text.to_string();
        self
    }

    pub fn with_viewport_box(self, top: f64, bottom: f64) -> Self {
        {
            let mut state = self.0.borrow_mut();
            state.viewport_top = top;
            state.viewport_bottom = bottom;
        }
        self
    }

    pub fn with_section_metrics(self, offset_top: f64, height: f64) -> Self {
        {
            let mut state = self.0.borrow_mut();
            state.offset_top = offset_top;
            state.height = height;
        }
        self
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }
}

impl DomElement for FakeElement {
    fn id(&self) -> String {
        self.0.borrow().id.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn clear_style(&self, property: &str) {
        self.0.borrow_mut().styles.remove(property);
    }

    fn remove_class(&self, name: &str) {
        self.0.borrow_mut().classes.retain(|class| class != name);
    }

    fn toggle_class(&self, name: &str) {
        let mut state = self.0.borrow_mut();
        if let Some(position) = state.classes.iter().position(|class| class == name) {
            state.classes.remove(position);
        } else {
            state.classes.push(name.to_string());
        }
    }

    fn has_class(&self, name: &str) -> bool {
        self.0.borrow().classes.iter().any(|class| class == name)
    }

    fn viewport_top(&self) -> f64 {
        self.0.borrow().viewport_top
    }

    fn viewport_bottom(&self) -> f64 {
        self.0.borrow().viewport_bottom
    }

    fn offset_top(&self) -> f64 {
        self.0.borrow().offset_top
    }

    fn client_height(&self) -> f64 {
        self.0.borrow().height
    }
}

#[derive(Default)]
struct PageState {
    by_id: BTreeMap<String, FakeElement>,
    by_selector: BTreeMap<String, Vec<FakeElement>>,
    children: BTreeMap<(String, String), Vec<FakeElement>>,
    scroll_y: f64,
    viewport_height: f64,
    scroll_requests: Vec<f64>,
}

/// Fake document. It does no CSS matching: elements are registered under
/// the selector strings they should answer to, in document order.
#[derive(Clone, Default)]
pub struct FakeDom(Rc<RefCell<PageState>>);

impl FakeDom {
    pub fn insert(&self, selectors: &[&str], element: FakeElement) -> FakeElement {
        let mut state = self.0.borrow_mut();
        let id = element.id();
        if !id.is_empty() {
            state.by_id.insert(id, element.clone());
        }
        for selector in selectors {
            state
                .by_selector
                .entry(selector.to_string())
                .or_default()
                .push(element.clone());
        }
        element
    }

    pub fn insert_child(
        &self,
        parent: &FakeElement,
        selector: &str,
        element: FakeElement,
    ) -> FakeElement {
        self.0
            .borrow_mut()
            .children
            .entry((parent.id(), selector.to_string()))
            .or_default()
            .push(element.clone());
        element
    }

    pub fn set_scroll_y(&self, value: f64) {
        self.0.borrow_mut().scroll_y = value;
    }

    pub fn set_viewport_height(&self, value: f64) {
        self.0.borrow_mut().viewport_height = value;
    }

    pub fn scroll_requests(&self) -> Vec<f64> {
        self.0.borrow().scroll_requests.clone()
    }
}

impl Dom for FakeDom {
    type El = FakeElement;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.0.borrow().by_id.get(id).cloned()
    }

    fn select(&self, selector: &str) -> Vec<FakeElement> {
        self.0
            .borrow()
            .by_selector
            .get(selector)
            .cloned()
            .unwrap_or_default()
    }

    fn select_in(&self, root: &FakeElement, selector: &str) -> Vec<FakeElement> {
        self.0
            .borrow()
            .children
            .get(&(root.id(), selector.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    fn scroll_y(&self) -> f64 {
        self.0.borrow().scroll_y
    }

    fn viewport_height(&self) -> f64 {
        self.0.borrow().viewport_height
    }

    fn scroll_to(&self, top: f64) {
        self.0.borrow_mut().scroll_requests.push(top);
    }
}

type Handler = Box<dyn FnMut()>;

#[derive(Default)]
struct EventState {
    scroll: Vec<Handler>,
    clicks: Vec<(String, bool, Handler)>,
    before_print: Vec<Handler>,
    after_print: Vec<Handler>,
}

/// Records registered handlers and fires them on demand.
#[derive(Clone, Default)]
pub struct FakeEvents(Rc<RefCell<EventState>>);

impl FakeEvents {
    pub fn fire_scroll(&self) {
        for handler in self.0.borrow_mut().scroll.iter_mut() {
            handler();
        }
    }

    /// Fire every click handler registered on the element with `id`, in
    /// registration order. Returns whether any handler suppressed the
    /// default action.
    pub fn click(&self, id: &str) -> bool {
        let mut prevented = false;
        for (target, prevent_default, handler) in self.0.borrow_mut().clicks.iter_mut() {
            if target == id {
                prevented |= *prevent_default;
                handler();
            }
        }
        prevented
    }

    pub fn fire_before_print(&self) {
        for handler in self.0.borrow_mut().before_print.iter_mut() {
            handler();
        }
    }

    pub fn fire_after_print(&self) {
        for handler in self.0.borrow_mut().after_print.iter_mut() {
            handler();
        }
    }
}

impl EventSource for FakeEvents {
    type El = FakeElement;

    fn on_scroll(&self, handler: Handler) {
        self.0.borrow_mut().scroll.push(handler);
    }

    fn on_click(&self, target: &FakeElement, prevent_default: bool, handler: Handler) {
        self.0
            .borrow_mut()
            .clicks
            .push((target.id(), prevent_default, handler));
    }

    fn on_before_print(&self, handler: Handler) {
        self.0.borrow_mut().before_print.push(handler);
    }

    fn on_after_print(&self, handler: Handler) {
        self.0.borrow_mut().after_print.push(handler);
    }
}

/// In-memory preference store for persistence round-trips.
#[derive(Clone, Default)]
pub struct MemoryPrefs(Rc<RefCell<Option<String>>>);

impl MemoryPrefs {
    pub fn stored(&self) -> Option<String> {
        self.0.borrow().clone()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn load(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn store(&self, value: &str) {
        *self.0.borrow_mut() = Some(value.to_string());
    }
}
