//! Capability traits over the document, so page logic can run against the
//! real DOM in the browser and an in-memory fake in tests.

pub mod browser;

/// Read/write access to a single element of the page.
pub trait DomElement: Clone + 'static {
    fn id(&self) -> String;
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_text(&self, text: &str);
    fn set_style(&self, property: &str, value: &str);
    /// Drop an inline style so the stylesheet value applies again.
    fn clear_style(&self, property: &str);
    fn remove_class(&self, name: &str);
    fn toggle_class(&self, name: &str);
    fn has_class(&self, name: &str) -> bool;
    /// Top edge of the bounding box, relative to the viewport.
    fn viewport_top(&self) -> f64;
    /// Bottom edge of the bounding box, relative to the viewport.
    fn viewport_bottom(&self) -> f64;
    fn offset_top(&self) -> f64;
    fn client_height(&self) -> f64;
}

/// Document access: element queries plus the scroll metrics the effects read.
pub trait Dom: Clone + 'static {
    type El: DomElement;

    fn element_by_id(&self, id: &str) -> Option<Self::El>;
    fn select(&self, selector: &str) -> Vec<Self::El>;
    fn select_in(&self, root: &Self::El, selector: &str) -> Vec<Self::El>;
    fn scroll_y(&self) -> f64;
    fn viewport_height(&self) -> f64;
    /// Request a smooth scroll of the viewport to `top`. Fire and forget.
    fn scroll_to(&self, top: f64);
}
