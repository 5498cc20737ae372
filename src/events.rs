//! Handler registration for the browser lifecycle events the page consumes.
//! Abstract so tests can register against a fake source and fire events
//! synthetically.

use crate::dom::DomElement;

pub trait EventSource: Clone + 'static {
    type El: DomElement;

    fn on_scroll(&self, handler: Box<dyn FnMut()>);
    /// Register a click handler on `target`. With `prevent_default` set the
    /// browser's default action for the click is suppressed.
    fn on_click(&self, target: &Self::El, prevent_default: bool, handler: Box<dyn FnMut()>);
    fn on_before_print(&self, handler: Box<dyn FnMut()>);
    fn on_after_print(&self, handler: Box<dyn FnMut()>);
}
