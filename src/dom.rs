use crate::{Error, Result};

/// The slice of a DOM element the sidebar needs.
///
/// Handles are cheap to clone and refer to the same node.
pub trait Element: Clone + 'static {
    /// Keeps a click handler attached. Dropping it detaches the handler.
    type Listener: 'static;

    /// First descendant matching a CSS selector (`#id` or `.class`).
    fn query_selector(&self, selector: &str) -> Option<Self>;

    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    fn set_text(&self, text: &str);

    /// Replaces all children with parsed `html`.
    fn set_inner_html(&self, html: &str);

    fn on_click(&self, handler: Box<dyn FnMut()>) -> Self::Listener;
}

/// Looks up a descendant by id.
pub fn require_id<E: Element>(container: &E, id: &str) -> Result<E> {
    container
        .query_selector(&format!("#{}", id))
        .ok_or_else(|| Error::MissingElement(id.to_string()))
}

/// Looks up a descendant by class name.
pub fn require_class<E: Element>(container: &E, class: &str) -> Result<E> {
    container
        .query_selector(&format!(".{}", class))
        .ok_or_else(|| Error::MissingElement(class.to_string()))
}
