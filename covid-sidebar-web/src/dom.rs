use covid_sidebar::Element;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Event;

/// A [`web_sys::Element`] seen through the sidebar's [`Element`] trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement(web_sys::Element);

impl DomElement {
    pub fn new(element: web_sys::Element) -> Self {
        DomElement(element)
    }

    pub fn as_element(&self) -> &web_sys::Element {
        &self.0
    }
}

/// A click listener registered on an element. Removed when dropped.
pub struct ClickListener {
    target: web_sys::Element,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for ClickListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("click", self.closure.as_ref().unchecked_ref());
    }
}

impl Element for DomElement {
    type Listener = ClickListener;

    fn query_selector(&self, selector: &str) -> Option<Self> {
        match self.0.query_selector(selector) {
            Ok(found) => found.map(DomElement),
            Err(err) => {
                log::warn!("invalid selector {}: {:?}", selector, err);
                None
            }
        }
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            log::warn!("cannot add class {}: {:?}", class, err);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().remove_1(class) {
            log::warn!("cannot remove class {}: {:?}", class, err);
        }
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn on_click(&self, mut handler: Box<dyn FnMut()>) -> ClickListener {
        // The selectors are `href="#"` anchors.
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            handler();
        });
        if let Err(err) = self
            .0
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            log::warn!("cannot listen for clicks: {:?}", err);
        }
        ClickListener {
            target: self.0.clone(),
            closure,
        }
    }
}
