use crate::{dom::require_class, Element, Result};
use std::{cell::RefCell, rc::Rc};

pub const OPENER_CLASS: &str = "sidebar-opener";
pub const CONTENT_CLASS: &str = "sidebar-content";
pub const OPEN_CLASS: &str = "content-sidebar-container-open";
pub const CLOSED_CLASS: &str = "content-sidebar-container-closed";
pub const OPEN_LABEL: &str = ">>";
pub const CLOSED_LABEL: &str = "<<";

/// Something the sidebar can display.
pub trait SidebarContent<E: Element> {
    /// The markup injected into the content area.
    fn render(&self) -> String;

    /// Called right after the markup of [`render`](SidebarContent::render) has
    /// been injected into `container`.
    fn on_mount(&mut self, container: &E) -> Result<()>;

    /// Called before the content is replaced or the sidebar goes away.
    fn on_unmount(&mut self) {}
}

struct OpenState<E> {
    container: E,
    toggle: E,
    is_open: bool,
}

impl<E: Element> OpenState<E> {
    fn open(&mut self) -> bool {
        if self.is_open {
            return false;
        }
        self.container.add_class(OPEN_CLASS);
        self.container.remove_class(CLOSED_CLASS);
        self.toggle.set_text(OPEN_LABEL);
        self.is_open = true;
        log::trace!("sidebar opened");
        true
    }

    fn close(&mut self) -> bool {
        if !self.is_open {
            return false;
        }
        self.container.add_class(CLOSED_CLASS);
        self.container.remove_class(OPEN_CLASS);
        self.toggle.set_text(CLOSED_LABEL);
        self.is_open = false;
        log::trace!("sidebar closed");
        true
    }

    fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }
}

/// Drives a sidebar container holding a `.sidebar-opener` toggle and a
/// `.sidebar-content` area.
pub struct SidebarController<E: Element> {
    state: Rc<RefCell<OpenState<E>>>,
    content_area: E,
    content: Option<Box<dyn SidebarContent<E>>>,
    _toggle_listener: E::Listener,
}

impl<E: Element> SidebarController<E> {
    /// Binds to `container` and starts closed. Clicking the toggle element
    /// opens or closes the sidebar.
    pub fn new(container: E) -> Result<Self> {
        let toggle = require_class(&container, OPENER_CLASS)?;
        let content_area = require_class(&container, CONTENT_CLASS)?;
        let state = Rc::new(RefCell::new(OpenState {
            container,
            toggle: toggle.clone(),
            is_open: false,
        }));
        let weak = Rc::downgrade(&state);
        let toggle_listener = toggle.on_click(Box::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().toggle();
            }
        }));
        Ok(SidebarController {
            state,
            content_area,
            content: None,
            _toggle_listener: toggle_listener,
        })
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open
    }

    /// Returns `false` if the sidebar was already open.
    pub fn open(&self) -> bool {
        self.state.borrow_mut().open()
    }

    /// Returns `false` if the sidebar was already closed.
    pub fn close(&self) -> bool {
        self.state.borrow_mut().close()
    }

    pub fn toggle(&self) {
        self.state.borrow_mut().toggle()
    }

    /// Unmounts the current content, injects the markup of `content` and
    /// mounts it.
    ///
    /// If mounting fails the markup stays in place but `content` is dropped,
    /// so no handler of it remains attached.
    pub fn set_content<C>(&mut self, content: C) -> Result<()>
    where
        C: SidebarContent<E> + 'static,
    {
        self.unmount();
        let mut content: Box<dyn SidebarContent<E>> = Box::new(content);
        self.content_area.set_inner_html(&content.render());
        content.on_mount(&self.content_area)?;
        self.content = Some(content);
        Ok(())
    }

    /// Unmounts the current content and empties the content area.
    pub fn clear_content(&mut self) {
        self.unmount();
        self.content_area.set_inner_html("");
    }

    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    fn unmount(&mut self) {
        if let Some(mut previous) = self.content.take() {
            previous.on_unmount();
        }
    }
}

impl<E: Element> Drop for SidebarController<E> {
    fn drop(&mut self) {
        self.unmount();
    }
}
