//! Outside Click Listener
//!
//! Document-level `mousedown` listener that exists only while a card's menu
//! is open. The listener is owned by a [`Disposer`]; dropping the disposer
//! detaches it.

use leptos::html;
use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Runs its release function exactly once, on `dispose` or drop
pub struct Disposer {
    release: Option<Box<dyn FnOnce()>>,
}

impl Disposer {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn dispose(self) {}
}

impl Drop for Disposer {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Holds at most one attached listener and keeps it in step with a flag
#[derive(Default)]
pub struct ListenerSlot {
    current: Option<Disposer>,
}

impl ListenerSlot {
    /// Attach on the closed→open edge, detach on the open→closed edge
    pub fn sync(&mut self, open: bool, attach: impl FnOnce() -> Option<Disposer>) {
        match (open, self.current.is_some()) {
            (true, false) => self.current = attach(),
            (false, true) => self.clear(),
            _ => {}
        }
    }

    /// Detach unconditionally (card teardown)
    pub fn clear(&mut self) {
        if let Some(disposer) = self.current.take() {
            disposer.dispose();
        }
    }

    pub fn is_attached(&self) -> bool {
        self.current.is_some()
    }
}

/// Listen for `mousedown` on the document and call `on_outside` when the
/// target lies outside `region`.
///
/// Returns `None` if there is no document to attach to.
pub fn attach_outside_click(
    region: NodeRef<html::Div>,
    on_outside: impl Fn() + 'static,
) -> Option<Disposer> {
    let doc = web_sys::window()?.document()?;

    let on_mousedown = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(region) = region.get_untracked() else {
            return;
        };
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !region.contains(target.as_ref()) {
            on_outside();
        }
    });

    if let Err(e) = doc.add_event_listener_with_callback("mousedown", on_mousedown.as_ref().unchecked_ref()) {
        warn!("[MENU] could not attach outside-click listener: {:?}", e);
        return None;
    }
    debug!("[MENU] outside-click listener attached");

    Some(Disposer::new(move || {
        let _ = doc.remove_event_listener_with_callback("mousedown", on_mousedown.as_ref().unchecked_ref());
        debug!("[MENU] outside-click listener detached");
    }))
}
