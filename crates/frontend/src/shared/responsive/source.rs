//! Host viewport signals: size measurement, resize notifications and the
//! touch-capability check.

use super::viewport::Viewport;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

/// Events that can change the viewport.
const VIEWPORT_EVENTS: [&str; 2] = ["resize", "orientationchange"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Where viewport measurements and change notifications come from.
///
/// Every `add_listener` must be matched by exactly one `remove_listener`.
pub trait ViewportSource {
    /// Current viewport, or `None` when it cannot be measured.
    fn measure(&self) -> Option<Viewport>;

    /// Whether the device supports touch input. Read once at start-up.
    fn touch_capable(&self) -> bool;

    fn add_listener(&self, listener: Rc<dyn Fn()>) -> ListenerId;

    fn remove_listener(&self, id: ListenerId);
}

/// `window` resize/orientation events.
#[derive(Default)]
pub struct WindowViewportSource {
    next_id: Cell<u64>,
    closures: RefCell<HashMap<ListenerId, Closure<dyn FnMut()>>>,
}

impl WindowViewportSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewportSource for WindowViewportSource {
    fn measure(&self) -> Option<Viewport> {
        let window = window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(Viewport::new(width.max(0.0) as u32, height.max(0.0) as u32))
    }

    fn touch_capable(&self) -> bool {
        let Some(window) = window() else {
            return false;
        };
        window.navigator().max_touch_points() > 0
            || js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false)
    }

    fn add_listener(&self, listener: Rc<dyn Fn()>) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let closure = Closure::wrap(Box::new(move || listener()) as Box<dyn FnMut()>);
        let Some(window) = window() else {
            log::warn!("viewport listener {} not registered: no window", id.0);
            return id;
        };
        let mut registered = 0;
        for event in VIEWPORT_EVENTS {
            let outcome =
                window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            if checked("add", event, outcome) {
                registered += 1;
            }
        }
        // Nothing to release later if no event took the callback.
        if registered > 0 {
            self.closures.borrow_mut().insert(id, closure);
            log::debug!("viewport listener {} registered", id.0);
        }
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        let Some(closure) = self.closures.borrow_mut().remove(&id) else {
            return;
        };
        if let Some(window) = window() {
            for event in VIEWPORT_EVENTS {
                let outcome = window
                    .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
                checked("remove", event, outcome);
            }
        }
        log::debug!("viewport listener {} released", id.0);
    }
}

/// Logs a failed listener call. Returns whether it succeeded.
fn checked<E: fmt::Debug>(action: &str, event: &str, outcome: Result<(), E>) -> bool {
    match outcome {
        Ok(()) => true,
        Err(e) => {
            log::warn!("failed to {} '{}' listener: {:?}", action, event, e);
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::BTreeMap;

    /// In-memory source that records listener registrations.
    #[derive(Default)]
    pub struct SpyViewportSource {
        viewport: Cell<Option<Viewport>>,
        touch: Cell<bool>,
        next_id: Cell<u64>,
        listeners: RefCell<BTreeMap<u64, Rc<dyn Fn()>>>,
        pub registrations: Cell<usize>,
        pub releases: Cell<usize>,
    }

    impl SpyViewportSource {
        pub fn with_viewport(width: u32, height: u32) -> Rc<Self> {
            let spy = Self::default();
            spy.viewport.set(Some(Viewport::new(width, height)));
            Rc::new(spy)
        }

        pub fn set_touch(&self, touch: bool) {
            self.touch.set(touch);
        }

        pub fn active_listeners(&self) -> usize {
            self.listeners.borrow().len()
        }

        /// Changes the viewport and fires every registered listener.
        pub fn resize(&self, width: u32, height: u32) {
            self.viewport.set(Some(Viewport::new(width, height)));
            self.fire();
        }

        /// Changes the viewport without notifying, as several resize events
        /// arriving within one frame would.
        pub fn resize_silently(&self, width: u32, height: u32) {
            self.viewport.set(Some(Viewport::new(width, height)));
        }

        pub fn fire(&self) {
            let listeners: Vec<Rc<dyn Fn()>> = self.listeners.borrow().values().cloned().collect();
            for listener in listeners {
                listener();
            }
        }
    }

    impl ViewportSource for SpyViewportSource {
        fn measure(&self) -> Option<Viewport> {
            self.viewport.get()
        }

        fn touch_capable(&self) -> bool {
            self.touch.get()
        }

        fn add_listener(&self, listener: Rc<dyn Fn()>) -> ListenerId {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().insert(id, listener);
            self.registrations.set(self.registrations.get() + 1);
            ListenerId(id)
        }

        fn remove_listener(&self, id: ListenerId) {
            if self.listeners.borrow_mut().remove(&id.0).is_some() {
                self.releases.set(self.releases.get() + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_reports_failure() {
        assert!(checked::<&str>("add", "resize", Ok(())));
        assert!(!checked("add", "resize", Err("not allowed")));
        assert!(!checked("remove", "orientationchange", Err(42)));
    }
}
