use std::cell::Cell;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    window, AddEventListenerOptions, Document, Element, EventTarget, HtmlElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::errors::{describe_js, LandingError};

/// Events whose handlers never call `preventDefault`, registered passive so
/// the browser can keep scrolling on the compositor thread.
const PASSIVE_EVENTS: [&str; 5] = ["scroll", "touchstart", "touchmove", "touchend", "wheel"];

fn is_passive(event: &str) -> bool {
    PASSIVE_EVENTS.contains(&event)
}

/// Logs a failed DOM call at debug level and carries on.
pub fn log_failure<T, E>(action: &str, result: Result<T, E>) -> Option<T>
where
    E: Into<LandingError>,
{
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Failed to {}: {}", action, e.into());
            None
        }
    }
}

/// An event subscription that is removed again when dropped.
/// Scroll, touch and wheel listeners are passive.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Self, LandingError>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(web_sys::Event)>);
        if is_passive(event) {
            let options = AddEventListenerOptions::new();
            options.set_passive(true);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )?;
        } else {
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        }
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Same as [`Listener::new`] on the window; a missing window yields `None`.
    pub fn on_window<F>(event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let window = window()?;
        Self::new(&window, event, callback)
            .map_err(|e| debug!("Failed to listen for {}: {}", event, e))
            .ok()
    }

    pub fn on_document<F>(event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let document = document()?;
        Self::new(&document, event, callback)
            .map_err(|e| debug!("Failed to listen for {}: {}", event, e))
            .ok()
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        log_failure(
            "remove listener",
            self.target
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref()),
        );
    }
}

/// Watches elements and reports each one the first time it becomes visible.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn once<F>(threshold: f64, root_margin: &str, mut on_visible: F) -> Result<Self, LandingError>
    where
        F: FnMut(&Element) + 'static,
    {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let target = entry.target();
                        on_visible(&target);
                        observer.unobserve(&target);
                    }
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn query(selector: &str) -> Result<Element, LandingError> {
    document()
        .and_then(|doc| doc.query_selector(selector).ok().flatten())
        .ok_or_else(|| LandingError::missing(selector))
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_html(selector: &str) -> Result<HtmlElement, LandingError> {
    query(selector)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| LandingError::missing(selector))
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        debug!("Failed to set {}: {}", property, describe_js(&e));
    }
}

pub fn viewport_size() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (read(window.inner_width()), read(window.inner_height()))
}

thread_local! {
    static SCROLL_LOCKS: Cell<u32> = Cell::new(0);
}

/// Counts the features (preloader, open menu) that need the page frozen.
/// Body overflow is `hidden` while at least one lock is held.
pub fn lock_body_scroll() {
    let held = SCROLL_LOCKS.with(|locks| {
        locks.set(locks.get() + 1);
        locks.get()
    });
    apply_body_overflow(held);
}

pub fn unlock_body_scroll() {
    let held = SCROLL_LOCKS.with(|locks| {
        locks.set(locks.get().saturating_sub(1));
        locks.get()
    });
    apply_body_overflow(held);
}

fn apply_body_overflow(locks: u32) {
    if let Some(body) = document().and_then(|doc| doc.body()) {
        set_style(&body, "overflow", if locks > 0 { "hidden" } else { "auto" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_and_touch_listeners_are_passive() {
        for event in ["scroll", "touchstart", "touchend"] {
            assert!(is_passive(event), "{} should be passive", event);
        }
        // Keyboard navigation cancels the default scroll.
        assert!(!is_passive("keydown"));
        assert!(!is_passive("mousemove"));
        assert!(!is_passive("resize"));
    }

    #[test]
    fn log_failure_keeps_successes_and_swallows_errors() {
        assert_eq!(log_failure::<_, LandingError>("read", Ok(7)), Some(7));
        assert_eq!(
            log_failure::<(), _>("add class", Err(LandingError::missing("body"))),
            None
        );
    }
}
