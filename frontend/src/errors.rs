use log::error;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ErrorEvent, PromiseRejectionEvent};

#[derive(Debug, Error)]
pub enum LandingError {
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("media playback failed: {0}")]
    Media(String),
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("javascript error: {0}")]
    Js(String),
}

impl LandingError {
    pub fn missing(selector: &str) -> Self {
        LandingError::MissingElement(selector.to_string())
    }
}

/// Renders an opaque JS value for a log line.
pub fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

impl From<JsValue> for LandingError {
    fn from(value: JsValue) -> Self {
        LandingError::Js(describe_js(&value))
    }
}

/// Logs uncaught errors and rejected promises for the rest of the page's life.
pub fn install_global_handlers() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let on_error = Closure::<dyn Fn(ErrorEvent)>::new(|e: ErrorEvent| {
        error!(
            "JavaScript error: {} ({}:{})",
            e.message(),
            e.filename(),
            e.lineno()
        );
    });
    if let Err(e) =
        window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
    {
        error!("Failed to install error handler: {}", describe_js(&e));
    }
    on_error.forget();

    let on_rejection = Closure::<dyn Fn(PromiseRejectionEvent)>::new(|e: PromiseRejectionEvent| {
        error!("Unhandled promise rejection: {}", describe_js(&e.reason()));
        e.prevent_default();
    });
    if let Err(e) = window.add_event_listener_with_callback(
        "unhandledrejection",
        on_rejection.as_ref().unchecked_ref(),
    ) {
        error!("Failed to install rejection handler: {}", describe_js(&e));
    }
    on_rejection.forget();
}
