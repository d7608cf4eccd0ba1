//! `window.landing` helpers for poking at the page from the browser console.
//! Installed on every host; local hosts also announce them in the log.

use js_sys::{Object, Reflect};
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;
use yew::Callback;

use crate::components::notification::{NotificationKind, Notifier};
use crate::config::{self, VERSION};
use crate::errors::LandingError;
use crate::navigation::PageController;
use crate::utils::dom::log_failure;

const GLOBAL_NAME: &str = "landing";

type ConsoleFn = dyn Fn(JsValue, JsValue) -> JsValue;

/// What the console helpers act on.
pub struct DebugTargets {
    pub controller: PageController,
    pub navigate: Callback<usize>,
    pub notifier: Notifier,
    pub open_partner_form: Callback<()>,
}

pub struct DebugHandle {
    _closures: Vec<Closure<ConsoleFn>>,
}

impl DebugHandle {
    pub fn expose(targets: DebugTargets) -> Option<Self> {
        let local = window()
            .and_then(|w| w.location().hostname().ok())
            .map(|hostname| config::is_debug_host(&hostname))
            .unwrap_or(false);
        match Self::install(targets) {
            Ok(handle) => {
                if local {
                    info!("Debug helpers available at window.{}", GLOBAL_NAME);
                } else {
                    debug!("Console helpers installed at window.{}", GLOBAL_NAME);
                }
                Some(handle)
            }
            Err(e) => {
                warn!("Debug helpers not installed: {}", e);
                None
            }
        }
    }

    fn install(targets: DebugTargets) -> Result<Self, LandingError> {
        let DebugTargets {
            controller,
            navigate,
            notifier,
            open_partner_form,
        } = targets;
        let window = window().ok_or_else(|| LandingError::Js("no window".into()))?;
        let object = Object::new();
        Reflect::set(&object, &"version".into(), &VERSION.into())?;

        let mut closures: Vec<Closure<ConsoleFn>> = Vec::new();
        let mut export = |name: &str, f: Box<ConsoleFn>| -> Result<(), LandingError> {
            let closure = Closure::wrap(f);
            Reflect::set(&object, &name.into(), closure.as_ref().unchecked_ref())?;
            closures.push(closure);
            Ok(())
        };

        let c = controller.clone();
        export(
            "getCurrentSection",
            Box::new(move |_, _| JsValue::from(c.current_section() as u32)),
        )?;
        let c = controller.clone();
        export(
            "getSections",
            Box::new(move |_, _| {
                let ids: Vec<String> = c.sections().iter().map(|s| s.id.clone()).collect();
                serde_wasm_bindgen::to_value(&ids).unwrap_or(JsValue::UNDEFINED)
            }),
        )?;
        export(
            "scrollToSection",
            Box::new(move |index, _| {
                if let Some(index) = index.as_f64().filter(|i| *i >= 0.0) {
                    navigate.emit(index as usize);
                }
                JsValue::UNDEFINED
            }),
        )?;
        let c = controller.clone();
        export(
            "updateActiveSection",
            Box::new(move |_, _| JsValue::from(c.update_active_section() as u32)),
        )?;
        let c = controller.clone();
        export(
            "showHeader",
            Box::new(move |_, _| {
                c.reveal();
                JsValue::UNDEFINED
            }),
        )?;
        export(
            "hideHeader",
            Box::new(move |_, _| {
                controller.conceal();
                JsValue::UNDEFINED
            }),
        )?;
        export(
            "showNotification",
            Box::new(move |message, kind| {
                let kind = kind
                    .as_string()
                    .map(|name| NotificationKind::from_name(&name))
                    .unwrap_or_default();
                notifier.show(message.as_string().unwrap_or_default(), kind);
                JsValue::UNDEFINED
            }),
        )?;
        export(
            "openPartnerForm",
            Box::new(move |_, _| {
                open_partner_form.emit(());
                JsValue::UNDEFINED
            }),
        )?;

        Reflect::set(&window, &GLOBAL_NAME.into(), &object)?;
        Ok(Self { _closures: closures })
    }
}

impl Drop for DebugHandle {
    fn drop(&mut self) {
        if let Some(window) = window() {
            log_failure(
                "remove debug helpers",
                Reflect::delete_property(&window, &GLOBAL_NAME.into()),
            );
        }
    }
}
