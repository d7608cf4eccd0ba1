use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Reflect};
use log::{debug, info};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

use crate::config::SECTION_VIEW_SETTLE_MS;
use crate::errors::{describe_js, LandingError};
use crate::utils::timing::{debounce, Debounced, Scheduler};

#[derive(Serialize, Debug, PartialEq)]
pub struct SectionView {
    pub page_title: String,
    pub page_location: String,
}

impl SectionView {
    pub fn new(section_id: &str, origin: &str, path: &str) -> Self {
        Self {
            page_title: format!("Section: {}", section_id),
            page_location: format!("{}{}#{}", origin, path, section_id),
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct FormSubmit {
    pub form_type: String,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct ButtonClick {
    pub event_category: &'static str,
    pub event_label: String,
}

impl ButtonClick {
    pub fn new(button: &str, section: &str) -> Self {
        Self {
            event_category: "Button",
            event_label: format!("{} - {}", button, section),
        }
    }
}

/// A global function installed by a third-party snippet, if any.
fn global_function(name: &str) -> Option<Function> {
    let window = window()?;
    Reflect::get(&window, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn send<T: Serialize>(event: &str, params: &T) {
    let Some(gtag) = global_function("gtag") else {
        return;
    };
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let result = params
        .serialize(&serializer)
        .map_err(|e| LandingError::Js(e.to_string()))
        .and_then(|params| {
            gtag.call3(
                &JsValue::NULL,
                &JsValue::from_str("event"),
                &JsValue::from_str(event),
                &params,
            )
            .map_err(|e| LandingError::Js(describe_js(&e)))
        });
    match result {
        Ok(_) => debug!("Analytics event sent: {}", event),
        Err(e) => debug!("Analytics event {} dropped: {}", event, e),
    }
}

pub fn track_section_view(section_id: &str) {
    let Some(location) = window().map(|w| w.location()) else {
        return;
    };
    let origin = location.origin().unwrap_or_default();
    let path = location.pathname().unwrap_or_default();
    send("page_view", &SectionView::new(section_id, &origin, &path));
}

/// Reports a section only once scrolling has settled on it, so sections
/// passed through during a smooth scroll are not counted.
pub struct SectionViews<S: Scheduler> {
    settled: Debounced<String, S>,
}

impl<S: Scheduler> Clone for SectionViews<S> {
    fn clone(&self) -> Self {
        Self {
            settled: self.settled.clone(),
        }
    }
}

impl<S: Scheduler + 'static> SectionViews<S> {
    pub fn new(scheduler: S, report: impl Fn(&str) + 'static) -> Self {
        let last: Rc<RefCell<Option<String>>> = Rc::default();
        let settled = debounce(scheduler, SECTION_VIEW_SETTLE_MS, move |id: String| {
            if last.borrow().as_deref() == Some(id.as_str()) {
                return;
            }
            report(&id);
            *last.borrow_mut() = Some(id);
        });
        Self { settled }
    }

    pub fn record(&self, section_id: &str) {
        self.settled.call(section_id.to_string());
    }
}

pub fn track_form_submission(form_type: &str) {
    send(
        "form_submit",
        &FormSubmit {
            form_type: form_type.to_string(),
        },
    );
}

pub fn track_button_click(button: &str, section: &str) {
    send("click", &ButtonClick::new(button, section));
}

/// Logs which analytics backends the page was served with.
pub fn announce() {
    if global_function("gtag").is_some() {
        info!("Google Analytics initialized");
    }
    if global_function("ym").is_some() {
        info!("Yandex Metrica initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::timing::ManualScheduler;
    use serde_json::json;

    fn section_views(clock: &ManualScheduler) -> (Rc<RefCell<Vec<String>>>, SectionViews<ManualScheduler>) {
        let reported = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&reported);
        let views = SectionViews::new(clock.clone(), move |id: &str| {
            sink.borrow_mut().push(id.to_string())
        });
        (reported, views)
    }

    #[test]
    fn smooth_scroll_reports_only_the_destination() {
        let clock = ManualScheduler::new();
        let (reported, views) = section_views(&clock);

        for id in ["hero", "about", "target-audience", "what-we-offer"] {
            views.record(id);
            clock.advance(100.0);
        }
        assert!(reported.borrow().is_empty());
        clock.advance(f64::from(SECTION_VIEW_SETTLE_MS));
        assert_eq!(*reported.borrow(), vec!["what-we-offer"]);
    }

    #[test]
    fn returning_to_the_same_section_is_not_reported_twice() {
        let clock = ManualScheduler::new();
        let (reported, views) = section_views(&clock);

        views.record("about");
        clock.advance(1000.0);
        views.record("team");
        clock.advance(100.0);
        views.record("about");
        clock.advance(1000.0);
        views.record("team");
        clock.advance(1000.0);
        assert_eq!(*reported.borrow(), vec!["about", "team"]);
    }

    #[test]
    fn section_view_params() {
        let view = SectionView::new("about", "https://emil.example", "/");
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({
                "page_title": "Section: about",
                "page_location": "https://emil.example/#about",
            })
        );
    }

    #[test]
    fn button_click_params() {
        assert_eq!(
            serde_json::to_value(ButtonClick::new("download", "investors")).unwrap(),
            json!({
                "event_category": "Button",
                "event_label": "download - investors",
            })
        );
    }

    #[test]
    fn form_submit_params() {
        let submit = FormSubmit {
            form_type: "contact".into(),
        };
        assert_eq!(
            serde_json::to_value(&submit).unwrap(),
            json!({ "form_type": "contact" })
        );
    }
}
