use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, TouchEvent};
use yew::Callback;

use crate::config::{SWIPE_MAX_TIME_MS, SWIPE_MIN_DISTANCE_PX};
use crate::navigation::PageController;
use crate::utils::dom::Listener;

/// `distance` is start minus end, so a finger moving up is positive.
pub fn swipe_target(distance: f64, elapsed_ms: f64, current: usize, count: usize) -> Option<usize> {
    if distance.abs() < SWIPE_MIN_DISTANCE_PX || elapsed_ms > SWIPE_MAX_TIME_MS {
        return None;
    }
    if distance > 0.0 && current + 1 < count {
        Some(current + 1)
    } else if distance < 0.0 && current > 0 {
        Some(current - 1)
    } else {
        None
    }
}

pub fn listen(
    container: &Element,
    controller: PageController,
    navigate: Callback<usize>,
) -> Vec<Listener> {
    let start: Rc<Cell<Option<(f64, f64)>>> = Rc::new(Cell::new(None));

    let on_start = {
        let start = Rc::clone(&start);
        move |event: web_sys::Event| {
            let Some(event) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            if let Some(touch) = event.touches().get(0) {
                start.set(Some((f64::from(touch.client_y()), js_sys::Date::now())));
            }
        }
    };

    let on_end = move |event: web_sys::Event| {
        let Some((start_y, started_at)) = start.take() else {
            return;
        };
        let Some(event) = event.dyn_ref::<TouchEvent>() else {
            return;
        };
        let Some(touch) = event.changed_touches().get(0) else {
            return;
        };
        let distance = start_y - f64::from(touch.client_y());
        let elapsed = js_sys::Date::now() - started_at;
        if let Some(index) = swipe_target(
            distance,
            elapsed,
            controller.current_section(),
            controller.section_count(),
        ) {
            navigate.emit(index);
        }
    };

    [
        Listener::new(container, "touchstart", on_start),
        Listener::new(container, "touchend", on_end),
    ]
    .into_iter()
    .filter_map(Result::ok)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upward_swipe_moves_forward() {
        assert_eq!(swipe_target(80.0, 200.0, 1, 4), Some(2));
        assert_eq!(swipe_target(80.0, 200.0, 3, 4), None);
    }

    #[test]
    fn downward_swipe_moves_back() {
        assert_eq!(swipe_target(-60.0, 120.0, 1, 4), Some(0));
        assert_eq!(swipe_target(-60.0, 120.0, 0, 4), None);
    }

    #[test]
    fn short_or_slow_gestures_are_ignored() {
        assert_eq!(swipe_target(49.0, 100.0, 1, 4), None);
        assert_eq!(swipe_target(50.0, 300.0, 1, 4), Some(2));
        assert_eq!(swipe_target(200.0, 301.0, 1, 4), None);
    }
}
