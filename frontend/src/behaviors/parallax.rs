use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::config::PARALLAX_DEBOUNCE_MS;
use crate::utils::dom::{self, Listener};
use crate::utils::timing::{debounce, BrowserScheduler, Debounced, Scheduler};

const MOUSE_RANGE_PX: f64 = 20.0;
const MOUSE_INTENSITY: f64 = 0.5;

/// Pointer position mapped to `[-10, 10]` px around the viewport centre.
pub fn mouse_offset(client: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    (client / extent - 0.5) * MOUSE_RANGE_PX
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroParallax {
    pub video_shift: f64,
    pub content_shift: f64,
    pub content_opacity: f64,
}

/// Hero layer positions while the hero is still on screen.
pub fn hero_parallax(scrolled: f64, viewport_height: f64) -> Option<HeroParallax> {
    if viewport_height <= 0.0 || scrolled >= viewport_height {
        return None;
    }
    Some(HeroParallax {
        video_shift: scrolled * 0.5,
        content_shift: scrolled * 0.3,
        content_opacity: (1.0 - (scrolled / viewport_height) * 1.2).max(0.0),
    })
}

fn apply_hero(container: &Element) {
    let (_, height) = dom::viewport_size();
    let Some(hero) = hero_parallax(f64::from(container.scroll_top()), height) else {
        return;
    };
    if let Ok(video) = dom::query_html(".hero .video-background video") {
        dom::set_style(
            &video,
            "transform",
            &format!("translateY({}px) scale(1.1)", hero.video_shift),
        );
    }
    if let Ok(content) = dom::query_html(".hero .hero-content") {
        dom::set_style(&content, "transform", &format!("translateY({}px)", hero.content_shift));
        dom::set_style(&content, "opacity", &hero.content_opacity.to_string());
    }
}

fn apply_mouse(x: f64, y: f64) {
    let (_, height) = dom::viewport_size();
    for element in dom::query_all(".section-bg") {
        let rect = element.get_bounding_client_rect();
        if rect.top() >= height || rect.bottom() <= 0.0 {
            continue;
        }
        if let Ok(element) = element.dyn_into::<HtmlElement>() {
            dom::set_style(&element, "--mouse-x", &format!("{}px", x * MOUSE_INTENSITY));
            dom::set_style(&element, "--mouse-y", &format!("{}px", y * MOUSE_INTENSITY));
        }
    }
}

/// Clears the parallax custom properties after a layout change.
pub fn reset() {
    for element in dom::query_all(".section-bg") {
        if let Ok(element) = element.dyn_into::<HtmlElement>() {
            for property in ["--mouse-x", "--mouse-y", "--parallax-offset"] {
                dom::set_style(&element, property, "0px");
            }
        }
    }
}

/// Keeps the parallax listeners and their debouncers alive.
pub struct Parallax {
    _listeners: Vec<Listener>,
    _mouse: Debounced<(f64, f64), BrowserScheduler>,
    _scroll: Debounced<(), BrowserScheduler>,
}

impl Parallax {
    pub fn install(container: &Element, scheduler: &BrowserScheduler) -> Self {
        debug!(
            "Parallax elements found: {}",
            dom::query_all(".section-bg").len()
        );
        let pointer = Rc::new(Cell::new((0.0, 0.0)));

        let mouse = {
            let pointer = Rc::clone(&pointer);
            debounce(scheduler.clone(), PARALLAX_DEBOUNCE_MS, move |(x, y): (f64, f64)| {
                pointer.set((x, y));
                apply_mouse(x, y);
            })
        };
        let scroll = {
            let container = container.clone();
            debounce(scheduler.clone(), PARALLAX_DEBOUNCE_MS, move |()| {
                apply_hero(&container)
            })
        };

        let mut listeners = Vec::new();
        let on_move = {
            let mouse = mouse.clone();
            move |event: web_sys::Event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    let (width, height) = dom::viewport_size();
                    mouse.call((
                        mouse_offset(f64::from(event.client_x()), width),
                        mouse_offset(f64::from(event.client_y()), height),
                    ));
                }
            }
        };
        listeners.extend(Listener::on_document("mousemove", on_move));
        let on_scroll = {
            let scroll = scroll.clone();
            move |_| scroll.call(())
        };
        listeners.extend(Listener::new(container, "scroll", on_scroll).ok());

        let container = container.clone();
        scheduler.schedule(
            100,
            Box::new(move || {
                apply_hero(&container);
                let (x, y) = pointer.get();
                apply_mouse(x, y);
            }),
        );

        Self {
            _listeners: listeners,
            _mouse: mouse,
            _scroll: scroll,
        }
    }
}
