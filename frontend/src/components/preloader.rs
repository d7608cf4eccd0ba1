use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::info;
use yew::prelude::*;

use crate::utils::dom::{self, Listener};

const COMPLETE_DELAY_MS: u32 = 500;
const BACKUP_DELAY_MS: u32 = 1000;
const BACKUP_HIDE_DELAY_MS: u32 = 300;
const REMOVE_DELAY_MS: u32 = 500;

/// Simulated loading progress. `increment` is picked once per page load,
/// each tick adds it plus a little jitter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadProgress {
    value: f64,
    increment: f64,
}

impl LoadProgress {
    /// `roll` in `[0, 1)` picks the base increment in `[2, 5)`.
    pub fn new(roll: f64) -> Self {
        Self {
            value: 0.0,
            increment: roll * 3.0 + 2.0,
        }
    }

    /// Advances one tick; `roll` in `[0, 1)` adds up to 2 points of jitter.
    /// Returns true once loading is complete.
    pub fn tick(&mut self, roll: f64) -> bool {
        self.value = (self.value + self.increment + roll * 2.0).min(100.0);
        self.is_complete()
    }

    pub fn finish(&mut self) {
        self.value = 100.0;
    }

    pub fn is_complete(&self) -> bool {
        self.value >= 100.0
    }

    pub fn percent(&self) -> u32 {
        self.value.floor() as u32
    }

    pub fn bar_width(&self) -> String {
        format!("{}%", self.value)
    }
}

/// Tick interval in `[100, 200)` ms.
pub fn tick_interval(roll: f64) -> u32 {
    100 + (roll * 100.0) as u32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloaderPhase {
    Loading,
    /// Fading out.
    Hidden,
    Removed,
}

fn random() -> f64 {
    js_sys::Math::random()
}

fn page_loaded() -> bool {
    dom::document()
        .map(|doc| doc.ready_state() == "complete")
        .unwrap_or(false)
}

#[function_component(Preloader)]
pub fn preloader() -> Html {
    let progress = use_state(|| LoadProgress::new(0.0));
    let phase = use_state(|| PreloaderPhase::Loading);

    {
        let progress = progress.setter();
        let phase = phase.setter();
        use_effect_with_deps(
            move |_| {
                dom::lock_body_scroll();

                let model = Rc::new(RefCell::new(LoadProgress::new(random())));
                let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let hidden = Rc::new(RefCell::new(false));

                let hide = {
                    let phase = phase.clone();
                    let hidden = hidden.clone();
                    Rc::new(move || {
                        if hidden.replace(true) {
                            return;
                        }
                        info!("Preloader finished");
                        phase.set(PreloaderPhase::Hidden);
                        dom::unlock_body_scroll();
                        let phase = phase.clone();
                        Timeout::new(REMOVE_DELAY_MS, move || phase.set(PreloaderPhase::Removed))
                            .forget();
                    })
                };

                let tick = {
                    let model = model.clone();
                    let interval_handle = interval.clone();
                    let progress = progress.clone();
                    let hide = hide.clone();
                    move || {
                        if model.borrow().is_complete() {
                            return;
                        }
                        let complete = model.borrow_mut().tick(random());
                        progress.set(*model.borrow());
                        if complete {
                            // Still inside the interval's own callback, so drop it on the next turn.
                            if let Some(stopped) = interval_handle.borrow_mut().take() {
                                Timeout::new(0, move || drop(stopped)).forget();
                            }
                            let hide = hide.clone();
                            Timeout::new(COMPLETE_DELAY_MS, move || hide()).forget();
                        }
                    }
                };
                *interval.borrow_mut() = Some(Interval::new(tick_interval(random()), tick));

                // Backup in case the simulated progress is slower than the real load.
                let on_load = {
                    let model = model.clone();
                    let interval = interval.clone();
                    let hidden = hidden.clone();
                    move || {
                        let model = model.clone();
                        let interval = interval.clone();
                        let progress = progress.clone();
                        let hidden = hidden.clone();
                        let hide = hide.clone();
                        Timeout::new(BACKUP_DELAY_MS, move || {
                            if *hidden.borrow() {
                                return;
                            }
                            interval.borrow_mut().take();
                            model.borrow_mut().finish();
                            progress.set(*model.borrow());
                            Timeout::new(BACKUP_HIDE_DELAY_MS, move || hide()).forget();
                        })
                        .forget();
                    }
                };
                let load_listener = if page_loaded() {
                    on_load();
                    None
                } else {
                    Listener::on_window("load", move |_| on_load())
                };

                move || {
                    drop(load_listener);
                    interval.borrow_mut().take();
                    if !*hidden.borrow() {
                        dom::unlock_body_scroll();
                    }
                }
            },
            (),
        );
    }

    if *phase == PreloaderPhase::Removed {
        return html! {};
    }

    html! {
        <div id="preloader" class={classes!("preloader", (*phase == PreloaderPhase::Hidden).then(|| "hidden"))}>
            <div class="preloader-content">
                <div class="preloader-logo">{"EMIL PRODUCTION"}</div>
                <div class="progress-bar">
                    <div id="progress-fill" class="progress-fill" style={format!("width: {};", progress.bar_width())}></div>
                </div>
                <div class="progress-text">
                    <span id="progress-percent">{ progress.percent() }</span>{"%"}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_is_between_two_and_five() {
        assert_eq!(LoadProgress::new(0.0).increment, 2.0);
        assert!(LoadProgress::new(0.999).increment < 5.0);
    }

    #[test]
    fn ticks_until_complete_and_clamps() {
        let mut progress = LoadProgress::new(1.0);
        let mut ticks = 0;
        while !progress.tick(0.5) {
            ticks += 1;
            assert!(progress.percent() < 100);
        }
        // 6 points per tick reaches 100 on the 17th tick.
        assert_eq!(ticks, 16);
        assert_eq!(progress.percent(), 100);
        assert_eq!(progress.bar_width(), "100%");
    }

    #[test]
    fn percent_is_floored() {
        let mut progress = LoadProgress::new(0.0);
        progress.tick(0.45);
        assert_eq!(progress.percent(), 2);
        progress.finish();
        assert!(progress.is_complete());
    }

    #[test]
    fn interval_stays_in_range() {
        assert_eq!(tick_interval(0.0), 100);
        assert_eq!(tick_interval(0.999), 199);
    }
}
