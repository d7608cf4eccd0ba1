//! Header visibility and active-section tracking, driven by the snap
//! container's scroll offset.
//!
//! One controller exists per page. It is handed explicitly to whatever needs
//! to navigate; clones share state.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use crate::config::{HEADER_INACTIVITY_MS, HYSTERESIS_PX, TOP_REGION_PX};
use crate::navigation::sections::SectionMap;
use crate::utils::timing::{Scheduler, TaskHandle};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderVisibility {
    #[default]
    Visible,
    Hidden,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    #[default]
    Down,
}

/// Everything the page renders from the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavSnapshot {
    pub header: HeaderVisibility,
    /// Past the top region; the header switches to its solid background.
    pub scrolled: bool,
    pub active_section: usize,
}

#[derive(Default)]
struct ControllerState {
    last_offset: f64,
    direction: ScrollDirection,
    last_scroll_ms: f64,
    header: HeaderVisibility,
    scrolled: bool,
    active_section: usize,
    inactivity: Option<TaskHandle>,
    sections: SectionMap,
    viewport_height: f64,
}

impl ControllerState {
    fn snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            header: self.header,
            scrolled: self.scrolled,
            active_section: self.active_section,
        }
    }

    fn refresh_active(&mut self) {
        self.active_section = self
            .sections
            .index_at(self.last_offset, self.viewport_height);
    }
}

struct Shared<S> {
    scheduler: S,
    state: RefCell<ControllerState>,
    listener: RefCell<Option<Rc<dyn Fn(NavSnapshot)>>>,
}

pub struct ScrollController<S: Scheduler> {
    shared: Rc<Shared<S>>,
}

impl<S: Scheduler> Clone for ScrollController<S> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<S: Scheduler> PartialEq for ScrollController<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl<S: Scheduler + 'static> ScrollController<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            shared: Rc::new(Shared {
                scheduler,
                state: RefCell::new(ControllerState::default()),
                listener: RefCell::new(None),
            }),
        }
    }

    /// Registers the single observer of snapshot changes.
    pub fn subscribe(&self, listener: impl Fn(NavSnapshot) + 'static) {
        *self.shared.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn snapshot(&self) -> NavSnapshot {
        self.shared.state.borrow().snapshot()
    }

    pub fn current_section(&self) -> usize {
        self.shared.state.borrow().active_section
    }

    #[cfg(test)]
    pub fn direction(&self) -> ScrollDirection {
        self.shared.state.borrow().direction
    }

    pub fn sections(&self) -> SectionMap {
        self.shared.state.borrow().sections.clone()
    }

    pub fn section_count(&self) -> usize {
        self.shared.state.borrow().sections.len()
    }

    /// Installs the discovered sections. Later calls only refresh geometry.
    pub fn set_sections(&self, discovered: SectionMap) {
        self.update(|state, _| {
            if state.sections.is_empty() {
                state.sections = discovered;
            } else {
                state.sections.remeasure(&discovered);
            }
            state.refresh_active();
        });
    }

    pub fn set_viewport_height(&self, height: f64) {
        self.update(|state, _| state.viewport_height = height);
    }

    /// Feeds one (throttled) scroll sample.
    pub fn on_scroll(&self, raw_offset: f64) {
        let offset = raw_offset.max(0.0);
        let now = self.shared.scheduler.now_ms();
        self.update(|state, shared| {
            let delta = offset - state.last_offset;
            if delta > 0.0 {
                state.direction = ScrollDirection::Down;
            } else if delta < 0.0 {
                state.direction = ScrollDirection::Up;
            }
            state.last_offset = offset;
            state.last_scroll_ms = now;

            if offset <= TOP_REGION_PX {
                state.header = HeaderVisibility::Visible;
                state.scrolled = false;
                cancel_inactivity(shared, state);
            } else {
                state.scrolled = true;
                if state.direction == ScrollDirection::Down && delta > HYSTERESIS_PX {
                    state.header = HeaderVisibility::Hidden;
                    cancel_inactivity(shared, state);
                } else if state.direction == ScrollDirection::Up && delta < -HYSTERESIS_PX {
                    state.header = HeaderVisibility::Visible;
                    arm_inactivity(shared, state);
                }
            }
            state.refresh_active();
        });
    }

    /// Shows the header; past the top region it hides again after inactivity.
    pub fn reveal(&self) {
        self.update(|state, shared| {
            state.header = HeaderVisibility::Visible;
            if state.last_offset > TOP_REGION_PX {
                arm_inactivity(shared, state);
            }
        });
    }

    pub fn conceal(&self) {
        self.update(|state, shared| {
            state.header = HeaderVisibility::Hidden;
            cancel_inactivity(shared, state);
        });
    }

    /// Recomputes the active section from the last known offset.
    pub fn update_active_section(&self) -> usize {
        self.update(|state, _| state.refresh_active());
        self.current_section()
    }

    /// Resolves `index` to the offset the container should scroll to.
    /// Indices past the end resolve to nothing.
    pub fn scroll_to_section(&self, index: usize) -> Option<f64> {
        let top = self.shared.state.borrow().sections.get(index).map(|s| s.top);
        match top {
            Some(top) => {
                self.update(|state, _| state.active_section = index);
                Some(top)
            }
            None => {
                debug!("No section at index {}, skipping navigation", index);
                None
            }
        }
    }

    fn update(&self, mutate: impl FnOnce(&mut ControllerState, &Rc<Shared<S>>)) {
        let (before, after) = {
            let mut state = self.shared.state.borrow_mut();
            let before = state.snapshot();
            mutate(&mut state, &self.shared);
            (before, state.snapshot())
        };
        if before != after {
            publish(&self.shared, after);
        }
    }
}

fn publish<S>(shared: &Shared<S>, snapshot: NavSnapshot) {
    let listener = shared.listener.borrow().clone();
    if let Some(listener) = listener {
        listener(snapshot);
    }
}

fn cancel_inactivity<S: Scheduler>(shared: &Shared<S>, state: &mut ControllerState) {
    if let Some(timer) = state.inactivity.take() {
        shared.scheduler.cancel(timer);
    }
}

fn arm_inactivity<S: Scheduler + 'static>(shared: &Rc<Shared<S>>, state: &mut ControllerState) {
    cancel_inactivity(shared, state);
    let weak: Weak<Shared<S>> = Rc::downgrade(shared);
    let timer = shared.scheduler.schedule(
        HEADER_INACTIVITY_MS,
        Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                on_inactivity(&shared);
            }
        }),
    );
    state.inactivity = Some(timer);
}

fn on_inactivity<S: Scheduler>(shared: &Shared<S>) {
    let now = shared.scheduler.now_ms();
    let (before, after) = {
        let mut state = shared.state.borrow_mut();
        let before = state.snapshot();
        state.inactivity = None;
        let idle = now - state.last_scroll_ms;
        if state.direction == ScrollDirection::Down || idle >= f64::from(HEADER_INACTIVITY_MS) {
            state.header = HeaderVisibility::Hidden;
        }
        (before, state.snapshot())
    };
    if before != after {
        publish(shared, after);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::sections::Section;
    use crate::utils::timing::ManualScheduler;

    fn controller() -> (ManualScheduler, ScrollController<ManualScheduler>) {
        let clock = ManualScheduler::new();
        let controller = ScrollController::new(clock.clone());
        controller.set_viewport_height(800.0);
        controller.set_sections(SectionMap::new(vec![
            Section::new("hero", 0.0, 800.0),
            Section::new("about", 800.0, 800.0),
            Section::new("investors", 1600.0, 800.0),
            Section::new("contacts", 2400.0, 800.0),
        ]));
        (clock, controller)
    }

    fn scroll_through(
        clock: &ManualScheduler,
        controller: &ScrollController<ManualScheduler>,
        offsets: &[f64],
    ) -> Vec<HeaderVisibility> {
        offsets
            .iter()
            .map(|&offset| {
                controller.on_scroll(offset);
                clock.advance(16.0);
                controller.snapshot().header
            })
            .collect()
    }

    #[test]
    fn starts_visible() {
        let (_, controller) = controller();
        assert_eq!(controller.snapshot(), NavSnapshot::default());
    }

    #[test]
    fn scrolling_down_hides_and_reverse_shows() {
        let (clock, controller) = controller();
        let down = scroll_through(&clock, &controller, &[0.0, 50.0, 120.0, 200.0, 260.0]);
        assert_eq!(down.last(), Some(&HeaderVisibility::Hidden));

        let up = scroll_through(&clock, &controller, &[260.0, 200.0, 120.0, 50.0, 0.0]);
        assert_eq!(
            up,
            vec![
                HeaderVisibility::Hidden,
                HeaderVisibility::Visible,
                HeaderVisibility::Visible,
                HeaderVisibility::Visible,
                HeaderVisibility::Visible,
            ]
        );
    }

    #[test]
    fn top_region_is_always_visible() {
        let (clock, controller) = controller();
        scroll_through(&clock, &controller, &[400.0, 900.0]);
        assert_eq!(controller.snapshot().header, HeaderVisibility::Hidden);
        for offset in [100.0, 60.0, 99.0, 0.0] {
            controller.on_scroll(offset);
            assert_eq!(controller.snapshot().header, HeaderVisibility::Visible);
            assert!(!controller.snapshot().scrolled);
        }
    }

    #[test]
    fn small_deltas_do_not_flip_visibility() {
        let (clock, controller) = controller();
        scroll_through(&clock, &controller, &[300.0]);
        assert_eq!(controller.snapshot().header, HeaderVisibility::Hidden);

        let jitter = scroll_through(&clock, &controller, &[298.0, 301.0, 296.0, 300.0]);
        assert!(jitter.iter().all(|v| *v == HeaderVisibility::Hidden));
        assert_eq!(controller.direction(), ScrollDirection::Down);
    }

    #[test]
    fn inactivity_hides_a_revealed_header() {
        let (clock, controller) = controller();
        scroll_through(&clock, &controller, &[500.0, 400.0]);
        assert_eq!(controller.snapshot().header, HeaderVisibility::Visible);
        assert_eq!(clock.pending(), 1);

        clock.advance(2900.0);
        assert_eq!(controller.snapshot().header, HeaderVisibility::Visible);
        clock.advance(100.0);
        assert_eq!(controller.snapshot().header, HeaderVisibility::Hidden);
    }

    #[test]
    fn slow_upward_scrolling_keeps_header_when_timer_fires() {
        let (clock, controller) = controller();
        scroll_through(&clock, &controller, &[500.0, 400.0]);
        clock.advance(1000.0);
        controller.on_scroll(398.0);
        clock.advance(2000.0);
        assert_eq!(clock.pending(), 0);
        assert_eq!(controller.snapshot().header, HeaderVisibility::Visible);
    }

    #[test]
    fn returning_to_top_cancels_inactivity() {
        let (clock, controller) = controller();
        scroll_through(&clock, &controller, &[500.0, 400.0, 50.0]);
        assert_eq!(clock.pending(), 0);
        clock.advance(5000.0);
        assert_eq!(controller.snapshot().header, HeaderVisibility::Visible);
    }

    #[test]
    fn reveal_arms_timer_only_past_top() {
        let (clock, controller) = controller();
        controller.reveal();
        assert_eq!(clock.pending(), 0);

        scroll_through(&clock, &controller, &[700.0]);
        controller.reveal();
        assert_eq!(controller.snapshot().header, HeaderVisibility::Visible);
        clock.advance(3000.0);
        assert_eq!(controller.snapshot().header, HeaderVisibility::Hidden);
    }

    #[test]
    fn active_section_tracks_offset_and_is_idempotent() {
        let (_, controller) = controller();
        controller.on_scroll(1650.0);
        let first = controller.update_active_section();
        let second = controller.update_active_section();
        assert_eq!(first, 2);
        assert_eq!(first, second);
    }

    #[test]
    fn scroll_to_section_resolves_valid_indices_only() {
        let (_, controller) = controller();
        assert_eq!(controller.scroll_to_section(3), Some(2400.0));
        assert_eq!(controller.current_section(), 3);
        assert_eq!(controller.scroll_to_section(4), None);
        assert_eq!(controller.current_section(), 3);
    }

    #[test]
    fn publishes_each_change_once() {
        let (clock, controller) = controller();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        controller.subscribe(move |snapshot| sink.borrow_mut().push(snapshot));

        scroll_through(&clock, &controller, &[20.0, 40.0]);
        assert!(seen.borrow().is_empty());

        controller.on_scroll(300.0);
        controller.on_scroll(300.0);
        assert_eq!(
            *seen.borrow(),
            vec![NavSnapshot {
                header: HeaderVisibility::Hidden,
                scrolled: true,
                active_section: 0,
            }]
        );
    }

    #[test]
    fn rediscovery_only_refreshes_geometry() {
        let (_, controller) = controller();
        controller.set_sections(SectionMap::new(vec![Section::new("about", 500.0, 500.0)]));
        let sections = controller.sections();
        assert_eq!(sections.len(), 4);
        assert_eq!(sections.get(1).map(|s| s.top), Some(500.0));
    }
}
