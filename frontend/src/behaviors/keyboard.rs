use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};
use yew::Callback;

use crate::navigation::PageController;
use crate::utils::dom::Listener;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Next,
    Previous,
    First,
    Last,
    /// Close the mobile menu and any open FAQ answers.
    Dismiss,
}

/// Maps a key press to a page action. Typing in form controls is left alone.
pub fn key_action(key: &str, target_tag: Option<&str>) -> Option<KeyAction> {
    if matches!(target_tag, Some("INPUT" | "TEXTAREA" | "SELECT")) {
        return None;
    }
    match key {
        "ArrowDown" | "PageDown" => Some(KeyAction::Next),
        "ArrowUp" | "PageUp" => Some(KeyAction::Previous),
        "Home" => Some(KeyAction::First),
        "End" => Some(KeyAction::Last),
        "Escape" => Some(KeyAction::Dismiss),
        _ => None,
    }
}

/// Section index a navigation action leads to, if it moves at all.
pub fn target_section(action: KeyAction, current: usize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    match action {
        KeyAction::Next if current + 1 < count => Some(current + 1),
        KeyAction::Previous if current > 0 => Some(current - 1),
        KeyAction::First => Some(0),
        KeyAction::Last => Some(count - 1),
        _ => None,
    }
}

pub fn listen(
    controller: PageController,
    navigate: Callback<usize>,
    dismiss: Callback<()>,
) -> Option<Listener> {
    Listener::on_document("keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let tag = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .map(|element| element.tag_name());
        let Some(action) = key_action(&event.key(), tag.as_deref()) else {
            return;
        };
        if action == KeyAction::Dismiss {
            dismiss.emit(());
            return;
        }
        event.prevent_default();
        let current = controller.current_section();
        if let Some(index) = target_section(action, current, controller.section_count()) {
            debug!("Keyboard navigation {:?}: {} -> {}", action, current, index);
            navigate.emit(index);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_navigation_keys() {
        assert_eq!(key_action("PageDown", Some("BODY")), Some(KeyAction::Next));
        assert_eq!(key_action("ArrowUp", None), Some(KeyAction::Previous));
        assert_eq!(key_action("End", Some("DIV")), Some(KeyAction::Last));
        assert_eq!(key_action("Escape", Some("SECTION")), Some(KeyAction::Dismiss));
        assert_eq!(key_action("a", Some("BODY")), None);
    }

    #[test]
    fn ignores_keys_while_typing() {
        for tag in ["INPUT", "TEXTAREA", "SELECT"] {
            assert_eq!(key_action("ArrowDown", Some(tag)), None);
            assert_eq!(key_action("Escape", Some(tag)), None);
        }
    }

    #[test]
    fn navigation_stays_in_bounds() {
        assert_eq!(target_section(KeyAction::Next, 2, 5), Some(3));
        assert_eq!(target_section(KeyAction::Next, 4, 5), None);
        assert_eq!(target_section(KeyAction::Previous, 0, 5), None);
        assert_eq!(target_section(KeyAction::Previous, 3, 5), Some(2));
        assert_eq!(target_section(KeyAction::First, 3, 5), Some(0));
        assert_eq!(target_section(KeyAction::Last, 0, 5), Some(4));
        assert_eq!(target_section(KeyAction::Last, 0, 0), None);
        assert_eq!(target_section(KeyAction::Dismiss, 1, 5), None);
    }
}
