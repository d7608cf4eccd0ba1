use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlVideoElement};

use crate::components::hero_video::{play, HERO_VIDEO_SELECTOR};
use crate::utils::dom::{self, Listener};

pub fn animation_play_state(page_hidden: bool) -> &'static str {
    if page_hidden {
        "paused"
    } else {
        "running"
    }
}

/// Pauses the hero video and looping animations while the tab is hidden.
pub fn listen() -> Option<Listener> {
    Listener::on_document("visibilitychange", |_| {
        let hidden = dom::document().map(|doc| doc.hidden()).unwrap_or(false);
        debug!("Page {}", if hidden { "hidden" } else { "visible" });

        if let Some(video) = dom::query(HERO_VIDEO_SELECTOR)
            .ok()
            .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok())
        {
            if hidden && !video.paused() {
                dom::log_failure("pause video", video.pause());
            } else if !hidden && video.paused() {
                play(&video, "Video resume failed");
            }
        }

        for element in dom::query_all(".running-animation") {
            if let Ok(element) = element.dyn_into::<HtmlElement>() {
                dom::set_style(&element, "animation-play-state", animation_play_state(hidden));
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_pages_pause_animations() {
        assert_eq!(animation_play_state(true), "paused");
        assert_eq!(animation_play_state(false), "running");
    }
}
