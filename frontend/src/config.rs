use log::Level;
use web_sys::window;

pub const VERSION: &str = "1.0.0";

/// Offsets up to this many pixels count as the top of the page.
pub const TOP_REGION_PX: f64 = 100.0;
/// Minimum scroll delta that flips header visibility.
pub const HYSTERESIS_PX: f64 = 5.0;
pub const HEADER_INACTIVITY_MS: u32 = 3000;

pub const SCROLL_THROTTLE_MS: u32 = 16;
pub const PARALLAX_DEBOUNCE_MS: u32 = 16;
pub const PRELOAD_DEBOUNCE_MS: u32 = 500;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
/// A section counts as viewed once the active section has held this long.
pub const SECTION_VIEW_SETTLE_MS: u32 = 500;

pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const PARALLAX_BREAKPOINT_PX: f64 = 1024.0;

pub const SWIPE_MIN_DISTANCE_PX: f64 = 50.0;
pub const SWIPE_MAX_TIME_MS: f64 = 300.0;

pub const CTA_FOLLOW_UP_MS: u32 = 1000;

pub const CRITICAL_IMAGES: &[&str] = &[
    "/assets/hero-bg.jpg",
    "/assets/about-bg.webp",
    "/assets/target-bg.jpeg",
];

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

const MOBILE_AGENTS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    MOBILE_AGENTS.iter().any(|agent| ua.contains(agent))
}

pub fn is_debug_host(hostname: &str) -> bool {
    matches!(hostname, "localhost" | "127.0.0.1")
}

/// Facts about the browser that decide which optional effects run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Environment {
    pub mobile: bool,
    pub reduced_motion: bool,
}

impl Environment {
    pub fn detect() -> Self {
        let Some(window) = window() else {
            return Self::default();
        };
        let mobile = window
            .navigator()
            .user_agent()
            .map(|ua| is_mobile_user_agent(&ua))
            .unwrap_or(false);
        let reduced_motion = window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false);
        Self { mobile, reduced_motion }
    }

    /// Mouse/scroll parallax only runs on desktop with motion allowed.
    pub fn parallax_enabled(&self) -> bool {
        !self.mobile && !self.reduced_motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_mobile_agents() {
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
        ));
        assert!(is_mobile_user_agent("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/120.0"
        ));
    }

    #[test]
    fn debug_hosts() {
        assert!(is_debug_host("localhost"));
        assert!(is_debug_host("127.0.0.1"));
        assert!(!is_debug_host("example.com"));
    }

    #[test]
    fn parallax_needs_desktop_and_motion() {
        let desktop = Environment { mobile: false, reduced_motion: false };
        assert!(desktop.parallax_enabled());
        assert!(!Environment { mobile: true, ..desktop }.parallax_enabled());
        assert!(!Environment { reduced_motion: true, ..desktop }.parallax_enabled());
    }
}
