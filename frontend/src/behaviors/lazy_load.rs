use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlImageElement};

use crate::config::CRITICAL_IMAGES;
use crate::navigation::sections::SectionMap;
use crate::utils::dom::{self, VisibilityObserver};

pub const LAZY_SELECTOR: &str = "[data-bg], [data-src]";

pub fn background_image(url: &str) -> String {
    format!("url({})", url)
}

/// Sections whose images should be warm: the next and the previous one.
pub fn nearby_sections(current: usize, count: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    let next = (current + 1).min(count - 1);
    let previous = current.saturating_sub(1);
    if next == previous {
        vec![next]
    } else {
        vec![next, previous]
    }
}

/// Swaps deferred `data-bg` / `data-src` attributes for the real thing.
pub fn load_element(element: &Element) {
    if let Some(bg) = element.get_attribute("data-bg") {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            dom::set_style(html, "background-image", &background_image(&bg));
        }
        dom::log_failure("clear data-bg", element.remove_attribute("data-bg"));
    }
    if element.tag_name() == "IMG" {
        if let Some(src) = element.get_attribute("data-src") {
            dom::log_failure("set image src", element.set_attribute("src", &src));
            dom::log_failure("clear data-src", element.remove_attribute("data-src"));
        }
    }
}

/// Loads deferred media as it approaches the viewport.
pub fn observe() -> Option<VisibilityObserver> {
    let observer = VisibilityObserver::once(0.1, "50px", load_element)
        .map_err(|e| warn!("Lazy loading unavailable: {}", e))
        .ok()?;
    let elements = dom::query_all(LAZY_SELECTOR);
    debug!("Lazy elements observed: {}", elements.len());
    for element in &elements {
        observer.observe(element);
    }
    Some(observer)
}

/// Everything still deferred once the page has fully loaded.
pub fn load_remaining() {
    for element in dom::query_all(LAZY_SELECTOR) {
        load_element(&element);
    }
}

pub fn preload_critical_images() {
    for src in CRITICAL_IMAGES {
        match HtmlImageElement::new() {
            Ok(image) => image.set_src(src),
            Err(_) => debug!("Image preloading unavailable"),
        }
    }
}

pub fn preload_nearby(sections: &SectionMap, current: usize) {
    for index in nearby_sections(current, sections.len()) {
        let Some(section) = sections.get(index) else {
            continue;
        };
        if section.id.is_empty() {
            continue;
        }
        for image in dom::query_all(&format!("#{} img[data-src]", section.id)) {
            load_element(&image);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearby_is_clamped_to_page() {
        assert_eq!(nearby_sections(0, 5), vec![1, 0]);
        assert_eq!(nearby_sections(2, 5), vec![3, 1]);
        assert_eq!(nearby_sections(4, 5), vec![4, 3]);
        assert_eq!(nearby_sections(0, 1), vec![0]);
        assert!(nearby_sections(0, 0).is_empty());
    }

    #[test]
    fn background_uses_css_url() {
        assert_eq!(background_image("/assets/team.webp"), "url(/assets/team.webp)");
    }
}
