use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::utils::dom::{self, VisibilityObserver};

const SECTION_SELECTOR: &str =
    ".about, .target-audience, .what-we-offer, .how-to-join, .investors, .team, .contact-form, .faq";
const ITEM_SELECTOR: &str =
    ".audience-card, .offer-item, .step-item, .advantage-item, .team-member, .faq-item";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub offset_px: u32,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl RevealStyle {
    pub fn section() -> Self {
        Self { offset_px: 50, duration_s: 0.8, delay_s: 0.0 }
    }

    /// Cards cascade in document order.
    pub fn item(index: usize) -> Self {
        Self { offset_px: 30, duration_s: 0.6, delay_s: index as f64 * 0.1 }
    }

    pub fn transform(&self) -> String {
        format!("translateY({}px)", self.offset_px)
    }

    pub fn transition(&self) -> String {
        if self.delay_s > 0.0 {
            format!(
                "opacity {d}s ease {delay:.1}s, transform {d}s ease {delay:.1}s",
                d = self.duration_s,
                delay = self.delay_s
            )
        } else {
            format!("opacity {d}s ease, transform {d}s ease", d = self.duration_s)
        }
    }
}

fn prepare(element: &Element, style: RevealStyle) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        dom::set_style(element, "opacity", "0");
        dom::set_style(element, "transform", &style.transform());
        dom::set_style(element, "transition", &style.transition());
    }
}

fn show(element: &Element) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        dom::set_style(html, "opacity", "1");
        dom::set_style(html, "transform", "translateY(0)");
    }
    dom::log_failure("mark animated", element.class_list().add_1("animated"));
}

pub fn observe() -> Option<VisibilityObserver> {
    let observer = VisibilityObserver::once(0.1, "0px 0px -50px 0px", show)
        .map_err(|e| warn!("Scroll animations unavailable: {}", e))
        .ok()?;
    for section in dom::query_all(SECTION_SELECTOR) {
        prepare(&section, RevealStyle::section());
        observer.observe(&section);
    }
    for (index, item) in dom::query_all(ITEM_SELECTOR).into_iter().enumerate() {
        prepare(&item, RevealStyle::item(index));
        observer.observe(&item);
    }
    Some(observer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_slide_further_without_delay() {
        let style = RevealStyle::section();
        assert_eq!(style.transform(), "translateY(50px)");
        assert_eq!(style.transition(), "opacity 0.8s ease, transform 0.8s ease");
    }

    #[test]
    fn items_are_staggered() {
        assert_eq!(
            RevealStyle::item(3).transition(),
            "opacity 0.6s ease 0.3s, transform 0.6s ease 0.3s"
        );
        assert_eq!(RevealStyle::item(0).transition(), "opacity 0.6s ease, transform 0.6s ease");
        assert_eq!(RevealStyle::item(2).transform(), "translateY(30px)");
    }
}
