use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    /// Offset of the section's top edge inside the snap container.
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// The page's sections in document order. Ids and order are fixed once
/// discovered; only their geometry is refreshed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionMap {
    sections: Vec<Section>,
}

impl SectionMap {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Reads every direct `<section>` child of the snap container.
    pub fn discover(container: &Element) -> Self {
        let Ok(nodes) = container.query_selector_all(":scope > section") else {
            return Self::default();
        };
        let sections = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(|el| {
                Section::new(
                    el.id(),
                    f64::from(el.offset_top()),
                    f64::from(el.offset_height()),
                )
            })
            .collect();
        Self { sections }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    /// Takes fresh measurements for the same sections, matched by id.
    pub fn remeasure(&mut self, fresh: &SectionMap) {
        for section in &mut self.sections {
            if let Some(measured) = fresh.sections.iter().find(|m| m.id == section.id) {
                section.top = measured.top;
                section.height = measured.height;
            }
        }
    }

    /// The section holding the middle of the viewport.
    pub fn index_at(&self, offset: f64, viewport_height: f64) -> usize {
        let probe = offset + viewport_height / 2.0;
        self.sections
            .iter()
            .rposition(|section| section.top <= probe)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> SectionMap {
        SectionMap::new(vec![
            Section::new("hero", 0.0, 800.0),
            Section::new("about", 800.0, 800.0),
            Section::new("investors", 1600.0, 800.0),
            Section::new("contacts", 2400.0, 800.0),
        ])
    }

    #[test]
    fn index_follows_viewport_middle() {
        let map = page();
        assert_eq!(map.index_at(0.0, 800.0), 0);
        assert_eq!(map.index_at(399.0, 800.0), 0);
        assert_eq!(map.index_at(400.0, 800.0), 1);
        assert_eq!(map.index_at(1700.0, 800.0), 2);
        assert_eq!(map.index_at(90_000.0, 800.0), 3);
    }

    #[test]
    fn empty_map_reports_first_index() {
        assert_eq!(SectionMap::default().index_at(500.0, 800.0), 0);
    }

    #[test]
    fn looks_up_by_id() {
        let map = page();
        assert_eq!(map.index_of("contacts"), Some(3));
        assert_eq!(map.index_of("partners"), None);
    }

    #[test]
    fn remeasure_keeps_order_and_ids() {
        let mut map = page();
        let fresh = SectionMap::new(vec![
            Section::new("about", 600.0, 600.0),
            Section::new("hero", 0.0, 600.0),
        ]);
        map.remeasure(&fresh);
        assert_eq!(map.get(1), Some(&Section::new("about", 600.0, 600.0)));
        assert_eq!(map.get(2).map(|s| s.top), Some(1600.0));
        assert_eq!(map.len(), 4);
    }
}
