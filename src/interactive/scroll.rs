//! In-page navigation: anchor links and viewport checks.

use std::collections::HashMap;

use crate::model::ReferenceDocument;

/// Space kept above a scroll target.
pub const HEADER_OFFSET: f64 = 20.0;

/// Known anchor targets and their vertical offsets within the page.
#[derive(Clone, Debug, Default)]
pub struct AnchorMap {
    targets: HashMap<String, f64>,
}

impl AnchorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the element with id `anchor` at vertical offset `top`.
    pub fn insert(&mut self, anchor: impl Into<String>, top: f64) {
        self.targets.insert(anchor.into(), top);
    }

    /// Builds a map of the document's section anchors from their measured offsets.
    ///
    /// `offsets` is indexed like `document.sections()`; sections without an
    /// anchor or without an offset are left out.
    pub fn from_sections(document: &ReferenceDocument, offsets: &[f64]) -> Self {
        let mut map = Self::new();
        for (section, top) in document.sections().iter().zip(offsets) {
            if let Some(anchor) = section.anchor() {
                map.insert(anchor, *top);
            }
        }
        map
    }

    /// Scroll position for an in-page link such as `#math`.
    ///
    /// Returns `None` for links that are not fragment links or whose target is unknown.
    pub fn scroll_position(&self, href: &str) -> Option<f64> {
        let anchor = href.strip_prefix('#')?;
        self.targets.get(anchor).map(|top| top - HEADER_OFFSET)
    }
}

/// An element's bounding box relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Rect {
    /// Whether the box lies fully inside a viewport of the given size.
    pub fn is_in_viewport(&self, width: f64, height: f64) -> bool {
        self.top >= 0.0 && self.left >= 0.0 && self.bottom <= height && self.right <= width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Section;

    #[test]
    fn scrolls_to_target_minus_offset() {
        let document = ReferenceDocument::new()
            .with_section(Section::new("Built-ins").with_anchor(Some("builtins".to_owned())))
            .with_section(Section::new("No anchor"))
            .with_section(Section::new("Math").with_anchor(Some("math".to_owned())));
        let anchors = AnchorMap::from_sections(&document, &[100.0, 900.0, 1500.0]);

        assert_eq!(anchors.scroll_position("#math"), Some(1480.0));
        assert_eq!(anchors.scroll_position("#builtins"), Some(80.0));
        assert_eq!(anchors.scroll_position("#missing"), None);
        assert_eq!(anchors.scroll_position("math"), None);
    }

    #[test]
    fn viewport_containment() {
        let rect = Rect {
            top: 10.0,
            left: 0.0,
            bottom: 200.0,
            right: 300.0,
        };
        assert!(rect.is_in_viewport(300.0, 200.0));
        assert!(!rect.is_in_viewport(299.0, 800.0));
    }
}
