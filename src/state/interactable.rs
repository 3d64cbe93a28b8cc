use crate::model::Lot;

#[cfg(test)]
#[path = "interactable_test.rs"]
mod interactable_test;

/// Class toggled on the selected lot's SVG group.
pub const SELECTED_CLASS: &str = "selected-lot";

/// Lots only the listing knows about are drawn faded.
pub const UNLISTED_OPACITY: &str = "0.2";

/// Axis-aligned box in SVG user units (an `SVGRect` from `getBBox`).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Translate for a tooltip icon so it sits centred above a lot. The icon art
/// is 70 units wide.
#[must_use]
pub fn tooltip_offset(bbox: BBox) -> (f64, f64) {
    (bbox.x - 35.0 + bbox.width / 2.0, bbox.y - bbox.height * 1.25)
}

/// Translate for the 8x8 sold-out cross centred on a lot.
#[must_use]
pub fn cross_offset(bbox: BBox) -> (f64, f64) {
    (bbox.x + bbox.width / 2.0 - 4.0, bbox.y + bbox.height / 2.0 - 4.0)
}

/// Listing entry for a lot element id (`id<lot_number>`).
#[must_use]
pub fn find_lot<'a>(lots: &'a [Lot], element_id: &str) -> Option<&'a Lot> {
    lots.iter().find(|lot| lot.element_id() == element_id)
}

/// Highlight change produced by a new selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    /// Element that loses the highlight, if any.
    pub previous: Option<String>,
    pub current: String,
}

/// Which lot is selected. Re-selecting the same lot produces no change, so
/// the page hears about each distinct selection once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LotSelection {
    selected: Option<String>,
}

impl LotSelection {
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select(&mut self, element_id: &str) -> Option<SelectionChange> {
        if self.selected.as_deref() == Some(element_id) {
            return None;
        }
        let previous = self.selected.replace(element_id.to_string());
        Some(SelectionChange { previous, current: element_id.to_string() })
    }

    /// Drops the selection, returning the element that loses the highlight.
    pub fn clear(&mut self) -> Option<String> {
        self.selected.take()
    }
}
