use std::collections::BTreeMap;

use serde::Deserialize;

/// Gap between the tooltip and its anchor, in pixels.
pub const TOOLTIP_GAP: f64 = 5.0;

/// Viewport rectangle of an element, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

/// Places a tooltip of `tooltip` size horizontally centered directly above
/// `anchor`.
#[must_use]
pub fn place_above(anchor: Rect, tooltip: Size) -> Position {
    Position {
        left: anchor.left + anchor.width / 2.0 - tooltip.width / 2.0,
        top: anchor.top - tooltip.height - TOOLTIP_GAP,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTooltip {
    pub text: String,
    /// Known once the label was measured.
    pub position: Option<Position>,
}

/// Floating labels currently shown, keyed by the anchor element id.
#[derive(Debug, Clone, Default)]
pub struct Tooltips {
    active: BTreeMap<String, ActiveTooltip>,
}

impl Tooltips {
    /// Pointer entered an anchor carrying tooltip text.
    pub fn enter(&mut self, anchor: impl Into<String>, text: impl Into<String>) {
        self.active.insert(
            anchor.into(),
            ActiveTooltip {
                text: text.into(),
                position: None,
            },
        );
    }

    /// Positions a shown tooltip once both boxes are known.
    pub fn measured(&mut self, anchor: &str, anchor_rect: Rect, label: Size) -> Option<Position> {
        let tooltip = self.active.get_mut(anchor)?;
        let position = place_above(anchor_rect, label);
        tooltip.position = Some(position);
        Some(position)
    }

    /// Pointer left the anchor.
    pub fn leave(&mut self, anchor: &str) -> bool {
        self.active.remove(anchor).is_some()
    }

    #[must_use]
    pub fn get(&self, anchor: &str) -> Option<&ActiveTooltip> {
        self.active.get(anchor)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActiveTooltip)> {
        self.active.iter().map(|(anchor, tip)| (anchor.as_str(), tip))
    }
}
