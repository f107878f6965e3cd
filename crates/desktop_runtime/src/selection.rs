//! Rubber-band selection engine and selection-set ownership.
//!
//! Selection membership is computed once, at release, not incrementally
//! while the box is drawn; live updates only move the box corner. A release
//! that captures nothing leaves the selection cleared, because pointer-down
//! on empty desktop already emptied it.

use serde::{Deserialize, Serialize};

use desktop_contract::{IconId, PointerPosition};

use crate::model::{DesktopState, InteractionState, RubberBand};

/// Offset from an icon's top-left to its hit anchor. The icon hitbox is a
/// fixed-size square; an icon is inside the rubber band when this anchor
/// point falls within the normalized rectangle, edges inclusive.
pub const ICON_HITBOX_HALF_EXTENT: i32 = 32;

/// A normalized axis-aligned rectangle: `left <= right`, `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl SelectionRect {
    pub fn from_corners(a: PointerPosition, b: PointerPosition) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Starts a rubber band anchored at `anchor` and empties the selection.
/// Only the router calls this, and only for a pointer-down on empty desktop.
pub fn begin_rubber_band(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    anchor: PointerPosition,
) {
    state.selected_icons.clear();
    interaction.rubber_band = Some(RubberBand {
        anchor,
        cursor: anchor,
    });
}

/// Moves the live corner of the active rubber band, if any.
pub fn update_rubber_band(interaction: &mut InteractionState, pointer: PointerPosition) {
    if let Some(band) = interaction.rubber_band.as_mut() {
        band.cursor = pointer;
    }
}

/// Resolves the rubber band into a new selection set and discards the box.
///
/// The previous selection is replaced wholesale when at least one icon
/// anchor falls inside the rectangle; otherwise the selection stays empty.
pub fn finalize_rubber_band(state: &mut DesktopState, interaction: &mut InteractionState) {
    let Some(band) = interaction.rubber_band.take() else {
        return;
    };
    let rect = band.rect();
    let captured: std::collections::BTreeSet<IconId> = state
        .icons
        .iter()
        .filter(|icon| {
            rect.contains(
                icon.x + ICON_HITBOX_HALF_EXTENT,
                icon.y + ICON_HITBOX_HALF_EXTENT,
            )
        })
        .map(|icon| icon.id)
        .collect();
    if !captured.is_empty() {
        state.selected_icons = captured;
    }
}

/// Applies press-selection semantics for a pointer-down directly on an icon.
///
/// An unselected icon becomes the sole selection; pressing an already
/// selected icon preserves the multi-selection so a group drag can start
/// from any member. Returns whether the icon was already selected.
pub fn select_on_press(state: &mut DesktopState, icon_id: IconId) -> bool {
    let was_selected = state.selected_icons.contains(&icon_id);
    if !was_selected {
        state.selected_icons.clear();
        state.selected_icons.insert(icon_id);
    }
    was_selected
}

/// Empties the selection set.
pub fn clear_selection(state: &mut DesktopState) {
    state.selected_icons.clear();
}
