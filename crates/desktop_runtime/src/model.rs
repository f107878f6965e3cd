use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use desktop_contract::{AppId, IconId, PointerPosition};

use crate::selection::SelectionRect;

/// On-screen geometry of a window, in desktop-pixel space.
///
/// A maximized window keeps its rect untouched; layout ignores it until the
/// window is restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

/// One application surface. Every catalog app has exactly one record for the
/// whole session; closing a window means `open = false`, never removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub app_id: AppId,
    pub title: String,
    pub glyph: String,
    pub rect: WindowRect,
    /// Stacking rank; higher renders in front. Ranks are totally ordered but
    /// need not be contiguous.
    pub z_index: u32,
    pub open: bool,
    pub minimized: bool,
    pub maximized: bool,
}

/// One desktop icon. Positions are free-floating pixels; overlap is allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconRecord {
    pub id: IconId,
    pub title: String,
    pub glyph: String,
    pub x: i32,
    pub y: i32,
}

/// The single-writer desktop model. Mutated exclusively through
/// [`crate::reducer::reduce_desktop`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    pub windows: Vec<WindowRecord>,
    pub icons: Vec<IconRecord>,
    pub selected_icons: BTreeSet<IconId>,
    pub active_window: Option<AppId>,
    pub start_menu_open: bool,
    pub context_menu: Option<PointerPosition>,
}

impl DesktopState {
    pub fn window(&self, app_id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }

    pub fn window_mut(&mut self, app_id: AppId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.app_id == app_id)
    }

    pub fn icon(&self, icon_id: IconId) -> Option<&IconRecord> {
        self.icons.iter().find(|i| i.id == icon_id)
    }

    pub fn icon_mut(&mut self, icon_id: IconId) -> Option<&mut IconRecord> {
        self.icons.iter_mut().find(|i| i.id == icon_id)
    }

    /// Highest stacking rank currently assigned.
    pub fn max_rank(&self) -> u32 {
        self.windows.iter().map(|w| w.z_index).max().unwrap_or(0)
    }

    /// The front-most window that is open and not minimized, derived purely
    /// from flags and rank.
    pub fn front_window(&self) -> Option<AppId> {
        self.windows
            .iter()
            .filter(|w| w.open && !w.minimized)
            .max_by_key(|w| w.z_index)
            .map(|w| w.app_id)
    }

    /// Render-facing view of the model plus transient session existence,
    /// for ghost-rendering the selection box and in-flight drags.
    pub fn snapshot(&self, interaction: &InteractionState) -> DesktopSnapshot {
        DesktopSnapshot {
            windows: self.windows.clone(),
            icons: self.icons.clone(),
            selected_icons: self.selected_icons.clone(),
            active_window: self.active_window,
            start_menu_open: self.start_menu_open,
            context_menu: self.context_menu,
            selection_box: interaction.rubber_band.as_ref().map(RubberBand::rect),
            icon_drag_active: interaction.icon_drag.is_some(),
            window_drag_active: interaction.window_drag.is_some(),
        }
    }
}

/// Serializable snapshot consumed by the render and command layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopSnapshot {
    pub windows: Vec<WindowRecord>,
    pub icons: Vec<IconRecord>,
    pub selected_icons: BTreeSet<IconId>,
    pub active_window: Option<AppId>,
    pub start_menu_open: bool,
    pub context_menu: Option<PointerPosition>,
    pub selection_box: Option<SelectionRect>,
    pub icon_drag_active: bool,
    pub window_drag_active: bool,
}

/// Initial position of one icon captured when a drag is armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDragOrigin {
    pub icon_id: IconId,
    pub x: i32,
    pub y: i32,
}

/// An armed or in-progress icon drag. `dragging` stays false until the
/// pointer leaves the slop threshold, which is what distinguishes a click
/// from a drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDragSession {
    pub pointer_start: PointerPosition,
    pub dragging: bool,
    pub origins: Vec<IconDragOrigin>,
}

/// An in-progress window drag. Window drags have no slop threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDragSession {
    pub app_id: AppId,
    pub pointer_start: PointerPosition,
    pub origin_x: i32,
    pub origin_y: i32,
}

/// The rubber-band selection box: fixed anchor, live cursor corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RubberBand {
    pub anchor: PointerPosition,
    pub cursor: PointerPosition,
}

impl RubberBand {
    /// Axis-aligned rectangle normalized so min/max hold on both axes.
    pub fn rect(&self) -> SelectionRect {
        SelectionRect::from_corners(self.anchor, self.cursor)
    }
}

/// Transient pointer-gesture state. Exists only between pointer-down and
/// pointer-up; at most one session of each kind, and the router never starts
/// two kinds within a single gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    pub icon_drag: Option<IconDragSession>,
    pub window_drag: Option<WindowDragSession>,
    pub rubber_band: Option<RubberBand>,
}

impl InteractionState {
    /// Drops every transient session unconditionally.
    pub fn clear(&mut self) {
        self.icon_drag = None;
        self.window_drag = None;
        self.rubber_band = None;
    }
}
