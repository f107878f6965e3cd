//! The drag coordinator: latent icon drags with click/drag disambiguation,
//! and threshold-free window drags.
//!
//! An icon drag arms on pointer-down but moves nothing until the pointer
//! leaves the slop threshold, so a plain click only selects. The per-move
//! position gate deliberately checks the x axis alone alongside the armed
//! flag; the flag itself flips on either axis. This asymmetry reproduces the
//! reference behavior exactly and is part of the observable contract.

use desktop_contract::{AppId, IconId, PointerPosition};

use crate::model::{
    DesktopState, IconDragOrigin, IconDragSession, InteractionState, WindowDragSession,
};
use crate::window_manager;

/// Displacement (per axis, in px) a press must exceed before it counts as a
/// drag rather than a click.
pub const DRAG_SLOP_PX: i32 = 3;

/// Arms a latent icon drag for the current selection.
///
/// Call after press-selection has run, so the selection set is exactly the
/// group to move: the pressed icon alone, or the preserved multi-selection.
/// Initial positions of every member are captured now; positions stay
/// untouched until the slop threshold is exceeded.
pub fn arm_icon_drag(
    state: &DesktopState,
    interaction: &mut InteractionState,
    pointer: PointerPosition,
) {
    let origins: Vec<IconDragOrigin> = state
        .icons
        .iter()
        .filter(|icon| state.selected_icons.contains(&icon.id))
        .map(|icon| IconDragOrigin {
            icon_id: icon.id,
            x: icon.x,
            y: icon.y,
        })
        .collect();
    interaction.icon_drag = Some(IconDragSession {
        pointer_start: pointer,
        dragging: false,
        origins,
    });
}

/// Advances an armed icon drag for one pointer-move.
///
/// The armed flag flips once displacement exceeds the slop on either axis,
/// but this move updates positions only when the flag was already set before
/// the event, or the x displacement alone exceeds the slop.
pub fn update_icon_drag(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    pointer: PointerPosition,
) {
    let Some(session) = interaction.icon_drag.as_mut() else {
        return;
    };
    let dx = pointer.x - session.pointer_start.x;
    let dy = pointer.y - session.pointer_start.y;

    let was_dragging = session.dragging;
    if !was_dragging && (dx.abs() > DRAG_SLOP_PX || dy.abs() > DRAG_SLOP_PX) {
        session.dragging = true;
    }

    if was_dragging || dx.abs() > DRAG_SLOP_PX {
        for origin in &session.origins {
            if let Some(icon) = state.icon_mut(origin.icon_id) {
                icon.x = origin.x + dx;
                icon.y = origin.y + dy;
            }
        }
    }
}

/// Grabs a window by its title bar: transfers focus, then opens a drag
/// session unless the window is maximized (maximized windows are not
/// draggable until restored). Returns whether a session was started.
pub fn begin_window_drag(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    app_id: AppId,
    pointer: PointerPosition,
) -> bool {
    window_manager::focus_window(state, app_id);
    let Some(window) = state.window(app_id) else {
        return false;
    };
    if !window.open || window.maximized {
        return false;
    }
    interaction.window_drag = Some(WindowDragSession {
        app_id,
        pointer_start: pointer,
        origin_x: window.rect.x,
        origin_y: window.rect.y,
    });
    true
}

/// Moves the dragged window by the pointer displacement. No slop threshold:
/// a title-bar press is not also a selection, so there is nothing to
/// disambiguate.
pub fn update_window_drag(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    pointer: PointerPosition,
) {
    let Some(session) = interaction.window_drag.as_ref() else {
        return;
    };
    let dx = pointer.x - session.pointer_start.x;
    let dy = pointer.y - session.pointer_start.y;
    if let Some(window) = state.window_mut(session.app_id) {
        window.rect.x = session.origin_x + dx;
        window.rect.y = session.origin_y + dy;
    }
}

/// Ids of the icons captured by the active icon-drag session, in catalog
/// order. Empty when no session is armed.
pub fn dragged_icon_ids(interaction: &InteractionState) -> Vec<IconId> {
    interaction
        .icon_drag
        .as_ref()
        .map(|session| session.origins.iter().map(|o| o.icon_id).collect())
        .unwrap_or_default()
}
