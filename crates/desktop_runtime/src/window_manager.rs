//! Z-order, focus, and window-flag transition helpers used by the reducer.
//!
//! Focus always assigns a fresh maximum rank instead of reindexing the stack,
//! so ranks grow monotonically over a session and never tie after a focus
//! event. Closing or minimizing the active window leaves no window active;
//! focus is never reassigned implicitly.

use desktop_contract::AppId;

use crate::model::DesktopState;

/// Raises `app_id` to the front and makes it the active window.
///
/// Clears the minimized flag. A window that is not open is not focusable;
/// the call is then a no-op. Returns whether focus was transferred.
pub fn focus_window(state: &mut DesktopState, app_id: AppId) -> bool {
    let next_rank = state.max_rank() + 1;
    let Some(window) = state.window_mut(app_id) else {
        return false;
    };
    if !window.open {
        return false;
    }
    window.z_index = next_rank;
    window.minimized = false;
    state.active_window = Some(app_id);
    true
}

/// Opens `app_id`, or re-surfaces it when already open.
///
/// Either way the window ends up front-most, active, and not minimized, and
/// the start menu closes. Returns whether the window exists.
pub fn open_window(state: &mut DesktopState, app_id: AppId) -> bool {
    let Some(window) = state.window_mut(app_id) else {
        return false;
    };
    window.open = true;
    focus_window(state, app_id);
    state.start_menu_open = false;
    true
}

/// Closes `app_id`. The active window becomes none when it was the one
/// closed; no other window is promoted.
pub fn close_window(state: &mut DesktopState, app_id: AppId) {
    if let Some(window) = state.window_mut(app_id) {
        window.open = false;
    }
    if state.active_window == Some(app_id) {
        state.active_window = None;
    }
}

/// Minimizes `app_id`, clearing the active window when it was active.
pub fn minimize_window(state: &mut DesktopState, app_id: AppId) {
    if let Some(window) = state.window_mut(app_id) {
        window.minimized = true;
    }
    if state.active_window == Some(app_id) {
        state.active_window = None;
    }
}

/// Toggles the maximized flag. Rank, focus, and the stored rect are left
/// untouched; the pre-maximize geometry is what restore returns to.
pub fn toggle_maximize(state: &mut DesktopState, app_id: AppId) {
    if let Some(window) = state.window_mut(app_id) {
        window.maximized = !window.maximized;
    }
}
