//! Pointer-driven interaction and window-state engine for a simulated retro
//! desktop: windows, icons, rubber-band selection, drag gestures, z-order
//! and focus, all mutated through a single reducer.

pub mod catalog;
pub mod drag;
pub mod model;
pub mod reducer;
pub mod selection;
pub mod window_manager;

pub use catalog::initial_state;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use selection::{SelectionRect, ICON_HITBOX_HALF_EXTENT};
