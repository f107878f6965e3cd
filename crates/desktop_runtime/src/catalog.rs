//! Fixed application and icon catalogs plus initial-state construction.
//!
//! The catalogs are closed: every window and icon record the engine will ever
//! manage is created here, at initialization, and lives for the whole
//! session. A restart rebuilds this exact state.

use std::collections::BTreeSet;

use desktop_contract::{AppId, IconId};

use crate::model::{DesktopState, IconRecord, WindowRecord, WindowRect};

/// Rank assigned to every window at initialization. The rank domain starts
/// here; each focus event assigns `max(existing) + 1`.
pub const INITIAL_WINDOW_RANK: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub title: &'static str,
    pub glyph: &'static str,
    pub rect: WindowRect,
}

const APP_REGISTRY: [AppDescriptor; 9] = [
    AppDescriptor {
        app_id: AppId::Computer,
        title: "System Explorer",
        glyph: "💻",
        rect: WindowRect::new(50, 50, 400, 300),
    },
    AppDescriptor {
        app_id: AppId::Documents,
        title: "Records Archive",
        glyph: "🗄️",
        rect: WindowRect::new(80, 80, 500, 400),
    },
    AppDescriptor {
        app_id: AppId::Browser,
        title: "Net Browser",
        glyph: "🌐",
        rect: WindowRect::new(60, 60, 600, 450),
    },
    AppDescriptor {
        app_id: AppId::ControlPanel,
        title: "Control Panel",
        glyph: "⚙️",
        rect: WindowRect::new(150, 100, 450, 350),
    },
    AppDescriptor {
        app_id: AppId::MediaPlayer,
        title: "Showtime Audio",
        glyph: "🎵",
        rect: WindowRect::new(200, 200, 300, 400),
    },
    AppDescriptor {
        app_id: AppId::CameraFeed,
        title: "Security Feed - LIVE",
        glyph: "📹",
        rect: WindowRect::new(300, 50, 600, 450),
    },
    AppDescriptor {
        app_id: AppId::Notes,
        title: "Shift Log - Notepad",
        glyph: "📓",
        rect: WindowRect::new(100, 100, 400, 300),
    },
    AppDescriptor {
        app_id: AppId::Diagnostics,
        title: "Hardware Diagnostics",
        glyph: "🛠️",
        rect: WindowRect::new(120, 120, 400, 300),
    },
    AppDescriptor {
        app_id: AppId::Assistant,
        title: "Virtual Assistant",
        glyph: "🤖",
        rect: WindowRect::new(120, 120, 400, 500),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDescriptor {
    pub icon_id: IconId,
    pub title: &'static str,
    pub glyph: &'static str,
    pub x: i32,
    pub y: i32,
}

const ICON_REGISTRY: [IconDescriptor; 10] = [
    IconDescriptor {
        icon_id: IconId::Computer,
        title: "System",
        glyph: "💻",
        x: 10,
        y: 10,
    },
    IconDescriptor {
        icon_id: IconId::Documents,
        title: "Records",
        glyph: "🗄️",
        x: 10,
        y: 80,
    },
    IconDescriptor {
        icon_id: IconId::Browser,
        title: "Net",
        glyph: "🌐",
        x: 10,
        y: 150,
    },
    IconDescriptor {
        icon_id: IconId::Trash,
        title: "Trash",
        glyph: "🗑️",
        x: 10,
        y: 220,
    },
    IconDescriptor {
        icon_id: IconId::ControlPanel,
        title: "Sys Config",
        glyph: "⚙️",
        x: 100,
        y: 10,
    },
    IconDescriptor {
        icon_id: IconId::MediaPlayer,
        title: "Showtunes",
        glyph: "🎵",
        x: 100,
        y: 80,
    },
    IconDescriptor {
        icon_id: IconId::CameraFeed,
        title: "Sec. Cams",
        glyph: "📹",
        x: 100,
        y: 150,
    },
    IconDescriptor {
        icon_id: IconId::Notes,
        title: "Log Book",
        glyph: "📓",
        x: 100,
        y: 220,
    },
    IconDescriptor {
        icon_id: IconId::Diagnostics,
        title: "Maint. Tools",
        glyph: "🛠️",
        x: 190,
        y: 10,
    },
    IconDescriptor {
        icon_id: IconId::Assistant,
        title: "Assistant",
        glyph: "🤖",
        x: 190,
        y: 80,
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn icon_registry() -> &'static [IconDescriptor] {
    &ICON_REGISTRY
}

/// Builds the boot-time desktop: every window closed at rank 1, every icon
/// at its catalog position, nothing selected, no menus open.
pub fn initial_state() -> DesktopState {
    DesktopState {
        windows: APP_REGISTRY
            .iter()
            .map(|entry| WindowRecord {
                app_id: entry.app_id,
                title: entry.title.to_string(),
                glyph: entry.glyph.to_string(),
                rect: entry.rect,
                z_index: INITIAL_WINDOW_RANK,
                open: false,
                minimized: false,
                maximized: false,
            })
            .collect(),
        icons: ICON_REGISTRY
            .iter()
            .map(|entry| IconRecord {
                id: entry.icon_id,
                title: entry.title.to_string(),
                glyph: entry.glyph.to_string(),
                x: entry.x,
                y: entry.y,
            })
            .collect(),
        selected_icons: BTreeSet::new(),
        active_window: None,
        start_menu_open: false,
        context_menu: None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_app_id_has_exactly_one_window() {
        let state = initial_state();
        for app_id in AppId::ALL {
            let count = state.windows.iter().filter(|w| w.app_id == app_id).count();
            assert_eq!(count, 1, "app {app_id} should have one window record");
        }
    }

    #[test]
    fn every_icon_id_has_exactly_one_record() {
        let state = initial_state();
        for icon_id in IconId::ALL {
            let count = state.icons.iter().filter(|i| i.id == icon_id).count();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn boot_state_is_fully_closed_at_rank_one() {
        let state = initial_state();
        for window in &state.windows {
            assert!(!window.open);
            assert!(!window.minimized);
            assert!(!window.maximized);
            assert_eq!(window.z_index, INITIAL_WINDOW_RANK);
        }
        assert_eq!(state.active_window, None);
        assert!(state.selected_icons.is_empty());
        assert_eq!(state.front_window(), None);
    }
}
