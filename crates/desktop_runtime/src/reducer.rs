//! Reducer actions, side-effect intents, and the event router for the
//! desktop engine.
//!
//! Every mutation of [`DesktopState`] funnels through [`reduce_desktop`]:
//! raw pointer events from the render layer, taskbar/start-menu actions, and
//! system commands from the external command channel all arrive as
//! [`DesktopAction`] values on the same single-threaded queue. The reducer
//! is total: inapplicable actions (an unknown-window focus, a pointer-move
//! with no session) are silent no-ops, never errors.

use desktop_contract::{AppId, HitTarget, IconId, PointerPosition, SystemCommand};

use crate::catalog;
use crate::drag;
use crate::model::{DesktopState, InteractionState};
use crate::selection;
use crate::window_manager;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Raw pointer-down, with the hit target resolved by the render layer.
    PointerDown {
        /// Pointer position at press.
        pointer: PointerPosition,
        /// What was under the pointer.
        target: HitTarget,
    },
    /// Raw pointer-move; forwarded to whichever session is live.
    PointerMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Raw pointer-up; finalizes and clears all transient sessions.
    PointerUp,
    /// Context-menu trigger (right-click) on the desktop.
    ContextMenu {
        /// Where to place the menu.
        pointer: PointerPosition,
    },
    /// Open (or re-surface) an application window.
    OpenApp {
        /// Application to open.
        app_id: AppId,
    },
    /// Close an application window.
    CloseApp {
        /// Application to close.
        app_id: AppId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        app_id: AppId,
    },
    /// Toggle a window's maximized flag.
    MaximizeWindow {
        /// Window to toggle.
        app_id: AppId,
    },
    /// Focus (and raise) a window.
    FocusWindow {
        /// Window to focus.
        app_id: AppId,
    },
    /// Double-click on a desktop icon: launch its target, if it has one.
    ActivateIcon {
        /// Icon that was activated.
        icon_id: IconId,
    },
    /// Taskbar button behavior: minimize when active, focus otherwise.
    ToggleTaskbarWindow {
        /// Window associated with the taskbar button.
        app_id: AppId,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// A system-level command from the external command channel.
    ApplySystemCommand {
        /// Parsed command to apply.
        command: SystemCommand,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host to
/// execute. The engine never performs effects itself.
pub enum RuntimeEffect {
    /// Play a named UI sound cue.
    PlaySound(&'static str),
}

/// Applies a [`DesktopAction`] to the desktop model and collects resulting
/// side-effect intents.
///
/// This function is the authoritative state-transition engine: it owns the
/// dispatch between the selection engine, the drag coordinator, and the
/// window manager, and it is the only writer of both state structs.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::PointerDown { pointer, target } => match target {
            HitTarget::WindowTitleBar(app_id) => {
                effects.push(RuntimeEffect::PlaySound("click"));
                drag::begin_window_drag(state, interaction, app_id, pointer);
            }
            HitTarget::Icon(icon_id) => {
                state.context_menu = None;
                effects.push(RuntimeEffect::PlaySound("click"));
                selection::select_on_press(state, icon_id);
                drag::arm_icon_drag(state, interaction, pointer);
            }
            HitTarget::Desktop => {
                state.context_menu = None;
                state.start_menu_open = false;
                selection::begin_rubber_band(state, interaction, pointer);
            }
        },
        DesktopAction::PointerMove { pointer } => {
            drag::update_icon_drag(state, interaction, pointer);
            drag::update_window_drag(state, interaction, pointer);
            selection::update_rubber_band(interaction, pointer);
        }
        DesktopAction::PointerUp => {
            interaction.icon_drag = None;
            interaction.window_drag = None;
            selection::finalize_rubber_band(state, interaction);
        }
        DesktopAction::ContextMenu { pointer } => {
            effects.push(RuntimeEffect::PlaySound("click"));
            selection::clear_selection(state);
            state.start_menu_open = false;
            state.context_menu = Some(pointer);
        }
        DesktopAction::OpenApp { app_id } => {
            effects.push(RuntimeEffect::PlaySound("open"));
            window_manager::open_window(state, app_id);
        }
        DesktopAction::CloseApp { app_id } => {
            effects.push(RuntimeEffect::PlaySound("click"));
            window_manager::close_window(state, app_id);
        }
        DesktopAction::MinimizeWindow { app_id } => {
            effects.push(RuntimeEffect::PlaySound("minimize"));
            window_manager::minimize_window(state, app_id);
        }
        DesktopAction::MaximizeWindow { app_id } => {
            effects.push(RuntimeEffect::PlaySound("maximize"));
            window_manager::toggle_maximize(state, app_id);
        }
        DesktopAction::FocusWindow { app_id } => {
            effects.push(RuntimeEffect::PlaySound("click"));
            window_manager::focus_window(state, app_id);
        }
        DesktopAction::ActivateIcon { icon_id } => {
            if let Some(app_id) = icon_id.launch_target() {
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::OpenApp { app_id },
                ));
            }
        }
        DesktopAction::ToggleTaskbarWindow { app_id } => {
            let minimized = state
                .window(app_id)
                .map(|w| w.minimized)
                .unwrap_or(false);
            let next = if state.active_window == Some(app_id) && !minimized {
                DesktopAction::MinimizeWindow { app_id }
            } else {
                DesktopAction::FocusWindow { app_id }
            };
            effects.extend(reduce_desktop(state, interaction, next));
        }
        DesktopAction::ToggleStartMenu => {
            effects.push(RuntimeEffect::PlaySound("click"));
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::ApplySystemCommand { command } => match command {
            SystemCommand::OpenApp(app_id) => {
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::OpenApp { app_id },
                ));
            }
            SystemCommand::CloseApp(app_id) => {
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::CloseApp { app_id },
                ));
            }
            SystemCommand::Shutdown => {
                effects.push(RuntimeEffect::PlaySound("shutdown"));
                interaction.clear();
                state.context_menu = None;
                state.start_menu_open = false;
            }
            SystemCommand::Restart => {
                *state = catalog::initial_state();
                interaction.clear();
            }
        },
    }
    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::RubberBand;

    fn boot() -> (DesktopState, InteractionState) {
        (catalog::initial_state(), InteractionState::default())
    }

    fn down(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        pointer: (i32, i32),
        target: HitTarget,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(
            state,
            interaction,
            DesktopAction::PointerDown {
                pointer: PointerPosition::new(pointer.0, pointer.1),
                target,
            },
        )
    }

    fn mv(state: &mut DesktopState, interaction: &mut InteractionState, pointer: (i32, i32)) {
        reduce_desktop(
            state,
            interaction,
            DesktopAction::PointerMove {
                pointer: PointerPosition::new(pointer.0, pointer.1),
            },
        );
    }

    fn up(state: &mut DesktopState, interaction: &mut InteractionState) {
        reduce_desktop(state, interaction, DesktopAction::PointerUp);
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, app_id: AppId) {
        reduce_desktop(state, interaction, DesktopAction::OpenApp { app_id });
    }

    #[test]
    fn focus_sequences_keep_ranks_strictly_ordered_and_distinct() {
        let (mut state, mut interaction) = boot();
        open(&mut state, &mut interaction, AppId::Browser);
        open(&mut state, &mut interaction, AppId::Notes);
        open(&mut state, &mut interaction, AppId::CameraFeed);

        let sequence = [
            AppId::Browser,
            AppId::CameraFeed,
            AppId::Browser,
            AppId::Notes,
            AppId::CameraFeed,
        ];
        for target in sequence {
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::FocusWindow { app_id: target },
            );
            let focused_rank = state.window(target).unwrap().z_index;
            for other in state.windows.iter().filter(|w| w.app_id != target) {
                assert!(focused_rank > other.z_index);
            }
            let mut ranks: Vec<u32> = state
                .windows
                .iter()
                .filter(|w| w.open)
                .map(|w| w.z_index)
                .collect();
            ranks.sort_unstable();
            ranks.dedup();
            assert_eq!(
                ranks.len(),
                state.windows.iter().filter(|w| w.open).count(),
                "open windows must never share a rank after focus"
            );
        }
    }

    #[test]
    fn click_on_unselected_icon_selects_without_moving() {
        let (mut state, mut interaction) = boot();
        down(
            &mut state,
            &mut interaction,
            (40, 240),
            HitTarget::Icon(IconId::Trash),
        );
        up(&mut state, &mut interaction);

        assert_eq!(
            state.selected_icons.iter().copied().collect::<Vec<_>>(),
            vec![IconId::Trash]
        );
        let icon = state.icon(IconId::Trash).unwrap();
        assert_eq!((icon.x, icon.y), (10, 220));
        assert!(interaction.icon_drag.is_none());
    }

    #[test]
    fn drag_past_threshold_moves_icon_by_exact_displacement() {
        let (mut state, mut interaction) = boot();
        down(
            &mut state,
            &mut interaction,
            (40, 240),
            HitTarget::Icon(IconId::Trash),
        );
        mv(&mut state, &mut interaction, (50, 250));
        up(&mut state, &mut interaction);

        let icon = state.icon(IconId::Trash).unwrap();
        assert_eq!((icon.x, icon.y), (20, 230));
    }

    #[test]
    fn multi_drag_moves_every_selected_icon() {
        let (mut state, mut interaction) = boot();
        // Rubber-band Computer and Documents.
        down(&mut state, &mut interaction, (0, 0), HitTarget::Desktop);
        mv(&mut state, &mut interaction, (60, 130));
        up(&mut state, &mut interaction);
        assert_eq!(state.selected_icons.len(), 2);

        // Drag the group by pressing one member.
        down(
            &mut state,
            &mut interaction,
            (12, 12),
            HitTarget::Icon(IconId::Computer),
        );
        mv(&mut state, &mut interaction, (42, 52));
        up(&mut state, &mut interaction);

        let computer = state.icon(IconId::Computer).unwrap();
        let documents = state.icon(IconId::Documents).unwrap();
        assert_eq!((computer.x, computer.y), (40, 50));
        assert_eq!((documents.x, documents.y), (40, 120));
        assert_eq!(state.selected_icons.len(), 2);
    }

    #[test]
    fn rubber_band_replaces_selection_wholesale() {
        let (mut state, mut interaction) = boot();
        down(&mut state, &mut interaction, (0, 0), HitTarget::Desktop);
        mv(&mut state, &mut interaction, (60, 130));
        up(&mut state, &mut interaction);
        assert!(state.selected_icons.contains(&IconId::Computer));
        assert!(state.selected_icons.contains(&IconId::Documents));

        down(&mut state, &mut interaction, (0, 140), HitTarget::Desktop);
        mv(&mut state, &mut interaction, (60, 200));
        up(&mut state, &mut interaction);
        assert_eq!(
            state.selected_icons.iter().copied().collect::<Vec<_>>(),
            vec![IconId::Browser]
        );
    }

    #[test]
    fn empty_rubber_band_deselects_everything() {
        let (mut state, mut interaction) = boot();
        down(&mut state, &mut interaction, (0, 0), HitTarget::Desktop);
        mv(&mut state, &mut interaction, (60, 130));
        up(&mut state, &mut interaction);
        assert!(!state.selected_icons.is_empty());

        down(&mut state, &mut interaction, (700, 700), HitTarget::Desktop);
        mv(&mut state, &mut interaction, (710, 710));
        up(&mut state, &mut interaction);
        assert!(state.selected_icons.is_empty());
    }

    #[test]
    fn reopening_is_idempotent_on_flags_but_advances_rank() {
        let (mut state, mut interaction) = boot();
        open(&mut state, &mut interaction, AppId::Browser);
        let first = state.window(AppId::Browser).unwrap().clone();

        open(&mut state, &mut interaction, AppId::Browser);
        let second = state.window(AppId::Browser).unwrap();
        assert_eq!(second.open, first.open);
        assert_eq!(second.minimized, first.minimized);
        assert_eq!(state.active_window, Some(AppId::Browser));
        assert!(second.z_index > first.z_index);
    }

    #[test]
    fn window_drag_on_maximized_window_changes_nothing() {
        let (mut state, mut interaction) = boot();
        open(&mut state, &mut interaction, AppId::Browser);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                app_id: AppId::Browser,
            },
        );
        let rect_before = state.window(AppId::Browser).unwrap().rect;

        down(
            &mut state,
            &mut interaction,
            (200, 10),
            HitTarget::WindowTitleBar(AppId::Browser),
        );
        assert!(interaction.window_drag.is_none());
        mv(&mut state, &mut interaction, (300, 90));
        up(&mut state, &mut interaction);

        assert_eq!(state.window(AppId::Browser).unwrap().rect, rect_before);
    }

    #[test]
    fn closing_the_active_window_never_refocuses_another() {
        let (mut state, mut interaction) = boot();
        open(&mut state, &mut interaction, AppId::Browser);
        open(&mut state, &mut interaction, AppId::Notes);
        assert_eq!(state.active_window, Some(AppId::Notes));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseApp {
                app_id: AppId::Notes,
            },
        );
        assert_eq!(state.active_window, None);
        assert!(state.window(AppId::Browser).unwrap().open);
    }

    #[test]
    fn title_bar_press_focuses_and_starts_a_window_drag() {
        let (mut state, mut interaction) = boot();
        open(&mut state, &mut interaction, AppId::Browser);
        open(&mut state, &mut interaction, AppId::Notes);

        down(
            &mut state,
            &mut interaction,
            (70, 65),
            HitTarget::WindowTitleBar(AppId::Browser),
        );
        assert_eq!(state.active_window, Some(AppId::Browser));
        assert!(interaction.window_drag.is_some());

        mv(&mut state, &mut interaction, (75, 68));
        let rect = state.window(AppId::Browser).unwrap().rect;
        assert_eq!((rect.x, rect.y), (65, 63));
        up(&mut state, &mut interaction);
        assert!(interaction.window_drag.is_none());
    }

    #[test]
    fn desktop_press_clears_menus_and_selection_before_banding() {
        let (mut state, mut interaction) = boot();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleStartMenu,
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ContextMenu {
                pointer: PointerPosition::new(400, 300),
            },
        );
        assert!(state.context_menu.is_some());

        down(&mut state, &mut interaction, (5, 5), HitTarget::Desktop);
        assert_eq!(state.context_menu, None);
        assert!(!state.start_menu_open);
        assert!(state.selected_icons.is_empty());
        assert_eq!(
            interaction.rubber_band,
            Some(RubberBand {
                anchor: PointerPosition::new(5, 5),
                cursor: PointerPosition::new(5, 5),
            })
        );
    }

    #[test]
    fn pointer_move_and_up_with_no_session_are_noops() {
        let (mut state, mut interaction) = boot();
        let before = state.clone();
        mv(&mut state, &mut interaction, (250, 250));
        up(&mut state, &mut interaction);
        assert_eq!(state, before);
        assert_eq!(interaction, InteractionState::default());
    }

    #[test]
    fn activate_icon_opens_its_launch_target() {
        let (mut state, mut interaction) = boot();
        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateIcon {
                icon_id: IconId::CameraFeed,
            },
        );
        assert!(state.window(AppId::CameraFeed).unwrap().open);
        assert!(effects.contains(&RuntimeEffect::PlaySound("open")));

        let before = state.clone();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateIcon {
                icon_id: IconId::Trash,
            },
        );
        assert_eq!(state, before);
    }

    #[test]
    fn taskbar_toggle_minimizes_active_and_focuses_inactive() {
        let (mut state, mut interaction) = boot();
        open(&mut state, &mut interaction, AppId::Browser);
        open(&mut state, &mut interaction, AppId::Notes);

        // Browser is not active: toggle focuses it.
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow {
                app_id: AppId::Browser,
            },
        );
        assert_eq!(state.active_window, Some(AppId::Browser));

        // Browser is active and visible: toggle minimizes it.
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow {
                app_id: AppId::Browser,
            },
        );
        let browser = state.window(AppId::Browser).unwrap();
        assert!(browser.minimized);
        assert_eq!(state.active_window, None);

        // Minimized: toggle restores focus.
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow {
                app_id: AppId::Browser,
            },
        );
        let browser = state.window(AppId::Browser).unwrap();
        assert!(!browser.minimized);
        assert_eq!(state.active_window, Some(AppId::Browser));
    }

    #[test]
    fn chat_commands_funnel_through_the_same_reducer() {
        let (mut state, mut interaction) = boot();
        let command = SystemCommand::parse("OPEN_APP", Some("assistant")).unwrap();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ApplySystemCommand { command },
        );
        assert!(state.window(AppId::Assistant).unwrap().open);
        assert_eq!(state.active_window, Some(AppId::Assistant));

        let command = SystemCommand::parse("CLOSE_APP", Some("assistant")).unwrap();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ApplySystemCommand { command },
        );
        assert!(!state.window(AppId::Assistant).unwrap().open);
    }

    #[test]
    fn shutdown_clears_every_transient_session() {
        let (mut state, mut interaction) = boot();
        open(&mut state, &mut interaction, AppId::Browser);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleStartMenu,
        );
        down(
            &mut state,
            &mut interaction,
            (40, 240),
            HitTarget::Icon(IconId::Trash),
        );
        assert!(interaction.icon_drag.is_some());

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ApplySystemCommand {
                command: SystemCommand::Shutdown,
            },
        );
        assert_eq!(interaction, InteractionState::default());
        assert_eq!(state.context_menu, None);
        assert!(!state.start_menu_open);
        assert!(effects.contains(&RuntimeEffect::PlaySound("shutdown")));
        // Shutdown is only a transient reset; the layout survives.
        assert!(state.window(AppId::Browser).unwrap().open);
    }

    #[test]
    fn restart_resets_to_the_initial_catalog() {
        let (mut state, mut interaction) = boot();
        open(&mut state, &mut interaction, AppId::Browser);
        down(
            &mut state,
            &mut interaction,
            (40, 240),
            HitTarget::Icon(IconId::Trash),
        );
        mv(&mut state, &mut interaction, (140, 340));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ApplySystemCommand {
                command: SystemCommand::Restart,
            },
        );
        assert_eq!(state, catalog::initial_state());
        assert_eq!(interaction, InteractionState::default());
    }
}
