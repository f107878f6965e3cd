//! Shared contract types between the desktop interaction engine and its
//! external collaborators (render layer, chat-driven command layer).
//!
//! The application and icon catalogs are closed: every id is a compile-time
//! enum variant, so adding an app is a checked variant addition and the
//! engine never has to handle a structurally unknown id. Strings only enter
//! at the command-channel boundary, through [`SystemCommand::parse`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier for a catalog application. One window exists per id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppId {
    /// System overview / drive browser.
    Computer,
    /// Document archive viewer.
    Documents,
    /// Web browser shell.
    Browser,
    /// Control panel.
    ControlPanel,
    /// Audio player.
    MediaPlayer,
    /// Security camera feed viewer.
    CameraFeed,
    /// Plain-text notepad.
    Notes,
    /// Hardware diagnostics suite.
    Diagnostics,
    /// Command-prompt assistant console.
    Assistant,
}

impl AppId {
    /// Every application id, in catalog order.
    pub const ALL: [AppId; 9] = [
        AppId::Computer,
        AppId::Documents,
        AppId::Browser,
        AppId::ControlPanel,
        AppId::MediaPlayer,
        AppId::CameraFeed,
        AppId::Notes,
        AppId::Diagnostics,
        AppId::Assistant,
    ];

    /// Stable string form used on the external command channel.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Computer => "computer",
            Self::Documents => "documents",
            Self::Browser => "browser",
            Self::ControlPanel => "control_panel",
            Self::MediaPlayer => "media_player",
            Self::CameraFeed => "camera_feed",
            Self::Notes => "notes",
            Self::Diagnostics => "diagnostics",
            Self::Assistant => "assistant",
        }
    }

    /// Resolves a command-channel slug to an id. Unknown slugs yield `None`;
    /// the command layer treats that as a stray command and drops it.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.slug() == raw.trim())
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Stable identifier for a desktop icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconId {
    /// Shortcut to [`AppId::Computer`].
    Computer,
    /// Shortcut to [`AppId::Documents`].
    Documents,
    /// Shortcut to [`AppId::Browser`].
    Browser,
    /// Trash can. Has no launch target.
    Trash,
    /// Shortcut to [`AppId::ControlPanel`].
    ControlPanel,
    /// Shortcut to [`AppId::MediaPlayer`].
    MediaPlayer,
    /// Shortcut to [`AppId::CameraFeed`].
    CameraFeed,
    /// Shortcut to [`AppId::Notes`].
    Notes,
    /// Shortcut to [`AppId::Diagnostics`].
    Diagnostics,
    /// Shortcut to [`AppId::Assistant`].
    Assistant,
}

impl IconId {
    /// Every icon id, in catalog order.
    pub const ALL: [IconId; 10] = [
        IconId::Computer,
        IconId::Documents,
        IconId::Browser,
        IconId::Trash,
        IconId::ControlPanel,
        IconId::MediaPlayer,
        IconId::CameraFeed,
        IconId::Notes,
        IconId::Diagnostics,
        IconId::Assistant,
    ];

    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Computer => "computer",
            Self::Documents => "documents",
            Self::Browser => "browser",
            Self::Trash => "trash",
            Self::ControlPanel => "control-panel",
            Self::MediaPlayer => "media-player",
            Self::CameraFeed => "camera-feed",
            Self::Notes => "notes",
            Self::Diagnostics => "diagnostics",
            Self::Assistant => "assistant",
        }
    }

    /// The application a double-click on this icon launches, if any.
    pub const fn launch_target(self) -> Option<AppId> {
        match self {
            Self::Computer => Some(AppId::Computer),
            Self::Documents => Some(AppId::Documents),
            Self::Browser => Some(AppId::Browser),
            Self::Trash => None,
            Self::ControlPanel => Some(AppId::ControlPanel),
            Self::MediaPlayer => Some(AppId::MediaPlayer),
            Self::CameraFeed => Some(AppId::CameraFeed),
            Self::Notes => Some(AppId::Notes),
            Self::Diagnostics => Some(AppId::Diagnostics),
            Self::Assistant => Some(AppId::Assistant),
        }
    }
}

/// A pointer position in desktop-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl PointerPosition {
    /// Convenience constructor.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// What the render layer's hit-testing resolved under a pointer-down.
///
/// Hit-testing itself lives in the render layer; the engine only routes on
/// the resolved target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitTarget {
    /// Empty desktop background.
    Desktop,
    /// A desktop icon.
    Icon(IconId),
    /// The title bar of a window.
    WindowTitleBar(AppId),
}

/// A system-level command arriving from outside the engine (the chat
/// assistant's action channel, the start menu, an ambient-effect scheduler).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemCommand {
    /// Open (or re-surface) an application window.
    OpenApp(AppId),
    /// Close an application window.
    CloseApp(AppId),
    /// Power down: clears all transient interaction state.
    Shutdown,
    /// Reboot: resets the desktop to its initial catalog state.
    Restart,
}

/// Errors produced while parsing the untrusted string command channel.
///
/// These never escalate: the command layer logs-and-drops a stray command
/// rather than crashing the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    /// The action verb is not part of the command vocabulary.
    #[error("unknown command action `{0}`")]
    UnknownAction(String),
    /// The action requires an application payload but none was supplied.
    #[error("command `{0}` is missing its application payload")]
    MissingPayload(&'static str),
    /// The payload does not name a catalog application.
    #[error("unknown application id `{0}`")]
    UnknownApp(String),
}

impl SystemCommand {
    /// Parses an `(action, payload)` pair from the external command channel.
    pub fn parse(action: &str, payload: Option<&str>) -> Result<Self, CommandParseError> {
        match action.trim() {
            "OPEN_APP" => {
                let raw = payload.ok_or(CommandParseError::MissingPayload("OPEN_APP"))?;
                let app_id = AppId::parse(raw)
                    .ok_or_else(|| CommandParseError::UnknownApp(raw.to_string()))?;
                Ok(Self::OpenApp(app_id))
            }
            "CLOSE_APP" => {
                let raw = payload.ok_or(CommandParseError::MissingPayload("CLOSE_APP"))?;
                let app_id = AppId::parse(raw)
                    .ok_or_else(|| CommandParseError::UnknownApp(raw.to_string()))?;
                Ok(Self::CloseApp(app_id))
            }
            "SHUTDOWN" => Ok(Self::Shutdown),
            "RESTART" => Ok(Self::Restart),
            other => Err(CommandParseError::UnknownAction(other.to_string())),
        }
    }
}
