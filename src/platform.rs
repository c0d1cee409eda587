//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for builder and fill-in shortcuts (save, required, options, remove).
/// Terminals don't forward Cmd, so this is Ctrl everywhere.
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Save shortcut display for form help text
pub const SAVE_SHORTCUT: &str = "Ctrl+S";

/// Paste shortcut mentioned after copying a share link
/// - macOS: "Cmd+V"
/// - Linux/Windows: "Ctrl+V"
#[cfg(target_os = "macos")]
pub const PASTE_SHORTCUT: &str = "Cmd+V";

#[cfg(not(target_os = "macos"))]
pub const PASTE_SHORTCUT: &str = "Ctrl+V";
