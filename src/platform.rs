//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for copy shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Copy-result shortcut display
/// - macOS: "Cmd+Y"
/// - Linux/Windows: "Ctrl+Y"
#[cfg(target_os = "macos")]
pub const COPY_SHORTCUT: &str = "Cmd+Y";

#[cfg(not(target_os = "macos"))]
pub const COPY_SHORTCUT: &str = "Ctrl+Y";
