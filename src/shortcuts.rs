/// Global keyboard shortcuts
///
/// One pure mapping from key presses to console actions, fed by the
/// keyboard subscription. Anything not listed here falls through to
/// the focused widget.

use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};

/// Actions reachable from the keyboard anywhere in the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl+K (Cmd+K on macOS): jump to the search box and select
    /// its contents
    FocusSearch,
    /// Escape: close the open confirmation dialog
    CloseDialog,
}

/// Maps a key press to a shortcut, if it is one
pub fn map(key: Key, modifiers: Modifiers) -> Option<Shortcut> {
    match key.as_ref() {
        Key::Character("k") if modifiers.command() => Some(Shortcut::FocusSearch),
        Key::Named(Named::Escape) => Some(Shortcut::CloseDialog),
        _ => None,
    }
}
