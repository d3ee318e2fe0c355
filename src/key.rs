//! Key codes consumed by form widgets.
//!
//! This library does not decode terminal input. The hosting application
//! translates whatever its input layer produces into [`Key`] values and
//! feeds them to [`Form::handle_key`](crate::form::Form::handle_key), which
//! forwards them to the focused element and interprets the terminating keys
//! (Tab, Shift+Tab, Enter, Escape, arrows) as focus transitions.

/// A decoded key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// The Enter/Return key.
    Enter,
    /// The Escape key.
    Escape,
    /// The Tab key.
    Tab,
    /// Shift+Tab (back-tab).
    BackTab,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Backspace (delete before the cursor).
    Backspace,
    /// Delete (delete at the cursor).
    Delete,
    /// Home (start of line).
    Home,
    /// End (end of line).
    End,
}
