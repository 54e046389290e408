//! Abstract key events.
//!
//! Terminal front ends decode their raw input into [`Key`]s; the core never sees escape
//! sequences.

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character (including `'\t'`).
    Char(char),
    /// A letter pressed with Control held, lowercase.
    Ctrl(char),
    /// Enter / Return.
    Enter,
    /// Escape.
    Escape,
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
}

impl Key {
    /// Returns `true` for keys that insert text: non-control characters and tab.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Char(c) if *c == '\t' || !c.is_control())
    }
}
