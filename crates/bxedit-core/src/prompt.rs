//! Single-line input prompt shown in the message bar.
//!
//! A [`Prompt`] edits its own buffer; after every keystroke the session hands the buffer and the
//! key to the prompt's [`PromptCallback`], which is how the find prompt searches as you type.

use crate::key::Key;
use crate::session::EditorSession;
use std::fmt;
use std::path::Path;

/// What the committed text will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPurpose {
    /// Name an unnamed document, then save it.
    SaveAs,
    /// Replace the document with another file.
    Open,
    /// Incremental search.
    Find,
}

/// Result of feeding one key into a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Still editing.
    Pending,
    /// Enter on a non-empty buffer.
    Committed(String),
    /// Escape.
    Cancelled,
}

/// Per-keystroke hook run after the prompt buffer has been updated.
pub trait PromptCallback: fmt::Debug {
    /// Called with the current buffer and the key that was just handled.
    fn on_key(&mut self, session: &mut EditorSession, input: &str, key: Key);

    /// Extra text appended to the prompt line.
    fn hint(&self) -> Option<&str> {
        None
    }
}

/// Plain prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCallback;

impl PromptCallback for NoCallback {
    fn on_key(&mut self, _session: &mut EditorSession, _input: &str, _key: Key) {}
}

/// Runs one search step per keystroke.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchCallback;

impl PromptCallback for SearchCallback {
    fn on_key(&mut self, session: &mut EditorSession, input: &str, key: Key) {
        session.search_step(input, key);
    }
}

/// Tells the user whether the typed path exists.
#[derive(Debug, Clone, Default)]
pub struct OpenFileCallback {
    hint: Option<String>,
}

impl PromptCallback for OpenFileCallback {
    fn on_key(&mut self, _session: &mut EditorSession, input: &str, _key: Key) {
        self.hint = if input.is_empty() {
            None
        } else {
            let path = Path::new(input);
            let label = if path.is_file() {
                "file"
            } else if path.is_dir() {
                "directory"
            } else {
                "not found"
            };
            Some(label.to_string())
        };
    }

    fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }
}

/// An open prompt: template, buffer, purpose and callback.
#[derive(Debug)]
pub struct Prompt {
    template: String,
    pub(crate) buffer: String,
    purpose: PromptPurpose,
    pub(crate) callback: Box<dyn PromptCallback>,
}

impl Prompt {
    /// Create a prompt. `template` shows the buffer where it contains `%s`.
    pub fn new(
        template: impl Into<String>,
        purpose: PromptPurpose,
        callback: Box<dyn PromptCallback>,
    ) -> Self {
        Self {
            template: template.into(),
            buffer: String::new(),
            purpose,
            callback,
        }
    }

    /// Text currently typed.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Purpose the prompt was opened for.
    pub fn purpose(&self) -> PromptPurpose {
        self.purpose
    }

    /// The line to display: template with the buffer substituted, plus the callback hint.
    pub fn display(&self) -> String {
        let mut text = self.template.replacen("%s", &self.buffer, 1);
        if let Some(hint) = self.callback.hint() {
            text.push_str(" [");
            text.push_str(hint);
            text.push(']');
        }
        text
    }

    /// Apply `key` to the buffer.
    pub fn edit(&mut self, key: Key) -> PromptOutcome {
        match key {
            Key::Enter if !self.buffer.is_empty() => PromptOutcome::Committed(self.buffer.clone()),
            Key::Escape => PromptOutcome::Cancelled,
            Key::Backspace | Key::Delete | Key::Ctrl('h') => {
                self.buffer.pop();
                PromptOutcome::Pending
            }
            Key::Char(c) if !c.is_control() => {
                self.buffer.push(c);
                PromptOutcome::Pending
            }
            _ => PromptOutcome::Pending,
        }
    }
}
