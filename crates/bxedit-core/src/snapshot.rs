//! Headless screen snapshot.
//!
//! Everything a painter needs for one frame: visible text with its highlight tags, bars, the
//! message line and the cursor's screen position. The core never emits terminal codes itself.

use crate::highlight::Highlight;
use crate::session::Operation;

/// One row of the text area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenRow {
    /// A document line, clipped to the viewport. `highlights.len() == text.chars().count()`.
    Text {
        /// Visible rendered characters.
        text: String,
        /// Tag of each visible character.
        highlights: Vec<Highlight>,
    },
    /// Past the end of the document (drawn as `~`).
    Empty,
    /// Welcome banner for an empty document, already padded and clipped to the screen width.
    Welcome(String),
}

impl ScreenRow {
    /// Group consecutive characters that share a tag.
    pub fn runs(&self) -> Vec<(String, Highlight)> {
        let Self::Text { text, highlights } = self else {
            return Vec::new();
        };
        let mut runs: Vec<(String, Highlight)> = Vec::new();
        for (ch, hl) in text.chars().zip(highlights.iter().copied()) {
            match runs.last_mut() {
                Some((buf, current)) if *current == hl => buf.push(ch),
                _ => runs.push((ch.to_string(), hl)),
            }
        }
        runs
    }
}

/// Top bar content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopBar {
    /// Program name and version.
    pub title: String,
    /// Document name, or `[No Name]`.
    pub filename: String,
    /// Unsaved changes marker.
    pub dirty: bool,
}

/// Status bar content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// Document name, or `[No Name]`.
    pub filename: String,
    /// Unsaved changes marker.
    pub dirty: bool,
    /// Number of lines in the document.
    pub line_count: usize,
    /// Cursor line, 1-based.
    pub line: usize,
    /// Cursor raw column, 1-based.
    pub column: usize,
    /// Last editing operation.
    pub last_operation: Option<Operation>,
    /// Active syntax profile name.
    pub syntax: Option<&'static str>,
}

/// A full frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSnapshot {
    /// Top bar.
    pub top_bar: TopBar,
    /// Text area rows, exactly as many as the text area is tall.
    pub rows: Vec<ScreenRow>,
    /// Status bar.
    pub status: StatusLine,
    /// Message bar text: the open prompt, or a status message that has not expired.
    pub message: Option<String>,
    /// Cursor position inside the text area as `(row, column)`.
    pub cursor: (usize, usize),
}
