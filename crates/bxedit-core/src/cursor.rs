//! Cursor position and movement, in raw coordinates.

use crate::document::Document;

/// Raw-coordinate cursor.
///
/// `row` ranges over `0..=line_count`; `row == line_count` is the virtual line past the end of
/// the file, where `col` is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Zero-based line index.
    pub row: usize,
    /// Zero-based character column in the raw line.
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at `(row, col)`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Pull the cursor back inside the document.
    pub fn clamp(&mut self, doc: &Document) {
        self.row = self.row.min(doc.line_count());
        self.col = self.col.min(doc.line_len(self.row));
    }

    /// Left; at column 0 wraps to the end of the previous line.
    pub fn move_left(&mut self, doc: &Document) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = doc.line_len(self.row);
        }
    }

    /// Right; at the end of a line wraps to the start of the next one.
    pub fn move_right(&mut self, doc: &Document) {
        if self.row >= doc.line_count() {
            return;
        }
        if self.col < doc.line_len(self.row) {
            self.col += 1;
        } else {
            self.row += 1;
            self.col = 0;
        }
    }

    /// Up one line, keeping the column where possible.
    pub fn move_up(&mut self, doc: &Document) {
        self.row = self.row.saturating_sub(1);
        self.clamp(doc);
    }

    /// Down one line (at most to the virtual end line), keeping the column where possible.
    pub fn move_down(&mut self, doc: &Document) {
        if self.row < doc.line_count() {
            self.row += 1;
        }
        self.clamp(doc);
    }

    /// Start of line.
    pub fn home(&mut self) {
        self.col = 0;
    }

    /// End of line.
    pub fn end(&mut self, doc: &Document) {
        self.col = doc.line_len(self.row);
    }
}
