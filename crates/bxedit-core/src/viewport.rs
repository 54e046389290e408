//! Scroll offsets that keep the cursor on screen.

use crate::cursor::Cursor;
use crate::document::Document;
use crate::render::raw_column_to_rendered;

/// Top-left corner of the visible window, in rendered coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// First visible line.
    pub row_offset: usize,
    /// First visible rendered column.
    pub col_offset: usize,
}

impl Viewport {
    /// Create a viewport at the top-left of the document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll the minimum amount needed to bring `cursor` into a `rows` × `cols` window.
    ///
    /// Returns the cursor's rendered column. A zero-sized window leaves the offsets unchanged.
    pub fn scroll(&mut self, doc: &Document, cursor: Cursor, rows: usize, cols: usize) -> usize {
        let rx = doc
            .line(cursor.row)
            .map_or(0, |line| raw_column_to_rendered(line.raw(), cursor.col));

        if rows > 0 {
            if cursor.row < self.row_offset {
                self.row_offset = cursor.row;
            }
            if cursor.row >= self.row_offset + rows {
                self.row_offset = cursor.row - rows + 1;
            }
        }
        if cols > 0 {
            if rx < self.col_offset {
                self.col_offset = rx;
            }
            if rx >= self.col_offset + cols {
                self.col_offset = rx - cols + 1;
            }
        }
        rx
    }
}
