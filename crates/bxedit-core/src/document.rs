//! Line store.
//!
//! A [`Document`] is an ordered list of [`Line`]s. Each line owns its raw text and keeps two
//! derived forms in sync with it: the tab-expanded rendered text and one [`Highlight`] per
//! rendered character. Every mutation re-derives the touched line and then walks forward while
//! the block-comment state handed to the next line keeps changing.
//!
//! All edit operations treat out-of-range indices and text containing `\n` or `\r` as no-ops.

use crate::error::{EditorError, Result};
use crate::highlight::{Highlight, highlight_line};
use crate::render::to_rendered;
use bxedit_lang::{SyntaxProfile, profile_for_filename};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

/// One line of text plus its derived render/highlight forms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    raw: String,
    rendered: String,
    highlight: Vec<Highlight>,
    open_comment: bool,
    comment_in: bool,
}

impl Line {
    fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let rendered = to_rendered(&raw);
        let highlight = vec![Highlight::Normal; rendered.chars().count()];
        Self {
            raw,
            rendered,
            highlight,
            open_comment: false,
            comment_in: false,
        }
    }

    /// Raw content, tabs unexpanded, no trailing newline.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Tab-expanded content.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// One tag per rendered character.
    pub fn highlight(&self) -> &[Highlight] {
        &self.highlight
    }

    /// `true` if a block comment is still open at the end of this line.
    pub fn open_comment(&self) -> bool {
        self.open_comment
    }

    /// Raw length in characters.
    pub fn len(&self) -> usize {
        self.raw.chars().count()
    }

    /// Returns `true` if the line has no characters.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub(crate) fn highlight_mut(&mut self) -> &mut [Highlight] {
        &mut self.highlight
    }

    fn update(&mut self, profile: Option<&SyntaxProfile>, comment_in: bool) {
        self.rendered = to_rendered(&self.raw);
        self.rehighlight(profile, comment_in);
    }

    fn rehighlight(&mut self, profile: Option<&SyntaxProfile>, comment_in: bool) {
        let hl = highlight_line(&self.rendered, profile, comment_in);
        self.highlight = hl.classes;
        self.open_comment = hl.open_comment;
        self.comment_in = comment_in;
    }
}

fn is_line_break(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

/// Byte offset of character column `col` in `s` (clamped to the end).
pub(crate) fn byte_offset(s: &str, col: usize) -> usize {
    s.char_indices().nth(col).map_or(s.len(), |(b, _)| b)
}

/// The edited file: lines, dirty counter, filename and active syntax profile.
#[derive(Debug, Clone, Default)]
pub struct Document {
    lines: Vec<Line>,
    dirty: usize,
    syntax: Option<&'static SyntaxProfile>,
    filename: Option<PathBuf>,
}

impl Document {
    /// Create an empty, unnamed document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from file content.
    ///
    /// Lines are split on `\n`; trailing `\r` characters are stripped. A final line without a
    /// terminating newline is kept. The result is clean (not dirty).
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .lines()
            .map(|line| Line::new(line.trim_end_matches('\r')))
            .collect();
        let mut doc = Self {
            lines,
            ..Self::default()
        };
        doc.rehighlight_all();
        doc
    }

    /// Load `path` and select a syntax profile from its name.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| EditorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut doc = Self::from_text(&text);
        doc.set_filename(path);
        info!(path = %path.display(), lines = doc.line_count(), "opened file");
        Ok(doc)
    }

    /// Serialize every line followed by a single `\n`.
    pub fn to_text(&self) -> String {
        let total: usize = self.lines.iter().map(|l| l.raw.len() + 1).sum();
        let mut out = String::with_capacity(total);
        for line in &self.lines {
            out.push_str(&line.raw);
            out.push('\n');
        }
        out
    }

    /// Write the document to its filename. Returns the number of bytes written.
    ///
    /// On failure the document, including its dirty state, is unchanged.
    pub fn save(&mut self) -> Result<usize> {
        let path = self.filename.clone().ok_or(EditorError::NoFilename)?;
        let text = self.to_text();
        fs::write(&path, &text).map_err(|source| EditorError::Io {
            path: path.clone(),
            source,
        })?;
        self.dirty = 0;
        info!(path = %path.display(), bytes = text.len(), "saved file");
        Ok(text.len())
    }

    /// Associated filename, if any.
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Name the document and reselect its syntax profile from the file name.
    pub fn set_filename(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        let profile = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(profile_for_filename);
        self.filename = Some(path);
        self.set_syntax(profile);
    }

    /// Active syntax profile.
    pub fn syntax(&self) -> Option<&'static SyntaxProfile> {
        self.syntax
    }

    /// Replace the syntax profile and re-highlight every line.
    pub fn set_syntax(&mut self, profile: Option<&'static SyntaxProfile>) {
        debug!(profile = profile.map(|p| p.name), "syntax profile selected");
        self.syntax = profile;
        self.rehighlight_all();
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line at `row`.
    pub fn line(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    pub(crate) fn line_mut(&mut self, row: usize) -> Option<&mut Line> {
        self.lines.get_mut(row)
    }

    /// All lines in order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Raw length of `row` in characters, `0` for rows past the end.
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, Line::len)
    }

    /// Returns `true` if the document has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    /// Number of mutations since the last load or save.
    pub fn dirty_count(&self) -> usize {
        self.dirty
    }

    /// Insert a new line holding `text` at index `at` (`0..=line_count`).
    pub fn insert_line(&mut self, at: usize, text: &str) {
        if at > self.lines.len() || text.contains(is_line_break) {
            return;
        }
        self.lines.insert(at, Line::new(text));
        self.refresh_line(at);
        self.dirty += 1;
    }

    /// Remove the line at `at`.
    pub fn delete_line(&mut self, at: usize) {
        if at >= self.lines.len() {
            return;
        }
        self.lines.remove(at);
        self.cascade_from(at);
        self.dirty += 1;
    }

    /// Insert `ch` at character column `col` of `row`. Columns past the end append.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) {
        if is_line_break(ch) {
            return;
        }
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        let at = byte_offset(&line.raw, col);
        line.raw.insert(at, ch);
        self.refresh_line(row);
        self.dirty += 1;
    }

    /// Delete the character before column `col` of `row`. Returns `true` if one was removed.
    pub fn delete_char(&mut self, row: usize, col: usize) -> bool {
        let Some(line) = self.lines.get_mut(row) else {
            return false;
        };
        if col == 0 || col > line.len() {
            return false;
        }
        let at = byte_offset(&line.raw, col - 1);
        line.raw.remove(at);
        self.refresh_line(row);
        self.dirty += 1;
        true
    }

    /// Append `text` to the end of `row`.
    pub fn append_text(&mut self, row: usize, text: &str) {
        if text.contains(is_line_break) {
            return;
        }
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        line.raw.push_str(text);
        self.refresh_line(row);
        self.dirty += 1;
    }

    /// Break `row` at column `col`.
    ///
    /// At column 0 an empty line is inserted before `row` and `row` itself is untouched
    /// (`row == line_count` is allowed here and appends). Otherwise `row` keeps `..col` and a new
    /// line with the remainder is inserted after it.
    pub fn split_line(&mut self, row: usize, col: usize) {
        if col == 0 {
            self.insert_line(row, "");
            return;
        }
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        let at = byte_offset(&line.raw, col);
        let tail = line.raw.split_off(at);
        self.refresh_line(row);
        self.dirty += 1;
        self.insert_line(row + 1, &tail);
    }

    /// Join `row` onto the end of `row - 1` and remove `row`.
    ///
    /// Returns the join column (the previous line's original length), or `None` if `row` is 0
    /// or out of range.
    pub fn join_with_previous(&mut self, row: usize) -> Option<usize> {
        if row == 0 || row >= self.lines.len() {
            return None;
        }
        let join_col = self.lines[row - 1].len();
        let tail = std::mem::take(&mut self.lines[row].raw);
        self.append_text(row - 1, &tail);
        self.delete_line(row);
        Some(join_col)
    }

    fn incoming_comment(&self, row: usize) -> bool {
        row.checked_sub(1)
            .and_then(|prev| self.lines.get(prev))
            .is_some_and(|line| line.open_comment)
    }

    /// Re-derive `row` from its raw text, then propagate comment state forward.
    fn refresh_line(&mut self, row: usize) {
        let incoming = self.incoming_comment(row);
        let profile = self.syntax;
        if let Some(line) = self.lines.get_mut(row) {
            line.update(profile, incoming);
        }
        self.cascade_from(row + 1);
    }

    /// Re-highlight lines from `start` while their incoming comment state is stale.
    fn cascade_from(&mut self, start: usize) {
        let profile = self.syntax;
        let mut row = start;
        while row < self.lines.len() {
            let incoming = self.incoming_comment(row);
            if self.lines[row].comment_in == incoming {
                break;
            }
            self.lines[row].rehighlight(profile, incoming);
            row += 1;
        }
        if row > start {
            trace!(start, end = row, "comment state cascade");
        }
    }

    fn rehighlight_all(&mut self) {
        let profile = self.syntax;
        let mut incoming = false;
        for line in &mut self.lines {
            line.rehighlight(profile, incoming);
            incoming = line.open_comment;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raws(doc: &Document) -> Vec<&str> {
        doc.lines().iter().map(Line::raw).collect()
    }

    #[test]
    fn test_from_text_splits_and_strips() {
        let doc = Document::from_text("a\r\nb\n\nc");
        assert_eq!(raws(&doc), vec!["a", "b", "", "c"]);
        assert!(!doc.is_dirty());

        assert_eq!(Document::from_text("").line_count(), 0);
        assert_eq!(Document::from_text("x\n").line_count(), 1);
    }

    #[test]
    fn test_insert_and_delete_char() {
        let mut doc = Document::from_text("héllo");
        doc.insert_char(0, 1, 'X');
        assert_eq!(doc.line(0).unwrap().raw(), "hXéllo");
        assert!(doc.delete_char(0, 3));
        assert_eq!(doc.line(0).unwrap().raw(), "hXllo");
        assert!(!doc.delete_char(0, 0));
        assert!(!doc.delete_char(5, 1));
        assert_eq!(doc.dirty_count(), 2);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut doc = Document::from_text("a");
        doc.insert_line(5, "x");
        doc.delete_line(1);
        doc.insert_char(1, 0, 'x');
        doc.append_text(3, "x");
        doc.split_line(4, 1);
        assert_eq!(doc.join_with_previous(0), None);
        assert_eq!(doc.join_with_previous(1), None);
        assert_eq!(raws(&doc), vec!["a"]);
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_split_at_zero_inserts_before() {
        let mut doc = Document::from_text("abc");
        doc.split_line(0, 0);
        assert_eq!(raws(&doc), vec!["", "abc"]);
    }

    #[test]
    fn test_split_and_join_are_inverse() {
        let mut doc = Document::from_text("hello\tworld");
        doc.split_line(0, 5);
        assert_eq!(raws(&doc), vec!["hello", "\tworld"]);
        assert_eq!(doc.join_with_previous(1), Some(5));
        assert_eq!(raws(&doc), vec!["hello\tworld"]);
    }

    #[test]
    fn test_rendered_tracks_raw() {
        let mut doc = Document::from_text("a");
        doc.insert_char(0, 0, '\t');
        let line = doc.line(0).unwrap();
        assert_eq!(line.rendered(), "        a");
        assert_eq!(line.highlight().len(), 9);
    }

    #[test]
    fn test_to_text_terminates_every_line() {
        let doc = Document::from_text("a\nb");
        assert_eq!(doc.to_text(), "a\nb\n");
    }

    #[test]
    fn test_set_filename_selects_profile() {
        let mut doc = Document::from_text("int x;");
        doc.set_filename("main.c");
        assert_eq!(doc.syntax().map(|p| p.name), Some("c"));
        assert_eq!(doc.line(0).unwrap().highlight()[0], Highlight::KeywordSecondary);

        doc.set_filename("notes.txt");
        assert!(doc.syntax().is_none());
        assert_eq!(doc.line(0).unwrap().highlight()[0], Highlight::Normal);
    }
}
