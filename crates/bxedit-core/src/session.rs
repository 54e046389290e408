//! The editing session.
//!
//! [`EditorSession`] owns everything one editor window needs (document, cursor, viewport,
//! search state, prompt, status message) and turns abstract [`Key`]s into document edits and
//! cursor moves. It is driven synchronously: one key in, one [`ScreenSnapshot`] out.

use crate::config::EditorConfig;
use crate::cursor::Cursor;
use crate::document::Document;
use crate::error::{EditorError, Result};
use crate::key::Key;
use crate::prompt::{
    NoCallback, OpenFileCallback, Prompt, PromptCallback, PromptOutcome, PromptPurpose,
    SearchCallback,
};
use crate::search::SearchEngine;
use crate::snapshot::{ScreenRow, ScreenSnapshot, StatusLine, TopBar};
use crate::viewport::Viewport;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Program name shown in the top bar and welcome banner.
pub const NAME: &str = "bxedit";

/// Program version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rows taken by the top bar, the status bar and the message bar.
pub const CHROME_ROWS: usize = 3;

/// Shortcut summary shown on start-up and by Ctrl-G.
pub const HELP_MESSAGE: &str =
    "HELP: Ctrl-S = save | Ctrl-X = quit | Ctrl-F = find | Ctrl-O = open | Ctrl-G = help";

/// The last edit-like operation, shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Text was inserted.
    Insert,
    /// Text was deleted.
    Delete,
    /// The document was saved.
    Save,
}

impl Operation {
    /// Status bar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Insert => "(INSERT)",
            Self::Delete => "(DELETE)",
            Self::Save => "(SAVE)",
        }
    }
}

/// Whether the session wants to keep running after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep going.
    Continue,
    /// The user quit.
    Quit,
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    at: Instant,
}

/// One editing session.
#[derive(Debug)]
pub struct EditorSession {
    document: Document,
    cursor: Cursor,
    viewport: Viewport,
    rx: usize,
    search: SearchEngine,
    prompt: Option<Prompt>,
    find_snapshot: Option<(Cursor, Viewport)>,
    config: EditorConfig,
    screen_rows: usize,
    screen_cols: usize,
    status: Option<StatusMessage>,
    last_operation: Option<Operation>,
    quit_remaining: usize,
}

impl EditorSession {
    /// Start a session on `document`.
    pub fn new(document: Document, config: EditorConfig) -> Self {
        Self {
            document,
            cursor: Cursor::default(),
            viewport: Viewport::default(),
            rx: 0,
            search: SearchEngine::new(),
            prompt: None,
            find_snapshot: None,
            config,
            screen_rows: 0,
            screen_cols: 0,
            status: None,
            last_operation: None,
            quit_remaining: config.quit_times,
        }
    }

    /// Start a session on `path`. A path that does not exist yet gives an empty document with
    /// that name.
    pub fn with_file(path: impl Into<PathBuf>, config: EditorConfig) -> Result<Self> {
        let path = path.into();
        match Document::open(&path) {
            Ok(document) => Ok(Self::new(document, config)),
            Err(EditorError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "starting new file");
                let mut document = Document::new();
                document.set_filename(&path);
                let mut session = Self::new(document, config);
                session.set_status(format!("New file: {}", path.display()));
                Ok(session)
            }
            Err(err) => Err(err),
        }
    }

    /// The document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Cursor in raw coordinates.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Current scroll offsets.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Session configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The open prompt, if any.
    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    /// Last edit-like operation.
    pub fn last_operation(&self) -> Option<Operation> {
        self.last_operation
    }

    /// Current status message text, regardless of age.
    pub fn status_message(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }

    /// Set the transient status message.
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            at: Instant::now(),
        });
    }

    /// Record the full terminal size. The text area excludes the three bar rows.
    pub fn set_screen_size(&mut self, rows: usize, cols: usize) {
        self.screen_rows = rows.saturating_sub(CHROME_ROWS);
        self.screen_cols = cols;
    }

    /// Height of the text area.
    pub fn text_rows(&self) -> usize {
        self.screen_rows
    }

    /// Move the cursor, clamped into the document.
    pub fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
        self.cursor.clamp(&self.document);
    }

    /// Handle one key press.
    pub fn process_key(&mut self, key: Key) -> KeyOutcome {
        if self.prompt.is_some() {
            self.process_prompt_key(key);
            return KeyOutcome::Continue;
        }

        match key {
            Key::Ctrl('x') => return self.request_quit(),
            Key::Ctrl('s') => self.save(),
            Key::Ctrl('f') => self.start_find(),
            Key::Ctrl('o') => self.start_open(),
            Key::Ctrl('g') => self.set_status(HELP_MESSAGE),
            Key::Enter => self.insert_newline(),
            Key::Backspace | Key::Ctrl('h') => self.delete_char(),
            Key::Delete => {
                self.cursor.move_right(&self.document);
                self.delete_char();
            }
            Key::Home => self.cursor.home(),
            Key::End => self.cursor.end(&self.document),
            Key::PageUp => self.page_up(),
            Key::PageDown => self.page_down(),
            Key::Up => self.cursor.move_up(&self.document),
            Key::Down => self.cursor.move_down(&self.document),
            Key::Left => self.cursor.move_left(&self.document),
            Key::Right => self.cursor.move_right(&self.document),
            Key::Char(c) if key.is_text() => self.insert_char(c),
            Key::Char(_) | Key::Ctrl(_) | Key::Escape => {}
        }
        self.cursor.clamp(&self.document);
        self.quit_remaining = self.config.quit_times;
        KeyOutcome::Continue
    }

    fn request_quit(&mut self) -> KeyOutcome {
        if self.document.is_dirty() && self.quit_remaining > 0 {
            self.set_status(format!(
                "WARNING!!! File has unsaved changes. Press Ctrl-X {} more times to quit.",
                self.quit_remaining
            ));
            debug!(remaining = self.quit_remaining, "quit refused");
            self.quit_remaining -= 1;
            return KeyOutcome::Continue;
        }
        info!("quit");
        KeyOutcome::Quit
    }

    /// Insert `ch` at the cursor. On the virtual end line a new line is appended first.
    pub fn insert_char(&mut self, ch: char) {
        if self.cursor.row == self.document.line_count() {
            self.document.insert_line(self.cursor.row, "");
        }
        self.document
            .insert_char(self.cursor.row, self.cursor.col, ch);
        self.cursor.col += 1;
        self.last_operation = Some(Operation::Insert);
    }

    /// Split the line at the cursor and move to the start of the new line.
    pub fn insert_newline(&mut self) {
        self.document.split_line(self.cursor.row, self.cursor.col);
        self.cursor.row += 1;
        self.cursor.col = 0;
        self.last_operation = Some(Operation::Insert);
    }

    /// Backspace: delete before the cursor, joining with the previous line at column 0.
    pub fn delete_char(&mut self) {
        if self.cursor.row >= self.document.line_count() {
            return;
        }
        if self.cursor.col == 0 && self.cursor.row == 0 {
            return;
        }

        if self.cursor.col > 0 {
            if self
                .document
                .delete_char(self.cursor.row, self.cursor.col)
            {
                self.cursor.col -= 1;
            }
        } else if let Some(join_col) = self.document.join_with_previous(self.cursor.row) {
            self.cursor.row -= 1;
            self.cursor.col = join_col;
        }
        self.last_operation = Some(Operation::Delete);
    }

    fn page_up(&mut self) {
        self.cursor.row = self.viewport.row_offset;
        self.cursor.clamp(&self.document);
        for _ in 0..self.screen_rows {
            self.cursor.move_up(&self.document);
        }
    }

    fn page_down(&mut self) {
        let bottom = (self.viewport.row_offset + self.screen_rows).saturating_sub(1);
        self.cursor.row = bottom.min(self.document.line_count());
        self.cursor.clamp(&self.document);
        for _ in 0..self.screen_rows {
            self.cursor.move_down(&self.document);
        }
    }

    /// Save to the current filename, or ask for one.
    pub fn save(&mut self) {
        self.last_operation = Some(Operation::Save);
        if self.document.filename().is_none() {
            self.open_prompt(
                "Save as: %s (ESC to cancel)",
                PromptPurpose::SaveAs,
                Box::new(NoCallback),
            );
            return;
        }
        self.write_document();
    }

    fn write_document(&mut self) {
        match self.document.save() {
            Ok(bytes) => self.set_status(format!("{bytes} bytes written to disk")),
            Err(err) => {
                warn!(error = %err, "save failed");
                self.set_status(format!("Can't save! I/O error: {err}"));
            }
        }
    }

    /// Replace the document with the file at `path`.
    ///
    /// Refused while the current document has unsaved changes. On failure nothing changes.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        if self.document.is_dirty() {
            return Err(EditorError::UnsavedChanges);
        }
        let document = Document::open(path)?;
        self.search.reset(&mut self.document);
        self.document = document;
        self.cursor = Cursor::default();
        self.viewport = Viewport::default();
        self.last_operation = None;
        Ok(())
    }

    fn start_open(&mut self) {
        self.open_prompt(
            "Open: %s (ESC to cancel)",
            PromptPurpose::Open,
            Box::new(OpenFileCallback::default()),
        );
    }

    fn start_find(&mut self) {
        self.find_snapshot = Some((self.cursor, self.viewport));
        self.open_prompt(
            "Search: %s (ESC to cancel / Arrows to move / Enter to confirm)",
            PromptPurpose::Find,
            Box::new(SearchCallback),
        );
    }

    fn open_prompt(
        &mut self,
        template: &str,
        purpose: PromptPurpose,
        callback: Box<dyn PromptCallback>,
    ) {
        self.prompt = Some(Prompt::new(template, purpose, callback));
    }

    fn process_prompt_key(&mut self, key: Key) {
        let Some(mut prompt) = self.prompt.take() else {
            return;
        };
        let outcome = prompt.edit(key);
        prompt.callback.on_key(self, &prompt.buffer, key);

        match outcome {
            PromptOutcome::Pending => self.prompt = Some(prompt),
            PromptOutcome::Committed(text) => self.finish_prompt(prompt.purpose(), Some(text)),
            PromptOutcome::Cancelled => self.finish_prompt(prompt.purpose(), None),
        }
    }

    fn finish_prompt(&mut self, purpose: PromptPurpose, input: Option<String>) {
        match (purpose, input) {
            (PromptPurpose::SaveAs, Some(name)) => {
                self.document.set_filename(name);
                self.write_document();
            }
            (PromptPurpose::SaveAs, None) => self.set_status("Save aborted"),
            (PromptPurpose::Open, Some(path)) => match self.open(&path) {
                Ok(()) => self.set_status(format!(
                    "Opened {} ({} lines)",
                    path,
                    self.document.line_count()
                )),
                Err(EditorError::UnsavedChanges) => {
                    self.set_status("Unsaved changes! Save with Ctrl-S before opening another file")
                }
                Err(err) => {
                    warn!(error = %err, "open failed");
                    self.set_status(format!("Can't open! {err}"));
                }
            },
            (PromptPurpose::Open, None) => self.set_status("Open aborted"),
            (PromptPurpose::Find, committed) => {
                self.search.reset(&mut self.document);
                let snapshot = self.find_snapshot.take();
                if committed.is_none()
                    && let Some((cursor, viewport)) = snapshot
                {
                    self.cursor = cursor;
                    self.viewport = viewport;
                }
            }
        }
    }

    /// One incremental search step, moving the cursor to the match.
    pub fn search_step(&mut self, query: &str, key: Key) {
        if let Some(m) = self.search.on_key(&mut self.document, query, key) {
            self.cursor = Cursor::new(m.row, m.col);
            // Forces the next scroll to put the match on the top row.
            self.viewport.row_offset = self.document.line_count();
        }
    }

    /// Recompute scroll offsets for the current cursor.
    pub fn scroll(&mut self) {
        self.rx = self.viewport.scroll(
            &self.document,
            self.cursor,
            self.screen_rows,
            self.screen_cols,
        );
    }

    /// Scroll, then build the frame as of `now`.
    pub fn snapshot(&mut self, now: Instant) -> ScreenSnapshot {
        self.scroll();

        let filename = self
            .document
            .filename()
            .map_or_else(|| "[No Name]".to_string(), |p| p.display().to_string());
        let dirty = self.document.is_dirty();

        let rows = (0..self.screen_rows)
            .map(|y| self.screen_row(y))
            .collect();

        let message = match &self.prompt {
            Some(prompt) => Some(prompt.display()),
            None => self
                .status
                .as_ref()
                .filter(|s| now.saturating_duration_since(s.at) < self.config.message_timeout)
                .map(|s| s.text.clone()),
        };

        ScreenSnapshot {
            top_bar: TopBar {
                title: format!("{NAME} version --- {VERSION}"),
                filename: filename.clone(),
                dirty,
            },
            rows,
            status: StatusLine {
                filename,
                dirty,
                line_count: self.document.line_count(),
                line: self.cursor.row + 1,
                column: self.cursor.col + 1,
                last_operation: self.last_operation,
                syntax: self.document.syntax().map(|p| p.name),
            },
            message,
            cursor: (
                self.cursor.row.saturating_sub(self.viewport.row_offset),
                self.rx.saturating_sub(self.viewport.col_offset),
            ),
        }
    }

    fn screen_row(&self, y: usize) -> ScreenRow {
        let file_row = y + self.viewport.row_offset;
        let Some(line) = self.document.line(file_row) else {
            if self.document.line_count() == 0 && y == self.screen_rows / 3 {
                return ScreenRow::Welcome(self.welcome_text());
            }
            return ScreenRow::Empty;
        };

        let start = self.viewport.col_offset;
        let text: String = line
            .rendered()
            .chars()
            .skip(start)
            .take(self.screen_cols)
            .collect();
        let highlights = line
            .highlight()
            .iter()
            .skip(start)
            .take(self.screen_cols)
            .copied()
            .collect();
        ScreenRow::Text { text, highlights }
    }

    fn welcome_text(&self) -> String {
        let banner = format!("{NAME} editor -- version {VERSION}");
        let banner: String = banner.chars().take(self.screen_cols).collect();
        let len = banner.chars().count();
        let mut padding = (self.screen_cols - len) / 2;
        let mut out = String::new();
        if padding > 0 {
            out.push('~');
            padding -= 1;
        }
        out.extend(std::iter::repeat_n(' ', padding));
        out.push_str(&banner);
        out
    }
}
