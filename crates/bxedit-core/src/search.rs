//! Incremental, cyclic line search.
//!
//! The engine is driven one keystroke at a time while a find prompt is open. It scans rendered
//! text for a literal, case-sensitive substring, one line at a time in a ring starting just past
//! the previous match, and paints the hit with [`Highlight::SearchMatch`]. The overwritten tags
//! are kept so the overlay can be removed on the next keystroke.

use crate::document::Document;
use crate::highlight::Highlight;
use crate::key::Key;
use crate::render::rendered_column_to_raw;
use tracing::debug;

/// Direction in which the ring of lines is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    /// Towards higher line numbers.
    #[default]
    Forward,
    /// Towards lower line numbers.
    Backward,
}

/// What a keystroke means to an active search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    /// Enter: keep the cursor where it is and end the session.
    Commit,
    /// Escape: end the session; the caller restores its own cursor snapshot.
    Cancel,
    /// Right/Down: continue forward from the last match.
    Next,
    /// Left/Up: continue backward from the last match.
    Previous,
    /// Anything else: the query changed, search again from the top.
    Restart,
}

impl SearchAction {
    /// Classify a key press.
    pub fn from_key(key: Key) -> Self {
        match key {
            Key::Enter => Self::Commit,
            Key::Escape => Self::Cancel,
            Key::Right | Key::Down => Self::Next,
            Key::Left | Key::Up => Self::Previous,
            _ => Self::Restart,
        }
    }
}

/// A match, in both raw and rendered coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    /// Line index.
    pub row: usize,
    /// Raw column of the first matched character.
    pub col: usize,
    /// Rendered column of the first matched character.
    pub rx: usize,
    /// Match length in rendered characters.
    pub len: usize,
}

#[derive(Debug, Clone)]
struct SavedHighlight {
    row: usize,
    highlight: Vec<Highlight>,
}

/// Search session state.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    last_match: Option<usize>,
    direction: SearchDirection,
    saved: Option<SavedHighlight>,
}

impl SearchEngine {
    /// Create an idle engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Line of the last match, if any.
    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    /// Current direction.
    pub fn direction(&self) -> SearchDirection {
        self.direction
    }

    /// Feed one keystroke of the find prompt.
    pub fn on_key(&mut self, doc: &mut Document, query: &str, key: Key) -> Option<SearchMatch> {
        self.step(doc, query, SearchAction::from_key(key))
    }

    /// Advance the session by one action. Returns the new match, if one was found.
    pub fn step(
        &mut self,
        doc: &mut Document,
        query: &str,
        action: SearchAction,
    ) -> Option<SearchMatch> {
        self.restore_highlight(doc);

        match action {
            SearchAction::Commit | SearchAction::Cancel | SearchAction::Restart => {
                self.last_match = None;
                self.direction = SearchDirection::Forward;
                if action != SearchAction::Restart {
                    return None;
                }
            }
            SearchAction::Next => self.direction = SearchDirection::Forward,
            SearchAction::Previous => self.direction = SearchDirection::Backward,
        }
        if self.last_match.is_none() {
            self.direction = SearchDirection::Forward;
        }

        let count = doc.line_count();
        if query.is_empty() || count == 0 {
            return None;
        }

        let mut current = self.last_match;
        for _ in 0..count {
            let row = match (current, self.direction) {
                (None, _) => 0,
                (Some(c), SearchDirection::Forward) => {
                    if c + 1 >= count {
                        0
                    } else {
                        c + 1
                    }
                }
                (Some(c), SearchDirection::Backward) => {
                    c.min(count).checked_sub(1).unwrap_or(count - 1)
                }
            };
            current = Some(row);

            let line = doc.line(row)?;
            let Some(byte) = line.rendered().find(query) else {
                continue;
            };
            let rx = line.rendered()[..byte].chars().count();
            let len = query.chars().count();
            let col = rendered_column_to_raw(line.raw(), rx);

            let line = doc.line_mut(row)?;
            self.saved = Some(SavedHighlight {
                row,
                highlight: line.highlight().to_vec(),
            });
            line.highlight_mut()[rx..rx + len].fill(Highlight::SearchMatch);
            self.last_match = Some(row);

            debug!(query, row, col, "search hit");
            return Some(SearchMatch { row, col, rx, len });
        }

        debug!(query, "search miss");
        None
    }

    /// Drop the match overlay and forget the session.
    pub fn reset(&mut self, doc: &mut Document) {
        self.restore_highlight(doc);
        self.last_match = None;
        self.direction = SearchDirection::Forward;
    }

    fn restore_highlight(&mut self, doc: &mut Document) {
        let Some(saved) = self.saved.take() else {
            return;
        };
        if let Some(line) = doc.line_mut(saved.row)
            && line.highlight().len() == saved.highlight.len()
        {
            line.highlight_mut().copy_from_slice(&saved.highlight);
        }
    }
}
