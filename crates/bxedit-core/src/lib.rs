#![warn(missing_docs)]
//! bxedit core - the document engine of a small terminal text editor.
//!
//! # Overview
//!
//! `bxedit-core` is headless: it consumes abstract [`Key`] events and produces a
//! [`ScreenSnapshot`] (style-tagged text, bars and a cursor position). Terminal setup, key
//! decoding and painting live in the `bxedit-tui` front end.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  EditorSession (keys, prompt, quit gate)    │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  SearchEngine / Viewport / Cursor           │  ← Interaction
//! ├─────────────────────────────────────────────┤
//! │  Document (lines + edit operations)         │  ← Line store
//! ├─────────────────────────────────────────────┤
//! │  highlight (per-line automaton)             │  ← Classification
//! ├─────────────────────────────────────────────┤
//! │  render (tab expansion, column mapping)     │  ← Coordinates
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use bxedit_core::{Document, Highlight};
//!
//! let mut doc = Document::from_text("/* start\nmiddle\nend */ code");
//! doc.set_filename("demo.c");
//! assert!(doc.line(1).unwrap().highlight().iter().all(|h| *h == Highlight::BlockComment));
//!
//! // Removing the opener re-highlights the following lines.
//! doc.delete_char(0, 2);
//! doc.delete_char(0, 1);
//! assert!(!doc.line(0).unwrap().open_comment());
//! assert!(doc.line(1).unwrap().highlight().iter().all(|h| *h != Highlight::BlockComment));
//! ```
//!
//! # Module Description
//!
//! - [`render`] - raw ↔ rendered column mapping (tab stop 8)
//! - [`highlight`] - highlight tags, style table and the per-line scanner
//! - [`document`] - lines, edit operations, load/save
//! - [`cursor`] - cursor and movement
//! - [`search`] - incremental cyclic search
//! - [`viewport`] - scroll offsets
//! - [`prompt`] - message-bar prompt with per-key callbacks
//! - [`session`] - the editing session
//! - [`snapshot`] - headless frame description

pub mod config;
pub mod cursor;
pub mod document;
pub mod error;
pub mod highlight;
pub mod key;
pub mod prompt;
pub mod render;
pub mod search;
pub mod session;
pub mod snapshot;
pub mod viewport;

pub use bxedit_lang::{SyntaxProfile, profile_for_filename};
pub use config::EditorConfig;
pub use cursor::Cursor;
pub use document::{Document, Line};
pub use error::{EditorError, Result};
pub use highlight::{Foreground, Highlight, LineHighlight, Style, highlight_line};
pub use key::Key;
pub use prompt::{
    NoCallback, OpenFileCallback, Prompt, PromptCallback, PromptOutcome, PromptPurpose,
    SearchCallback,
};
pub use render::{TAB_STOP, raw_column_to_rendered, rendered_column_to_raw, to_rendered};
pub use search::{SearchAction, SearchDirection, SearchEngine, SearchMatch};
pub use session::{EditorSession, KeyOutcome, Operation};
pub use snapshot::{ScreenRow, ScreenSnapshot, StatusLine, TopBar};
pub use viewport::Viewport;
