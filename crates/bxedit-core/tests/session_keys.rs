use bxedit_core::{
    Cursor, Document, EditorConfig, EditorSession, Key, KeyOutcome, Operation, PromptPurpose,
    ScreenRow,
};
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

fn session(text: &str) -> EditorSession {
    let mut s = EditorSession::new(Document::from_text(text), EditorConfig::default());
    s.set_screen_size(13, 20);
    s
}

#[test]
fn test_quit_clean_document_immediately() {
    let mut s = session("abc");
    assert_eq!(s.process_key(Key::Ctrl('x')), KeyOutcome::Quit);
}

#[test]
fn test_quit_dirty_requires_repeated_presses() {
    let mut s = session("abc");
    s.process_key(Key::Char('x'));

    for remaining in (1..=3).rev() {
        assert_eq!(s.process_key(Key::Ctrl('x')), KeyOutcome::Continue);
        assert!(
            s.status_message()
                .unwrap()
                .contains(&format!("Press Ctrl-X {remaining} more times"))
        );
    }
    assert_eq!(s.process_key(Key::Ctrl('x')), KeyOutcome::Quit);
}

#[test]
fn test_other_key_resets_quit_counter() {
    let mut s = session("abc");
    s.process_key(Key::Char('x'));
    s.process_key(Key::Ctrl('x'));
    s.process_key(Key::Ctrl('x'));
    s.process_key(Key::Right);
    for _ in 0..3 {
        assert_eq!(s.process_key(Key::Ctrl('x')), KeyOutcome::Continue);
    }
    assert_eq!(s.process_key(Key::Ctrl('x')), KeyOutcome::Quit);
}

#[test]
fn test_enter_splits_and_backspace_rejoins() {
    let mut s = session("hello world");
    s.set_cursor(Cursor::new(0, 5));
    s.process_key(Key::Enter);
    assert_eq!(s.document().line_count(), 2);
    assert_eq!(s.document().line(1).unwrap().raw(), " world");
    assert_eq!(s.cursor(), Cursor::new(1, 0));

    s.process_key(Key::Backspace);
    assert_eq!(s.document().line(0).unwrap().raw(), "hello world");
    assert_eq!(s.cursor(), Cursor::new(0, 5));
}

#[test]
fn test_backspace_at_origin_and_virtual_line_is_noop() {
    let mut s = session("a");
    s.process_key(Key::Backspace);
    assert_eq!(s.document().line(0).unwrap().raw(), "a");

    s.set_cursor(Cursor::new(1, 0));
    s.process_key(Key::Backspace);
    assert_eq!(s.document().line(0).unwrap().raw(), "a");
    assert!(!s.document().is_dirty());
}

#[test]
fn test_delete_removes_char_under_cursor() {
    let mut s = session("abc");
    s.set_cursor(Cursor::new(0, 1));
    s.process_key(Key::Delete);
    assert_eq!(s.document().line(0).unwrap().raw(), "ac");
    assert_eq!(s.cursor(), Cursor::new(0, 1));
    assert_eq!(s.last_operation(), Some(Operation::Delete));
}

#[test]
fn test_home_end_and_tab_cursor_column() {
    let mut s = session("\tab");
    s.process_key(Key::End);
    assert_eq!(s.cursor(), Cursor::new(0, 3));
    let snap = s.snapshot(Instant::now());
    assert_eq!(snap.cursor, (0, 10));
    s.process_key(Key::Home);
    assert_eq!(s.cursor(), Cursor::new(0, 0));
}

#[test]
fn test_page_down_and_up() {
    let text: String = (0..50).map(|i| format!("{i}\n")).collect();
    let mut s = session(&text);
    assert_eq!(s.text_rows(), 10);

    s.process_key(Key::PageDown);
    assert_eq!(s.cursor().row, 19);
    let _ = s.snapshot(Instant::now());
    assert_eq!(s.viewport().row_offset, 10);

    s.process_key(Key::PageUp);
    assert_eq!(s.cursor().row, 0);
}

#[test]
fn test_horizontal_scroll_clips_rows() {
    let mut s = session("0123456789abcdefghijklmnop");
    s.process_key(Key::End);
    let snap = s.snapshot(Instant::now());
    assert_eq!(s.viewport().col_offset, 7);
    let ScreenRow::Text { text, highlights } = &snap.rows[0] else {
        panic!("expected text row");
    };
    assert_eq!(text, "789abcdefghijklmnop");
    assert_eq!(highlights.len(), text.chars().count());
    assert_eq!(snap.cursor, (0, 19));
}

#[test]
fn test_save_without_name_prompts_and_abort() {
    let mut s = session("abc");
    s.process_key(Key::Ctrl('s'));
    assert_eq!(s.prompt().map(|p| p.purpose()), Some(PromptPurpose::SaveAs));

    s.process_key(Key::Char('n'));
    let snap = s.snapshot(Instant::now());
    assert_eq!(
        snap.message.as_deref(),
        Some("Save as: n (ESC to cancel)")
    );

    s.process_key(Key::Escape);
    assert!(s.prompt().is_none());
    assert_eq!(s.status_message(), Some("Save aborted"));
}

#[test]
fn test_status_message_expires() {
    let mut s = session("abc");
    s.process_key(Key::Ctrl('g'));
    let now = Instant::now();
    assert!(s.snapshot(now).message.is_some());
    let later = now + Duration::from_secs(6);
    assert!(s.snapshot(later).message.is_none());
}

#[test]
fn test_status_line_fields() {
    let mut s = session("int x;\n");
    s.process_key(Key::Char('a'));
    let snap = s.snapshot(Instant::now());
    assert_eq!(snap.status.line_count, 1);
    assert_eq!((snap.status.line, snap.status.column), (1, 2));
    assert_eq!(snap.status.last_operation, Some(Operation::Insert));
    assert!(snap.status.dirty);
    assert!(snap.top_bar.dirty);
    assert_eq!(snap.top_bar.filename, "[No Name]");
    assert_eq!(snap.rows.len(), 10);
    assert_eq!(snap.rows[1], ScreenRow::Empty);
}

#[test]
fn test_ctrl_h_acts_as_backspace() {
    let mut s = session("abc");
    s.set_cursor(Cursor::new(0, 3));
    s.process_key(Key::Ctrl('h'));
    assert_eq!(s.document().line(0).unwrap().raw(), "ab");
    assert_eq!(s.cursor(), Cursor::new(0, 2));
    assert_eq!(s.last_operation(), Some(Operation::Delete));

    s.process_key(Key::Ctrl('s'));
    s.process_key(Key::Char('n'));
    s.process_key(Key::Char('m'));
    s.process_key(Key::Ctrl('h'));
    assert_eq!(s.prompt().map(|p| p.buffer()), Some("n"));
}
