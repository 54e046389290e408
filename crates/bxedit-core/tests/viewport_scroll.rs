use bxedit_core::{Cursor, Document, Viewport, raw_column_to_rendered};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn ragged_document(rng: &mut StdRng) -> Document {
    let text: String = (0..120)
        .map(|_| {
            let len = rng.gen_range(0..60);
            let mut line: String = (0..len)
                .map(|_| if rng.gen_bool(0.1) { '\t' } else { 'x' })
                .collect();
            line.push('\n');
            line
        })
        .collect();
    Document::from_text(&text)
}

#[test]
fn test_cursor_always_inside_window_after_scroll() {
    let mut rng = StdRng::seed_from_u64(2024);
    let doc = ragged_document(&mut rng);
    let mut viewport = Viewport::new();

    for _ in 0..1_000 {
        let rows = rng.gen_range(1..30);
        let cols = rng.gen_range(1..50);
        let row = rng.gen_range(0..=doc.line_count());
        let col = rng.gen_range(0..=doc.line_len(row));
        let rx = viewport.scroll(&doc, Cursor::new(row, col), rows, cols);

        assert!(viewport.row_offset <= row && row < viewport.row_offset + rows);
        assert!(viewport.col_offset <= rx && rx < viewport.col_offset + cols);
    }
}

#[test]
fn test_scroll_is_minimal() {
    let doc = Document::from_text(&"line\n".repeat(40));
    let mut viewport = Viewport::new();

    viewport.scroll(&doc, Cursor::new(9, 0), 10, 80);
    assert_eq!(viewport.row_offset, 0);
    viewport.scroll(&doc, Cursor::new(10, 0), 10, 80);
    assert_eq!(viewport.row_offset, 1);
    viewport.scroll(&doc, Cursor::new(5, 0), 10, 80);
    assert_eq!(viewport.row_offset, 1);
    viewport.scroll(&doc, Cursor::new(0, 0), 10, 80);
    assert_eq!(viewport.row_offset, 0);
}

#[test]
fn test_virtual_line_has_rendered_column_zero() {
    let doc = Document::from_text("\tabc");
    let mut viewport = Viewport {
        row_offset: 0,
        col_offset: 5,
    };
    let rx = viewport.scroll(&doc, Cursor::new(1, 0), 10, 20);
    assert_eq!(rx, 0);
    assert_eq!(viewport.col_offset, 0);
    assert_eq!(raw_column_to_rendered("\tabc", 4), 11);
}
