use bxedit_core::{
    Document, TAB_STOP, raw_column_to_rendered, rendered_column_to_raw, to_rendered,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHABET: &[char] = &['a', 'b', '/', '*', '"', '\'', '\t', ' ', '1', '.', '\\', 'i', 'f'];

fn random_text(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

fn assert_derived_in_sync(doc: &Document) {
    for (row, line) in doc.lines().iter().enumerate() {
        assert_eq!(line.rendered(), to_rendered(line.raw()), "row {row}");
        assert_eq!(
            line.highlight().len(),
            line.rendered().chars().count(),
            "row {row}"
        );
    }
}

fn random_edit(doc: &mut Document, rng: &mut StdRng) {
    let rows = doc.line_count();
    let row = rng.gen_range(0..=rows);
    let col = rng.gen_range(0..=doc.line_len(row) + 1);
    match rng.gen_range(0..7) {
        0 => {
            let text = random_text(rng, 12);
            doc.insert_line(row, &text);
        }
        1 => doc.delete_line(row),
        2 => doc.insert_char(row, col, ALPHABET[rng.gen_range(0..ALPHABET.len())]),
        3 => {
            doc.delete_char(row, col);
        }
        4 => doc.split_line(row, col),
        5 => {
            doc.join_with_previous(row);
        }
        _ => {
            let text = random_text(rng, 6);
            doc.append_text(row, &text);
        }
    }
}

#[test]
fn test_render_and_highlight_stay_in_sync_under_random_edits() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for filename in ["a.c", "a.py", "a.txt"] {
        let mut doc = Document::new();
        doc.set_filename(filename);
        for _ in 0..500 {
            random_edit(&mut doc, &mut rng);
            assert_derived_in_sync(&doc);
        }
    }
}

#[test]
fn test_split_then_join_restores_line() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let text = random_text(&mut rng, 20);
        let mut doc = Document::from_text(&text);
        if doc.line_count() == 0 {
            continue;
        }
        let len = doc.line_len(0);
        let k = rng.gen_range(1..=len.max(1));
        doc.split_line(0, k);
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.join_with_previous(1), Some(k.min(len)));
        assert_eq!(doc.line(0).unwrap().raw(), text);
    }
}

#[test]
fn test_split_at_column_zero_leaves_line_untouched() {
    let mut doc = Document::from_text("keep");
    doc.split_line(0, 0);
    assert_eq!(doc.line(0).unwrap().raw(), "");
    assert_eq!(doc.line(1).unwrap().raw(), "keep");
}

#[test]
fn test_every_mutation_marks_dirty() {
    let mut doc = Document::from_text("abc\ndef");
    assert!(!doc.is_dirty());
    doc.insert_char(0, 1, 'x');
    assert_eq!(doc.dirty_count(), 1);
    doc.delete_line(1);
    assert_eq!(doc.dirty_count(), 2);
    doc.insert_line(1, "z");
    assert_eq!(doc.dirty_count(), 3);
}

#[test]
fn test_tab_expansion_examples() {
    assert_eq!(to_rendered("\t"), " ".repeat(TAB_STOP));
    assert_eq!(to_rendered("abc\t"), format!("abc{}", " ".repeat(5)));
    assert_eq!(to_rendered("abcdefgh\tx").chars().count(), 17);
}

#[test]
fn test_column_mapping_is_right_inverse() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..300 {
        let raw = random_text(&mut rng, 24);
        let len = raw.chars().count();
        let mut previous = 0;
        for cx in 0..=len {
            let rx = raw_column_to_rendered(&raw, cx);
            assert!(rx >= previous, "monotonic for {raw:?}");
            previous = rx;

            let back = rendered_column_to_raw(&raw, rx);
            assert!(back >= cx, "{raw:?} cx={cx} rx={rx} back={back}");
            assert_eq!(raw_column_to_rendered(&raw, back) / TAB_STOP, rx / TAB_STOP);
        }
    }
}

#[test]
fn test_line_terminators_in_edits_are_ignored() {
    let mut doc = Document::from_text("ab");
    doc.insert_char(0, 1, '\n');
    doc.insert_char(0, 1, '\r');
    doc.append_text(0, "x\ny");
    doc.insert_line(1, "p\rq");
    assert_eq!(doc.line_count(), 1);
    assert_eq!(doc.line(0).unwrap().raw(), "ab");
    assert!(!doc.is_dirty());

    doc.insert_char(0, 1, '-');
    let reloaded = Document::from_text(&doc.to_text());
    assert_eq!(reloaded.line_count(), doc.line_count());
    assert_eq!(reloaded.line(0).unwrap().raw(), "a-b");
}
