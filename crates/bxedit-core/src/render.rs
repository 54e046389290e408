//! Raw ↔ rendered column mapping.
//!
//! A line is stored raw (tabs kept as `'\t'`) and displayed rendered (each tab expanded with
//! spaces up to the next multiple of [`TAB_STOP`]). Every other character occupies exactly one
//! rendered cell. Columns are character indices, never byte offsets.

/// Fixed tab stop width, in cells.
pub const TAB_STOP: usize = 8;

/// Width of `ch` when it starts at rendered column `rx`.
#[inline]
pub fn cell_width_at(ch: char, rx: usize) -> usize {
    if ch == '\t' { TAB_STOP - rx % TAB_STOP } else { 1 }
}

/// Expand tabs in `raw`.
pub fn to_rendered(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rx = 0usize;
    for ch in raw.chars() {
        let width = cell_width_at(ch, rx);
        if ch == '\t' {
            out.extend(std::iter::repeat_n(' ', width));
        } else {
            out.push(ch);
        }
        rx += width;
    }
    out
}

/// Rendered column of raw column `cx`.
///
/// Columns past the end of the line are treated as the end of the line.
pub fn raw_column_to_rendered(raw: &str, cx: usize) -> usize {
    let mut rx = 0usize;
    for ch in raw.chars().take(cx) {
        rx += cell_width_at(ch, rx);
    }
    rx
}

/// Smallest raw column whose rendered extent reaches past `rx`, or the line length.
///
/// This is a right-inverse of [`raw_column_to_rendered`]: a rendered column that falls inside a
/// tab's expansion maps back to that tab.
pub fn rendered_column_to_raw(raw: &str, rx: usize) -> usize {
    let mut cur_rx = 0usize;
    let mut cx = 0usize;
    for ch in raw.chars() {
        cur_rx += cell_width_at(ch, cur_rx);
        if cur_rx > rx {
            return cx;
        }
        cx += 1;
    }
    cx
}
