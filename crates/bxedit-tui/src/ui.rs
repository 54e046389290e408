//! Paints a [`ScreenSnapshot`] with ratatui.

use bxedit_core::{Foreground, Highlight, ScreenRow, ScreenSnapshot, StatusLine, TopBar};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

fn color(fg: Foreground) -> Color {
    match fg {
        Foreground::Default => Color::Reset,
        Foreground::Red => Color::Red,
        Foreground::Green => Color::Green,
        Foreground::Yellow => Color::Yellow,
        Foreground::Blue => Color::Blue,
        Foreground::Magenta => Color::Magenta,
        Foreground::Cyan => Color::Cyan,
        Foreground::White => Color::White,
    }
}

/// Terminal style for a highlight tag.
pub fn style_for(hl: Highlight) -> Style {
    let style = hl.style();
    let mut out = Style::default().fg(color(style.fg));
    if style.bold {
        out = out.add_modifier(Modifier::BOLD);
    }
    out
}

fn bar_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

fn dirty_marker(dirty: bool) -> &'static str {
    if dirty { "*" } else { "" }
}

/// Top bar text: title on the left, file name on the right.
pub fn top_bar_text(bar: &TopBar, width: usize) -> String {
    let right = format!("{}{}", bar.filename, dirty_marker(bar.dirty));
    pad_between(&bar.title, &right, width)
}

/// Status bar text: file and size on the left, profile and position on the right.
pub fn status_text(status: &StatusLine, width: usize) -> String {
    let name: String = status.filename.chars().take(20).collect();
    let mut left = format!(
        "{name}{} - {} lines",
        dirty_marker(status.dirty),
        status.line_count
    );
    if let Some(op) = status.last_operation {
        left.push(' ');
        left.push_str(op.label());
    }
    let right = format!(
        "{} | {}:{} {}/{}",
        status.syntax.unwrap_or("no ft"),
        status.line,
        status.column,
        status.line,
        status.line_count
    );
    pad_between(&left, &right, width)
}

fn pad_between(left: &str, right: &str, width: usize) -> String {
    let mut out: String = left.chars().take(width).collect();
    let used = out.chars().count();
    let right_len = right.chars().count();
    if used + right_len <= width {
        out.extend(std::iter::repeat_n(' ', width - used - right_len));
        out.push_str(right);
    }
    out
}

fn text_row(row: &ScreenRow) -> Line<'static> {
    match row {
        ScreenRow::Text { .. } => Line::from(
            row.runs()
                .into_iter()
                .map(|(text, hl)| Span::styled(text, style_for(hl)))
                .collect::<Vec<_>>(),
        ),
        ScreenRow::Empty => Line::raw("~"),
        ScreenRow::Welcome(banner) => Line::raw(banner.clone()),
    }
}

/// Draw one frame.
pub fn draw(frame: &mut Frame, snapshot: &ScreenSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());
    let width = frame.area().width as usize;

    frame.render_widget(
        Paragraph::new(top_bar_text(&snapshot.top_bar, width)).style(bar_style()),
        chunks[0],
    );

    let lines: Vec<Line> = snapshot.rows.iter().map(text_row).collect();
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    frame.render_widget(
        Paragraph::new(status_text(&snapshot.status, width)).style(bar_style()),
        chunks[2],
    );

    let message = snapshot.message.as_deref().unwrap_or_default();
    frame.render_widget(Paragraph::new(message.to_string()), chunks[3]);

    frame.set_cursor_position(cursor_position(snapshot, chunks[1]));
}

fn cursor_position(snapshot: &ScreenSnapshot, text_area: Rect) -> Position {
    let (row, col) = snapshot.cursor;
    let x = text_area.x.saturating_add(col as u16);
    let y = text_area.y.saturating_add(row as u16);
    Position::new(
        x.min(text_area.right().saturating_sub(1)),
        y.min(text_area.bottom().saturating_sub(1)),
    )
}
