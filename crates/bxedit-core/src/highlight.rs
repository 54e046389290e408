//! Per-line syntax classification.
//!
//! [`highlight_line`] scans one rendered line left to right and assigns a [`Highlight`] tag to
//! every character. The only state carried between lines is whether a block comment is still
//! open at the end of the line; the [`Document`](crate::Document) feeds that flag into the next
//! line and cascades re-highlighting while it keeps changing.

use bxedit_lang::SyntaxProfile;

/// Classification of one rendered character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Highlight {
    /// Plain text.
    #[default]
    Normal,
    /// Numeric literal.
    Number,
    /// Quoted string literal (quotes and escapes included).
    String,
    /// Line comment, from its token to the end of the line.
    LineComment,
    /// Block comment, delimiters included.
    BlockComment,
    /// Primary keyword tier.
    KeywordPrimary,
    /// Secondary keyword tier.
    KeywordSecondary,
    /// Identifier character (alphanumeric or `_`) outside any other class.
    Identifier,
    /// Transient overlay for the current search match.
    SearchMatch,
}

/// Abstract foreground colour. Painters translate this into their own colour model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Foreground {
    /// Terminal default foreground.
    #[default]
    Default,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Blue.
    Blue,
    /// Magenta.
    Magenta,
    /// Cyan.
    Cyan,
    /// White.
    White,
}

/// Display attributes for one [`Highlight`] tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground colour.
    pub fg: Foreground,
    /// Bold weight.
    pub bold: bool,
}

impl Highlight {
    /// Fixed tag → style table.
    pub const fn style(self) -> Style {
        let fg = match self {
            Self::Normal => Foreground::Default,
            Self::Number => Foreground::Red,
            Self::String => Foreground::Magenta,
            Self::LineComment | Self::BlockComment => Foreground::Cyan,
            Self::KeywordPrimary => Foreground::Yellow,
            Self::KeywordSecondary => Foreground::Green,
            Self::Identifier => Foreground::White,
            Self::SearchMatch => Foreground::Blue,
        };
        Style {
            fg,
            bold: matches!(self, Self::SearchMatch),
        }
    }
}

/// Result of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineHighlight {
    /// One tag per rendered character.
    pub classes: Vec<Highlight>,
    /// `true` if a block comment is still open at the end of the line.
    pub open_comment: bool,
}

/// Returns `true` for characters that end a token: whitespace, NUL, or ASCII punctuation from
/// `,.()+-/*=~%<>[];`.
pub fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == '\0' || ",.()+-/*=~%<>[];".contains(ch)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InString(char),
    InBlockComment,
}

fn starts_with_at(chars: &[char], at: usize, token: &str) -> bool {
    let mut idx = at;
    for t in token.chars() {
        if chars.get(idx) != Some(&t) {
            return false;
        }
        idx += 1;
    }
    true
}

/// Longest keyword from either tier starting at `at` and followed by a separator (or line end).
fn match_keyword(chars: &[char], at: usize, profile: &SyntaxProfile) -> Option<(usize, Highlight)> {
    let primary = profile
        .primary_keywords
        .iter()
        .map(|kw| (*kw, Highlight::KeywordPrimary));
    let secondary = profile
        .secondary_keywords
        .iter()
        .map(|kw| (*kw, Highlight::KeywordSecondary));

    let mut best: Option<(usize, Highlight)> = None;
    for (keyword, tier) in primary.chain(secondary) {
        let len = keyword.chars().count();
        if len == 0 || best.is_some_and(|(best_len, _)| best_len >= len) {
            continue;
        }
        if !starts_with_at(chars, at, keyword) {
            continue;
        }
        if chars.get(at + len).is_some_and(|&next| !is_separator(next)) {
            continue;
        }
        best = Some((len, tier));
    }
    best
}

/// Classify a rendered line.
///
/// `open_comment` is the outgoing block-comment flag of the previous line (`false` for the
/// first line). Without a profile every character is [`Highlight::Normal`] and no comment state
/// is carried. The function is pure: the same inputs always produce the same output.
pub fn highlight_line(
    rendered: &str,
    profile: Option<&SyntaxProfile>,
    open_comment: bool,
) -> LineHighlight {
    let chars: Vec<char> = rendered.chars().collect();
    let mut classes = vec![Highlight::Normal; chars.len()];

    let Some(profile) = profile else {
        return LineHighlight {
            classes,
            open_comment: false,
        };
    };

    let line_token = profile.comments.line_token();
    let block_tokens = profile.comments.block_tokens();
    let flags = profile.flags;

    let mut state = if open_comment && block_tokens.is_some() {
        ScanState::InBlockComment
    } else {
        ScanState::Normal
    };
    let mut prev_sep = true;
    let mut i = 0usize;

    while i < chars.len() {
        let ch = chars[i];
        let prev_hl = if i > 0 {
            classes[i - 1]
        } else {
            Highlight::Normal
        };

        if let Some(token) = line_token
            && state == ScanState::Normal
            && starts_with_at(&chars, i, token)
        {
            classes[i..].fill(Highlight::LineComment);
            break;
        }

        if let Some((start, end)) = block_tokens {
            if state == ScanState::InBlockComment {
                classes[i] = Highlight::BlockComment;
                if starts_with_at(&chars, i, end) {
                    let len = end.chars().count();
                    classes[i..i + len].fill(Highlight::BlockComment);
                    i += len;
                    state = ScanState::Normal;
                    prev_sep = true;
                } else {
                    i += 1;
                }
                continue;
            }
            if state == ScanState::Normal && starts_with_at(&chars, i, start) {
                let len = start.chars().count();
                classes[i..i + len].fill(Highlight::BlockComment);
                i += len;
                state = ScanState::InBlockComment;
                continue;
            }
        }

        if flags.strings {
            if let ScanState::InString(quote) = state {
                classes[i] = Highlight::String;
                if ch == '\\' && i + 1 < chars.len() {
                    classes[i + 1] = Highlight::String;
                    i += 2;
                    continue;
                }
                if ch == quote {
                    state = ScanState::Normal;
                }
                i += 1;
                prev_sep = true;
                continue;
            }
            if ch == '"' || ch == '\'' {
                state = ScanState::InString(ch);
                classes[i] = Highlight::String;
                i += 1;
                continue;
            }
        }

        if flags.numbers
            && ((ch.is_ascii_digit() && (prev_sep || prev_hl == Highlight::Number))
                || (ch == '.' && prev_hl == Highlight::Number))
        {
            classes[i] = Highlight::Number;
            i += 1;
            prev_sep = false;
            continue;
        }

        if prev_sep && let Some((len, tier)) = match_keyword(&chars, i, profile) {
            classes[i..i + len].fill(tier);
            i += len;
            prev_sep = false;
            continue;
        }

        if ch.is_alphanumeric() || ch == '_' {
            classes[i] = Highlight::Identifier;
        }
        prev_sep = is_separator(ch);
        i += 1;
    }

    LineHighlight {
        classes,
        open_comment: state == ScanState::InBlockComment,
    }
}
