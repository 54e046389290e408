#![warn(missing_docs)]
//! `bxedit-lang` - static language profiles for the `bxedit` highlighter.
//!
//! This crate stays dependency-free. It only describes *what* a language looks like (keywords,
//! comment tokens, which literal kinds to colour); the scanning automaton lives in
//! `bxedit-core::highlight`.

/// Comment tokens for a given language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommentTokens {
    /// Line comment token (e.g. `//`, `#`).
    pub line: Option<&'static str>,
    /// Block comment start token (e.g. `/*`).
    pub block_start: Option<&'static str>,
    /// Block comment end token (e.g. `*/`).
    pub block_end: Option<&'static str>,
}

impl CommentTokens {
    /// Tokens for a language with only line comments.
    pub const fn line(token: &'static str) -> Self {
        Self {
            line: Some(token),
            block_start: None,
            block_end: None,
        }
    }

    /// Tokens for a language with both line and block comments.
    pub const fn line_and_block(
        line: &'static str,
        block_start: &'static str,
        block_end: &'static str,
    ) -> Self {
        Self {
            line: Some(line),
            block_start: Some(block_start),
            block_end: Some(block_end),
        }
    }

    /// Returns the line comment token, if one is configured and non-empty.
    pub fn line_token(&self) -> Option<&'static str> {
        self.line.filter(|s| !s.is_empty())
    }

    /// Returns `(start, end)` if both block comment tokens are configured and non-empty.
    pub fn block_tokens(&self) -> Option<(&'static str, &'static str)> {
        match (self.block_start, self.block_end) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => Some((start, end)),
            _ => None,
        }
    }
}

/// How a profile claims a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMatch {
    /// Matches when the filename's extension (text from the last `.`, dot included) is equal.
    Extension(&'static str),
    /// Matches when the pattern occurs anywhere in the filename.
    Contains(&'static str),
}

impl FileMatch {
    /// Parse the compact pattern notation: a leading `.` means extension, anything else substring.
    pub const fn parse(pattern: &'static str) -> Self {
        if !pattern.is_empty() && pattern.as_bytes()[0] == b'.' {
            Self::Extension(pattern)
        } else {
            Self::Contains(pattern)
        }
    }

    /// Returns `true` if `filename` is claimed by this pattern.
    pub fn matches(&self, filename: &str) -> bool {
        match *self {
            Self::Extension(ext) => filename
                .rfind('.')
                .is_some_and(|dot| &filename[dot..] == ext),
            Self::Contains(needle) => !needle.is_empty() && filename.contains(needle),
        }
    }
}

/// Which literal kinds a profile colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighlightFlags {
    /// Colour numeric literals.
    pub numbers: bool,
    /// Colour single- and double-quoted string literals.
    pub strings: bool,
}

/// A static description of a language's highlighting rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxProfile {
    /// Short display name (`"c"`, `"rust"`, ...).
    pub name: &'static str,
    /// Filename patterns, see [`FileMatch::parse`].
    pub file_patterns: &'static [&'static str],
    /// Primary keyword tier (control flow, declarations).
    pub primary_keywords: &'static [&'static str],
    /// Secondary keyword tier (usually type names).
    pub secondary_keywords: &'static [&'static str],
    /// Comment tokens.
    pub comments: CommentTokens,
    /// Literal highlighting flags.
    pub flags: HighlightFlags,
}

impl SyntaxProfile {
    /// Returns `true` if any of this profile's patterns claims `filename`.
    pub fn matches_filename(&self, filename: &str) -> bool {
        self.file_patterns
            .iter()
            .any(|p| FileMatch::parse(p).matches(filename))
    }
}

const C_PRIMARY: &[&str] = &[
    "switch", "if", "while", "for", "break", "continue", "return", "else", "struct", "union",
    "typedef", "static", "enum", "class", "case", "default", "do", "goto", "sizeof", "const",
    "extern", "volatile", "#include", "#define",
];

const C_SECONDARY: &[&str] = &[
    "int", "long", "double", "float", "char", "unsigned", "signed", "void", "short", "size_t",
    "bool",
];

const RUST_PRIMARY: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "fn", "for", "if",
    "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "self",
    "Self", "static", "struct", "super", "trait", "type", "unsafe", "use", "where", "while",
    "async", "await", "dyn",
];

const RUST_SECONDARY: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
    "f32", "f64", "bool", "char", "str", "String", "Vec", "Option", "Result", "Box", "true",
    "false", "Some", "None", "Ok", "Err",
];

const PYTHON_PRIMARY: &[&str] = &[
    "and", "as", "assert", "break", "class", "continue", "def", "del", "elif", "else", "except",
    "finally", "for", "from", "global", "if", "import", "in", "is", "lambda", "nonlocal", "not",
    "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

const PYTHON_SECONDARY: &[&str] = &[
    "True", "False", "None", "int", "float", "str", "bytes", "list", "dict", "set", "tuple",
    "self",
];

const SHELL_PRIMARY: &[&str] = &[
    "if", "then", "else", "elif", "fi", "for", "while", "until", "do", "done", "case", "esac",
    "in", "function", "return", "local", "export",
];

const SHELL_SECONDARY: &[&str] = &["echo", "printf", "read", "set", "unset", "shift", "exit"];

/// The built-in profile table, in selection priority order.
pub static PROFILES: &[SyntaxProfile] = &[
    SyntaxProfile {
        name: "c",
        file_patterns: &[".c", ".h", ".cpp", ".hpp", ".cc"],
        primary_keywords: C_PRIMARY,
        secondary_keywords: C_SECONDARY,
        comments: CommentTokens::line_and_block("//", "/*", "*/"),
        flags: HighlightFlags {
            numbers: true,
            strings: true,
        },
    },
    SyntaxProfile {
        name: "rust",
        file_patterns: &[".rs"],
        primary_keywords: RUST_PRIMARY,
        secondary_keywords: RUST_SECONDARY,
        comments: CommentTokens::line_and_block("//", "/*", "*/"),
        flags: HighlightFlags {
            numbers: true,
            strings: true,
        },
    },
    SyntaxProfile {
        name: "python",
        file_patterns: &[".py"],
        primary_keywords: PYTHON_PRIMARY,
        secondary_keywords: PYTHON_SECONDARY,
        comments: CommentTokens::line("#"),
        flags: HighlightFlags {
            numbers: true,
            strings: true,
        },
    },
    SyntaxProfile {
        name: "shell",
        file_patterns: &[".sh", ".bash", "bashrc"],
        primary_keywords: SHELL_PRIMARY,
        secondary_keywords: SHELL_SECONDARY,
        comments: CommentTokens::line("#"),
        flags: HighlightFlags {
            numbers: false,
            strings: true,
        },
    },
];

/// Select the first profile (in [`PROFILES`] order) that claims `filename`.
pub fn profile_for_filename(filename: &str) -> Option<&'static SyntaxProfile> {
    PROFILES.iter().find(|p| p.matches_filename(filename))
}

/// Look up a profile by its display name.
pub fn profile_by_name(name: &str) -> Option<&'static SyntaxProfile> {
    PROFILES.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_match_uses_last_dot() {
        assert!(FileMatch::parse(".c").matches("main.c"));
        assert!(FileMatch::parse(".c").matches("archive.tar.c"));
        assert!(!FileMatch::parse(".c").matches("main.cs"));
        assert!(!FileMatch::parse(".c").matches("Makefile"));
    }

    #[test]
    fn test_substring_match() {
        let m = FileMatch::parse("bashrc");
        assert_eq!(m, FileMatch::Contains("bashrc"));
        assert!(m.matches("/home/me/.bashrc"));
        assert!(!m.matches("/home/me/.zshrc"));
    }

    #[test]
    fn test_profile_selection() {
        assert_eq!(profile_for_filename("src/lib.rs").map(|p| p.name), Some("rust"));
        assert_eq!(profile_for_filename("editor.h").map(|p| p.name), Some("c"));
        assert_eq!(profile_for_filename("setup.py").map(|p| p.name), Some("python"));
        assert_eq!(profile_for_filename(".bashrc").map(|p| p.name), Some("shell"));
        assert!(profile_for_filename("notes.txt").is_none());
    }

    #[test]
    fn test_comment_tokens() {
        let c = profile_by_name("c").unwrap();
        assert_eq!(c.comments.line_token(), Some("//"));
        assert_eq!(c.comments.block_tokens(), Some(("/*", "*/")));

        let py = profile_by_name("python").unwrap();
        assert_eq!(py.comments.line_token(), Some("#"));
        assert_eq!(py.comments.block_tokens(), None);

        let half = CommentTokens {
            line: None,
            block_start: Some("/*"),
            block_end: Some(""),
        };
        assert_eq!(half.block_tokens(), None);
        assert_eq!(half.line_token(), None);
    }
}
