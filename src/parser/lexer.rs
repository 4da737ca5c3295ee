//! GCode Lexer
//!
//! Splits a single line into command, parameter and comment tokens.
//! Positions are not tracked; the aggregator only needs the text.

/// Character introducing a comment; everything after it is comment text
pub const COMMENT_PREFIX: char = ';';

/// Token types in GCode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// First whitespace-separated field, like "G1" or "M600"
    Command,
    /// Any following field, like "X10" or "E.5"
    Parameter,
    /// Text after the comment prefix, trimmed
    Comment,
}

/// A token with its text content
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

/// Split a line at the first comment prefix
///
/// Returns the code part and, if a prefix was found, the trimmed comment
/// text. A prefix at the very end of the line yields an empty comment.
pub fn split_comment(line: &str) -> (&str, Option<&str>) {
    match line.find(COMMENT_PREFIX) {
        Some(idx) => (
            &line[..idx],
            Some(line[idx + COMMENT_PREFIX.len_utf8()..].trim()),
        ),
        None => (line, None),
    }
}

/// Tokenize a line of GCode into tokens
///
/// The code part is split on runs of whitespace. The first field is the
/// command, the rest are parameters, in order. A comment token, when
/// present, is always last.
pub fn tokenize_line(line: &str) -> Vec<Token> {
    let (code, comment) = split_comment(line.trim());
    let mut tokens = Vec::new();

    for (idx, field) in code.split_whitespace().enumerate() {
        let kind = if idx == 0 {
            TokenKind::Command
        } else {
            TokenKind::Parameter
        };
        tokens.push(Token {
            kind,
            text: field.to_string(),
        });
    }

    if let Some(text) = comment {
        tokens.push(Token {
            kind: TokenKind::Comment,
            text: text.to_string(),
        });
    }

    tokens
}
