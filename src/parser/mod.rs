//! GCode Parser
//!
//! Line-oriented tokenization into instructions and metadata comments.

pub mod ast;
pub mod lexer;

pub use ast::{Instruction, Metadata, ParsedLine};
pub use lexer::{Token, TokenKind, tokenize_line};

use crate::error::ParseError;

/// Parse a single line of GCode into structured data
///
/// The line must contain something other than whitespace; callers are
/// expected to drop blank lines before getting here.
pub fn parse_line(line: &str) -> Result<ParsedLine, ParseError> {
    if line.trim().is_empty() {
        return Err(ParseError::EmptyLine);
    }
    let tokens = lexer::tokenize_line(line);
    ast::tokens_to_parsed_line(tokens).ok_or(ParseError::EmptyLine)
}
