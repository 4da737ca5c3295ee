//! Parsed line types
//!
//! Pure data representation of one G-code line. No aggregation logic.

use std::fmt;

use crate::parser::lexer::{Token, TokenKind};

/// A parsed, non-blank line of GCode
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    /// A command with parameters and optional trailing comment
    Instruction(Instruction),
    /// A comment-only line
    Metadata(Metadata),
}

/// A command line like "G1 X10 E.5 ; perimeter"
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Command name (e.g., "G1", "M600")
    pub command: String,
    /// Raw parameter fields in order (e.g., "X10", "E.5")
    pub parameters: Vec<String>,
    /// Trailing comment text, empty when the line had none
    pub comment: String,
}

/// A comment-only line like ";LAYER:12"
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    /// Comment text without the prefix, trimmed
    pub text: String,
}

impl Instruction {
    /// First parameter whose leading character is `letter`
    pub fn parameter(&self, letter: char) -> Option<&str> {
        self.parameters
            .iter()
            .map(String::as_str)
            .find(|p| p.starts_with(letter))
    }
}

/// Build a parsed line from the tokens of one line
///
/// Returns `None` when there are no tokens at all.
pub fn tokens_to_parsed_line(tokens: Vec<Token>) -> Option<ParsedLine> {
    let mut command = None;
    let mut parameters = Vec::new();
    let mut comment = None;

    for token in tokens {
        match token.kind {
            TokenKind::Command => command = Some(token.text),
            TokenKind::Parameter => parameters.push(token.text),
            TokenKind::Comment => comment = Some(token.text),
        }
    }

    match (command, comment) {
        (Some(command), comment) => Some(ParsedLine::Instruction(Instruction {
            command,
            parameters,
            comment: comment.unwrap_or_default(),
        })),
        (None, Some(text)) => Some(ParsedLine::Metadata(Metadata { text })),
        (None, None) => None,
    }
}

impl fmt::Display for ParsedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedLine::Instruction(instr) => {
                write!(f, "{}", instr.command)?;
                for param in &instr.parameters {
                    write!(f, " {}", param)?;
                }
                if !instr.comment.is_empty() {
                    write!(f, " ; {}", instr.comment)?;
                }
                Ok(())
            }
            ParsedLine::Metadata(meta) => write!(f, "; {}", meta.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: TokenKind, text: &str) -> Token {
        Token {
            kind,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_tokens_to_instruction() {
        let tokens = vec![
            token(TokenKind::Command, "G1"),
            token(TokenKind::Parameter, "X10"),
            token(TokenKind::Parameter, "E1.5"),
            token(TokenKind::Comment, "infill"),
        ];

        let result = tokens_to_parsed_line(tokens);

        if let Some(ParsedLine::Instruction(instr)) = result {
            assert_eq!(instr.command, "G1");
            assert_eq!(instr.parameters, vec!["X10", "E1.5"]);
            assert_eq!(instr.comment, "infill");
        } else {
            panic!("Expected instruction");
        }
    }

    #[test]
    fn test_tokens_to_metadata() {
        let result = tokens_to_parsed_line(vec![token(TokenKind::Comment, "LAYER:0")]);
        assert_eq!(
            result,
            Some(ParsedLine::Metadata(Metadata {
                text: "LAYER:0".to_string()
            }))
        );
    }

    #[test]
    fn test_no_tokens() {
        assert_eq!(tokens_to_parsed_line(Vec::new()), None);
    }

    #[test]
    fn test_parameter_lookup_takes_first_match() {
        let instr = Instruction {
            command: "G1".to_string(),
            parameters: vec!["X1".to_string(), "E2".to_string(), "E3".to_string()],
            comment: String::new(),
        };
        assert_eq!(instr.parameter('E'), Some("E2"));
        assert_eq!(instr.parameter('Z'), None);
    }

    #[test]
    fn test_display() {
        let instr = ParsedLine::Instruction(Instruction {
            command: "G1".to_string(),
            parameters: vec!["X10".to_string(), "E1.0".to_string()],
            comment: "note".to_string(),
        });
        assert_eq!(instr.to_string(), "G1 X10 E1.0 ; note");

        let meta = ParsedLine::Metadata(Metadata {
            text: "LAYER:2".to_string(),
        });
        assert_eq!(meta.to_string(), "; LAYER:2");
    }
}
