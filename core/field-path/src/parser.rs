//! FILENAME: core/field-path/src/parser.rs
//! PURPOSE: Converts a stream of Tokens into a FieldPath.
//! CONTEXT: Second stage of the path pipeline. Normalization rules:
//!   - `[` and `]` are treated the same as `.`
//!   - a run of consecutive delimiters collapses to a single `.`
//!   - one trailing delimiter run is dropped
//!
//! A leading delimiter run survives as an empty first key (".a" walks the
//! empty-named member first). Unbalanced brackets are accepted as-is.
//!
//! GRAMMAR (after normalization):
//!   path    --> key ( "." key )*
//!   key     --> INDEX | MEMBER

use crate::ast::{FieldPath, PathSegment};
use crate::lexer::Lexer;
use crate::token::Token;
use thiserror::Error;

/// Path errors. Only a path with no keys at all is rejected.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("field path is empty: {input:?}")]
    Empty { input: String },
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Holds the lexer and current token state.
pub struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
    current_token: Token,
}

impl<'a> Parser<'a> {
    /// Creates a new parser from an input string.
    /// Automatically advances to the first token.
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current_token = lexer.next_token();
        Parser {
            source: input,
            lexer,
            current_token,
        }
    }

    fn advance(&mut self) {
        self.current_token = self.lexer.next_token();
    }

    /// Parses the entire input and returns the path.
    pub fn parse(&mut self) -> ParseResult<FieldPath> {
        if is_direct(self.source) {
            if self.source.is_empty() {
                return Err(ParseError::Empty {
                    input: self.source.to_string(),
                });
            }
            return Ok(FieldPath {
                source: self.source.to_string(),
                segments: vec![PathSegment::member(self.source)],
                direct: true,
            });
        }

        let keys = self.collect_keys();
        if keys.iter().all(String::is_empty) {
            return Err(ParseError::Empty {
                input: self.source.to_string(),
            });
        }

        Ok(FieldPath {
            source: self.source.to_string(),
            segments: keys.iter().map(|k| PathSegment::from_key(k)).collect(),
            direct: false,
        })
    }

    /// Walks the token stream and returns the normalized keys.
    fn collect_keys(&mut self) -> Vec<String> {
        let mut keys = Vec::new();

        if self.current_token.is_separator() {
            keys.push(String::new());
            self.skip_separators();
        }

        while let Token::Key(key) = &self.current_token {
            keys.push(key.clone());
            self.advance();
            self.skip_separators();
        }

        keys
    }

    fn skip_separators(&mut self) {
        while self.current_token.is_separator() {
            self.advance();
        }
    }
}

/// Convenience function to parse a path string.
pub fn parse(input: &str) -> ParseResult<FieldPath> {
    Parser::new(input).parse()
}

/// A path with neither `.` nor `[` is a plain key lookup.
pub fn is_direct(input: &str) -> bool {
    !input.contains('.') && !input.contains('[')
}

/// Textual normalization of a path: delimiters become `.`, runs collapse,
/// and one trailing `.` is stripped. Idempotent.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for token in Lexer::new(input) {
        match token {
            Token::Key(key) => out.push_str(&key),
            _ => {
                if !out.ends_with('.') {
                    out.push('.');
                }
            }
        }
    }
    if out.ends_with('.') {
        out.pop();
    }
    out
}
