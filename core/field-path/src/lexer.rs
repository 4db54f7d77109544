//! FILENAME: core/field-path/src/lexer.rs
//! PURPOSE: Scans a raw field path string and produces a stream of Tokens.
//! CONTEXT: First stage of the path pipeline. Keys are taken verbatim
//! (no case folding, no whitespace skipping) since they address record fields.
//!
//! DELIMITERS: . [ ]

use crate::token::Token;
use std::iter::Peekable;
use std::str::Chars;

pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
        }
    }

    /// Advances the lexer and returns the next token.
    pub fn next_token(&mut self) -> Token {
        match self.input.next() {
            Some('.') => Token::Dot,
            Some('[') => Token::LBracket,
            Some(']') => Token::RBracket,
            Some(ch) => self.read_key(ch),
            None => Token::EOF,
        }
    }

    fn read_key(&mut self, first: char) -> Token {
        let mut key = String::new();
        key.push(first);
        while let Some(&ch) = self.input.peek() {
            if is_delimiter(ch) {
                break;
            }
            key.push(ch);
            self.input.next();
        }
        Token::Key(key)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.next_token() {
            Token::EOF => None,
            token => Some(token),
        }
    }
}

fn is_delimiter(ch: char) -> bool {
    matches!(ch, '.' | '[' | ']')
}
