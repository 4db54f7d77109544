//! FILENAME: core/field-path/src/token.rs
//! PURPOSE: Token definitions for the field path lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by the parser.

/// Tokens recognized by the field path lexer.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// A maximal run of characters that are not delimiters.
    Key(String),

    // Delimiters
    Dot,
    LBracket,
    RBracket,

    // Special
    EOF,
}

impl Token {
    /// True for any of the three path delimiters.
    pub fn is_separator(&self) -> bool {
        matches!(self, Token::Dot | Token::LBracket | Token::RBracket)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Key(s) => write!(f, "{}", s),
            Token::Dot => write!(f, "."),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::EOF => write!(f, "EOF"),
        }
    }
}
