//! FILENAME: core/field-path/src/lib.rs
//! PURPOSE: Library root for the field path parser.
//! CONTEXT: Column descriptors address cell values with path expressions
//! such as `departmentObject.items[0].departmentName`. This crate turns those
//! strings into tagged segments once, so evaluators never re-split text.
//!
//! PIPELINE: Path String --> Lexer --> Tokens --> Parser --> FieldPath --> Evaluator
//!
//! SUPPORTED SYNTAX:
//! - Member access: a.b.c
//! - Index access: items[0], items.0
//! - Direct keys: firstName (no `.` and no `[`)

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;


pub use ast::{FieldPath, PathSegment};
pub use lexer::Lexer;
pub use parser::{is_direct, normalize, parse, ParseError, ParseResult, Parser};
pub use token::Token;
