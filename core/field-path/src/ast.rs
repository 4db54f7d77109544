//! FILENAME: core/field-path/src/ast.rs
//! PURPOSE: Parsed representation of a field path.
//! CONTEXT: A FieldPath is produced once by the parser and then interpreted
//! by an evaluator over a record tree. Segments are tagged so the evaluator
//! never has to re-inspect key text to decide between member and index access.

use serde::{Deserialize, Serialize};

/// One step of a field path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PathSegment {
    /// Member access on a mapping: `.name`
    Member { name: String },
    /// Positional access on a sequence: `[3]`
    Index { position: usize },
}

impl PathSegment {
    pub fn member(name: impl Into<String>) -> Self {
        PathSegment::Member { name: name.into() }
    }

    pub fn index(position: usize) -> Self {
        PathSegment::Index { position }
    }

    /// Classifies a normalized key. Canonical decimal integers ("0", "12",
    /// but not "007") become indexes; everything else is a member name.
    pub fn from_key(key: &str) -> Self {
        let canonical = !key.is_empty()
            && key.bytes().all(|b| b.is_ascii_digit())
            && (key == "0" || !key.starts_with('0'));
        if canonical {
            if let Ok(position) = key.parse::<usize>() {
                return PathSegment::Index { position };
            }
        }
        PathSegment::member(key)
    }

    /// The key text this segment was parsed from.
    pub fn key(&self) -> String {
        match self {
            PathSegment::Member { name } => name.clone(),
            PathSegment::Index { position } => position.to_string(),
        }
    }
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSegment::Member { name } => write!(f, "{}", name),
            PathSegment::Index { position } => write!(f, "{}", position),
        }
    }
}

/// A parsed field path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldPath {
    /// The path text as written in the column descriptor.
    pub source: String,

    /// Segments in walk order, root first.
    pub segments: Vec<PathSegment>,

    /// True when the source had no `.` and no `[`, i.e. a plain key lookup.
    pub direct: bool,
}

impl FieldPath {
    /// Parses a path. See [`crate::parser::parse`].
    pub fn parse(input: &str) -> crate::ParseResult<FieldPath> {
        crate::parser::parse(input)
    }

    pub fn is_direct(&self) -> bool {
        self.direct
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The key used for a direct lookup, if this is a direct path.
    pub fn direct_key(&self) -> Option<&str> {
        if !self.direct {
            return None;
        }
        match self.segments.first() {
            Some(PathSegment::Member { name }) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Canonical dotted form: segments joined by `.`.
    pub fn normalized(&self) -> String {
        self.segments
            .iter()
            .map(PathSegment::key)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.normalized())
    }
}

impl std::str::FromStr for FieldPath {
    type Err = crate::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}
