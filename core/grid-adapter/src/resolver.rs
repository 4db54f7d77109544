//! FILENAME: core/grid-adapter/src/resolver.rs
//! Field Path Resolver - evaluates a parsed path against one record.
//!
//! Direct paths are plain key lookups with a fallback for missing keys.
//! Nested paths walk the record segment by segment:
//! - Member segments index objects
//! - Index segments index arrays, or objects by the index's decimal text
//! - Stepping off the end of the data yields "absent"; a final absent leaf
//!   resolves to `null`, but walking *through* absent or `null` is an error

use serde_json::Value;

use field_path::{FieldPath, PathSegment};

use crate::error::{GridError, GridResult};
use crate::fallback::{DemoHundredsFallback, FallbackProvider};
use crate::log_debug;

/// Records longer than this are truncated in error messages.
const RECORD_PREVIEW_LEN: usize = 200;

#[derive(Debug)]
pub struct FieldPathResolver {
    fallback: Box<dyn FallbackProvider>,
}

impl Default for FieldPathResolver {
    fn default() -> Self {
        FieldPathResolver::new(Box::new(DemoHundredsFallback))
    }
}

impl FieldPathResolver {
    pub fn new(fallback: Box<dyn FallbackProvider>) -> Self {
        FieldPathResolver { fallback }
    }

    pub fn with_fallback<F: FallbackProvider + 'static>(fallback: F) -> Self {
        FieldPathResolver::new(Box::new(fallback))
    }

    /// Parses `path` and resolves it against `record`.
    pub fn resolve(&self, record: &Value, path: &str) -> GridResult<Value> {
        let parsed = FieldPath::parse(path)?;
        self.resolve_path(record, &parsed)
    }

    /// Resolves an already-parsed path against `record`.
    pub fn resolve_path(&self, record: &Value, path: &FieldPath) -> GridResult<Value> {
        if let Some(key) = path.direct_key() {
            return Ok(match record.get(key) {
                Some(value) => value.clone(),
                None => {
                    let value = self.fallback.fallback_for(key);
                    log_debug!("GRID", "fallback for missing field '{}' -> {}", key, value);
                    value
                }
            });
        }

        let mut current: Option<&Value> = Some(record);
        for segment in &path.segments {
            current = match current {
                None | Some(Value::Null) => {
                    return Err(GridError::PathResolution {
                        path: path.source.clone(),
                        segment: segment.key(),
                        record: preview(record),
                    });
                }
                Some(value) => step(value, segment),
            };
        }

        Ok(current.cloned().unwrap_or(Value::Null))
    }
}

/// One walk step. Scalars have no members, so stepping into them is absent.
fn step<'v>(value: &'v Value, segment: &PathSegment) -> Option<&'v Value> {
    match (value, segment) {
        (Value::Object(map), PathSegment::Member { name }) => map.get(name),
        (Value::Object(map), PathSegment::Index { position }) => map.get(&position.to_string()),
        (Value::Array(items), PathSegment::Index { position }) => items.get(*position),
        _ => None,
    }
}

fn preview(record: &Value) -> String {
    let text = record.to_string();
    if text.chars().count() <= RECORD_PREVIEW_LEN {
        return text;
    }
    let mut cut: String = text.chars().take(RECORD_PREVIEW_LEN).collect();
    cut.push_str("...");
    cut
}
