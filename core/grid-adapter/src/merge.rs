//! FILENAME: core/grid-adapter/src/merge.rs
//! Merge Comparator - decides whether two adjacent cells render as one.
//!
//! Two stages, always in this order:
//! 1. Normalize each side on its own: a wrapper object carrying a known
//!    discriminator field is replaced by its label field
//! 2. Compare the normalized values with strict equality
//!
//! Strict equality follows JSON-in-the-browser semantics: scalars compare by
//! value (numbers numerically), while objects and arrays are equal only when
//! they are the very same value, never by structure.

use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::Value;

use crate::definition::MergeRules;
use crate::view::GridProvider;

static NULL: Value = Value::Null;

static DEFAULT_COMPARATOR: Lazy<MergeComparator> = Lazy::new(MergeComparator::default);

/// Default-rules comparison, callable with no setup.
pub fn should_merge(a: &Value, b: &Value) -> bool {
    DEFAULT_COMPARATOR.should_merge(a, b)
}

#[derive(Debug, Clone, Default)]
pub struct MergeComparator {
    rules: MergeRules,
}

impl MergeComparator {
    pub fn new(rules: MergeRules) -> Self {
        MergeComparator { rules }
    }

    pub fn rules(&self) -> &MergeRules {
        &self.rules
    }

    pub fn should_merge(&self, a: &Value, b: &Value) -> bool {
        let a = self.normalize(a);
        let b = self.normalize(b);
        strict_equals(a, b)
    }

    /// Applies every discriminator in order. A wrapper missing its
    /// projection field normalizes to `null`.
    pub fn normalize<'v>(&self, value: &'v Value) -> &'v Value {
        let mut current = value;
        for rule in &self.rules.discriminators {
            if let Value::Object(map) = current {
                if map.contains_key(&rule.field) {
                    current = map.get(&rule.projection).unwrap_or(&NULL);
                }
            }
        }
        current
    }

    /// Vertical runs of mergeable cells in `column`, top to bottom.
    /// Every row belongs to exactly one span; unmerged rows get span 1.
    pub fn merge_spans(&self, provider: &GridProvider, column: usize) -> Vec<MergeSpan> {
        let mut spans: Vec<MergeSpan> = Vec::new();
        let mut previous: Option<&Value> = None;

        for row in 0..provider.row_count() {
            let Some(cell) = provider.cell(row, column) else {
                break;
            };
            let merges = previous.is_some_and(|prev| self.should_merge(prev, cell));
            previous = Some(cell);

            if merges {
                if let Some(span) = spans.last_mut() {
                    span.row_span += 1;
                    continue;
                }
            }
            spans.push(MergeSpan {
                start_row: row,
                row_span: 1,
            });
        }

        spans
    }
}

/// A run of rows rendered as one merged cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeSpan {
    pub start_row: usize,
    pub row_span: usize,
}

impl MergeSpan {
    pub fn end_row(&self) -> usize {
        self.start_row + self.row_span - 1
    }

    pub fn is_merged(&self) -> bool {
        self.row_span > 1
    }
}

fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x == y || x.as_f64() == y.as_f64(),
        (Value::Object(_), _) | (Value::Array(_), _) => std::ptr::eq(a, b),
        _ => a == b,
    }
}
