//! FILENAME: core/grid-adapter/src/engine.rs
//! Grid Engine - Flattens records into a renderable grid.
//!
//! This module takes records (already-parsed JSON objects) plus a
//! GridDefinition and produces a GridProvider:
//! - Column paths are parsed once per call, then resolved per cell
//! - Row identifiers are projected out of the records without mutating them
//! - A single failing cell aborts the whole call; there are no partial grids

use serde_json::Value;

use field_path::FieldPath;

use crate::definition::{ColumnDescriptor, GridDefinition, RowIdField};
use crate::error::GridResult;
use crate::resolver::FieldPathResolver;
use crate::view::{GridDimensions, GridMatrix, GridProvider, RowHeader};
use crate::{log_enter, log_exit, log_warn};

// ============================================================================
// ROW IDENTITY
// ============================================================================

/// Wraps each record's identifier in a one-element row header.
/// A record without the identifier gets a `null` header.
pub fn row_headers(records: &[Value], row_id: &RowIdField) -> Vec<RowHeader> {
    records
        .iter()
        .map(|record| vec![record.get(row_id.key()).cloned().unwrap_or(Value::Null)])
        .collect()
}

/// Projects `(stripped records, row headers)` from `records`.
///
/// Transient identifiers (`index`) are removed from the stripped copies;
/// other identifiers stay. The input records are never modified.
pub fn extract_row_ids(records: &[Value], row_id: &RowIdField) -> (Vec<Value>, Vec<RowHeader>) {
    let headers = row_headers(records, row_id);
    let stripped = records
        .iter()
        .map(|record| {
            let mut copy = record.clone();
            if row_id.is_transient() {
                if let Value::Object(map) = &mut copy {
                    map.shift_remove(row_id.key());
                }
            }
            copy
        })
        .collect();
    (stripped, headers)
}

/// Every value of each record, in the record's field order.
/// Non-object records become empty rows.
pub fn flatten_values(records: &[Value]) -> GridMatrix {
    records
        .iter()
        .map(|record| match record {
            Value::Object(map) => map.values().cloned().collect(),
            _ => Vec::new(),
        })
        .collect()
}

// ============================================================================
// RECORD FLATTENER
// ============================================================================

/// Turns records and column descriptors into a cell matrix.
#[derive(Debug, Default)]
pub struct RecordFlattener {
    resolver: FieldPathResolver,
}

impl RecordFlattener {
    pub fn new(resolver: FieldPathResolver) -> Self {
        RecordFlattener { resolver }
    }

    pub fn resolver(&self) -> &FieldPathResolver {
        &self.resolver
    }

    /// One row per record, one cell per column, in order.
    pub fn flatten(&self, records: &[Value], columns: &[ColumnDescriptor]) -> GridResult<GridMatrix> {
        log_enter!("GRID", "flatten", "records={} columns={}", records.len(), columns.len());

        let paths = columns
            .iter()
            .map(|c| FieldPath::parse(&c.field))
            .collect::<Result<Vec<_>, _>>()?;

        let mut matrix = Vec::with_capacity(records.len());
        for record in records {
            let row = paths
                .iter()
                .map(|path| self.resolver.resolve_path(record, path))
                .collect::<GridResult<Vec<_>>>()?;
            matrix.push(row);
        }

        log_exit!("GRID", "flatten", "rows={}", matrix.len());
        Ok(matrix)
    }

    /// Full pipeline for column-descriptor pages.
    pub fn build_grid(&self, records: &[Value], definition: &GridDefinition) -> GridResult<GridProvider> {
        let (rows, headers) = extract_row_ids(records, &definition.row_id);
        let data = self.flatten(&rows, &definition.columns)?;
        let dimensions = GridDimensions::new(data.len(), definition.column_count());
        GridProvider::new(data, dimensions, headers, definition.column_headers())
    }

    /// Full pipeline for pages that display every field of each record
    /// under fixed headers. Rows are padded with `null` or truncated to
    /// the header count.
    pub fn build_value_grid(
        &self,
        records: &[Value],
        column_headers: Vec<String>,
        row_id: &RowIdField,
    ) -> GridResult<GridProvider> {
        let (rows, headers) = extract_row_ids(records, row_id);
        let column_count = column_headers.len();

        let mut data = flatten_values(&rows);
        for (i, row) in data.iter_mut().enumerate() {
            if row.len() != column_count {
                log_warn!(
                    "GRID",
                    "row {} has {} fields for {} headers, fitting to headers",
                    i,
                    row.len(),
                    column_count
                );
                row.resize(column_count, Value::Null);
            }
        }

        let dimensions = GridDimensions::new(data.len(), column_count);
        GridProvider::new(data, dimensions, headers, column_headers)
    }
}
