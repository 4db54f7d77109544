//! FILENAME: core/grid-adapter/src/view.rs
//! Grid View - Render-ready output for the frontend.
//!
//! A GridProvider is a value object for one data snapshot: the cell
//! matrix, its dimensions, the row header values and the column header
//! text. The rendering layer asks it for cells, headers and row identity;
//! a data refresh builds a new provider rather than mutating this one.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GridError, GridResult};

/// Row-major cell values.
pub type GridMatrix = Vec<Vec<Value>>;

/// A one-element sequence wrapping a row identifier.
pub type RowHeader = Vec<Value>;

// ============================================================================
// DIMENSIONS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GridDimensions {
    pub row: usize,
    pub column: usize,
}

impl GridDimensions {
    pub fn new(row: usize, column: usize) -> Self {
        GridDimensions { row, column }
    }
}

// ============================================================================
// FETCHED BLOCK
// ============================================================================

/// A rectangular window of the grid, as returned by `fetch_by_offset`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridBlock {
    pub row_offset: usize,
    pub column_offset: usize,
    pub cells: GridMatrix,
    pub row_headers: Vec<RowHeader>,
    pub column_headers: Vec<String>,
    /// True when the window reaches the last row.
    pub rows_done: bool,
    /// True when the window reaches the last column.
    pub columns_done: bool,
}

impl GridBlock {
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_headers.len()
    }
}

// ============================================================================
// PROVIDER
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridProvider {
    data: GridMatrix,
    dimensions: GridDimensions,
    row_headers: Vec<RowHeader>,
    column_headers: Vec<String>,
}

impl GridProvider {
    /// Builds a provider, checking that every part agrees with `dimensions`.
    pub fn new(
        data: GridMatrix,
        dimensions: GridDimensions,
        row_headers: Vec<RowHeader>,
        column_headers: Vec<String>,
    ) -> GridResult<Self> {
        check_len("rows", dimensions.row, data.len())?;
        check_len("row headers", dimensions.row, row_headers.len())?;
        check_len("column headers", dimensions.column, column_headers.len())?;
        for (i, row) in data.iter().enumerate() {
            check_len(&format!("row {}", i), dimensions.column, row.len())?;
        }

        Ok(GridProvider {
            data,
            dimensions,
            row_headers,
            column_headers,
        })
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn row_count(&self) -> usize {
        self.dimensions.row
    }

    pub fn column_count(&self) -> usize {
        self.dimensions.column
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.row == 0 || self.dimensions.column == 0
    }

    /// Cell value at `(row, column)`.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Value> {
        self.data.get(row)?.get(column)
    }

    /// Header text at `column`.
    pub fn column_header(&self, column: usize) -> Option<&str> {
        self.column_headers.get(column).map(String::as_str)
    }

    /// Row identity at `row`: the single wrapped identifier value.
    pub fn row_header(&self, row: usize) -> Option<&Value> {
        self.row_headers.get(row)?.first()
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.data
    }

    pub fn row_headers(&self) -> &[RowHeader] {
        &self.row_headers
    }

    pub fn column_headers(&self) -> &[String] {
        &self.column_headers
    }

    /// Copies out a window of the grid, clamped to its bounds.
    pub fn fetch_by_offset(
        &self,
        row_offset: usize,
        row_count: usize,
        column_offset: usize,
        column_count: usize,
    ) -> GridBlock {
        let row_start = row_offset.min(self.dimensions.row);
        let row_end = row_offset.saturating_add(row_count).min(self.dimensions.row);
        let col_start = column_offset.min(self.dimensions.column);
        let col_end = column_offset
            .saturating_add(column_count)
            .min(self.dimensions.column);

        let cells = self.data[row_start..row_end]
            .iter()
            .map(|row| row[col_start..col_end].to_vec())
            .collect();

        GridBlock {
            row_offset: row_start,
            column_offset: col_start,
            cells,
            row_headers: self.row_headers[row_start..row_end].to_vec(),
            column_headers: self.column_headers[col_start..col_end].to_vec(),
            rows_done: row_end == self.dimensions.row,
            columns_done: col_end == self.dimensions.column,
        }
    }
}

fn check_len(what: &str, expected: usize, found: usize) -> GridResult<()> {
    if expected != found {
        return Err(GridError::DimensionMismatch {
            what: what.to_string(),
            expected,
            found,
        });
    }
    Ok(())
}
