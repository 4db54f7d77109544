//! FILENAME: core/grid-adapter/src/definition.rs
//! Grid Definition - The serializable configuration.
//!
//! This module contains all the types needed to DESCRIBE a grid page:
//! which columns to extract, how rows are identified, which wrapper objects
//! collapse to a label when merging, and how headers and cells are styled.
//! These structures are designed to be:
//! - Loadable from a page's JSON configuration
//! - Immutable snapshots; engines borrow or clone them, never mutate them

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::GridResult;

// ============================================================================
// COLUMNS
// ============================================================================

/// One displayed column: header text plus the path that extracts its cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    pub header_text: String,

    /// `.` for member access, `[n]` for indexing.
    pub field: String,
}

impl ColumnDescriptor {
    pub fn new(header_text: impl Into<String>, field: impl Into<String>) -> Self {
        ColumnDescriptor {
            header_text: header_text.into(),
            field: field.into(),
        }
    }
}

// ============================================================================
// ROW IDENTITY
// ============================================================================

/// Which record field identifies a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum RowIdField {
    /// `id`, kept in the record.
    #[default]
    Id,
    /// `index`, a transient row marker removed from the displayed record.
    Index,
    /// Any other key, kept in the record.
    Custom(String),
}

impl RowIdField {
    pub fn key(&self) -> &str {
        match self {
            RowIdField::Id => "id",
            RowIdField::Index => "index",
            RowIdField::Custom(key) => key.as_str(),
        }
    }

    /// True when the identifier is not a displayable field.
    pub fn is_transient(&self) -> bool {
        matches!(self, RowIdField::Index)
    }
}

// ============================================================================
// MERGE RULES
// ============================================================================

/// A label-bearing wrapper: objects carrying `field` compare by `projection`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discriminator {
    pub field: String,
    pub projection: String,
}

impl Discriminator {
    /// The common case where the discriminator is itself the label.
    pub fn label(field: impl Into<String>) -> Self {
        let field = field.into();
        Discriminator {
            projection: field.clone(),
            field,
        }
    }
}

/// Ordered discriminators, applied in sequence during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRules {
    pub discriminators: Vec<Discriminator>,
}

impl Default for MergeRules {
    fn default() -> Self {
        MergeRules {
            discriminators: vec![
                Discriminator::label("departmentName"),
                Discriminator::label("jobTitle"),
            ],
        }
    }
}

// ============================================================================
// PRESENTATION RULES
// ============================================================================

/// CSS class names emitted by the presentation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassNames {
    pub right: String,
    pub center: String,
    pub left: String,
    /// Appended to every banded row; may hold several classes.
    pub band: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        ClassNames {
            right: "oj-helper-justify-content-right".to_string(),
            center: "oj-helper-justify-content-center".to_string(),
            left: "oj-sm-justify-content-flex-start".to_string(),
            band: "oj-typography-bold oj-bg-neutral-30".to_string(),
        }
    }
}

/// Positional styling rules for headers and cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresentationRules {
    /// Width overrides in pixels, keyed by column index.
    pub widths: BTreeMap<usize, u32>,

    /// Width for columns without an override. `None` leaves them unstyled.
    pub default_width: Option<u32>,

    /// Right-justified columns.
    pub numeric_columns: BTreeSet<usize>,

    /// Center-justified boolean/status column.
    pub status_column: Option<usize>,

    /// Every `band_period`-th row (1-based) is banded. 0 disables banding.
    pub band_period: usize,

    pub classes: ClassNames,
}

impl Default for PresentationRules {
    fn default() -> Self {
        PresentationRules {
            widths: BTreeMap::new(),
            default_width: None,
            numeric_columns: BTreeSet::new(),
            status_column: None,
            band_period: 5,
            classes: ClassNames::default(),
        }
    }
}

impl PresentationRules {
    /// Customer table on the styling page: 15 columns with currency, date
    /// and count fields right-justified and the "Active" flag centered.
    pub fn styling_page() -> Self {
        PresentationRules {
            widths: BTreeMap::from([(4, 150), (8, 175), (9, 220), (11, 100), (13, 100)]),
            default_width: Some(125),
            numeric_columns: BTreeSet::from([2, 3, 4, 5, 8]),
            status_column: Some(13),
            ..PresentationRules::default()
        }
    }

    /// Employee table on the merged-cells page. No default width.
    pub fn merged_page() -> Self {
        PresentationRules {
            widths: BTreeMap::from([(0, 200), (1, 270), (2, 160), (3, 160), (4, 200), (5, 160)]),
            ..PresentationRules::default()
        }
    }
}

// ============================================================================
// MAIN DEFINITION STRUCT
// ============================================================================

/// The complete, serializable definition of a grid page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GridDefinition {
    /// Ordered; order is column order.
    pub columns: Vec<ColumnDescriptor>,

    #[serde(default)]
    pub row_id: RowIdField,

    #[serde(default)]
    pub merge: MergeRules,

    #[serde(default)]
    pub presentation: PresentationRules,
}

impl GridDefinition {
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        GridDefinition {
            columns,
            ..GridDefinition::default()
        }
    }

    /// Parses a definition from its JSON form.
    pub fn from_json(json: &str) -> GridResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Header text of every column, in column order.
    pub fn column_headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.header_text.clone()).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Employees with nested department/job wrappers.
    pub fn merged_page() -> Self {
        GridDefinition {
            columns: vec![
                ColumnDescriptor::new("Department", "departmentObject.items[0].departmentName"),
                ColumnDescriptor::new("Job", "jobObject.items[0].jobTitle"),
                ColumnDescriptor::new("First Name", "firstName"),
                ColumnDescriptor::new("Last Name", "lastName"),
                ColumnDescriptor::new("Email", "email"),
                ColumnDescriptor::new("Phone", "phoneNumber"),
            ],
            row_id: RowIdField::Id,
            merge: MergeRules::default(),
            presentation: PresentationRules::merged_page(),
        }
    }
}
