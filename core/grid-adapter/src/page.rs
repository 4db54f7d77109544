//! FILENAME: core/grid-adapter/src/page.rs
//! Grid Page - one page's definition wired to its engines.
//!
//! The rendering layer holds a GridPage for the lifetime of a page and
//! calls it for a fresh provider on every data refresh, plus the style and
//! merge callbacks at render time. None of the callbacks keep state.

use serde_json::Value;

use crate::definition::GridDefinition;
use crate::engine::RecordFlattener;
use crate::error::GridResult;
use crate::merge::MergeComparator;
use crate::presentation::PresentationEngine;
use crate::resolver::FieldPathResolver;
use crate::view::GridProvider;

#[derive(Debug)]
pub struct GridPage {
    definition: GridDefinition,
    flattener: RecordFlattener,
    merge: MergeComparator,
    presentation: PresentationEngine,
}

impl GridPage {
    /// Uses the demo fallback for missing direct fields.
    pub fn new(definition: GridDefinition) -> Self {
        GridPage::with_resolver(definition, FieldPathResolver::default())
    }

    pub fn with_resolver(definition: GridDefinition, resolver: FieldPathResolver) -> Self {
        GridPage {
            flattener: RecordFlattener::new(resolver),
            merge: MergeComparator::new(definition.merge.clone()),
            presentation: PresentationEngine::new(definition.presentation.clone()),
            definition,
        }
    }

    pub fn definition(&self) -> &GridDefinition {
        &self.definition
    }

    /// Builds the provider for one data snapshot.
    pub fn grid(&self, records: &[Value]) -> GridResult<GridProvider> {
        self.flattener.build_grid(records, &self.definition)
    }

    pub fn column_headers(&self) -> Vec<String> {
        self.definition.column_headers()
    }

    pub fn should_merge(&self, a: &Value, b: &Value) -> bool {
        self.merge.should_merge(a, b)
    }

    pub fn column_style(&self, column: usize) -> Option<String> {
        self.presentation.column_style(column)
    }

    pub fn cell_class_name(&self, column: usize, row: usize) -> String {
        self.presentation.cell_class_name(column, Some(row))
    }

    pub fn column_header_class_name(&self, column: usize) -> String {
        self.presentation.column_header_class_name(column)
    }

    pub fn merge(&self) -> &MergeComparator {
        &self.merge
    }

    pub fn presentation(&self) -> &PresentationEngine {
        &self.presentation
    }
}
