//! FILENAME: core/grid-adapter/src/presentation.rs
//! Presentation Engine - per-header and per-cell style directives.
//!
//! Pure lookups over PresentationRules:
//! - column width: per-index override, else the default, else nothing
//! - alignment: numeric columns right, the status column centered, rest left
//! - banding: every `band_period`-th row, only when a row index is given

use serde::{Deserialize, Serialize};

use crate::definition::PresentationRules;

/// Horizontal justification of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Default)]
pub struct PresentationEngine {
    rules: PresentationRules,
}

impl PresentationEngine {
    pub fn new(rules: PresentationRules) -> Self {
        PresentationEngine { rules }
    }

    pub fn rules(&self) -> &PresentationRules {
        &self.rules
    }

    /// CSS width directive for a column header, e.g. `width:160px`.
    pub fn column_style(&self, column: usize) -> Option<String> {
        self.rules
            .widths
            .get(&column)
            .copied()
            .or(self.rules.default_width)
            .map(|px| format!("width:{}px", px))
    }

    pub fn alignment(&self, column: usize) -> Alignment {
        if self.rules.numeric_columns.contains(&column) {
            Alignment::Right
        } else if self.rules.status_column == Some(column) {
            Alignment::Center
        } else {
            Alignment::Left
        }
    }

    /// True when `row` (0-based) falls on a band.
    pub fn is_banded(&self, row: usize) -> bool {
        let period = self.rules.band_period;
        period != 0 && (row + 1) % period == 0
    }

    /// Alignment class, then banding classes when `row` is given and banded.
    pub fn cell_class_name(&self, column: usize, row: Option<usize>) -> String {
        let classes = &self.rules.classes;
        let mut class_name = match self.alignment(column) {
            Alignment::Right => classes.right.clone(),
            Alignment::Center => classes.center.clone(),
            Alignment::Left => classes.left.clone(),
        };
        if row.is_some_and(|r| self.is_banded(r)) && !classes.band.is_empty() {
            class_name.push(' ');
            class_name.push_str(&classes.band);
        }
        class_name
    }

    /// Header cells are aligned like their column but never banded.
    pub fn column_header_class_name(&self, column: usize) -> String {
        self.cell_class_name(column, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RIGHT: &str = "oj-helper-justify-content-right";
    const CENTER: &str = "oj-helper-justify-content-center";
    const LEFT: &str = "oj-sm-justify-content-flex-start";
    const BAND: &str = "oj-typography-bold oj-bg-neutral-30";

    #[test]
    fn styling_page_widths() {
        let engine = PresentationEngine::new(PresentationRules::styling_page());
        assert_eq!(engine.column_style(8).as_deref(), Some("width:175px"));
        assert_eq!(engine.column_style(4).as_deref(), Some("width:150px"));
        assert_eq!(engine.column_style(9).as_deref(), Some("width:220px"));
        assert_eq!(engine.column_style(11).as_deref(), Some("width:100px"));
        assert_eq!(engine.column_style(13).as_deref(), Some("width:100px"));
        assert_eq!(engine.column_style(0).as_deref(), Some("width:125px"));
        assert_eq!(engine.column_style(99).as_deref(), Some("width:125px"));
    }

    #[test]
    fn merged_page_has_no_default_width() {
        let engine = PresentationEngine::new(PresentationRules::merged_page());
        assert_eq!(engine.column_style(1).as_deref(), Some("width:270px"));
        assert_eq!(engine.column_style(3).as_deref(), Some("width:160px"));
        assert_eq!(engine.column_style(0).as_deref(), Some("width:200px"));
        assert_eq!(engine.column_style(6), None);
    }

    #[test]
    fn alignment_axes() {
        let engine = PresentationEngine::new(PresentationRules::styling_page());
        assert_eq!(engine.alignment(2), Alignment::Right);
        assert_eq!(engine.alignment(13), Alignment::Center);
        assert_eq!(engine.alignment(0), Alignment::Left);
    }

    #[test]
    fn numeric_column_on_band_row() {
        let engine = PresentationEngine::new(PresentationRules::styling_page());
        assert_eq!(engine.cell_class_name(2, Some(4)), format!("{} {}", RIGHT, BAND));
    }

    #[test]
    fn header_is_never_banded() {
        let engine = PresentationEngine::new(PresentationRules::styling_page());
        assert_eq!(engine.column_header_class_name(13), CENTER);
        assert_eq!(engine.column_header_class_name(1), LEFT);
    }

    #[test]
    fn band_iff_fifth_row() {
        let engine = PresentationEngine::new(PresentationRules::styling_page());
        for row in 0..40 {
            let class_name = engine.cell_class_name(1, Some(row));
            assert_eq!(class_name.contains(BAND), (row + 1) % 5 == 0, "row {}", row);
            assert!(class_name.starts_with(LEFT));
        }
    }

    #[test]
    fn exactly_one_alignment_class() {
        let engine = PresentationEngine::new(PresentationRules::styling_page());
        for column in 0..16 {
            for row in [None, Some(0), Some(4), Some(9)] {
                let class_name = engine.cell_class_name(column, row);
                let count = [RIGHT, CENTER, LEFT]
                    .iter()
                    .filter(|c| class_name.split(' ').any(|part| part == **c))
                    .count();
                assert_eq!(count, 1, "column {} row {:?}", column, row);
            }
        }
    }

    #[test]
    fn zero_period_disables_banding() {
        let rules = PresentationRules {
            band_period: 0,
            ..PresentationRules::default()
        };
        let engine = PresentationEngine::new(rules);
        assert_eq!(engine.cell_class_name(0, Some(4)), LEFT);
    }

    #[test]
    fn custom_period() {
        let rules = PresentationRules {
            band_period: 2,
            ..PresentationRules::default()
        };
        let engine = PresentationEngine::new(rules);
        assert!(engine.is_banded(1));
        assert!(!engine.is_banded(2));
    }
}
