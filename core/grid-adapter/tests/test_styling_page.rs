//! FILENAME: tests/test_styling_page.rs
//! Integration tests for the customer styling page: whole-record rows,
//! transient `index` row markers, alignment and banding.

mod common;

use common::{customer, customer_headers, customers};
use grid_adapter::{PresentationEngine, PresentationRules, RecordFlattener, RowIdField};
use serde_json::{json, Value};

#[test]
fn index_becomes_row_header_and_leaves_the_row() {
    let records = customers(6);
    let provider = RecordFlattener::default()
        .build_value_grid(&records, customer_headers(), &RowIdField::Index)
        .unwrap();

    assert_eq!(provider.dimensions().row, 6);
    assert_eq!(provider.dimensions().column, 15);
    assert_eq!(provider.row_header(5), Some(&json!(5)));
    assert_eq!(provider.cell(5, 0), Some(&json!("First5")));
    assert_eq!(provider.cell(5, 13), Some(&json!(false)));
    assert_eq!(provider.cell(3, 13), Some(&json!(true)));
}

#[test]
fn source_records_keep_their_index() {
    let records = customers(2);
    RecordFlattener::default()
        .build_value_grid(&records, customer_headers(), &RowIdField::Index)
        .unwrap();
    assert_eq!(records[1]["index"], json!(1));
}

#[test]
fn sparse_customer_is_padded() {
    let mut sparse = customer(0);
    sparse.as_object_mut().unwrap().remove("eyeColor");
    let provider = RecordFlattener::default()
        .build_value_grid(&[sparse], customer_headers(), &RowIdField::Index)
        .unwrap();
    assert_eq!(provider.cell(0, 14), Some(&Value::Null));
}

#[test]
fn window_fetch_over_customer_grid() {
    let provider = RecordFlattener::default()
        .build_value_grid(&customers(30), customer_headers(), &RowIdField::Index)
        .unwrap();
    let block = provider.fetch_by_offset(25, 25, 12, 10);
    assert_eq!(block.row_count(), 5);
    assert_eq!(block.column_headers, vec!["Birth Date", "Active", "Eye Color"]);
    assert!(block.rows_done);
    assert!(block.columns_done);
}

#[test]
fn alignment_and_banding_across_the_grid() {
    let engine = PresentationEngine::new(PresentationRules::styling_page());
    for row in 0..20usize {
        for column in 0..15usize {
            let class_name = engine.cell_class_name(column, Some(row));
            let expected_alignment = if [2, 3, 4, 5, 8].contains(&column) {
                "oj-helper-justify-content-right"
            } else if column == 13 {
                "oj-helper-justify-content-center"
            } else {
                "oj-sm-justify-content-flex-start"
            };
            assert!(class_name.starts_with(expected_alignment));
            assert_eq!(class_name.ends_with("oj-bg-neutral-30"), (row + 1) % 5 == 0);
        }
    }
}

#[test]
fn header_widths_and_classes() {
    let engine = PresentationEngine::new(PresentationRules::styling_page());
    assert_eq!(engine.column_style(9).as_deref(), Some("width:220px"));
    assert_eq!(engine.column_style(1).as_deref(), Some("width:125px"));
    assert_eq!(engine.column_header_class_name(4), "oj-helper-justify-content-right");
}
