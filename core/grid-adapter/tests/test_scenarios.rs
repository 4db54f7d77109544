//! FILENAME: tests/test_scenarios.rs
//! End-to-end behaviour of the resolver, flattener, comparator and
//! presentation engine on small literal inputs.

use grid_adapter::{
    should_merge, ColumnDescriptor, FieldPathResolver, PresentationEngine, PresentationRules,
    RecordFlattener,
};
use serde_json::json;

#[test]
fn nested_path_resolves_to_leaf() {
    let record = json!({ "jobObject": { "items": [ { "jobTitle": "Engineer" } ] } });
    let value = FieldPathResolver::default()
        .resolve(&record, "jobObject.items[0].jobTitle")
        .unwrap();
    assert_eq!(value, json!("Engineer"));
}

#[test]
fn missing_direct_field_falls_back_to_round_number() {
    let record = json!({ "firstName": "Ann" });
    let resolver = FieldPathResolver::default();
    for _ in 0..100 {
        let value = resolver.resolve(&record, "missingField").unwrap();
        let n = value.as_u64().expect("fallback is a non-negative integer");
        assert_eq!(n % 100, 0);
        assert!(n < 2500);
    }
}

#[test]
fn flatten_two_by_two() {
    let records = vec![json!({ "id": 1, "a": 1, "b": 2 }), json!({ "id": 2, "a": 3, "b": 4 })];
    let columns = vec![ColumnDescriptor::new("A", "a"), ColumnDescriptor::new("B", "b")];
    let matrix = RecordFlattener::default().flatten(&records, &columns).unwrap();
    assert_eq!(matrix, vec![vec![json!(1), json!(2)], vec![json!(3), json!(4)]]);
}

#[test]
fn department_wrappers_merge_by_name() {
    assert!(should_merge(&json!({ "departmentName": "Eng" }), &json!({ "departmentName": "Eng" })));
    assert!(!should_merge(&json!({ "departmentName": "Eng" }), &json!({ "departmentName": "Sales" })));
}

#[test]
fn numeric_cell_on_fifth_row_is_right_aligned_and_banded() {
    let engine = PresentationEngine::new(PresentationRules::styling_page());
    let class_name = engine.cell_class_name(2, Some(4));
    let parts: Vec<&str> = class_name.split(' ').collect();
    assert_eq!(parts[0], "oj-helper-justify-content-right");
    assert!(parts.contains(&"oj-typography-bold"));
    assert!(parts.contains(&"oj-bg-neutral-30"));
}

#[test]
fn flatten_dimensions_follow_inputs() {
    let flattener = RecordFlattener::default();
    let columns = vec![
        ColumnDescriptor::new("X", "x"),
        ColumnDescriptor::new("Y", "y.z"),
        ColumnDescriptor::new("Q", "q"),
    ];
    for rows in [0usize, 1, 7] {
        let records: Vec<_> = (0..rows).map(|i| json!({ "x": i, "y": { "z": i * 2 } })).collect();
        let matrix = flattener.flatten(&records, &columns).unwrap();
        assert_eq!(matrix.len(), rows);
        assert!(matrix.iter().all(|row| row.len() == columns.len()));
    }
}
