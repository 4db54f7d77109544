//! FILENAME: tests/common/mod.rs
//! Fixtures for grid-adapter integration tests.

#![allow(dead_code)]

use grid_adapter::{FieldPathResolver, FixedFallback, GridDefinition, GridPage};
use serde_json::{json, Value};

/// Employee with department and job wrapped the way the HR service nests them.
pub fn employee(id: u32, department: &str, job: &str, first: &str, last: &str) -> Value {
    json!({
        "id": id,
        "departmentObject": { "items": [ { "departmentId": id * 10, "departmentName": department } ] },
        "jobObject": { "items": [ { "jobId": format!("J{}", id), "jobTitle": job } ] },
        "firstName": first,
        "lastName": last,
        "email": format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        "phoneNumber": format!("555-01{:02}", id)
    })
}

pub fn employees() -> Vec<Value> {
    vec![
        employee(1, "Engineering", "Developer", "Ann", "Lee"),
        employee(2, "Engineering", "Developer", "Bo", "Ray"),
        employee(3, "Engineering", "Architect", "Cy", "Moe"),
        employee(4, "Sales", "Account Manager", "Di", "Kim"),
        employee(5, "Sales", "Account Manager", "Ed", "Orr"),
    ]
}

/// Customer row as shipped in the styling page's JSON, `index` first.
pub fn customer(index: u32) -> Value {
    let gender = if index % 2 == 0 { "female" } else { "male" };
    let balance = 1000.5 + f64::from(index);
    json!({
        "index": index,
        "firstName": format!("First{}", index),
        "lastName": format!("Last{}", index),
        "balance": balance,
        "registered": "2019-04-12T09:21:01 -02:00",
        "totalAmountOrdered": 20 * index,
        "lastOrder": "2021-01-03T10:00:00 -02:00",
        "company": "ACME",
        "shortName": "AC",
        "phone": 5550100 + index,
        "country": "Norway",
        "gender": gender,
        "age": 20 + index,
        "birthDate": "1990-01-01",
        "isActive": index % 3 == 0,
        "eyeColor": "green"
    })
}

pub fn customers(count: u32) -> Vec<Value> {
    (0..count).map(customer).collect()
}

pub fn customer_headers() -> Vec<String> {
    [
        "First Name",
        "Last Name",
        "Balance",
        "Registered",
        "Total Amount Ordered",
        "Last Order",
        "Company",
        "Short Name",
        "Phone",
        "Country origin",
        "Gender",
        "Age",
        "Birth Date",
        "Active",
        "Eye Color",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Merged-cells page with a deterministic fallback.
pub fn merged_page() -> GridPage {
    GridPage::with_resolver(
        GridDefinition::merged_page(),
        FieldPathResolver::with_fallback(FixedFallback(json!(0))),
    )
}
