//! Test fixtures for REST API testing.
//!
//! Payloads modelled on the public NYC restaurant inspection sample data.

use serde_json::{Value, json};

/// A bakery with three grades, the newest first.
pub fn morris_park_bake_shop() -> Value {
    json!({
        "name": "Morris Park Bake Shop",
        "cuisine": "Bakery",
        "borough": "Bronx",
        "address": {
            "building": "1007",
            "street": "Morris Park Ave",
            "zipcode": "10462"
        },
        "grades": [
            {"date": "2014-03-03T00:00:00Z", "grade": "A", "score": 2},
            {"date": "2013-09-11T00:00:00Z", "grade": "A", "score": 6},
            {"date": "2013-01-24T00:00:00Z", "grade": "A", "score": 10}
        ]
    })
}

/// A burger place whose newest grade sits in the middle of the list.
pub fn wendys() -> Value {
    json!({
        "name": "Wendy'S",
        "cuisine": "Hamburgers",
        "borough": "Brooklyn",
        "address": {
            "building": "469",
            "street": "Flatbush Avenue",
            "zipcode": "11225"
        },
        "grades": [
            {"date": "2013-01-16T00:00:00Z", "grade": "C", "score": 38},
            {"date": "2014-12-30T00:00:00Z", "grade": "B", "score": 15},
            {"date": "2014-07-01T00:00:00Z", "grade": "A", "score": 10}
        ]
    })
}

/// A restaurant with no inspection history.
pub fn riviera_caterer() -> Value {
    json!({
        "name": "Riviera Caterer",
        "cuisine": "American",
        "borough": "Brooklyn",
        "address": {
            "building": "2780",
            "street": "Stillwell Avenue",
            "zipcode": "11224"
        },
        "grades": []
    })
}

/// Minimal valid payload: required fields only.
pub fn minimal(name: &str) -> Value {
    json!({
        "name": name,
        "cuisine": "Pizza",
        "borough": "Queens"
    })
}
