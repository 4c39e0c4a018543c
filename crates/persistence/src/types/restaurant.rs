//! Restaurant document types.
//!
//! A [`Restaurant`] is the persisted document shape. Payloads arrive as
//! untyped JSON and are checked field by field with [`Restaurant::from_value`]
//! and [`RestaurantPatch::from_value`], so that a missing or mistyped field is
//! reported by name before anything reaches the store.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Borough names found in the restaurant data set.
///
/// Membership is advisory: other names are stored as given.
pub const KNOWN_BOROUGHS: &[&str] = &[
    "Bronx",
    "Brooklyn",
    "Manhattan",
    "Queens",
    "Staten Island",
    "Missing",
];

/// Returns true if `borough` is one of [`KNOWN_BOROUGHS`].
pub fn is_known_borough(borough: &str) -> bool {
    KNOWN_BOROUGHS.contains(&borough)
}

/// Street address of a restaurant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Building number.
    #[serde(default)]
    pub building: String,
    /// Street name.
    #[serde(default)]
    pub street: String,
    /// Postal code.
    #[serde(default)]
    pub zipcode: String,
}

/// A single inspection grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    /// When the grade was given.
    pub date: DateTime<Utc>,
    /// Letter code, free-form.
    pub grade: String,
    /// Inspection score, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
}

impl Grade {
    /// Creates a grade without a score.
    pub fn new(date: DateTime<Utc>, grade: impl Into<String>) -> Self {
        Self {
            date,
            grade: grade.into(),
            score: None,
        }
    }
}

/// Returns the grade letter with the most recent date.
///
/// When several grades share the latest date, the one that appears first in
/// `grades` wins. Returns `None` for an empty history.
pub fn current_grade(grades: &[Grade]) -> Option<&str> {
    grades
        .iter()
        .fold(None, |latest: Option<&Grade>, grade| match latest {
            Some(current) if current.date >= grade.date => Some(current),
            _ => Some(grade),
        })
        .map(|grade| grade.grade.as_str())
}

/// A restaurant document as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Restaurant name.
    pub name: String,
    /// Cuisine type.
    pub cuisine: String,
    /// Borough the restaurant is in.
    pub borough: String,
    /// Street address.
    #[serde(default)]
    pub address: Address,
    /// Inspection history.
    #[serde(default)]
    pub grades: Vec<Grade>,
}

impl Restaurant {
    /// Validates an untyped payload and builds a restaurant from it.
    ///
    /// `name`, `cuisine` and `borough` must be present as strings. `address`
    /// and `grades` are optional and default to empty. Any `id` or unknown
    /// key in the payload is ignored.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        let mut fields = into_object(value)?;

        let name = required_string(&mut fields, "name")?;
        let cuisine = required_string(&mut fields, "cuisine")?;
        let borough = required_string(&mut fields, "borough")?;
        let address = optional_field::<Address>(&mut fields, "address")?.unwrap_or_default();
        let grades = optional_field::<Vec<Grade>>(&mut fields, "grades")?.unwrap_or_default();

        Ok(Self {
            name,
            cuisine,
            borough,
            address,
            grades,
        })
    }

    /// Returns the grade letter with the most recent date.
    pub fn current_grade(&self) -> Option<&str> {
        current_grade(&self.grades)
    }
}

/// A partial update to a restaurant.
///
/// Each `Some` field replaces the stored value; `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantPatch {
    /// New name.
    pub name: Option<String>,
    /// New cuisine.
    pub cuisine: Option<String>,
    /// New borough.
    pub borough: Option<String>,
    /// Replacement address.
    pub address: Option<Address>,
    /// Replacement grade history.
    pub grades: Option<Vec<Grade>>,
}

impl RestaurantPatch {
    /// Validates an untyped payload and collects the updatable fields in it.
    ///
    /// Fields set to `null` count as absent. `id` and unknown keys are
    /// ignored here; callers that care about `id` read it beforehand.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        let mut fields = into_object(value)?;

        Ok(Self {
            name: optional_field(&mut fields, "name")?,
            cuisine: optional_field(&mut fields, "cuisine")?,
            borough: optional_field(&mut fields, "borough")?,
            address: optional_field(&mut fields, "address")?,
            grades: optional_field(&mut fields, "grades")?,
        })
    }

    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.updated_fields().is_empty()
    }

    /// Names of the fields this patch sets.
    pub fn updated_fields(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.name.is_some() {
            names.push("name");
        }
        if self.cuisine.is_some() {
            names.push("cuisine");
        }
        if self.borough.is_some() {
            names.push("borough");
        }
        if self.address.is_some() {
            names.push("address");
        }
        if self.grades.is_some() {
            names.push("grades");
        }
        names
    }

    /// Applies the patch to a restaurant in place.
    pub fn apply_to(self, restaurant: &mut Restaurant) {
        if let Some(name) = self.name {
            restaurant.name = name;
        }
        if let Some(cuisine) = self.cuisine {
            restaurant.cuisine = cuisine;
        }
        if let Some(borough) = self.borough {
            restaurant.borough = borough;
        }
        if let Some(address) = self.address {
            restaurant.address = address;
        }
        if let Some(grades) = self.grades {
            restaurant.grades = grades;
        }
    }
}

fn into_object(value: Value) -> Result<Map<String, Value>, ValidationError> {
    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(ValidationError::InvalidDocument {
            message: format!("expected a JSON object, found {}", json_kind(&other)),
        }),
    }
}

fn required_string(fields: &mut Map<String, Value>, field: &str) -> Result<String, ValidationError> {
    match fields.remove(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingRequiredField {
            field: field.to_string(),
        }),
        Some(Value::String(value)) => Ok(value),
        Some(other) => Err(ValidationError::InvalidField {
            field: field.to_string(),
            message: format!("expected a string, found {}", json_kind(&other)),
        }),
    }
}

fn optional_field<T: DeserializeOwned>(
    fields: &mut Map<String, Value>,
    field: &str,
) -> Result<Option<T>, ValidationError> {
    match fields.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ValidationError::InvalidField {
                field: field.to_string(),
                message: e.to_string(),
            }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
