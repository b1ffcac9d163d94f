// src/application/validation/raw.rs
//! Type gate over the untyped request body.
//!
//! Typed decoding reports mismatches in terms of Rust types and loses the
//! offending field, so create/edit bodies are first inspected as a generic
//! JSON object to give clients a field-specific message.

use serde_json::{Map, Value};
use thiserror::Error;

const CREATE_EMPTY_BODY: &str = "must contain required fields (Title, Content)";
const EDIT_EMPTY_BODY: &str =
    "must contain at least one field to update (Title, Content, or Categories)";

/// First problem found in a raw request body.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestViolation {
    #[error("body: invalid JSON format")]
    InvalidJson,

    #[error("body: {0}")]
    EmptyBody(&'static str),

    /// `actual` is only reported by the edit gate.
    #[error("{field}: must be string{}", type_suffix(.actual))]
    WrongType {
        field: &'static str,
        actual: Option<&'static str>,
    },

    #[error("Categories: must be array numbers")]
    NotArray,

    #[error("Categories: element at index {index} must be number, got {actual}")]
    NotNumber { index: usize, actual: &'static str },

    #[error("Categories: element at index {index} must be integer, got {value}")]
    NotInteger { index: usize, value: f64 },

    #[error("Categories: element at index {index} must be positive, got {value}")]
    NotPositive { index: usize, value: f64 },
}

fn type_suffix(actual: &Option<&'static str>) -> String {
    actual.map(|name| format!(", got {name}")).unwrap_or_default()
}

/// Presence of a key in the raw object.
#[derive(Debug, Clone, Copy)]
enum RawField<'a> {
    Absent,
    Null,
    Present(&'a Value),
}

impl<'a> RawField<'a> {
    fn lookup(body: &'a Map<String, Value>, key: &str) -> Self {
        match body.get(key) {
            None => Self::Absent,
            Some(Value::Null) => Self::Null,
            Some(value) => Self::Present(value),
        }
    }
}

/// Gate for `POST /create`.
///
/// Missing `Title`/`Content` keys pass here; structural validation reports them.
/// An explicit `null` is a type error for the scalar fields.
pub fn validate_create_news_request(data: &[u8]) -> Result<(), RequestViolation> {
    let body = parse_object(data)?;
    if body.is_empty() {
        return Err(RequestViolation::EmptyBody(CREATE_EMPTY_BODY));
    }

    for field in ["Title", "Content"] {
        match RawField::lookup(&body, field) {
            RawField::Absent | RawField::Present(Value::String(_)) => {}
            RawField::Null | RawField::Present(_) => {
                return Err(RequestViolation::WrongType {
                    field,
                    actual: None,
                });
            }
        }
    }

    match RawField::lookup(&body, "Categories") {
        RawField::Present(categories) => validate_categories_array(categories),
        RawField::Absent | RawField::Null => Ok(()),
    }
}

/// Gate for `POST /edit/{id}`. Explicit `null` means the field is not updated.
pub fn validate_edit_news_request(data: &[u8]) -> Result<(), RequestViolation> {
    let body = parse_object(data)?;
    if body.is_empty() {
        return Err(RequestViolation::EmptyBody(EDIT_EMPTY_BODY));
    }

    for field in ["Title", "Content"] {
        if let RawField::Present(value) = RawField::lookup(&body, field) {
            if !value.is_string() {
                return Err(RequestViolation::WrongType {
                    field,
                    actual: Some(json_type_name(value)),
                });
            }
        }
    }

    match RawField::lookup(&body, "Categories") {
        RawField::Present(categories) => validate_categories_array(categories),
        RawField::Absent | RawField::Null => Ok(()),
    }
}

/// Every element must be a positive whole number. Stops at the first bad index.
fn validate_categories_array(categories: &Value) -> Result<(), RequestViolation> {
    let Value::Array(items) = categories else {
        return Err(RequestViolation::NotArray);
    };

    for (index, item) in items.iter().enumerate() {
        let Some(value) = item.as_f64() else {
            return Err(RequestViolation::NotNumber {
                index,
                actual: json_type_name(item),
            });
        };

        if value.fract() != 0.0 {
            return Err(RequestViolation::NotInteger { index, value });
        }

        if value <= 0.0 {
            return Err(RequestViolation::NotPositive { index, value });
        }
    }

    Ok(())
}

/// A literal `null` body decodes as an empty object.
fn parse_object(data: &[u8]) -> Result<Map<String, Value>, RequestViolation> {
    serde_json::from_slice::<Option<Map<String, Value>>>(data)
        .map(Option::unwrap_or_default)
        .map_err(|_| RequestViolation::InvalidJson)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
