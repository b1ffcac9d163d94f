//! Turns `validator` reports into the single `"<Field>: <reason>"` message
//! returned to clients.

use serde_json::Value;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// Code used by [`positive_ids`] so the message can name the element.
pub const ELEMENT_NOT_POSITIVE: &str = "gt";

/// Rust field name paired with its wire name, in reporting order.
const FIELD_ORDER: [(&str, &str); 3] = [
    ("title", "Title"),
    ("content", "Content"),
    ("categories", "Categories"),
];

/// Message for the first violated rule, or `None` when the report is empty.
pub fn first_violation(errors: &ValidationErrors) -> Option<String> {
    FIELD_ORDER.iter().find_map(|(field, wire_name)| {
        let Some(ValidationErrorsKind::Field(list)) = errors.errors().get(*field) else {
            return None;
        };
        let error = list
            .iter()
            .find(|error| error.code == "required")
            .or_else(|| list.first())?;
        Some(describe(wire_name, error))
    })
}

fn describe(wire_name: &str, error: &ValidationError) -> String {
    match error.code.as_ref() {
        "required" => format!("{wire_name}: field is required"),
        "min" => format!(
            "{wire_name}: minimum length is {}",
            param_i64(error, "min").unwrap_or(1)
        ),
        "length" => format!("{wire_name}: {}", length_reason(error)),
        ELEMENT_NOT_POSITIVE => {
            let min = param_i64(error, "min").unwrap_or(0);
            match param_i64(error, "index") {
                Some(index) => format!("{wire_name}[{index}]: must be greater than {min}"),
                None => format!("{wire_name}: must be greater than {min}"),
            }
        }
        other => format!("{wire_name}: validation failed ({other})"),
    }
}

fn length_reason(error: &ValidationError) -> String {
    let min = param_i64(error, "min");
    let max = param_i64(error, "max");
    let actual = error
        .params
        .get("value")
        .and_then(Value::as_str)
        .and_then(|value| i64::try_from(value.chars().count()).ok());

    match (min, max, actual) {
        (Some(min), _, Some(len)) if len < min => format!("minimum length is {min}"),
        (_, Some(max), _) => format!("maximum length is {max}"),
        (Some(min), None, _) => format!("minimum length is {min}"),
        (None, None, _) => "invalid length".to_owned(),
    }
}

fn param_i64(error: &ValidationError, name: &str) -> Option<i64> {
    error.params.get(name).and_then(Value::as_i64)
}

/// Empty strings count as missing for required text fields.
pub fn required_text(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::new("required"))
    } else {
        Ok(())
    }
}

/// Optional text fields that are present must not be empty after trimming.
pub fn non_empty_text(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        let mut error = ValidationError::new("min");
        error.add_param("min".into(), &1);
        Err(error)
    } else {
        Ok(())
    }
}

/// Every category id must be greater than zero.
pub fn positive_ids(ids: &[i64]) -> Result<(), ValidationError> {
    match ids.iter().position(|id| *id <= 0) {
        Some(index) => {
            let mut error = ValidationError::new(ELEMENT_NOT_POSITIVE);
            error.add_param("index".into(), &index);
            error.add_param("min".into(), &0);
            error.add_param("value".into(), &ids[index]);
            Err(error)
        }
        None => Ok(()),
    }
}
