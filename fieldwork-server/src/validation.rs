//! Strict request validation primitives.
//!
//! Every command decodes from a raw `serde_json::Value` against an explicit
//! schema: unknown keys reject the whole request, and every field rule is
//! evaluated so violations come back together, keyed by field name.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use regex::Regex;
use serde_json::{Map, Value};

use crate::errors::AppError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

/// Violations collected for one request, keyed by field path. The first
/// message recorded for a field wins.
#[derive(Debug, Default)]
pub struct FieldErrors {
    map: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.map.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.map.contains_key(field)
    }

    pub fn into_result(self) -> Result<(), AppError> {
        if self.map.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(self.map))
        }
    }
}

/// Raw JSON body extractor. Syntactically invalid JSON and non-JSON content
/// types are rejected with the same structured error body the schema checks
/// produce, instead of axum's plain-text rejections.
#[derive(Debug)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(_) => Err(AppError::bad_request(
                "Request body must be a valid JSON object",
            )),
        }
    }
}

/// The request body must be a JSON object.
pub fn require_object(body: &Value) -> Result<&Map<String, Value>, AppError> {
    body.as_object().ok_or_else(|| {
        AppError::bad_request("Request body must be a valid JSON object")
    })
}

/// Strict schema: any key outside `allowed` rejects the entire request.
pub fn reject_unknown_fields(
    body: &Map<String, Value>,
    allowed: &[&str],
) -> Result<(), AppError> {
    for key in body.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(AppError::bad_request(format!("Unknown field: {key}")));
        }
    }
    Ok(())
}

/// Reads an optional string field. JSON `null` counts as absent; a present
/// non-string value records a type violation and yields `None`.
pub fn opt_string(
    body: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.add(field, "This value should be of type string.");
            None
        }
    }
}

/// Reads an optional integer field with the same null/type conventions as
/// [`opt_string`].
pub fn opt_i64(
    body: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<i64> {
    match body.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => match value.as_i64() {
            Some(n) => Some(n),
            None => {
                errors.add(field, "This value should be of type integer.");
                None
            }
        },
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Required rule: the field must be present and non-blank.
pub fn require_non_blank(
    value: &Option<String>,
    field: &str,
    message: &str,
    errors: &mut FieldErrors,
) {
    match value {
        Some(s) if !is_blank(s) => {}
        _ => errors.add(field, message),
    }
}

/// Format rule, applied only when the field is present.
pub fn check_max_len(
    value: &Option<String>,
    field: &str,
    max: usize,
    message: &str,
    errors: &mut FieldErrors,
) {
    if let Some(s) = value
        && s.chars().count() > max
    {
        errors.add(field, message);
    }
}

/// Format rule, applied only when the field is present and non-blank.
pub fn check_email(value: &Option<String>, field: &str, errors: &mut FieldErrors) {
    if let Some(s) = value
        && !is_blank(s)
        && !EMAIL_RE.is_match(s)
    {
        errors.add(field, "Invalid email format");
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unknown_field_names_the_offender() {
        let body = json!({"name": "x", "foo": "bar"});
        let map = require_object(&body).unwrap();
        let err = reject_unknown_fields(map, &["name"]).unwrap_err();
        assert_eq!(err.message, "Unknown field: foo");
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert!(require_object(&json!([1, 2])).is_err());
        assert!(require_object(&json!("text")).is_err());
        assert!(require_object(&json!(null)).is_err());
    }

    #[test]
    fn null_counts_as_absent() {
        let body = json!({"name": null});
        let map = require_object(&body).unwrap();
        let mut errors = FieldErrors::new();
        assert_eq!(opt_string(map, "name", &mut errors), None);
        assert!(errors.is_empty());
    }

    #[test]
    fn wrong_type_records_a_violation() {
        let body = json!({"name": 12, "inspector_id": "two"});
        let map = require_object(&body).unwrap();
        let mut errors = FieldErrors::new();
        assert_eq!(opt_string(map, "name", &mut errors), None);
        assert_eq!(opt_i64(map, "inspector_id", &mut errors), None);
        assert!(!errors.is_empty());
    }

    #[test]
    fn email_rule_accepts_plain_addresses() {
        let mut errors = FieldErrors::new();
        check_email(&Some("john@example.com".to_string()), "email", &mut errors);
        assert!(errors.is_empty());

        check_email(&Some("not-an-email".to_string()), "email", &mut errors);
        assert!(!errors.is_empty());
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.add("name", "first");
        errors.add("name", "second");
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.fields.unwrap()["name"], "first");
    }
}
