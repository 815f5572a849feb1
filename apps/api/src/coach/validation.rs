//! Request validation shared by every coach endpoint.
//!
//! Each request type declares a static schema; `ValidatedJson<T>` checks the raw
//! JSON body against it, collecting every violated field, before deserializing.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::errors::AppError;

/// A single violated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("Invalid request: {}", summarize(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(field, message)],
        }
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// One constraint on a top-level body field.
///
/// Every rule except `Required` applies only when the field is present and not null.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Present, not null, and not a blank string.
    Required,
    /// String with at least N characters (after trimming).
    MinLength(usize),
    /// String with at most N characters.
    MaxLength(usize),
    /// String equal to one of the listed values.
    OneOf(&'static [&'static str]),
    /// JSON array.
    Array,
    /// Array with at least N elements.
    MinItems(usize),
    /// Array whose elements are all strings.
    StringItems,
    /// Integer within the inclusive range.
    Range(i64, i64),
    /// JSON object.
    Object,
    /// Array of objects, each checked against the nested field specs.
    Items(&'static [FieldSpec]),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rules: &'static [Rule],
}

/// Implemented by every request body accepted through `ValidatedJson`.
pub trait Validated: DeserializeOwned {
    const SCHEMA: &'static [FieldSpec];
}

/// Checks `body` against `schema`, returning every violation found.
pub fn check_schema(body: &Value, schema: &[FieldSpec]) -> Result<(), ValidationError> {
    let Some(object) = body.as_object() else {
        return Err(ValidationError::single("body", "must be a JSON object"));
    };

    let errors: Vec<FieldError> = schema
        .iter()
        .filter_map(|spec| check_field(object, spec))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { errors })
    }
}

/// Reports the first rule a field violates; one message per field keeps the list readable.
fn check_field(object: &Map<String, Value>, spec: &FieldSpec) -> Option<FieldError> {
    let value = object.get(spec.name).filter(|v| !v.is_null());
    let fail = |message: String| Some(FieldError::new(spec.name, message));

    let Some(value) = value else {
        return if spec.rules.iter().any(|r| matches!(r, Rule::Required)) {
            fail("is required".to_string())
        } else {
            None
        };
    };

    for rule in spec.rules {
        match *rule {
            Rule::Required => {
                if value.as_str().is_some_and(|s| s.trim().is_empty()) {
                    return fail("is required".to_string());
                }
            }
            Rule::MinLength(min) => match value.as_str() {
                Some(s) if s.trim().chars().count() >= min => {}
                Some(_) => return fail(format!("must be at least {min} characters")),
                None => return fail("must be a string".to_string()),
            },
            Rule::MaxLength(max) => match value.as_str() {
                Some(s) if s.chars().count() <= max => {}
                Some(_) => return fail(format!("must be at most {max} characters")),
                None => return fail("must be a string".to_string()),
            },
            Rule::OneOf(allowed) => match value.as_str() {
                Some(s) if allowed.contains(&s) => {}
                _ => return fail(format!("must be one of: {}", allowed.join(", "))),
            },
            Rule::Array => {
                if !value.is_array() {
                    return fail("must be an array".to_string());
                }
            }
            Rule::MinItems(min) => match value.as_array() {
                Some(items) if items.len() >= min => {}
                Some(_) => return fail(format!("must contain at least {min} item(s)")),
                None => return fail("must be an array".to_string()),
            },
            Rule::StringItems => match value.as_array() {
                Some(items) if items.iter().all(Value::is_string) => {}
                Some(_) => return fail("must contain only strings".to_string()),
                None => return fail("must be an array".to_string()),
            },
            Rule::Range(lo, hi) => match value.as_i64() {
                Some(n) if (lo..=hi).contains(&n) => {}
                _ => return fail(format!("must be an integer between {lo} and {hi}")),
            },
            Rule::Object => {
                if !value.is_object() {
                    return fail("must be an object".to_string());
                }
            }
            Rule::Items(item_schema) => {
                let Some(items) = value.as_array() else {
                    return fail("must be an array".to_string());
                };
                for (index, item) in items.iter().enumerate() {
                    let Some(item) = item.as_object() else {
                        return fail(format!("item {index} must be an object"));
                    };
                    if let Some(err) = item_schema.iter().find_map(|s| check_field(item, s)) {
                        return fail(format!("item {index}: {} {}", err.field, err.message));
                    }
                }
            }
        }
    }
    None
}

/// Schema check followed by typed deserialization.
pub fn validate_body<T: Validated>(body: Value) -> Result<T, ValidationError> {
    check_schema(&body, T::SCHEMA)?;
    serde_json::from_value(body).map_err(|e| ValidationError::single("body", e.to_string()))
}

/// Axum extractor: JSON body validated against `T::SCHEMA`.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: Validated,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::single("body", rejection.body_text()))?;
        Ok(ValidatedJson(validate_body(body)?))
    }
}
