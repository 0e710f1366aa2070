//! Shape validation for JSON request bodies.
//!
//! Create and vote endpoints declare the fields they require and the primitive
//! kind of each. A body is checked once against the declared shape before any
//! storage call; every violation is collected and reported in declaration
//! order as a single message, so a client sees the full list of problems at
//! once. Fields outside the declared shape are ignored.

use serde_json::Value;

use crate::error::AppError;

/// Primitive kind a declared field must hold.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    String,
    Number,
}

impl FieldKind {
    fn matches(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
        }
    }
}

/// A declared body shape: field name paired with its expected kind.
pub type Shape = [(&'static str, FieldKind)];

/// Checks a JSON body against a declared shape.
///
/// A field is missing when absent from the body, except `created_at`, which is
/// optional and server-assigned. A field that is present but not of the
/// declared kind (JSON null included) is not in correct format. All violations
/// fail the check together; there is no partial success.
///
/// # Arguments
/// - `body` - The parsed request body
/// - `shape` - Declared field names and kinds, in reporting order
///
/// # Returns
/// - `Ok(())` - Every declared field present and well-typed
/// - `Err(AppError::BadRequest)` - All violations joined in declaration order
pub fn check_shape(body: &Value, shape: &Shape) -> Result<(), AppError> {
    let mut violations: Vec<String> = Vec::new();

    for (field, kind) in shape {
        match body.get(field) {
            None => {
                if *field != "created_at" {
                    violations.push(format!("{field} is missing"));
                }
            }
            Some(value) => {
                if !kind.matches(value) {
                    violations.push(format!("{field} is not in correct format"));
                }
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(AppError::BadRequest(violations.join(", ")))
    }
}

/// Extracts a declared string field after a successful shape check.
pub fn require_str(body: &Value, field: &str) -> Result<String, AppError> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| AppError::BadRequest(format!("{field} is not in correct format")))
}

/// Extracts a declared number field as an `i32` after a successful shape check.
///
/// Rejects fractional and out-of-range values the shape check lets through,
/// since JSON only knows "number".
pub fn require_i32(body: &Value, field: &str) -> Result<i32, AppError> {
    body.get(field)
        .and_then(Value::as_i64)
        .and_then(|value| i32::try_from(value).ok())
        .ok_or_else(|| AppError::BadRequest(format!("{field} is not in correct format")))
}
