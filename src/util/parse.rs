use crate::error::AppError;

/// Parses an integer identifier from a path segment.
///
/// Path parameters are extracted as raw strings so a malformed value can be
/// reported under the parameter's own name instead of the framework's generic
/// rejection.
///
/// # Arguments
/// - `value` - The raw path segment
/// - `param` - Name of the parameter, used in the error message
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed identifier
/// - `Err(AppError::BadRequest)` - `"{param} is not in correct format"`
pub fn parse_id(value: &str, param: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("{param} is not in correct format")))
}
