//! Tool argument extraction.
//!
//! Model-supplied arguments arrive as loose JSON. These helpers pull out
//! the string fields the file tools need and turn anything missing or
//! mistyped into an error [`ToolOutcome`] the model can read and correct,
//! never a hard failure of the turn.

use serde_json::Value;

use cabinet_core::tools::{ToolOutcome, error_result};

/// Extract a required string parameter.
///
/// Returns `Err(ToolOutcome)` with `is_error=true` if the parameter is
/// missing, null, empty, or the wrong type.
pub fn validate_required_string(
    args: &Value,
    param: &str,
    description: &str,
) -> Result<String, ToolOutcome> {
    match args.get(param) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::String(_) | Value::Null) | None => Err(error_result(format!(
            "Missing required parameter: {param} ({description})"
        ))),
        Some(_) => Err(error_result(format!(
            "Invalid type for parameter: {param} (expected string)"
        ))),
    }
}

/// Extract a string parameter that may legitimately be empty.
///
/// Used for `write_file`'s `content`, where writing an empty file is valid.
pub fn validate_present_string(
    args: &Value,
    param: &str,
    description: &str,
) -> Result<String, ToolOutcome> {
    match args.get(param) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Null) | None => Err(error_result(format!(
            "Missing required parameter: {param} ({description})"
        ))),
        Some(_) => Err(error_result(format!(
            "Invalid type for parameter: {param} (expected string)"
        ))),
    }
}

/// Extract an optional string parameter.
pub fn get_optional_string(args: &Value, param: &str) -> Option<String> {
    args.get(param).and_then(Value::as_str).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_string_present() {
        let args = json!({"filename": "a.txt"});
        assert_eq!(
            validate_required_string(&args, "filename", "the file").unwrap(),
            "a.txt"
        );
    }

    #[test]
    fn required_string_missing() {
        let args = json!({});
        let err = validate_required_string(&args, "filename", "the file").unwrap_err();
        assert_eq!(err.is_error, Some(true));
        assert!(err.content.contains("Missing required parameter: filename"));
    }

    #[test]
    fn required_string_empty_rejected() {
        let args = json!({"filename": ""});
        assert!(validate_required_string(&args, "filename", "the file").is_err());
    }

    #[test]
    fn required_string_wrong_type() {
        let args = json!({"filename": 42});
        let err = validate_required_string(&args, "filename", "the file").unwrap_err();
        assert!(err.content.contains("expected string"));
    }

    #[test]
    fn present_string_allows_empty() {
        let args = json!({"content": ""});
        assert_eq!(
            validate_present_string(&args, "content", "the content").unwrap(),
            ""
        );
    }

    #[test]
    fn present_string_null_rejected() {
        let args = json!({"content": null});
        assert!(validate_present_string(&args, "content", "the content").is_err());
    }

    #[test]
    fn optional_string() {
        let args = json!({"mode": "a"});
        assert_eq!(get_optional_string(&args, "mode"), Some("a".into()));
        assert_eq!(get_optional_string(&args, "absent"), None);
    }
}
