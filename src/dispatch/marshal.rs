// ABOUTME: Argument marshalling - decodes a JSON array of positional arguments
// ABOUTME: and binds it to a descriptor. No coercion against declared types.

use serde_json::Value;

use crate::error::ToolError;
use crate::tool::{Args, Descriptor, json_kind};

/// Decode `raw` as a JSON array and bind it to `descriptor`.
///
/// Arity is not checked here; that happens when the tool runs.
pub fn marshal(descriptor: &Descriptor, raw: &str) -> Result<Args, ToolError> {
    let values = decode(raw)?;
    Ok(Args::new(
        descriptor.name(),
        descriptor.parameters().to_vec(),
        values,
    ))
}

/// Decode a JSON array of positional arguments.
pub fn decode(raw: &str) -> Result<Vec<Value>, ToolError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| ToolError::MalformedArguments(e.to_string()))?;

    match value {
        Value::Array(values) => Ok(values),
        other => Err(ToolError::MalformedArguments(format!(
            "arguments must be a JSON array, not {}",
            json_kind(&other)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_array() {
        let values = decode(r#"[1, "two", 3.5, true, null, [4]]"#).unwrap();
        assert_eq!(
            values,
            vec![json!(1), json!("two"), json!(3.5), json!(true), json!(null), json!([4])]
        );
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_invalid_json() {
        let err = decode("not-json").unwrap_err();
        assert!(matches!(err, ToolError::MalformedArguments(_)));
        assert!(err.to_string().starts_with("Error executing tool: "));
    }

    #[test]
    fn test_decode_rejects_non_array() {
        for (raw, kind) in [(r#"{"a": 1}"#, "dict"), ("5", "int"), (r#""x""#, "str")] {
            let err = decode(raw).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("Error executing tool: arguments must be a JSON array, not {}", kind)
            );
        }
    }
}
