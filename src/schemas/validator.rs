use crate::{Result, ToolError};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserializes tool arguments, rejecting non-object arguments up front and
/// reporting the path of the first bad field
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    /// Validate and deserialize parameters into type T
    pub fn validate<T: DeserializeOwned>(&self, params: Value) -> Result<T> {
        if !params.is_object() {
            return Err(ToolError::Validation(format!(
                "Tool arguments must be a JSON object, got {}",
                value_kind(&params)
            )));
        }
        serde_first_validate(params)
    }
}

fn serde_first_validate<T: DeserializeOwned>(params: Value) -> Result<T> {
    serde_path_to_error::deserialize(params).map_err(|e| {
        ToolError::Validation(format!(
            "Parameter validation failed at {}: {}",
            e.path(),
            e.inner()
        ))
    })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
