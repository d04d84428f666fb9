use crate::error::CalcError;
use serde::{Deserialize, Serialize};

/// Outcome of a single calculator operation.
///
/// Built once per call and never mutated afterwards. A failed result has no
/// `result` value and a non-empty `error_message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Input as the caller sees it (raw expression, `name(value)`, or `v from to to`)
    pub expression: String,
    /// Numeric outcome, absent on failure
    pub result: Option<f64>,
    /// Human-readable label of what was computed
    pub operation: String,
    /// When the result was produced, `%Y-%m-%d %H:%M:%S`
    pub timestamp: String,
    pub success: bool,
    #[serde(default)]
    pub error_message: String,
    /// Stable code of the failure kind, e.g. `DIVISION_BY_ZERO`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl CalculationResult {
    /// Create a successful result
    pub fn success(
        expression: impl Into<String>,
        result: f64,
        operation: impl Into<String>,
        timestamp: String,
    ) -> Self {
        Self {
            expression: expression.into(),
            result: Some(result),
            operation: operation.into(),
            timestamp,
            success: true,
            error_message: String::new(),
            error_code: None,
        }
    }

    /// Create a failed result from an engine error
    pub fn failure(
        expression: impl Into<String>,
        operation: impl Into<String>,
        timestamp: String,
        error: &CalcError,
    ) -> Self {
        Self {
            expression: expression.into(),
            result: None,
            operation: operation.into(),
            timestamp,
            success: false,
            error_message: error.to_string(),
            error_code: Some(error.error_code().to_string()),
        }
    }
}
