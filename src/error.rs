use thiserror::Error;

/// Failures raised by the arithmetic engine.
///
/// These never escape the calculator service: every public operation folds
/// them into a failed [`CalculationResult`](crate::CalculationResult).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("Consecutive operators at position {position}")]
    ConsecutiveOperators { position: usize },

    #[error("Syntax error at position {position}: {message}")]
    Syntax { message: String, position: usize },

    #[error("Division by zero in {operation}")]
    DivisionByZero { operation: &'static str },

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("{message}")]
    Domain {
        function: &'static str,
        message: &'static str,
    },

    #[error("Unsupported conversion: {from} to {to}")]
    UnsupportedConversion { from: String, to: String },
}

impl CalcError {
    pub(crate) fn syntax(message: impl Into<String>, position: usize) -> Self {
        CalcError::Syntax {
            message: message.into(),
            position,
        }
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidCharacter { .. } => "INVALID_CHARACTER",
            CalcError::UnbalancedParentheses => "UNBALANCED_PARENTHESES",
            CalcError::ConsecutiveOperators { .. } => "CONSECUTIVE_OPERATORS",
            CalcError::Syntax { .. } => "SYNTAX_ERROR",
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::UnknownFunction(_) => "UNKNOWN_FUNCTION",
            CalcError::Domain { .. } => "DOMAIN_ERROR",
            CalcError::UnsupportedConversion { .. } => "UNSUPPORTED_CONVERSION",
        }
    }

    /// True for failures detected while scanning, before any parsing happens.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidCharacter { .. }
                | CalcError::UnbalancedParentheses
                | CalcError::ConsecutiveOperators { .. }
        )
    }
}

/// Errors raised by the tool layer
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ToolError>;

impl ToolError {
    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ToolError::Serialization(_) => "SERIALIZATION_ERROR",
            ToolError::Validation(_) => "VALIDATION_ERROR",
            ToolError::ToolNotFound(_) => "TOOL_NOT_FOUND",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_messages() {
        let err = CalcError::DivisionByZero {
            operation: "modulo",
        };
        assert_eq!(err.to_string(), "Division by zero in modulo");
        assert_eq!(err.error_code(), "DIVISION_BY_ZERO");

        let err = CalcError::UnsupportedConversion {
            from: "F".to_string(),
            to: "K".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported conversion: F to K");
    }

    #[test]
    fn test_validation_kinds() {
        assert!(CalcError::UnbalancedParentheses.is_validation());
        assert!(CalcError::ConsecutiveOperators { position: 2 }.is_validation());
        assert!(!CalcError::syntax("empty expression", 0).is_validation());
        assert!(!CalcError::UnknownFunction("bogus".to_string()).is_validation());
    }

    #[test]
    fn test_tool_error_payload() {
        let error = ToolError::ToolNotFound("weather".to_string());
        let payload = error.to_error_payload();
        assert_eq!(payload["error"]["code"], "TOOL_NOT_FOUND");
        assert_eq!(payload["error"]["message"], "Tool not found: weather");
    }
}
