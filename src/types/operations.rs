use serde::{Deserialize, Serialize};

/// Catalogue of what the calculator understands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedOperations {
    pub basic_operators: Vec<String>,
    pub scientific_functions: Vec<String>,
    pub unit_categories: Vec<String>,
}

impl SupportedOperations {
    /// Flatten into the three display lines shown to tool callers.
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "Basic": self.basic_operators.join(", "),
            "Scientific": self.scientific_functions.join(", "),
            "Units": self.unit_categories.join(", ")
        })
    }
}
