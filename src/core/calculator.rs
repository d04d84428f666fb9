use crate::{
    core::clock::{Clock, SystemClock},
    engine::{self, OPERATIONS},
    types::{CalculationResult, SupportedOperations},
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Calculator service exposing expression evaluation, scientific functions
/// and unit conversion. Every operation returns a [`CalculationResult`];
/// failures are reported in the result, never raised.
#[derive(Debug, Clone)]
pub struct Calculator {
    clock: Arc<dyn Clock>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    fn timestamp(&self) -> String {
        self.clock.timestamp()
    }

    /// Evaluate an arithmetic expression such as `2 + 3 * 4`.
    pub fn evaluate(&self, expression: &str) -> CalculationResult {
        debug!(expression, "evaluating expression");

        match engine::evaluate_expression(expression) {
            Ok(value) => {
                CalculationResult::success(expression, value, "calculation", self.timestamp())
            }
            Err(err) => {
                warn!(expression, error = %err, "expression evaluation failed");
                let operation = if err.is_validation() {
                    "validation"
                } else {
                    "calculation"
                };
                CalculationResult::failure(expression, operation, self.timestamp(), &err)
            }
        }
    }

    /// Apply a named scientific function to a single value.
    pub fn apply_scientific_function(&self, name: &str, value: f64) -> CalculationResult {
        let expression = format!("{}({})", name, value);
        debug!(%expression, "applying scientific function");

        match engine::apply_function(name, value) {
            Ok(result) => CalculationResult::success(
                expression,
                result,
                "scientific_function",
                self.timestamp(),
            ),
            Err(err) => {
                warn!(%expression, error = %err, "scientific function failed");
                CalculationResult::failure(expression, "scientific_function", self.timestamp(), &err)
            }
        }
    }

    /// Convert a value between two registered units.
    pub fn convert_units(&self, value: f64, from_unit: &str, to_unit: &str) -> CalculationResult {
        let expression = format!("{} {} to {}", value, from_unit, to_unit);
        debug!(%expression, "converting units");

        match engine::convert(value, from_unit, to_unit) {
            Ok(conversion) => CalculationResult::success(
                expression,
                conversion.value,
                conversion.label,
                self.timestamp(),
            ),
            Err(err) => {
                warn!(%expression, error = %err, "unit conversion failed");
                CalculationResult::failure(expression, "unit_conversion", self.timestamp(), &err)
            }
        }
    }

    /// Describe the operators, functions and unit families on offer.
    pub fn list_supported_operations(&self) -> SupportedOperations {
        SupportedOperations {
            basic_operators: OPERATIONS
                .iter()
                .map(|op| op.symbol().to_string())
                .collect(),
            scientific_functions: engine::function_names().map(str::to_string).collect(),
            unit_categories: engine::FAMILIES
                .iter()
                .map(|family| family.summary())
                .collect(),
        }
    }
}
