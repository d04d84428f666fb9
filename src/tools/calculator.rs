use super::{tool::ToolFuture, FunctionFactory, Tool};
use crate::{
    core::Calculator,
    schemas::{parameters_schema, Validator},
    types::CalculationResult,
    Result,
};
use schemars::JsonSchema;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};

/// Parameters for expression evaluation
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CalculateExpressionParams {
    /// Mathematical expression, e.g. "2 + 3 * 4" or "(1 + 2) ^ 3"
    pub expression: String,
}

/// Parameters for scientific functions
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ScientificFunctionParams {
    /// Name of the function, e.g. "sin", "sqrt", "log", "factorial"
    pub function_name: String,
    /// Input value for the function
    pub value: f64,
}

/// Parameters for unit conversion
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ConvertUnitsParams {
    /// Value to convert
    pub value: f64,
    /// Source unit, e.g. "C", "m", "kg"
    pub from_unit: String,
    /// Target unit, e.g. "F", "ft", "lbs"
    pub to_unit: String,
}

/// The supported-functions tool takes no arguments
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct SupportedFunctionsParams {}

// Missing arguments are treated as an empty object.
fn parse_params<T: DeserializeOwned>(parameters: Value) -> Result<T> {
    let parameters = if parameters.is_null() {
        json!({})
    } else {
        parameters
    };
    Validator.validate(parameters)
}

/// Wrap a result in the protocol envelope, naming the input under `input_key`.
fn envelope(result: CalculationResult, input_key: &str) -> Value {
    if result.success {
        let mut data = serde_json::Map::new();
        data.insert(input_key.to_string(), json!(result.expression));
        data.insert("result".to_string(), json!(result.result));
        data.insert("operation".to_string(), json!(result.operation));
        data.insert("timestamp".to_string(), json!(result.timestamp));
        json!({ "success": true, "data": data })
    } else {
        json!({
            "success": false,
            "error": result.error_message,
            "code": result.error_code
        })
    }
}

/// Evaluates arithmetic expressions
#[derive(Debug, Clone, Default)]
pub struct CalculateExpressionTool {
    calculator: Calculator,
}

impl CalculateExpressionTool {
    pub fn new(calculator: Calculator) -> Self {
        Self { calculator }
    }
}

impl Tool for CalculateExpressionTool {
    fn name(&self) -> &'static str {
        "calculator_calculate_expression"
    }

    fn description(&self) -> &'static str {
        "Evaluate a mathematical expression using + - * / ** % // and parentheses"
    }

    fn parameters_schema(&self) -> Value {
        parameters_schema::<CalculateExpressionParams>()
    }

    fn execute(&self, parameters: Value) -> ToolFuture<'_> {
        Box::pin(async move {
            let params: CalculateExpressionParams = parse_params(parameters)?;
            let result = self.calculator.evaluate(&params.expression);
            Ok(envelope(result, "expression"))
        })
    }
}

/// Applies a named scientific function to one value
#[derive(Debug, Clone, Default)]
pub struct ScientificFunctionTool {
    calculator: Calculator,
}

impl ScientificFunctionTool {
    pub fn new(calculator: Calculator) -> Self {
        Self { calculator }
    }
}

impl Tool for ScientificFunctionTool {
    fn name(&self) -> &'static str {
        "calculator_apply_scientific_function"
    }

    fn description(&self) -> &'static str {
        "Apply a scientific function (sin, cos, sqrt, log, factorial, ...) to a value"
    }

    fn parameters_schema(&self) -> Value {
        parameters_schema::<ScientificFunctionParams>()
    }

    fn execute(&self, parameters: Value) -> ToolFuture<'_> {
        Box::pin(async move {
            let params: ScientificFunctionParams = parse_params(parameters)?;
            let result = self
                .calculator
                .apply_scientific_function(&params.function_name, params.value);
            Ok(envelope(result, "function"))
        })
    }
}

/// Converts temperature, length and mass values
#[derive(Debug, Clone, Default)]
pub struct ConvertUnitsTool {
    calculator: Calculator,
}

impl ConvertUnitsTool {
    pub fn new(calculator: Calculator) -> Self {
        Self { calculator }
    }
}

impl Tool for ConvertUnitsTool {
    fn name(&self) -> &'static str {
        "calculator_convert_units"
    }

    fn description(&self) -> &'static str {
        "Convert between units: temperature (C, F, K), length (m, ft, km, mi), mass (kg, lbs)"
    }

    fn parameters_schema(&self) -> Value {
        parameters_schema::<ConvertUnitsParams>()
    }

    fn execute(&self, parameters: Value) -> ToolFuture<'_> {
        Box::pin(async move {
            let params: ConvertUnitsParams = parse_params(parameters)?;
            let result =
                self.calculator
                    .convert_units(params.value, &params.from_unit, &params.to_unit);
            Ok(envelope(result, "conversion"))
        })
    }
}

/// Lists supported operators, functions and unit categories
#[derive(Debug, Clone, Default)]
pub struct SupportedFunctionsTool {
    calculator: Calculator,
}

impl SupportedFunctionsTool {
    pub fn new(calculator: Calculator) -> Self {
        Self { calculator }
    }
}

impl Tool for SupportedFunctionsTool {
    fn name(&self) -> &'static str {
        "calculator_get_supported_calculator_functions"
    }

    fn description(&self) -> &'static str {
        "Get the list of supported calculator operators, functions and unit conversions"
    }

    fn parameters_schema(&self) -> Value {
        parameters_schema::<SupportedFunctionsParams>()
    }

    fn execute(&self, parameters: Value) -> ToolFuture<'_> {
        Box::pin(async move {
            let _: SupportedFunctionsParams = parse_params(parameters)?;
            let supported = self.calculator.list_supported_operations();
            Ok(json!({ "success": true, "data": supported.summary() }))
        })
    }
}

/// Register every calculator tool, all sharing one calculator.
pub fn register_calculator_tools(factory: &mut FunctionFactory, calculator: Calculator) {
    factory.register_tool(CalculateExpressionTool::new(calculator.clone()));
    factory.register_tool(ScientificFunctionTool::new(calculator.clone()));
    factory.register_tool(ConvertUnitsTool::new(calculator.clone()));
    factory.register_tool(SupportedFunctionsTool::new(calculator));
}
