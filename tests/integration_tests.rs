use chrono::NaiveDate;
use serde_json::json;
use toolbot::{
    register_calculator_tools,
    tools::{CalculateExpressionTool, ConvertUnitsTool, ScientificFunctionTool},
    Calculator, FixedClock, FunctionFactory, Tool, ToolError,
};

fn fixed_calculator() -> Calculator {
    let instant = NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .unwrap();
    Calculator::new().with_clock(FixedClock(instant))
}

fn factory() -> FunctionFactory {
    let mut factory = FunctionFactory::new();
    register_calculator_tools(&mut factory, fixed_calculator());
    factory
}

#[tokio::test]
async fn test_calculate_expression_tool() {
    let tool = CalculateExpressionTool::new(fixed_calculator());

    let result = tool
        .execute(json!({ "expression": "2 + 3 * 4" }))
        .await
        .unwrap();
    assert_eq!(result["success"], true);
    assert_eq!(result["data"]["result"], 14.0);
    assert_eq!(result["data"]["expression"], "2 + 3 * 4");
    assert_eq!(result["data"]["operation"], "calculation");
    assert_eq!(result["data"]["timestamp"], "2024-06-01 12:00:00");

    // Test division by zero
    let result = tool
        .execute(json!({ "expression": "10 / 0" }))
        .await
        .unwrap();
    assert_eq!(result["success"], false);
    assert_eq!(result["code"], "DIVISION_BY_ZERO");
    assert_eq!(result["error"], "Division by zero in division");
}

#[tokio::test]
async fn test_expression_precedence_through_tool() {
    let tool = CalculateExpressionTool::new(fixed_calculator());
    for (expression, expected) in [
        ("2 ** 3 ** 2", 512.0),
        ("2 ^ 8", 256.0),
        ("15 % 4", 3.0),
        ("20 // 3", 6.0),
        ("(2 + 3) × 4 ÷ 5", 4.0),
    ] {
        let result = tool
            .execute(json!({ "expression": expression }))
            .await
            .unwrap();
        assert_eq!(result["data"]["result"], expected, "{}", expression);
    }
}

#[tokio::test]
async fn test_malformed_expressions_fail() {
    let tool = CalculateExpressionTool::new(fixed_calculator());
    for (expression, code) in [
        ("2 + + 3", "CONSECUTIVE_OPERATORS"),
        ("(1 + 2", "UNBALANCED_PARENTHESES"),
        ("2 + abc", "INVALID_CHARACTER"),
        ("2 +", "SYNTAX_ERROR"),
        ("", "SYNTAX_ERROR"),
    ] {
        let result = tool
            .execute(json!({ "expression": expression }))
            .await
            .unwrap();
        assert_eq!(result["success"], false, "{}", expression);
        assert_eq!(result["code"], code, "{}", expression);
        assert!(result.get("data").is_none());
    }
}

#[tokio::test]
async fn test_scientific_function_tool() {
    let tool = ScientificFunctionTool::new(fixed_calculator());

    let result = tool
        .execute(json!({ "function_name": "factorial", "value": 5 }))
        .await
        .unwrap();
    assert_eq!(result["success"], true);
    assert_eq!(result["data"]["result"], 120.0);
    assert_eq!(result["data"]["function"], "factorial(5)");
    assert_eq!(result["data"]["operation"], "scientific_function");

    for (name, value, code) in [
        ("sqrt", -4.0, "DOMAIN_ERROR"),
        ("factorial", -1.0, "DOMAIN_ERROR"),
        ("factorial", 2.5, "DOMAIN_ERROR"),
        ("log", 0.0, "DOMAIN_ERROR"),
        ("bogus", 1.0, "UNKNOWN_FUNCTION"),
    ] {
        let result = tool
            .execute(json!({ "function_name": name, "value": value }))
            .await
            .unwrap();
        assert_eq!(result["success"], false, "{}({})", name, value);
        assert_eq!(result["code"], code, "{}({})", name, value);
    }
}

#[tokio::test]
async fn test_convert_units_tool() {
    let tool = ConvertUnitsTool::new(fixed_calculator());

    let result = tool
        .execute(json!({ "value": 100, "from_unit": "C", "to_unit": "F" }))
        .await
        .unwrap();
    assert_eq!(result["data"]["result"], 212.0);
    assert_eq!(result["data"]["conversion"], "100 C to F");
    assert_eq!(
        result["data"]["operation"],
        "Temperature conversion: 100°C to °F"
    );

    let result = tool
        .execute(json!({ "value": 5, "from_unit": "F", "to_unit": "K" }))
        .await
        .unwrap();
    assert_eq!(result["success"], false);
    assert_eq!(result["code"], "UNSUPPORTED_CONVERSION");
    assert_eq!(result["error"], "Unsupported conversion: F to K");

    let result = tool
        .execute(json!({ "value": 70, "from_unit": "kg", "to_unit": "lbs" }))
        .await
        .unwrap();
    assert_eq!(result["data"]["result"], 154.3234);
    assert_eq!(
        result["data"]["operation"],
        "Weight conversion: 70kg to lbs"
    );
}

#[tokio::test]
async fn test_long_expressions_return_results() {
    let tool = CalculateExpressionTool::new(fixed_calculator());

    let sum = vec!["1"; 200_000].join(" + ");
    let result = tool.execute(json!({ "expression": sum })).await.unwrap();
    assert_eq!(result["success"], true);
    assert_eq!(result["data"]["result"], 200_000.0);

    let nested = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    let result = tool.execute(json!({ "expression": nested })).await.unwrap();
    assert_eq!(result["success"], false);
    assert_eq!(result["code"], "SYNTAX_ERROR");
}

#[tokio::test]
async fn test_invalid_parameters_are_tool_errors() {
    let tool = ConvertUnitsTool::new(fixed_calculator());

    let err = tool
        .execute(json!({ "value": "hot", "from_unit": "C", "to_unit": "F" }))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert!(err.to_string().contains("value"));

    let err = tool.execute(json!([1, "C", "F"])).await.unwrap_err();
    assert!(matches!(err, ToolError::Validation(_)));
}

#[tokio::test]
async fn test_function_factory() {
    let factory = factory();

    // Test tool registration
    assert!(factory.has_function("calculator_calculate_expression"));
    assert!(factory.has_function("calculator_apply_scientific_function"));
    assert!(factory.has_function("calculator_convert_units"));
    assert!(factory.has_function("calculator_get_supported_calculator_functions"));
    assert!(!factory.has_function("weather_get_weather"));

    let result = factory
        .execute_function(
            "calculator_convert_units",
            json!({ "value": 10, "from_unit": "m", "to_unit": "ft" }),
        )
        .await
        .unwrap();
    assert_eq!(result["data"]["result"], 32.8084);

    let err = factory
        .execute_function("nonexistent", json!({}))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "TOOL_NOT_FOUND");
}

#[tokio::test]
async fn test_supported_functions_tool() {
    let factory = factory();
    let result = factory
        .execute_function("calculator_get_supported_calculator_functions", json!({}))
        .await
        .unwrap();

    assert_eq!(result["success"], true);
    assert_eq!(result["data"]["Basic"], "+, -, *, /, **, %, //");
    let scientific = result["data"]["Scientific"].as_str().unwrap();
    assert!(scientific.starts_with("sin, cos, tan"));
    assert!(scientific.ends_with("factorial"));
    assert_eq!(
        result["data"]["Units"],
        "Temperature (C, F, K), Length (m, ft, km, mi), Weight (kg, lbs)"
    );
}

#[test]
fn test_tool_definitions() {
    let factory = factory();
    let definitions = factory.get_tool_definitions();
    assert_eq!(definitions.len(), 4);

    for definition in &definitions {
        assert!(definition["name"].as_str().unwrap().starts_with("calculator_"));
        assert!(!definition["description"].as_str().unwrap().is_empty());
        assert_eq!(definition["inputSchema"]["type"], "object");
    }

    let names = factory.tool_names();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);

    let convert = definitions
        .iter()
        .find(|d| d["name"] == "calculator_convert_units")
        .unwrap();
    let required = convert["inputSchema"]["required"].as_array().unwrap();
    assert_eq!(required.len(), 3);
}

#[test]
fn test_error_handling() {
    // Test error creation and formatting
    let error = ToolError::Validation("Test error".to_string());
    assert_eq!(error.error_code(), "VALIDATION_ERROR");
    assert!(error.to_string().contains("Test error"));

    // Test error payload
    let payload = error.to_error_payload();
    assert_eq!(payload["error"]["code"], "VALIDATION_ERROR");
}
