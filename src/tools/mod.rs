//! Tool abstractions and the calculator tools built on them

pub mod calculator;
pub mod function_factory;
pub mod tool;

pub use calculator::{
    register_calculator_tools, CalculateExpressionTool, ConvertUnitsTool, ScientificFunctionTool,
    SupportedFunctionsTool,
};
pub use function_factory::FunctionFactory;
pub use tool::{Tool, ToolFuture, ToolRegistry};
