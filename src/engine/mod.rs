//! Arithmetic engine: expression pipeline, scientific functions and unit conversion.
//!
//! Expressions flow `tokenize → parse → evaluate`. The function table and the
//! conversion engine are separate entry points that take a number directly.
//! All tables here are immutable statics, so every entry point is safe to call
//! from any thread without coordination.

pub mod ast;
pub mod evaluator;
pub mod functions;
pub mod parser;
pub mod token;
pub mod units;

pub use ast::{AstNode, Operation, OPERATIONS};
pub use evaluator::{evaluate, evaluate_expression};
pub use functions::{apply_function, function_names, FunctionSpec, FUNCTIONS};
pub use parser::parse;
pub use token::{normalize, tokenize, Token};
pub use units::{convert, Conversion, ConversionRule, QuantityFamily, FAMILIES, RULES};
