//! toolbot: calculator tools served through a tool-calling interface
//!
//! The heart of the crate is a small arithmetic engine (expression parser and
//! evaluator, scientific function table, unit conversion). [`Calculator`]
//! wraps it in operations that always return a [`CalculationResult`], and the
//! [`tools`] module exposes those operations as protocol tools.
//!
//! # Quick Start
//!
//! ```rust
//! use toolbot::Calculator;
//!
//! let calculator = Calculator::new();
//! let result = calculator.evaluate("2 ** 3 ** 2");
//! assert_eq!(result.result, Some(512.0));
//!
//! let converted = calculator.convert_units(100.0, "C", "F");
//! assert_eq!(converted.result, Some(212.0));
//! ```
//!
//! Serving the tools:
//!
//! ```rust
//! use toolbot::{register_calculator_tools, Calculator, FunctionFactory};
//!
//! # tokio_test::block_on(async {
//! let mut factory = FunctionFactory::new();
//! register_calculator_tools(&mut factory, Calculator::new());
//!
//! let reply = factory
//!     .execute_function(
//!         "calculator_apply_scientific_function",
//!         serde_json::json!({ "function_name": "factorial", "value": 5 }),
//!     )
//!     .await?;
//! assert_eq!(reply["data"]["result"], 120.0);
//! # Ok::<(), toolbot::ToolError>(())
//! # }).unwrap();
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod schemas;
pub mod tools;
pub mod types;

pub use crate::core::{Calculator, Clock, FixedClock, SystemClock};
pub use error::{CalcError, Result, ToolError};
pub use schemas::Validator;
pub use tools::{register_calculator_tools, FunctionFactory, Tool};
pub use types::{CalculationResult, SupportedOperations};

#[cfg(feature = "cli")]
pub mod cli;
