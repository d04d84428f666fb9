pub mod operations;
pub mod result;

pub use operations::SupportedOperations;
pub use result::CalculationResult;
