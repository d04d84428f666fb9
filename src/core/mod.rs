pub mod calculator;
pub mod clock;

pub use crate::types::{CalculationResult, SupportedOperations};
pub use calculator::Calculator;
pub use clock::{Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT};
