use crate::error::CalcError;

const INTEGRAL_TOLERANCE: f64 = 1e-9;

/// Precondition that must hold before a function is invoked.
#[derive(Debug, Clone, Copy)]
pub struct DomainGuard {
    pub accepts: fn(f64) -> bool,
    pub message: &'static str,
}

/// A named unary scientific function.
#[derive(Debug, Clone, Copy)]
pub struct FunctionSpec {
    pub name: &'static str,
    pub apply: fn(f64) -> f64,
    pub guard: Option<DomainGuard>,
}

impl FunctionSpec {
    const fn plain(name: &'static str, apply: fn(f64) -> f64) -> Self {
        Self {
            name,
            apply,
            guard: None,
        }
    }

    const fn guarded(
        name: &'static str,
        apply: fn(f64) -> f64,
        accepts: fn(f64) -> bool,
        message: &'static str,
    ) -> Self {
        Self {
            name,
            apply,
            guard: Some(DomainGuard { accepts, message }),
        }
    }

    /// Check the guard, then invoke the function.
    pub fn call(&self, value: f64) -> Result<f64, CalcError> {
        if let Some(guard) = self.guard {
            if !(guard.accepts)(value) {
                return Err(CalcError::Domain {
                    function: self.name,
                    message: guard.message,
                });
            }
        }
        Ok((self.apply)(value))
    }
}

pub static FUNCTIONS: &[FunctionSpec] = &[
    FunctionSpec::plain("sin", f64::sin),
    FunctionSpec::plain("cos", f64::cos),
    FunctionSpec::plain("tan", f64::tan),
    FunctionSpec::plain("asin", f64::asin),
    FunctionSpec::plain("acos", f64::acos),
    FunctionSpec::plain("atan", f64::atan),
    FunctionSpec::guarded(
        "sqrt",
        f64::sqrt,
        is_non_negative,
        "Cannot calculate square root of negative number",
    ),
    FunctionSpec::guarded(
        "log",
        f64::ln,
        is_positive,
        "Cannot calculate logarithm of non-positive number",
    ),
    FunctionSpec::plain("log10", f64::log10),
    FunctionSpec::plain("exp", f64::exp),
    FunctionSpec::plain("abs", f64::abs),
    FunctionSpec::plain("floor", f64::floor),
    FunctionSpec::plain("ceil", f64::ceil),
    FunctionSpec::plain("round", f64::round_ties_even),
    FunctionSpec::guarded(
        "factorial",
        factorial,
        is_non_negative_integer,
        "Factorial is only defined for non-negative integers",
    ),
];

/// Look up a function by its exact name.
pub fn lookup(name: &str) -> Option<&'static FunctionSpec> {
    FUNCTIONS.iter().find(|spec| spec.name == name)
}

/// Apply the named function to `value`.
pub fn apply_function(name: &str, value: f64) -> Result<f64, CalcError> {
    let spec = lookup(name).ok_or_else(|| CalcError::UnknownFunction(name.to_string()))?;
    spec.call(value)
}

pub fn function_names() -> impl Iterator<Item = &'static str> {
    FUNCTIONS.iter().map(|spec| spec.name)
}

// NaN is let through to the underlying function.
fn is_non_negative(value: f64) -> bool {
    value.is_nan() || value >= 0.0
}

fn is_positive(value: f64) -> bool {
    value.is_nan() || value > 0.0
}

fn is_non_negative_integer(value: f64) -> bool {
    value >= 0.0 && (value - value.round()).abs() < INTEGRAL_TOLERANCE
}

// Inputs past 170 overflow to infinity, as f64 would anyway.
fn factorial(value: f64) -> f64 {
    let n = value.round();
    if n > 170.0 {
        return f64::INFINITY;
    }
    (2..=n as u32).fold(1.0, |acc, k| acc * f64::from(k))
}
