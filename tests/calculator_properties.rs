use proptest::prelude::*;
use toolbot::{engine, CalcError, Calculator};

/// Small non-negative decimal literals as they would be typed
fn literal() -> impl Strategy<Value = String> {
    (0u32..1000, 0u32..100).prop_map(|(int, frac)| format!("{}.{:02}", int, frac))
}

fn operator() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("+"),
        Just("-"),
        Just("*"),
        Just("/"),
        Just("**"),
        Just("%"),
        Just("//"),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_celsius_round_trip(x in -1.0e6f64..1.0e6) {
        let calculator = Calculator::new();
        let f = calculator.convert_units(x, "C", "F").result.unwrap();
        let back = calculator.convert_units(f, "F", "C").result.unwrap();
        prop_assert!((back - x).abs() <= 1e-6, "{} -> {} -> {}", x, f, back);
    }

    #[test]
    fn prop_evaluation_is_idempotent(a in literal(), op in operator(), b in literal()) {
        let calculator = Calculator::new();
        let expression = format!("{} {} {}", a, op, b);
        let first = calculator.evaluate(&expression);
        let second = calculator.evaluate(&expression);
        prop_assert_eq!(first.success, second.success);
        prop_assert_eq!(first.error_message, second.error_message);
        match (first.result, second.result) {
            (Some(x), Some(y)) => prop_assert!(x == y || (x.is_nan() && y.is_nan())),
            (None, None) => {}
            other => prop_assert!(false, "results diverged: {:?}", other),
        }
    }

    #[test]
    fn prop_only_zero_divisor_fails(a in 1u32..10_000, b in 0u32..50, op in prop_oneof![Just("/"), Just("%"), Just("//")]) {
        let outcome = engine::evaluate_expression(&format!("{} {} {}", a, op, b));
        if b == 0 {
            let is_division_by_zero = matches!(outcome, Err(CalcError::DivisionByZero { .. }));
            prop_assert!(is_division_by_zero);
        } else {
            prop_assert!(outcome.is_ok());
        }
    }

    #[test]
    fn prop_sum_matches_native(a in 0u32..10_000, b in 0u32..10_000, c in 1u32..100) {
        let value = engine::evaluate_expression(&format!("{} + {} * {}", a, b, c)).unwrap();
        prop_assert_eq!(value, f64::from(a) + f64::from(b) * f64::from(c));
    }
}

#[test]
fn test_documented_examples() {
    let calculator = Calculator::new();
    assert_eq!(calculator.evaluate("2 + 3 * 4").result, Some(14.0));
    assert_eq!(calculator.evaluate("2 ** 3 ** 2").result, Some(512.0));
    assert_eq!(calculator.convert_units(0.0, "C", "F").result, Some(32.0));
    assert_eq!(calculator.convert_units(100.0, "C", "F").result, Some(212.0));
    assert_eq!(
        calculator.apply_scientific_function("sqrt", 16.0).result,
        Some(4.0)
    );
    assert_eq!(
        calculator.apply_scientific_function("factorial", 5.0).result,
        Some(120.0)
    );
}
