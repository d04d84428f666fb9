use crate::{
    engine::{
        ast::{AstNode, Operation},
        parser::parse,
        token::tokenize,
    },
    error::CalcError,
};

/// Tokenize, parse and evaluate an expression string.
pub fn evaluate_expression(expression: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(expression)?;
    let tree = parse(&tokens)?;
    evaluate(&tree)
}

enum Step<'a> {
    Visit(&'a AstNode),
    Apply(Operation),
}

/// Evaluate a tree depth-first, stopping at the first failure.
///
/// The walk keeps its own work stack, so tree depth is bounded by memory
/// rather than by the thread's call stack.
pub fn evaluate(node: &AstNode) -> Result<f64, CalcError> {
    let mut steps = vec![Step::Visit(node)];
    let mut values: Vec<f64> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(AstNode::Literal(value)) => values.push(*value),
            Step::Visit(AstNode::BinaryOp { op, left, right }) => {
                // Popped in reverse: left subtree, right subtree, then the operator.
                steps.push(Step::Apply(*op));
                steps.push(Step::Visit(right));
                steps.push(Step::Visit(left));
            }
            Step::Apply(op) => {
                let (Some(rhs), Some(lhs)) = (values.pop(), values.pop()) else {
                    return Err(CalcError::syntax("missing operand", 0));
                };
                values.push(apply(op, lhs, rhs)?);
            }
        }
    }

    values
        .pop()
        .ok_or_else(|| CalcError::syntax("empty expression", 0))
}

fn apply(op: Operation, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
    let value = match op {
        Operation::Add => lhs + rhs,
        Operation::Sub => lhs - rhs,
        Operation::Mul => lhs * rhs,
        Operation::Pow => lhs.powf(rhs),
        Operation::Div | Operation::Mod | Operation::FloorDiv => {
            if rhs == 0.0 {
                return Err(CalcError::DivisionByZero {
                    operation: op.name(),
                });
            }
            match op {
                Operation::Div => lhs / rhs,
                Operation::Mod => floored_mod(lhs, rhs),
                _ => (lhs / rhs).floor(),
            }
        }
    };
    Ok(value)
}

// Remainder carrying the sign of the divisor.
fn floored_mod(lhs: f64, rhs: f64) -> f64 {
    let rem = lhs % rhs;
    if rem != 0.0 && (rem < 0.0) != (rhs < 0.0) {
        rem + rhs
    } else {
        rem
    }
}
