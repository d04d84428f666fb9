use std::{fmt, mem};

/// Binary operations understood by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Mod,
    FloorDiv,
}

/// Every supported operation, in the order they are advertised.
pub const OPERATIONS: [Operation; 7] = [
    Operation::Add,
    Operation::Sub,
    Operation::Mul,
    Operation::Div,
    Operation::Pow,
    Operation::Mod,
    Operation::FloorDiv,
];

impl Operation {
    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Operation::Add | Operation::Sub => 1,
            Operation::Mul | Operation::Div | Operation::Mod | Operation::FloorDiv => 2,
            Operation::Pow => 3,
        }
    }

    pub fn is_right_associative(self) -> bool {
        matches!(self, Operation::Pow)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "*",
            Operation::Div => "/",
            Operation::Pow => "**",
            Operation::Mod => "%",
            Operation::FloorDiv => "//",
        }
    }

    /// Human-readable name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Sub => "subtraction",
            Operation::Mul => "multiplication",
            Operation::Div => "division",
            Operation::Pow => "exponentiation",
            Operation::Mod => "modulo",
            Operation::FloorDiv => "floor division",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Parsed expression tree. Children are owned exclusively by their parent.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    Literal(f64),
    BinaryOp {
        op: Operation,
        left: Box<AstNode>,
        right: Box<AstNode>,
    },
}

impl AstNode {
    pub fn binary(op: Operation, left: AstNode, right: AstNode) -> Self {
        AstNode::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Negation is lowered to `0 - operand`.
    pub fn negate(operand: AstNode) -> Self {
        AstNode::binary(Operation::Sub, AstNode::Literal(0.0), operand)
    }
}

// Trees can be far deeper than the call stack; tear them down iteratively.
impl Drop for AstNode {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        detach_branches(self, &mut detached);
        while let Some(mut node) = detached.pop() {
            detach_branches(&mut node, &mut detached);
        }
    }
}

// Move non-leaf children out, leaving literals behind.
fn detach_branches(node: &mut AstNode, detached: &mut Vec<AstNode>) {
    if let AstNode::BinaryOp { left, right, .. } = node {
        for child in [left, right] {
            if matches!(**child, AstNode::BinaryOp { .. }) {
                detached.push(mem::replace(&mut **child, AstNode::Literal(0.0)));
            }
        }
    }
}

/// Fully parenthesized rendering, handy for checking how a tree grouped.
impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::Literal(value) => write!(f, "{}", value),
            AstNode::BinaryOp { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}
