use crate::{
    engine::{
        ast::{AstNode, Operation},
        token::{Spanned, Token},
    },
    error::CalcError,
};

type ParseResult<T> = Result<T, CalcError>;

/// Deepest parenthesis nesting accepted before parsing gives up.
pub const MAX_NESTING: usize = 200;

/// Parse a token sequence into a single expression tree.
///
/// Grammar, lowest precedence first:
///
/// ```text
/// sum     := product (("+" | "-") product)*
/// product := power (("*" | "/" | "%" | "//") power)*
/// power   := unary ("**" power)?
/// unary   := "-"? atom
/// atom    := NUMBER | "(" sum ")"
/// ```
///
/// Operator chains are collected in a loop and folded by associativity, so
/// only parenthesized groups recurse; they are capped at [`MAX_NESTING`].
pub fn parse(tokens: &[Spanned]) -> ParseResult<AstNode> {
    if tokens.is_empty() {
        return Err(CalcError::syntax("empty expression", 0));
    }

    let mut parser = Parser {
        tokens,
        index: 0,
        depth: 0,
    };
    let tree = parser.parse_sum()?;

    match parser.peek() {
        None => Ok(tree),
        Some((token, position)) => Err(CalcError::syntax(
            format!("unexpected token '{}'", token.describe()),
            *position,
        )),
    }
}

fn token_to_operation(token: &Token) -> Option<Operation> {
    match token {
        Token::Plus => Some(Operation::Add),
        Token::Minus => Some(Operation::Sub),
        Token::Star => Some(Operation::Mul),
        Token::Slash => Some(Operation::Div),
        Token::DoubleStar => Some(Operation::Pow),
        Token::Percent => Some(Operation::Mod),
        Token::DoubleSlash => Some(Operation::FloorDiv),
        _ => None,
    }
}

// `a op b op c`, left-folded unless the operator is right-associative.
fn fold_chain(first: AstNode, rest: Vec<(Operation, AstNode)>) -> AstNode {
    let right_associative = rest
        .first()
        .is_some_and(|(op, _)| op.is_right_associative());

    if !right_associative {
        return rest
            .into_iter()
            .fold(first, |tree, (op, operand)| AstNode::binary(op, tree, operand));
    }

    let mut pairs = rest.into_iter().rev();
    match pairs.next() {
        None => first,
        Some((mut pending, mut tree)) => {
            for (op, operand) in pairs {
                tree = AstNode::binary(pending, operand, tree);
                pending = op;
            }
            AstNode::binary(pending, first, tree)
        }
    }
}

struct Parser<'a> {
    tokens: &'a [Spanned],
    index: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Spanned> {
        self.tokens.get(self.index)
    }

    fn advance(&mut self) -> Option<&'a Spanned> {
        let token = self.tokens.get(self.index)?;
        self.index += 1;
        Some(token)
    }

    // Offset just past the last token, reported for errors at end of input.
    fn end_position(&self) -> usize {
        self.tokens
            .last()
            .map(|(token, position)| position + token.describe().len())
            .unwrap_or(0)
    }

    /// Next operator if it binds at exactly `precedence`.
    fn peek_operation(&self, precedence: u8) -> Option<Operation> {
        self.peek()
            .and_then(|(token, _)| token_to_operation(token))
            .filter(|op| op.precedence() == precedence)
    }

    fn parse_sum(&mut self) -> ParseResult<AstNode> {
        self.parse_chain(Operation::Add.precedence(), Self::parse_product)
    }

    fn parse_product(&mut self) -> ParseResult<AstNode> {
        self.parse_chain(Operation::Mul.precedence(), Self::parse_power)
    }

    fn parse_power(&mut self) -> ParseResult<AstNode> {
        self.parse_chain(Operation::Pow.precedence(), Self::parse_unary)
    }

    fn parse_chain(
        &mut self,
        precedence: u8,
        operand: fn(&mut Self) -> ParseResult<AstNode>,
    ) -> ParseResult<AstNode> {
        let first = operand(self)?;
        let mut rest = Vec::new();
        while let Some(op) = self.peek_operation(precedence) {
            self.advance();
            rest.push((op, operand(self)?));
        }
        Ok(fold_chain(first, rest))
    }

    fn parse_unary(&mut self) -> ParseResult<AstNode> {
        if matches!(self.peek(), Some((Token::Minus, _))) {
            self.advance();
            let operand = self.parse_atom()?;
            return Ok(AstNode::negate(operand));
        }
        self.parse_atom()
    }

    fn parse_atom(&mut self) -> ParseResult<AstNode> {
        let end = self.end_position();
        match self.advance().copied() {
            Some((Token::Number(value), _)) => Ok(AstNode::Literal(value)),
            Some((Token::LParen, open)) => {
                if matches!(self.peek(), Some((Token::RParen, _))) {
                    return Err(CalcError::syntax("empty parentheses", open));
                }
                if self.depth >= MAX_NESTING {
                    return Err(CalcError::syntax("expression too deeply nested", open));
                }
                self.depth += 1;
                let inner = self.parse_sum();
                self.depth -= 1;
                let inner = inner?;
                match self.advance() {
                    Some((Token::RParen, _)) => Ok(inner),
                    Some((token, position)) => Err(CalcError::syntax(
                        format!("expected ')' but found '{}'", token.describe()),
                        *position,
                    )),
                    None => Err(CalcError::syntax("missing closing parenthesis", end)),
                }
            }
            Some((token, position)) => Err(CalcError::syntax(
                format!("expected a number or '(' but found '{}'", token.describe()),
                position,
            )),
            None => Err(CalcError::syntax("unexpected end of expression", end)),
        }
    }
}
