use std::borrow::Cow;

use logos::Logos;

use crate::error::CalcError;

/// A lexical token of an arithmetic expression.
///
/// Lexing runs over normalized text, so there is no whitespace rule.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Decimal literal with at most one point, such as `12`, `3.5`, `1.` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("**")]
    DoubleStar,
    #[token("%")]
    Percent,
    #[token("//")]
    DoubleSlash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

impl Token {
    pub fn is_operator(&self) -> bool {
        !matches!(self, Token::Number(_) | Token::LParen | Token::RParen)
    }

    /// Source text of the token, used in parser diagnostics.
    pub fn describe(&self) -> Cow<'static, str> {
        let symbol = match self {
            Token::Number(value) => return Cow::Owned(value.to_string()),
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::DoubleStar => "**",
            Token::Percent => "%",
            Token::DoubleSlash => "//",
            Token::LParen => "(",
            Token::RParen => ")",
        };
        Cow::Borrowed(symbol)
    }
}

fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// A token paired with its byte offset in the normalized expression.
pub type Spanned = (Token, usize);

/// Remove whitespace and rewrite alternate glyphs to their ASCII operators.
pub fn normalize(expression: &str) -> String {
    let mut clean = String::with_capacity(expression.len());
    for ch in expression.chars() {
        match ch {
            c if c.is_whitespace() => {}
            '×' => clean.push('*'),
            '÷' => clean.push('/'),
            '^' => clean.push_str("**"),
            c => clean.push(c),
        }
    }
    clean
}

/// Split an expression into tokens.
///
/// The input is normalized first, then checked in three passes: parenthesis
/// balance, the lexer itself (which rejects characters outside the grammar),
/// and finally a scan over the tokens for adjacent operators.
pub fn tokenize(expression: &str) -> Result<Vec<Spanned>, CalcError> {
    let clean = normalize(expression);
    check_balance(&clean)?;

    let mut tokens: Vec<Spanned> = Vec::new();
    let mut lexer = Token::lexer(&clean);

    while let Some(token) = lexer.next() {
        let start = lexer.span().start;
        match token {
            Ok(token) => tokens.push((token, start)),
            Err(()) => return Err(lex_error(&clean, start)),
        }
    }

    check_operator_runs(&tokens)?;
    Ok(tokens)
}

// A dot is a legal character that failed to form a literal; anything else is foreign.
fn lex_error(clean: &str, position: usize) -> CalcError {
    match clean[position..].chars().next() {
        Some(character) if character != '.' => CalcError::InvalidCharacter {
            character,
            position,
        },
        _ => CalcError::syntax("invalid number literal '.'", position),
    }
}

fn check_operator_runs(tokens: &[Spanned]) -> Result<(), CalcError> {
    match tokens
        .windows(2)
        .find(|pair| pair[0].0.is_operator() && pair[1].0.is_operator())
    {
        Some(pair) => Err(CalcError::ConsecutiveOperators {
            position: pair[1].1,
        }),
        None => Ok(()),
    }
}

fn check_balance(expression: &str) -> Result<(), CalcError> {
    let mut depth: usize = 0;
    for ch in expression.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(CalcError::UnbalancedParentheses)?;
            }
            _ => {}
        }
    }
    if depth == 0 {
        Ok(())
    } else {
        Err(CalcError::UnbalancedParentheses)
    }
}
