use std::iter::Peekable;

use crate::{ast::{BinaryOperator, Expr},
            engine::{lexer::Token,
                     parser::{core::ParseResult, unary}}};

/// Parses additions and subtractions, left-associatively.
///
/// # Errors
/// Returns a [`ParseError`] if an operand does not form a valid expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;

    while let Some((token, pos)) = tokens.peek()
          && let Some(op) = additive_operator(token)
    {
        let pos = *pos;
        tokens.next();

        let right = parse_multiplicative(tokens)?;
        left = Expr::BinaryOp { op,
                                left: Box::new(left),
                                right: Box::new(right),
                                pos };
    }

    Ok(left)
}

/// Parses multiplications, divisions and remainders, left-associatively.
///
/// Juxtaposition is handled here as well: a constant, function call, or
/// parenthesized group directly following a factor is an implied
/// multiplication, so `2π` and `3(1+2)` parse without a `*` token.
///
/// # Errors
/// Returns a [`ParseError`] if an operand does not form a valid expression.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = unary::parse_unary(tokens)?;

    loop {
        let Some((token, pos)) = tokens.peek() else {
            break;
        };
        let pos = *pos;

        if let Some(op) = multiplicative_operator(token) {
            tokens.next();

            let right = unary::parse_unary(tokens)?;
            left = Expr::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right),
                                    pos };
        } else if is_implicit_multiplicand(token) {
            let right = unary::parse_unary(tokens)?;
            left = Expr::BinaryOp { op: BinaryOperator::Mul,
                                    left: Box::new(left),
                                    right: Box::new(right),
                                    pos };
        } else {
            break;
        }
    }

    Ok(left)
}

/// Parses an exponentiation, right-associatively.
///
/// The exponent re-enters at the unary level, so `2^-3` is legal and
/// `2^3^2` nests to the right. Unary minus sits *above* this level, which
/// is what makes `-2^2` negate the power instead of squaring `-2`.
///
/// # Errors
/// Returns a [`ParseError`] if the base or exponent does not form a valid
/// expression.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = unary::parse_postfix(tokens)?;

    if let Some((Token::Caret, pos)) = tokens.peek() {
        let pos = *pos;
        tokens.next();

        let exponent = unary::parse_unary(tokens)?;
        return Ok(Expr::BinaryOp { op: BinaryOperator::Pow,
                                   left: Box::new(base),
                                   right: Box::new(exponent),
                                   pos });
    }

    Ok(base)
}

/// Maps a token to the additive operator it stands for, if any.
const fn additive_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        _ => None,
    }
}

/// Maps a token to the multiplicative operator it stands for, if any.
const fn multiplicative_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}

/// Reports whether a token can start an implicitly multiplied factor.
const fn is_implicit_multiplicand(token: &Token) -> bool {
    matches!(token,
             Token::Pi | Token::Euler | Token::LParen | Token::Function(_))
}
