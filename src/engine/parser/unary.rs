use std::iter::Peekable;

use crate::{ast::{BinaryOperator, Expr, Func},
            engine::{lexer::Token,
                     parser::{binary, core, core::ParseResult}},
            error::ParseError};

/// Parses a unary minus, or falls through to the power level.
///
/// The minus recurses into itself, so `--2` is a double negation. Because
/// this level sits above exponentiation, `-2^2` reads as `-(2^2)`.
///
/// # Errors
/// Returns a [`ParseError`] if the operand does not form a valid expression.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, pos)) = tokens.peek() {
        let pos = *pos;
        tokens.next();

        let operand = parse_unary(tokens)?;
        return Ok(Expr::UnaryMinus { operand: Box::new(operand),
                                     pos });
    }

    binary::parse_power(tokens)
}

/// Parses the postfix operators `!` and `²` on top of a primary.
///
/// Both bind tighter than any prefix or infix operator, and they stack:
/// `3!!` is `(3!)!` and `3!²` is `(3!)^2`. The squaring glyph desugars to an
/// explicit power with literal exponent 2, so the evaluator never sees it.
///
/// # Errors
/// Returns a [`ParseError`] if the operand does not form a valid expression.
pub fn parse_postfix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut expression = parse_primary(tokens)?;

    loop {
        match tokens.peek() {
            Some((Token::Bang, pos)) => {
                let pos = *pos;
                tokens.next();

                expression = Expr::Factorial { operand: Box::new(expression),
                                               pos };
            },

            Some((Token::Squared, pos)) => {
                let pos = *pos;
                tokens.next();

                expression = Expr::BinaryOp { op: BinaryOperator::Pow,
                                              left: Box::new(expression),
                                              right: Box::new(Expr::Literal { value: 2.0,
                                                                              pos }),
                                              pos };
            },

            _ => break,
        }
    }

    Ok(expression)
}

/// Parses a primary expression: a literal, constant, function call, or
/// parenthesized group.
///
/// # Errors
/// - [`ParseError::UnexpectedEndOfInput`]: If the stream ends where an
///   operand was required.
/// - [`ParseError::UnexpectedToken`]: If the next token cannot start an
///   operand.
/// - Any error raised while parsing a nested expression.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, pos)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };
    let pos = *pos;

    match token {
        Token::Number(value) => Ok(Expr::Literal { value: *value,
                                                   pos }),

        Token::Pi => Ok(Expr::Literal { value: std::f64::consts::PI,
                                        pos }),

        Token::Euler => Ok(Expr::Literal { value: std::f64::consts::E,
                                           pos }),

        Token::Function(function) => parse_function_call(tokens, *function, pos),

        Token::LParen => {
            let inner = core::parse_expression(tokens)?;
            expect_closing_parenthesis(tokens, pos)?;

            Ok(inner)
        },

        other => Err(ParseError::UnexpectedToken { token: format!("{other:?}"),
                                                   pos }),
    }
}

/// Parses the parenthesized argument of a function call.
///
/// Function names always take their argument in parentheses; `sin 1` is not
/// accepted.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>, function: Func, pos: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::LParen, open_pos)) => {
            let argument = core::parse_expression(tokens)?;
            expect_closing_parenthesis(tokens, *open_pos)?;

            Ok(Expr::FunctionCall { function,
                                    argument: Box::new(argument),
                                    pos })
        },

        Some((token, pos)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected '(' after {}, found {token:?}",
                                                             function.name()),
                                              pos:   *pos, })
        },

        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Consumes the `)` matching an opening parenthesis at `open_pos`.
fn expect_closing_parenthesis<'a, I>(tokens: &mut Peekable<I>, open_pos: usize) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(()),

        Some((token, pos)) => Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                                                pos:   *pos, }),

        None => Err(ParseError::UnmatchedParenthesis { pos: open_pos }),
    }
}
