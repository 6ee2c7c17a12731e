use std::iter::Peekable;

use crate::{ast::Expr,
            engine::{lexer::Token, parser::binary},
            error::ParseError};

/// A specialized [`Result`] type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete expression from a token stream.
///
/// The whole stream must form exactly one expression: leftover tokens after
/// the descent returns are an error, not a second expression.
///
/// # Parameters
/// - `tokens`: The positioned tokens produced by
///   [`crate::engine::lexer::tokenize`].
///
/// # Returns
/// - `Ok(Expr)`: The root of the expression tree.
///
/// # Errors
/// - [`ParseError::EmptyExpression`]: If the stream holds no tokens.
/// - [`ParseError::UnmatchedParenthesis`]: If a `)` has no matching `(`.
/// - [`ParseError::TrailingInput`]: If tokens remain after a complete
///   expression.
/// - Any error raised by the precedence levels below.
///
/// # Example
/// ```
/// use tally::engine::{lexer::tokenize, parser::parse};
///
/// let tokens = tokenize("1+2*3").unwrap();
/// assert!(parse(&tokens).is_ok());
///
/// let tokens = tokenize("1+2)").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut tokens = tokens.iter().peekable();

    if tokens.peek().is_none() {
        return Err(ParseError::EmptyExpression);
    }

    let expression = parse_expression(&mut tokens)?;

    match tokens.next() {
        None => Ok(expression),

        Some((Token::RParen, pos)) => Err(ParseError::UnmatchedParenthesis { pos: *pos }),

        Some((token, pos)) => Err(ParseError::TrailingInput { token: format!("{token:?}"),
                                                              pos:   *pos, }),
    }
}

/// Parses an expression at the lowest precedence level.
///
/// This is the rule every nested construct (groupings, function arguments)
/// re-enters.
///
/// # Errors
/// Returns a [`ParseError`] if the token stream does not form a valid
/// expression.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    binary::parse_additive(tokens)
}

/// Reports whether a token stream is worth evaluating for a live preview.
///
/// The gate is intentionally shallow: it only rules out streams that are
/// still obviously mid-entry, i.e. empty input, input ending in an operator,
/// an open parenthesis, or a function name, and input with unbalanced
/// parentheses. Everything else is handed to the parser, which remains the
/// authority on validity.
///
/// # Example
/// ```
/// use tally::engine::{lexer::tokenize, parser::is_complete};
///
/// assert!(is_complete(&tokenize("1+2").unwrap()));
/// assert!(!is_complete(&tokenize("1+").unwrap()));
/// assert!(!is_complete(&tokenize("sin(1").unwrap()));
/// ```
#[must_use]
pub fn is_complete(tokens: &[(Token, usize)]) -> bool {
    let Some((last, _)) = tokens.last() else {
        return false;
    };

    if matches!(last,
                Token::Plus
                | Token::Minus
                | Token::Star
                | Token::Slash
                | Token::Percent
                | Token::Caret
                | Token::LParen
                | Token::Function(_))
    {
        return false;
    }

    let mut depth = 0usize;
    for (token, _) in tokens {
        match token {
            Token::LParen => depth += 1,

            Token::RParen => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            },

            _ => {},
        }
    }

    depth == 0
}
