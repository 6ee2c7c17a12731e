//! An expression evaluation engine for calculator input.
//!
//! The engine turns the display text of a calculator into a formatted
//! result string, in four stages: tokenization, parsing, evaluation, and
//! formatting. Display glyphs (`×`, `÷`, `π`, `√`, `²`) are first-class
//! tokens, precedence and associativity live entirely in the grammar, and
//! every failure is reported as a typed [`error::EvalError`].
//!
//! Two entry points cover the two ways a calculator asks for a result:
//! [`evaluate`] for an explicit "equals" press, which reports errors, and
//! [`preview`] for live as-you-type output, which stays silent on anything
//! not yet evaluable.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// The expression tree.
///
/// Defines the operators, function keywords, and node types the parser
/// produces and the evaluator consumes.
pub mod ast;
/// The evaluation pipeline.
///
/// Hosts the lexer, parser, evaluator, and result formatter.
pub mod engine;
/// Everything that can go wrong.
///
/// One dedicated error enum per pipeline stage, plus the union type the
/// public API returns.
pub mod error;
/// Small shared helpers.
pub mod util;

pub use engine::evaluator::AngleUnit;
pub use error::EvalError;

/// Evaluates a calculator expression to its display string.
///
/// This is the "equals" entry point: the whole pipeline runs, and the first
/// failure in any stage is returned as a typed error. A result that is NaN
/// or infinite after evaluation is also an error, so the returned string is
/// always a rendering of a finite value.
///
/// # Parameters
/// - `expression`: The display text to evaluate.
/// - `angle_unit`: How trigonometric arguments are interpreted.
///
/// # Errors
/// Returns an [`EvalError`] wrapping the lexing, parsing, arithmetic, or
/// factorial failure that stopped the pipeline.
///
/// # Example
/// ```
/// use tally::{AngleUnit, evaluate};
///
/// assert_eq!(evaluate("2+3*4", AngleUnit::Degrees).unwrap(), "14");
/// assert_eq!(evaluate("-2^2", AngleUnit::Degrees).unwrap(), "-4");
/// assert_eq!(evaluate("5!", AngleUnit::Degrees).unwrap(), "120");
/// assert!(evaluate("1/0", AngleUnit::Degrees).is_err());
/// ```
pub fn evaluate(expression: &str, angle_unit: AngleUnit) -> Result<String, EvalError> {
    let tokens = engine::lexer::tokenize(expression)?;
    let tree = engine::parser::parse(&tokens)?;
    let value = engine::evaluator::eval(&tree, angle_unit)?;

    if value.is_nan() {
        return Err(error::ArithmeticError::Undefined { pos: tree.pos() }.into());
    }
    if value.is_infinite() {
        return Err(error::ArithmeticError::Overflow { pos: tree.pos() }.into());
    }

    Ok(engine::format::format_value(value))
}

/// Evaluates a calculator expression for a live preview, if it is ready.
///
/// This is the as-you-type entry point: input that is empty, still
/// mid-entry (ending in an operator or an open parenthesis), invalid, or
/// without a finite value yields `None` instead of an error, so a caller
/// can run it on every keystroke and show whatever comes back.
///
/// # Example
/// ```
/// use tally::{AngleUnit, preview};
///
/// assert_eq!(preview("1+2", AngleUnit::Degrees), Some("3".to_string()));
/// assert_eq!(preview("1+", AngleUnit::Degrees), None);
/// assert_eq!(preview("sin(1", AngleUnit::Degrees), None);
/// assert_eq!(preview("1/0", AngleUnit::Degrees), None);
/// ```
#[must_use]
pub fn preview(expression: &str, angle_unit: AngleUnit) -> Option<String> {
    let tokens = engine::lexer::tokenize(expression).ok()?;

    if !engine::parser::is_complete(&tokens) {
        return None;
    }

    let tree = engine::parser::parse(&tokens).ok()?;
    let value = engine::evaluator::eval(&tree, angle_unit).ok()?;

    if !value.is_finite() {
        return None;
    }

    Some(engine::format::format_value(value))
}
