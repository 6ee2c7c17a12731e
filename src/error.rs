/// Arithmetic errors.
///
/// Defines the terminal arithmetic failures the evaluator can raise, such as
/// division by zero, undefined (NaN) results, and overflow to infinity.
pub mod arithmetic_error;
/// Factorial errors.
///
/// Defines the domain errors of the postfix factorial operator: negative,
/// non-integer, and too-large operands.
pub mod factorial_error;
/// Lexing errors.
///
/// Defines all error types that can occur while tokenizing the display text,
/// such as unrecognized characters and malformed numeric literals.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the expression tree
/// from the token stream: unexpected tokens, unmatched parentheses, empty and
/// trailing input.
pub mod parse_error;

pub use arithmetic_error::ArithmeticError;
pub use factorial_error::FactorialError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// The union of every failure the engine can report.
///
/// This is the error type returned by [`crate::evaluate`]. Each stage of the
/// pipeline keeps its own dedicated error enum; this wrapper exists so that a
/// caller sees one typed result instead of a generic boxed error, per the
/// propagation policy of the engine: failures are returned, never thrown
/// across the module boundary, and never silently swallowed.
pub enum EvalError {
    /// The display text could not be tokenized.
    Lex(LexError),
    /// The token stream did not form a valid expression.
    Parse(ParseError),
    /// Evaluation hit an arithmetic failure.
    Arithmetic(ArithmeticError),
    /// A factorial operand was out of domain.
    Factorial(FactorialError),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
            Self::Arithmetic(e) => e.fmt(f),
            Self::Factorial(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<LexError> for EvalError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<ArithmeticError> for EvalError {
    fn from(error: ArithmeticError) -> Self {
        Self::Arithmetic(error)
    }
}

impl From<FactorialError> for EvalError {
    fn from(error: FactorialError) -> Self {
        Self::Factorial(error)
    }
}
