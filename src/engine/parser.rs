/// Binary expression parsing.
///
/// Handles the additive, multiplicative, and power precedence levels,
/// including implicit multiplication by juxtaposition.
pub mod binary;
/// Parser entry points.
///
/// Drives the recursive descent and verifies the whole token stream was
/// consumed; also hosts the completeness gate used by live previews.
pub mod core;
/// Unary and primary expression parsing.
///
/// Handles unary minus, the postfix operators `!` and `²`, literals,
/// constants, function calls, and parenthesized groups.
pub mod unary;

pub use self::core::{ParseResult, is_complete, parse};
