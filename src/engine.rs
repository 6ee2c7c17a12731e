/// Evaluation of expression trees.
///
/// Walks an [`crate::ast::Expr`] and produces the numeric value of the
/// expression, or the arithmetic/factorial error that stopped it.
pub mod evaluator;
/// Result formatting.
///
/// Renders a finite double as the display string the calculator shows:
/// plain integers, trimmed decimals, or normalized scientific notation.
pub mod format;
/// Tokenization of display text.
///
/// Turns the raw input string into a stream of positioned tokens, folding
/// display glyphs and keyword aliases into the canonical operator set.
pub mod lexer;
/// Parsing of token streams.
///
/// Builds an expression tree from the tokens with a recursive descent
/// parser, one function per precedence level.
pub mod parser;
