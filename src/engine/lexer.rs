use logos::Logos;

use crate::{ast::Func, error::LexError};

/// Represents a lexical token of the calculator input.
///
/// A token is a minimal but meaningful unit of the display text. Display
/// glyphs (`×`, `÷`, the Unicode minus `−`) and the word `mod` are
/// alternative spellings of the plain operator tokens, so no textual
/// substitution pass ever runs before tokenization. Constants and function
/// keywords are matched longest-first by the lexer, which is what keeps
/// `log10` from splitting into `log` + `10` and the `e` of `exp` from being
/// read as Euler's number.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `1.5E+12`.
    ///
    /// The regexes deliberately accept a run with multiple dots so that an
    /// input like `1.2.3` is rejected as one malformed literal instead of
    /// being re-tokenized as two adjacent numbers. An exponent suffix is
    /// accepted with an uppercase `E` only, the form the result formatter
    /// emits; a lowercase `e` is always Euler's number.
    #[regex(r"[0-9][0-9.]*", parse_number)]
    #[regex(r"\.[0-9.]*", parse_number)]
    #[regex(r"[0-9][0-9.]*E[+-]?[0-9]+", parse_number)]
    #[regex(r"\.[0-9.]*E[+-]?[0-9]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`, also the Unicode minus sign `−`.
    #[token("-")]
    #[token("−")]
    Minus,
    /// `*`, also the display glyph `×`.
    #[token("*")]
    #[token("×")]
    Star,
    /// `/`, also the display glyph `÷`.
    #[token("/")]
    #[token("÷")]
    Slash,
    /// `%`, also the keyword `mod`.
    #[token("%")]
    #[token("mod")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `!`
    #[token("!")]
    Bang,
    /// `²`, the squaring-dialect postfix alias for `^2`.
    #[token("²")]
    Squared,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// The constant `π`, also spelled `pi`.
    #[token("π")]
    #[token("pi")]
    Pi,
    /// The constant `e`.
    #[token("e")]
    Euler,
    /// Built-in function keywords such as `sin` or `log10`.
    #[token("sin", |_| Func::Sin)]
    #[token("cos", |_| Func::Cos)]
    #[token("tan", |_| Func::Tan)]
    #[token("log", |_| Func::Log)]
    #[token("log10", |_| Func::Log10)]
    #[token("sqrt", |_| Func::Sqrt)]
    #[token("√", |_| Func::Sqrt)]
    #[token("exp", |_| Func::Exp)]
    #[token("abs", |_| Func::Abs)]
    Function(Func),

    /// Spaces and feeds between tokens.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Whitespace,
}

/// Internal error classification produced by the generated lexer.
///
/// Carries no position: `tokenize` attaches the span offset when converting
/// to the public [`LexError`].
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// The default: a character outside the calculator alphabet.
    #[default]
    UnrecognizedCharacter,
    /// A digit/dot run that does not form a valid number.
    MalformedNumber,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(LexErrorKind::MalformedNumber)`: If the slice contains more than
///   one `.` or is a bare `.`.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexErrorKind> {
    let slice = lex.slice();
    if slice.chars().filter(|&c| c == '.').count() > 1 {
        return Err(LexErrorKind::MalformedNumber);
    }
    slice.parse().map_err(|_| LexErrorKind::MalformedNumber)
}

/// Tokenizes a display string into `(Token, byte offset)` pairs.
///
/// Whitespace is skipped; every other character must belong to exactly one
/// token, so the tokens fully partition the input. The byte offset of each
/// token is kept for error reporting further down the pipeline.
///
/// # Errors
/// Returns a [`LexError`] for unrecognized characters or malformed numeric
/// literals.
///
/// # Example
/// ```
/// use tally::engine::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1+2").unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1], (Token::Plus, 1));
///
/// assert_eq!(tokenize("1.5E+12").unwrap().len(), 1);
///
/// assert!(tokenize("1.2.3").is_err());
/// assert!(tokenize("1 @ 2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.span().start)),

            Err(LexErrorKind::MalformedNumber) => {
                return Err(LexError::MalformedNumber { pos: lexer.span().start });
            },

            Err(LexErrorKind::UnrecognizedCharacter) => {
                return Err(LexError::UnrecognizedCharacter { token: lexer.slice().to_string(),
                                                            pos:   lexer.span().start, });
            },
        }
    }

    Ok(tokens)
}
