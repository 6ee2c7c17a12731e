#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing the token stream.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered, or a description of what was expected.
        token: String,
        /// The byte offset where the error occurred.
        pos:   usize,
    },
    /// A parenthesis was opened but never closed, or closed without being
    /// opened.
    UnmatchedParenthesis {
        /// The byte offset of the offending parenthesis.
        pos: usize,
    },
    /// The input contained no tokens at all.
    EmptyExpression,
    /// Found extra tokens after a complete expression.
    TrailingInput {
        /// The first extra token.
        token: String,
        /// The byte offset where the error occurred.
        pos:   usize,
    },
    /// Reached the end of input in the middle of an expression.
    UnexpectedEndOfInput,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, pos } => {
                write!(f, "Error at offset {pos}: Unexpected token: {token}.")
            },

            Self::UnmatchedParenthesis { pos } => {
                write!(f, "Error at offset {pos}: Unmatched parenthesis.")
            },

            Self::EmptyExpression => write!(f, "Error: Expression is empty."),

            Self::TrailingInput { token, pos } => write!(f,
                                                         "Error at offset {pos}: Extra input after expression: {token}."),

            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),
        }
    }
}

impl std::error::Error for ParseError {}
