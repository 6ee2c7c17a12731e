#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing the display text.
pub enum LexError {
    /// Found a character that is not part of the calculator alphabet.
    UnrecognizedCharacter {
        /// The offending slice of input.
        token: String,
        /// The byte offset where the error occurred.
        pos:   usize,
    },
    /// A numeric literal was malformed, e.g. it contained more than one `.`
    /// or consisted of a bare `.` with no digits.
    MalformedNumber {
        /// The byte offset where the error occurred.
        pos: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { token, pos } => {
                write!(f, "Error at offset {pos}: Unrecognized character: {token}.")
            },

            Self::MalformedNumber { pos } => {
                write!(f, "Error at offset {pos}: Malformed number.")
            },
        }
    }
}

impl std::error::Error for LexError {}
