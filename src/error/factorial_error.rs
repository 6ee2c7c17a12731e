#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents invalid operands to the postfix factorial operator.
///
/// The factorial is only defined here for integers in `0..=20`; anything else
/// is rejected with the matching variant, never silently clamped.
pub enum FactorialError {
    /// The operand was negative.
    Negative {
        /// The byte offset of the `!`.
        pos: usize,
    },
    /// The operand had a nonzero fractional part.
    NotAnInteger {
        /// The byte offset of the `!`.
        pos: usize,
    },
    /// The operand was greater than 20, the largest value whose factorial
    /// fits a 64-bit signed integer with headroom.
    TooLarge {
        /// The byte offset of the `!`.
        pos: usize,
    },
}

impl std::fmt::Display for FactorialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative { pos } => write!(f,
                                             "Error at offset {pos}: Factorial of a negative number."),

            Self::NotAnInteger { pos } => write!(f,
                                                 "Error at offset {pos}: Factorial of a non-integer."),

            Self::TooLarge { pos } => {
                write!(f, "Error at offset {pos}: Factorial operand is larger than 20.")
            },
        }
    }
}

impl std::error::Error for FactorialError {}
