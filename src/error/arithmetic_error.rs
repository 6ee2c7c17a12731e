#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents arithmetic failures raised during evaluation.
///
/// These are terminal: the evaluator never recovers from them, and no partial
/// result is produced.
pub enum ArithmeticError {
    /// Attempted division (or remainder) by zero.
    DivisionByZero {
        /// The byte offset of the offending operator.
        pos: usize,
    },
    /// The result is mathematically undefined (NaN), e.g. `sqrt(-1)`,
    /// `log(0)`, or a negative base raised to a fractional exponent.
    Undefined {
        /// The byte offset of the offending operation.
        pos: usize,
    },
    /// The result overflowed the range of a double (±∞).
    Overflow {
        /// The byte offset of the expression that overflowed.
        pos: usize,
    },
}

impl std::fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { pos } => {
                write!(f, "Error at offset {pos}: Division by zero.")
            },

            Self::Undefined { pos } => {
                write!(f, "Error at offset {pos}: Result is undefined.")
            },

            Self::Overflow { pos } => {
                write!(f, "Error at offset {pos}: Result is too large.")
            },
        }
    }
}

impl std::error::Error for ArithmeticError {}
