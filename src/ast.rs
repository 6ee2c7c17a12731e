/// Binary operators supported by the engine.
///
/// All operators take two numeric operands and produce a numeric result.
/// `Mod` is the remainder operator, spelled `%` or `mod` in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*` or `×`).
    Mul,
    /// Division (`/` or `÷`).
    Div,
    /// Remainder (`%` or `mod`).
    Mod,
    /// Exponentiation (`^`), right-associative.
    Pow,
}

/// The fixed set of built-in functions.
///
/// Every function takes exactly one argument. `Log` is the natural logarithm
/// and `Log10` the base-10 logarithm, matching the button labels of the
/// calculator front ends this engine serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    /// Sine. The argument is interpreted per the active angle unit.
    Sin,
    /// Cosine. The argument is interpreted per the active angle unit.
    Cos,
    /// Tangent. The argument is interpreted per the active angle unit.
    Tan,
    /// Natural logarithm.
    Log,
    /// Base-10 logarithm.
    Log10,
    /// Square root, also spelled `√`.
    Sqrt,
    /// Natural exponential.
    Exp,
    /// Absolute value.
    Abs,
}

impl Func {
    /// Returns the keyword this function is spelled with in the input.
    ///
    /// # Example
    /// ```
    /// use tally::ast::Func;
    ///
    /// assert_eq!(Func::Log10.name(), "log10");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Log10 => "log10",
            Self::Sqrt => "sqrt",
            Self::Exp => "exp",
            Self::Abs => "abs",
        }
    }
}

/// An abstract syntax tree (AST) node representing a parsed expression.
///
/// A tree is built fresh from the display text for every evaluation call,
/// never mutated in place, and dropped with the call that produced it. Each
/// node exclusively owns its children. Every variant carries the byte offset
/// `pos` of the token that introduced it, used for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, including the expanded constants `π` and `e`.
    Literal {
        /// The constant value.
        value: f64,
        /// Byte offset in the input.
        pos:   usize,
    },
    /// A binary operation (addition, exponentiation, etc.).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Byte offset of the operator in the input.
        pos:   usize,
    },
    /// Numeric negation. Binds looser than `^`, so `-2^2` is `-(2^2)`.
    UnaryMinus {
        /// The operand expression.
        operand: Box<Self>,
        /// Byte offset of the `-` in the input.
        pos:     usize,
    },
    /// A call to a built-in function with exactly one argument.
    FunctionCall {
        /// The function being called.
        function: Func,
        /// The argument expression.
        argument: Box<Self>,
        /// Byte offset of the function keyword in the input.
        pos:      usize,
    },
    /// Postfix factorial. The operand must evaluate to an integer in
    /// `0..=20`.
    Factorial {
        /// The operand expression.
        operand: Box<Self>,
        /// Byte offset of the `!` in the input.
        pos:     usize,
    },
}

impl Expr {
    /// Returns the byte offset this node was parsed at.
    ///
    /// # Example
    /// ```
    /// use tally::ast::Expr;
    ///
    /// let expr = Expr::Literal { value: 1.0,
    ///                            pos:   4, };
    /// assert_eq!(expr.pos(), 4);
    /// ```
    #[must_use]
    pub const fn pos(&self) -> usize {
        match self {
            Self::Literal { pos, .. }
            | Self::BinaryOp { pos, .. }
            | Self::UnaryMinus { pos, .. }
            | Self::FunctionCall { pos, .. }
            | Self::Factorial { pos, .. } => *pos,
        }
    }
}
