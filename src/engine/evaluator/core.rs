use crate::{ast::{BinaryOperator, Expr},
            engine::evaluator::function,
            error::{ArithmeticError, EvalError}};

/// A specialized [`Result`] type for evaluation operations.
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The unit in which trigonometric arguments are interpreted.
///
/// Calculators default to degrees; everything outside the trigonometric
/// functions is unaffected by this setting.
pub enum AngleUnit {
    /// Trigonometric arguments are degrees.
    #[default]
    Degrees,
    /// Trigonometric arguments are radians.
    Radians,
}

/// Evaluates an expression tree to a double.
///
/// Evaluation is a pure fold over the tree: no state is carried between
/// calls, and the same tree always produces the same value. Intermediate
/// values may be non-finite; only the operations listed below reject their
/// operands.
///
/// # Parameters
/// - `expression`: The root of the tree to evaluate.
/// - `angle_unit`: How trigonometric arguments are interpreted.
///
/// # Errors
/// - [`ArithmeticError::DivisionByZero`]: On `x/0` or `x%0`.
/// - [`ArithmeticError::Undefined`]: On a NaN power or an out-of-domain
///   function argument.
/// - [`crate::error::FactorialError`]: On an out-of-domain factorial
///   operand.
///
/// # Example
/// ```
/// use tally::engine::{evaluator::{AngleUnit, eval},
///                     lexer::tokenize,
///                     parser::parse};
///
/// let tokens = tokenize("2^3^2").unwrap();
/// let tree = parse(&tokens).unwrap();
/// assert_eq!(eval(&tree, AngleUnit::Degrees).unwrap(), 512.0);
/// ```
pub fn eval(expression: &Expr, angle_unit: AngleUnit) -> EvalResult<f64> {
    match expression {
        Expr::Literal { value, .. } => Ok(*value),

        Expr::UnaryMinus { operand, .. } => Ok(-eval(operand, angle_unit)?),

        Expr::BinaryOp { op, left, right, pos } => {
            let left = eval(left, angle_unit)?;
            let right = eval(right, angle_unit)?;

            eval_binary(*op, left, right, *pos)
        },

        Expr::FunctionCall { function, argument, pos } => {
            let argument = eval(argument, angle_unit)?;

            function::eval_function(*function, argument, angle_unit, *pos)
        },

        Expr::Factorial { operand, pos } => {
            let operand = eval(operand, angle_unit)?;

            Ok(function::factorial(operand, *pos)?)
        },
    }
}

/// Applies a binary operator to two evaluated operands.
fn eval_binary(op: BinaryOperator, left: f64, right: f64, pos: usize) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        BinaryOperator::Mul => Ok(left * right),

        BinaryOperator::Div => {
            if right == 0.0 {
                return Err(ArithmeticError::DivisionByZero { pos }.into());
            }

            Ok(left / right)
        },

        BinaryOperator::Mod => {
            if right == 0.0 {
                return Err(ArithmeticError::DivisionByZero { pos }.into());
            }

            Ok(left % right)
        },

        BinaryOperator::Pow => {
            let result = left.powf(right);
            if result.is_nan() {
                return Err(ArithmeticError::Undefined { pos }.into());
            }

            Ok(result)
        },
    }
}
