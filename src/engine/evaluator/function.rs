use crate::{ast::Func,
            engine::evaluator::core::{AngleUnit, EvalResult},
            error::{ArithmeticError, FactorialError},
            util::num};

/// Applies a built-in function to an evaluated argument.
///
/// Trigonometric functions convert their argument from the configured angle
/// unit first. The logarithms and the square root reject arguments outside
/// their real domain instead of returning NaN.
///
/// # Errors
/// Returns [`ArithmeticError::Undefined`] if the argument is outside the
/// function's domain.
pub fn eval_function(function: Func, argument: f64, angle_unit: AngleUnit, pos: usize) -> EvalResult<f64> {
    match function {
        Func::Sin => Ok(to_radians(argument, angle_unit).sin()),
        Func::Cos => Ok(to_radians(argument, angle_unit).cos()),
        Func::Tan => Ok(to_radians(argument, angle_unit).tan()),

        Func::Log => {
            if argument <= 0.0 {
                return Err(ArithmeticError::Undefined { pos }.into());
            }

            Ok(argument.ln())
        },

        Func::Log10 => {
            if argument <= 0.0 {
                return Err(ArithmeticError::Undefined { pos }.into());
            }

            Ok(argument.log10())
        },

        Func::Sqrt => {
            if argument < 0.0 {
                return Err(ArithmeticError::Undefined { pos }.into());
            }

            Ok(argument.sqrt())
        },

        Func::Exp => Ok(argument.exp()),
        Func::Abs => Ok(argument.abs()),
    }
}

/// Computes the factorial of an integral double in `0..=20`.
///
/// # Errors
/// - [`FactorialError::NotAnInteger`]: If `value` has a fractional part.
/// - [`FactorialError::Negative`]: If `value` is a negative integer.
/// - [`FactorialError::TooLarge`]: If `value` is greater than 20.
///
/// # Example
/// ```
/// use tally::engine::evaluator::function::factorial;
///
/// assert_eq!(factorial(5.0, 0).unwrap(), 120.0);
/// assert!(factorial(2.5, 0).is_err());
/// assert!(factorial(21.0, 0).is_err());
/// ```
pub fn factorial(value: f64, pos: usize) -> Result<f64, FactorialError> {
    if value.fract() != 0.0 {
        return Err(FactorialError::NotAnInteger { pos });
    }
    if value < 0.0 {
        return Err(FactorialError::Negative { pos });
    }
    if value > 20.0 {
        return Err(FactorialError::TooLarge { pos });
    }

    let n = num::f64_to_u64(value);
    let mut product = 1;
    for k in 2..=n {
        product *= k;
    }

    Ok(num::u64_to_f64(product))
}

/// Converts an angle in the configured unit to radians.
fn to_radians(value: f64, angle_unit: AngleUnit) -> f64 {
    match angle_unit {
        AngleUnit::Degrees => value.to_radians(),
        AngleUnit::Radians => value,
    }
}
