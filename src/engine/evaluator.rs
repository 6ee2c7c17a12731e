/// Core tree-walking evaluation.
///
/// Folds an expression tree into a double, raising arithmetic errors where
/// an operation leaves the domain of the reals.
pub mod core;
/// Built-in functions and the factorial.
///
/// Implements the function keywords of the calculator, including the angle
/// unit handling of the trigonometric functions.
pub mod function;

pub use self::core::{AngleUnit, EvalResult, eval};
