//! Numerical evaluation of expressions.
//!
//! Evaluation is done in `f64` arithmetic, with no domain checks: the logarithm of a negative
//! number is `NaN`, and dividing by zero gives an infinity, exactly as the corresponding `f64`
//! operations do.

pub mod eval;
