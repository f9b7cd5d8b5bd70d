//! Symbolic differentiation, simplification, and numerical evaluation of expressions in a single
//! variable, `x`.
//!
//! The usual entry point is [`parse`], which turns source text into a simplified [`Expr`]. From
//! there, [`derivative`] differentiates it, [`simplify`] normalizes any hand-built expression, and
//! [`evaluate`] computes its value at some `x`.
//!
//! ```
//! use deriv_compute::{derivative, evaluate, parse, Expr};
//!
//! let expr = parse("(5 + x) * 4").unwrap();
//! assert_eq!(evaluate(&expr, 2.0), 28.0);
//! assert_eq!(derivative(&expr), Expr::Constant(4.0));
//! ```
//!
//! Parse errors are [`deriv_error::Error`]s, which can be rendered as rich diagnostics with
//! [`Error::build_report`](deriv_error::Error::build_report).
//!
//! # Nesting depth
//!
//! Every algorithm in this crate recurses once per level of nesting in the expression tree. The
//! parser rejects input nested more than [`MAX_DEPTH`] levels deep, which bounds the depth of every
//! tree returned by [`parse`]. Trees built by hand are not checked.
//!
//! # Features
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for the expression types provided by this
//!   crate.

pub mod numerical;
pub mod symbolic;

pub use deriv_parser::parser::MAX_DEPTH;
pub use numerical::eval::{evaluate, Eval};
pub use symbolic::{
    derivative,
    expr::{Expr, Func, Kind},
    nth_derivative,
    simplify,
    simplify::step::Step,
    simplify_with_steps,
};

use deriv_error::Error;
use deriv_parser::parser::{ast::Sum, Parser};
use tracing::debug;

/// Parses the source text into an expression, without simplifying it.
fn lower(source: &str) -> Result<Expr, Error> {
    let mut parser = Parser::new(source)?;
    let ast = parser.try_parse_full::<Sum>()?;
    Ok(Expr::from(ast))
}

/// Parses the source text into a simplified expression.
///
/// Returns an error if the source is not a valid expression.
pub fn parse(source: &str) -> Result<Expr, Error> {
    let expr = simplify(&lower(source)?);
    debug!(nodes = expr.node_count(), "parsed expression");
    Ok(expr)
}

/// Parses the source text into a simplified expression, also returning the rewrites that were
/// applied to simplify it.
pub fn parse_with_steps(source: &str) -> Result<(Expr, Vec<Step>), Error> {
    Ok(simplify_with_steps(&lower(source)?))
}
