//! Symbolic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions in this module are represented as a tree of [`Expr`] nodes. The tree is built from
//! the [`Sum`](deriv_parser::parser::ast::Sum) AST produced by [`deriv_parser`] using the [`From`]
//! trait; see the [`expr`] module for the details of that conversion.
//!
//! # Simplification
//!
//! The [`simplify()`] function folds constants and flattens nested sums and products, producing a
//! normalized tree. See the [`mod@simplify`] module for the rules it applies.
//!
//! # Differentiation
//!
//! The [`derivative()`] function differentiates an expression with respect to `x`, returning an
//! already simplified tree.
//!
//! ```
//! use deriv_compute::symbolic::{derivative, expr::Expr};
//!
//! // d/dx 3x^2 = 6x, as the only term of the sum built by the product rule
//! let expr = Expr::Product(vec![
//!     Expr::Constant(3.0),
//!     Expr::Power(Box::new(Expr::Variable), 2.0),
//! ]);
//! assert_eq!(derivative(&expr), Expr::Sum(vec![
//!     Expr::Product(vec![Expr::Variable, Expr::Constant(6.0)]),
//! ]));
//! ```

pub mod derivative;
pub mod expr;
pub mod simplify;
pub mod step_collector;

pub use derivative::{derivative, nth_derivative};
pub use expr::Expr;
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
