//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which normalizes an expression bottom-up: the
//! children of a node are simplified first, and then the rules for the kind of the node are
//! applied to it until none of them apply. The rules themselves live in [`rules`], one module per
//! kind of node:
//!
//! - **Sums** fold their constant terms into a single constant, and absorb the terms of nested
//!   sums. Absorbed terms are appended to the end of the sum, so the order of terms is not
//!   preserved. A sum with no terms left becomes a constant; otherwise the constant is kept as the
//!   last term, unless it is zero.
//! - **Products** do the same with their constant factors and nested products, except that a
//!   constant factor of zero turns the whole product into zero, and a constant of one is dropped.
//!   Products are not distributed over sums.
//! - **Powers** with an exponent of zero become `1`, whatever the base. An exponent of one leaves
//!   just the base. A constant base is raised to the exponent.
//! - **Functions** of a constant are evaluated.
//!
//! No domain checks are made: `ln(-1)` simplifies to a `NaN` constant.
//!
//! The result of [`simplify`] is a fixed point: simplifying it again returns the same expression.
//!
//! ```
//! use deriv_compute::symbolic::{expr::Expr, simplify};
//!
//! // 2 * (x * 3) + 1 + 4
//! let expr = Expr::Sum(vec![
//!     Expr::Product(vec![
//!         Expr::Constant(2.0),
//!         Expr::Product(vec![Expr::Variable, Expr::Constant(3.0)]),
//!     ]),
//!     Expr::Constant(1.0),
//!     Expr::Constant(4.0),
//! ]);
//!
//! assert_eq!(simplify(&expr), Expr::Sum(vec![
//!     Expr::Product(vec![Expr::Variable, Expr::Constant(6.0)]),
//!     Expr::Constant(5.0),
//! ]));
//! ```

pub mod rules;
pub mod step;

use crate::symbolic::{expr::{Expr, Func}, step_collector::StepCollector};
use step::Step;
use tracing::{debug, trace};

/// Simplifies the given expression, reporting every rewrite applied to the given
/// [`StepCollector`].
pub fn simplify_with(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match expr {
        Expr::Sum(terms) => {
            let terms = terms.iter()
                .map(|term| simplify_with(term, step_collector))
                .collect();
            rules::add::fold_sum(terms, step_collector)
        },
        Expr::Product(factors) => {
            let factors = factors.iter()
                .map(|factor| simplify_with(factor, step_collector))
                .collect();
            rules::multiply::fold_product(factors, step_collector)
        },
        Expr::Constant(_) | Expr::Variable => expr.clone(),
        Expr::Power(base, exponent) => {
            // `a^0` is `1` without looking at `a`
            if *exponent == 0.0 {
                step_collector.push(Step::PowerZero);
                return Expr::Constant(1.0);
            }

            let base = simplify_with(base, step_collector);
            rules::power::fold_power(base, *exponent, step_collector)
        },
        Expr::Exp(arg) => simplify_call(Func::Exp, arg, step_collector),
        Expr::Ln(arg) => simplify_call(Func::Ln, arg, step_collector),
        Expr::Sin(arg) => simplify_call(Func::Sin, arg, step_collector),
        Expr::Cos(arg) => simplify_call(Func::Cos, arg, step_collector),
        Expr::Tan(arg) => simplify_call(Func::Tan, arg, step_collector),
    }
}

/// Simplifies a call to the given function.
fn simplify_call(func: Func, arg: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let arg = simplify_with(arg, step_collector);
    rules::function::fold_call(func, arg, step_collector)
}

/// Simplifies the given expression.
pub fn simplify(expr: &Expr) -> Expr {
    simplify_with(expr, &mut ())
}

/// Simplifies the given expression, returning the simplified expression along with the rewrites
/// that were applied, in the order they were applied.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = simplify_with(expr, &mut steps);
    for step in &steps {
        trace!(%step, "applied rewrite");
    }
    debug!(
        before = expr.node_count(),
        after = simplified.node_count(),
        steps = steps.len(),
        "simplified expression",
    );
    (simplified, steps)
}
