//! Simplification rules for sums.

use crate::symbolic::{
    expr::Expr,
    simplify::step::Step,
    step_collector::StepCollector,
};

/// Folds the constant terms of a sum into a single constant, and absorbs the terms of nested sums.
///
/// The terms must already be simplified. Terms absorbed from a nested sum are appended to the end
/// of the list, where they are examined again, so the result contains no constant terms or sums
/// other than the trailing constant.
///
/// Returns a [`Expr::Constant`] if no other terms remain, and otherwise a [`Expr::Sum`] ending in
/// the folded constant, unless it is zero.
pub fn fold_sum(mut terms: Vec<Expr>, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let mut constant = 0.0;
    let mut i = 0;
    while i < terms.len() {
        match terms[i] {
            Expr::Constant(value) => {
                constant += value;
                terms.remove(i);
                step_collector.push(Step::FoldTerms);
            },
            Expr::Sum(_) => {
                if let Expr::Sum(inner) = terms.remove(i) {
                    terms.extend(inner);
                }
                step_collector.push(Step::FlattenSum);
            },
            _ => i += 1,
        }
    }

    if terms.is_empty() {
        return Expr::Constant(constant);
    }

    if constant != 0.0 {
        terms.push(Expr::Constant(constant));
    }
    Expr::Sum(terms)
}
