//! Simplification rules for products.

use crate::symbolic::{
    expr::Expr,
    simplify::step::Step,
    step_collector::StepCollector,
};

/// Folds the constant factors of a product into a single constant, and absorbs the factors of
/// nested products.
///
/// The factors must already be simplified. As soon as the folded constant becomes zero, the whole
/// product is replaced by `0`, without looking at the remaining factors. Factors absorbed from a
/// nested product are appended to the end of the list, where they are examined again.
///
/// Returns a [`Expr::Constant`] if no other factors remain, and otherwise a [`Expr::Product`]
/// ending in the folded constant, unless it is one. Sums among the factors are left as they are.
pub fn fold_product(mut factors: Vec<Expr>, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let mut constant = 1.0;
    let mut i = 0;
    while i < factors.len() {
        match factors[i] {
            Expr::Constant(value) => {
                constant *= value;
                factors.remove(i);
                step_collector.push(Step::FoldFactors);

                if constant == 0.0 {
                    step_collector.push(Step::ZeroProduct);
                    return Expr::Constant(0.0);
                }
            },
            Expr::Product(_) => {
                if let Expr::Product(inner) = factors.remove(i) {
                    factors.extend(inner);
                }
                step_collector.push(Step::FlattenProduct);
            },
            _ => i += 1,
        }
    }

    if factors.is_empty() {
        return Expr::Constant(constant);
    }

    if constant != 1.0 {
        factors.push(Expr::Constant(constant));
    }
    Expr::Product(factors)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn only_constants() {
        let expr = fold_product(vec![Expr::Constant(-2.0), Expr::Constant(2.5)], &mut ());
        assert_eq!(expr, Expr::Constant(-5.0));
    }

    #[test]
    fn zero_short_circuits() {
        let mut steps = Vec::new();
        let expr = fold_product(vec![
            Expr::Constant(0.0),
            Expr::Product(vec![Expr::Variable, Expr::Constant(2.0)]),
        ], &mut steps);
        assert_eq!(expr, Expr::Constant(0.0));
        assert_eq!(steps, vec![Step::FoldFactors, Step::ZeroProduct]);
    }

    #[test]
    fn negative_zero_is_zero() {
        let expr = fold_product(vec![Expr::Constant(-1.0), Expr::Constant(0.0)], &mut ());
        assert_eq!(expr, Expr::Constant(0.0));
    }

    #[test]
    fn zero_inside_nested_product() {
        let expr = fold_product(vec![
            Expr::Variable,
            Expr::Product(vec![Expr::Sin(Box::new(Expr::Variable)), Expr::Constant(0.0)]),
        ], &mut ());
        assert_eq!(expr, Expr::Constant(0.0));
    }
}
