//! Simplification rules for powers.

use crate::symbolic::{
    expr::Expr,
    simplify::step::Step,
    step_collector::StepCollector,
};

/// Simplifies `base^exponent`, where `base` is already simplified and `exponent` is not zero.
///
/// - `a^1 = a`
/// - a constant base is raised to the exponent
pub fn fold_power(
    base: Expr,
    exponent: f64,
    step_collector: &mut dyn StepCollector<Step>,
) -> Expr {
    if exponent == 1.0 {
        step_collector.push(Step::PowerOne);
        return base;
    }

    match base {
        Expr::Constant(value) => {
            step_collector.push(Step::FoldPower);
            Expr::Constant(value.powf(exponent))
        },
        base => Expr::Power(Box::new(base), exponent),
    }
}
