//! Simplification rules for functions of a single argument.

use crate::symbolic::{
    expr::{Expr, Func},
    simplify::step::Step,
    step_collector::StepCollector,
};

/// Simplifies `func(arg)`, where `arg` is already simplified. A function of a constant is
/// evaluated; otherwise the call is rebuilt around the argument.
pub fn fold_call(func: Func, arg: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match arg {
        Expr::Constant(value) => {
            step_collector.push(Step::FoldCall(func));
            Expr::Constant(func.apply(value))
        },
        arg => func.wrap(arg),
    }
}
