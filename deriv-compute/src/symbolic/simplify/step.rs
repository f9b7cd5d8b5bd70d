use crate::symbolic::expr::Func;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rewrite applied by the simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// A constant term was folded into the constant of a sum.
    FoldTerms,

    /// A sum nested in a sum was flattened into it.
    FlattenSum,

    /// A constant factor was folded into the constant of a product.
    FoldFactors,

    /// A product nested in a product was flattened into it.
    FlattenProduct,

    /// A product with a constant factor of zero was replaced by zero.
    ZeroProduct,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// A constant raised to a constant power was evaluated.
    FoldPower,

    /// A function of a constant was evaluated.
    FoldCall(Func),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Step::FoldTerms => write!(f, "add constant terms"),
            Step::FlattenSum => write!(f, "flatten nested sum"),
            Step::FoldFactors => write!(f, "multiply constant factors"),
            Step::FlattenProduct => write!(f, "flatten nested product"),
            Step::ZeroProduct => write!(f, "multiply by zero"),
            Step::PowerZero => write!(f, "raise to the power of zero"),
            Step::PowerOne => write!(f, "raise to the power of one"),
            Step::FoldPower => write!(f, "evaluate constant power"),
            Step::FoldCall(func) => write!(f, "evaluate `{}` of a constant", func),
        }
    }
}
