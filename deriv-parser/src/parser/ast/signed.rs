use crate::parser::{
    ast::power::Power,
    error::Error,
    token::Sub,
    Parse,
    Parser,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A factor with an optional leading minus sign, such as `-x` or `ln(x)`.
///
/// At most one minus sign is accepted; `--x` is a syntax error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Signed {
    /// The span of the minus sign, if there is one.
    pub neg: Option<Range<usize>>,

    /// The factor being negated.
    pub operand: Power,

    /// The region of the source code that this factor was parsed from, including the sign.
    pub span: Range<usize>,
}

impl Signed {
    /// Returns the span of the factor.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns true if the factor is negated.
    pub fn is_negated(&self) -> bool {
        self.neg.is_some()
    }
}

impl Parse for Signed {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let neg = input.try_parse::<Sub>().ok().map(|sub| sub.span);
        let operand = input.try_parse::<Power>()?;
        let start = neg.as_ref().map_or(operand.span.start, |neg| neg.start);
        Ok(Self {
            span: start..operand.span.end,
            neg,
            operand,
        })
    }
}

impl fmt::Display for Signed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_negated() {
            write!(f, "-")?;
        }
        write!(f, "{}", self.operand)
    }
}
