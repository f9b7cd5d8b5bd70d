use crate::parser::{
    ast::signed::Signed,
    error::Error,
    token::op::FactorOp,
    Parse,
    Parser,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A product of one or more factors, such as `2 * x / cos(x)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Product {
    /// The first factor.
    pub first: Signed,

    /// The remaining factors, each with the operator that precedes it.
    pub rest: Vec<(FactorOp, Signed)>,

    /// The region of the source code that this product was parsed from.
    pub span: Range<usize>,
}

impl Product {
    /// Returns the span of the product.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Product {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let first = input.try_parse::<Signed>()?;
        let mut rest = Vec::new();

        while input.current_kind().is_some_and(|kind| FactorOp::FIRST.contains(&kind)) {
            let op = input.try_parse::<FactorOp>()?;
            let factor = input.try_parse::<Signed>()?;
            rest.push((op, factor));
        }

        let end = rest.last().map_or(first.span.end, |(_, factor)| factor.span.end);
        Ok(Self {
            span: first.span.start..end,
            first,
            rest,
        })
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for (op, factor) in &self.rest {
            write!(f, " {} {}", op, factor)?;
        }
        Ok(())
    }
}
