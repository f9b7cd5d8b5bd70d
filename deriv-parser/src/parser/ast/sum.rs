use crate::parser::{
    ast::product::Product,
    error::Error,
    token::op::TermOp,
    Parse,
    Parser,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sum of one or more terms, such as `1 + x - sin(x)`.
///
/// This is the root of every parsed expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sum {
    /// The first term.
    pub first: Product,

    /// The remaining terms, each with the operator that precedes it.
    pub rest: Vec<(TermOp, Product)>,

    /// The region of the source code that this sum was parsed from.
    pub span: Range<usize>,
}

impl Sum {
    /// Returns the span of the sum.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Sum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let first = input.try_parse::<Product>()?;
        let mut rest = Vec::new();

        while input.current_kind().is_some_and(|kind| TermOp::FIRST.contains(&kind)) {
            let op = input.try_parse::<TermOp>()?;
            let term = input.try_parse::<Product>()?;
            rest.push((op, term));
        }

        let end = rest.last().map_or(first.span.end, |(_, term)| term.span.end);
        Ok(Self {
            span: first.span.start..end,
            first,
            rest,
        })
    }
}

impl fmt::Display for Sum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for (op, term) in &self.rest {
            write!(f, " {} {}", op, term)?;
        }
        Ok(())
    }
}
