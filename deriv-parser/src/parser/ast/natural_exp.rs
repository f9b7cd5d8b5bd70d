use crate::parser::{
    ast::signed::Signed,
    error::Error,
    token::E,
    Parse,
    Parser,
};
use crate::tokenizer::TokenKind;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Euler's number `e`, optionally raised to a power, such as `e^x` or `e^-(2 * x)`.
///
/// Unlike [`Power`](super::Power), the exponent of `e` may be any signed factor, so `e^x` is the
/// natural exponential function. A bare `e` has no exponent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NaturalExp {
    /// The exponent, if there is one.
    pub exponent: Option<Box<Signed>>,

    /// The region of the source code that this expression was parsed from.
    pub span: Range<usize>,
}

impl NaturalExp {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for NaturalExp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let e = input.try_parse::<E>()?;
        if !input.eat(TokenKind::Exp) {
            return Ok(Self { exponent: None, span: e.span });
        }

        let exponent = input.try_parse::<Signed>()?;
        Ok(Self {
            span: e.span.start..exponent.span.end,
            exponent: Some(Box::new(exponent)),
        })
    }
}

impl fmt::Display for NaturalExp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "e")?;
        if let Some(exponent) = &self.exponent {
            write!(f, "^{}", exponent)?;
        }
        Ok(())
    }
}
