use crate::{
    parser::{
        ast::{Atom, LitNum},
        error::{kind, Error},
        token::{Exp, Sub},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A constant exponent, such as `^2` or `^-0.5`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Exponent {
    /// The value of the exponent, with its sign applied.
    pub value: f64,

    /// The region of the source code that this exponent was parsed from, starting at the `^`.
    pub span: Range<usize>,
}

impl Parse for Exponent {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let caret = input.try_parse::<Exp>()?;
        let neg = input.try_parse::<Sub>().is_ok();
        if let Some(token) = input.current_token() {
            if token.kind != TokenKind::Number {
                return Err(Error::new(vec![token.span.clone()], kind::NonConstantExponent));
            }
        }
        let number = input.try_parse::<LitNum>()?;
        Ok(Self {
            value: if neg { -number.value } else { number.value },
            span: caret.span.start..number.span.end,
        })
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "^{}", self.value)
    }
}

/// An atom, optionally raised to a constant power, such as `sin(x)^2`.
///
/// Exponents must be numeric constants; `x^x` is rejected with
/// [`NonConstantExponent`](crate::parser::error::kind::NonConstantExponent). The exponent of `e` is handled
/// by [`NaturalExp`](super::NaturalExp) instead, so `e^2` is never a [`Power`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Power {
    /// The base.
    pub base: Atom,

    /// The constant exponent, if there is one.
    pub exponent: Option<Exponent>,

    /// The region of the source code that this power was parsed from.
    pub span: Range<usize>,
}

impl Power {
    /// Returns the span of the power.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Power {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let base = input.try_parse::<Atom>()?;
        let takes_exponent = !matches!(base, Atom::NaturalExp(_))
            && input.current_kind() == Some(TokenKind::Exp);
        let exponent = if takes_exponent {
            Some(input.try_parse::<Exponent>()?)
        } else {
            None
        };

        let start = base.span().start;
        let end = exponent.as_ref().map_or(base.span().end, |exponent| exponent.span.end);
        Ok(Self {
            base,
            exponent,
            span: start..end,
        })
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.base)?;
        if let Some(exponent) = &self.exponent {
            exponent.fmt(f)?;
        }
        Ok(())
    }
}
