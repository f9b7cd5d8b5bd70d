use crate::{
    parser::{
        error::{kind, Error},
        token::{Number, X},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A numeric literal, such as `2` or `3.25`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The value of the literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let number = input.try_parse::<Number>()?;
        let value = number.lexeme.parse::<f64>()
            .map_err(|_| Error::new(vec![number.span.clone()], kind::MalformedNumber {
                lexeme: number.lexeme.clone(),
            }))?;
        Ok(Self { value, span: number.span })
    }
}

impl fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A literal value: a number, or the variable `x`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// A numeric literal.
    Number(LitNum),

    /// The variable `x`, with the span it was parsed from.
    Variable(Range<usize>),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Number(num) => num.span.clone(),
            Literal::Variable(span) => span.clone(),
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        match input.current_kind() {
            Some(TokenKind::X) => input.try_parse::<X>().map(|x| Self::Variable(x.span)),
            Some(TokenKind::Number) => input.try_parse::<LitNum>().map(Self::Number),
            _ => Err(input.unexpected(&[TokenKind::X, TokenKind::Number])),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Number(num) => num.fmt(f),
            Literal::Variable(_) => write!(f, "x"),
        }
    }
}
