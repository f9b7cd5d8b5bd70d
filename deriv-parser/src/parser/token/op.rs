//! Structs to help parse the operators that join terms and factors.

use crate::{
    parser::{error::Error, Parse, Parser},
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The operation joining two terms of a sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TermOpKind {
    Add,
    Sub,
}

/// An operator that joins two terms, `+` or `-`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TermOp {
    /// The kind of operator.
    pub kind: TermOpKind,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

impl TermOp {
    /// The tokens that can begin a term operator.
    pub const FIRST: &'static [TokenKind] = &[TokenKind::Add, TokenKind::Sub];
}

impl Parse for TermOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.expect(Self::FIRST)?;
        let kind = match token.kind {
            TokenKind::Sub => TermOpKind::Sub,
            _ => TermOpKind::Add,
        };

        Ok(Self {
            kind,
            span: token.span,
        })
    }
}

impl fmt::Display for TermOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TermOpKind::Add => write!(f, "+"),
            TermOpKind::Sub => write!(f, "-"),
        }
    }
}

/// The operation joining two factors of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FactorOpKind {
    Mul,
    Div,
}

/// An operator that joins two factors, `*` or `/`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FactorOp {
    /// The kind of operator.
    pub kind: FactorOpKind,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

impl FactorOp {
    /// The tokens that can begin a factor operator.
    pub const FIRST: &'static [TokenKind] = &[TokenKind::Mul, TokenKind::Div];
}

impl Parse for FactorOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.expect(Self::FIRST)?;
        let kind = match token.kind {
            TokenKind::Div => FactorOpKind::Div,
            _ => FactorOpKind::Mul,
        };

        Ok(Self {
            kind,
            span: token.span,
        })
    }
}

impl fmt::Display for FactorOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            FactorOpKind::Mul => write!(f, "*"),
            FactorOpKind::Div => write!(f, "/"),
        }
    }
}
