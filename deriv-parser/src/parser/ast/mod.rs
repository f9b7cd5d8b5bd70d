//! The abstract syntax tree produced by the [`Parser`](super::Parser).
//!
//! There is one node type per production of the grammar, and every node remembers the region of
//! the source code it was parsed from. The root of a parsed expression is a [`Sum`].

pub mod call;
pub mod literal;
pub mod natural_exp;
pub mod paren;
pub mod power;
pub mod product;
pub mod signed;
pub mod sum;

pub use call::{Call, Func};
pub use literal::{LitNum, Literal};
pub use natural_exp::NaturalExp;
pub use paren::Paren;
pub use power::{Exponent, Power};
pub use product::Product;
pub use signed::Signed;
pub use sum::Sum;

use crate::{
    parser::{error::Error, Parse, Parser},
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The smallest self-contained piece of an expression: a parenthesized expression, a function
/// call, a power of `e`, the variable, or a number.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Atom {
    /// A parenthesized expression, such as `(1 + x)`.
    Paren(Paren),

    /// A function call, such as `sin(x)`.
    Call(Call),

    /// Euler's number `e`, optionally raised to a power, such as `e^(2 * x)`.
    NaturalExp(NaturalExp),

    /// The variable `x` or a number.
    Literal(Literal),
}

impl Atom {
    /// The tokens that can begin an atom.
    pub const FIRST: &'static [TokenKind] = &[
        TokenKind::OpenParen,
        TokenKind::Ln,
        TokenKind::Sin,
        TokenKind::Cos,
        TokenKind::Tan,
        TokenKind::E,
        TokenKind::X,
        TokenKind::Number,
    ];

    /// Returns the span of the atom.
    pub fn span(&self) -> Range<usize> {
        match self {
            Atom::Paren(paren) => paren.span(),
            Atom::Call(call) => call.span(),
            Atom::NaturalExp(exp) => exp.span(),
            Atom::Literal(literal) => literal.span(),
        }
    }
}

impl Parse for Atom {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        match input.current_kind() {
            Some(TokenKind::OpenParen) => input.nested(Paren::parse).map(Self::Paren),
            Some(kind) if kind.is_func() => input.nested(Call::parse).map(Self::Call),
            Some(TokenKind::E) => input.nested(NaturalExp::parse).map(Self::NaturalExp),
            Some(TokenKind::X | TokenKind::Number) => Literal::parse(input).map(Self::Literal),
            _ => Err(input.unexpected(Self::FIRST)),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Atom::Paren(paren) => paren.fmt(f),
            Atom::Call(call) => call.fmt(f),
            Atom::NaturalExp(exp) => exp.fmt(f),
            Atom::Literal(literal) => literal.fmt(f),
        }
    }
}
