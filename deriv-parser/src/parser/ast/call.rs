use crate::{
    parser::{
        ast::sum::Sum,
        error::Error,
        token::{CloseParen, OpenParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function that can be called by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Func {
    /// The natural logarithm, `ln`.
    Ln,

    /// The sine function, `sin`.
    Sin,

    /// The cosine function, `cos`.
    Cos,

    /// The tangent function, `tan`.
    Tan,
}

impl Func {
    /// The tokens that name a function.
    pub const FIRST: &'static [TokenKind] = &[
        TokenKind::Ln,
        TokenKind::Sin,
        TokenKind::Cos,
        TokenKind::Tan,
    ];

    /// Returns the name of the function as it is written in source code.
    pub fn name(&self) -> &'static str {
        match self {
            Func::Ln => "ln",
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A function call, such as `sin(x)`. Every function takes exactly one argument, which must be
/// parenthesized.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The function being called.
    pub func: Func,

    /// The argument to the function.
    pub arg: Box<Sum>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,
}

impl Call {
    /// Returns the span of the function call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.expect(Func::FIRST)?;
        let func = match name.kind {
            TokenKind::Ln => Func::Ln,
            TokenKind::Sin => Func::Sin,
            TokenKind::Cos => Func::Cos,
            _ => Func::Tan,
        };

        input.try_parse::<OpenParen>()?;
        let arg = input.try_parse::<Sum>()?;
        let close_paren = input.try_parse::<CloseParen>()?;

        Ok(Self {
            func,
            arg: Box::new(arg),
            span: name.span.start..close_paren.span.end,
        })
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.func)?;
        self.arg.fmt(f)?;
        write!(f, ")")
    }
}
