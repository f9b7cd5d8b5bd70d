use logos::Logos;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    /// Digits followed by a decimal point with no digit after it, such as `3.`.
    #[regex(r"[0-9]+\.")]
    MalformedNumber,

    /// The free variable.
    #[token("x", priority = 3)]
    X,

    /// Euler's number, or the base of the natural exponential when followed by `^`.
    #[token("e", priority = 3)]
    E,

    #[token("ln")]
    Ln,

    #[token("sin")]
    Sin,

    #[token("cos")]
    Cos,

    #[token("tan")]
    Tan,

    /// Any other run of alphabetic characters. This is never accepted by the parser.
    #[regex(r"[a-zA-Z]+")]
    Name,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token names one of the supported functions (`ln`, `sin`, `cos`, or
    /// `tan`).
    pub fn is_func(self) -> bool {
        matches!(self, TokenKind::Ln | TokenKind::Sin | TokenKind::Cos | TokenKind::Tan)
    }

    /// Returns a short, human-readable description of the token kind, used in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Add => "`+`",
            TokenKind::Sub => "`-`",
            TokenKind::Mul => "`*`",
            TokenKind::Div => "`/`",
            TokenKind::Exp => "`^`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::Number | TokenKind::MalformedNumber => "number",
            TokenKind::X => "`x`",
            TokenKind::E => "`e`",
            TokenKind::Ln => "`ln`",
            TokenKind::Sin => "`sin`",
            TokenKind::Cos => "`cos`",
            TokenKind::Tan => "`tan`",
            TokenKind::Name => "name",
            TokenKind::Symbol => "symbol",
        }
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}
