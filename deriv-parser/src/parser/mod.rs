pub mod ast;
pub mod error;
pub mod token;

use deriv_error::ErrorKind;
use error::{Error, kind};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// The maximum number of nested parentheses, function calls, and exponents of `e` that the
/// parser accepts.
///
/// Every algorithm that walks an expression tree recurses once per level of nesting, so bounding
/// the nesting of parsed input bounds the stack depth used by all of them. Trees that are built by
/// hand rather than parsed are not subject to this limit.
pub const MAX_DEPTH: usize = 256;

/// A high-level parser for expressions. This is the type to use to parse an arbitrary piece of
/// text into an abstract syntax tree.
///
/// The grammar is parsed by recursive descent, left-to-right, with a single token of lookahead
/// and no backtracking:
///
/// ```text
/// Sum     := Product (('+' | '-') Product)*
/// Product := Signed (('*' | '/') Signed)*
/// Signed  := '-'? Power
/// Power   := Atom ('^' '-'? Number)?
/// Atom    := '(' Sum ')' | Func '(' Sum ')' | 'e' ('^' Signed)? | 'x' | Number
/// Func    := 'ln' | 'sin' | 'cos' | 'tan'
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The length of the source code, used to point at the end of the source.
    source_len: usize,

    /// The current nesting depth.
    depth: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    ///
    /// Returns an error if the source contains an unrecognized character, an unrecognized
    /// identifier, or a malformed number.
    pub fn new(source: &'source str) -> Result<Self, Error> {
        Ok(Self {
            tokens: tokenize_complete(source)?,
            cursor: 0,
            source_len: source.len(),
            depth: 0,
        })
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.source_len..self.source_len
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the kind of the current token. The cursor is not moved. Returns [`None`] if the
    /// cursor is at the end of the stream.
    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Returns true if the cursor is at the end of the stream.
    pub fn is_eof(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Creates the error for finding the current token (or the end of the stream) where one of
    /// the `expected` token kinds should have been.
    pub fn unexpected(&self, expected: &'static [TokenKind]) -> Error {
        match self.current_token() {
            Some(token) => Error::new(vec![token.span.clone()], kind::UnexpectedToken {
                expected,
                found: token.kind,
            }),
            None => self.error(kind::UnexpectedEof { expected }),
        }
    }

    /// Consumes the current token if it is one of the `expected` kinds, returning it. Otherwise,
    /// the cursor is not moved and an error is returned.
    pub fn expect(&mut self, expected: &'static [TokenKind]) -> Result<Token<'source>, Error> {
        match self.current_token() {
            Some(token) if expected.contains(&token.kind) => {
                // cloning is cheap: only Range<_> is cloned
                let token = token.clone();
                self.cursor += 1;
                Ok(token)
            },
            _ => Err(self.unexpected(expected)),
        }
    }

    /// Consumes the current token if it is of the given kind, returning true if it was consumed.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.current_kind() == Some(kind) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Parses a value one level of nesting deeper than the current one. Returns an error instead
    /// if doing so would exceed [`MAX_DEPTH`].
    pub fn nested<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Self) -> Result<T, Error>,
    {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(kind::NestingTooDeep { max: MAX_DEPTH }));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Parses a value from the given stream of tokens.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        let start = self.cursor;
        match T::parse(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        if self.is_eof() {
            Ok(value)
        } else {
            Err(self.error(kind::ExpectedEof))
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of unary subtraction (`-`).
    Neg,

    /// Precedence of exponentiation (`^`).
    Exp,

    /// Precedence of an atom, such as a number or a function call, which never needs to be
    /// parenthesized.
    Atom,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::{
        call::{Call, Func},
        literal::{Literal, LitNum},
        natural_exp::NaturalExp,
        paren::Paren,
        power::{Exponent, Power},
        product::Product,
        signed::Signed,
        sum::Sum,
        Atom,
    };
    use token::op::{FactorOp, FactorOpKind, TermOp, TermOpKind};

    /// Parses the full source as a [`Sum`].
    fn parse(source: &str) -> Result<Sum, Error> {
        Parser::new(source)?.try_parse_full::<Sum>()
    }

    /// Wraps a single atom all the way up to a [`Sum`].
    fn atom_sum(atom: Atom, span: Range<usize>) -> Sum {
        let power = Power { base: atom, exponent: None, span: span.clone() };
        let signed = Signed { neg: None, operand: power, span: span.clone() };
        let product = Product { first: signed, rest: Vec::new(), span: span.clone() };
        Sum { first: product, rest: Vec::new(), span }
    }

    #[test]
    fn literal_int() {
        assert_eq!(parse("16").unwrap(), atom_sum(
            Atom::Literal(Literal::Number(LitNum { value: 16.0, span: 0..2 })),
            0..2,
        ));
    }

    #[test]
    fn literal_float() {
        assert_eq!(parse("3.14").unwrap(), atom_sum(
            Atom::Literal(Literal::Number(LitNum { value: 3.14, span: 0..4 })),
            0..4,
        ));
    }

    #[test]
    fn variable() {
        assert_eq!(parse(" x ").unwrap(), atom_sum(Atom::Literal(Literal::Variable(1..2)), 1..2));
    }

    #[test]
    fn function_call() {
        let sum = parse("sin(x)").unwrap();
        let inner = atom_sum(Atom::Literal(Literal::Variable(4..5)), 4..5);
        assert_eq!(sum, atom_sum(Atom::Call(Call {
            func: Func::Sin,
            arg: Box::new(inner),
            span: 0..6,
        }), 0..6));
    }

    #[test]
    fn sum_and_difference() {
        let sum = parse("1 + x - 2").unwrap();
        assert_eq!(sum.rest.len(), 2);
        assert_eq!(sum.rest[0].0, TermOp { kind: TermOpKind::Add, span: 2..3 });
        assert_eq!(sum.rest[1].0, TermOp { kind: TermOpKind::Sub, span: 6..7 });
        assert_eq!(sum.span, 0..9);
    }

    #[test]
    fn product_binds_tighter_than_sum() {
        let sum = parse("1 + 2 * x / 3").unwrap();
        assert_eq!(sum.rest.len(), 1);

        let product = &sum.rest[0].1;
        assert_eq!(product.span, 4..13);
        assert_eq!(
            product.rest.iter().map(|(op, _)| op.clone()).collect::<Vec<_>>(),
            vec![
                FactorOp { kind: FactorOpKind::Mul, span: 6..7 },
                FactorOp { kind: FactorOpKind::Div, span: 10..11 },
            ],
        );
    }

    #[test]
    fn parenthesized() {
        let sum = parse("(5+x)*4").unwrap();
        let product = &sum.first;
        assert_eq!(product.rest.len(), 1);
        match &product.first.operand.base {
            Atom::Paren(Paren { expr, span }) => {
                assert_eq!(span, &(0..5));
                assert_eq!(expr.rest.len(), 1);
            },
            other => panic!("expected parenthesized expression, found {:?}", other),
        }
    }

    #[test]
    fn unary_minus() {
        let sum = parse("-x * 2").unwrap();
        assert_eq!(sum.first.first.neg, Some(0..1));
        assert_eq!(sum.first.first.span, 0..2);
    }

    #[test]
    fn power_with_constant_exponent() {
        let sum = parse("x ^ -2.5").unwrap();
        assert_eq!(sum.first.first.operand.exponent, Some(Exponent { value: -2.5, span: 2..8 }));
    }

    #[test]
    fn negated_power() {
        // `-x^2` is `-(x^2)`, not `(-x)^2`
        let sum = parse("-x^2").unwrap();
        let signed = &sum.first.first;
        assert_eq!(signed.neg, Some(0..1));
        assert_eq!(signed.operand.exponent, Some(Exponent { value: 2.0, span: 2..4 }));
    }

    #[test]
    fn natural_exp() {
        let sum = parse("e^x").unwrap();
        match &sum.first.first.operand.base {
            Atom::NaturalExp(NaturalExp { exponent: Some(exponent), span }) => {
                assert_eq!(span, &(0..3));
                assert_eq!(exponent.span, 2..3);
            },
            other => panic!("expected natural exponential, found {:?}", other),
        }
    }

    #[test]
    fn bare_e() {
        let sum = parse("e").unwrap();
        assert_eq!(sum, atom_sum(Atom::NaturalExp(NaturalExp { exponent: None, span: 0..1 }), 0..1));
    }

    #[test]
    fn display_normalizes_spacing() {
        let sum = parse("sin( (5+x)*4 )-e^-x/ln(x)^2").unwrap();
        assert_eq!(sum.to_string(), "sin((5 + x) * 4) - e^-x / ln(x)^2");
    }

    #[test]
    fn trailing_operator() {
        let err = parse("2+").unwrap_err();
        assert_eq!(err.spans, vec![2..2]);
        assert!(err.is::<kind::UnexpectedEof>());
    }

    #[test]
    fn empty_input() {
        let err = parse("").unwrap_err();
        assert_eq!(err.spans, vec![0..0]);
        assert!(err.is::<kind::UnexpectedEof>());
    }

    #[test]
    fn unclosed_paren() {
        let err = parse("(x + 1").unwrap_err();
        assert_eq!(err.spans, vec![6..6]);
        assert_eq!(
            err.downcast_ref::<kind::UnexpectedEof>(),
            Some(&kind::UnexpectedEof { expected: &[TokenKind::CloseParen] }),
        );
    }

    #[test]
    fn unexpected_token() {
        let err = parse("2 * )").unwrap_err();
        assert_eq!(err.spans, vec![4..5]);
        let kind = err.downcast_ref::<kind::UnexpectedToken>().unwrap();
        assert_eq!(kind.found, TokenKind::CloseParen);
        assert!(kind.expected.contains(&TokenKind::X));
        assert!(kind.expected.contains(&TokenKind::Number));
    }

    #[test]
    fn function_requires_parentheses() {
        let err = parse("sin x").unwrap_err();
        assert_eq!(
            err.downcast_ref::<kind::UnexpectedToken>(),
            Some(&kind::UnexpectedToken { expected: &[TokenKind::OpenParen], found: TokenKind::X }),
        );
    }

    #[test]
    fn variable_exponent_rejected() {
        let err = parse("x^x").unwrap_err();
        assert_eq!(err.spans, vec![2..3]);
        assert!(err.is::<kind::NonConstantExponent>());

        let err = parse("sin(x)^-(2)").unwrap_err();
        assert_eq!(err.spans, vec![8..9]);
        assert!(err.is::<kind::NonConstantExponent>());

        let err = parse("x^").unwrap_err();
        assert_eq!(err.spans, vec![2..2]);
        assert!(err.is::<kind::UnexpectedEof>());
    }

    #[test]
    fn trailing_input() {
        let err = parse("2x").unwrap_err();
        assert_eq!(err.spans, vec![1..2]);
        assert!(err.is::<kind::ExpectedEof>());

        let err = parse("(x))").unwrap_err();
        assert_eq!(err.spans, vec![3..4]);
        assert!(err.is::<kind::ExpectedEof>());
    }

    #[test]
    fn double_negation_rejected() {
        let err = parse("--x").unwrap_err();
        assert_eq!(err.spans, vec![1..2]);
        assert!(err.is::<kind::UnexpectedToken>());
    }

    #[test]
    fn lexer_errors_surface() {
        assert!(Parser::new("x # 2").unwrap_err().is::<kind::UnrecognizedCharacter>());
        assert!(Parser::new("y + 2").unwrap_err().is::<kind::UnrecognizedIdentifier>());
        assert!(Parser::new("2. * x").unwrap_err().is::<kind::MalformedNumber>());
    }

    #[test]
    fn nesting_limit() {
        let ok = format!("{}x{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert!(parse(&ok).is_ok());

        let deep = format!("{}x{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        let err = parse(&deep).unwrap_err();
        assert_eq!(err.spans, vec![MAX_DEPTH..MAX_DEPTH + 1]);
        assert_eq!(
            err.downcast_ref::<kind::NestingTooDeep>(),
            Some(&kind::NestingTooDeep { max: MAX_DEPTH }),
        );
    }

    #[test]
    fn report_mentions_expected_tokens() {
        let source = "sin(x * )";
        let err = parse(source).unwrap_err();
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", ariadne::Source::from(source)), &mut buf)
            .unwrap();
        let text = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();
        assert!(text.contains("unexpected token"));
        assert!(text.contains("found `)`"));
    }

    #[test]
    fn report_includes_note() {
        let source = "x^x";
        let err = parse(source).unwrap_err();
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", ariadne::Source::from(source)), &mut buf)
            .unwrap();
        let text = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();
        assert!(text.contains("exponent is not a constant"));
        assert!(text.contains("Note: only `e` can be raised to an expression"));
    }

    #[test]
    fn precedence_order() {
        let order = [
            Precedence::Term,
            Precedence::Factor,
            Precedence::Neg,
            Precedence::Exp,
            Precedence::Atom,
        ];
        assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
