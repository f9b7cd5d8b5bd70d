use ariadne::Fmt;
use deriv_attrs::ErrorKind;
use deriv_error::{ErrorKind, EXPR};
use levenshtein::levenshtein;
use crate::tokenizer::TokenKind;

/// The names recognized by the tokenizer.
pub const KNOWN_NAMES: &[&str] = &["x", "e", "ln", "sin", "cos", "tan"];

/// Formats a list of token kinds as a human-readable list.
fn describe_all(kinds: &[TokenKind]) -> String {
    kinds.iter()
        .map(|kind| kind.describe())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A character that cannot begin any token was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unrecognized character `{}`", ch),
    labels = ["this character is not part of any expression"],
    help = "expressions may only contain numbers, `x`, `e`, `ln`, `sin`, `cos`, `tan`, parentheses, and `+ - * / ^`",
)]
pub struct UnrecognizedCharacter {
    /// The character that was found.
    pub ch: char,
}

/// A run of alphabetic characters that is not a known name was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unrecognized identifier `{}`", name),
    labels = ["I don't know what this name means"],
    help = if suggestions.is_empty() {
        format!("the only known names are: {}", KNOWN_NAMES.join(", ").fg(EXPR))
    } else {
        format!("did you mean: {}?", suggestions.join(", ").fg(EXPR))
    },
)]
pub struct UnrecognizedIdentifier {
    /// The identifier that was found.
    pub name: String,

    /// Known names that are similar to the identifier.
    pub suggestions: Vec<&'static str>,
}

impl UnrecognizedIdentifier {
    /// Creates the error for the given identifier, suggesting known names that are one edit
    /// away from it.
    pub fn new(name: &str) -> Self {
        let suggestions = KNOWN_NAMES.iter()
            .copied()
            .filter(|known| levenshtein(known, name) < 2)
            .collect();
        Self { name: name.to_owned(), suggestions }
    }
}

/// A number with a trailing decimal point and no fractional digits was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "malformed number",
    labels = [format!("`{}` has a decimal point but no digits after it", lexeme)],
    help = format!("add a digit after the decimal point, such as `{}0`", lexeme),
)]
pub struct MalformedNumber {
    /// The text of the malformed number, including the decimal point.
    pub lexeme: String,
}

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("expected one of: {}", describe_all(expected))],
    help = format!("you might need to add another {} here", "expression".fg(EXPR)),
)]
pub struct UnexpectedEof {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],
}

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
    help = "terms must be joined with an operator, such as `2 * x` instead of `2x`",
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", describe_all(expected))],
    help = format!("found {}", found.describe()),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// Something other than a number followed the `^` of a power.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent is not a constant",
    labels = ["expected a number here"],
    help = format!("write the power as {} instead", "e^(k * ln(f))".fg(EXPR)),
    note = "only `e` can be raised to an expression; other bases take a number such as `^2` or `^-0.5`",
)]
pub struct NonConstantExponent;

/// The expression is nested too deeply to be processed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = [format!("this is nested more than {} levels deep", max)],
    help = "try splitting the expression into smaller parts",
)]
pub struct NestingTooDeep {
    /// The maximum nesting depth.
    pub max: usize,
}
