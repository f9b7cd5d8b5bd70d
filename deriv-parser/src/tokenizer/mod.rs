pub mod token;

use crate::parser::error::{kind, Error};
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
///
/// This iterator is unchecked: whitespace is included, and unrecognized characters, identifiers,
/// and malformed numbers are produced as [`TokenKind::Symbol`], [`TokenKind::Name`], and
/// [`TokenKind::MalformedNumber`] respectively. Use [`tokenize_complete`] to reject them.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the meaningful tokens in the input, with whitespace
/// removed.
///
/// Returns an error pointing at the first unrecognized character, unrecognized identifier, or
/// malformed number in the input.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token]>, Error> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let lexeme = lexer.slice();

        match result {
            Ok(TokenKind::Whitespace) => continue,
            Ok(TokenKind::Symbol) | Err(_) => {
                let ch = lexeme.chars().next().unwrap_or_default();
                return Err(Error::new(vec![span], kind::UnrecognizedCharacter { ch }));
            },
            Ok(TokenKind::Name) => {
                return Err(Error::new(vec![span], kind::UnrecognizedIdentifier::new(lexeme)));
            },
            Ok(TokenKind::MalformedNumber) => {
                return Err(Error::new(vec![span], kind::MalformedNumber {
                    lexeme: lexeme.to_owned(),
                }));
            },
            Ok(kind) => tokens.push(Token { span, kind, lexeme }),
        }
    }

    tracing::trace!(count = tokens.len(), "tokenized input");
    Ok(tokens.into_boxed_slice())
}
