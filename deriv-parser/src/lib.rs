//! Lexer and parser for single-variable arithmetic expressions.
//!
//! The [`tokenizer`] module splits source text into [`Token`](tokenizer::Token)s, and the
//! [`parser`] module builds an abstract syntax tree out of them, with every node remembering the
//! region of the source code it came from. Errors carry the same spans, so they can be rendered as
//! rich diagnostics with [`ariadne`].
//!
//! ```
//! use deriv_parser::parser::{ast::Sum, Parser};
//!
//! let mut parser = Parser::new("sin(x) * e^-x").unwrap();
//! let sum = parser.try_parse_full::<Sum>().unwrap();
//! assert_eq!(sum.to_string(), "sin(x) * e^-x");
//! ```

pub mod parser;
pub mod tokenizer;
