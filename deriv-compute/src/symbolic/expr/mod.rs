//! A representation of mathematical expressions that is easier to manipulate than an AST.
//!
//! The [`Sum`](deriv_parser::parser::ast::Sum) type from `deriv_parser` mirrors the grammar of the
//! source code, complete with spans, subtraction, division and unary minus. That is convenient for
//! parsing and for reporting errors, but not for algebraic manipulation.
//!
//! This module defines a separate [`Expr`] with a closed set of node kinds. Subtraction, division
//! and negation are desugared away while converting from the AST:
//!
//! - `a - b` becomes `Sum([a, Product([-1, b])])`
//! - `a / b` becomes `Product([a, Power(b, -1)])`
//! - `-a` becomes `Product([-1, a])`
//!
//! so the only two combining operators left in the tree are [`Expr::Sum`] and [`Expr::Product`].
//! Every sum and every product in the source becomes its own node, even if it only has a single
//! term or factor; the [simplifier](crate::symbolic::simplify()) decides what to fold and flatten.
//!
//! ```
//! use deriv_compute::symbolic::expr::Expr;
//! use deriv_parser::parser::{ast::Sum, Parser};
//!
//! let mut parser = Parser::new("x - 2").unwrap();
//! let ast = parser.try_parse_full::<Sum>().unwrap();
//!
//! let expr = Expr::from(ast);
//! assert_eq!(expr, Expr::Sum(vec![
//!     Expr::Product(vec![Expr::Variable]),
//!     Expr::Product(vec![
//!         Expr::Constant(-1.0),
//!         Expr::Product(vec![Expr::Constant(2.0)]),
//!     ]),
//! ]));
//! ```
//!
//! # Strict equality
//!
//! The [`PartialEq`] and [`Eq`] implementations for [`Expr`] implement **strict equality**: two
//! expressions are equal if they are the same kind of node, with strictly equal children in the
//! **same order**, and constants with the same value. Any two `NaN` constants are equal to each
//! other, so that an expression is always equal to itself.
//!
//! Strict equality is not semantic equality: `x + 1` and `1 + x` are not strictly equal.

mod iter;

use deriv_parser::parser::{
    ast::{self, Atom, Literal, NaturalExp, Power, Product, Signed, Sum},
    token::op::{FactorOpKind, TermOpKind},
    Precedence,
};
use iter::ExprIter;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of an [`Expr`] node, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    Sum,
    Product,
    Constant,
    Variable,
    Power,
    Exp,
    Ln,
    Sin,
    Cos,
    Tan,
}

/// A function of a single expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Func {
    /// Euler's number raised to the argument, `e^x`.
    Exp,

    /// The natural logarithm, `ln(x)`.
    Ln,

    /// The sine function, `sin(x)`.
    Sin,

    /// The cosine function, `cos(x)`.
    Cos,

    /// The tangent function, `tan(x)`.
    Tan,
}

impl Func {
    /// Returns the name of the function.
    pub fn name(&self) -> &'static str {
        match self {
            Func::Exp => "exp",
            Func::Ln => "ln",
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
        }
    }

    /// Applies the function to a number.
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Func::Exp => value.exp(),
            Func::Ln => value.ln(),
            Func::Sin => value.sin(),
            Func::Cos => value.cos(),
            Func::Tan => value.tan(),
        }
    }

    /// Wraps the given argument in a call to this function.
    pub fn wrap(&self, arg: Expr) -> Expr {
        let arg = Box::new(arg);
        match self {
            Func::Exp => Expr::Exp(arg),
            Func::Ln => Expr::Ln(arg),
            Func::Sin => Expr::Sin(arg),
            Func::Cos => Expr::Cos(arg),
            Func::Tan => Expr::Tan(arg),
        }
    }
}

impl From<ast::Func> for Func {
    fn from(func: ast::Func) -> Self {
        match func {
            ast::Func::Ln => Func::Ln,
            ast::Func::Sin => Func::Sin,
            ast::Func::Cos => Func::Cos,
            ast::Func::Tan => Func::Tan,
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A mathematical expression in the single variable `x`.
///
/// This type should be distinguished from the [`Sum`](deriv_parser::parser::ast::Sum) AST node
/// produced by [`deriv_parser`]. See the [module-level documentation](self) for how one is
/// converted into the other.
///
/// Expressions are never mutated in place; every operation in this crate returns a new tree.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// Multiple terms added together.
    Sum(Vec<Expr>),

    /// Multiple factors multiplied together.
    Product(Vec<Expr>),

    /// A real number.
    Constant(f64),

    /// The variable, `x`.
    Variable,

    /// An expression raised to a constant power.
    Power(Box<Expr>, f64),

    /// Euler's number raised to an expression.
    Exp(Box<Expr>),

    /// The natural logarithm of an expression.
    Ln(Box<Expr>),

    /// The sine of an expression.
    Sin(Box<Expr>),

    /// The cosine of an expression.
    Cos(Box<Expr>),

    /// The tangent of an expression.
    Tan(Box<Expr>),
}

impl Expr {
    /// Returns the kind of this node.
    pub fn kind(&self) -> Kind {
        match self {
            Expr::Sum(_) => Kind::Sum,
            Expr::Product(_) => Kind::Product,
            Expr::Constant(_) => Kind::Constant,
            Expr::Variable => Kind::Variable,
            Expr::Power(..) => Kind::Power,
            Expr::Exp(_) => Kind::Exp,
            Expr::Ln(_) => Kind::Ln,
            Expr::Sin(_) => Kind::Sin,
            Expr::Cos(_) => Kind::Cos,
            Expr::Tan(_) => Kind::Tan,
        }
    }

    /// Returns the children of this node, in order.
    ///
    /// These are the terms of a sum, the factors of a product, the base of a power, or the
    /// argument of a function. Constants and the variable have no children.
    pub fn children(&self) -> &[Expr] {
        match self {
            Expr::Sum(children) | Expr::Product(children) => children.as_slice(),
            Expr::Constant(_) | Expr::Variable => &[],
            Expr::Power(base, _) => std::slice::from_ref(&**base),
            Expr::Exp(arg)
                | Expr::Ln(arg)
                | Expr::Sin(arg)
                | Expr::Cos(arg)
                | Expr::Tan(arg) => std::slice::from_ref(&**arg),
        }
    }

    /// If this node is a [`Expr::Power`], returns its exponent.
    pub fn exponent(&self) -> Option<f64> {
        match self {
            Expr::Power(_, exponent) => Some(*exponent),
            _ => None,
        }
    }

    /// If this node is a [`Expr::Constant`], returns its value.
    pub fn value(&self) -> Option<f64> {
        match self {
            Expr::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// If this node is a function of a single argument, returns the function.
    pub fn func(&self) -> Option<Func> {
        self.call().map(|(func, _)| func)
    }

    /// If this node is a function of a single argument, returns the function and its argument.
    pub fn call(&self) -> Option<(Func, &Expr)> {
        match self {
            Expr::Exp(arg) => Some((Func::Exp, arg)),
            Expr::Ln(arg) => Some((Func::Ln, arg)),
            Expr::Sin(arg) => Some((Func::Sin, arg)),
            Expr::Cos(arg) => Some((Func::Cos, arg)),
            Expr::Tan(arg) => Some((Func::Tan, arg)),
            _ => None,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    ///
    /// The iterator keeps its own stack, so it can traverse trees of any depth.
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns the precedence of this node when it is rendered as text, used to decide where
    /// parentheses are needed.
    fn precedence(&self) -> Precedence {
        match self {
            Expr::Sum(_) => Precedence::Term,
            Expr::Product(_) => Precedence::Factor,
            Expr::Constant(value) if value.is_sign_negative() => Precedence::Neg,
            Expr::Power(..) | Expr::Exp(_) => Precedence::Exp,
            Expr::Constant(_)
                | Expr::Variable
                | Expr::Ln(_)
                | Expr::Sin(_)
                | Expr::Cos(_)
                | Expr::Tan(_) => Precedence::Atom,
        }
    }

    /// Formats the expression, wrapping it in parentheses if its precedence is not higher than
    /// the given precedence.
    fn fmt_operand(&self, f: &mut fmt::Formatter, outer: Precedence) -> fmt::Result {
        if self.precedence() <= outer {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

/// Returns true if the two numbers are the same, treating all `NaN`s as equal.
fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Expr::Sum(lhs), Expr::Sum(rhs)) | (Expr::Product(lhs), Expr::Product(rhs)) => {
                lhs == rhs
            },
            (Expr::Constant(lhs), Expr::Constant(rhs)) => same_value(*lhs, *rhs),
            (Expr::Variable, Expr::Variable) => true,
            (Expr::Power(lhs, lhs_exp), Expr::Power(rhs, rhs_exp)) => {
                same_value(*lhs_exp, *rhs_exp) && lhs == rhs
            },
            (Expr::Exp(lhs), Expr::Exp(rhs))
                | (Expr::Ln(lhs), Expr::Ln(rhs))
                | (Expr::Sin(lhs), Expr::Sin(rhs))
                | (Expr::Cos(lhs), Expr::Cos(rhs))
                | (Expr::Tan(lhs), Expr::Tan(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

/// Strict equality is reflexive, even for `NaN` constants.
impl Eq for Expr {}

/// Renders the expression in a form that the parser accepts, adding parentheses only where they
/// are needed to keep the structure of the tree. Non-finite constants are rendered as `NaN`,
/// `inf` and `-inf`, which do not parse.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Sum(terms) => {
                let mut iter = terms.iter();
                match iter.next() {
                    Some(term) => term.fmt_operand(f, Precedence::Term)?,
                    None => return write!(f, "0"),
                }
                for term in iter {
                    write!(f, " + ")?;
                    term.fmt_operand(f, Precedence::Term)?;
                }
                Ok(())
            },
            Expr::Product(factors) => {
                let mut iter = factors.iter();
                match iter.next() {
                    Some(factor) => factor.fmt_operand(f, Precedence::Factor)?,
                    None => return write!(f, "1"),
                }
                for factor in iter {
                    write!(f, " * ")?;
                    factor.fmt_operand(f, Precedence::Factor)?;
                }
                Ok(())
            },
            Expr::Constant(value) => write!(f, "{}", value),
            Expr::Variable => write!(f, "x"),
            Expr::Power(base, exponent) => {
                base.fmt_operand(f, Precedence::Exp)?;
                write!(f, "^{}", exponent)
            },
            Expr::Exp(arg) => {
                write!(f, "e^")?;
                arg.fmt_operand(f, Precedence::Factor)
            },
            Expr::Ln(arg) => write!(f, "ln({})", arg),
            Expr::Sin(arg) => write!(f, "sin({})", arg),
            Expr::Cos(arg) => write!(f, "cos({})", arg),
            Expr::Tan(arg) => write!(f, "tan({})", arg),
        }
    }
}

impl From<Sum> for Expr {
    fn from(sum: Sum) -> Self {
        let mut terms = Vec::with_capacity(sum.rest.len() + 1);
        terms.push(Expr::from(sum.first));
        for (op, term) in sum.rest {
            let term = Expr::from(term);
            match op.kind {
                TermOpKind::Add => terms.push(term),
                TermOpKind::Sub => terms.push(Expr::Product(vec![Expr::Constant(-1.0), term])),
            }
        }
        Expr::Sum(terms)
    }
}

impl From<Product> for Expr {
    fn from(product: Product) -> Self {
        let mut factors = Vec::with_capacity(product.rest.len() + 1);
        factors.push(Expr::from(product.first));
        for (op, factor) in product.rest {
            let factor = Expr::from(factor);
            match op.kind {
                FactorOpKind::Mul => factors.push(factor),
                FactorOpKind::Div => factors.push(Expr::Power(Box::new(factor), -1.0)),
            }
        }
        Expr::Product(factors)
    }
}

impl From<Signed> for Expr {
    fn from(signed: Signed) -> Self {
        let operand = Expr::from(signed.operand);
        if signed.neg.is_some() {
            Expr::Product(vec![Expr::Constant(-1.0), operand])
        } else {
            operand
        }
    }
}

impl From<Power> for Expr {
    fn from(power: Power) -> Self {
        let base = Expr::from(power.base);
        match power.exponent {
            Some(exponent) => Expr::Power(Box::new(base), exponent.value),
            None => base,
        }
    }
}

impl From<Atom> for Expr {
    fn from(atom: Atom) -> Self {
        match atom {
            Atom::Paren(paren) => Expr::from(*paren.expr),
            Atom::Call(call) => Func::from(call.func).wrap(Expr::from(*call.arg)),
            Atom::NaturalExp(NaturalExp { exponent, .. }) => {
                // a bare `e` is `e^1`
                let exponent = exponent.map_or(Expr::Constant(1.0), |signed| Expr::from(*signed));
                Expr::Exp(Box::new(exponent))
            },
            Atom::Literal(Literal::Number(num)) => Expr::Constant(num.value),
            Atom::Literal(Literal::Variable(_)) => Expr::Variable,
        }
    }
}

#[cfg(test)]
mod tests {
    use deriv_parser::parser::Parser;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Parses and lowers the source, without simplifying it.
    fn lower(source: &str) -> Expr {
        let mut parser = Parser::new(source).unwrap();
        Expr::from(parser.try_parse_full::<Sum>().unwrap())
    }

    /// Wraps the given expression in a single-term sum of a single-factor product, the way every
    /// term is lowered.
    fn term(expr: Expr) -> Expr {
        Expr::Product(vec![expr])
    }

    #[test]
    fn lower_constant() {
        assert_eq!(lower("2.5"), Expr::Sum(vec![term(Expr::Constant(2.5))]));
    }

    #[test]
    fn lower_subtraction() {
        assert_eq!(lower("x - 3"), Expr::Sum(vec![
            term(Expr::Variable),
            Expr::Product(vec![Expr::Constant(-1.0), term(Expr::Constant(3.0))]),
        ]));
    }

    #[test]
    fn lower_division() {
        assert_eq!(lower("1 / x"), Expr::Sum(vec![
            Expr::Product(vec![
                Expr::Constant(1.0),
                Expr::Power(Box::new(Expr::Variable), -1.0),
            ]),
        ]));
    }

    #[test]
    fn lower_unary_minus() {
        assert_eq!(lower("-x"), Expr::Sum(vec![
            term(Expr::Product(vec![Expr::Constant(-1.0), Expr::Variable])),
        ]));
    }

    #[test]
    fn lower_parentheses() {
        assert_eq!(lower("(5+x)*4"), Expr::Sum(vec![
            Expr::Product(vec![
                Expr::Sum(vec![term(Expr::Constant(5.0)), term(Expr::Variable)]),
                Expr::Constant(4.0),
            ]),
        ]));
    }

    #[test]
    fn lower_functions() {
        assert_eq!(lower("tan(x)"), Expr::Sum(vec![
            term(Expr::Tan(Box::new(Expr::Sum(vec![term(Expr::Variable)])))),
        ]));
        assert_eq!(lower("ln(x)").children()[0].children()[0].kind(), Kind::Ln);
    }

    #[test]
    fn lower_powers() {
        assert_eq!(lower("x^2"), Expr::Sum(vec![
            term(Expr::Power(Box::new(Expr::Variable), 2.0)),
        ]));
        assert_eq!(lower("e"), Expr::Sum(vec![
            term(Expr::Exp(Box::new(Expr::Constant(1.0)))),
        ]));
        assert_eq!(lower("e^-x"), Expr::Sum(vec![
            term(Expr::Exp(Box::new(Expr::Product(vec![Expr::Constant(-1.0), Expr::Variable])))),
        ]));
    }

    #[test]
    fn traversal_contract() {
        let expr = Expr::Product(vec![
            Expr::Power(Box::new(Expr::Variable), 3.0),
            Expr::Sin(Box::new(Expr::Variable)),
            Expr::Constant(2.0),
        ]);

        assert_eq!(expr.kind(), Kind::Product);
        assert_eq!(expr.children().len(), 3);
        assert_eq!(expr.children()[0].exponent(), Some(3.0));
        assert_eq!(expr.children()[0].children(), &[Expr::Variable]);
        assert_eq!(expr.children()[1].func(), Some(Func::Sin));
        assert_eq!(expr.children()[2].value(), Some(2.0));
        assert!(expr.children()[2].children().is_empty());
        assert_eq!(expr.exponent(), None);
        assert_eq!(expr.value(), None);
        assert_eq!(expr.func(), None);
    }

    #[test]
    fn post_order() {
        let expr = Expr::Sum(vec![
            Expr::Product(vec![Expr::Constant(2.0), Expr::Variable]),
            Expr::Cos(Box::new(Expr::Variable)),
        ]);

        let kinds = expr.post_order_iter().map(Expr::kind).collect::<Vec<_>>();
        assert_eq!(kinds, vec![
            Kind::Constant,
            Kind::Variable,
            Kind::Product,
            Kind::Variable,
            Kind::Cos,
            Kind::Sum,
        ]);
        assert_eq!(expr.node_count(), 6);
    }

    #[test]
    fn post_order_deep_tree() {
        let mut expr = Expr::Variable;
        for _ in 0..100_000 {
            expr = Expr::Sin(Box::new(expr));
        }
        assert_eq!(expr.node_count(), 100_001);

        // dropping a tree this deep recursively would overflow the stack
        let mut expr = Some(expr);
        while let Some(Expr::Sin(arg)) = expr.take() {
            expr = Some(*arg);
        }
    }

    #[test]
    fn strict_equality() {
        let nan = Expr::Constant(f64::NAN);
        assert_eq!(nan, nan.clone());

        let a = Expr::Sum(vec![Expr::Variable, Expr::Constant(1.0)]);
        let b = Expr::Sum(vec![Expr::Constant(1.0), Expr::Variable]);
        assert_ne!(a, b);
        assert_ne!(Expr::Sum(vec![Expr::Variable]), Expr::Product(vec![Expr::Variable]));
        assert_ne!(
            Expr::Power(Box::new(Expr::Variable), 2.0),
            Expr::Power(Box::new(Expr::Variable), 3.0),
        );
    }

    #[test]
    fn display() {
        let expr = Expr::Sum(vec![
            Expr::Product(vec![
                Expr::Sum(vec![Expr::Variable, Expr::Constant(5.0)]),
                Expr::Constant(-4.0),
            ]),
            Expr::Power(Box::new(Expr::Sin(Box::new(Expr::Variable))), 2.0),
            Expr::Power(Box::new(Expr::Constant(-2.0)), 0.5),
            Expr::Exp(Box::new(Expr::Product(vec![Expr::Constant(2.0), Expr::Variable]))),
            Expr::Ln(Box::new(Expr::Sum(vec![Expr::Variable, Expr::Constant(1.0)]))),
        ]);
        assert_eq!(
            expr.to_string(),
            "(x + 5) * -4 + sin(x)^2 + (-2)^0.5 + e^(2 * x) + ln(x + 1)",
        );
    }

    #[test]
    fn display_nested_powers() {
        let expr = Expr::Power(Box::new(Expr::Power(Box::new(Expr::Variable), 2.0)), -1.0);
        assert_eq!(expr.to_string(), "(x^2)^-1");

        let expr = Expr::Power(Box::new(Expr::Exp(Box::new(Expr::Variable))), 3.0);
        assert_eq!(expr.to_string(), "(e^x)^3");

        let expr = Expr::Exp(Box::new(Expr::Exp(Box::new(Expr::Constant(-1.0)))));
        assert_eq!(expr.to_string(), "e^e^-1");
    }
}
