use crate::symbolic::expr::Expr;

/// Any type that can be evaluated at a value of the variable `x`.
pub trait Eval {
    /// Evaluates the expression, substituting the given value for `x`.
    fn eval(&self, x: f64) -> f64;
}

impl Eval for Expr {
    fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Sum(terms) => terms.iter().fold(0.0, |acc, term| acc + term.eval(x)),
            Expr::Product(factors) => factors.iter().fold(1.0, |acc, factor| acc * factor.eval(x)),
            Expr::Constant(value) => *value,
            Expr::Variable => x,
            Expr::Power(base, exponent) => base.eval(x).powf(*exponent),
            Expr::Exp(arg) => arg.eval(x).exp(),
            Expr::Ln(arg) => arg.eval(x).ln(),
            Expr::Sin(arg) => arg.eval(x).sin(),
            Expr::Cos(arg) => arg.eval(x).cos(),
            Expr::Tan(arg) => arg.eval(x).tan(),
        }
    }
}

/// Evaluates the expression, substituting the given value for `x`.
pub fn evaluate(expr: &Expr, x: f64) -> f64 {
    expr.eval(x)
}
