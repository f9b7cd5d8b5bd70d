//! Symbolic differentiation with respect to `x`.
//!
//! Every kind of node has its own rule. The rules for composite nodes build the derivative out of
//! the derivatives of the node's children, then [simplify](super::simplify()) it, so the result of
//! [`derivative`] is always simplified and repeated differentiation does not grow the tree without
//! bound.

use super::{expr::Expr, simplify::simplify};
use tracing::debug;

/// `(f + g)' = f' + g'`
fn sum_rule(terms: &[Expr]) -> Expr {
    simplify(&Expr::Sum(terms.iter().map(differentiate).collect()))
}

/// `(f * g * h)' = f' * g * h + f * g' * h + f * g * h'`
fn product_rule(factors: &[Expr]) -> Expr {
    let terms = (0..factors.len())
        .map(|derivative_index| {
            let product = factors.iter()
                .enumerate()
                .map(|(index, factor)| if index == derivative_index {
                    differentiate(factor)
                } else {
                    factor.clone()
                })
                .collect();
            Expr::Product(product)
        })
        .collect();
    simplify(&Expr::Sum(terms))
}

/// `(f^k)' = f' * k * f^(k - 1)`, and `(f^1)' = f'`
///
/// For `k = 1` this returns the derivative of the base, not the simplified base itself.
fn power_rule(base: &Expr, exponent: f64) -> Expr {
    if exponent == 1.0 {
        return differentiate(base);
    }

    simplify(&Expr::Product(vec![
        differentiate(base),
        Expr::Product(vec![
            Expr::Constant(exponent),
            Expr::Power(Box::new(base.clone()), exponent - 1.0),
        ]),
    ]))
}

/// Differentiates the expression without logging.
fn differentiate(expr: &Expr) -> Expr {
    match expr {
        Expr::Sum(terms) => sum_rule(terms),
        Expr::Product(factors) => product_rule(factors),
        Expr::Constant(_) => Expr::Constant(0.0),
        Expr::Variable => Expr::Constant(1.0),
        Expr::Power(base, exponent) => power_rule(base, *exponent),

        // (e^g)' = g' * e^g
        Expr::Exp(arg) => simplify(&Expr::Product(vec![
            differentiate(arg),
            Expr::Exp(arg.clone()),
        ])),

        // ln(g)' = g' * g^-1
        Expr::Ln(arg) => simplify(&Expr::Product(vec![
            differentiate(arg),
            Expr::Power(arg.clone(), -1.0),
        ])),

        // sin(g)' = cos(g) * g'
        Expr::Sin(arg) => simplify(&Expr::Product(vec![
            Expr::Cos(arg.clone()),
            differentiate(arg),
        ])),

        // cos(g)' = -sin(g) * g'
        Expr::Cos(arg) => simplify(&Expr::Product(vec![
            Expr::Product(vec![Expr::Constant(-1.0), Expr::Sin(arg.clone())]),
            differentiate(arg),
        ])),

        // tan(g)' = cos(g)^2 * g'
        //
        // this is not the true derivative of tan, which is g' / cos(g)^2
        Expr::Tan(arg) => simplify(&Expr::Product(vec![
            Expr::Power(Box::new(Expr::Cos(arg.clone())), 2.0),
            differentiate(arg),
        ])),
    }
}

/// Computes the derivative of the given expression with respect to `x`.
///
/// The returned expression is simplified. Differentiation never fails: every kind of node has a
/// derivative, although it may be undefined for some values of `x` (such as the derivative of
/// `ln(x)` at `x = 0`), which shows up as a non-finite value when it is evaluated.
pub fn derivative(expr: &Expr) -> Expr {
    let result = differentiate(expr);
    debug!(
        before = expr.node_count(),
        after = result.node_count(),
        "differentiated expression",
    );
    result
}

/// Computes the `order`-th derivative of the given expression with respect to `x`.
///
/// The zeroth derivative is the expression itself, unchanged.
pub fn nth_derivative(expr: &Expr, order: usize) -> Expr {
    let mut result = expr.clone();
    for _ in 0..order {
        result = derivative(&result);
    }
    result
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use crate::{numerical::eval::evaluate, parse, symbolic::simplify};
    use pretty_assertions::assert_eq;
    use rand::Rng;
    use super::*;

    /// Approximates the derivative of the expression at `x` with a central finite difference.
    fn finite_difference(expr: &Expr, x: f64) -> f64 {
        const DX: f64 = 1e-6;
        (evaluate(expr, x + DX) - evaluate(expr, x - DX)) / (2.0 * DX)
    }

    /// Checks the symbolic derivative of the function against a finite difference at every
    /// given point.
    fn test_for_function(function: &str, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 1e-4;

        let expr = parse(function).unwrap();
        let symbolic = derivative(&expr);

        for point in points {
            let symbolically_computed = evaluate(&symbolic, point);
            let numerically_computed = finite_difference(&expr, point);

            assert!(
                (symbolically_computed - numerically_computed).abs()
                    < TOL * (1.0 + numerically_computed.abs()),
                "for `{function}` at x = {point}, the symbolic derivative `{symbolic}` was \
                {symbolically_computed}, but the finite difference was {numerically_computed}",
            );
        }
    }

    #[test]
    fn constant() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let c = rng.gen_range(-1e6..1e6);
            let x = rng.gen_range(-100.0..100.0);
            assert_eq!(evaluate(&derivative(&Expr::Constant(c)), x), 0.0);
        }
    }

    #[test]
    fn variable() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let x = rng.gen_range(-100.0..100.0);
            assert_eq!(evaluate(&derivative(&Expr::Variable), x), 1.0);
        }
    }

    #[test]
    fn product_rule_matches_finite_difference() {
        let factors = [
            Expr::Variable,
            Expr::Sin(Box::new(Expr::Variable)),
            Expr::Power(Box::new(Expr::Variable), 3.0),
            Expr::Exp(Box::new(Expr::Product(vec![Expr::Constant(0.5), Expr::Variable]))),
            Expr::Sum(vec![Expr::Variable, Expr::Constant(2.0)]),
        ];

        let mut rng = rand::thread_rng();
        for f in &factors {
            for g in &factors {
                let product = Expr::Product(vec![f.clone(), g.clone()]);
                let symbolic = derivative(&product);
                for _ in 0..4 {
                    let x = rng.gen_range(-3.0..3.0);
                    let expected = finite_difference(&product, x);
                    let actual = evaluate(&symbolic, x);
                    assert!(
                        (actual - expected).abs() < 1e-4 * (1.0 + expected.abs()),
                        "d/dx ({}) at x = {}: {} != {}", product, x, actual, expected,
                    );
                }
            }
        }
    }

    #[test]
    fn power_rule() {
        test_for_function("x^2 + x + 1", [0., 1., 2., 5., 8.]);
        test_for_function("x^3 - 2 * x", [-2., 0., 1.5]);
        test_for_function("x^2.5", [0.5, 1., 4.]);
        test_for_function("(x + 1)^-0.5", [0., 1., 3.]);
        test_for_function("1 / x", [-2., 0.5, 3.]);
    }

    #[test]
    fn chain_rule() {
        test_for_function("sin((5+x)*4)", [0., 2., 3.7]);
        test_for_function("e^(2 * x)", [-1., 0., 3.7]);
        test_for_function("e^sin(x)", [0., 1., 2.]);
        test_for_function("ln(x^2 + 1)", [-1., 0., 2.]);
        test_for_function("cos(x)^3", [0.3, 1., 2.]);
        test_for_function("-x / (1 + x^2)", [-1., 0., 2.]);
    }

    #[test]
    fn trigonometric_rules() {
        test_for_function("sin(x) * cos(x)", [0., 1., 2.]);
        test_for_function("cos(2 * x) - sin(x)^2", [0.1, 0.5, 2.]);
    }

    #[test]
    fn exponential_and_logarithmic_rules() {
        test_for_function("x * e^x * ln(x)", [0.5, 1., 2.]);
        test_for_function("e", [0., 1.]);
        test_for_function("ln(x) / x", [0.5, 1., 4.]);
    }

    #[test]
    fn worked_examples() {
        assert_eq!(derivative(&parse("(5+x)*4").unwrap()), Expr::Constant(4.0));

        let symbolic = derivative(&parse("sin((5+x)*4)").unwrap());
        assert_eq!(evaluate(&symbolic, 2.0), 28.0_f64.cos() * 4.0);
    }

    #[test]
    fn power_one_is_derivative_of_base() {
        let sin = Expr::Sin(Box::new(Expr::Variable));
        let power = Expr::Power(Box::new(sin.clone()), 1.0);
        assert_eq!(derivative(&power), derivative(&sin));
        assert_eq!(derivative(&sin), Expr::Product(vec![Expr::Cos(Box::new(Expr::Variable))]));
    }

    #[test]
    fn function_rules() {
        let x = || Box::new(Expr::Variable);
        assert_eq!(
            derivative(&Expr::Exp(x())),
            Expr::Product(vec![Expr::Exp(x())]),
        );
        assert_eq!(
            derivative(&Expr::Ln(x())),
            Expr::Product(vec![Expr::Power(x(), -1.0)]),
        );
        assert_eq!(
            derivative(&Expr::Cos(x())),
            Expr::Product(vec![Expr::Sin(x()), Expr::Constant(-1.0)]),
        );
        assert_eq!(
            derivative(&Expr::Tan(x())),
            Expr::Product(vec![Expr::Power(Box::new(Expr::Cos(x())), 2.0)]),
        );
    }

    #[test]
    fn tan_rule_squares_cosine() {
        let x = || Box::new(Expr::Variable);
        assert_eq!(
            derivative(&Expr::Tan(x())),
            simplify(&Expr::Product(vec![
                Expr::Power(Box::new(Expr::Cos(x())), 2.0),
                Expr::Constant(1.0),
            ])),
        );

        // tan(2x)' = cos(2x)^2 * 2
        let inner = Expr::Product(vec![Expr::Constant(2.0), Expr::Variable]);
        let result = derivative(&Expr::Tan(Box::new(inner)));
        for x in [0.1_f64, 0.5, 2.0] {
            let expected = (2.0 * x).cos().powi(2) * 2.0;
            assert_float_absolute_eq!(evaluate(&result, x), expected, 1e-12);
        }
    }

    #[test]
    fn result_is_simplified() {
        let sources = [
            "(5+x)*4",
            "x^3 * sin(x)",
            "e^(x^2) * ln(2 * x) - tan(x)^-3",
            "1 / (x + 1) - (x - 1) * (2 - x)",
            "cos(cos(cos(x)))",
        ];

        for source in sources {
            let result = derivative(&parse(source).unwrap());
            assert_eq!(simplify(&result), result, "derivative of `{}` is not simplified", source);
        }
    }

    #[test]
    fn nth_derivative_of_sin() {
        let sin = parse("sin(x)").unwrap();
        assert_eq!(nth_derivative(&sin, 0), sin);

        let fourth = nth_derivative(&sin, 4);
        for x in [0.0, 0.7, 2.5] {
            assert!((evaluate(&fourth, x) - x.sin()).abs() < 1e-12);
        }
    }

    #[test]
    fn nth_derivative_of_polynomial() {
        let cubic = parse("x^3 + 2 * x^2").unwrap();
        assert_eq!(nth_derivative(&cubic, 3), Expr::Constant(6.0));
        assert_eq!(nth_derivative(&cubic, 4), Expr::Constant(0.0));
    }
}
