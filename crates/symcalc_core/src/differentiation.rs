use crate::bindings::Variable;
use crate::expression::Expr;

/// Builds the derivative of `expr` with respect to `diff_var`.
///
/// Each rule only looks at its own node and recurses into the children, so
/// the result can be differentiated again for higher-order derivatives. No
/// simplification is performed: `d/dx (x*x)` comes back as
/// `((1*x)+(x*1))`.
pub fn derivative(expr: &Expr, diff_var: &Variable) -> Expr {
    match expr {
        Expr::Constant(_) => Expr::Constant(0.0),
        Expr::Variable(v) => Expr::Constant(if v == diff_var { 1.0 } else { 0.0 }),
        Expr::Add(left, right) => Expr::Add(
            Box::new(derivative(left, diff_var)),
            Box::new(derivative(right, diff_var)),
        ),
        Expr::Sub(left, right) => Expr::Sub(
            Box::new(derivative(left, diff_var)),
            Box::new(derivative(right, diff_var)),
        ),
        Expr::Mul(left, right) => product_rule(left, right, diff_var),
        Expr::Pow(base, exponent) => power_rule(base, *exponent, diff_var),
        Expr::Polynomial(poly) => poly.derivative(diff_var),
    }
}

// (uv)' = u'v + uv'
fn product_rule(left: &Expr, right: &Expr, diff_var: &Variable) -> Expr {
    Expr::Add(
        Box::new(Expr::Mul(
            Box::new(derivative(left, diff_var)),
            Box::new(right.clone()),
        )),
        Box::new(Expr::Mul(
            Box::new(left.clone()),
            Box::new(derivative(right, diff_var)),
        )),
    )
}

// (u^p)' = p * u^(p-1) * u'; the exponent is a literal, never differentiated.
fn power_rule(base: &Expr, exponent: f64, diff_var: &Variable) -> Expr {
    Expr::Mul(
        Box::new(Expr::Mul(
            Box::new(Expr::Constant(exponent)),
            Box::new(Expr::Pow(Box::new(base.clone()), exponent - 1.0)),
        )),
        Box::new(derivative(base, diff_var)),
    )
}
