use crate::bindings::{Bindings, Variable};
use crate::differentiation;
use crate::error::EvalError;
use crate::polynomial::Polynomial;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Expression tree nodes.
///
/// Every composite owns its children; trees are never mutated in place,
/// operations such as `derivative` build a new tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Constant(f64),
    Variable(Variable),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    /// Base raised to a fixed numeric exponent.
    Pow(Box<Expr>, f64),
    Polynomial(Polynomial),
}

impl Expr {
    /// Evaluates the tree with values taken from `bindings`.
    ///
    /// The first unbound variable encountered (left operand first) aborts the
    /// whole evaluation. Non-finite results such as `(-1)^0.5` are returned as
    /// values, not errors.
    pub fn evaluate(&self, bindings: &Bindings) -> Result<f64, EvalError> {
        match self {
            Expr::Constant(value) => Ok(*value),
            Expr::Variable(variable) => bindings.lookup(variable),
            Expr::Add(left, right) => Ok(left.evaluate(bindings)? + right.evaluate(bindings)?),
            Expr::Sub(left, right) => Ok(left.evaluate(bindings)? - right.evaluate(bindings)?),
            Expr::Mul(left, right) => Ok(left.evaluate(bindings)? * right.evaluate(bindings)?),
            Expr::Pow(base, exponent) => Ok(base.evaluate(bindings)?.powf(*exponent)),
            Expr::Polynomial(poly) => poly.evaluate(bindings),
        }
    }

    /// Symbolic derivative with respect to `variable`.
    pub fn derivative(&self, variable: &Variable) -> Expr {
        differentiation::derivative(self, variable)
    }

    /// Whether `variable` occurs anywhere in the tree.
    pub fn depends_on(&self, variable: &Variable) -> bool {
        match self {
            Expr::Constant(_) => false,
            Expr::Variable(v) => v == variable,
            Expr::Add(left, right) | Expr::Sub(left, right) | Expr::Mul(left, right) => {
                left.depends_on(variable) || right.depends_on(variable)
            }
            Expr::Pow(base, _) => base.depends_on(variable),
            Expr::Polynomial(poly) => poly.variable() == variable,
        }
    }
}

impl From<Variable> for Expr {
    fn from(variable: Variable) -> Self {
        Expr::Variable(variable)
    }
}

impl From<Polynomial> for Expr {
    fn from(poly: Polynomial) -> Self {
        Expr::Polynomial(poly)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(value) => write!(f, "{value}"),
            Expr::Variable(variable) => write!(f, "{variable}"),
            Expr::Add(left, right) => write!(f, "({left}+{right})"),
            Expr::Sub(left, right) => write!(f, "({left}-{right})"),
            Expr::Mul(left, right) => write!(f, "({left}*{right})"),
            Expr::Pow(base, exponent) => write!(f, "({base}^{exponent})"),
            Expr::Polynomial(poly) => write!(f, "{poly}"),
        }
    }
}

// --- Constructors ---

pub fn constant(value: f64) -> Expr {
    Expr::Constant(value)
}

pub fn var(name: impl Into<String>) -> Expr {
    Expr::Variable(Variable::new(name))
}

pub fn add(left: Expr, right: Expr) -> Expr {
    Expr::Add(Box::new(left), Box::new(right))
}

pub fn sub(left: Expr, right: Expr) -> Expr {
    Expr::Sub(Box::new(left), Box::new(right))
}

pub fn mul(left: Expr, right: Expr) -> Expr {
    Expr::Mul(Box::new(left), Box::new(right))
}

pub fn pow(base: Expr, exponent: f64) -> Expr {
    Expr::Pow(Box::new(base), exponent)
}

/// `c2*v^2 + c1*v + c0` from coefficients `[c0, c1, c2]`.
pub fn polynomial(variable: Variable, coefficients: [f64; 3]) -> Expr {
    Expr::Polynomial(Polynomial::new(variable, coefficients))
}
