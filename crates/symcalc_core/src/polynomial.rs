use crate::bindings::{Bindings, Variable};
use crate::error::{EvalError, RootFindingError};
use crate::expression::Expr;
use crate::root_finding::{newton_raphson, NewtonSettings};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The quadratic `c2*v^2 + c1*v + c0` in a single variable.
///
/// Coefficients are stored lowest degree first: `[c0, c1, c2]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polynomial {
    variable: Variable,
    coefficients: [f64; 3],
}

impl Polynomial {
    pub fn new(variable: Variable, coefficients: [f64; 3]) -> Self {
        Self {
            variable,
            coefficients,
        }
    }

    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    pub fn coefficients(&self) -> [f64; 3] {
        self.coefficients
    }

    pub fn evaluate(&self, bindings: &Bindings) -> Result<f64, EvalError> {
        let [c0, c1, c2] = self.coefficients;
        let x = bindings.lookup(&self.variable)?;
        Ok(c2 * x.powf(2.0) + c1 * x + c0)
    }

    /// `2*c2*v + c1`, kept as a polynomial unless the quadratic term is absent,
    /// in which case the derivative is the constant `c1`.
    pub fn derivative(&self, with_respect_to: &Variable) -> Expr {
        if self.variable != *with_respect_to {
            return Expr::Constant(0.0);
        }
        let [_, c1, c2] = self.coefficients;
        if c2 == 0.0 {
            Expr::Constant(c1)
        } else if c1 == 0.0 {
            Expr::Polynomial(Self::new(self.variable.clone(), [0.0, 2.0 * c2, 0.0]))
        } else {
            Expr::Polynomial(Self::new(self.variable.clone(), [c1, 2.0 * c2, 0.0]))
        }
    }

    /// Runs Newton–Raphson in the polynomial's own variable.
    pub fn find_root(
        &self,
        initial_guess: f64,
        settings: NewtonSettings,
    ) -> Result<f64, RootFindingError> {
        let expr = Expr::Polynomial(self.clone());
        newton_raphson(&expr, &self.variable, initial_guess, settings).map(|report| report.root)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c0, c1, c2] = self.coefficients;
        let v = &self.variable;
        let terms = [
            (c2, format!("{c2}{v}^2")),
            (c1, format!("{c1}{v}")),
            (c0, format!("{c0}")),
        ];

        f.write_str("(")?;
        let mut wrote_term = false;
        for (coefficient, text) in terms.iter().filter(|(c, _)| *c != 0.0) {
            if wrote_term && (coefficient.is_nan() || *coefficient > 0.0) {
                f.write_str("+")?;
            }
            f.write_str(text)?;
            wrote_term = true;
        }
        if !wrote_term {
            f.write_str("0")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quadratic(coefficients: [f64; 3]) -> Polynomial {
        Polynomial::new(Variable::new("x"), coefficients)
    }

    #[test]
    fn evaluates_quadratic_form() {
        let mut bindings = Bindings::new();
        bindings.assign(&Variable::new("x"), 0.5);

        let value = quadratic([12.0, 8.0, 1.0])
            .evaluate(&bindings)
            .expect("x is bound");
        assert!((value - 16.25).abs() < 1e-12);
    }

    #[test]
    fn evaluate_requires_the_variable() {
        let err = quadratic([1.0, 1.0, 1.0])
            .evaluate(&Bindings::new())
            .expect_err("x is unbound");
        assert!(matches!(err, EvalError::UnboundVariable { ref name } if name == "x"));
    }

    #[test]
    fn derivative_covers_degenerate_coefficients() {
        let x = Variable::new("x");

        assert_eq!(quadratic([5.0, 3.0, 0.0]).derivative(&x), Expr::Constant(3.0));
        assert_eq!(
            quadratic([-4.0, 0.0, 1.0]).derivative(&x),
            Expr::Polynomial(quadratic([0.0, 2.0, 0.0]))
        );
        assert_eq!(
            quadratic([12.0, 8.0, 1.0]).derivative(&x),
            Expr::Polynomial(quadratic([8.0, 2.0, 0.0]))
        );
    }

    #[test]
    fn derivative_in_another_variable_is_zero() {
        let d = quadratic([12.0, 8.0, 1.0]).derivative(&Variable::new("y"));
        assert_eq!(d, Expr::Constant(0.0));
    }

    #[test]
    fn second_derivative_is_constant() {
        let x = Variable::new("x");
        let second = quadratic([1.0, -3.0, 2.5]).derivative(&x).derivative(&x);

        let value = second.evaluate(&Bindings::new()).expect("no variables left");
        assert_eq!(value, 5.0);
    }

    #[test]
    fn renders_without_zero_terms_or_stray_signs() {
        assert_eq!(quadratic([0.0, -1.0, 3.0]).to_string(), "(3x^2-1x)");
        assert_eq!(quadratic([12.0, -8.0, -1.0]).to_string(), "(-1x^2-8x+12)");
        assert_eq!(quadratic([12.0, 8.0, 1.0]).to_string(), "(1x^2+8x+12)");
        assert_eq!(quadratic([0.0, 0.0, -1.0]).to_string(), "(-1x^2)");
        assert_eq!(quadratic([-2.0, 0.0, 0.0]).to_string(), "(-2)");
        assert_eq!(quadratic([4.0, 0.0, 1.0]).to_string(), "(1x^2+4)");
        assert_eq!(quadratic([0.0, 0.0, 0.0]).to_string(), "(0)");
    }

    #[test]
    fn nan_coefficient_still_gets_an_operator() {
        assert_eq!(quadratic([1.0, f64::NAN, 2.0]).to_string(), "(2x^2+NaNx+1)");
        assert_eq!(quadratic([1.0, -f64::NAN, 2.0]).to_string(), "(2x^2+NaNx+1)");
    }

    #[test]
    fn find_root_uses_own_variable() {
        let settings = NewtonSettings {
            epsilon: 1e-9,
            max_iterations: 50,
        };
        let root = quadratic([-9.0, 0.0, 1.0])
            .find_root(1.0, settings)
            .expect("x^2 - 9 has a root near 3");
        assert!((root - 3.0).abs() < 1e-6);
    }
}
