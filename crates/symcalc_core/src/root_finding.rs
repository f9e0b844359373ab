use crate::bindings::{Bindings, Variable};
use crate::error::RootFindingError;
use crate::expression::Expr;
use crate::polynomial::Polynomial;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewtonSettings {
    /// Convergence threshold on `|f(x)|`.
    pub epsilon: f64,
    pub max_iterations: u32,
}

impl Default for NewtonSettings {
    fn default() -> Self {
        Self {
            epsilon: 1e-4,
            max_iterations: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootReport {
    pub root: f64,
    /// `|f(root)|` at the accepted estimate.
    pub residual: f64,
    /// Newton updates applied before convergence.
    pub iterations: u32,
}

/// Newton–Raphson on a quadratic polynomial in `variable`.
///
/// Settings are taken as given: a zero iteration budget or an epsilon that
/// can never be met ends in `MaxIterationsExceeded`.
pub fn find_root(
    poly: &Polynomial,
    variable: &Variable,
    initial_guess: f64,
    epsilon: f64,
    max_iterations: u32,
) -> Result<f64, RootFindingError> {
    let expr = Expr::Polynomial(poly.clone());
    let settings = NewtonSettings {
        epsilon,
        max_iterations,
    };
    iterate(&expr, variable, initial_guess, settings).map(|report| report.root)
}

/// Newton–Raphson on an arbitrary expression of one free variable.
///
/// The derivative is built symbolically once, then both trees are evaluated
/// at each estimate with a fresh set of bindings. Iteration stops as soon as
/// `|f(x)| < epsilon`; a vanishing derivative is a terminal failure.
pub fn newton_raphson(
    expr: &Expr,
    variable: &Variable,
    initial_guess: f64,
    settings: NewtonSettings,
) -> Result<RootReport, RootFindingError> {
    validate_settings(&settings)?;
    iterate(expr, variable, initial_guess, settings)
}

fn iterate(
    expr: &Expr,
    variable: &Variable,
    initial_guess: f64,
    settings: NewtonSettings,
) -> Result<RootReport, RootFindingError> {
    let derivative = expr.derivative(variable);
    let mut xn = initial_guess;
    let mut residual = f64::NAN;

    for iteration in 0..settings.max_iterations {
        let mut bindings = Bindings::new();
        bindings.assign(variable, xn);

        let fxn = expr.evaluate(&bindings)?;
        residual = fxn.abs();
        log::trace!("newton iteration {iteration}: x = {xn}, f(x) = {fxn}");
        if residual < settings.epsilon {
            log::debug!(
                "newton converged to {variable} = {xn} after {iteration} iterations"
            );
            return Ok(RootReport {
                root: xn,
                residual,
                iterations: iteration,
            });
        }

        let dfxn = derivative.evaluate(&bindings)?;
        if dfxn == 0.0 {
            return Err(RootFindingError::ZeroDerivative {
                iteration,
                estimate: xn,
            });
        }
        xn -= fxn / dfxn;
    }

    Err(RootFindingError::MaxIterationsExceeded {
        max_iterations: settings.max_iterations,
        estimate: xn,
        residual,
    })
}

fn validate_settings(settings: &NewtonSettings) -> Result<(), RootFindingError> {
    if settings.max_iterations == 0 {
        return Err(RootFindingError::InvalidSettings(
            "max_iterations must be greater than zero".to_owned(),
        ));
    }
    if !(settings.epsilon.is_finite() && settings.epsilon > 0.0) {
        return Err(RootFindingError::InvalidSettings(format!(
            "epsilon must be positive and finite, got {}",
            settings.epsilon
        )));
    }
    Ok(())
}
