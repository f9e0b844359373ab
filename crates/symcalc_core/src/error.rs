use thiserror::Error;

/// Failure while evaluating an expression against a set of bindings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("no value bound for variable `{name}`")]
    UnboundVariable { name: String },
}

/// Terminal failures of the Newton–Raphson root finder.
///
/// Each kind is distinct so a caller can decide whether retrying with a
/// different initial guess makes sense.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RootFindingError {
    #[error("derivative vanished at x = {estimate} (iteration {iteration}); no root reachable")]
    ZeroDerivative { iteration: u32, estimate: f64 },
    #[error(
        "Newton iteration failed to converge in {max_iterations} steps (x = {estimate}, |f(x)| = {residual})"
    )]
    MaxIterationsExceeded {
        max_iterations: u32,
        estimate: f64,
        residual: f64,
    },
    #[error("invalid solver settings: {0}")]
    InvalidSettings(String),
    #[error(transparent)]
    Evaluation(#[from] EvalError),
}
