//! The `symcalc_core` crate provides a small symbolic algebra over `f64`.
//!
//! Key components:
//! - **Bindings**: `Variable`, `Assignment` and the `Bindings` map consumed by evaluation.
//! - **Expression**: the `Expr` tree (constants, variables, `+ - *`, fixed powers and
//!   quadratic polynomials) with evaluation, structural equality and rendering.
//! - **Differentiation**: symbolic sum/product/power rules producing new `Expr` trees.
//! - **Root finding**: Newton–Raphson driven by an expression and its symbolic derivative.
pub mod bindings;
pub mod differentiation;
pub mod error;
pub mod expression;
pub mod polynomial;
pub mod root_finding;

pub use bindings::{Assignment, Bindings, Variable};
pub use error::{EvalError, RootFindingError};
pub use expression::{add, constant, mul, polynomial, pow, sub, var, Expr};
pub use polynomial::Polynomial;
pub use root_finding::{find_root, newton_raphson, NewtonSettings, RootReport};
