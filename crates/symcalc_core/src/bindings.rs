use crate::error::EvalError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A named variable. Two variables are the same iff their names match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A single variable/value pair, applied to `Bindings` as an upsert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    variable: Variable,
    value: f64,
}

impl Assignment {
    pub fn new(variable: Variable, value: f64) -> Self {
        Self { variable, value }
    }

    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.variable, self.value)
    }
}

/// Values for the variables of an expression, keyed by variable name.
///
/// Expressions only borrow bindings for the duration of an evaluation, so
/// a `Bindings` shared between threads must not be mutated while in use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bindings {
    values: HashMap<String, f64>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `variable` to `value`, replacing any previous binding.
    pub fn assign(&mut self, variable: &Variable, value: f64) {
        self.values.insert(variable.name().to_owned(), value);
    }

    pub fn apply(&mut self, assignment: Assignment) {
        self.values.insert(assignment.variable.name, assignment.value);
    }

    pub fn lookup(&self, variable: &Variable) -> Result<f64, EvalError> {
        self.get(variable).ok_or_else(|| EvalError::UnboundVariable {
            name: variable.name().to_owned(),
        })
    }

    pub fn get(&self, variable: &Variable) -> Option<f64> {
        self.values.get(variable.name()).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Extend<Assignment> for Bindings {
    fn extend<I: IntoIterator<Item = Assignment>>(&mut self, iter: I) {
        for assignment in iter {
            self.apply(assignment);
        }
    }
}

impl FromIterator<Assignment> for Bindings {
    fn from_iter<I: IntoIterator<Item = Assignment>>(iter: I) -> Self {
        let mut bindings = Self::new();
        bindings.extend(iter);
        bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_upserts_existing_binding() {
        let x = Variable::new("x");
        let mut bindings = Bindings::new();
        bindings.assign(&x, 10.0);
        bindings.assign(&x, 4.5);

        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings.lookup(&x).expect("x should be bound"), 4.5);
    }

    #[test]
    fn lookup_of_unbound_variable_fails() {
        let mut bindings = Bindings::new();
        bindings.assign(&Variable::new("x"), 1.0);

        let err = bindings
            .lookup(&Variable::new("y"))
            .expect_err("y is not bound");
        assert_eq!(
            err,
            EvalError::UnboundVariable {
                name: "y".to_string()
            }
        );
    }

    #[test]
    fn assignments_collect_into_bindings() {
        let x = Variable::new("x");
        let y = Variable::new("y");
        let mut first = Assignment::new(x.clone(), 10.0);
        first.set_value(12.0);

        let bindings: Bindings = vec![first.clone(), Assignment::new(y.clone(), 20.0)]
            .into_iter()
            .collect();

        assert_eq!(first.to_string(), "x=12");
        assert_eq!(bindings.get(&x), Some(12.0));
        assert_eq!(bindings.get(&y), Some(20.0));
        assert!(bindings.get(&Variable::new("z")).is_none());
    }

    #[test]
    fn variables_compare_by_name() {
        assert_eq!(Variable::new("x"), Variable::from("x"));
        assert_ne!(Variable::new("x"), Variable::new("y"));
        assert_eq!(Variable::new("theta").to_string(), "theta");
    }
}
