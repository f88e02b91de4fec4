use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Whether the solver should maximize or minimize the objective function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverDirection {
    #[serde(rename = "maximizar")]
    Maximize,
    #[serde(rename = "minimizar")]
    Minimize,
}

/// Relation between a constraint row and its right-hand side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintSign {
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "=")]
    Eq,
}

impl fmt::Display for ConstraintSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConstraintSign::Le => "<=",
            ConstraintSign::Ge => ">=",
            ConstraintSign::Eq => "=",
        })
    }
}

/// Constraint block `A x (sign) b` with a dense row-major matrix.
///
/// Field names follow the service's wire format, which is Spanish
/// (`signos`); the matrix is serialized under its mathematical name `A`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    #[serde(rename = "A")]
    pub a: Vec<Vec<f64>>,
    pub b: Vec<f64>,
    #[serde(rename = "signos")]
    pub signs: Vec<ConstraintSign>,
}

/// Request body for `POST {base}/api/simplex/resolver/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    #[serde(rename = "tipo")]
    pub direction: SolverDirection,
    #[serde(rename = "objetivo")]
    pub objective: Vec<f64>,
    #[serde(rename = "restricciones")]
    pub constraints: Constraints,
}

/// One simplex tableau as reported by the solver, with the basis change
/// that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Iteration {
    #[serde(rename = "iteracion")]
    pub index: u32,
    #[serde(rename = "tabla")]
    pub tableau: Vec<Vec<f64>>,
    #[serde(rename = "entrante", default)]
    pub entering: Option<String>,
    #[serde(rename = "saliente", default)]
    pub leaving: Option<String>,
}

/// Final optimum: objective value and one assignment per variable label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub z: f64,
    #[serde(rename = "valores")]
    pub values: HashMap<String, f64>,
}

/// Response from the solve endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResponse {
    #[serde(rename = "iteraciones")]
    pub iterations: Vec<Iteration>,
    #[serde(rename = "resultado")]
    pub result: Outcome,
}

impl SolveResponse {
    /// Optimal objective value (`resultado.z` on the wire)
    pub fn optimal_value(&self) -> f64 {
        self.result.z
    }

    /// Variable assignments at the optimum, keyed by label (`x1`, `x2`, ...)
    pub fn variable_values(&self) -> &HashMap<String, f64> {
        &self.result.values
    }
}
