use crate::error::{Result, SimplexError};
use crate::form::MAX_VARIABLES;
use crate::types::SolveRequest;

/// Check a request against the solver's shape contract before it goes on the
/// wire. Each violation is reported as a distinct `Validation` message; no
/// I/O happens here.
pub fn validate_request(request: &SolveRequest) -> Result<()> {
    let n = request.objective.len();
    if n == 0 || n > MAX_VARIABLES {
        return Err(SimplexError::Validation(format!(
            "objective must have between 1 and {MAX_VARIABLES} coefficients, got {n}"
        )));
    }

    let constraints = &request.constraints;
    if constraints.a.len() != constraints.b.len() || constraints.b.len() != constraints.signs.len()
    {
        return Err(SimplexError::Validation(format!(
            "A, b and signs must have the same number of rows (A: {}, b: {}, signs: {})",
            constraints.a.len(),
            constraints.b.len(),
            constraints.signs.len()
        )));
    }

    for (i, row) in constraints.a.iter().enumerate() {
        if row.len() != n {
            return Err(SimplexError::Validation(format!(
                "row {i} of A has {} columns, the objective has {n}",
                row.len()
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConstraintSign, Constraints, SolverDirection};

    fn request(objective: Vec<f64>, a: Vec<Vec<f64>>, b: Vec<f64>) -> SolveRequest {
        let signs = vec![ConstraintSign::Le; b.len()];
        SolveRequest {
            direction: SolverDirection::Maximize,
            objective,
            constraints: Constraints { a, b, signs },
        }
    }

    #[test]
    fn accepts_a_well_formed_request() {
        let req = request(
            vec![3.0, 2.0],
            vec![vec![1.0, 2.0], vec![2.0, 1.0]],
            vec![8.0, 6.0],
        );
        assert!(validate_request(&req).is_ok());
    }

    #[test]
    fn rejects_an_empty_objective() {
        let req = request(vec![], vec![], vec![]);
        assert!(matches!(
            validate_request(&req),
            Err(SimplexError::Validation(msg)) if msg.contains("between 1 and 4")
        ));
    }

    #[test]
    fn rejects_more_than_four_variables() {
        let req = request(vec![1.0; 5], vec![vec![1.0; 5]], vec![1.0]);
        assert!(matches!(
            validate_request(&req),
            Err(SimplexError::Validation(msg)) if msg.contains("got 5")
        ));
    }

    #[test]
    fn rejects_mismatched_row_counts() {
        let req = request(vec![1.0, 1.0], vec![vec![1.0, 1.0]], vec![1.0, 2.0]);
        assert!(matches!(
            validate_request(&req),
            Err(SimplexError::Validation(msg)) if msg.contains("same number of rows")
        ));
    }

    #[test]
    fn rejects_a_ragged_matrix_row() {
        let req = request(
            vec![1.0, 1.0],
            vec![vec![1.0, 1.0], vec![1.0]],
            vec![1.0, 2.0],
        );
        assert!(matches!(
            validate_request(&req),
            Err(SimplexError::Validation(msg)) if msg.contains("row 1")
        ));
    }
}
