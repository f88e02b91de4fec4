use crate::types::{ConstraintSign, Constraints, SolveRequest, SolverDirection};

/// Largest variable count the solver endpoint accepts
pub const MAX_VARIABLES: usize = 4;
/// Largest constraint count the input grid offers
pub const MAX_CONSTRAINTS: usize = 6;

/// Editable problem state behind an input grid.
///
/// The form keeps the objective row, constraint matrix, right-hand sides and
/// signs mutually consistent as the grid is resized: values at surviving
/// indices are preserved, new cells start at zero, new signs at `<=`.
/// `to_request` snapshots the current state into a wire request.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemForm {
    direction: SolverDirection,
    objective: Vec<f64>,
    a: Vec<Vec<f64>>,
    b: Vec<f64>,
    signs: Vec<ConstraintSign>,
}

impl Default for ProblemForm {
    /// Two variables, two `<=` constraints, all coefficients zero, maximize.
    fn default() -> Self {
        Self {
            direction: SolverDirection::Maximize,
            objective: vec![0.0; 2],
            a: vec![vec![0.0; 2]; 2],
            b: vec![0.0; 2],
            signs: vec![ConstraintSign::Le; 2],
        }
    }
}

impl ProblemForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The worked example from the service documentation: maximize
    /// `3*x1 + 2*x2` subject to `x1 + 2*x2 <= 8` and `2*x1 + x2 <= 6`.
    pub fn example() -> Self {
        Self {
            direction: SolverDirection::Maximize,
            objective: vec![3.0, 2.0],
            a: vec![vec![1.0, 2.0], vec![2.0, 1.0]],
            b: vec![8.0, 6.0],
            signs: vec![ConstraintSign::Le; 2],
        }
    }

    pub fn variable_count(&self) -> usize {
        self.objective.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.b.len()
    }

    pub fn direction(&self) -> SolverDirection {
        self.direction
    }

    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.a
    }

    pub fn rhs(&self) -> &[f64] {
        &self.b
    }

    pub fn signs(&self) -> &[ConstraintSign] {
        &self.signs
    }

    /// Column headers `x1..xn` for the current variable count
    pub fn variable_labels(&self) -> Vec<String> {
        (1..=self.variable_count()).map(|i| format!("x{i}")).collect()
    }

    /// Dimension sync as a pure function.
    ///
    /// Requested counts are clamped to `[1, MAX_VARIABLES]` and
    /// `[1, MAX_CONSTRAINTS]`. Every value whose index survives is kept, new
    /// cells are zero-filled and new signs default to `<=`. Resizing to the
    /// current dimensions returns an equal form.
    pub fn resized(&self, variables: usize, constraints: usize) -> Self {
        let vars = variables.clamp(1, MAX_VARIABLES);
        let cons = constraints.clamp(1, MAX_CONSTRAINTS);

        let objective = (0..vars)
            .map(|i| self.objective.get(i).copied().unwrap_or(0.0))
            .collect();
        let a = (0..cons)
            .map(|r| {
                let row = self.a.get(r);
                (0..vars)
                    .map(|c| row.and_then(|row| row.get(c)).copied().unwrap_or(0.0))
                    .collect()
            })
            .collect();
        let b = (0..cons)
            .map(|r| self.b.get(r).copied().unwrap_or(0.0))
            .collect();
        let signs = (0..cons)
            .map(|r| self.signs.get(r).copied().unwrap_or(ConstraintSign::Le))
            .collect();

        Self {
            direction: self.direction,
            objective,
            a,
            b,
            signs,
        }
    }

    pub fn set_variable_count(&mut self, n: usize) {
        *self = self.resized(n, self.constraint_count());
    }

    pub fn set_constraint_count(&mut self, m: usize) {
        *self = self.resized(self.variable_count(), m);
    }

    /// Write one objective coefficient from raw input text.
    ///
    /// Unparsable or non-finite input becomes `0`. An out-of-range index is a
    /// no-op: the grid cannot address cells that do not exist.
    pub fn set_objective_coefficient(&mut self, index: usize, raw: &str) {
        if let Some(cell) = self.objective.get_mut(index) {
            *cell = parse_cell(raw);
        }
    }

    /// Write one constraint matrix coefficient from raw input text
    pub fn set_matrix_coefficient(&mut self, row: usize, col: usize, raw: &str) {
        if let Some(cell) = self.a.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = parse_cell(raw);
        }
    }

    /// Write one right-hand side from raw input text
    pub fn set_rhs(&mut self, row: usize, raw: &str) {
        if let Some(cell) = self.b.get_mut(row) {
            *cell = parse_cell(raw);
        }
    }

    pub fn set_sign(&mut self, row: usize, sign: ConstraintSign) {
        if let Some(slot) = self.signs.get_mut(row) {
            *slot = sign;
        }
    }

    pub fn set_direction(&mut self, direction: SolverDirection) {
        self.direction = direction;
    }

    /// Back to the 2x2 all-zero maximization form
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Snapshot the current state as a wire request
    pub fn to_request(&self) -> SolveRequest {
        SolveRequest {
            direction: self.direction,
            objective: self.objective.clone(),
            constraints: Constraints {
                a: self.a.clone(),
                b: self.b.clone(),
                signs: self.signs.clone(),
            },
        }
    }
}

fn parse_cell(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growing_variables_preserves_and_zero_fills() {
        let mut form = ProblemForm::example();
        form.set_variable_count(4);

        assert_eq!(form.objective(), &[3.0, 2.0, 0.0, 0.0]);
        assert_eq!(form.matrix()[0], vec![1.0, 2.0, 0.0, 0.0]);
        assert_eq!(form.matrix()[1], vec![2.0, 1.0, 0.0, 0.0]);
        // rows and signs untouched
        assert_eq!(form.rhs(), &[8.0, 6.0]);
        assert_eq!(form.constraint_count(), 2);
    }

    #[test]
    fn shrinking_variables_truncates_by_index() {
        let mut form = ProblemForm::example();
        form.set_variable_count(1);

        assert_eq!(form.objective(), &[3.0]);
        assert_eq!(form.matrix()[0], vec![1.0]);
        assert_eq!(form.matrix()[1], vec![2.0]);
    }

    #[test]
    fn growing_constraints_defaults_new_rows() {
        let mut form = ProblemForm::example();
        form.set_sign(1, ConstraintSign::Ge);
        form.set_constraint_count(4);

        assert_eq!(form.constraint_count(), 4);
        assert_eq!(form.matrix()[2], vec![0.0, 0.0]);
        assert_eq!(form.rhs(), &[8.0, 6.0, 0.0, 0.0]);
        assert_eq!(
            form.signs(),
            &[
                ConstraintSign::Le,
                ConstraintSign::Ge,
                ConstraintSign::Le,
                ConstraintSign::Le
            ]
        );
    }

    #[test]
    fn resizing_to_the_same_dimensions_is_a_no_op() {
        let form = ProblemForm::example();
        assert_eq!(form.resized(2, 2), form);
    }

    #[test]
    fn counts_are_clamped_to_the_grid_bounds() {
        let mut form = ProblemForm::new();
        form.set_variable_count(0);
        assert_eq!(form.variable_count(), 1);
        form.set_variable_count(99);
        assert_eq!(form.variable_count(), MAX_VARIABLES);

        form.set_constraint_count(0);
        assert_eq!(form.constraint_count(), 1);
        form.set_constraint_count(99);
        assert_eq!(form.constraint_count(), MAX_CONSTRAINTS);
    }

    #[test]
    fn raw_input_parses_or_falls_back_to_zero() {
        let mut form = ProblemForm::new();
        form.set_objective_coefficient(0, " 2.5 ");
        form.set_objective_coefficient(1, "abc");
        assert_eq!(form.objective(), &[2.5, 0.0]);

        form.set_matrix_coefficient(1, 1, "-3");
        assert_eq!(form.matrix()[1][1], -3.0);
        form.set_matrix_coefficient(1, 1, "inf");
        assert_eq!(form.matrix()[1][1], 0.0);

        form.set_rhs(0, "1e2");
        assert_eq!(form.rhs()[0], 100.0);
    }

    #[test]
    fn out_of_range_edits_are_ignored() {
        let mut form = ProblemForm::new();
        let before = form.clone();

        form.set_objective_coefficient(5, "1");
        form.set_matrix_coefficient(9, 0, "1");
        form.set_matrix_coefficient(0, 9, "1");
        form.set_rhs(7, "1");
        form.set_sign(7, ConstraintSign::Eq);

        assert_eq!(form, before);
    }

    #[test]
    fn editing_one_matrix_cell_leaves_siblings_alone() {
        let mut form = ProblemForm::example();
        form.set_matrix_coefficient(0, 1, "5");

        assert_eq!(form.matrix()[0], vec![1.0, 5.0]);
        assert_eq!(form.matrix()[1], vec![2.0, 1.0]);
    }

    #[test]
    fn reset_restores_the_default_form() {
        let mut form = ProblemForm::example();
        form.set_variable_count(4);
        form.set_direction(SolverDirection::Minimize);
        form.reset();

        assert_eq!(form, ProblemForm::default());
        assert_eq!(form.direction(), SolverDirection::Maximize);
    }

    #[test]
    fn labels_follow_the_variable_count() {
        let mut form = ProblemForm::new();
        form.set_variable_count(3);
        assert_eq!(form.variable_labels(), vec!["x1", "x2", "x3"]);
    }

    #[test]
    fn to_request_snapshots_the_current_state() {
        let form = ProblemForm::example();
        let request = form.to_request();

        assert_eq!(request.direction, SolverDirection::Maximize);
        assert_eq!(request.objective, vec![3.0, 2.0]);
        assert_eq!(request.constraints.b, vec![8.0, 6.0]);
        assert_eq!(request.constraints.signs, vec![ConstraintSign::Le; 2]);
    }
}
