//! Shows how the form state stays consistent while the grid is resized and
//! edited, without talking to the solver.

use simplex_api_sdk::{ConstraintSign, ProblemForm, SolverDirection};

fn print_form(form: &ProblemForm) {
    let labels = form.variable_labels();
    let objective: Vec<String> = form
        .objective()
        .iter()
        .zip(&labels)
        .map(|(c, l)| format!("{c}*{l}"))
        .collect();
    println!("Z = {}", objective.join(" + "));

    for (row, (rhs, sign)) in form
        .matrix()
        .iter()
        .zip(form.rhs().iter().zip(form.signs()))
    {
        let terms: Vec<String> = row
            .iter()
            .zip(&labels)
            .map(|(c, l)| format!("{c}*{l}"))
            .collect();
        println!("  {} {sign} {rhs}", terms.join(" + "));
    }
    println!();
}

fn main() {
    let mut form = ProblemForm::new();
    println!("Default form:");
    print_form(&form);

    form.set_direction(SolverDirection::Minimize);
    form.set_variable_count(3);
    form.set_constraint_count(3);
    form.set_objective_coefficient(0, "4");
    form.set_objective_coefficient(1, "1");
    form.set_objective_coefficient(2, "2.5");
    form.set_matrix_coefficient(0, 0, "1");
    form.set_matrix_coefficient(0, 2, "3");
    form.set_matrix_coefficient(2, 1, "-2");
    form.set_rhs(0, "12");
    form.set_rhs(2, "5");
    form.set_sign(2, ConstraintSign::Ge);

    println!("After resizing to 3x3 and editing:");
    print_form(&form);

    // Shrinking keeps the surviving cells, growing back zero-fills the rest
    form.set_variable_count(2);
    form.set_variable_count(3);
    println!("After shrinking to 2 variables and growing back:");
    print_form(&form);

    println!("Wire payload:");
    let request = form.to_request();
    println!("{}", serde_json::to_string_pretty(&request).unwrap());

    form.reset();
    println!("\nAfter reset:");
    print_form(&form);
}
