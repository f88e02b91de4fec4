use simplex_api_sdk::{ProblemForm, SimplexClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    // Reads SIMPLEX_API_BASE_URL, e.g. http://127.0.0.1:8000
    let client = SimplexClient::from_env()?;

    if client.check_availability().await {
        println!("✓ Solver is reachable at {}", client.base_url());
    } else {
        println!("⚠ Solver did not answer the availability probe");
    }

    // Maximize 3*x1 + 2*x2 subject to
    //   x1 + 2*x2 <= 8
    //   2*x1 + x2 <= 6
    let form = ProblemForm::example();

    println!("\n📊 Solving linear programming problem...\n");
    let solution = client.solve(&form.to_request()).await?;

    println!("z = {:.4}", solution.optimal_value());
    for (name, value) in solution.variable_values() {
        println!("{name} = {value:.4}");
    }

    for iteration in &solution.iterations {
        println!("\nIteration {}", iteration.index);
        println!(
            "  entering: {}  leaving: {}",
            iteration.entering.as_deref().unwrap_or("-"),
            iteration.leaving.as_deref().unwrap_or("-")
        );
        for row in &iteration.tableau {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:10.4}")).collect();
            println!("  {}", cells.join(" "));
        }
    }

    Ok(())
}
