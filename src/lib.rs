//! # Simplex API client
//!
//! Client SDK for a remote simplex-method solver exposed over HTTP. The crate
//! owns the editable problem state ([`ProblemForm`]), validates its shape,
//! submits it to the service as JSON and decodes the optimum plus the full
//! iteration trace.
//!
//! ## Example
//!
//! ```no_run
//! use simplex_api_sdk::{ProblemForm, SimplexClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SimplexClient::new("http://127.0.0.1:8000")?;
//!
//!     // maximize 3*x1 + 2*x2 s.t. x1 + 2*x2 <= 8, 2*x1 + x2 <= 6
//!     let form = ProblemForm::example();
//!
//!     let solution = client.solve(&form.to_request()).await?;
//!     println!("z = {}", solution.optimal_value());
//!     for (name, value) in solution.variable_values() {
//!         println!("{name} = {value}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod form;
pub mod types;
pub mod validate;

pub use client::{SimplexClient, BASE_URL_ENV};
pub use error::{Result, SimplexError};
pub use form::{ProblemForm, MAX_CONSTRAINTS, MAX_VARIABLES};
pub use types::{
    ConstraintSign, Constraints, Iteration, Outcome, SolveRequest, SolveResponse, SolverDirection,
};
pub use validate::validate_request;
