use std::env;
use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::{Result, SimplexError};
use crate::types::{SolveRequest, SolveResponse};
use crate::validate::validate_request;

/// Environment variable holding the solver's base URL
pub const BASE_URL_ENV: &str = "SIMPLEX_API_BASE_URL";

const SOLVE_PATH: &str = "/api/simplex/resolver/";
const DEFAULT_SOLVE_TIMEOUT: Duration = Duration::from_secs(20);
const DEFAULT_HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the simplex solver REST API
///
/// # Example
///
/// ```no_run
/// use simplex_api_sdk::SimplexClient;
///
/// let client = SimplexClient::new("http://127.0.0.1:8000").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SimplexClient {
    http: Client,
    base_url: String,
    solve_timeout: Duration,
    health_timeout: Duration,
}

impl SimplexClient {
    /// Create a client for the solver at `base_url`.
    ///
    /// Trailing slashes are stripped so that the endpoint paths can be
    /// appended verbatim. An unparsable URL is a configuration error.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::with_client(base_url, Client::new())
    }

    /// Create a client with a caller-configured reqwest client
    ///
    /// This allows you to set proxies, TLS options, connection pools, etc.
    pub fn with_client(base_url: impl AsRef<str>, http: Client) -> Result<Self> {
        let raw = base_url.as_ref();
        Url::parse(raw)
            .map_err(|e| SimplexError::Config(format!("invalid base URL {raw:?}: {e}")))?;

        Ok(Self {
            http,
            base_url: raw.trim_end_matches('/').to_string(),
            solve_timeout: DEFAULT_SOLVE_TIMEOUT,
            health_timeout: DEFAULT_HEALTH_TIMEOUT,
        })
    }

    /// Create a client from the `SIMPLEX_API_BASE_URL` environment variable.
    ///
    /// A missing variable is a configuration error; nothing is sent over the
    /// network either way.
    pub fn from_env() -> Result<Self> {
        let base = env::var(BASE_URL_ENV).map_err(|_| {
            SimplexError::Config(format!(
                "{BASE_URL_ENV} is not set; point it at the solver, e.g. http://127.0.0.1:8000"
            ))
        })?;
        Self::new(base)
    }

    /// Override the solve and availability timeouts (defaults: 20 s and 5 s)
    pub fn with_timeouts(mut self, solve: Duration, health: Duration) -> Self {
        self.solve_timeout = solve;
        self.health_timeout = health;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit one problem and decode the solver's answer.
    ///
    /// The request is shape-checked locally first; a validation failure never
    /// reaches the network. The POST is bounded by the solve timeout and is
    /// aborted when the bound is exceeded. Distinct failures map to distinct
    /// [`SimplexError`] variants: non-success status to `Http` (with the raw
    /// body), a non-JSON body to `Parse`, and JSON that does not match the
    /// solver schema to `Schema`.
    pub async fn solve(&self, request: &SolveRequest) -> Result<SolveResponse> {
        validate_request(request)?;

        let url = format!("{}{SOLVE_PATH}", self.base_url);
        debug!(
            "POST {url} ({} variables, {} constraints)",
            request.objective.len(),
            request.constraints.b.len()
        );

        let response = self
            .http
            .post(&url)
            .timeout(self.solve_timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| classify_transport_error(e, self.solve_timeout))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| classify_transport_error(e, self.solve_timeout))?;

        if !status.is_success() {
            warn!("solver returned HTTP {status}");
            return Err(SimplexError::Http { status, body: raw });
        }

        let value: Value =
            serde_json::from_str(&raw).map_err(|_| SimplexError::Parse { body: raw.clone() })?;

        decode_solution(value, raw)
    }

    /// Probe `GET {base}/` to see whether the solver is reachable.
    ///
    /// Advisory only: transport failures and timeouts all collapse to
    /// `false`, this never returns an error.
    pub async fn check_availability(&self) -> bool {
        let url = format!("{}/", self.base_url);
        match self.http.get(&url).timeout(self.health_timeout).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("availability probe failed: {e}");
                false
            }
        }
    }
}

fn classify_transport_error(error: reqwest::Error, bound: Duration) -> SimplexError {
    if error.is_timeout() {
        SimplexError::Timeout(bound)
    } else {
        SimplexError::Request(error)
    }
}

/// Structural guard between the untyped response body and the typed result.
///
/// Typed deserialization checks the whole tree, which is stricter than the
/// service contract requires (`resultado.z` a number, `resultado.valores` a
/// map, `iteraciones` an array); anything deeper is the solver's own output
/// and has never been observed malformed in practice.
fn decode_solution(value: Value, raw: String) -> Result<SolveResponse> {
    serde_json::from_value(value).map_err(|e| SimplexError::Schema {
        detail: e.to_string(),
        body: raw,
    })
}
