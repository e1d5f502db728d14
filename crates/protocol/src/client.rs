// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP client for the external squad solver service.

use crate::wire::{SolveRequest, SolveResponse};
use thiserror::Error;

/// Errors from talking to the solver service.
#[derive(Debug, Error)]
pub enum SolverClientError {
    /// The request never produced an HTTP response.
    #[error("failed to reach the solver: {0}")]
    Transport(#[source] reqwest::Error),
    /// The solver answered with a non-2xx status.
    #[error("solver returned HTTP {code}: {body}")]
    Status {
        /// The HTTP status code.
        code: u16,
        /// The response body, verbatim.
        body: String,
    },
    /// The response body was not a valid solve response.
    #[error("failed to decode the solver response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Client for the solver's HTTP API.
#[derive(Debug, Clone)]
pub struct SolverClient {
    base_url: String,
    http: reqwest::Client,
}

impl SolverClient {
    /// Creates a client for the solver at `base_url` (no trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Submits a solve request and decodes the response.
    ///
    /// The solver reports infeasibility and timeouts inside a successful
    /// HTTP response; only transport problems, non-2xx statuses and
    /// undecodable bodies are errors here.
    ///
    /// # Errors
    ///
    /// Returns `SolverClientError::Transport` if the request could not be
    /// sent, `SolverClientError::Status` for a non-2xx response (carrying
    /// the body text) and `SolverClientError::Decode` if the body does not
    /// match the response schema.
    pub async fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolverClientError> {
        let url = format!("{}/api/v1/solve", self.base_url);
        tracing::debug!(
            url = %url,
            players = request.available_players.len(),
            "submitting solve request"
        );

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(SolverClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SolverClientError::Status {
                code: status.as_u16(),
                body,
            });
        }

        response
            .json::<SolveResponse>()
            .await
            .map_err(SolverClientError::Decode)
    }

    /// Checks whether the solver service is up.
    ///
    /// Any transport failure or non-2xx status counts as unhealthy.
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/api/v1/health", self.base_url);
        match self.http.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(error) => {
                tracing::warn!(error = %error, "solver health check failed");
                false
            }
        }
    }
}
