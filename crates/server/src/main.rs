// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod live;
mod roster;

use axum::{
    Json, Router,
    extract::{FromRef, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use roster::RosterStore;
use sbc_solve_domain::PositionSlot;
use sbc_solve_pipeline::{
    PipelineError, ProgressBroadcaster, RequirementSource, SolveAttempt, SolveOutcome,
};
use sbc_solve_protocol::{SolveBudget, SolverClient};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// SBC Solve Server - HTTP front end for the squad-building pipeline
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON roster file.
    #[arg(short, long)]
    roster: PathBuf,

    /// Base URL of the solver service.
    #[arg(short, long, default_value = "http://127.0.0.1:8000")]
    solver_url: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Default maximum solve time, in seconds.
    #[arg(long, default_value_t = 60)]
    max_solve_time: u64,

    /// Default no-improvement cutoff, in seconds.
    #[arg(long, default_value_t = 30)]
    no_improvement_time: u64,
}

/// Application state shared across handlers.
///
/// The roster store is stateless between requests; every attempt re-reads
/// the file, so concurrent solves share nothing mutable.
#[derive(Clone)]
struct AppState {
    /// The file-backed player store.
    roster: RosterStore,
    /// The solver service client.
    solver: SolverClient,
    /// The solver base URL, echoed in health responses.
    solver_base_url: String,
    /// The progress event broadcaster for `/live` subscribers.
    progress: Arc<ProgressBroadcaster>,
    /// Default time budget for solve requests.
    budget: SolveBudget,
}

impl FromRef<AppState> for Arc<ProgressBroadcaster> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.progress)
    }
}

/// One required slot as carried in the solve request body.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SlotRequest {
    /// The slot index on the pitch, ascending.
    slot_index: u32,
    /// The position label shown in the slot.
    position_name: String,
}

/// API request for a solve attempt.
///
/// The browser-automation side extracts the challenge and posts it here
/// verbatim; nothing in this body is pre-parsed.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SolveApiRequest {
    /// The raw requirement lines, one per displayed requirement.
    requirement_lines: Vec<String>,
    /// The squad size read from the challenge header, if shown.
    #[serde(default)]
    squad_size: Option<u32>,
    /// The required position slots from the pitch view.
    #[serde(default)]
    required_positions: Vec<SlotRequest>,
    /// Per-request override of the maximum solve time, in seconds.
    #[serde(default)]
    max_solve_time: Option<u64>,
    /// Per-request override of the no-improvement cutoff, in seconds.
    #[serde(default)]
    no_improvement_time: Option<u64>,
}

/// API response for the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Whether the solver service answered its health check.
    healthy: bool,
    /// The solver base URL that was checked.
    solver_url: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// The taxonomy kind of the error.
    kind: String,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The taxonomy kind of the error.
    kind: String,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            kind: self.kind,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<PipelineError> for HttpError {
    fn from(err: PipelineError) -> Self {
        let status: StatusCode = match &err {
            PipelineError::Extraction(_) => StatusCode::BAD_REQUEST,
            PipelineError::EmptyPlayerPool | PipelineError::Translation(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            PipelineError::Store(_) => {
                error!(error = %err, "Roster store error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            PipelineError::Solver { .. } => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

/// Requirement source fed by a solve request body.
///
/// The extraction already happened on the client side, so every method
/// just hands the posted data through.
struct PostedChallenge {
    lines: Vec<String>,
    squad_size: Option<u32>,
    slots: Vec<PositionSlot>,
}

impl From<&SolveApiRequest> for PostedChallenge {
    fn from(req: &SolveApiRequest) -> Self {
        Self {
            lines: req.requirement_lines.clone(),
            squad_size: req.squad_size,
            slots: req
                .required_positions
                .iter()
                .map(|slot| PositionSlot {
                    slot_index: slot.slot_index,
                    position_name: slot.position_name.clone(),
                })
                .collect(),
        }
    }
}

impl RequirementSource for PostedChallenge {
    async fn requirement_lines(&self) -> Result<Vec<String>, PipelineError> {
        Ok(self.lines.clone())
    }

    async fn squad_size(&self) -> Result<Option<u32>, PipelineError> {
        Ok(self.squad_size)
    }

    async fn required_positions(&self) -> Result<Vec<PositionSlot>, PipelineError> {
        Ok(self.slots.clone())
    }
}

/// Handler for POST /solve endpoint.
///
/// Runs one full solve attempt and returns the outcome. Infeasibility and
/// timeouts are 200 responses with the corresponding outcome variant.
async fn handle_solve(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SolveApiRequest>,
) -> Result<Json<SolveOutcome>, HttpError> {
    info!(
        lines = req.requirement_lines.len(),
        slots = req.required_positions.len(),
        "Handling solve request"
    );

    let budget: SolveBudget = SolveBudget {
        max_solve_time: req.max_solve_time.unwrap_or(app_state.budget.max_solve_time),
        no_improvement_time: req
            .no_improvement_time
            .unwrap_or(app_state.budget.no_improvement_time),
    };
    let source: PostedChallenge = PostedChallenge::from(&req);

    let attempt = SolveAttempt::new(
        &source,
        &app_state.roster,
        &app_state.solver,
        &app_state.progress,
        budget,
    );
    let outcome: SolveOutcome = attempt.run().await?;

    Ok(Json(outcome))
}

/// Handler for GET /health endpoint.
///
/// Proxies the solver service's health endpoint.
async fn handle_health(
    AxumState(app_state): AxumState<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let healthy: bool = app_state.solver.health_check().await;
    let status: StatusCode = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (
        status,
        Json(HealthResponse {
            healthy,
            solver_url: app_state.solver_base_url.clone(),
        }),
    )
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/solve", post(handle_solve))
        .route("/health", get(handle_health))
        .route("/live", get(live::progress_events_handler))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing SBC Solve Server");
    info!(roster = %args.roster.display(), solver = %args.solver_url, "Configuration");

    let app_state: AppState = AppState {
        roster: RosterStore::new(args.roster),
        solver: SolverClient::new(args.solver_url.clone()),
        solver_base_url: args.solver_url,
        progress: Arc::new(ProgressBroadcaster::new()),
        budget: SolveBudget {
            max_solve_time: args.max_solve_time,
            no_improvement_time: args.no_improvement_time,
        },
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
