// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sbc_solve_protocol::SolverClientError;

/// Errors that abort a solve attempt.
///
/// Infeasibility and timeouts are not errors; they are reported through
/// `SolveOutcome`. Unparsed requirement lines are not errors either; they
/// ride in the parse report and degrade completeness only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The requirement source could not produce the challenge data.
    Extraction(String),
    /// The player store has no available players.
    EmptyPlayerPool,
    /// The player store failed to answer a query.
    Store(String),
    /// Domain data could not be translated for the solver.
    Translation(String),
    /// The solver service failed outright.
    Solver {
        /// A short machine-oriented status, e.g. an HTTP code or "transport".
        status: String,
        /// Human-readable detail.
        message: String,
    },
}

impl PipelineError {
    /// A stable machine-readable name for this error's taxonomy kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Extraction(_) => "extraction",
            Self::EmptyPlayerPool => "empty_player_pool",
            Self::Store(_) => "store",
            Self::Translation(_) => "translation",
            Self::Solver { .. } => "solver",
        }
    }
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Extraction(message) => {
                write!(f, "Failed to read the challenge requirements: {message}")
            }
            Self::EmptyPlayerPool => {
                write!(
                    f,
                    "No players are available to build a squad from. Extract the club roster first"
                )
            }
            Self::Store(message) => write!(f, "Player store query failed: {message}"),
            Self::Translation(message) => {
                write!(f, "Could not translate the challenge for the solver: {message}")
            }
            Self::Solver { status, message } => {
                write!(f, "Solver request failed ({status}): {message}")
            }
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<SolverClientError> for PipelineError {
    fn from(error: SolverClientError) -> Self {
        match error {
            SolverClientError::Transport(source) => Self::Solver {
                status: String::from("transport"),
                message: source.to_string(),
            },
            SolverClientError::Status { code, body } => Self::Solver {
                status: code.to_string(),
                message: body,
            },
            SolverClientError::Decode(source) => Self::Translation(source.to_string()),
        }
    }
}
