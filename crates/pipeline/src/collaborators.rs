// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seams between the orchestrator and its collaborators.
//!
//! The orchestrator is generic over these traits so the server can plug in
//! its HTTP-fed requirement source and file-backed roster store, and tests
//! can plug in mocks.

use crate::error::PipelineError;
use sbc_solve::KnownNames;
use sbc_solve_domain::{PositionSlot, SolverPlayer};
use sbc_solve_protocol::wire::{SolveRequest, SolveResponse};
use sbc_solve_protocol::{SolverClient, SolverClientError};
use std::collections::BTreeMap;

/// Supplies the raw challenge data for one solve attempt.
#[allow(async_fn_in_trait)]
pub trait RequirementSource {
    /// Returns the raw requirement lines, one per displayed requirement.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Extraction` if the challenge data cannot be
    /// read; extraction failures are fatal to the attempt.
    async fn requirement_lines(&self) -> Result<Vec<String>, PipelineError>;

    /// Returns the squad size read from the challenge header, if any.
    ///
    /// This seeds parsing only; an explicit squad-size requirement line
    /// still wins.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Extraction` if the challenge data cannot be
    /// read.
    async fn squad_size(&self) -> Result<Option<u32>, PipelineError>;

    /// Returns the required squad slots from the pitch view, in slot order.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Extraction` if the challenge data cannot be
    /// read.
    async fn required_positions(&self) -> Result<Vec<PositionSlot>, PipelineError>;
}

/// Read access to the club roster and its name tables.
///
/// Implementations must serve fresh data on every call; the orchestrator
/// never caches across attempts.
#[allow(async_fn_in_trait)]
pub trait PlayerStore {
    /// Returns every player available for squad building.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Store` if the roster cannot be read.
    async fn available_players(
        &self,
        exclude_active_squad: bool,
    ) -> Result<Vec<SolverPlayer>, PipelineError>;

    /// Returns the players matching the given roster-slot ids.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Store` if the roster cannot be read.
    async fn players_by_ids(&self, ids: &[i64]) -> Result<Vec<SolverPlayer>, PipelineError>;

    /// Returns the quality name to id table.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Store` if the table cannot be read.
    async fn quality_name_to_id(&self) -> Result<BTreeMap<String, i64>, PipelineError>;

    /// Returns the rarity name to id table.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Store` if the table cannot be read.
    async fn rarity_name_to_id(&self) -> Result<BTreeMap<String, i64>, PipelineError>;

    /// Returns the position name to id table. Keys are lowercase.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Store` if the table cannot be read.
    async fn position_name_to_id(&self) -> Result<BTreeMap<String, i64>, PipelineError>;

    /// Returns the league/country/club name tables used by the parser.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Store` if the tables cannot be read.
    async fn known_names(&self) -> Result<KnownNames, PipelineError>;
}

/// Submits a translated request to a squad solver.
#[allow(async_fn_in_trait)]
pub trait SquadSolver {
    /// Runs one solve and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Solver` or `PipelineError::Translation` if
    /// the solver could not be reached, rejected the request, or answered
    /// with an undecodable body.
    async fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, PipelineError>;
}

impl SquadSolver for SolverClient {
    async fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, PipelineError> {
        Self::solve(self, request)
            .await
            .map_err(|error: SolverClientError| error.into())
    }
}
