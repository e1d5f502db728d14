// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mock collaborators for orchestrator tests.

use crate::collaborators::{PlayerStore, RequirementSource, SquadSolver};
use crate::error::PipelineError;
use sbc_solve::KnownNames;
use sbc_solve_domain::{PositionSlot, SolverPlayer};
use sbc_solve_protocol::wire::{SolveRequest, SolveResponse};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// A canned challenge: requirement lines plus optional header data.
pub struct FakeSource {
    pub lines: Vec<String>,
    pub squad_size: Option<u32>,
    pub slots: Vec<PositionSlot>,
    pub fail: bool,
}

impl FakeSource {
    pub fn with_lines(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(ToString::to_string).collect(),
            squad_size: None,
            slots: Vec::new(),
            fail: false,
        }
    }
}

impl RequirementSource for FakeSource {
    async fn requirement_lines(&self) -> Result<Vec<String>, PipelineError> {
        if self.fail {
            return Err(PipelineError::Extraction(String::from(
                "challenge view not available",
            )));
        }
        Ok(self.lines.clone())
    }

    async fn squad_size(&self) -> Result<Option<u32>, PipelineError> {
        Ok(self.squad_size)
    }

    async fn required_positions(&self) -> Result<Vec<PositionSlot>, PipelineError> {
        Ok(self.slots.clone())
    }
}

/// An in-memory roster store.
pub struct FakeStore {
    pub players: Vec<SolverPlayer>,
}

impl PlayerStore for FakeStore {
    async fn available_players(
        &self,
        _exclude_active_squad: bool,
    ) -> Result<Vec<SolverPlayer>, PipelineError> {
        Ok(self.players.clone())
    }

    async fn players_by_ids(&self, ids: &[i64]) -> Result<Vec<SolverPlayer>, PipelineError> {
        Ok(self
            .players
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn quality_name_to_id(&self) -> Result<BTreeMap<String, i64>, PipelineError> {
        Ok(BTreeMap::from([
            (String::from("bronze"), 4),
            (String::from("silver"), 3),
            (String::from("gold"), 2),
            (String::from("special"), 1),
        ]))
    }

    async fn rarity_name_to_id(&self) -> Result<BTreeMap<String, i64>, PipelineError> {
        Ok(BTreeMap::from([
            (String::from("common"), 1),
            (String::from("rare"), 2),
        ]))
    }

    async fn position_name_to_id(&self) -> Result<BTreeMap<String, i64>, PipelineError> {
        Ok(BTreeMap::from([
            (String::from("gk"), 0),
            (String::from("cb"), 5),
            (String::from("st"), 27),
        ]))
    }

    async fn known_names(&self) -> Result<KnownNames, PipelineError> {
        Ok(KnownNames::new(
            vec![(String::from("Premier League"), 13)],
            vec![(String::from("England"), 14)],
            vec![(String::from("Arsenal"), 1)],
        ))
    }
}

/// Replays a canned response and records the request it was given.
pub struct FakeSolver {
    pub response: SolveResponse,
    pub last_request: Mutex<Option<SolveRequest>>,
}

impl FakeSolver {
    pub fn with_response(response: SolveResponse) -> Self {
        Self {
            response,
            last_request: Mutex::new(None),
        }
    }
}

impl SquadSolver for FakeSolver {
    async fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, PipelineError> {
        *self.last_request.lock().unwrap() = Some(request.clone());
        Ok(self.response.clone())
    }
}

/// A roster slot with plausible values.
pub fn create_test_player(id: i64, ovr: u32) -> SolverPlayer {
    SolverPlayer {
        id,
        player_id: id * 100,
        display_name: format!("Player {id}"),
        full_name: format!("Test Player {id}"),
        ovr,
        rating1: ovr,
        rating2: ovr,
        rating3: ovr,
        rating4: ovr,
        rating5: ovr,
        rating6: ovr,
        quality_id: 2,
        rarity_id: 1,
        country_id: 14,
        club_id: 1,
        league_id: 13,
        positions: vec![27],
        from_sbc_storage: false,
        in_active_squad: false,
    }
}

/// A successful solver response selecting the given roster slots.
pub fn create_test_response(status: &str, selected: &[i64]) -> SolveResponse {
    SolveResponse {
        success: matches!(status, "OPTIMAL" | "FEASIBLE" | "OK"),
        status: status.to_string(),
        selected_player_ids: if selected.is_empty() {
            None
        } else {
            Some(selected.to_vec())
        },
        squad_rating: Some(80.0),
        chemistry: Some(20),
        solve_time: Some(1.5),
        message: None,
    }
}
