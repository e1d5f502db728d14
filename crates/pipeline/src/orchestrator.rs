// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One solve attempt from raw challenge text to a labeled squad.

use crate::assignment::label_positions;
use crate::collaborators::{PlayerStore, RequirementSource, SquadSolver};
use crate::error::PipelineError;
use crate::progress::{ProgressBroadcaster, ProgressEvent};
use sbc_solve::{KnownNames, ParseReport, parse_requirement_lines};
use sbc_solve_domain::{DomainError, PositionSlot, SolverPlayer};
use sbc_solve_protocol::{
    SolveBudget, SolveReport, SolverStatus, build_solve_request, interpret_response,
};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// A selected player plus the display label assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LabeledPlayer {
    /// The selected player.
    pub player: SolverPlayer,
    /// The position label to show, if a slot was available.
    pub position_name: Option<String>,
}

/// How one solve attempt ended.
///
/// Infeasibility and timeouts are expected outcomes of a working pipeline,
/// not errors.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SolveOutcome {
    /// The solver found a valid squad.
    Solved {
        /// The selected players with display labels, best first.
        squad: Vec<LabeledPlayer>,
        /// Rating of the selected squad.
        rating: Option<f64>,
        /// Chemistry of the selected squad.
        chemistry: Option<i64>,
        /// Wall-clock solve time in seconds.
        solve_time: Option<f64>,
    },
    /// The constraints admit no squad from the available players.
    Infeasible {
        /// The solver's explanation, or a stock message.
        message: String,
    },
    /// The time budget ran out before a squad was found.
    TimedOut {
        /// The solver's explanation, or a stock message.
        message: String,
    },
}

/// A single solve attempt wired to its collaborators.
///
/// Attempts share nothing: every run re-reads the roster and rebuilds the
/// requirement set from scratch.
pub struct SolveAttempt<'a, R, P, S> {
    source: &'a R,
    store: &'a P,
    solver: &'a S,
    progress: &'a ProgressBroadcaster,
    budget: SolveBudget,
}

impl<'a, R, P, S> SolveAttempt<'a, R, P, S>
where
    R: RequirementSource,
    P: PlayerStore,
    S: SquadSolver,
{
    /// Wires up an attempt. Nothing runs until [`Self::run`] is called.
    #[must_use]
    pub const fn new(
        source: &'a R,
        store: &'a P,
        solver: &'a S,
        progress: &'a ProgressBroadcaster,
        budget: SolveBudget,
    ) -> Self {
        Self {
            source,
            store,
            solver,
            progress,
            budget,
        }
    }

    /// Runs the attempt end to end.
    ///
    /// The stages are sequential: extract the challenge, parse the
    /// requirement lines, enrich with roster data, submit to the solver,
    /// interpret the response. Time budgets are hints enforced by the
    /// solver; no second local timeout is applied.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Extraction` if the challenge cannot be read,
    /// `PipelineError::EmptyPlayerPool` if no players are available (the
    /// solver is never called in that case), `PipelineError::Store` /
    /// `PipelineError::Translation` for roster and mapping failures, and
    /// `PipelineError::Solver` when the solver service itself fails.
    /// Infeasibility and timeouts come back as `Ok` outcomes.
    pub async fn run(&self) -> Result<SolveOutcome, PipelineError> {
        let result = self.run_stages().await;
        if let Err(error) = &result {
            self.progress.broadcast(&ProgressEvent::Error {
                message: error.to_string(),
            });
        }
        result
    }

    async fn run_stages(&self) -> Result<SolveOutcome, PipelineError> {
        self.progress.log("Reading challenge requirements");
        let lines: Vec<String> = self.source.requirement_lines().await?;
        let extracted_size: Option<u32> = self.source.squad_size().await?;
        let slots: Vec<PositionSlot> = self.source.required_positions().await?;

        self.progress.log(format!(
            "Parsing {} requirement line(s)",
            lines.len()
        ));
        let names: KnownNames = self.store.known_names().await?;
        let mut report: ParseReport = parse_requirement_lines(&lines, extracted_size, &names);
        if !report.unparsed.is_empty() {
            self.progress.log(format!(
                "{} requirement line(s) were not understood and will be ignored",
                report.unparsed.len()
            ));
        }

        if !slots.is_empty() {
            report.requirements.required_positions = Some(self.resolve_slots(&slots).await?);
        }

        self.progress.log("Collecting available players");
        let players: Vec<SolverPlayer> = self.store.available_players(true).await?;
        if players.is_empty() {
            return Err(PipelineError::EmptyPlayerPool);
        }
        let quality_map: BTreeMap<String, i64> = self.store.quality_name_to_id().await?;
        let rarity_map: BTreeMap<String, i64> = self.store.rarity_name_to_id().await?;

        self.progress.log(format!(
            "Submitting {} player(s) and {} constraint(s) to the solver",
            players.len(),
            report.requirements.constraint_count()
        ));
        let request = build_solve_request(
            &report.requirements,
            &players,
            self.budget,
            quality_map,
            rarity_map,
        );
        let response = self.solver.solve(&request).await?;

        self.interpret(interpret_response(response), &slots).await
    }

    /// Maps extracted slot labels to position ids, preserving slot order.
    async fn resolve_slots(&self, slots: &[PositionSlot]) -> Result<Vec<i64>, PipelineError> {
        let positions: BTreeMap<String, i64> = self.store.position_name_to_id().await?;
        slots
            .iter()
            .map(|slot| {
                positions
                    .get(&slot.position_name.to_lowercase())
                    .copied()
                    .ok_or_else(|| {
                        PipelineError::Translation(
                            DomainError::UnknownPosition {
                                name: slot.position_name.clone(),
                            }
                            .to_string(),
                        )
                    })
            })
            .collect()
    }

    async fn interpret(
        &self,
        report: SolveReport,
        slots: &[PositionSlot],
    ) -> Result<SolveOutcome, PipelineError> {
        info!(status = %report.status, solve_time = ?report.solve_time, "Solver finished");

        if report.status.is_success() {
            let selected: Vec<SolverPlayer> =
                self.store.players_by_ids(&report.selected_player_ids).await?;
            let squad: Vec<LabeledPlayer> = label_positions(selected, slots);
            self.progress.broadcast(&ProgressEvent::Completed {
                success: true,
                message: format!("Found a squad of {} player(s)", squad.len()),
            });
            return Ok(SolveOutcome::Solved {
                squad,
                rating: report.squad_rating,
                chemistry: report.chemistry,
                solve_time: report.solve_time,
            });
        }

        match report.status {
            SolverStatus::Infeasible => {
                let message = report.message.unwrap_or_else(|| {
                    String::from("The requirements cannot be met with the available players")
                });
                self.progress.broadcast(&ProgressEvent::Completed {
                    success: false,
                    message: message.clone(),
                });
                Ok(SolveOutcome::Infeasible { message })
            }
            SolverStatus::Timeout => {
                let message = report.message.unwrap_or_else(|| {
                    String::from("The solver ran out of time before finding a squad")
                });
                self.progress.broadcast(&ProgressEvent::Completed {
                    success: false,
                    message: message.clone(),
                });
                Ok(SolveOutcome::TimedOut { message })
            }
            status => {
                warn!(status = %status, "Solver reported an unexpected status");
                Err(PipelineError::Solver {
                    status: status.to_string(),
                    message: report
                        .message
                        .unwrap_or_else(|| String::from("no detail provided")),
                })
            }
        }
    }
}
