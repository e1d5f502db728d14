// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure translation between the domain model and the wire schema.
//!
//! Both directions are element-wise and order-preserving; neither can fail
//! on well-typed input. Shape problems on the response side surface as
//! decode errors in the client, not here.

use crate::wire::{
    SolveRequest, SolveResponse, WireClubConstraint, WireCountryConstraint,
    WireDiversityConstraint, WireLeagueConstraint, WirePlayer, WireQualityConstraint,
    WireRarityConstraint, WireRequirements, WireScalarConstraint,
};
use sbc_solve_domain::{RequirementSet, ScalarConstraint, SolverPlayer};
use std::collections::BTreeMap;

/// Time limits handed to the solver. Both are hints enforced solver-side;
/// the pipeline never applies a second local timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveBudget {
    /// Maximum solve time in seconds.
    pub max_solve_time: u64,
    /// Stop when no improvement has been found for this many seconds.
    pub no_improvement_time: u64,
}

impl Default for SolveBudget {
    fn default() -> Self {
        Self {
            max_solve_time: crate::wire::DEFAULT_MAX_SOLVE_TIME,
            no_improvement_time: crate::wire::DEFAULT_NO_IMPROVEMENT_TIME,
        }
    }
}

/// Solver status, parsed from the response's status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverStatus {
    /// The solver proved the squad optimal.
    Optimal,
    /// The solver found a valid squad but did not prove optimality.
    Feasible,
    /// The constraints admit no squad from the given pool.
    Infeasible,
    /// The time budget ran out before a squad was found.
    Timeout,
    /// Any status string this client does not recognize.
    Other(String),
}

impl SolverStatus {
    /// Parses a raw status string.
    ///
    /// The solver reports `UNKNOWN` when its search stops on the time limit,
    /// so that maps to [`Self::Timeout`] as well.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "OPTIMAL" | "OK" => Self::Optimal,
            "FEASIBLE" => Self::Feasible,
            "INFEASIBLE" => Self::Infeasible,
            "TIMEOUT" | "UNKNOWN" => Self::Timeout,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether this status carries a usable squad.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Optimal | Self::Feasible)
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Optimal => write!(f, "OPTIMAL"),
            Self::Feasible => write!(f, "FEASIBLE"),
            Self::Infeasible => write!(f, "INFEASIBLE"),
            Self::Timeout => write!(f, "TIMEOUT"),
            Self::Other(raw) => write!(f, "{raw}"),
        }
    }
}

/// A decoded solve response with the status string resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    /// The solver's own success flag.
    pub success: bool,
    /// The parsed status.
    pub status: SolverStatus,
    /// Roster-slot ids of the selected players, empty when none were sent.
    pub selected_player_ids: Vec<i64>,
    /// Rating of the selected squad.
    pub squad_rating: Option<f64>,
    /// Chemistry of the selected squad.
    pub chemistry: Option<i64>,
    /// Wall-clock solve time in seconds.
    pub solve_time: Option<f64>,
    /// Human-readable detail from the solver.
    pub message: Option<String>,
}

const fn scalar_to_wire(constraint: ScalarConstraint) -> WireScalarConstraint {
    WireScalarConstraint {
        relation: constraint.relation,
        value: constraint.value,
    }
}

fn player_to_wire(player: &SolverPlayer) -> WirePlayer {
    WirePlayer {
        id: player.id,
        player_id: player.player_id,
        display_name: player.display_name.clone(),
        full_name: player.full_name.clone(),
        ovr: player.ovr,
        rating1: player.rating1,
        rating2: player.rating2,
        rating3: player.rating3,
        rating4: player.rating4,
        rating5: player.rating5,
        rating6: player.rating6,
        quality_id: player.quality_id,
        rarity_id: player.rarity_id,
        country_id: player.country_id,
        club_id: player.club_id,
        league_id: player.league_id,
        positions: player.positions.clone(),
        sbc: player.from_sbc_storage,
        squad: player.in_active_squad,
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}

/// Builds the full solve request payload.
///
/// Constraint lists keep the order they carry in `requirements`; empty
/// categories are omitted from the payload entirely.
#[must_use]
pub fn build_solve_request(
    requirements: &RequirementSet,
    players: &[SolverPlayer],
    budget: SolveBudget,
    quality_map: BTreeMap<String, i64>,
    rarity_map: BTreeMap<String, i64>,
) -> SolveRequest {
    let leagues: Vec<WireLeagueConstraint> = requirements
        .leagues
        .iter()
        .map(|c| WireLeagueConstraint {
            relation: c.relation,
            count: c.count,
            league_ids: c.ids.clone(),
        })
        .collect();
    let countries: Vec<WireCountryConstraint> = requirements
        .countries
        .iter()
        .map(|c| WireCountryConstraint {
            relation: c.relation,
            count: c.count,
            country_ids: c.ids.clone(),
        })
        .collect();
    let clubs: Vec<WireClubConstraint> = requirements
        .clubs
        .iter()
        .map(|c| WireClubConstraint {
            relation: c.relation,
            count: c.count,
            club_ids: c.ids.clone(),
        })
        .collect();
    let quality: Vec<WireQualityConstraint> = requirements
        .quality
        .iter()
        .map(|c| WireQualityConstraint {
            relation: c.relation,
            count: c.count,
            quality: c.tier,
        })
        .collect();
    let rarity: Vec<WireRarityConstraint> = requirements
        .rarity
        .iter()
        .map(|c| WireRarityConstraint {
            relation: c.relation,
            count: c.count,
            rare: c.rare,
        })
        .collect();
    let diversity: Vec<WireDiversityConstraint> = requirements
        .diversity
        .iter()
        .map(|c| WireDiversityConstraint {
            relation: c.relation,
            count: c.count,
            attribute: c.attribute,
        })
        .collect();

    SolveRequest {
        requirements: WireRequirements {
            squad_size: requirements.squad_size,
            required_positions: requirements.required_positions.clone(),
            leagues: non_empty(leagues),
            countries: non_empty(countries),
            clubs: non_empty(clubs),
            quality: non_empty(quality),
            rarity: non_empty(rarity),
            team_rating: requirements.team_rating.map(scalar_to_wire),
            chemistry: requirements.chemistry.map(scalar_to_wire),
            diversity: non_empty(diversity),
        },
        available_players: players.iter().map(player_to_wire).collect(),
        max_solve_time: budget.max_solve_time,
        no_improvement_time: budget.no_improvement_time,
        quality_map: Some(quality_map),
        rarity_map: Some(rarity_map),
    }
}

/// Resolves a decoded response into a [`SolveReport`].
#[must_use]
pub fn interpret_response(response: SolveResponse) -> SolveReport {
    SolveReport {
        success: response.success,
        status: SolverStatus::parse(&response.status),
        selected_player_ids: response.selected_player_ids.unwrap_or_default(),
        squad_rating: response.squad_rating,
        chemistry: response.chemistry,
        solve_time: response.solve_time,
        message: response.message,
    }
}
