// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Serde structs mirroring the external solver's JSON schema.
//!
//! Every field is snake_case on the wire and the relational qualifier of a
//! constraint is tagged `"type"`. Response decoding requires `success` and
//! `status`; everything else is optional and unknown extra fields are
//! ignored.

use sbc_solve_domain::{ConstraintRelation, DiversityAttribute, QualityTier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default ceiling for a single solve, in seconds.
pub const DEFAULT_MAX_SOLVE_TIME: u64 = 60;

/// Default no-improvement cutoff, in seconds.
pub const DEFAULT_NO_IMPROVEMENT_TIME: u64 = 30;

/// A league-scoped player-count bound.
///
/// `league_ids = None` means all counted players must share one league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireLeagueConstraint {
    /// The relational qualifier.
    #[serde(rename = "type")]
    pub relation: ConstraintRelation,
    /// The bound on the player count.
    pub count: u32,
    /// Specific league ids, or `None` for the same-value form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league_ids: Option<Vec<i64>>,
}

/// A country-scoped player-count bound.
///
/// `country_ids = None` means all counted players must share one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireCountryConstraint {
    /// The relational qualifier.
    #[serde(rename = "type")]
    pub relation: ConstraintRelation,
    /// The bound on the player count.
    pub count: u32,
    /// Specific country ids, or `None` for the same-value form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_ids: Option<Vec<i64>>,
}

/// A club-scoped player-count bound.
///
/// `club_ids = None` means all counted players must share one club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireClubConstraint {
    /// The relational qualifier.
    #[serde(rename = "type")]
    pub relation: ConstraintRelation,
    /// The bound on the player count.
    pub count: u32,
    /// Specific club ids, or `None` for the same-value form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club_ids: Option<Vec<i64>>,
}

/// A bound on players of one quality tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireQualityConstraint {
    /// The relational qualifier.
    #[serde(rename = "type")]
    pub relation: ConstraintRelation,
    /// The bound on the player count.
    pub count: u32,
    /// The tier being counted, lowercase on the wire.
    pub quality: QualityTier,
}

/// A bound on rare (or non-rare) player counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireRarityConstraint {
    /// The relational qualifier.
    #[serde(rename = "type")]
    pub relation: ConstraintRelation,
    /// The bound on the player count.
    pub count: u32,
    /// Whether rare players are being counted.
    pub rare: bool,
}

/// A bound on a scalar squad property (team rating, chemistry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireScalarConstraint {
    /// The relational qualifier.
    #[serde(rename = "type")]
    pub relation: ConstraintRelation,
    /// The bound value.
    pub value: u32,
}

/// A bound on the number of distinct clubs/leagues/countries in the squad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireDiversityConstraint {
    /// The relational qualifier.
    #[serde(rename = "type")]
    pub relation: ConstraintRelation,
    /// The bound on the distinct-value count.
    pub count: u32,
    /// Which attribute is counted.
    pub attribute: DiversityAttribute,
}

/// The complete requirement block of a solve request.
///
/// List-valued categories are omitted from the payload when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireRequirements {
    /// Number of players the squad must contain.
    pub squad_size: u32,
    /// Position ids, one per squad slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_positions: Option<Vec<i64>>,
    /// League-scoped bounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leagues: Option<Vec<WireLeagueConstraint>>,
    /// Country-scoped bounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<WireCountryConstraint>>,
    /// Club-scoped bounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clubs: Option<Vec<WireClubConstraint>>,
    /// Quality-tier bounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<Vec<WireQualityConstraint>>,
    /// Rarity bounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<Vec<WireRarityConstraint>>,
    /// Bound on the squad's overall rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_rating: Option<WireScalarConstraint>,
    /// Bound on total squad chemistry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chemistry: Option<WireScalarConstraint>,
    /// Distinct-value bounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diversity: Option<Vec<WireDiversityConstraint>>,
}

/// One available roster slot as serialized for the solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WirePlayer {
    /// Roster-slot identifier.
    pub id: i64,
    /// The underlying player identifier.
    pub player_id: i64,
    /// Short display name.
    pub display_name: String,
    /// Full name.
    pub full_name: String,
    /// Overall rating.
    pub ovr: u32,
    /// First secondary rating attribute.
    pub rating1: u32,
    /// Second secondary rating attribute.
    pub rating2: u32,
    /// Third secondary rating attribute.
    pub rating3: u32,
    /// Fourth secondary rating attribute.
    pub rating4: u32,
    /// Fifth secondary rating attribute.
    pub rating5: u32,
    /// Sixth secondary rating attribute.
    pub rating6: u32,
    /// Quality tier id.
    pub quality_id: i64,
    /// Rarity id.
    pub rarity_id: i64,
    /// Country id.
    pub country_id: i64,
    /// Club id.
    pub club_id: i64,
    /// League id.
    pub league_id: i64,
    /// Ids of every position this player is eligible for.
    pub positions: Vec<i64>,
    /// Whether this copy lives in SBC storage.
    pub sbc: bool,
    /// Whether this copy is currently in the active squad.
    pub squad: bool,
}

/// The full solve request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// The translated constraint block.
    pub requirements: WireRequirements,
    /// Every roster slot the solver may pick from.
    pub available_players: Vec<WirePlayer>,
    /// Maximum solve time in seconds.
    pub max_solve_time: u64,
    /// Stop when no improvement has been found for this many seconds.
    pub no_improvement_time: u64,
    /// Quality name to database id, e.g. `{"gold": 2}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_map: Option<BTreeMap<String, i64>>,
    /// Rarity name to database id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity_map: Option<BTreeMap<String, i64>>,
}

/// The solver's response payload.
///
/// `success` and `status` must be present; a payload without them fails to
/// decode. Everything else defaults to absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResponse {
    /// Whether the solver found a usable squad.
    pub success: bool,
    /// Raw status string, e.g. `OPTIMAL` or `INFEASIBLE`.
    pub status: String,
    /// Roster-slot ids of the selected players.
    #[serde(default)]
    pub selected_player_ids: Option<Vec<i64>>,
    /// Rating of the selected squad.
    #[serde(default)]
    pub squad_rating: Option<f64>,
    /// Chemistry of the selected squad.
    #[serde(default)]
    pub chemistry: Option<i64>,
    /// Wall-clock solve time in seconds.
    #[serde(default)]
    pub solve_time: Option<f64>,
    /// Human-readable detail, populated on failure statuses.
    #[serde(default)]
    pub message: Option<String>,
}
