// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A flattened club-roster record as presented to the solver.
///
/// One instance per available roster slot. Instances are immutable once
/// fetched and are rebuilt from the backing store on every solve attempt so
/// manual roster edits are never served stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverPlayer {
    /// Roster-slot identifier (unique per owned copy of a player).
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
    /// Whether this copy lives in SBC storage rather than the main club.
    pub from_sbc_storage: bool,
    /// Whether this copy is currently placed in the active squad.
    pub in_active_squad: bool,
}

/// A required squad slot as extracted from the challenge pitch view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSlot {
    /// The slot index on the pitch, ascending.
    pub slot_index: u32,
    /// The position label shown in the slot (e.g. "ST", "GK").
    pub position_name: String,
}
