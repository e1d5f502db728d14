// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Best-effort position labeling for display.
//!
//! The solver guarantees that a valid position assignment exists but does
//! not say which player fills which slot. This heuristic sorts the selected
//! players by overall rating, descending, and pairs them with the slot list
//! index for index. The labels are for the operator's eyes only; placing a
//! player in the wrong slot never invalidates the solved squad.

use crate::orchestrator::LabeledPlayer;
use sbc_solve_domain::{PositionSlot, SolverPlayer};

/// Pairs selected players with required position slots for display.
///
/// Players beyond the slot list get no label; slots beyond the player list
/// are left unfilled. When no slots were extracted at all, every player
/// comes back unlabeled.
#[must_use]
pub fn label_positions(selected: Vec<SolverPlayer>, slots: &[PositionSlot]) -> Vec<LabeledPlayer> {
    let mut players = selected;
    players.sort_by(|a, b| b.ovr.cmp(&a.ovr).then_with(|| a.id.cmp(&b.id)));

    players
        .into_iter()
        .enumerate()
        .map(|(index, player)| LabeledPlayer {
            position_name: slots.get(index).map(|slot| slot.position_name.clone()),
            player,
        })
        .collect()
}
