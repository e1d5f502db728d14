// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for protocol tests.

use sbc_solve_domain::SolverPlayer;
use std::collections::BTreeMap;

/// A single roster slot with plausible values.
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
        in_active_squad: true,
    }
}

/// A quality name table like the one served by the roster store.
pub fn create_test_quality_map() -> BTreeMap<String, i64> {
    BTreeMap::from([
        (String::from("bronze"), 4),
        (String::from("silver"), 3),
        (String::from("gold"), 2),
        (String::from("special"), 1),
    ])
}

/// A rarity name table like the one served by the roster store.
pub fn create_test_rarity_map() -> BTreeMap<String, i64> {
    BTreeMap::from([
        (String::from("common"), 1),
        (String::from("rare"), 2),
    ])
}
