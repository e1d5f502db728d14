// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for parser tests.

use crate::KnownNames;

/// A small name table with a handful of well-known leagues, countries and
/// clubs.
pub fn create_test_names() -> KnownNames {
    KnownNames::new(
        vec![
            (String::from("Premier League"), 13),
            (String::from("LaLiga"), 53),
            (String::from("Serie A"), 31),
        ],
        vec![
            (String::from("England"), 14),
            (String::from("Spain"), 45),
            (String::from("Brazil"), 54),
        ],
        vec![
            (String::from("Arsenal"), 1),
            (String::from("Real Madrid"), 243),
        ],
    )
}
