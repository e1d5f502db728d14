// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::constraint::{
    DiversityConstraint, QualityConstraint, RarityConstraint, ScalarConstraint, ScopedConstraint,
};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Squad size used when no requirement line states one.
pub const DEFAULT_SQUAD_SIZE: u32 = 11;

/// The normalized result of parsing one challenge's requirement lines.
///
/// Constructed fresh per solve attempt from transient scraped text; never
/// persisted. List-valued fields preserve input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSet {
    /// Number of players the squad must contain (1-11).
    pub squad_size: u32,
    /// Bound on the squad's overall rating.
    pub team_rating: Option<ScalarConstraint>,
    /// Bound on total squad chemistry.
    pub chemistry: Option<ScalarConstraint>,
    /// Bounds on distinct clubs/leagues/countries in the squad.
    pub diversity: Vec<DiversityConstraint>,
    /// Bounds on players per quality tier.
    pub quality: Vec<QualityConstraint>,
    /// Bounds on rare player counts.
    pub rarity: Vec<RarityConstraint>,
    /// League-scoped player-count bounds.
    pub leagues: Vec<ScopedConstraint>,
    /// Country-scoped player-count bounds.
    pub countries: Vec<ScopedConstraint>,
    /// Club-scoped player-count bounds.
    pub clubs: Vec<ScopedConstraint>,
    /// Position ids required per squad slot, populated post-parse from the
    /// pitch-view extraction, not from requirement text.
    pub required_positions: Option<Vec<i64>>,
}

impl Default for RequirementSet {
    fn default() -> Self {
        Self {
            squad_size: DEFAULT_SQUAD_SIZE,
            team_rating: None,
            chemistry: None,
            diversity: Vec::new(),
            quality: Vec::new(),
            rarity: Vec::new(),
            leagues: Vec::new(),
            countries: Vec::new(),
            clubs: Vec::new(),
            required_positions: None,
        }
    }
}

impl RequirementSet {
    /// Creates an empty requirement set with the default squad size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a squad size value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSquadSize` if the size is outside 1-11.
    pub const fn validate_squad_size(size: u32) -> Result<(), DomainError> {
        if size >= 1 && size <= DEFAULT_SQUAD_SIZE {
            Ok(())
        } else {
            Err(DomainError::InvalidSquadSize { size })
        }
    }

    /// Returns the total number of constraints across all categories.
    #[must_use]
    pub fn constraint_count(&self) -> usize {
        usize::from(self.team_rating.is_some())
            + usize::from(self.chemistry.is_some())
            + self.diversity.len()
            + self.quality.len()
            + self.rarity.len()
            + self.leagues.len()
            + self.countries.len()
            + self.clubs.len()
    }
}
