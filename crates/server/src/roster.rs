// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! File-backed player store.
//!
//! The roster lives in one JSON file: the extracted club players plus the
//! name tables the parser and translator need. The file is re-read on every
//! query so manual edits between attempts are always picked up.

use sbc_solve::KnownNames;
use sbc_solve_domain::SolverPlayer;
use sbc_solve_pipeline::{PipelineError, PlayerStore};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A named id entry in one of the roster's lookup tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedId {
    /// The display name, as it appears in requirement text.
    pub name: String,
    /// The database id.
    pub id: i64,
}

/// On-disk shape of the roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterFile {
    /// Every extracted club player.
    pub players: Vec<SolverPlayer>,
    /// Quality name to id, lowercase keys.
    pub qualities: BTreeMap<String, i64>,
    /// Rarity name to id, lowercase keys.
    pub rarities: BTreeMap<String, i64>,
    /// Position name to id, lowercase keys.
    pub positions: BTreeMap<String, i64>,
    /// Known league names.
    pub leagues: Vec<NamedId>,
    /// Known country names.
    pub countries: Vec<NamedId>,
    /// Known club names.
    pub clubs: Vec<NamedId>,
}

/// A [`PlayerStore`] backed by a JSON roster file.
#[derive(Debug, Clone)]
pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    /// Creates a store reading from the given file path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads and parses the roster file.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Store` if the file cannot be read or does
    /// not match the roster schema.
    async fn load(&self) -> Result<RosterFile, PipelineError> {
        let raw: String = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            PipelineError::Store(format!(
                "could not read roster file {}: {e}",
                self.path.display()
            ))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            PipelineError::Store(format!(
                "roster file {} is not valid: {e}",
                self.path.display()
            ))
        })
    }
}

impl PlayerStore for RosterStore {
    async fn available_players(
        &self,
        exclude_active_squad: bool,
    ) -> Result<Vec<SolverPlayer>, PipelineError> {
        let roster: RosterFile = self.load().await?;
        let players: Vec<SolverPlayer> = if exclude_active_squad {
            roster
                .players
                .into_iter()
                .filter(|p| !p.in_active_squad)
                .collect()
        } else {
            roster.players
        };
        Ok(players)
    }

    async fn players_by_ids(&self, ids: &[i64]) -> Result<Vec<SolverPlayer>, PipelineError> {
        let roster: RosterFile = self.load().await?;
        Ok(roster
            .players
            .into_iter()
            .filter(|p| ids.contains(&p.id))
            .collect())
    }

    async fn quality_name_to_id(&self) -> Result<BTreeMap<String, i64>, PipelineError> {
        Ok(self.load().await?.qualities)
    }

    async fn rarity_name_to_id(&self) -> Result<BTreeMap<String, i64>, PipelineError> {
        Ok(self.load().await?.rarities)
    }

    async fn position_name_to_id(&self) -> Result<BTreeMap<String, i64>, PipelineError> {
        Ok(self.load().await?.positions)
    }

    async fn known_names(&self) -> Result<KnownNames, PipelineError> {
        let roster: RosterFile = self.load().await?;
        let to_pairs = |entries: Vec<NamedId>| -> Vec<(String, i64)> {
            entries.into_iter().map(|e| (e.name, e.id)).collect()
        };
        Ok(KnownNames::new(
            to_pairs(roster.leagues),
            to_pairs(roster.countries),
            to_pairs(roster.clubs),
        ))
    }
}
