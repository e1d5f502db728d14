// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::classify::{Claim, KnownNames, classify_line};
use sbc_solve_domain::RequirementSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The outcome of running the cascade over a full set of requirement lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    /// The assembled requirement set.
    pub requirements: RequirementSet,
    /// Lines no stage claimed, verbatim. Reported, never fatal.
    pub unparsed: Vec<String>,
}

/// Drives the classifier over all lines, in input order, assembling a
/// single [`RequirementSet`].
///
/// List-valued categories append; scalar categories overwrite with the last
/// writer winning (well-formed input never repeats a scalar category, but a
/// repeat must not crash — it is logged as probable requirement loss).
/// `extracted_squad_size` is the size read from the challenge header, if
/// any; a squad-size requirement line still overrides it. Parsing the same
/// ordered lines twice yields identical reports.
#[must_use]
pub fn parse_requirement_lines(
    lines: &[String],
    extracted_squad_size: Option<u32>,
    names: &KnownNames,
) -> ParseReport {
    let mut requirements: RequirementSet = RequirementSet::new();
    if let Some(size) = extracted_squad_size
        && RequirementSet::validate_squad_size(size).is_ok()
    {
        requirements.squad_size = size;
    }
    let mut unparsed: Vec<String> = Vec::new();

    for line in lines {
        let lowered: String = line.to_lowercase().trim().to_string();
        match classify_line(&lowered, names, requirements.squad_size) {
            Some(Claim::SquadSize(size)) => {
                requirements.squad_size = size;
            }
            Some(Claim::TeamRating(constraint)) => {
                if let Some(previous) = requirements.team_rating.replace(constraint) {
                    warn!(?previous, current = ?constraint, "Duplicate team rating line, keeping the last one");
                }
            }
            Some(Claim::Chemistry(constraint)) => {
                if let Some(previous) = requirements.chemistry.replace(constraint) {
                    warn!(?previous, current = ?constraint, "Duplicate chemistry line, keeping the last one");
                }
            }
            Some(Claim::Diversity(constraint)) => requirements.diversity.push(constraint),
            Some(Claim::Quality(constraints)) => requirements.quality.extend(constraints),
            Some(Claim::Rarity(constraint)) => requirements.rarity.push(constraint),
            Some(Claim::League(constraint)) => requirements.leagues.push(constraint),
            Some(Claim::Country(constraint)) => requirements.countries.push(constraint),
            Some(Claim::Club(constraint)) => requirements.clubs.push(constraint),
            None => {
                warn!(line = %line, "Could not parse requirement line");
                unparsed.push(line.clone());
            }
        }
    }

    ParseReport {
        requirements,
        unparsed,
    }
}
