// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The ordered line-classification cascade.
//!
//! Each stage inspects a lowercased, trimmed requirement line and either
//! claims it or declines. Stages run in a fixed sequence with early exit;
//! several patterns are prefixes of each other, so the order is load-bearing
//! and must stay an explicit, auditable list.

use crate::numeric::{extract_relation_count, pattern};
use regex::Regex;
use sbc_solve_domain::{
    ConstraintRelation, DiversityAttribute, DiversityConstraint, QualityConstraint, QualityTier,
    RarityConstraint, ScalarConstraint, ScopedConstraint,
};
use std::str::FromStr;
use std::sync::LazyLock;

/// Lowercased name-to-id tables for league/country/club substring matching.
///
/// Resolved from the backing store before parsing begins; the cascade itself
/// performs no lookups.
#[derive(Debug, Clone, Default)]
pub struct KnownNames {
    /// League names and their ids.
    pub leagues: Vec<(String, i64)>,
    /// Country names and their ids.
    pub countries: Vec<(String, i64)>,
    /// Club names and their ids.
    pub clubs: Vec<(String, i64)>,
}

impl KnownNames {
    /// Builds the tables, normalizing every name to lowercase.
    #[must_use]
    pub fn new(
        leagues: Vec<(String, i64)>,
        countries: Vec<(String, i64)>,
        clubs: Vec<(String, i64)>,
    ) -> Self {
        let lower = |table: Vec<(String, i64)>| {
            table
                .into_iter()
                .map(|(name, id)| (name.to_lowercase(), id))
                .collect()
        };
        Self {
            leagues: lower(leagues),
            countries: lower(countries),
            clubs: lower(clubs),
        }
    }
}

/// The constraint a stage extracted from one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Claim {
    /// The line set the squad size.
    SquadSize(u32),
    /// The line bound the squad's overall rating.
    TeamRating(ScalarConstraint),
    /// The line bound total chemistry.
    Chemistry(ScalarConstraint),
    /// The line bound distinct clubs/leagues/countries.
    Diversity(DiversityConstraint),
    /// The line produced quality-tier constraints. A minimum-quality
    /// threshold expands into one `Max(0)` per tier below the stated floor,
    /// so a single line may yield zero or more constraints.
    Quality(Vec<QualityConstraint>),
    /// The line bound rare player counts.
    Rarity(RarityConstraint),
    /// The line produced a league-scoped constraint.
    League(ScopedConstraint),
    /// The line produced a country-scoped constraint.
    Country(ScopedConstraint),
    /// The line produced a club-scoped constraint.
    Club(ScopedConstraint),
}

/// Per-line classification context.
struct Ctx<'a> {
    /// The lowercased, trimmed line.
    line: &'a str,
    /// Name-to-id tables for scoped constraints.
    names: &'a KnownNames,
    /// The squad size known at the moment this line is classified.
    squad_size: u32,
}

type Stage = for<'a> fn(&Ctx<'a>) -> Option<Claim>;

/// The cascade, in claim-precedence order. Squad size runs first so a bare
/// number elsewhere is never misread; quality runs before rarity so a line
/// naming both a tier and "rare" is a quality claim.
const STAGES: [Stage; 11] = [
    squad_size,
    team_rating,
    chemistry,
    diversity,
    quality_floor,
    quality_exact,
    quality_counted,
    rarity,
    league,
    country,
    club,
];

/// Runs the cascade over one lowercased, trimmed line.
///
/// The first stage to claim the line wins; at most one claim is produced.
/// Returns `None` when no stage recognizes the line, in which case the
/// caller reports it as an unparsed requirement.
#[must_use]
pub fn classify_line(line: &str, names: &KnownNames, squad_size: u32) -> Option<Claim> {
    let ctx = Ctx {
        line,
        names,
        squad_size,
    };
    STAGES.iter().find_map(|stage| stage(&ctx))
}

static SQUAD_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"(?:squad\s+size|number\s+of\s+players(?:\s+in\s+the\s+squad)?|players)[\s.:]*(\d+)")
});
static BARE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^(\d+)$"));

fn squad_size(ctx: &Ctx<'_>) -> Option<Claim> {
    for re in [&SQUAD_SIZE_RE, &BARE_NUMBER_RE] {
        if let Some(caps) = re.captures(ctx.line)
            && let Some(size) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok())
            && (1..=11).contains(&size)
        {
            return Some(Claim::SquadSize(size));
        }
    }
    None
}

static TEAM_RATING_RE: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"(?:team\s+)?rating[\s.:]*(min|minimum|max|maximum|exact|exactly|precisely)[\s.:]*(\d+)")
});

fn team_rating(ctx: &Ctx<'_>) -> Option<Claim> {
    let caps = TEAM_RATING_RE.captures(ctx.line)?;
    let relation: ConstraintRelation = ConstraintRelation::from_str(caps.get(1)?.as_str()).ok()?;
    let value: u32 = caps.get(2)?.as_str().parse().ok()?;
    Some(Claim::TeamRating(ScalarConstraint { relation, value }))
}

static CHEMISTRY_MIN_RE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?:total\s+|team\s+)?chemistry[\s.:]*(?:min|minimum)[\s.:]*(\d+)"));
static CHEMISTRY_BARE_RE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?:total\s+|team\s+)?chemistry[\s.:]*(\d+)"));

fn chemistry(ctx: &Ctx<'_>) -> Option<Claim> {
    // A bare chemistry count has no relation keyword and defaults to Min.
    for re in [&CHEMISTRY_MIN_RE, &CHEMISTRY_BARE_RE] {
        if let Some(caps) = re.captures(ctx.line)
            && let Some(value) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok())
        {
            return Some(Claim::Chemistry(ScalarConstraint {
                relation: ConstraintRelation::Min,
                value,
            }));
        }
    }
    None
}

static DIVERSITY_RE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(clubs|leagues|countries|nations)\s+in\s+(?:the\s+)?squad"));

fn diversity(ctx: &Ctx<'_>) -> Option<Claim> {
    let caps = DIVERSITY_RE.captures(ctx.line)?;
    let attribute: DiversityAttribute = match caps.get(1)?.as_str() {
        "clubs" => DiversityAttribute::Clubs,
        "leagues" => DiversityAttribute::Leagues,
        _ => DiversityAttribute::Countries,
    };
    let (relation, count) = extract_relation_count(ctx.line)?;
    Some(Claim::Diversity(DiversityConstraint {
        relation,
        count,
        attribute,
    }))
}

static QUALITY_FLOOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"player\s+quality[\s.:]*(?:min|minimum)[\s.:]*(bronze|silver|gold|special)")
});

/// "Player Quality: Min. Gold" style floors. The wire schema only knows
/// per-tier min/max/exact counts, so the floor is materialized as a
/// `Max(0)` on every tier strictly below the stated minimum.
fn quality_floor(ctx: &Ctx<'_>) -> Option<Claim> {
    let caps = QUALITY_FLOOR_RE.captures(ctx.line)?;
    let tier: QualityTier = QualityTier::from_str(caps.get(1)?.as_str()).ok()?;
    let expanded: Vec<QualityConstraint> = tier
        .tiers_below()
        .into_iter()
        .map(|below| QualityConstraint {
            relation: ConstraintRelation::Max,
            count: 0,
            tier: below,
        })
        .collect();
    Some(Claim::Quality(expanded))
}

static QUALITY_EXACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"player\s+quality[\s.:]*(?:exactly[\s.:]*)?(bronze|silver|gold|special)")
});
static ANY_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"\d"));

/// "Player Quality: Silver" with no count anywhere in the line means every
/// squad slot must carry that tier.
fn quality_exact(ctx: &Ctx<'_>) -> Option<Claim> {
    if ANY_DIGIT_RE.is_match(ctx.line) {
        return None;
    }
    let caps = QUALITY_EXACT_RE.captures(ctx.line)?;
    let tier: QualityTier = QualityTier::from_str(caps.get(1)?.as_str()).ok()?;
    Some(Claim::Quality(vec![QualityConstraint {
        relation: ConstraintRelation::Exact,
        count: ctx.squad_size,
        tier,
    }]))
}

fn quality_counted(ctx: &Ctx<'_>) -> Option<Claim> {
    let tier: QualityTier = QualityTier::ALL
        .into_iter()
        .find(|tier| ctx.line.contains(tier.name()))?;
    let (relation, count) = extract_relation_count(ctx.line)?;
    Some(Claim::Quality(vec![QualityConstraint {
        relation,
        count,
        tier,
    }]))
}

fn rarity(ctx: &Ctx<'_>) -> Option<Claim> {
    if !ctx.line.contains("rare") {
        return None;
    }
    let (relation, count) = extract_relation_count(ctx.line)?;
    Some(Claim::Rarity(RarityConstraint {
        relation,
        count,
        rare: true,
    }))
}

/// Scans a name table for every name appearing as a substring of the line.
fn matched_ids(line: &str, table: &[(String, i64)]) -> Vec<i64> {
    table
        .iter()
        .filter(|(name, _)| !name.is_empty() && line.contains(name.as_str()))
        .map(|(_, id)| *id)
        .collect()
}

/// Shared shape of the league/country/club stages: a same-value phrase maps
/// to the sentinel, otherwise known names matched in the line form the id
/// scope ("any of these" semantics). The count always comes from the
/// numeric extractor.
fn scoped_claim(
    ctx: &Ctx<'_>,
    same_phrases: &[&str],
    table: &[(String, i64)],
) -> Option<ScopedConstraint> {
    if same_phrases.iter().any(|phrase| ctx.line.contains(phrase)) {
        let (relation, count) = extract_relation_count(ctx.line)?;
        return Some(ScopedConstraint::same_value(relation, count));
    }
    let ids: Vec<i64> = matched_ids(ctx.line, table);
    if ids.is_empty() {
        return None;
    }
    let (relation, count) = extract_relation_count(ctx.line)?;
    Some(ScopedConstraint::scoped(relation, count, ids))
}

fn league(ctx: &Ctx<'_>) -> Option<Claim> {
    scoped_claim(ctx, &["same league"], &ctx.names.leagues).map(Claim::League)
}

fn country(ctx: &Ctx<'_>) -> Option<Claim> {
    scoped_claim(
        ctx,
        &["same country", "same countries", "same nation", "same region"],
        &ctx.names.countries,
    )
    .map(Claim::Country)
}

fn club(ctx: &Ctx<'_>) -> Option<Claim> {
    scoped_claim(ctx, &["same club"], &ctx.names.clubs).map(Claim::Club)
}
