// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Relational qualifier attached to every counted or scalar constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintRelation {
    /// At least the given count/value.
    Min,
    /// At most the given count/value.
    Max,
    /// Exactly the given count/value.
    Exact,
}

impl ConstraintRelation {
    /// Returns the wire representation of this relation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Exact => "exact",
        }
    }
}

impl FromStr for ConstraintRelation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" | "minimum" => Ok(Self::Min),
            "max" | "maximum" => Ok(Self::Max),
            "exact" | "exactly" | "precisely" => Ok(Self::Exact),
            _ => Err(DomainError::UnknownRelationKeyword(s.to_string())),
        }
    }
}

impl std::fmt::Display for ConstraintRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordinal player grade.
///
/// Tiers form a total order: Bronze < Silver < Gold < Special. The external
/// solver schema has no native floor semantics for this ordinal, so a
/// "minimum quality" directive must be expanded into `Max(0)` constraints on
/// every tier strictly below the stated minimum (see [`Self::tiers_below`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    /// Bronze tier (lowest).
    Bronze,
    /// Silver tier.
    Silver,
    /// Gold tier.
    Gold,
    /// Special tier (highest).
    Special,
}

impl QualityTier {
    /// All tiers in ascending order.
    pub const ALL: [Self; 4] = [Self::Bronze, Self::Silver, Self::Gold, Self::Special];

    /// Returns the lowercase wire name of this tier.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
            Self::Special => "special",
        }
    }

    /// Returns every tier strictly below this one, in ascending order.
    #[must_use]
    pub fn tiers_below(&self) -> Vec<Self> {
        Self::ALL.iter().copied().filter(|t| t < self).collect()
    }
}

impl FromStr for QualityTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bronze" => Ok(Self::Bronze),
            "silver" => Ok(Self::Silver),
            "gold" => Ok(Self::Gold),
            "special" => Ok(Self::Special),
            _ => Err(DomainError::UnknownQualityTier(s.to_string())),
        }
    }
}

impl std::fmt::Display for QualityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Attribute counted by a diversity constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiversityAttribute {
    /// Distinct clubs represented in the squad.
    Clubs,
    /// Distinct leagues represented in the squad.
    Leagues,
    /// Distinct countries represented in the squad.
    Countries,
}

impl DiversityAttribute {
    /// Returns the wire representation of this attribute.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Clubs => "clubs",
            Self::Leagues => "leagues",
            Self::Countries => "countries",
        }
    }
}

/// A relation over a scalar squad property (team rating, chemistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarConstraint {
    /// The relational qualifier.
    pub relation: ConstraintRelation,
    /// The bound value.
    pub value: u32,
}

/// A bound on how many distinct clubs/leagues/countries appear in the squad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiversityConstraint {
    /// The relational qualifier.
    pub relation: ConstraintRelation,
    /// The bound on the distinct-value count.
    pub count: u32,
    /// Which attribute is counted.
    pub attribute: DiversityAttribute,
}

/// A bound on how many squad players carry a given quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityConstraint {
    /// The relational qualifier.
    pub relation: ConstraintRelation,
    /// The bound on the player count.
    pub count: u32,
    /// The tier being counted.
    pub tier: QualityTier,
}

/// A bound on how many squad players are rare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityConstraint {
    /// The relational qualifier.
    pub relation: ConstraintRelation,
    /// The bound on the player count.
    pub count: u32,
    /// Whether the constraint counts rare players.
    pub rare: bool,
}

/// A bound on how many squad players come from a league/country/club scope.
///
/// `ids = None` is the same-value sentinel: all counted players must share
/// one (unspecified) value of the attribute, e.g. "Same League: Min. 3".
/// `ids = Some(..)` restricts the count to players whose attribute value is
/// any of the listed ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopedConstraint {
    /// The relational qualifier.
    pub relation: ConstraintRelation,
    /// The bound on the player count.
    pub count: u32,
    /// The id scope, or `None` for the same-value sentinel.
    pub ids: Option<Vec<i64>>,
}

impl ScopedConstraint {
    /// Creates a same-value sentinel constraint.
    #[must_use]
    pub const fn same_value(relation: ConstraintRelation, count: u32) -> Self {
        Self {
            relation,
            count,
            ids: None,
        }
    }

    /// Creates a constraint scoped to the given ids.
    #[must_use]
    pub const fn scoped(relation: ConstraintRelation, count: u32, ids: Vec<i64>) -> Self {
        Self {
            relation,
            count,
            ids: Some(ids),
        }
    }
}
