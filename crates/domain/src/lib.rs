// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod constraint;
mod error;
mod player;
mod requirement_set;

#[cfg(test)]
mod tests;

pub use constraint::{
    ConstraintRelation, DiversityAttribute, DiversityConstraint, QualityConstraint, QualityTier,
    RarityConstraint, ScalarConstraint, ScopedConstraint,
};
pub use error::DomainError;
pub use player::{PositionSlot, SolverPlayer};
pub use requirement_set::{DEFAULT_SQUAD_SIZE, RequirementSet};
