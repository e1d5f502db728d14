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
#![allow(clippy::multiple_crate_versions)]

mod assignment;
mod collaborators;
mod error;
mod orchestrator;
mod progress;

#[cfg(test)]
mod tests;

pub use assignment::label_positions;
pub use collaborators::{PlayerStore, RequirementSource, SquadSolver};
pub use error::PipelineError;
pub use orchestrator::{LabeledPlayer, SolveAttempt, SolveOutcome};
pub use progress::{ProgressBroadcaster, ProgressEvent};
