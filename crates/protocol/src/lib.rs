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

mod client;
mod translate;
pub mod wire;

#[cfg(test)]
mod tests;

pub use client::{SolverClient, SolverClientError};
pub use translate::{
    SolveBudget, SolveReport, SolverStatus, build_solve_request, interpret_response,
};
pub use wire::{SolveRequest, SolveResponse};
