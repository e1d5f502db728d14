// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end orchestrator tests against mock collaborators.

use crate::error::PipelineError;
use crate::orchestrator::{SolveAttempt, SolveOutcome};
use crate::progress::{ProgressBroadcaster, ProgressEvent};
use sbc_solve_domain::PositionSlot;
use sbc_solve_protocol::SolveBudget;
use sbc_solve_protocol::wire::SolveResponse;

use super::helpers::{
    FakeSolver, FakeSource, FakeStore, create_test_player, create_test_response,
};

fn attempt_parts() -> (FakeSource, FakeStore, ProgressBroadcaster) {
    let source = FakeSource::with_lines(&["Team Rating: Min. 80", "Rare Players: Min. 2"]);
    let store = FakeStore {
        players: vec![
            create_test_player(1, 85),
            create_test_player(2, 82),
            create_test_player(3, 79),
        ],
    };
    (source, store, ProgressBroadcaster::new())
}

#[tokio::test]
async fn test_successful_attempt_returns_solved() {
    let (source, store, progress) = attempt_parts();
    let solver = FakeSolver::with_response(create_test_response("OPTIMAL", &[1, 2]));
    let attempt = SolveAttempt::new(&source, &store, &solver, &progress, SolveBudget::default());

    let outcome = attempt.run().await.expect("attempt should succeed");
    match outcome {
        SolveOutcome::Solved {
            squad,
            rating,
            chemistry,
            solve_time,
        } => {
            assert_eq!(squad.len(), 2);
            // Labeled best-first.
            assert_eq!(squad[0].player.id, 1);
            assert_eq!(rating, Some(80.0));
            assert_eq!(chemistry, Some(20));
            assert_eq!(solve_time, Some(1.5));
        }
        other => panic!("Expected Solved, got {other:?}"),
    }
}

#[tokio::test]
async fn test_request_carries_parsed_constraints_and_players() {
    let (source, store, progress) = attempt_parts();
    let solver = FakeSolver::with_response(create_test_response("OPTIMAL", &[1]));
    let attempt = SolveAttempt::new(&source, &store, &solver, &progress, SolveBudget::default());

    attempt.run().await.expect("attempt should succeed");

    let request = solver
        .last_request
        .lock()
        .unwrap()
        .clone()
        .expect("solver was called");
    assert_eq!(request.available_players.len(), 3);
    assert_eq!(
        request.requirements.team_rating.as_ref().map(|c| c.value),
        Some(80)
    );
    assert_eq!(
        request.requirements.rarity.as_ref().map(|r| r[0].count),
        Some(2)
    );
    assert!(request.quality_map.is_some());
    assert!(request.rarity_map.is_some());
}

#[tokio::test]
async fn test_infeasible_is_an_outcome_not_an_error() {
    let (source, store, progress) = attempt_parts();
    let mut response: SolveResponse = create_test_response("INFEASIBLE", &[]);
    response.message = Some(String::from("not enough rare players"));
    let solver = FakeSolver::with_response(response);
    let attempt = SolveAttempt::new(&source, &store, &solver, &progress, SolveBudget::default());

    let outcome = attempt.run().await.expect("infeasible is not an error");
    assert_eq!(
        outcome,
        SolveOutcome::Infeasible {
            message: String::from("not enough rare players"),
        }
    );
}

#[tokio::test]
async fn test_timeout_is_an_outcome_not_an_error() {
    let (source, store, progress) = attempt_parts();
    let solver = FakeSolver::with_response(create_test_response("TIMEOUT", &[]));
    let attempt = SolveAttempt::new(&source, &store, &solver, &progress, SolveBudget::default());

    let outcome = attempt.run().await.expect("timeout is not an error");
    assert!(matches!(outcome, SolveOutcome::TimedOut { .. }));
}

#[tokio::test]
async fn test_unknown_solver_stop_maps_to_timeout() {
    let (source, store, progress) = attempt_parts();
    let solver = FakeSolver::with_response(create_test_response("UNKNOWN", &[]));
    let attempt = SolveAttempt::new(&source, &store, &solver, &progress, SolveBudget::default());

    let outcome = attempt.run().await.expect("unknown maps to timeout");
    assert!(matches!(outcome, SolveOutcome::TimedOut { .. }));
}

#[tokio::test]
async fn test_model_invalid_is_a_solver_error() {
    let (source, store, progress) = attempt_parts();
    let solver = FakeSolver::with_response(create_test_response("MODEL_INVALID", &[]));
    let attempt = SolveAttempt::new(&source, &store, &solver, &progress, SolveBudget::default());

    let error = attempt.run().await.expect_err("model invalid is an error");
    assert!(matches!(
        error,
        PipelineError::Solver { ref status, .. } if status == "MODEL_INVALID"
    ));
}

#[tokio::test]
async fn test_empty_pool_aborts_before_the_solver_is_called() {
    let source = FakeSource::with_lines(&["Team Rating: Min. 80"]);
    let store = FakeStore {
        players: Vec::new(),
    };
    let progress = ProgressBroadcaster::new();
    let solver = FakeSolver::with_response(create_test_response("OPTIMAL", &[1]));
    let attempt = SolveAttempt::new(&source, &store, &solver, &progress, SolveBudget::default());

    let error = attempt.run().await.expect_err("empty pool is fatal");
    assert_eq!(error, PipelineError::EmptyPlayerPool);
    assert!(solver.last_request.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_extraction_failure_is_fatal() {
    let mut source = FakeSource::with_lines(&[]);
    source.fail = true;
    let store = FakeStore {
        players: vec![create_test_player(1, 85)],
    };
    let progress = ProgressBroadcaster::new();
    let solver = FakeSolver::with_response(create_test_response("OPTIMAL", &[1]));
    let attempt = SolveAttempt::new(&source, &store, &solver, &progress, SolveBudget::default());

    let error = attempt.run().await.expect_err("extraction failure is fatal");
    assert!(matches!(error, PipelineError::Extraction(_)));
}

#[tokio::test]
async fn test_required_slots_resolve_to_position_ids() {
    let mut source = FakeSource::with_lines(&[]);
    source.slots = vec![
        PositionSlot {
            slot_index: 0,
            position_name: String::from("GK"),
        },
        PositionSlot {
            slot_index: 1,
            position_name: String::from("ST"),
        },
    ];
    let store = FakeStore {
        players: vec![create_test_player(1, 85), create_test_player(2, 82)],
    };
    let progress = ProgressBroadcaster::new();
    let solver = FakeSolver::with_response(create_test_response("OPTIMAL", &[1, 2]));
    let attempt = SolveAttempt::new(&source, &store, &solver, &progress, SolveBudget::default());

    attempt.run().await.expect("attempt should succeed");

    let request = solver
        .last_request
        .lock()
        .unwrap()
        .clone()
        .expect("solver was called");
    assert_eq!(request.requirements.required_positions, Some(vec![0, 27]));
}

#[tokio::test]
async fn test_unknown_slot_label_is_a_translation_error() {
    let mut source = FakeSource::with_lines(&[]);
    source.slots = vec![PositionSlot {
        slot_index: 0,
        position_name: String::from("QB"),
    }];
    let store = FakeStore {
        players: vec![create_test_player(1, 85)],
    };
    let progress = ProgressBroadcaster::new();
    let solver = FakeSolver::with_response(create_test_response("OPTIMAL", &[1]));
    let attempt = SolveAttempt::new(&source, &store, &solver, &progress, SolveBudget::default());

    let error = attempt.run().await.expect_err("unknown slot label");
    assert!(matches!(error, PipelineError::Translation(_)));
}

#[tokio::test]
async fn test_solved_squad_is_labeled_against_slots() {
    let mut source = FakeSource::with_lines(&[]);
    source.slots = vec![
        PositionSlot {
            slot_index: 0,
            position_name: String::from("ST"),
        },
        PositionSlot {
            slot_index: 1,
            position_name: String::from("CB"),
        },
    ];
    let store = FakeStore {
        players: vec![create_test_player(1, 79), create_test_player(2, 88)],
    };
    let progress = ProgressBroadcaster::new();
    let solver = FakeSolver::with_response(create_test_response("FEASIBLE", &[1, 2]));
    let attempt = SolveAttempt::new(&source, &store, &solver, &progress, SolveBudget::default());

    let outcome = attempt.run().await.expect("attempt should succeed");
    match outcome {
        SolveOutcome::Solved { squad, .. } => {
            // Highest rated player takes the first slot.
            assert_eq!(squad[0].player.id, 2);
            assert_eq!(squad[0].position_name.as_deref(), Some("ST"));
            assert_eq!(squad[1].player.id, 1);
            assert_eq!(squad[1].position_name.as_deref(), Some("CB"));
        }
        other => panic!("Expected Solved, got {other:?}"),
    }
}

#[tokio::test]
async fn test_progress_narration_reaches_subscribers() {
    let (source, store, progress) = attempt_parts();
    let mut events = progress.subscribe();
    let solver = FakeSolver::with_response(create_test_response("OPTIMAL", &[1]));
    let attempt = SolveAttempt::new(&source, &store, &solver, &progress, SolveBudget::default());

    attempt.run().await.expect("attempt should succeed");

    let mut saw_log = false;
    let mut saw_completed = false;
    while let Ok(event) = events.try_recv() {
        match event {
            ProgressEvent::Log { .. } => saw_log = true,
            ProgressEvent::Completed { success, .. } => {
                saw_completed = true;
                assert!(success);
            }
            other => panic!("Unexpected event {other:?}"),
        }
    }
    assert!(saw_log);
    assert!(saw_completed);
}

#[tokio::test]
async fn test_error_is_narrated_before_returning() {
    let source = FakeSource::with_lines(&[]);
    let store = FakeStore {
        players: Vec::new(),
    };
    let progress = ProgressBroadcaster::new();
    let mut events = progress.subscribe();
    let solver = FakeSolver::with_response(create_test_response("OPTIMAL", &[]));
    let attempt = SolveAttempt::new(&source, &store, &solver, &progress, SolveBudget::default());

    attempt.run().await.expect_err("empty pool is fatal");

    let mut saw_error = false;
    while let Ok(event) = events.try_recv() {
        if matches!(event, ProgressEvent::Error { .. }) {
            saw_error = true;
        }
    }
    assert!(saw_error);
}
