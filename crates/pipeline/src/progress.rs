// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Progress narration for solve attempts.
//!
//! Events are display-only and append-only: they tell an operator UI what
//! the pipeline is doing, never drive it. Slow or absent consumers must not
//! block a solve, so everything goes through a lossy broadcast channel.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

/// Maximum number of events to buffer in the broadcast channel.
/// If clients cannot keep up, older events will be dropped.
const EVENT_BUFFER_SIZE: usize = 100;

/// One step of solve-attempt narration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProgressEvent {
    /// Connection confirmation (sent on initial connect).
    Connected {
        /// Server timestamp (ISO 8601).
        timestamp: String,
    },
    /// A human-readable progress line.
    Log {
        /// What the pipeline is doing right now.
        message: String,
    },
    /// The attempt finished, successfully or not.
    Completed {
        /// Whether a squad was found.
        success: bool,
        /// A closing summary line.
        message: String,
    },
    /// The attempt aborted on an error.
    Error {
        /// What went wrong.
        message: String,
    },
}

/// Broadcaster for progress events.
///
/// A lightweight wrapper around `tokio::sync::broadcast` that lets multiple
/// WebSocket clients watch the same attempt.
#[derive(Debug, Clone)]
pub struct ProgressBroadcaster {
    tx: broadcast::Sender<ProgressEvent>,
}

impl ProgressBroadcaster {
    /// Creates a new broadcaster.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self { tx }
    }

    /// Broadcasts an event to all connected clients.
    ///
    /// If no clients are connected, the event is silently dropped. This is
    /// non-blocking and never waits for clients.
    pub fn broadcast(&self, event: &ProgressEvent) {
        match self.tx.send(event.clone()) {
            Ok(count) => {
                debug!(?event, receivers = count, "Broadcast progress event");
            }
            Err(_) => {
                // No receivers, which is fine
                debug!(?event, "No receivers for progress event");
            }
        }
    }

    /// Broadcasts a plain log line.
    pub fn log(&self, message: impl Into<String>) {
        self.broadcast(&ProgressEvent::Log {
            message: message.into(),
        });
    }

    /// Subscribes to the event stream.
    ///
    /// Events sent before subscription are not received.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ProgressEvent> {
        self.tx.subscribe()
    }

    /// Returns the current number of subscribers.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ProgressBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
