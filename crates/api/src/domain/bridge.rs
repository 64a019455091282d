//! Blocking-over-async data bridge.
//!
//! Lets a per-request handler task consume the callback-driven data bus
//! within a bounded wait. Each `fetch` call allocates a fresh one-shot
//! wait state: the sender travels inside the bus callback, the receiver
//! stays with the handler, which suspends on it under a fixed timeout.
//! The one-shot channel gives the at-most-once completion transition
//! and cross-thread visibility of the result; the wait suspends only
//! the calling task, so concurrent requests and the bus's own delivery
//! context are unaffected.
//!
//! On timeout the outstanding request is **not** cancelled: the bus
//! still holds the callback, and if it fires later its send lands in a
//! dropped receiver. The formatted result is wasted but harmless, since
//! wait state is per request and never reused.

use ledgerview_bus::{DataBus, DataPayload};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Maximum time one `fetch` waits for the bus to answer.
pub const WAIT_BUDGET: Duration = Duration::from_secs(5);

/// Failure of a bridged request.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The wait budget elapsed without an answer.
    #[error("request for {name} timed out after {budget:?}")]
    Timeout {
        /// Request name that went unanswered.
        name: String,
        /// The budget that elapsed.
        budget: Duration,
    },

    /// The bus discarded the callback without firing it; no answer can
    /// ever arrive, so there is nothing to wait out.
    #[error("request for {name} was dropped by the bus")]
    Closed {
        /// Request name that was dropped.
        name: String,
    },
}

/// Bridge from synchronous-looking handlers to the async data bus.
pub struct DataBridge {
    bus: Arc<dyn DataBus>,
}

impl DataBridge {
    /// Create a bridge over the given bus.
    pub fn new(bus: Arc<dyn DataBus>) -> Self {
        Self { bus }
    }

    /// Request the data item `name` and wait for the formatted answer.
    ///
    /// `make_response` runs inside the bus callback, on whatever
    /// execution context the bus delivers on; its output is what the
    /// waiting handler receives. `param` is passed through unexamined.
    ///
    /// Returns [`BridgeError::Timeout`] once [`WAIT_BUDGET`] elapses
    /// with the callback still pending, or [`BridgeError::Closed`] if
    /// the bus dropped the callback outright.
    pub async fn fetch<F>(
        &self,
        name: &str,
        param: Option<serde_json::Value>,
        make_response: F,
    ) -> Result<serde_json::Value, BridgeError>
    where
        F: FnOnce(DataPayload) -> serde_json::Value + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();

        self.bus.request(
            name,
            param,
            Box::new(move |payload| {
                // The receiver is gone if the wait budget already
                // expired; the completed work is silently discarded.
                let _ = tx.send(make_response(payload));
            }),
        );
        debug!(name = %name, "Submitted data request");

        match tokio::time::timeout(WAIT_BUDGET, rx).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(_)) => {
                warn!(name = %name, "Data request dropped without an answer");
                Err(BridgeError::Closed {
                    name: name.to_string(),
                })
            }
            Err(_) => {
                warn!(name = %name, budget = ?WAIT_BUDGET, "Data request timed out");
                Err(BridgeError::Timeout {
                    name: name.to_string(),
                    budget: WAIT_BUDGET,
                })
            }
        }
    }
}
