//! # LedgerView Data Bus
//!
//! The async data-request mechanism the facade's bridge sits on top of.
//! A caller submits a *named* request together with a one-shot
//! completion callback; a producer registered for that name computes
//! the answer on its own execution context and the callback is invoked
//! exactly once with the result. The caller never learns when, or on
//! which task, that happens.
//!
//! ```text
//! caller ── request(name, param, callback) ──→ DataBus
//!                                                 │ lookup producer
//!                                                 ▼
//!                                        spawned producer task
//!                                                 │ produce(param)
//!                                                 ▼
//!                                          callback(payload)
//! ```
//!
//! An unknown request name is logged and dropped; the caller's callback
//! is destroyed without ever firing, and bounded-wait callers treat the
//! silence as a failure.

#![warn(clippy::all)]
#![deny(unsafe_code)]

mod memory;

pub use memory::InMemoryDataBus;

use async_trait::async_trait;
use ledgerview_types::PeerAddress;

/// Request name for the addresses of currently connected peers.
pub const CONNECTED_PEER_ADDRESSES: &str = "connected_peer_addresses";

/// Request name for the addresses of all known peers.
pub const KNOWN_PEER_ADDRESSES: &str = "known_peer_addresses";

/// Result payload delivered to a request callback.
///
/// Typed variants for the data kinds this node answers; `Json` is the
/// pass-through for producer-defined payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum DataPayload {
    /// A peer-address list, for the two peer request names.
    PeerAddresses(Vec<PeerAddress>),
    /// Arbitrary producer-defined payload.
    Json(serde_json::Value),
}

/// One-shot completion callback handed in with a request.
///
/// Invoked exactly once, asynchronously, on an execution context the
/// bus controls.
pub type DataCallback = Box<dyn FnOnce(DataPayload) + Send + 'static>;

/// The request side of the bus.
///
/// `request` is fire-and-forget: it returns as soon as the request is
/// submitted, never waits for the answer, and must not block the
/// caller's task.
pub trait DataBus: Send + Sync {
    /// Submit a named data request.
    ///
    /// `param` is passed through to the producer unexamined. If no
    /// producer answers to `name`, the callback is dropped unfired.
    fn request(&self, name: &str, param: Option<serde_json::Value>, callback: DataCallback);
}

/// A producer that answers requests for one data name.
#[async_trait]
pub trait DataProducer: Send + Sync {
    /// Compute the payload for one request.
    async fn produce(&self, param: Option<serde_json::Value>) -> DataPayload;
}
