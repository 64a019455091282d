//! # Core Domain Entities
//!
//! - **Block**: a ledger block as held by the chain store. Hash-like
//!   fields are raw byte vectors and are rendered as hex only at the
//!   API boundary.
//! - **`PeerAddress`**: one entry of a node's peer view, delivered over
//!   the data bus.

use serde::{Deserialize, Serialize};

/// A ledger block, identified by its hash.
///
/// The chain store is the sole owner of blocks; the facade reads them
/// and projects them to JSON. Byte fields stay raw here so the store
/// and the bus never deal in encoding concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Block {
    /// Self-identifying hash of this block.
    pub hash: Vec<u8>,
    /// Hash of the parent block.
    pub prevhash: Vec<u8>,
    /// Hash of the uncle list.
    pub uncles_hash: Vec<u8>,
    /// Proof-of-work nonce bytes.
    pub nonce: Vec<u8>,
    /// Root hash of the transaction list.
    pub tx_list_root: Vec<u8>,
    /// Block height in the chain.
    pub number: u64,
    /// Mining difficulty at this height.
    pub difficulty: u64,
    /// Unix timestamp when the block was sealed.
    pub timestamp: u64,
}

impl Block {
    /// The block's identifying hash in its external hex form.
    #[must_use]
    pub fn hex_hash(&self) -> String {
        hex::encode(&self.hash)
    }
}

/// A peer's network address as reported by the networking layer.
///
/// Ephemeral: built to answer a peer-list request and discarded with
/// the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerAddress {
    /// Remote IP address, already formatted by the networking layer.
    pub ip: String,
    /// Remote listening port.
    pub port: u16,
    /// The peer's node identifier bytes.
    pub node_id: Vec<u8>,
}

impl PeerAddress {
    /// Convenience constructor used by producers and tests.
    #[must_use]
    pub fn new(ip: impl Into<String>, port: u16, node_id: Vec<u8>) -> Self {
        Self {
            ip: ip.into(),
            port,
            node_id,
        }
    }
}
