//! Peer tables and the bus producers that answer peer requests.

use async_trait::async_trait;
use ledgerview_bus::{DataPayload, DataProducer};
use ledgerview_types::PeerAddress;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::warn;

/// The node's view of its peers.
///
/// `connected` holds live sessions, `known` every address the node has
/// ever learned of. Connected peers are always known.
#[derive(Default)]
pub struct PeerTable {
    connected: RwLock<Vec<PeerAddress>>,
    known: RwLock<Vec<PeerAddress>>,
}

impl PeerTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the known-peer table from `host:port` strings, skipping
    /// entries that do not parse.
    pub fn seed_known(&self, entries: &[String]) {
        let mut known = self.known.write();
        for entry in entries {
            match parse_seed(entry) {
                Some(peer) => known.push(peer),
                None => warn!(entry = %entry, "Skipping malformed peer seed"),
            }
        }
    }

    /// Record a live session, remembering the peer as known as well.
    pub fn mark_connected(&self, peer: PeerAddress) {
        let mut known = self.known.write();
        if !known.iter().any(|p| p.ip == peer.ip && p.port == peer.port) {
            known.push(peer.clone());
        }
        self.connected.write().push(peer);
    }

    #[must_use]
    pub fn connected(&self) -> Vec<PeerAddress> {
        self.connected.read().clone()
    }

    #[must_use]
    pub fn known(&self) -> Vec<PeerAddress> {
        self.known.read().clone()
    }
}

fn parse_seed(entry: &str) -> Option<PeerAddress> {
    let (host, port) = entry.rsplit_once(':')?;
    let port: u16 = port.parse().ok()?;
    if host.is_empty() {
        return None;
    }
    // Seeded peers have no session yet, so no node id either.
    Some(PeerAddress::new(host, port, Vec::new()))
}

/// Answers connected-peer requests from a [`PeerTable`].
pub struct ConnectedPeersProducer {
    table: Arc<PeerTable>,
}

impl ConnectedPeersProducer {
    #[must_use]
    pub fn new(table: Arc<PeerTable>) -> Self {
        Self { table }
    }
}

#[async_trait]
impl DataProducer for ConnectedPeersProducer {
    async fn produce(&self, _param: Option<serde_json::Value>) -> DataPayload {
        DataPayload::PeerAddresses(self.table.connected())
    }
}

/// Answers known-peer requests from a [`PeerTable`].
pub struct KnownPeersProducer {
    table: Arc<PeerTable>,
}

impl KnownPeersProducer {
    #[must_use]
    pub fn new(table: Arc<PeerTable>) -> Self {
        Self { table }
    }
}

#[async_trait]
impl DataProducer for KnownPeersProducer {
    async fn produce(&self, _param: Option<serde_json::Value>) -> DataPayload {
        DataPayload::PeerAddresses(self.table.known())
    }
}
