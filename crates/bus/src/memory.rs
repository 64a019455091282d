//! In-process implementation of the data bus.
//!
//! Producers register under a request name; each request spawns a tokio
//! task that runs the producer and then invokes the completion callback
//! on that task. Single-node only; the task boundary stands in for a
//! wire protocol.

use crate::{DataBus, DataCallback, DataProducer};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// In-memory [`DataBus`] backed by a producer registry.
#[derive(Default)]
pub struct InMemoryDataBus {
    /// Producers keyed by request name.
    producers: DashMap<String, Arc<dyn DataProducer>>,
    /// Total requests submitted, answered or not.
    requests_submitted: AtomicU64,
}

impl InMemoryDataBus {
    /// Create a bus with no registered producers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the producer answering requests for `name`.
    ///
    /// A later registration for the same name replaces the earlier one.
    pub fn register(&self, name: impl Into<String>, producer: Arc<dyn DataProducer>) {
        let name = name.into();
        debug!(name = %name, "Registered data producer");
        self.producers.insert(name, producer);
    }

    /// Total requests submitted to this bus.
    #[must_use]
    pub fn requests_submitted(&self) -> u64 {
        self.requests_submitted.load(Ordering::Relaxed)
    }

    /// Number of registered producers.
    #[must_use]
    pub fn producer_count(&self) -> usize {
        self.producers.len()
    }
}

impl DataBus for InMemoryDataBus {
    fn request(&self, name: &str, param: Option<serde_json::Value>, callback: DataCallback) {
        self.requests_submitted.fetch_add(1, Ordering::Relaxed);

        let Some(producer) = self.producers.get(name).map(|p| Arc::clone(&p)) else {
            // Callback is dropped unfired; waiting callers see a
            // closed wait state instead of an answer.
            warn!(name = %name, "Data request with no registered producer");
            return;
        };

        let name = name.to_string();
        tokio::spawn(async move {
            let payload = producer.produce(param).await;
            debug!(name = %name, "Data request answered");
            callback(payload);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataPayload;
    use async_trait::async_trait;
    use ledgerview_types::PeerAddress;
    use tokio::sync::oneshot;

    struct StaticPeers(Vec<PeerAddress>);

    #[async_trait]
    impl DataProducer for StaticPeers {
        async fn produce(&self, _param: Option<serde_json::Value>) -> DataPayload {
            DataPayload::PeerAddresses(self.0.clone())
        }
    }

    struct EchoParam;

    #[async_trait]
    impl DataProducer for EchoParam {
        async fn produce(&self, param: Option<serde_json::Value>) -> DataPayload {
            DataPayload::Json(param.unwrap_or(serde_json::Value::Null))
        }
    }

    #[tokio::test]
    async fn test_callback_fires_once_with_payload() {
        let bus = InMemoryDataBus::new();
        let peers = vec![PeerAddress::new("1.2.3.4", 30303, vec![0x01, 0x02])];
        bus.register("peers_test", Arc::new(StaticPeers(peers.clone())));

        let (tx, rx) = oneshot::channel();
        bus.request(
            "peers_test",
            None,
            Box::new(move |payload| {
                // A second invocation would panic on the consumed sender,
                // which is exactly the exactly-once contract under test.
                tx.send(payload).unwrap();
            }),
        );

        let payload = rx.await.unwrap();
        assert_eq!(payload, DataPayload::PeerAddresses(peers));
        assert_eq!(bus.requests_submitted(), 1);
    }

    #[tokio::test]
    async fn test_param_passed_through_unexamined() {
        let bus = InMemoryDataBus::new();
        bus.register("echo", Arc::new(EchoParam));

        let (tx, rx) = oneshot::channel();
        bus.request(
            "echo",
            Some(serde_json::json!({"cursor": "aa"})),
            Box::new(move |payload| {
                let _ = tx.send(payload);
            }),
        );

        assert_eq!(
            rx.await.unwrap(),
            DataPayload::Json(serde_json::json!({"cursor": "aa"}))
        );
    }

    #[tokio::test]
    async fn test_unknown_name_drops_callback() {
        let bus = InMemoryDataBus::new();

        let (tx, rx) = oneshot::channel::<DataPayload>();
        bus.request(
            "nobody_home",
            None,
            Box::new(move |payload| {
                let _ = tx.send(payload);
            }),
        );

        // The callback (and with it the sender) is gone without firing.
        assert!(rx.await.is_err());
        assert_eq!(bus.requests_submitted(), 1);
    }

    #[tokio::test]
    async fn test_register_replaces_producer() {
        let bus = InMemoryDataBus::new();
        bus.register("peers_test", Arc::new(StaticPeers(vec![])));
        bus.register(
            "peers_test",
            Arc::new(StaticPeers(vec![PeerAddress::new("5.6.7.8", 1, vec![])])),
        );
        assert_eq!(bus.producer_count(), 1);

        let (tx, rx) = oneshot::channel();
        bus.request(
            "peers_test",
            None,
            Box::new(move |payload| {
                let _ = tx.send(payload);
            }),
        );
        match rx.await.unwrap() {
            DataPayload::PeerAddresses(peers) => assert_eq!(peers[0].ip, "5.6.7.8"),
            other => panic!("unexpected payload: {other:?}"),
        }
    }
}
