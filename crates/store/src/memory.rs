//! In-memory chain store.
//!
//! Keeps insertion order (the store-defined range order) next to a hash
//! index. Suitable for the node's local view and for tests; durable
//! storage is an external concern.

use crate::ChainStore;
use ledgerview_types::Block;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Default)]
struct Inner {
    /// Block hashes in insertion order.
    order: Vec<Vec<u8>>,
    /// Hash-keyed block index.
    blocks: HashMap<Vec<u8>, Block>,
}

/// Thread-safe in-memory implementation of [`ChainStore`].
#[derive(Default)]
pub struct InMemoryChainStore {
    inner: RwLock<Inner>,
}

impl InMemoryChainStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a block at the end of the store order.
    ///
    /// Re-inserting an existing hash replaces the block in place and
    /// keeps its position.
    pub fn insert(&self, block: Block) {
        let mut inner = self.inner.write();
        let hash = block.hash.clone();
        if inner.blocks.insert(hash.clone(), block).is_none() {
            inner.order.push(hash);
        }
    }

    /// Number of stored blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().order.len()
    }

    /// Whether the store holds no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ChainStore for InMemoryChainStore {
    fn get_range(&self, start: Option<&[u8]>, count: usize) -> Vec<Block> {
        let inner = self.inner.read();
        let from = match start {
            None => 0,
            Some(hash) => match inner.order.iter().position(|h| h == hash) {
                Some(idx) => idx,
                None => return Vec::new(),
            },
        };
        inner
            .order
            .iter()
            .skip(from)
            .take(count)
            .filter_map(|h| inner.blocks.get(h).cloned())
            .collect()
    }

    fn get(&self, hash: &[u8]) -> Option<Block> {
        self.inner.read().blocks.get(hash).cloned()
    }

    fn contains(&self, hash: &[u8]) -> bool {
        self.inner.read().blocks.contains_key(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(hash: &[u8], number: u64) -> Block {
        Block {
            hash: hash.to_vec(),
            number,
            ..Block::default()
        }
    }

    #[test]
    fn test_get_and_contains() {
        let store = InMemoryChainStore::new();
        store.insert(block(&[0xaa], 1));

        assert!(store.contains(&[0xaa]));
        assert!(!store.contains(&[0xcc]));
        assert_eq!(store.get(&[0xaa]).unwrap().number, 1);
        assert!(store.get(&[0xcc]).is_none());
    }

    #[test]
    fn test_range_preserves_insertion_order() {
        let store = InMemoryChainStore::new();
        store.insert(block(&[0xaa], 1));
        store.insert(block(&[0xbb], 2));
        store.insert(block(&[0xcc], 3));

        let range = store.get_range(None, 20);
        let hashes: Vec<_> = range.iter().map(|b| b.hash.clone()).collect();
        assert_eq!(hashes, vec![vec![0xaa], vec![0xbb], vec![0xcc]]);
    }

    #[test]
    fn test_range_honors_cursor_and_count() {
        let store = InMemoryChainStore::new();
        for i in 0u8..5 {
            store.insert(block(&[i], u64::from(i)));
        }

        let range = store.get_range(Some(&[2]), 2);
        assert_eq!(range.len(), 2);
        assert_eq!(range[0].hash, vec![2]);
        assert_eq!(range[1].hash, vec![3]);

        assert!(store.get_range(Some(&[9]), 2).is_empty());
    }

    #[test]
    fn test_range_count_caps_result() {
        let store = InMemoryChainStore::new();
        for i in 0u8..30 {
            store.insert(block(&[i], u64::from(i)));
        }
        assert_eq!(store.get_range(None, 20).len(), 20);
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let store = InMemoryChainStore::new();
        store.insert(block(&[0xaa], 1));
        store.insert(block(&[0xbb], 2));
        store.insert(block(&[0xaa], 7));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&[0xaa]).unwrap().number, 7);
        let range = store.get_range(None, 20);
        assert_eq!(range[0].hash, vec![0xaa]);
    }
}
