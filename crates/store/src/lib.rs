//! # LedgerView Chain Store
//!
//! The read side of the chain store, as consumed by the HTTP facade.
//! The store's internal representation and the consensus machinery that
//! fills it live elsewhere; this crate only fixes the lookup interface
//! and ships an in-memory implementation for wiring and tests.

#![warn(clippy::all)]
#![deny(unsafe_code)]

mod memory;

pub use memory::InMemoryChainStore;

use ledgerview_types::Block;

/// Read-only interface of the chain store.
///
/// Lookups are synchronous and expected to be fast (in-memory index);
/// the facade never mutates the store and places no locking obligation
/// on it beyond what `Send + Sync` implies. Implementations guard their
/// own concurrent readers and writers.
pub trait ChainStore: Send + Sync {
    /// Read up to `count` blocks in store-defined order, beginning at
    /// the block with hash `start`, or at the default cursor (the start
    /// of the order) when `start` is `None`.
    ///
    /// An unknown `start` hash yields an empty range.
    fn get_range(&self, start: Option<&[u8]>, count: usize) -> Vec<Block>;

    /// Look up a single block by its hash.
    fn get(&self, hash: &[u8]) -> Option<Block>;

    /// Whether a block with this hash is present.
    fn contains(&self, hash: &[u8]) -> bool;
}
