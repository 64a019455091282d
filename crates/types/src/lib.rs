//! # LedgerView Shared Types
//!
//! Domain entities shared between the chain store, the data bus, and the
//! HTTP facade. Everything here is plain data: the store owns and mutates
//! blocks, the facade only reads them; peer addresses are constructed
//! per response and never persisted.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod entities;

pub use entities::{Block, PeerAddress};
