//! Domain logic of the facade: the async bridge, the serialization
//! envelope, configuration, and error types.

pub mod bridge;
pub mod config;
pub mod error;
pub mod serialize;
