//! HTTP middleware for the facade.

pub mod cors;

pub use cors::CorsLayer;
