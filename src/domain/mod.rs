//! Domain layer for the legacy bridge
//!
//! Records, upstream wire shapes, error kinds, pure transformers and the
//! port traits that infrastructure adapters implement.

pub mod errors;
pub mod models;
pub mod ports;
pub mod transformers;

pub use errors::{BridgeError, BridgeResult, ServiceError, UpstreamCause, UpstreamError};
