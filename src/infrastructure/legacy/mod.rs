//! Legacy API integration
//!
//! - `client`: reqwest-backed [`UpstreamClient`](crate::domain::ports::UpstreamClient)
//! - `retry`: fixed-delay bounded retry executor used by the client

pub mod client;
pub mod retry;

pub use client::LegacyHttpClient;
pub use retry::{RetryExecutor, RetryPolicy};
