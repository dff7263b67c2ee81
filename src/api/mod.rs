//! HTTP boundary
//!
//! Thin axum layer over the resource services. Handlers parse identifiers,
//! call a service or the raw upstream client, and wrap the result; every
//! failure is rendered by [`ApiError`].

pub mod error;
pub mod handlers;
pub mod routes;
pub mod types;

pub use error::ApiError;
pub use routes::{router, AppState};
