//! Port trait definitions (Hexagonal Architecture)
//!
//! - `UpstreamClient`: reads from the legacy API
//! - `Clock`: time source and delay scheduler
//!
//! Services depend only on these traits, which lets tests substitute
//! in-memory fakes for the network and a manual clock for real time.

pub mod clock;
pub mod upstream_client;

pub use clock::Clock;
pub use upstream_client::UpstreamClient;
