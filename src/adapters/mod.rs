//! Adapters that sit between services and shared state.

pub mod cache;
