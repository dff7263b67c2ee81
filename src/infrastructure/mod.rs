//! Infrastructure layer module
//!
//! This module contains the adapters for everything outside the process:
//! - Legacy API client and its retry executor
//! - Clocks (system and manual)
//! - Configuration management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod clock;
pub mod config;
pub mod legacy;
pub mod logging;
