//! Pure mappings from legacy wire shapes to internal records.
//!
//! One standalone function per resource kind. No I/O, no shared state,
//! and no rejection of incomplete records.

pub mod customer;
pub mod payment;

pub use customer::to_customer;
pub use payment::to_payment;
