//! Resource services: cache-aside reads over the upstream client.
//!
//! Each service owns one resource kind and shares the process-wide
//! [`ResourceCache`](crate::adapters::cache::ResourceCache) with the others.

mod cache_aside;
pub mod customer_service;
pub mod payment_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use customer_service::CustomerService;
pub use payment_service::PaymentService;
