//! Payload stored in the shared TTL cache.

use super::customer::Customer;
use super::payment::Payment;

/// One cached read result. Each variant corresponds to one key shape.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedResource {
    Customers(Vec<Customer>),
    Customer(Customer),
    Payments(Vec<Payment>),
    Payment(Payment),
}

impl CachedResource {
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Customers(_) => "customers",
            Self::Customer(_) => "customer",
            Self::Payments(_) => "payments",
            Self::Payment(_) => "payment",
        }
    }
}

/// Read results that can round-trip through [`CachedResource`].
pub trait Cacheable: Clone + Sized {
    fn into_cached(self) -> CachedResource;

    /// Returns `None` when the cached variant is not this type.
    fn from_cached(cached: CachedResource) -> Option<Self>;
}

impl Cacheable for Vec<Customer> {
    fn into_cached(self) -> CachedResource {
        CachedResource::Customers(self)
    }

    fn from_cached(cached: CachedResource) -> Option<Self> {
        match cached {
            CachedResource::Customers(v) => Some(v),
            _ => None,
        }
    }
}

impl Cacheable for Customer {
    fn into_cached(self) -> CachedResource {
        CachedResource::Customer(self)
    }

    fn from_cached(cached: CachedResource) -> Option<Self> {
        match cached {
            CachedResource::Customer(v) => Some(v),
            _ => None,
        }
    }
}

impl Cacheable for Vec<Payment> {
    fn into_cached(self) -> CachedResource {
        CachedResource::Payments(self)
    }

    fn from_cached(cached: CachedResource) -> Option<Self> {
        match cached {
            CachedResource::Payments(v) => Some(v),
            _ => None,
        }
    }
}

impl Cacheable for Payment {
    fn into_cached(self) -> CachedResource {
        CachedResource::Payment(self)
    }

    fn from_cached(cached: CachedResource) -> Option<Self> {
        match cached {
            CachedResource::Payment(v) => Some(v),
            _ => None,
        }
    }
}
