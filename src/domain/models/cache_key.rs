use std::fmt;

/// Resource kinds served by the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Customers,
    Payments,
}

impl ResourceKind {
    /// Cache namespace for this kind.
    pub const fn namespace(self) -> &'static str {
        match self {
            Self::Customers => "customers",
            Self::Payments => "payments",
        }
    }

    /// Collection path on the legacy API.
    pub const fn collection_path(self) -> &'static str {
        match self {
            Self::Customers => "/users",
            Self::Payments => "/posts",
        }
    }

    /// Identifier-qualified path on the legacy API.
    pub fn item_path(self, id: u64) -> String {
        format!("{}/{id}", self.collection_path())
    }
}

/// Which slice of a namespace a key addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyScope {
    All,
    Id(u64),
}

/// Deterministic cache key: `<namespace>:all` or `<namespace>:<id>`.
///
/// Identifiers are numeric, so the collection key can never equal an
/// identifier key and two identifiers never render the same string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    kind: ResourceKind,
    scope: KeyScope,
}

impl CacheKey {
    pub const fn all(kind: ResourceKind) -> Self {
        Self {
            kind,
            scope: KeyScope::All,
        }
    }

    pub const fn by_id(kind: ResourceKind, id: u64) -> Self {
        Self {
            kind,
            scope: KeyScope::Id(id),
        }
    }

    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub const fn scope(&self) -> KeyScope {
        self.scope
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scope {
            KeyScope::All => write!(f, "{}:all", self.kind.namespace()),
            KeyScope::Id(id) => write!(f, "{}:{id}", self.kind.namespace()),
        }
    }
}
