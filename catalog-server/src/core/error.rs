use std::fmt;

use thiserror::Error;

/// Entity kinds referenced by [`CatalogError::NotFound`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Category,
    Product,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Category => "Category",
            EntityKind::Product => "Product",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog engine error
///
/// Raised by the validator and the store accessors and propagated unchanged
/// through [`CatalogService`](crate::catalog::CatalogService). Mapping to a
/// response status happens only at the HTTP boundary.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The referenced entity does not exist at validation time
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: String },

    /// Field-level input problem detected before any lookup or write
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The underlying store call failed
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),
}

impl CatalogError {
    pub fn category_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: EntityKind::Category,
            id: id.into(),
        }
    }

    pub fn product_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: EntityKind::Product,
            id: id.into(),
        }
    }

    /// Whether this is a not-found failure for the given entity kind
    pub fn is_not_found(&self, expected: EntityKind) -> bool {
        matches!(self, CatalogError::NotFound { kind, .. } if *kind == expected)
    }
}

/// Result type for catalog engine operations
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Server startup / runtime error
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for server lifecycle operations
pub type Result<T> = std::result::Result<T, ServerError>;
