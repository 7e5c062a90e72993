// Shared Kernel - base types and errors shared across layers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned product identifier.
///
/// Assigned exactly once, when the store inserts the entity; never
/// reassigned afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Domain errors
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("Product not found: {id}")]
    ProductNotFound { id: ProductId },

    #[error("Repository error: {message}")]
    Repository { message: String },
}

pub type Result<T> = std::result::Result<T, DomainError>;
