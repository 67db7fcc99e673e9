//! Store Error Types
//!
//! One taxonomy for both store contracts. The pipelines depend on the
//! distinction between a record that does not exist (user-facing "not found"
//! messaging) and a store that could not be queried at all (logged, generic
//! messaging).

use thiserror::Error;

/// Document store operation errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The addressed record does not exist.
    #[error("record not found: {id}")]
    NotFound { id: String },

    /// The store could not be reached or the query failed.
    #[error("store query failed: {context}")]
    Query { context: String },
}

impl StoreError {
    /// Create a not-found error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a query error with context.
    pub fn query(context: impl Into<String>) -> Self {
        Self::Query {
            context: context.into(),
        }
    }

    /// Whether this is the not-found case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
