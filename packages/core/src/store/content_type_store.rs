//! ContentTypeRegistry Trait - Read Access to Known Content Types
//!
//! Content types are authored elsewhere; the editing pipelines only list
//! them (for the type selector) and resolve them by name (for the content
//! editor).

use crate::models::ContentType;
use crate::store::StoreError;
use async_trait::async_trait;

/// Read-only registry of content types.
#[async_trait]
pub trait ContentTypeRegistry: Send + Sync {
    /// List up to `limit` content types in a stable order.
    ///
    /// The limit is a safety bound against unbounded form rendering, not a
    /// pagination scheme; callers pass the documented cap.
    async fn list_all(&self, limit: usize) -> Result<Vec<ContentType>, StoreError>;

    /// Resolve a content type by name.
    ///
    /// `Ok(None)` means no such type; `Err` is an infrastructure failure.
    async fn find_by_name(&self, name: &str) -> Result<Option<ContentType>, StoreError>;
}
