//! ElementStore Trait - Element Persistence Abstraction
//!
//! Elements live in a document store owned by the element-management
//! subsystem; this trait is the narrow slice of it the editing pipelines
//! consume. Writes are targeted partial updates: each setter touches only
//! its own field of `controller_values`, never the whole document, so
//! concurrent edits collide at field granularity (last write wins) rather
//! than clobbering unrelated keys.

use crate::models::{ContentDocument, Element};
use crate::store::StoreError;
use async_trait::async_trait;

/// Abstraction over element persistence.
///
/// Implementations must be `Send + Sync`; all methods are async so both
/// embedded and networked backends fit.
#[async_trait]
pub trait ElementStore: Send + Sync {
    /// Get an element by id.
    ///
    /// Returns `Ok(None)` when the element does not exist; `Err` is reserved
    /// for infrastructure failures.
    async fn get_element(&self, id: &str) -> Result<Option<Element>, StoreError>;

    /// Assign a content type: partial update of `controller_values.type`.
    ///
    /// Writing to a missing element is `StoreError::NotFound`.
    async fn set_content_type(&self, id: &str, type_name: &str) -> Result<(), StoreError>;

    /// Replace the content document: partial update of
    /// `controller_values.content`.
    ///
    /// Writing to a missing element is `StoreError::NotFound`.
    async fn set_content(&self, id: &str, document: ContentDocument) -> Result<(), StoreError>;
}
