//! In-Memory Store
//!
//! Reference implementation of both store contracts over `RwLock`-guarded
//! maps. Used by the test suite and by hosts that embed the editing
//! pipelines without a real document store behind them.

use crate::models::{ContentDocument, ContentType, Element};
use crate::store::{ContentTypeRegistry, ElementStore, StoreError};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

/// In-memory element and content-type store.
///
/// Content types are kept keyed by name so listings come back in a stable
/// (name) order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    elements: RwLock<HashMap<String, Element>>,
    content_types: RwLock<BTreeMap<String, ContentType>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an element.
    pub async fn insert_element(&self, element: Element) {
        self.elements
            .write()
            .await
            .insert(element.id.clone(), element);
    }

    /// Insert or replace a content type.
    pub async fn insert_content_type(&self, content_type: ContentType) {
        self.content_types
            .write()
            .await
            .insert(content_type.name.clone(), content_type);
    }
}

#[async_trait]
impl ElementStore for MemoryStore {
    async fn get_element(&self, id: &str) -> Result<Option<Element>, StoreError> {
        Ok(self.elements.read().await.get(id).cloned())
    }

    async fn set_content_type(&self, id: &str, type_name: &str) -> Result<(), StoreError> {
        let mut elements = self.elements.write().await;
        let element = elements.get_mut(id).ok_or_else(|| StoreError::not_found(id))?;
        element.set_content_type(type_name);
        Ok(())
    }

    async fn set_content(&self, id: &str, document: ContentDocument) -> Result<(), StoreError> {
        let mut elements = self.elements.write().await;
        let element = elements.get_mut(id).ok_or_else(|| StoreError::not_found(id))?;
        element.set_content(document);
        Ok(())
    }
}

#[async_trait]
impl ContentTypeRegistry for MemoryStore {
    async fn list_all(&self, limit: usize) -> Result<Vec<ContentType>, StoreError> {
        Ok(self
            .content_types
            .read()
            .await
            .values()
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ContentType>, StoreError> {
        Ok(self.content_types.read().await.get(name).cloned())
    }
}
