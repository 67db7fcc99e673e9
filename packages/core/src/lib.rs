//! Tessera Core - Admin Content Editing Layer
//!
//! This crate provides the schema-driven form binding and
//! update-notification pipeline behind Tessera's element editing screens:
//! assigning a content type to an element, and editing the element's
//! type-specific content through a form derived at runtime from that type's
//! schema. Successful content saves signal an in-place refresh of the
//! element's already-rendered admin preview instead of a full page reload.
//!
//! # Architecture
//!
//! - **Typed controller values**: the element's open value bag is a typed
//!   document with a declared-but-open extension map
//! - **Single validated boundary**: only the form binder turns untyped
//!   request data into a typed content document
//! - **Targeted partial updates**: writes touch one field of the document,
//!   bounding the blast radius of concurrent edits
//! - **Typed post-commit effects**: the dynamic-refresh directive is a
//!   declared value on the response, not an implicit side channel
//!
//! # Modules
//!
//! - [`models`] - data structures (Element, ContentType, Form)
//! - [`store`] - store contracts and the in-memory implementation
//! - [`render`] - response assembly and dynamic-update directives
//! - [`services`] - the editing pipelines and the form binder

pub mod models;
pub mod render;
pub mod services;
pub mod store;

// Re-export commonly used types
pub use models::*;
pub use render::{AdminResponse, DynamicDirective, Message, ResponseStatus, Severity};
pub use services::*;
pub use store::{ContentTypeRegistry, ElementStore, MemoryStore, StoreError};
