//! Business Services
//!
//! This module contains the editing pipelines and their supporting logic:
//!
//! - `ContentAdmin` - the type-assignment and content-editing flows
//! - `form_binder` - schema-driven form construction and submission binding
//!
//! Services coordinate between the store contracts and the response
//! assembly, implementing the business rules of the admin editing flows.

pub mod content_admin;
pub mod form_binder;

pub use content_admin::{ContentAdmin, EditAction, EditRequest, CONTENT_TYPE_LIST_LIMIT};
