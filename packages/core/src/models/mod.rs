//! Data Models
//!
//! This module contains the core data structures:
//!
//! - `Element` - the generic editable entity and its typed controller values
//! - `ContentType` - a named field schema driving the content editor
//! - `Form` / `FormSubmission` - transient, request-scoped form types

pub mod content_type;
pub mod element;
pub mod form;

pub use content_type::{ContentField, ContentType, FieldOption, WidgetKind};
pub use element::{ContentDocument, Controller, ControllerValues, Element};
pub use form::{Form, FormSubmission, SubmissionError, ELEMENT_ID_FIELD, TYPE_FIELD};
