//! Element Data Structures
//!
//! This module defines the `Element` struct, the generic addressable entity
//! whose rendering and editing behavior is delegated to a named controller.
//!
//! # Architecture
//!
//! - **Typed controller values**: the historically untyped value bag is a
//!   typed document (`ControllerValues`) with a declared-but-open extension
//!   map, so unknown keys survive round-trips while the keys this crate
//!   writes are statically known.
//! - **Capability tag**: `Controller` is an enum, not a raw string; the
//!   content-editing capability check is a single explicit method.
//! - **Read/partial-update only**: elements are created and deleted by a
//!   separate element-management subsystem. This crate assigns a content
//!   type or replaces the content document, never the whole element.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Type-specific structured content: field key to field value.
///
/// Only the form binder may construct one of these from untrusted input;
/// everything else passes them through intact.
pub type ContentDocument = BTreeMap<String, String>;

/// Controller tag naming the subsystem that owns an element.
///
/// Serialized as the plain tag string. `Content` is the capability required
/// to open the content editor; every other tag round-trips through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Controller {
    /// Element content is owned by the content subsystem.
    Content,
    /// Any other controller tag, carried verbatim.
    Other(String),
}

impl Controller {
    const CONTENT_TAG: &'static str = "content";

    /// The wire representation of this tag.
    pub fn as_str(&self) -> &str {
        match self {
            Controller::Content => Self::CONTENT_TAG,
            Controller::Other(tag) => tag,
        }
    }
}

impl From<String> for Controller {
    fn from(tag: String) -> Self {
        if tag == Self::CONTENT_TAG {
            Controller::Content
        } else {
            Controller::Other(tag)
        }
    }
}

impl From<Controller> for String {
    fn from(controller: Controller) -> Self {
        controller.as_str().to_owned()
    }
}

/// The controller-owned portion of an element.
///
/// `content_type` and `content` are the two keys this crate reads and
/// writes; `extra` preserves whatever else the owning controller has stored.
/// Stale `content` mappings are tolerated at read time (the editor renders
/// absent keys as empty); the subset-of-schema invariant is enforced at
/// write time by the form binder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerValues {
    /// Name of the assigned content type, if any.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// The element's structured content, once any exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentDocument>,

    /// Open extension map for keys other controllers care about.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An addressable, editable entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Unique, immutable identifier.
    pub id: String,

    /// Which subsystem owns rendering/editing of this element.
    pub controller: Controller,

    /// Open, controller-owned value bag.
    #[serde(default)]
    pub controller_values: ControllerValues,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp.
    pub modified_at: DateTime<Utc>,
}

impl Element {
    /// Create a new element with an auto-generated UUID.
    pub fn new(controller: Controller) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), controller)
    }

    /// Create a new element with an explicit id.
    pub fn with_id(id: impl Into<String>, controller: Controller) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            controller,
            controller_values: ControllerValues::default(),
            created_at: now,
            modified_at: now,
        }
    }

    /// Name of the assigned content type, if one is set.
    pub fn content_type(&self) -> Option<&str> {
        self.controller_values.content_type.as_deref()
    }

    /// The element's current content document, if any exists.
    pub fn content(&self) -> Option<&ContentDocument> {
        self.controller_values.content.as_ref()
    }

    /// Whether the content editor may be opened for this element.
    ///
    /// This is the authorization boundary for the Display flow: it must be
    /// checked before any schema-dependent logic runs.
    pub fn can_edit_content(&self) -> bool {
        self.controller == Controller::Content
    }

    /// Assign a content type.
    pub fn set_content_type(&mut self, name: impl Into<String>) {
        self.controller_values.content_type = Some(name.into());
        self.modified_at = Utc::now();
    }

    /// Replace the content document.
    pub fn set_content(&mut self, document: ContentDocument) {
        self.controller_values.content = Some(document);
        self.modified_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_controller_tag_round_trip() {
        let content: Controller = serde_json::from_value(json!("content")).unwrap();
        assert_eq!(content, Controller::Content);
        assert_eq!(serde_json::to_value(&content).unwrap(), json!("content"));

        let other: Controller = serde_json::from_value(json!("menu")).unwrap();
        assert_eq!(other, Controller::Other("menu".to_string()));
        assert_eq!(other.as_str(), "menu");
    }

    #[test]
    fn test_new_element_has_no_content_type() {
        let element = Element::new(Controller::Content);
        assert!(!element.id.is_empty());
        assert!(element.content_type().is_none());
        assert!(element.content().is_none());
        assert!(element.can_edit_content());
    }

    #[test]
    fn test_capability_check() {
        let element = Element::with_id("e1", Controller::Other("menu".to_string()));
        assert!(!element.can_edit_content());
    }

    #[test]
    fn test_set_content_type_bumps_modified() {
        let mut element = Element::with_id("e1", Controller::Content);
        let before = element.modified_at;

        element.set_content_type("article");

        assert_eq!(element.content_type(), Some("article"));
        assert!(element.modified_at >= before);
    }

    #[test]
    fn test_set_content_replaces_document() {
        let mut element = Element::with_id("e1", Controller::Content);
        element.set_content(ContentDocument::from([(
            "title".to_string(),
            "Hi".to_string(),
        )]));
        element.set_content(ContentDocument::from([(
            "body".to_string(),
            "Text".to_string(),
        )]));

        let content = element.content().unwrap();
        assert_eq!(content.get("body").map(String::as_str), Some("Text"));
        assert!(content.get("title").is_none());
    }

    #[test]
    fn test_controller_values_wire_format() {
        let mut element = Element::with_id("e1", Controller::Content);
        element.set_content_type("article");

        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(value["controller"], "content");
        assert_eq!(value["controllerValues"]["type"], "article");
    }

    #[test]
    fn test_extension_keys_survive_round_trip() {
        let mut element = Element::with_id("e1", Controller::Content);
        element
            .controller_values
            .extra
            .insert("weight".to_string(), json!(3));

        let json = serde_json::to_string(&element).unwrap();
        let restored: Element = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.controller_values.extra.get("weight"), Some(&json!(3)));
        assert_eq!(restored, element);
    }
}
