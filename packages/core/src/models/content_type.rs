//! Content Type Schema
//!
//! A content type is a named schema: an ordered list of field definitions
//! describing what content an element of that type may hold. Content types
//! are authored by a separate management flow and are read-only here; the
//! pipelines treat each field as opaque beyond its `key`.

use serde::{Deserialize, Serialize};

/// Widget kind driving form generation for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    TextArea,
    /// Option list.
    Select,
    /// Boolean toggle, submitted as a string.
    Checkbox,
}

/// One option of a select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    /// Display label.
    pub name: String,
    /// Submitted value.
    pub value: String,
}

impl FieldOption {
    /// Option whose label and value are the same string.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            name: value.clone(),
            value,
        }
    }
}

/// Definition of a single editable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentField {
    /// Field key, unique within the content type.
    pub key: String,

    /// Widget used to render and capture this field.
    pub widget: WidgetKind,

    /// Human-readable label; widgets fall back to the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Options for select widgets, empty otherwise.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
}

impl ContentField {
    /// A single-line text field.
    pub fn text(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            widget: WidgetKind::Text,
            label: None,
            options: Vec::new(),
        }
    }

    /// A multi-line text field.
    pub fn textarea(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            widget: WidgetKind::TextArea,
            label: None,
            options: Vec::new(),
        }
    }

    /// A select field with the given options.
    pub fn select(key: impl Into<String>, options: Vec<FieldOption>) -> Self {
        Self {
            key: key.into(),
            widget: WidgetKind::Select,
            label: None,
            options,
        }
    }

    /// Attach a display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A named, ordered field schema for element content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentType {
    /// Unique name, used as both identifier and display value.
    #[serde(rename = "type")]
    pub name: String,

    /// Ordered field definitions driving the content editor.
    pub form: Vec<ContentField>,
}

impl ContentType {
    /// Create a content type from its name and field list.
    pub fn new(name: impl Into<String>, form: Vec<ContentField>) -> Self {
        Self {
            name: name.into(),
            form,
        }
    }

    /// Declared field keys, in schema order.
    pub fn field_keys(&self) -> impl Iterator<Item = &str> {
        self.form.iter().map(|field| field.key.as_str())
    }

    /// Look up a field by key.
    pub fn get_field(&self, key: &str) -> Option<&ContentField> {
        self.form.iter().find(|field| field.key == key)
    }
}
