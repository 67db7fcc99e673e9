//! Transient Form Types
//!
//! `Form` describes one rendered editing form (field schema plus current
//! values) and lives for a single request. `FormSubmission` is the parsed
//! shape of the payload the form subsystem hands back on a commit; parsing
//! re-validates structure defensively because the schema is data-driven and
//! client structure is never trusted.

use crate::models::content_type::ContentField;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

/// Reserved identity field naming the element a submission edits.
///
/// The form subsystem injects it into every rendered form; it is never a
/// declarable content field.
pub const ELEMENT_ID_FIELD: &str = "element_id";

/// Field key of the content-type selector form.
pub const TYPE_FIELD: &str = "type";

/// Validation errors for submitted form payloads.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubmissionError {
    /// The submitted payload was not a JSON object.
    #[error("submission payload is not an object")]
    NotAnObject,

    /// The reserved `element_id` identity field is missing or not a string.
    #[error("submission is missing the element identity field")]
    MissingElementId,

    /// A field declared by the schema is absent from the submission.
    #[error("submitted value for field `{0}` is missing")]
    MissingField(String),

    /// A declared field was submitted with a non-string value.
    #[error("submitted value for field `{0}` is not a string")]
    InvalidValue(String),
}

/// A form ready for rendering: field schema plus current values.
///
/// `fields` is either a content type's declared schema or the synthetic
/// one-field type selector. `form_data` pre-populates the widgets; keys with
/// no entry render empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub fields: Vec<ContentField>,
    pub form_data: BTreeMap<String, String>,
}

/// Validated raw key/value pairs returned by the form subsystem on commit.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSubmission {
    /// Id of the element being edited, from the reserved identity field.
    pub element_id: String,

    /// Submitted field values, identity field removed.
    pub values: Map<String, Value>,
}

impl FormSubmission {
    /// Parse a submitted payload.
    ///
    /// Fails when the payload is not an object or the identity field is
    /// missing or not a string. Field values are carried as-is; shape checks
    /// against a schema happen in the form binder.
    pub fn from_payload(payload: &Value) -> Result<Self, SubmissionError> {
        let object = payload.as_object().ok_or(SubmissionError::NotAnObject)?;
        let element_id = object
            .get(ELEMENT_ID_FIELD)
            .and_then(Value::as_str)
            .ok_or(SubmissionError::MissingElementId)?
            .to_owned();

        let mut values = object.clone();
        values.remove(ELEMENT_ID_FIELD);

        Ok(Self { element_id, values })
    }

    /// Submitted value for `key`, if present and a string.
    pub fn str_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_payload_extracts_identity_field() {
        let submission = FormSubmission::from_payload(&json!({
            "element_id": "e1",
            "title": "Hi",
        }))
        .unwrap();

        assert_eq!(submission.element_id, "e1");
        assert_eq!(submission.str_value("title"), Some("Hi"));
        // The identity field is not a content value.
        assert!(submission.values.get(ELEMENT_ID_FIELD).is_none());
    }

    #[test]
    fn test_from_payload_rejects_non_object() {
        let err = FormSubmission::from_payload(&json!("not a form")).unwrap_err();
        assert_eq!(err, SubmissionError::NotAnObject);
    }

    #[test]
    fn test_from_payload_rejects_missing_identity() {
        let err = FormSubmission::from_payload(&json!({"title": "Hi"})).unwrap_err();
        assert_eq!(err, SubmissionError::MissingElementId);

        let err = FormSubmission::from_payload(&json!({"element_id": 7})).unwrap_err();
        assert_eq!(err, SubmissionError::MissingElementId);
    }

    #[test]
    fn test_form_wire_format() {
        let form = Form {
            fields: vec![ContentField::text("title")],
            form_data: BTreeMap::from([("title".to_string(), "Hi".to_string())]),
        };

        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["fields"][0]["key"], "title");
        assert_eq!(value["formData"]["title"], "Hi");
    }
}
