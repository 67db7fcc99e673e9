//! Schema-Driven Form Binder
//!
//! Bridges a content type's static schema and the forms the admin UI
//! renders. Two directions:
//!
//! - schema + current values -> `Form` ready for rendering
//! - schema + submitted values -> `ContentDocument` ready for persistence
//!
//! The binder is the single place untyped request data becomes a typed
//! content document. Because the schema is loaded per-request from the
//! store, every submission is re-validated against it here rather than
//! trusting client-supplied structure: each declared key is a required
//! read, and a missing key or non-string value fails the binding instead
//! of defaulting silently.

use crate::models::{
    ContentDocument, ContentField, ContentType, FieldOption, Form, FormSubmission,
    SubmissionError, TYPE_FIELD,
};

/// Build the one-field content-type selector form.
///
/// Offers every known type name as an option, pre-selected to `current`
/// when the element already has a type assigned.
pub fn type_selector_form(content_types: &[ContentType], current: Option<&str>) -> Form {
    let options = content_types
        .iter()
        .map(|content_type| FieldOption::plain(content_type.name.clone()))
        .collect();

    let mut form = Form {
        fields: vec![ContentField::select(TYPE_FIELD, options)],
        form_data: Default::default(),
    };
    if let Some(current) = current {
        form.form_data.insert(TYPE_FIELD.to_owned(), current.to_owned());
    }
    form
}

/// Build the content editor form for a content type.
///
/// The field list is exactly the type's schema, in declared order. Values
/// come from the element's current content; declared keys with no stored
/// value render empty, and stored keys no longer in the schema are not
/// rendered (stale mappings are tolerated at read time).
pub fn content_form(content_type: &ContentType, content: Option<&ContentDocument>) -> Form {
    let mut form = Form {
        fields: content_type.form.clone(),
        form_data: Default::default(),
    };
    if let Some(content) = content {
        for field in &content_type.form {
            if let Some(value) = content.get(&field.key) {
                form.form_data.insert(field.key.clone(), value.clone());
            }
        }
    }
    form
}

/// Bind a submission to a field schema, producing a new content document.
///
/// Every declared field key must be present in the submission as a string;
/// otherwise the binding fails with `MissingField` or `InvalidValue`.
/// Submitted keys not declared by the schema are ignored, so the result
/// contains exactly the schema's keys.
pub fn bind_submission(
    fields: &[ContentField],
    submission: &FormSubmission,
) -> Result<ContentDocument, SubmissionError> {
    let mut document = ContentDocument::new();
    for field in fields {
        let value = submission
            .values
            .get(&field.key)
            .ok_or_else(|| SubmissionError::MissingField(field.key.clone()))?;
        let value = value
            .as_str()
            .ok_or_else(|| SubmissionError::InvalidValue(field.key.clone()))?;
        document.insert(field.key.clone(), value.to_owned());
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn article() -> ContentType {
        ContentType::new(
            "article",
            vec![ContentField::text("title"), ContentField::textarea("body")],
        )
    }

    fn submission(payload: serde_json::Value) -> FormSubmission {
        FormSubmission::from_payload(&payload).unwrap()
    }

    #[test]
    fn test_type_selector_offers_every_type() {
        let types = vec![
            ContentType::new("article", Vec::new()),
            ContentType::new("page", Vec::new()),
        ];

        let form = type_selector_form(&types, None);

        assert_eq!(form.fields.len(), 1);
        let field = &form.fields[0];
        assert_eq!(field.key, TYPE_FIELD);
        let values: Vec<&str> = field.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["article", "page"]);
        // No assigned type means no pre-selection.
        assert!(form.form_data.get(TYPE_FIELD).is_none());
    }

    #[test]
    fn test_type_selector_preselects_current_type() {
        let types = vec![ContentType::new("article", Vec::new())];
        let form = type_selector_form(&types, Some("article"));
        assert_eq!(
            form.form_data.get(TYPE_FIELD).map(String::as_str),
            Some("article")
        );
    }

    #[test]
    fn test_content_form_matches_schema_keys_and_order() {
        let form = content_form(&article(), None);
        let keys: Vec<&str> = form.fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["title", "body"]);
        assert!(form.form_data.is_empty());
    }

    #[test]
    fn test_content_form_prefills_and_drops_stale_keys() {
        let content = ContentDocument::from([
            ("title".to_string(), "Hi".to_string()),
            ("obsolete".to_string(), "old".to_string()),
        ]);

        let form = content_form(&article(), Some(&content));

        assert_eq!(form.form_data.get("title").map(String::as_str), Some("Hi"));
        // Absent declared key renders empty; stale stored key is not rendered.
        assert!(form.form_data.get("body").is_none());
        assert!(form.form_data.get("obsolete").is_none());
    }

    #[test]
    fn test_bind_submission_produces_exactly_schema_keys() {
        let document = bind_submission(
            &article().form,
            &submission(json!({
                "element_id": "e1",
                "title": "Hi",
                "body": "Text",
                "undeclared": "ignored",
            })),
        )
        .unwrap();

        assert_eq!(document.len(), 2);
        assert_eq!(document.get("title").map(String::as_str), Some("Hi"));
        assert_eq!(document.get("body").map(String::as_str), Some("Text"));
        assert!(document.get("undeclared").is_none());
    }

    #[test]
    fn test_bind_submission_requires_every_declared_key() {
        let err = bind_submission(
            &article().form,
            &submission(json!({"element_id": "e1", "title": "Hi"})),
        )
        .unwrap_err();

        assert_eq!(err, SubmissionError::MissingField("body".to_string()));
    }

    #[test]
    fn test_bind_submission_rejects_non_string_values() {
        let err = bind_submission(
            &article().form,
            &submission(json!({"element_id": "e1", "title": "Hi", "body": 42})),
        )
        .unwrap_err();

        assert_eq!(err, SubmissionError::InvalidValue("body".to_string()));
    }
}
