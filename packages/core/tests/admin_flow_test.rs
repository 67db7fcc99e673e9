//! Full Editing Flow Integration Test
//!
//! Drives both pipelines through the crate's public API the way an
//! embedding host would: assign a content type to a fresh element, then
//! edit its content and consume the refresh directive.

use serde_json::json;
use std::sync::Arc;
use tessera_core::{
    ContentAdmin, ContentField, ContentType, Controller, EditRequest, Element, ElementStore,
    MemoryStore, ResponseStatus, Severity,
};

#[tokio::test]
async fn test_assign_type_then_edit_content() {
    let store = Arc::new(MemoryStore::new());
    store
        .insert_content_type(ContentType::new(
            "article",
            vec![
                ContentField::text("title").with_label("Title"),
                ContentField::textarea("body"),
            ],
        ))
        .await;

    let element = Element::new(Controller::Content);
    let element_id = element.id.clone();
    store.insert_element(element).await;
    let id = element_id.as_str();

    let admin = ContentAdmin::new(store.clone(), store.clone());
    let host = "editor.example.test";

    // Pick a content type from the selector.
    let response = admin
        .edit_content_type(&EditRequest::display(id, host))
        .await;
    assert_eq!(
        response.payload["form"]["fields"][0]["options"][0]["value"],
        "article"
    );

    let response = admin
        .edit_content_type(&EditRequest::commit(
            id,
            host,
            json!({"type": "article", "element_id": id}),
        ))
        .await;
    assert_eq!(response.messages[0].severity, Severity::Success);
    assert!(response.directives.is_empty());

    // The content editor now renders the article schema.
    let response = admin
        .edit_content(&EditRequest::display(id, host))
        .await;
    assert_eq!(response.status, ResponseStatus::Ok);
    assert_eq!(response.payload["form"]["fields"][1]["key"], "body");

    // Saving content refreshes the element's admin preview in place.
    let response = admin
        .edit_content(&EditRequest::commit(
            id,
            host,
            json!({"title": "Hello", "body": "World", "element_id": id}),
        ))
        .await;
    assert_eq!(response.messages[0].severity, Severity::Success);
    assert_eq!(response.directives[0].target, element_id);
    assert_eq!(response.directives[0].controller, "admin/element");

    let element = store.get_element(id).await.unwrap().unwrap();
    assert_eq!(element.content_type(), Some("article"));
    assert_eq!(
        element.content().unwrap().get("title").map(String::as_str),
        Some("Hello")
    );
}
