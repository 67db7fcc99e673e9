//! Content Administration Pipelines
//!
//! The two admin editing flows for elements:
//!
//! - `edit_content_type` - assign a content type to an element via the
//!   type-selector form
//! - `edit_content` - edit the element's type-specific content through a
//!   form derived at runtime from the assigned content type's schema
//!
//! Both are two-state machines driven by `EditAction`: Display builds a
//! bound form, Commit validates the submission and performs a targeted
//! partial update. Every path - success, soft error, refusal - returns
//! exactly one assembled `AdminResponse`; the host renders it once.

use crate::models::{Element, FormSubmission, TYPE_FIELD};
use crate::render::{AdminResponse, DynamicDirective, Severity, ADMIN_FORM_TEMPLATE};
use crate::services::form_binder;
use crate::store::{ContentTypeRegistry, ElementStore};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Cap on content types offered by the selector form.
///
/// A safety bound against unbounded form rendering, not pagination.
pub const CONTENT_TYPE_LIST_LIMIT: usize = 50;

/// What a request asks a pipeline to do.
#[derive(Debug, Clone)]
pub enum EditAction {
    /// Read request: build and attach a bound form.
    Display,
    /// Write request, carrying the validated payload the form subsystem
    /// returned.
    Commit(Value),
}

/// One admin editing request.
#[derive(Debug, Clone)]
pub struct EditRequest {
    /// Element id from the route.
    pub element_id: String,
    /// Requesting host, carried for log context.
    pub host: String,
    /// Display or Commit.
    pub action: EditAction,
}

impl EditRequest {
    /// A read request for `element_id`.
    pub fn display(element_id: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            host: host.into(),
            action: EditAction::Display,
        }
    }

    /// A write request carrying the submitted payload.
    pub fn commit(
        element_id: impl Into<String>,
        host: impl Into<String>,
        payload: Value,
    ) -> Self {
        Self {
            element_id: element_id.into(),
            host: host.into(),
            action: EditAction::Commit(payload),
        }
    }
}

/// The admin editing service.
///
/// Holds the two store contracts; one instance serves any number of
/// concurrent requests.
pub struct ContentAdmin {
    elements: Arc<dyn ElementStore>,
    content_types: Arc<dyn ContentTypeRegistry>,
}

impl ContentAdmin {
    /// Create the service over its store contracts.
    pub fn new(elements: Arc<dyn ElementStore>, content_types: Arc<dyn ContentTypeRegistry>) -> Self {
        Self {
            elements,
            content_types,
        }
    }

    /// Type-assignment flow.
    ///
    /// Display loads the element and offers the type selector; Commit
    /// writes `controller_values.type`. No refresh directive is issued -
    /// assigning a type does not re-render the content view.
    pub async fn edit_content_type(&self, request: &EditRequest) -> AdminResponse {
        let mut response = AdminResponse::new();

        match &request.action {
            EditAction::Display => {
                let Some(element) = self.load_element(request, &mut response).await else {
                    return response;
                };
                let types = match self.content_types.list_all(CONTENT_TYPE_LIST_LIMIT).await {
                    Ok(types) => types,
                    Err(err) => {
                        error!(
                            element_id = %request.element_id,
                            host = %request.host,
                            error = %err,
                            "content type listing failed"
                        );
                        response.add_message("Unable to retrieve content types.", Severity::Error);
                        return response;
                    }
                };

                let form = form_binder::type_selector_form(&types, element.content_type());
                response.set_template(ADMIN_FORM_TEMPLATE);
                response.set_payload("form", json!(form));
            }
            EditAction::Commit(payload) => {
                // A malformed payload aborts silently: the form subsystem
                // owns user messaging for its own validation failures.
                let Ok(submission) = FormSubmission::from_payload(payload) else {
                    return response;
                };
                let Some(type_name) = submission.str_value(TYPE_FIELD) else {
                    warn!(
                        element_id = %submission.element_id,
                        host = %request.host,
                        "type assignment submitted without a type value"
                    );
                    response.add_message("The submitted form was not valid.", Severity::Error);
                    return response;
                };

                match self
                    .elements
                    .set_content_type(&submission.element_id, type_name)
                    .await
                {
                    Err(err) => {
                        error!(
                            element_id = %submission.element_id,
                            host = %request.host,
                            error = %err,
                            "element content type save failed"
                        );
                        response.add_message("Unable to save element.", Severity::Error);
                    }
                    Ok(()) => {
                        debug!(
                            element_id = %submission.element_id,
                            content_type = type_name,
                            "element content type saved"
                        );
                        response.add_message("Element content type saved.", Severity::Success);
                    }
                }
            }
        }

        response
    }

    /// Content-editing flow.
    ///
    /// Preconditions run before branching on the action: the element must
    /// exist, carry a content type, and that type must resolve in the
    /// registry. Read requests additionally require the content capability,
    /// checked before any schema-dependent logic, and are refused outright
    /// without it. A successful Commit replaces
    /// `controller_values.content` and records a directive refreshing the
    /// element's admin preview in place.
    pub async fn edit_content(&self, request: &EditRequest) -> AdminResponse {
        let mut response = AdminResponse::new();

        let Some(element) = self.load_element(request, &mut response).await else {
            return response;
        };

        // Authorization boundary for read requests: refused before any
        // schema-dependent logic runs, with no flash message, so a
        // capability mismatch is not distinguishable from the outside.
        if matches!(request.action, EditAction::Display) && !element.can_edit_content() {
            response.forbid();
            return response;
        }

        let Some(type_name) = element.content_type() else {
            response.add_message(
                "This element doesn't have a content type set. Set a content type to edit values.",
                Severity::Error,
            );
            return response;
        };
        let content_type = match self.content_types.find_by_name(type_name).await {
            Ok(Some(content_type)) => content_type,
            Ok(None) => {
                warn!(
                    element_id = %request.element_id,
                    content_type = type_name,
                    "assigned content type is not registered"
                );
                response.add_message("Unable to find content type.", Severity::Error);
                return response;
            }
            Err(err) => {
                error!(
                    element_id = %request.element_id,
                    host = %request.host,
                    content_type = type_name,
                    error = %err,
                    "content type lookup failed"
                );
                response.add_message("Unable to find content type.", Severity::Error);
                return response;
            }
        };

        match &request.action {
            EditAction::Display => {
                let form = form_binder::content_form(&content_type, element.content());
                response.set_template(ADMIN_FORM_TEMPLATE);
                response.set_payload("form", json!(form));
            }
            EditAction::Commit(payload) => {
                let Ok(submission) = FormSubmission::from_payload(payload) else {
                    return response;
                };
                let document = match form_binder::bind_submission(&content_type.form, &submission)
                {
                    Ok(document) => document,
                    Err(err) => {
                        warn!(
                            element_id = %submission.element_id,
                            host = %request.host,
                            error = %err,
                            "content submission rejected"
                        );
                        response
                            .add_message("The submitted content was not valid.", Severity::Error);
                        return response;
                    }
                };

                match self
                    .elements
                    .set_content(&submission.element_id, document)
                    .await
                {
                    Err(err) => {
                        error!(
                            element_id = %submission.element_id,
                            host = %request.host,
                            error = %err,
                            "element content save failed"
                        );
                        response.add_message("Unable to save element.", Severity::Error);
                    }
                    Ok(()) => {
                        debug!(element_id = %submission.element_id, "element content saved");
                        response.add_message("Element content saved.", Severity::Success);
                        response.notify(DynamicDirective::refresh_element(&submission.element_id));
                    }
                }
            }
        }

        response
    }

    /// Load the routed element, messaging and logging on failure.
    async fn load_element(
        &self,
        request: &EditRequest,
        response: &mut AdminResponse,
    ) -> Option<Element> {
        match self.elements.get_element(&request.element_id).await {
            Ok(Some(element)) => Some(element),
            Ok(None) => {
                warn!(
                    element_id = %request.element_id,
                    host = %request.host,
                    "element not found for editing"
                );
                response.add_message("This element was not found.", Severity::Error);
                None
            }
            Err(err) => {
                error!(
                    element_id = %request.element_id,
                    host = %request.host,
                    error = %err,
                    "element lookup failed"
                );
                response.add_message("This element was not found.", Severity::Error);
                None
            }
        }
    }
}

// Pipeline scenario tests in separate module
#[cfg(test)]
#[path = "content_admin_test.rs"]
mod content_admin_test;
