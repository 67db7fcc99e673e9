//! Response Assembly and Dynamic Update Directives
//!
//! `AdminResponse` models the slice of the presentation layer the pipelines
//! talk to: a template name, a keyed payload, flash messages, and the
//! dynamic-refresh directives produced by successful commits. A pipeline
//! returns exactly one completed response per request, on every path -
//! early exits hand back the partially assembled response so the page shell
//! still renders.
//!
//! `DynamicDirective` is a typed post-commit effect, not an implicit side
//! channel: the commit step produces it and `notify` records it; the
//! presentation layer drains `directives` within the same response cycle.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Template rendering the generic admin form.
pub const ADMIN_FORM_TEMPLATE: &str = "admin/form.html";

/// Controller producing the refreshed element fragment.
pub const ELEMENT_CONTROLLER: &str = "admin/element";

/// Template rendering the refreshed element fragment.
pub const ELEMENT_TEMPLATE: &str = "admin/element.html";

/// Flash message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// A user-visible flash notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
}

/// Instruction to re-render one named UI region out of band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicDirective {
    /// Region to refresh.
    pub target: String,
    /// Entity the refreshed fragment is rendered for.
    pub id: String,
    /// Handler producing the fragment.
    pub controller: String,
    /// View used by the handler.
    pub template: String,
}

impl DynamicDirective {
    /// Directive refreshing an element's admin preview in place.
    pub fn refresh_element(element_id: &str) -> Self {
        Self {
            target: element_id.to_owned(),
            id: element_id.to_owned(),
            controller: ELEMENT_CONTROLLER.to_owned(),
            template: ELEMENT_TEMPLATE.to_owned(),
        }
    }
}

/// Terminal status of an assembled response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseStatus {
    /// Render the template and payload as assembled.
    #[default]
    Ok,
    /// Hard refusal: no payload, no messages, no further processing.
    Forbidden,
}

/// The response a pipeline assembles for the presentation layer.
#[derive(Debug, Default)]
pub struct AdminResponse {
    pub status: ResponseStatus,
    pub template: Option<String>,
    pub payload: Map<String, Value>,
    pub messages: Vec<Message>,
    pub directives: Vec<DynamicDirective>,
}

impl AdminResponse {
    /// An empty response; renders the page shell until populated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the view template.
    pub fn set_template(&mut self, name: &str) {
        self.template = Some(name.to_owned());
    }

    /// Attach a payload value under `key`.
    pub fn set_payload(&mut self, key: &str, value: Value) {
        self.payload.insert(key.to_owned(), value);
    }

    /// Queue a flash message.
    pub fn add_message(&mut self, text: impl Into<String>, severity: Severity) {
        self.messages.push(Message {
            text: text.into(),
            severity,
        });
    }

    /// Record a dynamic-refresh directive. Fire-and-forget for callers.
    pub fn notify(&mut self, directive: DynamicDirective) {
        self.directives.push(directive);
    }

    /// Turn the response into a hard refusal.
    pub fn forbid(&mut self) {
        self.status = ResponseStatus::Forbidden;
    }

    /// Whether the response is a hard refusal.
    pub fn is_forbidden(&self) -> bool {
        self.status == ResponseStatus::Forbidden
    }
}
