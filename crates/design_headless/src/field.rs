//! Label/message wiring shared by form widgets.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::tokens::{InputVariant, SelectVisualState};

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

/// Generates a DOM id unique to this widget instance, e.g. `ds-input-7`.
pub fn next_instance_id(widget: &str) -> String {
    let id = NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed);
    format!("ds-{widget}-{id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// DOM ids linking a label, its control, and the message paragraph.
pub struct FieldIds {
    control_id: String,
}

impl FieldIds {
    /// Uses the caller id when supplied, otherwise generates one for `widget`.
    pub fn resolve(provided: Option<String>, widget: &str) -> Self {
        let control_id = provided
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| next_instance_id(widget));
        Self { control_id }
    }

    /// Id of the input or trigger element, used by the label's `for`.
    pub fn control_id(&self) -> &str {
        &self.control_id
    }

    /// Id of the helper/error/success paragraph, used by `aria-describedby`.
    pub fn message_id(&self) -> String {
        format!("{}-helper", self.control_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Which message a field is showing.
pub enum MessageKind {
    /// Validation error.
    Error,
    /// Validation success.
    Success,
    /// Neutral helper text.
    Helper,
}

impl MessageKind {
    /// Stable string tag.
    pub fn token(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
            Self::Helper => "helper",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The single message rendered below a field.
pub struct FieldMessage {
    /// Message kind.
    pub kind: MessageKind,
    /// Message text.
    pub text: String,
}

fn present(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.is_empty())
}

/// Picks the one message to display: error, then success, then helper text.
pub fn resolve_message(
    error: Option<&str>,
    success: Option<&str>,
    helper: Option<&str>,
) -> Option<FieldMessage> {
    let (kind, text) = if let Some(text) = present(error) {
        (MessageKind::Error, text)
    } else if let Some(text) = present(success) {
        (MessageKind::Success, text)
    } else {
        (MessageKind::Helper, present(helper)?)
    };
    Some(FieldMessage {
        kind,
        text: text.to_string(),
    })
}

/// Input variant after applying message precedence.
pub fn effective_input_variant(
    configured: InputVariant,
    error: Option<&str>,
    success: Option<&str>,
) -> InputVariant {
    if present(error).is_some() {
        InputVariant::Error
    } else if present(success).is_some() {
        InputVariant::Success
    } else {
        configured
    }
}

/// Select visual state after applying error precedence.
pub fn effective_select_state(
    configured: SelectVisualState,
    error: Option<&str>,
) -> SelectVisualState {
    if present(error).is_some() {
        SelectVisualState::Error
    } else {
        configured
    }
}
