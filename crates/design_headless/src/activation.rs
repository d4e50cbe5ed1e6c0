//! Pointer and keyboard activation policy for button-like widgets.

/// Returns whether a widget must ignore its primary interaction.
///
/// A widget is blocked when it is disabled or showing a loading state.
pub fn interaction_blocked(disabled: bool, loading: bool) -> bool {
    disabled || loading
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Outcome of a keydown on a button-like widget.
pub struct KeyPress {
    /// The browser default (page scroll on Space, implicit submit on Enter) must be suppressed.
    pub prevent_default: bool,
    /// The primary action must run, exactly as for a pointer click.
    pub activate: bool,
}

/// Returns whether `key` (a `KeyboardEvent.key` value) is an activation key.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Classifies a keydown.
///
/// Enter and Space always suppress the default and activate unless `blocked`. Caller key handlers
/// run regardless of this result.
pub fn key_press(key: &str, blocked: bool) -> KeyPress {
    if !is_activation_key(key) {
        return KeyPress::default();
    }
    KeyPress {
        prevent_default: true,
        activate: !blocked,
    }
}
