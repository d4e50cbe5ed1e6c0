//! Headless design-system contracts shared by the Leptos widget layer.
//!
//! This crate owns everything about the widgets that does not need a DOM: variant and size
//! tokens, class-name composition, the theme token set, field message and ID wiring, keyboard
//! activation policy, the Select dropdown reducer, and the Modal session / dismissal / focus-trap
//! rules. The `design_system` crate renders these contracts; host applications may also consume
//! the tokens directly.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod activation;
pub mod class_names;
pub mod field;
pub mod modal;
pub mod select;
pub mod styles;
pub mod theme;
pub mod tokens;

pub use activation::{interaction_blocked, key_press, KeyPress};
pub use class_names::ClassNames;
pub use field::{
    effective_input_variant, effective_select_state, next_instance_id, resolve_message, FieldIds,
    FieldMessage, MessageKind,
};
pub use modal::{
    dialog_label, dismissal, trap_tab, DismissReason, ModalConfig, ModalEnvironment, ModalEvent,
    ModalSession, ModalSlot, FOCUSABLE_SELECTOR, SCROLL_LOCK_OVERFLOW,
};
pub use select::{
    reduce_select, SelectAction, SelectConfig, SelectEffect, SelectError, SelectOption,
    SelectState, DEFAULT_PLACEHOLDER, DEFAULT_SEARCH_PLACEHOLDER, NO_RESULTS_TEXT,
};
pub use styles::{BadgeStyle, ButtonStyle, CardStyle, InputStyle, ModalStyle, SelectStyle};
pub use theme::{theme_json, ColorScale, SemanticColor, Theme, THEME};
pub use tokens::{
    BadgeAnimation, BadgeSize, BadgeVariant, ButtonSize, ButtonVariant, CardPadding, CardVariant,
    DesignToken, InputSize, InputType, InputVariant, ModalSize, SelectSize, SelectVisualState,
};
