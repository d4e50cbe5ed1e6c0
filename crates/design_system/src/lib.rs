//! Leptos widget library for the design system.
//!
//! The crate renders the contracts defined in [`design_headless`]: every widget emits the stable
//! `ds-*` class list and the `data-ui-*` DOM attributes consumed by the stylesheet layer, and routes
//! its interaction logic (key activation, select transitions, modal dismissal and focus trap)
//! through the headless helpers. [`ThemeStyle`] publishes the theme tokens as CSS custom
//! properties.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod dom;
mod primitives;

pub use design_headless::{
    theme_json, BadgeAnimation, BadgeSize, BadgeVariant, ButtonSize, ButtonVariant, CardPadding,
    CardVariant, ClassNames, DesignToken, InputSize, InputType, InputVariant, ModalConfig, ModalSize,
    SelectConfig, SelectOption, SelectSize, SelectVisualState, Theme, THEME,
};
pub use dom::{DomEnvironment, DomError};
pub use primitives::{Badge, Button, Card, Input, Modal, Select, ThemeStyle};

/// Convenience imports for applications composing the widget set.
pub mod prelude {
    pub use crate::{
        Badge, BadgeAnimation, BadgeSize, BadgeVariant, Button, ButtonSize, ButtonVariant, Card,
        CardPadding, CardVariant, Input, InputSize, InputType, InputVariant, Modal, ModalConfig,
        ModalSize, Select, SelectConfig, SelectOption, SelectSize, SelectVisualState, ThemeStyle,
        THEME,
    };
}
