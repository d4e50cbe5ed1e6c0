//! Closed variant, size, and state enumerations for every widget.
//!
//! Each enum maps exhaustively to a stable string token. Tokens are the only place widget
//! variants become strings: class names, `data-ui-*` attributes, and JSON configuration all go
//! through [`DesignToken`].

use serde::{Deserialize, Deserializer, Serialize};

/// Common contract for enums that map to a stable string tag.
pub trait DesignToken: Sized + Copy + Default + 'static {
    /// Every variant in declaration order.
    const ALL: &'static [Self];

    /// Stable string tag for the variant.
    fn token(self) -> &'static str;

    /// Parses a string tag. Unknown tags return `None` rather than failing.
    fn from_token(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|value| value.token() == tag)
    }

    /// Parses a string tag, degrading to the default variant for unknown tags.
    fn from_token_or_default(tag: &str) -> Self {
        Self::from_token(tag).unwrap_or_default()
    }
}

/// Serde `deserialize_with` helper that maps unknown tags to the default variant.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DesignToken,
{
    let tag = String::deserialize(deserializer)?;
    Ok(T::from_token_or_default(&tag))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Visual variants for [`crate::ButtonStyle`].
pub enum ButtonVariant {
    /// Filled brand button.
    Primary,
    /// Neutral filled button.
    Secondary,
    /// Bordered transparent button.
    Outline,
    /// Borderless transparent button.
    Ghost,
    /// Destructive action button.
    Danger,
    /// Inline text-link button.
    Link,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl DesignToken for ButtonVariant {
    const ALL: &'static [Self] = &[
        Self::Primary,
        Self::Secondary,
        Self::Outline,
        Self::Ghost,
        Self::Danger,
        Self::Link,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Danger => "danger",
            Self::Link => "link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Md,
    /// Large button.
    Lg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl DesignToken for ButtonSize {
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Badge color variants.
pub enum BadgeVariant {
    /// Neutral badge.
    Default,
    /// Brand badge.
    Primary,
    /// Success badge.
    Success,
    /// Warning badge.
    Warning,
    /// Danger badge.
    Danger,
    /// Informational badge.
    Info,
}

impl Default for BadgeVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl DesignToken for BadgeVariant {
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Primary,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Info,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Badge sizing tokens.
pub enum BadgeSize {
    /// Small badge.
    Sm,
    /// Default badge.
    Md,
    /// Large badge.
    Lg,
}

impl Default for BadgeSize {
    fn default() -> Self {
        Self::Md
    }
}

impl DesignToken for BadgeSize {
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Animation applied to a badge dot indicator.
pub enum BadgeAnimation {
    /// Static dot.
    None,
    /// Opacity pulse.
    Pulse,
    /// Expanding ring.
    Ripple,
    /// Soft glow.
    Glow,
    /// Vertical bounce.
    Bounce,
}

impl Default for BadgeAnimation {
    fn default() -> Self {
        Self::None
    }
}

impl DesignToken for BadgeAnimation {
    const ALL: &'static [Self] = &[
        Self::None,
        Self::Pulse,
        Self::Ripple,
        Self::Glow,
        Self::Bounce,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Pulse => "pulse",
            Self::Ripple => "ripple",
            Self::Glow => "glow",
            Self::Bounce => "bounce",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Card surface variants.
pub enum CardVariant {
    /// Flat card.
    Default,
    /// Bordered card.
    Outlined,
    /// Shadowed card.
    Elevated,
}

impl Default for CardVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl DesignToken for CardVariant {
    const ALL: &'static [Self] = &[Self::Default, Self::Outlined, Self::Elevated];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Outlined => "outlined",
            Self::Elevated => "elevated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Card inner padding tokens.
pub enum CardPadding {
    /// No padding.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    Md,
    /// Spacious padding.
    Lg,
}

impl Default for CardPadding {
    fn default() -> Self {
        Self::Md
    }
}

impl DesignToken for CardPadding {
    const ALL: &'static [Self] = &[Self::None, Self::Sm, Self::Md, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Input sizing tokens.
pub enum InputSize {
    /// Dense input.
    Sm,
    /// Default input.
    Md,
    /// Large input.
    Lg,
}

impl Default for InputSize {
    fn default() -> Self {
        Self::Md
    }
}

impl DesignToken for InputSize {
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Input validation variants. Error and success messages override the configured variant.
pub enum InputVariant {
    /// Neutral input.
    Default,
    /// Invalid input.
    Error,
    /// Validated input.
    Success,
}

impl Default for InputVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl DesignToken for InputVariant {
    const ALL: &'static [Self] = &[Self::Default, Self::Error, Self::Success];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Native input `type` values supported by the text input widget.
pub enum InputType {
    /// Plain text.
    Text,
    /// Email address.
    Email,
    /// Masked password.
    Password,
    /// Numeric value.
    Number,
    /// Telephone number.
    Tel,
    /// URL.
    Url,
    /// Search query.
    Search,
}

impl Default for InputType {
    fn default() -> Self {
        Self::Text
    }
}

impl DesignToken for InputType {
    const ALL: &'static [Self] = &[
        Self::Text,
        Self::Email,
        Self::Password,
        Self::Number,
        Self::Tel,
        Self::Url,
        Self::Search,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Search => "search",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Select sizing tokens.
pub enum SelectSize {
    /// Dense select.
    Sm,
    /// Default select.
    Md,
    /// Large select.
    Lg,
}

impl Default for SelectSize {
    fn default() -> Self {
        Self::Md
    }
}

impl DesignToken for SelectSize {
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Select validation styling. An error message forces [`SelectVisualState::Error`].
pub enum SelectVisualState {
    /// Neutral select.
    Default,
    /// Invalid select.
    Error,
    /// Validated select.
    Success,
}

impl Default for SelectVisualState {
    fn default() -> Self {
        Self::Default
    }
}

impl DesignToken for SelectVisualState {
    const ALL: &'static [Self] = &[Self::Default, Self::Error, Self::Success];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Modal maximum-size tokens.
pub enum ModalSize {
    /// Narrow dialog.
    Sm,
    /// Default dialog.
    Md,
    /// Wide dialog.
    Lg,
    /// Viewport-filling dialog.
    Full,
}

impl Default for ModalSize {
    fn default() -> Self {
        Self::Md
    }
}

impl DesignToken for ModalSize {
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg, Self::Full];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Full => "full",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_token_parses_back_to_its_variant() {
        for variant in ButtonVariant::ALL {
            assert_eq!(ButtonVariant::from_token(variant.token()), Some(*variant));
        }
        for size in ModalSize::ALL {
            assert_eq!(ModalSize::from_token(size.token()), Some(*size));
        }
    }

    fn token_table<T: DesignToken>() -> Vec<&'static str> {
        T::ALL.iter().map(|value| value.token()).collect()
    }

    #[test]
    fn token_tables_are_usable_generically() {
        assert_eq!(token_table::<CardVariant>(), vec!["default", "outlined", "elevated"]);
        assert_eq!(token_table::<ModalSize>(), vec!["sm", "md", "lg", "full"]);
        let all: &'static [SelectSize] = SelectSize::ALL;
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn unknown_tags_degrade_to_defaults() {
        assert_eq!(ButtonVariant::from_token("neon"), None);
        assert_eq!(
            ButtonVariant::from_token_or_default("neon"),
            ButtonVariant::Primary
        );
        assert_eq!(CardPadding::from_token_or_default("huge"), CardPadding::Md);
        assert_eq!(BadgeAnimation::from_token_or_default(""), BadgeAnimation::None);
    }

    #[test]
    fn serialized_tags_match_tokens() {
        assert_eq!(
            serde_json::to_string(&InputType::Password).expect("serialize"),
            "\"password\""
        );
        assert_eq!(
            serde_json::to_string(&SelectVisualState::Success).expect("serialize"),
            "\"success\""
        );
    }

    #[test]
    fn lenient_deserializer_accepts_unknown_tags() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(deserialize_with = "lenient")]
            size: ModalSize,
        }

        let holder: Holder = serde_json::from_str(r#"{"size":"gigantic"}"#).expect("parse");
        assert_eq!(holder.size, ModalSize::Md);
        let holder: Holder = serde_json::from_str(r#"{"size":"full"}"#).expect("parse");
        assert_eq!(holder.size, ModalSize::Full);
    }
}
