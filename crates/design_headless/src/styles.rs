//! Per-widget class builders.
//!
//! Every widget root gets a deterministic class list: base class, variant class, size class,
//! toggle classes, then the caller class. Stylesheets target the `ds-*` names; this module is the
//! only place those names are spelled out.

use crate::class_names::ClassNames;
use crate::field::MessageKind;
use crate::tokens::{
    BadgeAnimation, BadgeSize, BadgeVariant, ButtonSize, ButtonVariant, CardPadding, CardVariant,
    DesignToken, InputSize, InputVariant, ModalSize, SelectSize, SelectVisualState,
};

fn modifier(block: &str, token: &str) -> String {
    format!("{block}--{token}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Class inputs for the button widget.
pub struct ButtonStyle {
    /// Visual variant.
    pub variant: ButtonVariant,
    /// Size token.
    pub size: ButtonSize,
    /// Loading spinner is shown.
    pub loading: bool,
    /// Button stretches to its container.
    pub full_width: bool,
}

impl ButtonStyle {
    /// Root `<button>` classes.
    pub fn class_name(&self, extra: Option<&str>) -> String {
        ClassNames::with_base("ds-button")
            .push(modifier("ds-button", self.variant.token()))
            .push(modifier("ds-button", self.size.token()))
            .push_if(self.loading, "ds-button--loading")
            .push_if(self.full_width, "ds-button--full-width")
            .push_opt(extra)
            .build()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Class inputs for the badge widget.
pub struct BadgeStyle {
    /// Color variant.
    pub variant: BadgeVariant,
    /// Size token.
    pub size: BadgeSize,
    /// Dot indicator is rendered.
    pub dot: bool,
    /// Dot animation.
    pub animation: BadgeAnimation,
}

impl BadgeStyle {
    /// Root `<span>` classes.
    pub fn class_name(&self, extra: Option<&str>) -> String {
        ClassNames::with_base("ds-badge")
            .push(modifier("ds-badge", self.variant.token()))
            .push(modifier("ds-badge", self.size.token()))
            .push_if(self.dot, "ds-badge--dot")
            .push_opt(extra)
            .build()
    }

    /// Dot indicator classes.
    pub fn dot_class(&self) -> String {
        ClassNames::with_base("ds-badge__dot")
            .push(modifier("ds-badge__dot", self.variant.token()))
            .push_if(
                self.animation != BadgeAnimation::None,
                modifier("ds-badge__dot", self.animation.token()),
            )
            .build()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Class inputs for the card widget.
pub struct CardStyle {
    /// Surface variant.
    pub variant: CardVariant,
    /// Padding token.
    pub padding: CardPadding,
    /// Card acts as a button.
    pub clickable: bool,
    /// Card shows a hover effect.
    pub hoverable: bool,
    /// Card stretches to its container.
    pub full_width: bool,
}

impl CardStyle {
    /// Root `<div>` classes.
    pub fn class_name(&self, extra: Option<&str>) -> String {
        ClassNames::with_base("ds-card")
            .push(modifier("ds-card", self.variant.token()))
            .push(format!("ds-card--padding-{}", self.padding.token()))
            .push_if(self.clickable, "ds-card--clickable")
            .push_if(self.hoverable, "ds-card--hoverable")
            .push_if(self.full_width, "ds-card--full-width")
            .push_opt(extra)
            .build()
    }

    fn section_class(&self, section: &str, padded: bool) -> String {
        ClassNames::with_base(format!("ds-card__{section}"))
            .push_if(
                padded && self.padding != CardPadding::None,
                format!("ds-card__{section}--padding-{}", self.padding.token()),
            )
            .build()
    }

    /// Header slot classes.
    pub fn header_class(&self) -> String {
        self.section_class("header", true)
    }

    /// Body classes. Body padding only applies when a header or footer splits the card.
    pub fn body_class(&self, has_header_or_footer: bool) -> String {
        self.section_class("body", has_header_or_footer)
    }

    /// Footer slot classes.
    pub fn footer_class(&self) -> String {
        self.section_class("footer", true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Class inputs for the text input widget.
pub struct InputStyle {
    /// Size token.
    pub size: InputSize,
    /// Effective variant after message precedence.
    pub variant: InputVariant,
    /// Field stretches to its container.
    pub full_width: bool,
    /// A prefix icon is rendered.
    pub has_prefix: bool,
    /// A suffix icon or loading spinner is rendered.
    pub has_suffix: bool,
}

impl InputStyle {
    /// Outer container classes.
    pub fn container_class(&self, extra: Option<&str>) -> String {
        ClassNames::with_base("ds-input")
            .push_if(self.full_width, "ds-input--full-width")
            .push_opt(extra)
            .build()
    }

    /// Wrapper around the `<input>` and its icons.
    pub fn wrapper_class(&self) -> String {
        ClassNames::with_base("ds-input__wrapper")
            .push(modifier("ds-input__wrapper", self.size.token()))
            .push(modifier("ds-input__wrapper", self.variant.token()))
            .build()
    }

    /// `<input>` element classes.
    pub fn field_class(&self) -> String {
        ClassNames::with_base("ds-input__field")
            .push_if(self.has_prefix, "ds-input__field--has-prefix")
            .push_if(self.has_suffix, "ds-input__field--has-suffix")
            .build()
    }

    /// Message paragraph classes.
    pub fn message_class(kind: MessageKind) -> String {
        ClassNames::with_base("ds-input__message")
            .push(modifier("ds-input__message", kind.token()))
            .build()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Class inputs for the select widget.
pub struct SelectStyle {
    /// Size token.
    pub size: SelectSize,
    /// Effective visual state after error precedence.
    pub state: SelectVisualState,
    /// Select is disabled.
    pub disabled: bool,
    /// Dropdown is open.
    pub open: bool,
}

impl SelectStyle {
    /// Outer container classes.
    pub fn container_class(extra: Option<&str>) -> String {
        ClassNames::with_base("ds-select-field").push_opt(extra).build()
    }

    /// Select root classes (the element outside-click detection is anchored on).
    pub fn class_name(&self) -> String {
        ClassNames::with_base("ds-select")
            .push(modifier("ds-select", self.size.token()))
            .push(modifier("ds-select", self.state.token()))
            .push_if(self.disabled, "ds-select--disabled")
            .push_if(self.open, "ds-select--open")
            .build()
    }

    /// Trigger value text classes.
    pub fn value_class(has_selection: bool) -> String {
        ClassNames::with_base("ds-select__value")
            .push_if(!has_selection, "ds-select__value--placeholder")
            .build()
    }

    /// Dropdown arrow classes.
    pub fn arrow_class(&self) -> String {
        ClassNames::with_base("ds-select__arrow")
            .push_if(self.open, "ds-select__arrow--open")
            .build()
    }

    /// Option row classes.
    pub fn option_class(selected: bool, disabled: bool) -> String {
        ClassNames::with_base("ds-select__option")
            .push_if(selected, "ds-select__option--selected")
            .push_if(disabled, "ds-select__option--disabled")
            .build()
    }

    /// Message paragraph classes.
    pub fn message_class(kind: MessageKind) -> String {
        ClassNames::with_base("ds-select__message")
            .push(modifier("ds-select__message", kind.token()))
            .build()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Class inputs for the modal widget.
pub struct ModalStyle {
    /// Size token.
    pub size: ModalSize,
}

impl ModalStyle {
    /// Backdrop element class.
    pub const BACKDROP_CLASS: &'static str = "ds-modal-backdrop";

    /// Dialog root classes.
    pub fn class_name(&self, extra: Option<&str>) -> String {
        ClassNames::with_base("ds-modal")
            .push(modifier("ds-modal", self.size.token()))
            .push_opt(extra)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn button_classes_follow_base_variant_size_toggle_caller_order() {
        let style = ButtonStyle {
            variant: ButtonVariant::Danger,
            size: ButtonSize::Lg,
            loading: true,
            full_width: true,
        };
        assert_eq!(
            style.class_name(Some("toolbar-action")),
            "ds-button ds-button--danger ds-button--lg ds-button--loading ds-button--full-width toolbar-action"
        );
        assert_eq!(
            ButtonStyle::default().class_name(None),
            "ds-button ds-button--primary ds-button--md"
        );
    }

    #[test]
    fn badge_dot_animation_class_is_omitted_for_none() {
        let mut style = BadgeStyle {
            variant: BadgeVariant::Success,
            dot: true,
            ..BadgeStyle::default()
        };
        assert_eq!(style.class_name(None), "ds-badge ds-badge--success ds-badge--md ds-badge--dot");
        assert_eq!(style.dot_class(), "ds-badge__dot ds-badge__dot--success");

        style.animation = BadgeAnimation::Pulse;
        assert_eq!(
            style.dot_class(),
            "ds-badge__dot ds-badge__dot--success ds-badge__dot--pulse"
        );
    }

    #[test]
    fn card_section_padding_follows_padding_token() {
        let style = CardStyle {
            padding: CardPadding::Lg,
            clickable: true,
            ..CardStyle::default()
        };
        assert_eq!(
            style.class_name(None),
            "ds-card ds-card--default ds-card--padding-lg ds-card--clickable"
        );
        assert_eq!(style.header_class(), "ds-card__header ds-card__header--padding-lg");
        assert_eq!(style.body_class(false), "ds-card__body");
        assert_eq!(style.body_class(true), "ds-card__body ds-card__body--padding-lg");

        let flush = CardStyle {
            padding: CardPadding::None,
            ..CardStyle::default()
        };
        assert_eq!(flush.footer_class(), "ds-card__footer");
        assert_eq!(flush.body_class(true), "ds-card__body");
    }

    #[test]
    fn input_classes_reflect_icons_and_variant() {
        let style = InputStyle {
            size: InputSize::Sm,
            variant: InputVariant::Error,
            full_width: true,
            has_prefix: true,
            has_suffix: false,
        };
        assert_eq!(style.container_class(Some("form-row")), "ds-input ds-input--full-width form-row");
        assert_eq!(
            style.wrapper_class(),
            "ds-input__wrapper ds-input__wrapper--sm ds-input__wrapper--error"
        );
        assert_eq!(style.field_class(), "ds-input__field ds-input__field--has-prefix");
        assert_eq!(
            InputStyle::message_class(MessageKind::Error),
            "ds-input__message ds-input__message--error"
        );
    }

    #[test]
    fn select_root_classes_track_state() {
        let style = SelectStyle {
            size: SelectSize::Lg,
            state: SelectVisualState::Error,
            disabled: false,
            open: true,
        };
        assert_eq!(
            style.class_name(),
            "ds-select ds-select--lg ds-select--error ds-select--open"
        );
        assert_eq!(style.arrow_class(), "ds-select__arrow ds-select__arrow--open");
        assert_eq!(
            SelectStyle::option_class(true, true),
            "ds-select__option ds-select__option--selected ds-select__option--disabled"
        );
        assert_eq!(
            SelectStyle::value_class(false),
            "ds-select__value ds-select__value--placeholder"
        );
    }

    #[test]
    fn modal_size_selects_class() {
        let style = ModalStyle {
            size: ModalSize::Full,
        };
        assert_eq!(style.class_name(Some("wizard")), "ds-modal ds-modal--full wizard");
    }
}
