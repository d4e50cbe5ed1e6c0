//! Leptos widgets rendering the headless design-system contracts.

use design_headless::{
    dismissal, interaction_blocked, key_press, reduce_select, resolve_message, trap_tab,
    BadgeAnimation, BadgeSize, BadgeStyle, BadgeVariant, ButtonSize, ButtonStyle, ButtonVariant,
    CardPadding, CardStyle, CardVariant, DesignToken, DismissReason, FieldIds, FieldMessage,
    InputSize, InputStyle, InputType, InputVariant, MessageKind, ModalConfig, ModalEnvironment,
    ModalEvent, ModalSize, ModalSlot, ModalStyle, SelectAction, SelectConfig, SelectEffect,
    SelectOption, SelectSize, SelectState, SelectStyle, SelectVisualState, NO_RESULTS_TEXT,
};
use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;

use crate::dom;

mod controls;
mod data_display;
mod overlays;
mod select;
mod theme;

pub use controls::{Button, Input};
pub use data_display::{Badge, Card};
pub use overlays::Modal;
pub use select::Select;
pub use theme::ThemeStyle;

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Label/for pairing shared by form widgets.
#[component]
fn FieldLabel(
    #[prop(into)] for_id: String,
    #[prop(into)] text: String,
    class: &'static str,
    show_required: bool,
) -> impl IntoView {
    view! {
        <label for=for_id class=format!("{class}__label")>
            {text}
            {show_required
                .then(|| {
                    view! {
                        <span class=format!("{class}__required") aria-label="required">
                            "*"
                        </span>
                    }
                })}
        </label>
    }
}

/// The single helper/error/success paragraph below a form widget.
#[component]
fn FieldMessageText(
    #[prop(into)] id: String,
    message: Signal<Option<FieldMessage>>,
    class_for: fn(MessageKind) -> String,
) -> impl IntoView {
    move || {
        message.get().map(|message| {
            let is_error = message.kind == MessageKind::Error;
            view! {
                <p
                    id=id.clone()
                    class=class_for(message.kind)
                    role=is_error.then_some("alert")
                    data-ui-message=message.kind.token()
                >
                    {message.text}
                </p>
            }
        })
    }
}
