use super::*;

#[component]
/// Action button with variant, size, loading, and icon slots.
///
/// While `disabled` or `loading`, clicks and Enter/Space never reach `on_click`. A caller
/// `on_keydown` always runs before the built-in keyboard activation.
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] full_width: bool,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] left_icon: Option<ViewFn>,
    #[prop(optional, into)] right_icon: Option<ViewFn>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    let loading = Signal::derive(move || loading.get());
    let blocked = Signal::derive(move || interaction_blocked(disabled.get(), loading.get()));
    let class_name = move || {
        ButtonStyle {
            variant,
            size,
            loading: loading.get(),
            full_width,
        }
        .class_name(class.as_deref())
    };

    view! {
        <button
            type=button_type
            class=class_name
            id=id
            aria-label=aria_label
            aria-busy=move || bool_token(loading.get())
            aria-disabled=move || bool_token(blocked.get())
            disabled=move || blocked.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            on:click=move |ev: MouseEvent| {
                if blocked.get_untracked() {
                    ev.prevent_default();
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:keydown=move |ev: KeyboardEvent| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev.clone());
                }
                let press = key_press(&ev.key(), blocked.get_untracked());
                if press.prevent_default {
                    ev.prevent_default();
                }
                if press.activate {
                    dom::click_current_target(&ev);
                }
            }
        >
            <Show
                when=move || loading.get()
                fallback=move || left_icon.as_ref().map(|icon| {
                    view! { <span class="ds-button__icon ds-button__icon--left">{icon.run()}</span> }
                })
            >
                <span class="ds-button__spinner" role="status" aria-label="Loading"></span>
            </Show>
            <span class="ds-button__label">{children()}</span>
            {move || {
                (!loading.get())
                    .then(|| right_icon.as_ref().map(|icon| {
                        view! { <span class="ds-button__icon ds-button__icon--right">{icon.run()}</span> }
                    }))
                    .flatten()
            }}
        </button>
    }
}

#[component]
/// Text field with label, prefix/suffix slots, and one helper/error/success message.
///
/// The message paragraph is linked through `aria-describedby`; an error message also marks the
/// field `aria-invalid` and forces the error variant.
pub fn Input(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] input_type: InputType,
    #[prop(optional)] size: InputSize,
    #[prop(optional)] variant: InputVariant,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] helper_text: MaybeProp<String>,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional, into)] success: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] is_loading: MaybeSignal<bool>,
    #[prop(optional)] required: bool,
    #[prop(default = true)] show_required_asterisk: bool,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] prefix_icon: Option<ViewFn>,
    #[prop(optional, into)] suffix_icon: Option<ViewFn>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
) -> impl IntoView {
    let ids = FieldIds::resolve(id, "input");
    let control_id = ids.control_id().to_string();
    let message_id = ids.message_id();
    let described_by = message_id.clone();

    let error = Signal::derive(move || error.get());
    let success = Signal::derive(move || success.get());
    let helper_text = Signal::derive(move || helper_text.get());
    let message = Signal::derive(move || {
        resolve_message(
            error.get().as_deref(),
            success.get().as_deref(),
            helper_text.get().as_deref(),
        )
    });
    let invalid = Signal::derive(move || {
        message.with(|message| {
            message
                .as_ref()
                .is_some_and(|message| message.kind == MessageKind::Error)
        })
    });
    let is_loading = Signal::derive(move || is_loading.get());
    let blocked = Signal::derive(move || interaction_blocked(disabled.get(), is_loading.get()));

    let has_prefix = prefix_icon.is_some();
    let has_suffix_icon = suffix_icon.is_some();
    let style = move || InputStyle {
        size,
        variant: design_headless::effective_input_variant(
            variant,
            error.get().as_deref(),
            success.get().as_deref(),
        ),
        full_width,
        has_prefix,
        has_suffix: has_suffix_icon || is_loading.get(),
    };
    let container_class = InputStyle {
        full_width,
        ..InputStyle::default()
    }
    .container_class(class.as_deref());
    let label_view = label.map(|text| {
        view! {
            <FieldLabel
                for_id=control_id.clone()
                text
                class="ds-input"
                show_required=required && show_required_asterisk
            />
        }
    });

    view! {
        <div class=container_class data-ui-primitive="true" data-ui-kind="input">
            {label_view}
            <div
                class=move || style().wrapper_class()
                data-ui-variant=move || style().variant.token()
            >
                {prefix_icon
                    .map(|icon| {
                        view! {
                            <span class="ds-input__prefix" aria-hidden="true">
                                {icon.run()}
                            </span>
                        }
                    })}
                <input
                    class=move || style().field_class()
                    id=control_id
                    name=name
                    type=input_type.token()
                    placeholder=placeholder
                    aria-label=aria_label
                    autocomplete=autocomplete
                    node_ref=node_ref
                    required=required
                    prop:value=move || value.get()
                    disabled=move || blocked.get()
                    aria-invalid=move || invalid.get().then_some("true")
                    aria-describedby=move || message.with(Option::is_some).then(|| described_by.clone())
                    on:input=move |ev| {
                        if let Some(on_input) = on_input.as_ref() {
                            on_input.call(ev);
                        }
                    }
                    on:change=move |ev| {
                        if let Some(on_change) = on_change.as_ref() {
                            on_change.call(ev);
                        }
                    }
                    on:keydown=move |ev| {
                        if let Some(on_keydown) = on_keydown.as_ref() {
                            on_keydown.call(ev);
                        }
                    }
                    on:focus=move |ev| {
                        if let Some(on_focus) = on_focus.as_ref() {
                            on_focus.call(ev);
                        }
                    }
                    on:blur=move |ev| {
                        if let Some(on_blur) = on_blur.as_ref() {
                            on_blur.call(ev);
                        }
                    }
                />
                {move || {
                    if is_loading.get() {
                        Some(
                            view! {
                                <span class="ds-input__suffix">
                                    <span class="ds-input__spinner" role="status" aria-label="Loading"></span>
                                </span>
                            }
                                .into_view(),
                        )
                    } else {
                        suffix_icon
                            .as_ref()
                            .map(|icon| {
                                view! {
                                    <span class="ds-input__suffix" aria-hidden="true">
                                        {icon.run()}
                                    </span>
                                }
                                    .into_view()
                            })
                    }
                }}
            </div>
            <FieldMessageText id=message_id message class_for=InputStyle::message_class/>
        </div>
    }
}
