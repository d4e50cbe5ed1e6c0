use std::rc::Rc;

use super::*;

#[component]
/// Custom dropdown with optional search, clear control, and form bridging.
///
/// Every interaction is routed through [`design_headless::reduce_select`]; the component only
/// renders the resulting [`SelectState`] and runs the emitted effects. `config` seeds the static
/// settings (for example loaded from JSON); the individual props override it.
pub fn Select(
    #[prop(into)] options: MaybeSignal<Vec<SelectOption>>,
    #[prop(optional, into)] value: MaybeProp<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] config: Option<SelectConfig>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] search_placeholder: Option<String>,
    #[prop(optional)] size: Option<SelectSize>,
    #[prop(optional)] state: Option<SelectVisualState>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] searchable: Option<bool>,
    #[prop(optional)] clearable: Option<bool>,
    #[prop(optional)] required: Option<bool>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] helper_text: MaybeProp<String>,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional, into)] success: MaybeProp<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let mut base = config.unwrap_or_default();
    if let Some(placeholder) = placeholder {
        base.placeholder = placeholder;
    }
    if let Some(search_placeholder) = search_placeholder {
        base.search_placeholder = search_placeholder;
    }
    base.size = size.unwrap_or(base.size);
    base.state = state.unwrap_or(base.state);
    base.searchable = searchable.unwrap_or(base.searchable);
    base.clearable = clearable.unwrap_or(base.clearable);
    base.required = required.unwrap_or(base.required);
    let base = store_value(base);
    let options = Signal::derive(move || options.get());
    let config = Signal::derive(move || {
        let mut config = base.get_value();
        config.disabled = config.disabled || disabled.get();
        config
    });
    let searchable = base.with_value(|config| config.searchable);

    let ids = FieldIds::resolve(id, "select");
    let control_id = ids.control_id().to_string();
    let message_id = ids.message_id();
    let described_by = message_id.clone();
    let listbox_id = format!("{control_id}-listbox");
    let trigger_controls = listbox_id.clone();

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

    let select_state = create_rw_signal(SelectState::new(value.get_untracked()));
    let root_ref = create_node_ref::<html::Div>();
    let search_ref = create_node_ref::<html::Input>();
    let mounted = dom::owner_alive();

    let dispatch = Callback::new(move |action: SelectAction| {
        let mut next = select_state.get_untracked();
        let result = options.with_untracked(|options| {
            config.with_untracked(|config| reduce_select(&mut next, config, options, action))
        });
        let effects = match result {
            Ok(effects) => effects,
            Err(err) => {
                logging::warn!("select reducer error: {err}");
                return;
            }
        };
        if select_state.with_untracked(|current| *current != next) {
            select_state.set(next);
        }
        for effect in effects {
            match effect {
                SelectEffect::Changed(value) => {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(value);
                    }
                }
                SelectEffect::FocusSearch => {
                    let mounted = Rc::clone(&mounted);
                    request_animation_frame(move || {
                        if !mounted.get() {
                            return;
                        }
                        if let Some(input) = search_ref.get_untracked() {
                            dom::focus_html_element(&input);
                        }
                    });
                }
            }
        }
    });

    create_effect(move |_| {
        let value = value.get();
        dispatch.call(SelectAction::SyncValue(value));
    });

    let outside_listener = window_event_listener(ev::mousedown, move |ev| {
        if !select_state.with_untracked(|state| state.is_open) {
            return;
        }
        let Some(root) = root_ref.get_untracked() else {
            return;
        };
        if !dom::event_within(&ev, &root) {
            dispatch.call(SelectAction::PointerDownOutside);
        }
    });
    on_cleanup(move || outside_listener.remove());

    let is_open = Signal::derive(move || select_state.with(|state| state.is_open));
    let style = move || SelectStyle {
        size: config.with(|config| config.size),
        state: design_headless::effective_select_state(
            config.with(|config| config.state),
            error.get().as_deref(),
        ),
        disabled: config.with(|config| config.disabled),
        open: is_open.get(),
    };
    let has_selection = Signal::derive(move || {
        options.with(|options| select_state.with(|state| state.selected_option(options).is_some()))
    });
    let display_text = move || {
        options.with(|options| {
            config.with(|config| select_state.with(|state| state.display_text(options, config)))
        })
    };
    let shows_clear = move || config.with(|config| select_state.with(|state| state.shows_clear(config)));
    let invalid = Signal::derive(move || {
        message.with(|message| {
            message
                .as_ref()
                .is_some_and(|message| message.kind == MessageKind::Error)
        })
    });

    let label_view = label.map(|text| {
        view! {
            <FieldLabel
                for_id=control_id.clone()
                text
                class="ds-select"
                show_required=base.with_value(|config| config.required)
            />
        }
    });
    let listbox_id = store_value(listbox_id);
    let search_view = move || {
        searchable.then(|| {
            let search_placeholder = base.with_value(|config| config.search_placeholder.clone());
            view! {
                <div class="ds-select__search">
                    <input
                        type="text"
                        class="ds-select__search-input"
                        node_ref=search_ref
                        placeholder=search_placeholder.clone()
                        aria-label=search_placeholder
                        aria-controls=listbox_id.get_value()
                        prop:value=move || select_state.with(|state| state.search_query.clone())
                        on:input=move |ev| {
                            dispatch.call(SelectAction::SetSearchQuery(event_target_value(&ev)));
                        }
                        on:click=|ev: MouseEvent| ev.stop_propagation()
                    />
                </div>
            }
        })
    };
    let hidden_input = name.map(|name| {
        view! {
            <input
                type="hidden"
                name=name
                prop:value=move || select_state.with(|state| state.form_value().to_string())
            />
        }
    });

    let option_rows = move || {
        options.with(|options| {
            config.with(|config| {
                select_state.with(|state| {
                    let visible = state.visible_options(config, options);
                    if visible.is_empty() {
                        return view! {
                            <li class="ds-select__no-results" role="presentation">
                                {NO_RESULTS_TEXT}
                            </li>
                        }
                            .into_view();
                    }
                    visible
                        .into_iter()
                        .map(|option| {
                            let selected = state.is_selected(&option.value);
                            let option_disabled = option.disabled;
                            let value = option.value.clone();
                            view! {
                                <li
                                    class=SelectStyle::option_class(selected, option_disabled)
                                    role="option"
                                    aria-selected=bool_token(selected)
                                    aria-disabled=bool_token(option_disabled)
                                    data-value=option.value.clone()
                                    on:click=move |_| {
                                        dispatch.call(SelectAction::ChooseOption {
                                            value: value.clone(),
                                        });
                                    }
                                >
                                    {option.label.clone()}
                                </li>
                            }
                        })
                        .collect_view()
                })
            })
        })
    };

    view! {
        <div
            class=SelectStyle::container_class(class.as_deref())
            data-ui-primitive="true"
            data-ui-kind="select"
        >
            {label_view}
            <div class=move || style().class_name() node_ref=root_ref>
                <button
                    type="button"
                    class="ds-select__trigger"
                    id=control_id
                    aria-haspopup="listbox"
                    aria-expanded=move || bool_token(is_open.get())
                    aria-controls=trigger_controls
                    aria-label=aria_label
                    aria-invalid=move || invalid.get().then_some("true")
                    aria-describedby=move || message.with(Option::is_some).then(|| described_by.clone())
                    disabled=move || config.with(|config| config.disabled)
                    on:click=move |_| dispatch.call(SelectAction::ToggleTrigger)
                >
                    <span class=move || SelectStyle::value_class(has_selection.get())>
                        {display_text}
                    </span>
                    <span class=move || style().arrow_class() aria-hidden="true">
                        "▾"
                    </span>
                </button>
                <Show when=shows_clear>
                    <button
                        type="button"
                        class="ds-select__clear"
                        aria-label="Clear selection"
                        on:click=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            dispatch.call(SelectAction::Clear);
                        }
                    >
                        "✕"
                    </button>
                </Show>
                <Show when=move || is_open.get()>
                    <div class="ds-select__dropdown">
                        {search_view}
                        <ul id=listbox_id.get_value() class="ds-select__options" role="listbox">
                            {option_rows}
                        </ul>
                    </div>
                </Show>
            </div>
            {hidden_input}
            <FieldMessageText id=message_id message class_for=SelectStyle::message_class/>
        </div>
    }
}
