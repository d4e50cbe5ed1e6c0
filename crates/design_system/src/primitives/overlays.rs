use std::cell::RefCell;
use std::rc::Rc;

use design_headless::dialog_label;

use crate::dom::DomEnvironment;

use super::*;

#[derive(Clone)]
struct DialogContent {
    title: Option<String>,
    label: Option<String>,
    described_by: Option<String>,
    class: Option<String>,
    footer: Option<ViewFn>,
    children: ChildrenFn,
}

#[component]
/// Dialog overlay rendered into the document body while `is_open` is true.
///
/// While open, focus moves into the dialog, Tab cycles within it, and page scrolling is locked.
/// Closing or unmounting restores the previous focus and scroll style. Escape, backdrop clicks,
/// and the close button request `on_close`; the caller owns `is_open`. The size and dismissal
/// props override `config` and are re-read whenever they change.
pub fn Modal(
    #[prop(into)] is_open: MaybeSignal<bool>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    #[prop(optional)] config: Option<ModalConfig>,
    #[prop(optional, into)] size: MaybeProp<ModalSize>,
    #[prop(optional, into)] close_on_backdrop_click: MaybeProp<bool>,
    #[prop(optional, into)] close_on_esc: MaybeProp<bool>,
    #[prop(optional, into)] show_close_button: MaybeProp<bool>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_describedby: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] footer: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let config = live_config(
        config.unwrap_or_default(),
        size,
        close_on_backdrop_click,
        close_on_esc,
        show_close_button,
    );

    let content = store_value(DialogContent {
        title,
        label: aria_label,
        described_by: aria_describedby,
        class,
        footer,
        children,
    });

    view! {
        <Show when=move || is_open.get()>
            <Portal>
                <ModalDialog config on_close content=content.get_value()/>
            </Portal>
        </Show>
    }
}

/// Layers the per-prop overrides on `base`, tracking each override signal.
fn live_config(
    base: ModalConfig,
    size: MaybeProp<ModalSize>,
    close_on_backdrop_click: MaybeProp<bool>,
    close_on_esc: MaybeProp<bool>,
    show_close_button: MaybeProp<bool>,
) -> Signal<ModalConfig> {
    Signal::derive(move || ModalConfig {
        size: size.get().unwrap_or(base.size),
        close_on_backdrop_click: close_on_backdrop_click
            .get()
            .unwrap_or(base.close_on_backdrop_click),
        close_on_esc: close_on_esc.get().unwrap_or(base.close_on_esc),
        show_close_button: show_close_button.get().unwrap_or(base.show_close_button),
    })
}

/// Session slot owned by the current dialog scope, released when that scope is cleaned up.
fn scoped_session_slot<E>() -> Rc<RefCell<ModalSlot<E>>>
where
    E: ModalEnvironment + 'static,
{
    let slot: Rc<RefCell<ModalSlot<E>>> = Rc::default();
    on_cleanup({
        let slot = Rc::clone(&slot);
        move || slot.borrow_mut().release()
    });
    slot
}

#[component]
fn ModalDialog(
    config: Signal<ModalConfig>,
    on_close: Option<Callback<()>>,
    content: DialogContent,
) -> impl IntoView {
    let root_ref = create_node_ref::<html::Div>();
    let session = scoped_session_slot::<DomEnvironment>();

    let request_close = move |reason: Option<DismissReason>| {
        if reason.is_none() {
            return;
        }
        if let Some(on_close) = on_close.as_ref() {
            on_close.call(());
        }
    };

    root_ref.on_load(move |root| {
        let root: &web_sys::HtmlElement = &root;
        let root = root.clone();
        request_animation_frame(move || {
            if !session.borrow().is_pending() {
                return;
            }
            match DomEnvironment::new() {
                Ok(env) => {
                    session.borrow_mut().open_deferred(env, &root);
                }
                Err(err) => logging::warn!("modal focus management unavailable: {err}"),
            }
        });
    });

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        let key = ev.key();
        request_close(dismissal(
            &config.get_untracked(),
            ModalEvent::KeyDown { key: &key },
        ));
    });
    on_cleanup(move || escape_listener.remove());

    let DialogContent {
        title,
        label,
        described_by,
        class,
        footer,
        children,
    } = content;
    let aria_label = dialog_label(label.as_deref(), title.as_deref());
    let header = move || {
        let show_close_button = config.with(|config| config.show_close_button);
        (title.is_some() || show_close_button).then(|| {
            view! {
                <div class="ds-modal__header">
                    {title.clone().map(|title| view! { <h2 class="ds-modal__title">{title}</h2> })}
                    {show_close_button
                        .then(|| {
                            view! {
                                <button
                                    type="button"
                                    class="ds-modal__close"
                                    aria-label="Close modal"
                                    on:click=move |_| {
                                        request_close(dismissal(
                                            &config.get_untracked(),
                                            ModalEvent::CloseButton,
                                        ))
                                    }
                                >
                                    <svg
                                        width="20"
                                        height="20"
                                        viewBox="0 0 20 20"
                                        fill="none"
                                        aria-hidden="true"
                                    >
                                        <path
                                            d="M15 5L5 15M5 5L15 15"
                                            stroke="currentColor"
                                            stroke-width="2"
                                            stroke-linecap="round"
                                            stroke-linejoin="round"
                                        ></path>
                                    </svg>
                                </button>
                            }
                        })}
                </div>
            }
        })
    };
    let class_name = move || {
        ModalStyle {
            size: config.with(|config| config.size),
        }
        .class_name(class.as_deref())
    };

    view! {
        <div
            class=ModalStyle::BACKDROP_CLASS
            role="presentation"
            data-ui-primitive="true"
            data-ui-kind="modal-backdrop"
            on:click=move |ev: MouseEvent| {
                let event = ModalEvent::BackdropClick {
                    target_is_backdrop: dom::targets_current(&ev),
                };
                request_close(dismissal(&config.get_untracked(), event));
            }
        >
            <div
                class=class_name
                node_ref=root_ref
                role="dialog"
                aria-modal="true"
                aria-label=aria_label
                aria-describedby=described_by
                tabindex="-1"
                data-ui-primitive="true"
                data-ui-kind="modal"
                data-ui-size=move || config.with(|config| config.size.token())
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() != "Tab" {
                        return;
                    }
                    let Some(root) = root_ref.get_untracked() else {
                        return;
                    };
                    let focusables = match dom::focusable_descendants(&root) {
                        Ok(focusables) => focusables,
                        Err(err) => {
                            logging::warn!("modal focus trap skipped: {err}");
                            return;
                        }
                    };
                    let active = dom::active_html_element();
                    if let Some(target) = trap_tab(&focusables, active.as_ref(), ev.shift_key()) {
                        ev.prevent_default();
                        dom::focus_html_element(target);
                    }
                }
            >
                {header}
                <div class="ds-modal__body">{children()}</div>
                {footer.map(|footer| view! { <div class="ds-modal__footer">{footer.run()}</div> })}
            </div>
        </div>
    }
}
