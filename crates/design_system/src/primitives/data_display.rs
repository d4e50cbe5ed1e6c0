use super::*;

#[component]
/// Inline status label with an optional animated dot indicator.
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional)] size: BadgeSize,
    #[prop(optional)] dot: bool,
    #[prop(optional)] animation: BadgeAnimation,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let style = BadgeStyle {
        variant,
        size,
        dot,
        animation,
    };

    view! {
        <span
            class=style.class_name(class.as_deref())
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
        >
            {dot.then(|| view! { <span class=style.dot_class() aria-hidden="true"></span> })}
            {children.map(|children| children())}
        </span>
    }
}

#[component]
/// Content surface with optional header/footer slots.
///
/// A clickable card behaves as a button: it is focusable, exposes `role="button"`, and activates
/// on click, Enter, or Space.
pub fn Card(
    #[prop(optional)] variant: CardVariant,
    #[prop(optional)] padding: CardPadding,
    #[prop(optional)] clickable: bool,
    #[prop(optional)] hoverable: bool,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] header: Option<ViewFn>,
    #[prop(optional, into)] footer: Option<ViewFn>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    let style = CardStyle {
        variant,
        padding,
        clickable,
        hoverable,
        full_width,
    };
    let has_sections = header.is_some() || footer.is_some();
    let activates = clickable && on_click.is_some();

    view! {
        <div
            class=style.class_name(class.as_deref())
            role=clickable.then_some("button")
            tabindex=clickable.then_some(0)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-variant=variant.token()
            data-ui-padding=padding.token()
            on:click=move |ev: MouseEvent| {
                if !clickable {
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
                if !activates {
                    return;
                }
                let press = key_press(&ev.key(), false);
                if press.prevent_default {
                    ev.prevent_default();
                }
                if press.activate {
                    dom::click_current_target(&ev);
                }
            }
        >
            {header.map(|header| view! { <div class=style.header_class()>{header.run()}</div> })}
            <div class=style.body_class(has_sections)>{children()}</div>
            {footer.map(|footer| view! { <div class=style.footer_class()>{footer.run()}</div> })}
        </div>
    }
}
