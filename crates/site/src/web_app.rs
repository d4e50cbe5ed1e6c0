use design_system::prelude::*;
use design_system::{theme_json, ClassNames, DesignToken};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

const PANTRY_SELECT_CONFIG: &str =
    r#"{"placeholder":"Pick a fruit","search_placeholder":"Filter fruit...","searchable":true,"clearable":true,"size":"lg"}"#;

fn fruit_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("apple", "Apple"),
        SelectOption::new("banana", "Banana").with_disabled(true),
        SelectOption::new("orange", "Orange"),
        SelectOption::new("pear", "Pear"),
        SelectOption::new("plum", "Plum"),
    ]
}

fn pantry_select_config() -> SelectConfig {
    serde_json::from_str(PANTRY_SELECT_CONFIG).unwrap_or_else(|err| {
        logging::warn!("showcase select config rejected: {err}");
        SelectConfig::default()
    })
}

#[component]
/// Root component wiring the theme stylesheet and the showcase routes.
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Design System" />
        <Meta name="description" content="Widget and token showcase for the design system." />
        <ThemeStyle />

        <Router>
            <main class="site-root">
                <nav class="site-nav">
                    <A href="">"Widgets"</A>
                    <A href="/tokens">"Tokens"</A>
                </nav>
                <Routes>
                    <Route path="" view=ShowcasePage />
                    <Route path="/tokens" view=TokensPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
/// Every widget family rendered in its variants and interactive states.
pub fn ShowcasePage() -> impl IntoView {
    let saving = create_rw_signal(false);
    let card_clicks = create_rw_signal(0_u32);
    let email = create_rw_signal(String::new());
    let fruit = create_rw_signal(String::new());
    let modal_open = create_rw_signal(false);

    let email_error = Signal::derive(move || {
        email.with(|email| {
            (!email.is_empty() && !email.contains('@'))
                .then(|| "Enter a valid email address".to_string())
        })
    });
    let email_success = Signal::derive(move || {
        email.with(|email| email.contains('@').then(|| "Looks good".to_string()))
    });

    view! {
        <section class="showcase-section">
            <h2>"Buttons"</h2>
            <div class="showcase-row">
                {ButtonVariant::ALL
                    .iter()
                    .map(|variant| view! { <Button variant=*variant>{variant.token()}</Button> })
                    .collect_view()}
            </div>
            <div class="showcase-row">
                {ButtonSize::ALL
                    .iter()
                    .map(|size| view! { <Button size=*size>{size.token()}</Button> })
                    .collect_view()}
                <Button disabled=true>"Disabled"</Button>
                <Button
                    loading=saving
                    on_click=Callback::new(move |_| saving.set(true))
                >
                    {move || if saving.get() { "Saving" } else { "Save" }}
                </Button>
                <Button variant=ButtonVariant::Outline on_click=Callback::new(move |_| saving.set(false))>
                    "Reset"
                </Button>
            </div>
        </section>

        <section class="showcase-section">
            <h2>"Badges"</h2>
            <div class="showcase-row">
                {BadgeVariant::ALL
                    .iter()
                    .map(|variant| view! { <Badge variant=*variant>{variant.token()}</Badge> })
                    .collect_view()}
            </div>
            <div class="showcase-row">
                {BadgeAnimation::ALL
                    .iter()
                    .map(|animation| {
                        view! {
                            <Badge variant=BadgeVariant::Success dot=true animation=*animation>
                                {animation.token()}
                            </Badge>
                        }
                    })
                    .collect_view()}
                <Badge variant=BadgeVariant::Danger dot=true aria_label="Offline" />
            </div>
        </section>

        <section class="showcase-section">
            <h2>"Cards"</h2>
            <div class="showcase-grid">
                <Card header=|| view! { <strong>"Default"</strong> } footer=|| "Footer slot">
                    "Header and footer slots share the padding token."
                </Card>
                <Card variant=CardVariant::Outlined padding=CardPadding::Lg hoverable=true>
                    "Outlined, hoverable, large padding."
                </Card>
                <Card
                    variant=CardVariant::Elevated
                    clickable=true
                    on_click=Callback::new(move |_| card_clicks.update(|clicks| *clicks += 1))
                >
                    {move || format!("Clickable card, activated {} times.", card_clicks.get())}
                </Card>
            </div>
        </section>

        <section class="showcase-section">
            <h2>"Inputs"</h2>
            <Input
                label="Email"
                input_type=InputType::Email
                placeholder="you@example.com"
                required=true
                helper_text="We never share your address."
                error=email_error
                success=email_success
                value=email
                on_input=Callback::new(move |ev| email.set(event_target_value(&ev)))
            />
            <Input label="Search" input_type=InputType::Search is_loading=true />
            <Input label="Disabled" disabled=true value="Read only".to_string() />
        </section>

        <section class="showcase-section">
            <h2>"Select"</h2>
            <Select
                label="Fruit"
                name="fruit"
                options=fruit_options()
                config=pantry_select_config()
                value=Signal::derive(move || Some(fruit.get()))
                on_change=Callback::new(move |value: String| fruit.set(value))
                helper_text="Banana is out of stock."
            />
            <Select
                label="Required fruit"
                options=fruit_options()
                required=true
                error="Choose a fruit to continue"
            />
            <p>{move || format!("Selected value: {:?}", fruit.get())}</p>
        </section>

        <section class="showcase-section">
            <h2>"Modal"</h2>
            <Button on_click=Callback::new(move |_| modal_open.set(true))>"Delete project"</Button>
            <Modal
                is_open=modal_open
                on_close=Callback::new(move |_| modal_open.set(false))
                title="Delete project"
                size=ModalSize::Sm
                footer=move || {
                    view! {
                        <Button
                            variant=ButtonVariant::Ghost
                            on_click=Callback::new(move |_| modal_open.set(false))
                        >
                            "Cancel"
                        </Button>
                        <Button
                            variant=ButtonVariant::Danger
                            on_click=Callback::new(move |_| modal_open.set(false))
                        >
                            "Delete"
                        </Button>
                    }
                }
            >
                <p>"This permanently removes the project and its history."</p>
                <Input label="Type the project name to confirm" />
            </Modal>
        </section>
    }
}

#[component]
/// Color swatches and the JSON export of the theme token set.
pub fn TokensPage() -> impl IntoView {
    let json = match theme_json() {
        Ok(json) => json,
        Err(err) => {
            logging::warn!("theme export failed: {err}");
            String::new()
        }
    };
    let swatches = |scale: &'static str, steps: Vec<(u16, &'static str)>| {
        steps
            .into_iter()
            .map(|(step, color)| {
                let class = ClassNames::with_base("token-swatch")
                    .push_if(step >= 500, "token-swatch--dark")
                    .build();
                view! {
                    <div class=class style=format!("background: {color}")>
                        {format!("{scale} {step}")}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section class="showcase-section">
            <h2>"Primary"</h2>
            <div class="token-row">{swatches("primary", THEME.colors.primary.steps().collect())}</div>
            <h2>"Gray"</h2>
            <div class="token-row">{swatches("gray", THEME.colors.gray.steps().collect())}</div>
            <h2>"Theme JSON"</h2>
            <pre class="token-json">{json}</pre>
        </section>
    }
}
