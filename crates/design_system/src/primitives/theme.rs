use design_headless::{Theme, THEME};

use super::*;

#[component]
/// Emits the theme tokens as `--ds-*` custom properties in a `<style>` element.
///
/// Mount once near the application root; widget stylesheets resolve colors, spacing, and
/// typography through these properties.
pub fn ThemeStyle(
    #[prop(default = THEME)] theme: Theme,
    #[prop(default = ":root")] selector: &'static str,
) -> impl IntoView {
    view! { <style data-ui-primitive="true" data-ui-kind="theme">{theme.stylesheet(selector)}</style> }
}
