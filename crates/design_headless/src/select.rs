//! Select dropdown state, actions, side-effect intents, and transition logic.
//!
//! The widget layer keeps a [`SelectState`] signal and routes every pointer, keyboard, and prop
//! change through [`reduce_select`]. The reducer never calls back into the caller directly; it
//! returns [`SelectEffect`] values that the widget executes (invoking `on_change`, scheduling the
//! search-field focus).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tokens::{lenient, SelectSize, SelectVisualState};

/// Placeholder row rendered when a search filters out every option.
pub const NO_RESULTS_TEXT: &str = "No results found";

/// Trigger text used when nothing is selected and no placeholder was configured.
pub const DEFAULT_PLACEHOLDER: &str = "Select an option";

/// Search field placeholder used when none was configured.
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One selectable entry. Values are assumed unique; lookups use the first match.
pub struct SelectOption {
    /// Value reported through `on_change` and submitted with forms.
    pub value: String,
    /// Display label, also the text searched by the filter.
    pub label: String,
    /// Disabled options render but cannot be chosen.
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    /// Creates an enabled option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Returns the option with its disabled flag set.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Static configuration for a select instance.
pub struct SelectConfig {
    /// Trigger text shown without a selection.
    pub placeholder: String,
    /// Search field placeholder.
    pub search_placeholder: String,
    /// Size token.
    #[serde(deserialize_with = "lenient")]
    pub size: SelectSize,
    /// Configured visual state. An error message overrides it.
    #[serde(deserialize_with = "lenient")]
    pub state: SelectVisualState,
    /// Blocks opening, choosing, and clearing.
    pub disabled: bool,
    /// Shows a search field that filters options by label.
    pub searchable: bool,
    /// Shows a control that clears the selection.
    pub clearable: bool,
    /// Marks the label as required.
    pub required: bool,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
            size: SelectSize::Md,
            state: SelectVisualState::Default,
            disabled: false,
            searchable: false,
            clearable: false,
            required: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Transient interaction state owned by one select instance.
pub struct SelectState {
    /// Whether the dropdown is rendered.
    pub is_open: bool,
    /// Current selection. An empty string is normalized to `None`.
    pub selected_value: Option<String>,
    /// Current search text.
    pub search_query: String,
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

impl SelectState {
    /// Creates closed state seeded from the initial `value` prop.
    pub fn new(value: Option<String>) -> Self {
        Self {
            selected_value: normalize(value),
            ..Self::default()
        }
    }

    fn close(&mut self) {
        self.is_open = false;
        self.search_query.clear();
    }

    /// Returns whether `value` is the current selection.
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected_value.as_deref() == Some(value)
    }

    /// First option whose value matches the selection.
    pub fn selected_option<'a>(&self, options: &'a [SelectOption]) -> Option<&'a SelectOption> {
        let selected = self.selected_value.as_deref()?;
        options.iter().find(|option| option.value == selected)
    }

    /// Trigger text: the selected option's label, otherwise the placeholder.
    pub fn display_text(&self, options: &[SelectOption], config: &SelectConfig) -> String {
        self.selected_option(options)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| config.placeholder.clone())
    }

    /// Options currently listed in the dropdown.
    ///
    /// With search enabled and a non-empty query, only options whose label contains the query
    /// (case-insensitive substring) are kept.
    pub fn visible_options<'a>(
        &self,
        config: &SelectConfig,
        options: &'a [SelectOption],
    ) -> Vec<&'a SelectOption> {
        if !config.searchable || self.search_query.is_empty() {
            return options.iter().collect();
        }
        let needle = self.search_query.to_lowercase();
        options
            .iter()
            .filter(|option| option.label.to_lowercase().contains(&needle))
            .collect()
    }

    /// Whether the clear control is rendered.
    pub fn shows_clear(&self, config: &SelectConfig) -> bool {
        config.clearable && self.selected_value.is_some() && !config.disabled
    }

    /// Value mirrored into the hidden form input.
    pub fn form_value(&self) -> &str {
        self.selected_value.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_select`].
pub enum SelectAction {
    /// The trigger button was activated.
    ToggleTrigger,
    /// A pointer went down outside the select root.
    PointerDownOutside,
    /// An option row was activated.
    ChooseOption {
        /// Value of the activated option.
        value: String,
    },
    /// The clear control was activated.
    Clear,
    /// The search field text changed.
    SetSearchQuery(String),
    /// The controlled `value` prop changed.
    SyncValue(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_select`] for the widget to execute.
pub enum SelectEffect {
    /// Invoke `on_change` with the new value (`""` after a clear).
    Changed(String),
    /// Move focus into the search field once the dropdown has rendered.
    FocusSearch,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference data the select does not have.
pub enum SelectError {
    /// The chosen value is not present in the option list.
    #[error("select option `{value}` not found")]
    UnknownOption {
        /// Value that was requested.
        value: String,
    },
}

/// Applies a [`SelectAction`] to `state` and collects the resulting side effects.
///
/// Disabled selects ignore trigger, choose, and clear actions. Choosing a disabled option is a
/// no-op that leaves the dropdown open.
///
/// # Errors
///
/// Returns [`SelectError::UnknownOption`] when [`SelectAction::ChooseOption`] names a value that
/// is not in `options`.
pub fn reduce_select(
    state: &mut SelectState,
    config: &SelectConfig,
    options: &[SelectOption],
    action: SelectAction,
) -> Result<Vec<SelectEffect>, SelectError> {
    let mut effects = Vec::new();
    match action {
        SelectAction::ToggleTrigger => {
            if config.disabled {
                return Ok(effects);
            }
            if state.is_open {
                state.close();
            } else {
                state.is_open = true;
                if config.searchable {
                    effects.push(SelectEffect::FocusSearch);
                }
            }
        }
        SelectAction::PointerDownOutside => {
            if state.is_open {
                state.close();
            }
        }
        SelectAction::ChooseOption { value } => {
            if config.disabled {
                return Ok(effects);
            }
            let option = options
                .iter()
                .find(|option| option.value == value)
                .ok_or_else(|| SelectError::UnknownOption {
                    value: value.clone(),
                })?;
            if option.disabled {
                return Ok(effects);
            }
            state.selected_value = normalize(Some(value.clone()));
            state.close();
            effects.push(SelectEffect::Changed(value));
        }
        SelectAction::Clear => {
            if config.disabled {
                return Ok(effects);
            }
            state.selected_value = None;
            effects.push(SelectEffect::Changed(String::new()));
        }
        SelectAction::SetSearchQuery(query) => {
            state.search_query = query;
        }
        SelectAction::SyncValue(value) => {
            state.selected_value = normalize(value);
        }
    }
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fruit() -> Vec<SelectOption> {
        vec![
            SelectOption::new("apple", "Apple"),
            SelectOption::new("banana", "Banana").with_disabled(true),
            SelectOption::new("orange", "Orange"),
        ]
    }

    fn searchable() -> SelectConfig {
        SelectConfig {
            searchable: true,
            ..SelectConfig::default()
        }
    }

    fn apply(
        state: &mut SelectState,
        config: &SelectConfig,
        action: SelectAction,
    ) -> Vec<SelectEffect> {
        reduce_select(state, config, &fruit(), action).expect("reduce")
    }

    fn labels<'a>(options: &[&'a SelectOption]) -> Vec<&'a str> {
        options.iter().map(|option| option.label.as_str()).collect()
    }

    #[test]
    fn trigger_toggles_open_state() {
        let config = SelectConfig::default();
        let mut state = SelectState::default();

        assert_eq!(apply(&mut state, &config, SelectAction::ToggleTrigger), vec![]);
        assert!(state.is_open);
        apply(&mut state, &config, SelectAction::ToggleTrigger);
        assert!(!state.is_open);
    }

    #[test]
    fn disabled_select_never_opens() {
        let config = SelectConfig {
            disabled: true,
            ..SelectConfig::default()
        };
        let mut state = SelectState::default();
        apply(&mut state, &config, SelectAction::ToggleTrigger);
        assert!(!state.is_open);
    }

    #[test]
    fn opening_searchable_select_requests_search_focus() {
        let config = searchable();
        let mut state = SelectState::default();
        assert_eq!(
            apply(&mut state, &config, SelectAction::ToggleTrigger),
            vec![SelectEffect::FocusSearch]
        );
        assert_eq!(apply(&mut state, &config, SelectAction::ToggleTrigger), vec![]);
    }

    #[test]
    fn choosing_enabled_option_selects_notifies_and_closes() {
        let config = searchable();
        let mut state = SelectState::default();
        apply(&mut state, &config, SelectAction::ToggleTrigger);
        apply(&mut state, &config, SelectAction::SetSearchQuery("or".to_string()));

        let effects = apply(
            &mut state,
            &config,
            SelectAction::ChooseOption {
                value: "orange".to_string(),
            },
        );

        assert_eq!(effects, vec![SelectEffect::Changed("orange".to_string())]);
        assert!(!state.is_open);
        assert_eq!(state.selected_value.as_deref(), Some("orange"));
        assert_eq!(state.search_query, "");
        assert_eq!(state.display_text(&fruit(), &config), "Orange");
    }

    #[test]
    fn choosing_disabled_option_is_a_no_op() {
        let config = SelectConfig::default();
        let mut state = SelectState::default();
        apply(&mut state, &config, SelectAction::ToggleTrigger);

        let effects = apply(
            &mut state,
            &config,
            SelectAction::ChooseOption {
                value: "banana".to_string(),
            },
        );

        assert_eq!(effects, vec![]);
        assert!(state.is_open);
        assert_eq!(state.selected_value, None);
    }

    #[test]
    fn choosing_unknown_option_is_an_error() {
        let mut state = SelectState::default();
        let err = reduce_select(
            &mut state,
            &SelectConfig::default(),
            &fruit(),
            SelectAction::ChooseOption {
                value: "kiwi".to_string(),
            },
        )
        .expect_err("unknown option");
        assert_eq!(
            err,
            SelectError::UnknownOption {
                value: "kiwi".to_string()
            }
        );
        assert_eq!(err.to_string(), "select option `kiwi` not found");
    }

    #[test]
    fn outside_pointer_down_closes_and_clears_query() {
        let config = searchable();
        let mut state = SelectState::default();
        apply(&mut state, &config, SelectAction::ToggleTrigger);
        apply(&mut state, &config, SelectAction::SetSearchQuery("ap".to_string()));

        apply(&mut state, &config, SelectAction::PointerDownOutside);

        assert!(!state.is_open);
        assert_eq!(state.search_query, "");
    }

    #[test]
    fn search_filters_labels_case_insensitively() {
        let config = searchable();
        let options = fruit();
        let mut state = SelectState::default();

        state.search_query = "AN".to_string();
        assert_eq!(labels(&state.visible_options(&config, &options)), vec!["Banana", "Orange"]);

        state.search_query = "pple".to_string();
        assert_eq!(labels(&state.visible_options(&config, &options)), vec!["Apple"]);

        state.search_query = "zzz".to_string();
        assert!(state.visible_options(&config, &options).is_empty());

        state.search_query = String::new();
        assert_eq!(state.visible_options(&config, &options).len(), 3);
    }

    #[test]
    fn query_is_ignored_when_search_is_disabled() {
        let options = fruit();
        let state = SelectState {
            search_query: "zzz".to_string(),
            ..SelectState::default()
        };
        assert_eq!(state.visible_options(&SelectConfig::default(), &options).len(), 3);
    }

    #[test]
    fn clear_resets_selection_without_toggling() {
        let config = SelectConfig {
            clearable: true,
            ..SelectConfig::default()
        };
        let mut state = SelectState::new(Some("apple".to_string()));
        assert!(state.shows_clear(&config));

        let effects = apply(&mut state, &config, SelectAction::Clear);

        assert_eq!(effects, vec![SelectEffect::Changed(String::new())]);
        assert!(!state.is_open);
        assert_eq!(state.display_text(&fruit(), &config), DEFAULT_PLACEHOLDER);
        assert!(!state.shows_clear(&config));
        assert_eq!(state.form_value(), "");
    }

    #[test]
    fn clear_control_hidden_when_disabled() {
        let config = SelectConfig {
            clearable: true,
            disabled: true,
            ..SelectConfig::default()
        };
        let mut state = SelectState::new(Some("apple".to_string()));
        assert!(!state.shows_clear(&config));
        assert_eq!(apply(&mut state, &config, SelectAction::Clear), vec![]);
        assert_eq!(state.selected_value.as_deref(), Some("apple"));
    }

    #[test]
    fn controlled_value_overwrites_selection_on_every_sync() {
        let config = SelectConfig::default();
        let mut state = SelectState::new(Some("apple".to_string()));
        apply(&mut state, &config, SelectAction::SyncValue(Some("orange".to_string())));
        assert_eq!(state.form_value(), "orange");
        apply(&mut state, &config, SelectAction::SyncValue(Some(String::new())));
        assert_eq!(state.selected_value, None);
        apply(&mut state, &config, SelectAction::SyncValue(Some("apple".to_string())));
        assert!(state.is_selected("apple"));
    }

    #[test]
    fn config_defaults_fill_missing_json_fields() {
        let config: SelectConfig =
            serde_json::from_str(r#"{"searchable":true,"size":"xl"}"#).expect("config");
        assert!(config.searchable);
        assert_eq!(config.size, SelectSize::Md);
        assert_eq!(config.placeholder, DEFAULT_PLACEHOLDER);
        assert_eq!(config.search_placeholder, DEFAULT_SEARCH_PLACEHOLDER);
    }
}
