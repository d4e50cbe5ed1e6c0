use std::cell::RefCell;
use std::rc::Rc;

use design_headless::{
    dismissal, interaction_blocked, key_press, reduce_select, resolve_message, trap_tab,
    DismissReason, MessageKind, ModalConfig, ModalEnvironment, ModalEvent, ModalSession,
    ModalSlot, SelectAction, SelectConfig, SelectEffect, SelectError, SelectOption, SelectState,
    NO_RESULTS_TEXT,
};

fn fruit() -> Vec<SelectOption> {
    vec![
        SelectOption::new("apple", "Apple"),
        SelectOption::new("banana", "Banana").with_disabled(true),
        SelectOption::new("orange", "Orange"),
    ]
}

#[derive(Default)]
struct Page {
    focused: Option<u32>,
    overflow: String,
}

#[derive(Clone, Default)]
struct PageEnv(Rc<RefCell<Page>>);

impl ModalEnvironment for PageEnv {
    type Element = u32;

    fn active_element(&self) -> Option<u32> {
        self.0.borrow().focused
    }

    fn focus(&self, element: &u32) {
        self.0.borrow_mut().focused = Some(*element);
    }

    fn is_attached(&self, _element: &u32) -> bool {
        true
    }

    fn scroll_overflow(&self) -> String {
        self.0.borrow().overflow.clone()
    }

    fn set_scroll_overflow(&self, value: &str) {
        self.0.borrow_mut().overflow = value.to_string();
    }
}

#[test]
fn choosing_disabled_option_keeps_dropdown_open_without_change() {
    let options = fruit();
    let config = SelectConfig::default();
    let mut state = SelectState::default();

    reduce_select(&mut state, &config, &options, SelectAction::ToggleTrigger).expect("open");
    let effects = reduce_select(
        &mut state,
        &config,
        &options,
        SelectAction::ChooseOption {
            value: "banana".to_string(),
        },
    )
    .expect("choose");

    assert!(effects.is_empty());
    assert!(state.is_open);
    assert_eq!(state.selected_value, None);
}

#[test]
fn clearing_reports_empty_value_and_reverts_to_placeholder() {
    let options = fruit();
    let config = SelectConfig {
        clearable: true,
        ..SelectConfig::default()
    };
    let mut state = SelectState::new(Some("banana".to_string()));
    assert_eq!(state.display_text(&options, &config), "Banana");
    assert!(state.shows_clear(&config));

    let effects =
        reduce_select(&mut state, &config, &options, SelectAction::Clear).expect("clear");

    assert_eq!(effects, vec![SelectEffect::Changed(String::new())]);
    assert_eq!(state.display_text(&options, &config), "Select an option");
    assert!(!state.is_open);
    assert_eq!(state.form_value(), "");
}

#[test]
fn search_filters_by_label_and_reports_empty_results() {
    let options = fruit();
    let config = SelectConfig {
        searchable: true,
        ..SelectConfig::default()
    };
    let mut state = SelectState::default();

    let effects =
        reduce_select(&mut state, &config, &options, SelectAction::ToggleTrigger).expect("open");
    assert_eq!(effects, vec![SelectEffect::FocusSearch]);

    reduce_select(
        &mut state,
        &config,
        &options,
        SelectAction::SetSearchQuery("AN".to_string()),
    )
    .expect("search");
    let visible: Vec<&str> = state
        .visible_options(&config, &options)
        .iter()
        .map(|option| option.value.as_str())
        .collect();
    assert_eq!(visible, vec!["banana", "orange"]);

    reduce_select(
        &mut state,
        &config,
        &options,
        SelectAction::SetSearchQuery("kiwi".to_string()),
    )
    .expect("search");
    assert!(state.visible_options(&config, &options).is_empty());
    assert_eq!(NO_RESULTS_TEXT, "No results found");

    reduce_select(&mut state, &config, &options, SelectAction::PointerDownOutside)
        .expect("outside");
    assert!(!state.is_open);
    assert_eq!(state.search_query, "");
}

#[test]
fn unknown_option_is_a_typed_error() {
    let options = fruit();
    let mut state = SelectState::default();
    let err = reduce_select(
        &mut state,
        &SelectConfig::default(),
        &options,
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
fn modal_dismissal_honors_backdrop_flag_and_escape_once() {
    let config = ModalConfig {
        close_on_backdrop_click: false,
        close_on_esc: true,
        ..ModalConfig::default()
    };
    let mut closes = Vec::new();
    let events = [
        ModalEvent::BackdropClick {
            target_is_backdrop: true,
        },
        ModalEvent::KeyDown { key: "Escape" },
    ];
    for event in events {
        if let Some(reason) = dismissal(&config, event) {
            closes.push(reason);
        }
    }
    assert_eq!(closes, vec![DismissReason::Escape]);
}

#[test]
fn modal_lifecycle_restores_page_and_traps_tab() {
    let env = PageEnv::default();
    env.0.borrow_mut().focused = Some(1);
    env.0.borrow_mut().overflow = "auto".to_string();

    let session = ModalSession::open(env.clone(), &10);
    assert_eq!(env.0.borrow().focused, Some(10));
    assert_eq!(env.0.borrow().overflow, "hidden");

    let focusables = [11, 12, 13];
    assert_eq!(trap_tab(&focusables, Some(&13), false), Some(&11));
    assert_eq!(trap_tab(&focusables, Some(&11), true), Some(&13));

    session.close();
    assert_eq!(env.0.borrow().focused, Some(1));
    assert_eq!(env.0.borrow().overflow, "auto");
}

#[test]
fn modal_closed_before_deferred_open_leaves_page_untouched() {
    let env = PageEnv::default();
    env.0.borrow_mut().focused = Some(1);
    env.0.borrow_mut().overflow = "auto".to_string();

    let mut slot = ModalSlot::default();
    let reason = dismissal(&ModalConfig::default(), ModalEvent::KeyDown { key: "Escape" });
    assert_eq!(reason, Some(DismissReason::Escape));
    slot.release();

    assert!(!slot.open_deferred(env.clone(), &10));
    assert_eq!(env.0.borrow().focused, Some(1));
    assert_eq!(env.0.borrow().overflow, "auto");
}

#[test]
fn modal_unmounted_after_deferred_open_restores_page() {
    let env = PageEnv::default();
    env.0.borrow_mut().focused = Some(1);
    env.0.borrow_mut().overflow = "scroll".to_string();

    let mut slot = ModalSlot::default();
    assert!(slot.open_deferred(env.clone(), &10));
    assert_eq!(env.0.borrow().overflow, "hidden");

    drop(slot);
    assert_eq!(env.0.borrow().focused, Some(1));
    assert_eq!(env.0.borrow().overflow, "scroll");
}

#[test]
fn input_error_replaces_helper_text() {
    let message = resolve_message(Some("bad"), None, Some("hint")).expect("message");
    assert_eq!(message.kind, MessageKind::Error);
    assert_eq!(message.text, "bad");
}

#[test]
fn blocked_buttons_never_activate() {
    for (disabled, loading) in [(true, false), (false, true)] {
        let blocked = interaction_blocked(disabled, loading);
        assert!(!key_press("Enter", blocked).activate);
        assert!(!key_press(" ", blocked).activate);
    }
    assert!(key_press("Enter", interaction_blocked(false, false)).activate);
}
