//! Modal overlay lifecycle, dismissal rules, and focus trap.
//!
//! Document focus and the body scroll style are process-wide singletons. The modal reaches them
//! only through a [`ModalEnvironment`] handle so the lifecycle can run against the DOM in the
//! widget layer and against a fake document in tests.

use serde::{Deserialize, Serialize};

use crate::tokens::{lenient, ModalSize};

/// Selector for elements that participate in the modal focus trap.
pub const FOCUSABLE_SELECTOR: &str =
    r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;

/// Overflow value applied to the document body while a modal is open.
pub const SCROLL_LOCK_OVERFLOW: &str = "hidden";

/// Access to the document-level resources a modal borrows while open.
pub trait ModalEnvironment {
    /// Handle to a focusable element.
    type Element: Clone;

    /// Element that currently has focus, if any.
    fn active_element(&self) -> Option<Self::Element>;

    /// Moves focus to `element`.
    fn focus(&self, element: &Self::Element);

    /// Whether `element` is still part of the document.
    fn is_attached(&self, element: &Self::Element) -> bool;

    /// Current body `overflow` style value.
    fn scroll_overflow(&self) -> String;

    /// Replaces the body `overflow` style value.
    fn set_scroll_overflow(&self, value: &str);
}

/// Resources captured when a modal opens and handed back when it closes.
///
/// Opening records the focused element, focuses the modal root, and locks page scrolling.
/// Dropping the session (closing or unmounting the modal) restores both exactly once.
pub struct ModalSession<E: ModalEnvironment> {
    env: E,
    previous_focus: Option<E::Element>,
    saved_overflow: Option<String>,
}

impl<E: ModalEnvironment> ModalSession<E> {
    /// Runs the modal entry actions against `env`, focusing `root`.
    pub fn open(env: E, root: &E::Element) -> Self {
        let previous_focus = env.active_element();
        env.focus(root);
        let saved_overflow = env.scroll_overflow();
        env.set_scroll_overflow(SCROLL_LOCK_OVERFLOW);
        Self {
            env,
            previous_focus,
            saved_overflow: Some(saved_overflow),
        }
    }

    /// Element that had focus before the modal opened.
    pub fn previous_focus(&self) -> Option<&E::Element> {
        self.previous_focus.as_ref()
    }

    /// Runs the exit actions. Equivalent to dropping the session.
    pub fn close(self) {
        drop(self);
    }

    fn restore(&mut self) {
        if let Some(element) = self.previous_focus.take() {
            if self.env.is_attached(&element) {
                self.env.focus(&element);
            }
        }
        if let Some(overflow) = self.saved_overflow.take() {
            self.env.set_scroll_overflow(&overflow);
        }
    }
}

impl<E: ModalEnvironment> Drop for ModalSession<E> {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Lifecycle of a session whose open step runs after mount, one frame late.
///
/// The dialog may be closed before the deferred open runs. Once released, the slot never opens a
/// session, so a modal dismissed within its first frame leaves focus and scrolling untouched.
pub enum ModalSlot<E: ModalEnvironment> {
    /// Mounted, waiting for the deferred open.
    Pending,
    /// Session is live.
    Open(ModalSession<E>),
    /// The dialog was closed or unmounted.
    Released,
}

impl<E: ModalEnvironment> Default for ModalSlot<E> {
    fn default() -> Self {
        Self::Pending
    }
}

impl<E: ModalEnvironment> ModalSlot<E> {
    /// Whether the deferred open may still run.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Whether a session currently holds focus and the scroll lock.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Runs the deferred open. Returns `false` when the slot was already released or opened, or
    /// when `root` has left the document.
    pub fn open_deferred(&mut self, env: E, root: &E::Element) -> bool {
        if !self.is_pending() || !env.is_attached(root) {
            return false;
        }
        *self = Self::Open(ModalSession::open(env, root));
        true
    }

    /// Closes the live session, if any, and blocks any later deferred open.
    pub fn release(&mut self) {
        *self = Self::Released;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Dismissal and sizing configuration for a modal. Every dismissal path defaults to enabled.
pub struct ModalConfig {
    /// Maximum-size token.
    #[serde(deserialize_with = "lenient")]
    pub size: ModalSize,
    /// A click on the backdrop itself requests close.
    pub close_on_backdrop_click: bool,
    /// Escape requests close.
    pub close_on_esc: bool,
    /// The header close button is rendered.
    pub show_close_button: bool,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            size: ModalSize::Md,
            close_on_backdrop_click: true,
            close_on_esc: true,
            show_close_button: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Events that may dismiss an open modal.
pub enum ModalEvent<'a> {
    /// A key went down while the modal was open.
    KeyDown {
        /// `KeyboardEvent.key` value.
        key: &'a str,
    },
    /// A click landed on the backdrop layer.
    BackdropClick {
        /// The click target is the backdrop element itself rather than bubbled modal content.
        target_is_backdrop: bool,
    },
    /// The header close button was activated.
    CloseButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Why a modal asked its caller to close.
pub enum DismissReason {
    /// Escape key.
    Escape,
    /// Backdrop click.
    Backdrop,
    /// Close button.
    CloseButton,
}

/// Decides whether `event` should invoke `on_close`.
///
/// The close button always dismisses; Escape and backdrop clicks honor their config flags, and a
/// backdrop click only counts when it targets the backdrop element exactly.
pub fn dismissal(config: &ModalConfig, event: ModalEvent<'_>) -> Option<DismissReason> {
    match event {
        ModalEvent::KeyDown { key } if key == "Escape" && config.close_on_esc => {
            Some(DismissReason::Escape)
        }
        ModalEvent::KeyDown { .. } => None,
        ModalEvent::BackdropClick { target_is_backdrop } => {
            (target_is_backdrop && config.close_on_backdrop_click).then_some(DismissReason::Backdrop)
        }
        ModalEvent::CloseButton => Some(DismissReason::CloseButton),
    }
}

/// Computes where Tab focus should wrap inside the modal.
///
/// `focusables` is the ordered list of tabbable descendants. Tab on the last element returns the
/// first; Shift+Tab (`backwards`) on the first returns the last. Any other position returns `None`
/// and the browser's default tab order applies. A returned target means the keydown's default
/// must be prevented.
pub fn trap_tab<'a, T: PartialEq>(
    focusables: &'a [T],
    active: Option<&T>,
    backwards: bool,
) -> Option<&'a T> {
    let first = focusables.first()?;
    let last = focusables.last()?;
    let active = active?;
    if backwards {
        (active == first).then_some(last)
    } else {
        (active == last).then_some(first)
    }
}

/// Accessible name for the dialog: the explicit label, otherwise the title text.
pub fn dialog_label(aria_label: Option<&str>, title: Option<&str>) -> Option<String> {
    aria_label
        .filter(|label| !label.is_empty())
        .or_else(|| title.filter(|title| !title.is_empty()))
        .map(str::to_string)
}
