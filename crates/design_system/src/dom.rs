//! DOM focus, event-target, and body-style helpers shared by the widgets.

use std::cell::Cell;
use std::rc::Rc;

use design_headless::{ModalEnvironment, FOCUSABLE_SELECTOR};
use leptos::{logging, on_cleanup};
use thiserror::Error;
use wasm_bindgen::JsCast;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures reaching browser globals.
pub enum DomError {
    /// `window` is not available (non-browser target).
    #[error("browser window is unavailable")]
    NoWindow,
    /// `window.document` is not available.
    #[error("document is unavailable")]
    NoDocument,
    /// `document.body` is not available.
    #[error("document body is unavailable")]
    NoBody,
    /// A selector query was rejected by the browser.
    #[error("selector query `{selector}` failed")]
    Query {
        /// Rejected selector.
        selector: &'static str,
    },
}

pub(crate) fn document() -> Result<web_sys::Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

pub(crate) fn active_html_element() -> Option<web_sys::HtmlElement> {
    document()
        .ok()
        .and_then(|document| document.active_element())
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Flag cleared when the current reactive owner is cleaned up.
///
/// Animation-frame callbacks check it before reading node refs owned by a widget that may have
/// unmounted in the meantime.
pub(crate) fn owner_alive() -> Rc<Cell<bool>> {
    let alive = Rc::new(Cell::new(true));
    on_cleanup({
        let alive = Rc::clone(&alive);
        move || alive.set(false)
    });
    alive
}

/// Focuses an HTML element, ignoring browser focus errors.
pub(crate) fn focus_html_element(element: &web_sys::HtmlElement) {
    let _ = element.focus();
}

/// Ordered tabbable descendants of `root`.
pub(crate) fn focusable_descendants(
    root: &web_sys::Element,
) -> Result<Vec<web_sys::HtmlElement>, DomError> {
    let nodes = root
        .query_selector_all(FOCUSABLE_SELECTOR)
        .map_err(|_| DomError::Query {
            selector: FOCUSABLE_SELECTOR,
        })?;

    let mut items = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        if let Ok(item) = node.dyn_into::<web_sys::HtmlElement>() {
            items.push(item);
        }
    }
    Ok(items)
}

/// Whether the event target is `container` or one of its descendants.
pub(crate) fn event_within(ev: &web_sys::Event, container: &web_sys::Node) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|target| container.contains(Some(&target)))
}

/// Whether the event was dispatched on the element its listener is attached to.
pub(crate) fn targets_current(ev: &web_sys::Event) -> bool {
    match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

/// Re-dispatches a keyboard activation as a click on the listening element.
pub(crate) fn click_current_target(ev: &web_sys::Event) {
    if let Some(element) = ev
        .current_target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
    {
        element.click();
    }
}

#[derive(Debug, Clone)]
/// [`ModalEnvironment`] backed by the live document.
pub struct DomEnvironment {
    body: web_sys::HtmlElement,
}

impl DomEnvironment {
    /// Captures the document body.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] when the window, document, or body is missing.
    pub fn new() -> Result<Self, DomError> {
        let body = document()?.body().ok_or(DomError::NoBody)?;
        Ok(Self { body })
    }
}

impl ModalEnvironment for DomEnvironment {
    type Element = web_sys::HtmlElement;

    fn active_element(&self) -> Option<Self::Element> {
        active_html_element()
    }

    fn focus(&self, element: &Self::Element) {
        focus_html_element(element);
    }

    fn is_attached(&self, element: &Self::Element) -> bool {
        element.is_connected()
    }

    fn scroll_overflow(&self) -> String {
        self.body
            .style()
            .get_property_value("overflow")
            .unwrap_or_default()
    }

    fn set_scroll_overflow(&self, value: &str) {
        let style = self.body.style();
        let result = if value.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", value)
        };
        if let Err(err) = result {
            logging::warn!("body overflow update to `{value}` failed: {err:?}");
        }
    }
}
