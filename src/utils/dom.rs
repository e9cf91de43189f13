//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs, plus the adapters that
//! connect the pure reveal logic in [`crate::core::reveal`] to the live DOM.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::core::{RandomSource, RevealTarget};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document object.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Find an element by id.
///
/// Returns `None` when the document or the element is absent.
#[inline]
pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

// =============================================================================
// Reveal Adapters
// =============================================================================

/// [`RandomSource`] backed by `Math.random()`.
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// [`RevealTarget`] over a live element's `children()` collection.
///
/// Visibility writes set the inline `display` style on the child, matching
/// the stylesheet's `block`/`none` values for the feedback items.
pub struct ElementChildren {
    container: Element,
}

impl ElementChildren {
    pub fn new(container: Element) -> Self {
        Self { container }
    }
}

impl RevealTarget for ElementChildren {
    fn child_count(&self) -> usize {
        self.container.children().length() as usize
    }

    fn set_visible(&mut self, index: usize, visible: bool) -> bool {
        let Some(child) = self.container.children().item(index as u32) else {
            return false;
        };
        let Ok(child) = child.dyn_into::<web_sys::HtmlElement>() else {
            return false;
        };
        let display = if visible { "block" } else { "none" };
        child.style().set_property("display", display).is_ok()
    }
}
