// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM-backed [`HostSurface`] for `wasm32`.
//!
//! Shapes rendered as DOM elements (inline SVG, for example) are identified
//! by their `id` attribute, which is what the registry is keyed by.

use alloc::string::String;
use alloc::vec::Vec;

use js_sys::Array;
use kurbo::Point;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::HostSurface;

/// Element lookup through `Document.elementFromPoint` and
/// `Document.elementsFromPoint`.
///
/// Points are viewport (client) coordinates. Elements with an empty `id`
/// are skipped.
#[derive(Clone, Debug)]
pub struct DocumentSurface {
    document: Document,
}

impl DocumentSurface {
    /// Look up elements in `document`.
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Look up elements in the current window's document, if there is one.
    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document))
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "the DOM takes f32 client coordinates"
)]
fn client_f32(client: Point) -> (f32, f32) {
    (client.x as f32, client.y as f32)
}

fn non_empty_id(element: &Element) -> Option<String> {
    let id = element.id();
    (!id.is_empty()).then_some(id)
}

impl HostSurface for DocumentSurface {
    fn element_id_at(&self, client: Point) -> Option<String> {
        let (x, y) = client_f32(client);
        let element = self.document.element_from_point(x, y)?;
        non_empty_id(&element)
    }

    fn element_ids_at(&self, client: Point) -> Vec<String> {
        let (x, y) = client_f32(client);
        let stack: Array = self.document.elements_from_point(x, y);
        stack
            .iter()
            .filter_map(|value| value.dyn_into::<Element>().ok())
            .filter_map(|element| non_empty_id(&element))
            .collect()
    }
}
