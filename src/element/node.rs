use std::collections::BTreeMap;

use crate::{content::element_content::ElementContent, foundation::core::Rect};

/// A node of the composition tree.
///
/// Elements are cheap descriptions; their [`content`](Element::content) is built
/// once per position in the tree and owns any measurement caches.
pub trait Element {
    /// The measurable/layoutable body of this element.
    fn content(&self) -> ElementContent;

    /// How the rendering pipeline should back this element with a view.
    ///
    /// Called by the renderer after layout with the element's bounds and the
    /// union of its children's frames; never called during measurement or layout.
    fn backing_view_description(
        &self,
        bounds: Rect,
        subtree_extent: Option<Rect>,
    ) -> Option<ViewDescription>;

    /// Short name used in layout snapshots and logs.
    fn name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or(base)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Renderer-facing description of the view backing an element.
pub struct ViewDescription {
    /// Kind of view to create (renderer-defined).
    pub view_kind: String,
    /// Properties to apply to the view.
    pub properties: BTreeMap<String, serde_json::Value>,
}

impl ViewDescription {
    /// Description of a `view_kind` view with no properties.
    pub fn new(view_kind: impl Into<String>) -> Self {
        Self {
            view_kind: view_kind.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Set one property.
    pub fn with_property(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(name.into(), value);
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/element/node.rs"]
mod tests;
