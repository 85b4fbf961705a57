use std::{fmt, rc::Rc};

use crate::{
    constraint::size_constraint::SizeConstraint,
    content::element_content::ElementContent,
    element::node::{Element, ViewDescription},
    environment::values::Environment,
    foundation::core::{Rect, Size, union_rects},
    foundation::error::TrellisResult,
    layout::attributes::LayoutAttributes,
};

/// Root of an element tree with its content built once.
///
/// Repeated [`measure`](Self::measure) and [`layout`](Self::layout) calls reuse the
/// same content; cached leaves share results through the environment passed in.
pub struct ElementTree {
    root: Rc<dyn Element>,
    content: ElementContent,
}

impl ElementTree {
    /// Build the content of `root` and everything below it.
    pub fn new(root: impl Element + 'static) -> Self {
        Self::from_shared(Rc::new(root))
    }

    /// Same as [`new`](Self::new) for an already shared root.
    pub fn from_shared(root: Rc<dyn Element>) -> Self {
        let content = root.content();
        Self { root, content }
    }

    /// The root element.
    pub fn root(&self) -> &Rc<dyn Element> {
        &self.root
    }

    /// The root's content.
    pub fn content(&self) -> &ElementContent {
        &self.content
    }

    /// Size of the root under `constraint`.
    pub fn measure(&self, constraint: SizeConstraint, environment: &Environment) -> Size {
        self.content.measure(constraint, environment)
    }

    /// Lay out the whole tree with the root placed at `frame`.
    #[tracing::instrument(skip(self, environment), fields(root = %self.root.name()))]
    pub fn layout(&self, frame: Rect, environment: &Environment) -> LayoutResultNode {
        let node = build_node(
            &self.root,
            &self.content,
            LayoutAttributes::new(frame),
            environment,
        );
        tracing::debug!(nodes = node.node_count(), "laid out tree");
        node
    }
}

impl fmt::Debug for ElementTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementTree")
            .field("root", &self.root.name())
            .field("content", &self.content)
            .finish()
    }
}

/// Lay out `root` and all its descendants, with the root placed at `frame`.
///
/// The root is not measured; callers size `frame` themselves, typically from
/// [`ElementContent::measure`].
#[tracing::instrument(skip(root, environment), fields(root = %root.name()))]
pub fn layout_tree(
    root: Rc<dyn Element>,
    frame: Rect,
    environment: &Environment,
) -> LayoutResultNode {
    let content = root.content();
    build_node(&root, &content, LayoutAttributes::new(frame), environment)
}

fn build_node(
    element: &Rc<dyn Element>,
    content: &ElementContent,
    attributes: LayoutAttributes,
    environment: &Environment,
) -> LayoutResultNode {
    let children = content
        .perform_layout(&attributes, environment)
        .into_iter()
        .map(|child| build_node(child.element, child.content, child.attributes, environment))
        .collect();
    LayoutResultNode {
        name: element.name().to_owned(),
        attributes,
        children,
        element: Rc::clone(element),
    }
}

/// Laid-out snapshot of one node and its subtree.
///
/// Frames are relative to the parent node; the root's frame is the one passed
/// to [`layout_tree`].
#[derive(Clone, serde::Serialize)]
pub struct LayoutResultNode {
    /// Short element name.
    pub name: String,
    /// Placement in the parent's coordinate space.
    pub attributes: LayoutAttributes,
    /// Children in insertion order.
    pub children: Vec<LayoutResultNode>,
    #[serde(skip)]
    element: Rc<dyn Element>,
}

impl LayoutResultNode {
    /// The element this node was produced from.
    pub fn element(&self) -> &Rc<dyn Element> {
        &self.element
    }

    /// Union of the children's frames, in this node's coordinate space.
    pub fn subtree_extent(&self) -> Option<Rect> {
        union_rects(self.children.iter().map(|c| c.attributes.frame))
    }

    /// Ask the element how it should be backed by a view at this placement.
    pub fn view_description(&self) -> Option<ViewDescription> {
        self.element
            .backing_view_description(self.attributes.bounds(), self.subtree_extent())
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Depth-first, pre-order list of `(name, attributes)` with frames in the
    /// root's parent coordinate space.
    pub fn flatten(&self) -> Vec<(String, LayoutAttributes)> {
        let mut out = Vec::with_capacity(self.node_count());
        self.flatten_into(&LayoutAttributes::default(), &mut out);
        out
    }

    fn flatten_into(&self, parent: &LayoutAttributes, out: &mut Vec<(String, LayoutAttributes)>) {
        let absolute = self.attributes.within(parent);
        out.push((self.name.clone(), absolute));
        for child in &self.children {
            child.flatten_into(&absolute, out);
        }
    }

    /// Pretty-printed JSON snapshot of this subtree.
    pub fn to_json_pretty(&self) -> TrellisResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Debug for LayoutResultNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutResultNode")
            .field("name", &self.name)
            .field("attributes", &self.attributes)
            .field("children", &self.children)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/element/tree.rs"]
mod tests;
