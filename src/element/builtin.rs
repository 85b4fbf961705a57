use std::rc::Rc;

use crate::{
    constraint::size_constraint::{AxisConstraint, SizeConstraint},
    content::cache::MeasurementCachingKey,
    content::element_content::ElementContent,
    element::node::{Element, ViewDescription},
    foundation::core::{Insets, Rect, Size},
    layout::aligned::AlignedLayout,
    layout::alignment::Alignment,
    layout::constrained::ConstrainedLayout,
    layout::frame::FrameLayout,
    layout::inset::InsetLayout,
    layout::overlay::OverlayLayout,
    layout::stack::{Axis, StackLayout, StackTraits},
};

/// Empty leaf with a fixed size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spacer {
    /// Intrinsic size.
    pub size: Size,
}

impl Spacer {
    /// Spacer of `width` x `height`.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }
}

impl Element for Spacer {
    fn content(&self) -> ElementContent {
        ElementContent::intrinsic_size(self.size)
    }

    fn backing_view_description(&self, _: Rect, _: Option<Rect>) -> Option<ViewDescription> {
        None
    }
}

/// Leaf that keeps a width/height ratio, filling whichever axis is bounded.
///
/// Width wins when both axes are bounded and the result is clamped to the
/// constraint; a fully unconstrained request measures to zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AspectRatio {
    /// Width divided by height; must be positive.
    pub ratio: f64,
}

impl AspectRatio {
    /// Caching kind shared by all aspect-ratio leaves.
    pub const CACHE_KIND: &'static str = "AspectRatio";

    /// Leaf with `ratio` = width / height.
    pub fn new(ratio: f64) -> Self {
        Self { ratio }
    }

    fn size_in(ratio: f64, constraint: SizeConstraint) -> Size {
        let max = constraint.maximum();
        let natural = if max.width.is_finite() {
            Size::new(max.width, max.width / ratio)
        } else if max.height.is_finite() {
            Size::new(max.height * ratio, max.height)
        } else {
            Size::ZERO
        };
        constraint.constrain(natural)
    }
}

impl Element for AspectRatio {
    fn content(&self) -> ElementContent {
        let ratio = self.ratio;
        ElementContent::measuring_cached(
            MeasurementCachingKey::new(Self::CACHE_KIND, ratio.to_bits()),
            move |constraint| Self::size_in(ratio, constraint),
        )
    }

    fn backing_view_description(&self, _: Rect, _: Option<Rect>) -> Option<ViewDescription> {
        None
    }
}

/// Children at absolute frames.
#[derive(Clone, Default)]
pub struct FrameGroup {
    children: Vec<(Rect, Rc<dyn Element>)>,
}

impl FrameGroup {
    /// Group with no children.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `element` at `frame`.
    pub fn child(mut self, frame: Rect, element: impl Element + 'static) -> Self {
        self.children.push((frame, Rc::new(element)));
        self
    }

    /// Add a shared element at `frame`.
    pub fn shared_child(mut self, frame: Rect, element: Rc<dyn Element>) -> Self {
        self.children.push((frame, element));
        self
    }
}

impl Element for FrameGroup {
    fn content(&self) -> ElementContent {
        ElementContent::with_layout(FrameLayout, |b| {
            for (frame, child) in &self.children {
                b.add_shared(*frame, Rc::clone(child));
            }
        })
    }

    fn backing_view_description(&self, _: Rect, _: Option<Rect>) -> Option<ViewDescription> {
        None
    }
}

/// Row or column of children.
#[derive(Clone)]
pub struct Stack {
    /// Stack geometry.
    pub layout: StackLayout,
    children: Vec<(StackTraits, Rc<dyn Element>)>,
}

impl Stack {
    /// Empty stack along `axis`.
    pub fn new(axis: Axis) -> Self {
        Self {
            layout: StackLayout::new(axis),
            children: Vec::new(),
        }
    }

    /// Empty horizontal stack.
    pub fn row() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Empty vertical stack.
    pub fn column() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Replace the stack geometry.
    pub fn with_layout(mut self, layout: StackLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Add `element` with default traits.
    pub fn child(self, element: impl Element + 'static) -> Self {
        self.child_with(StackTraits::default(), element)
    }

    /// Add `element` with explicit traits.
    pub fn child_with(self, traits: StackTraits, element: impl Element + 'static) -> Self {
        self.shared_child(traits, Rc::new(element))
    }

    /// Add a shared element with explicit traits.
    pub fn shared_child(mut self, traits: StackTraits, element: Rc<dyn Element>) -> Self {
        self.children.push((traits, element));
        self
    }
}

impl Element for Stack {
    fn content(&self) -> ElementContent {
        ElementContent::with_layout(self.layout, |b| {
            for (traits, child) in &self.children {
                b.add_shared(*traits, Rc::clone(child));
            }
        })
    }

    fn backing_view_description(&self, _: Rect, _: Option<Rect>) -> Option<ViewDescription> {
        None
    }
}

/// Children layered on top of each other.
#[derive(Clone, Default)]
pub struct Overlay {
    children: Vec<Rc<dyn Element>>,
}

impl Overlay {
    /// Overlay with no children.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `element` above the existing children.
    pub fn child(self, element: impl Element + 'static) -> Self {
        self.shared_child(Rc::new(element))
    }

    /// Add a shared element above the existing children.
    pub fn shared_child(mut self, element: Rc<dyn Element>) -> Self {
        self.children.push(element);
        self
    }
}

impl Element for Overlay {
    fn content(&self) -> ElementContent {
        ElementContent::with_layout(OverlayLayout, |b| {
            for child in &self.children {
                b.add_shared((), Rc::clone(child));
            }
        })
    }

    fn backing_view_description(&self, _: Rect, _: Option<Rect>) -> Option<ViewDescription> {
        None
    }
}

/// Pads one child.
#[derive(Clone)]
pub struct Inset {
    /// Padding per edge.
    pub insets: Insets,
    child: Rc<dyn Element>,
}

impl Inset {
    /// Pad `child` by `insets`.
    pub fn new(insets: Insets, child: impl Element + 'static) -> Self {
        Self::shared(insets, Rc::new(child))
    }

    /// Pad a shared child by `insets`.
    pub fn shared(insets: Insets, child: Rc<dyn Element>) -> Self {
        Self { insets, child }
    }

    /// Pad `child` by `amount` on every edge.
    pub fn uniform(amount: f64, child: impl Element + 'static) -> Self {
        Self::new(Insets::uniform(amount), child)
    }
}

impl Element for Inset {
    fn content(&self) -> ElementContent {
        ElementContent::with_layout(InsetLayout::new(self.insets), |b| {
            b.add_shared((), Rc::clone(&self.child));
        })
    }

    fn backing_view_description(&self, _: Rect, _: Option<Rect>) -> Option<ViewDescription> {
        None
    }
}

/// Positions one child at its natural size.
#[derive(Clone)]
pub struct Aligned {
    /// Where the child sits.
    pub alignment: Alignment,
    child: Rc<dyn Element>,
}

impl Aligned {
    /// Align `child` by `alignment`.
    pub fn new(alignment: Alignment, child: impl Element + 'static) -> Self {
        Self::shared(alignment, Rc::new(child))
    }

    /// Align a shared child by `alignment`.
    pub fn shared(alignment: Alignment, child: Rc<dyn Element>) -> Self {
        Self { alignment, child }
    }

    /// Center `child`.
    pub fn centered(child: impl Element + 'static) -> Self {
        Self::new(Alignment::CENTER, child)
    }
}

impl Element for Aligned {
    fn content(&self) -> ElementContent {
        ElementContent::with_layout(AlignedLayout::new(self.alignment), |b| {
            b.add_shared((), Rc::clone(&self.child));
        })
    }

    fn backing_view_description(&self, _: Rect, _: Option<Rect>) -> Option<ViewDescription> {
        None
    }
}

/// Narrows the size of one child.
#[derive(Clone)]
pub struct ConstrainedSize {
    /// Width override.
    pub width: AxisConstraint,
    /// Height override.
    pub height: AxisConstraint,
    child: Rc<dyn Element>,
}

impl ConstrainedSize {
    /// Constrain `child` on both axes.
    pub fn new(width: AxisConstraint, height: AxisConstraint, child: impl Element + 'static) -> Self {
        Self::shared(width, height, Rc::new(child))
    }

    /// Constrain a shared child on both axes.
    pub fn shared(width: AxisConstraint, height: AxisConstraint, child: Rc<dyn Element>) -> Self {
        Self {
            width,
            height,
            child,
        }
    }
}

impl Element for ConstrainedSize {
    fn content(&self) -> ElementContent {
        ElementContent::with_layout(ConstrainedLayout::new(self.width, self.height), |b| {
            b.add_shared((), Rc::clone(&self.child));
        })
    }

    fn backing_view_description(&self, _: Rect, _: Option<Rect>) -> Option<ViewDescription> {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/element/builtin.rs"]
mod tests;
