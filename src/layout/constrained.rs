use crate::{
    constraint::size_constraint::{AxisConstraint, SizeConstraint},
    foundation::core::{Size, size_max},
    layout::attributes::LayoutAttributes,
    layout::protocol::{Layout, LayoutItem},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Narrows the constraint handed to children and clamps the result.
///
/// Children are measured under the parent's constraint intersected with the
/// overrides; the node's size is the largest child clamped into the overrides,
/// so an `Exactly` override fixes that axis even without children.
pub struct ConstrainedLayout {
    /// Width override.
    pub width: AxisConstraint,
    /// Height override.
    pub height: AxisConstraint,
}

impl ConstrainedLayout {
    /// Overrides on both axes.
    pub fn new(width: AxisConstraint, height: AxisConstraint) -> Self {
        Self { width, height }
    }

    fn overrides(&self) -> SizeConstraint {
        SizeConstraint::new(self.width, self.height)
    }
}

impl Layout for ConstrainedLayout {
    type Traits = ();

    fn measure(&self, constraint: SizeConstraint, items: &[LayoutItem<'_, ()>]) -> Size {
        let inner = constraint.intersect(&self.overrides());
        let natural = items.iter().fold(Size::ZERO, |acc, item| {
            size_max(acc, item.content.measure(inner))
        });
        inner.constrain(natural)
    }

    fn layout(&self, size: Size, items: &[LayoutItem<'_, ()>]) -> Vec<LayoutAttributes> {
        vec![LayoutAttributes::with_size(size); items.len()]
    }

    fn default_traits() {}
}

#[cfg(test)]
#[path = "../../tests/unit/layout/constrained.rs"]
mod tests;
