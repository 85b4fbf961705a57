use crate::{
    constraint::size_constraint::SizeConstraint,
    foundation::core::{Size, size_max},
    layout::attributes::LayoutAttributes,
    layout::protocol::{Layout, LayoutItem},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Stacks children on top of each other, each filling the whole node.
///
/// Children are measured under the parent's constraint; the node is as large as
/// its largest child on each axis.
pub struct OverlayLayout;

impl Layout for OverlayLayout {
    type Traits = ();

    fn measure(&self, constraint: SizeConstraint, items: &[LayoutItem<'_, ()>]) -> Size {
        let natural = items.iter().fold(Size::ZERO, |acc, item| {
            size_max(acc, item.content.measure(constraint))
        });
        constraint.constrain(natural)
    }

    fn layout(&self, size: Size, items: &[LayoutItem<'_, ()>]) -> Vec<LayoutAttributes> {
        vec![LayoutAttributes::with_size(size); items.len()]
    }

    fn default_traits() {}
}

#[cfg(test)]
#[path = "../../tests/unit/layout/overlay.rs"]
mod tests;
