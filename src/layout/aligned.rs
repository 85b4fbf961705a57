use crate::{
    constraint::size_constraint::SizeConstraint,
    foundation::core::{Rect, Size, size_max},
    layout::alignment::Alignment,
    layout::attributes::LayoutAttributes,
    layout::protocol::{Layout, LayoutItem},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Positions each child at its natural size inside the node by an [`Alignment`].
pub struct AlignedLayout {
    /// Where children sit inside the node.
    pub alignment: Alignment,
}

impl AlignedLayout {
    /// Aligned by `alignment`.
    pub fn new(alignment: Alignment) -> Self {
        Self { alignment }
    }

    /// Centered on both axes.
    pub fn centered() -> Self {
        Self::new(Alignment::CENTER)
    }
}

impl Layout for AlignedLayout {
    type Traits = ();

    fn measure(&self, constraint: SizeConstraint, items: &[LayoutItem<'_, ()>]) -> Size {
        let natural = items.iter().fold(Size::ZERO, |acc, item| {
            size_max(acc, item.content.measure(constraint))
        });
        constraint.constrain(natural)
    }

    fn layout(&self, size: Size, items: &[LayoutItem<'_, ()>]) -> Vec<LayoutAttributes> {
        let within = SizeConstraint::from_size(size);
        items
            .iter()
            .map(|item| {
                let natural = item.content.measure(within);
                let (x, w) = self.alignment.horizontal.place(size.width, natural.width);
                let (y, h) = self.alignment.vertical.place(size.height, natural.height);
                LayoutAttributes::new(Rect::new(x, y, x + w, y + h))
            })
            .collect()
    }

    fn default_traits() {}
}

#[cfg(test)]
#[path = "../../tests/unit/layout/aligned.rs"]
mod tests;
