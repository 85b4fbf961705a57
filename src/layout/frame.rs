use crate::{
    constraint::size_constraint::SizeConstraint,
    foundation::core::{Rect, Size},
    layout::attributes::LayoutAttributes,
    layout::protocol::{Layout, LayoutItem},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Places each child at an absolute frame given as its traits.
///
/// Measures to the bounding box `(max x1, max y1)` of all frames, anchored at the
/// origin; the incoming constraint is ignored.
pub struct FrameLayout;

impl Layout for FrameLayout {
    type Traits = Rect;

    fn measure(&self, _constraint: SizeConstraint, items: &[LayoutItem<'_, Rect>]) -> Size {
        items.iter().fold(Size::ZERO, |acc, item| {
            Size::new(acc.width.max(item.traits.x1), acc.height.max(item.traits.y1))
        })
    }

    fn layout(&self, _size: Size, items: &[LayoutItem<'_, Rect>]) -> Vec<LayoutAttributes> {
        items
            .iter()
            .map(|item| LayoutAttributes::new(*item.traits))
            .collect()
    }

    fn default_traits() -> Rect {
        Rect::ZERO
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/frame.rs"]
mod tests;
