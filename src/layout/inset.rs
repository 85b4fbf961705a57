use crate::{
    constraint::size_constraint::SizeConstraint,
    foundation::core::{Insets, Rect, Size, size_max},
    layout::attributes::LayoutAttributes,
    layout::protocol::{Layout, LayoutItem},
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// Pads children by fixed insets.
///
/// Children are measured under the parent's constraint shrunk by the insets and
/// placed in the inset bounds.
pub struct InsetLayout {
    /// Left (`x0`), top (`y0`), right (`x1`) and bottom (`y1`) padding.
    pub insets: Insets,
}

impl InsetLayout {
    /// Padding with the given insets.
    pub fn new(insets: Insets) -> Self {
        Self { insets }
    }

    /// Same padding on every edge.
    pub fn uniform(amount: f64) -> Self {
        Self::new(Insets::uniform(amount))
    }
}

impl Layout for InsetLayout {
    type Traits = ();

    fn measure(&self, constraint: SizeConstraint, items: &[LayoutItem<'_, ()>]) -> Size {
        let dx = self.insets.x_value();
        let dy = self.insets.y_value();
        let inner = constraint.inset(dx, dy);
        let content = items.iter().fold(Size::ZERO, |acc, item| {
            size_max(acc, item.content.measure(inner))
        });
        constraint.constrain(Size::new(content.width + dx, content.height + dy))
    }

    fn layout(&self, size: Size, items: &[LayoutItem<'_, ()>]) -> Vec<LayoutAttributes> {
        let x0 = self.insets.x0;
        let y0 = self.insets.y0;
        let x1 = (size.width - self.insets.x1).max(x0);
        let y1 = (size.height - self.insets.y1).max(y0);
        vec![LayoutAttributes::new(Rect::new(x0, y0, x1, y1)); items.len()]
    }

    fn default_traits() {}
}

#[cfg(test)]
#[path = "../../tests/unit/layout/inset.rs"]
mod tests;
