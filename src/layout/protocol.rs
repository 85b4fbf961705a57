use crate::{
    constraint::size_constraint::SizeConstraint, foundation::core::Size,
    layout::attributes::LayoutAttributes,
};

/// Anything that can report a size for a constraint.
pub trait Measurable {
    /// Size this content wants under `constraint`.
    fn measure(&self, constraint: SizeConstraint) -> Size;
}

impl<F> Measurable for F
where
    F: Fn(SizeConstraint) -> Size,
{
    fn measure(&self, constraint: SizeConstraint) -> Size {
        self(constraint)
    }
}

/// One child as seen by a [`Layout`]: its traits and something to measure.
pub struct LayoutItem<'a, T> {
    /// Per-child data owned by the layout.
    pub traits: &'a T,
    /// The child's measurable content.
    pub content: &'a dyn Measurable,
}

impl<T> Clone for LayoutItem<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LayoutItem<'_, T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for LayoutItem<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutItem")
            .field("traits", self.traits)
            .finish_non_exhaustive()
    }
}

/// A layout algorithm over a sequence of children.
///
/// `measure` and `layout` must agree: the size returned by `measure` has to be
/// achievable by `layout` for the same items. How a parent's constraint is
/// passed on to children is up to each implementation.
pub trait Layout: 'static {
    /// Per-child data this layout understands (a frame, a weight, ...).
    type Traits: Clone + std::fmt::Debug + 'static;

    /// Aggregate size of `items` under `constraint`.
    fn measure(&self, constraint: SizeConstraint, items: &[LayoutItem<'_, Self::Traits>]) -> Size;

    /// One placement per item, in item order, for a node of final `size`.
    fn layout(&self, size: Size, items: &[LayoutItem<'_, Self::Traits>]) -> Vec<LayoutAttributes>;

    /// Traits used for children added without explicit traits.
    fn default_traits() -> Self::Traits;
}
