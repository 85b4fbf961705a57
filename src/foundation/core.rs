pub use kurbo::{Affine, Insets, Point, Rect, Size, Vec2};

/// Per-axis maximum of two sizes. Infinity absorbs.
pub(crate) fn size_max(a: Size, b: Size) -> Size {
    Size::new(a.width.max(b.width), a.height.max(b.height))
}

/// Union of `rects`, or `None` when there are none.
pub(crate) fn union_rects(rects: impl IntoIterator<Item = Rect>) -> Option<Rect> {
    rects.into_iter().reduce(|acc, r| acc.union(r))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
