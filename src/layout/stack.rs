use crate::{
    constraint::size_constraint::{AxisConstraint, SizeConstraint},
    foundation::core::{Rect, Size},
    layout::alignment::AxisAlignment,
    layout::attributes::LayoutAttributes,
    layout::protocol::{Layout, LayoutItem},
};

/// Primary axis of a stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Children left to right (a row).
    #[default]
    Horizontal,
    /// Children top to bottom (a column).
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    fn main(self, size: Size) -> f64 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    fn cross(self, size: Size) -> f64 {
        self.cross_axis().main(size)
    }

    fn size(self, main: f64, cross: f64) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    fn split(self, c: SizeConstraint) -> (AxisConstraint, AxisConstraint) {
        match self {
            Axis::Horizontal => (c.width, c.height),
            Axis::Vertical => (c.height, c.width),
        }
    }

    fn join(self, main: AxisConstraint, cross: AxisConstraint) -> SizeConstraint {
        match self {
            Axis::Horizontal => SizeConstraint::new(main, cross),
            Axis::Vertical => SizeConstraint::new(cross, main),
        }
    }

    fn rect(self, main_at: f64, main_len: f64, cross_at: f64, cross_len: f64) -> Rect {
        match self {
            Axis::Horizontal => Rect::new(main_at, cross_at, main_at + main_len, cross_at + cross_len),
            Axis::Vertical => Rect::new(cross_at, main_at, cross_at + cross_len, main_at + main_len),
        }
    }
}

/// How a stack child reacts to surplus or missing main-axis space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StackTraits {
    /// Share of surplus space this child absorbs.
    pub grow: f64,
    /// Share of missing space this child gives up, scaled by its natural size.
    pub shrink: f64,
}

impl StackTraits {
    /// Never grows or shrinks.
    pub fn fixed() -> Self {
        Self {
            grow: 0.0,
            shrink: 0.0,
        }
    }

    /// Grows and shrinks with the same `weight`.
    pub fn flexible(weight: f64) -> Self {
        Self {
            grow: weight,
            shrink: weight,
        }
    }
}

impl Default for StackTraits {
    fn default() -> Self {
        Self {
            grow: 0.0,
            shrink: 1.0,
        }
    }
}

/// Row or column of children separated by fixed spacing.
///
/// Children are measured with an unconstrained main axis and the parent's cross
/// axis bounds. The measured main extent is the natural total, capped by the
/// constraint; any difference at layout time is resolved with [`StackTraits`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StackLayout {
    /// Direction children flow in.
    pub axis: Axis,
    /// Gap between consecutive children.
    pub spacing: f64,
    /// Placement of the whole run when nothing grows into surplus space.
    pub main_alignment: AxisAlignment,
    /// Placement of each child across the stack.
    pub cross_alignment: AxisAlignment,
}

impl StackLayout {
    /// Stack along `axis` with no spacing, start-aligned.
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            ..Self::default()
        }
    }

    /// Horizontal stack.
    pub fn row() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Vertical stack.
    pub fn column() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Set the gap between children.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    /// Set the main-axis placement of the run.
    pub fn with_main_alignment(mut self, alignment: AxisAlignment) -> Self {
        self.main_alignment = alignment;
        self
    }

    /// Set the cross-axis placement of each child.
    pub fn with_cross_alignment(mut self, alignment: AxisAlignment) -> Self {
        self.cross_alignment = alignment;
        self
    }

    fn total_spacing(&self, count: usize) -> f64 {
        self.spacing * (count.saturating_sub(1) as f64)
    }

    fn natural_sizes(&self, cross: AxisConstraint, items: &[LayoutItem<'_, StackTraits>]) -> Vec<Size> {
        let child_constraint = self.axis.join(AxisConstraint::Unconstrained, cross);
        items
            .iter()
            .map(|item| item.content.measure(child_constraint))
            .collect()
    }
}

impl Layout for StackLayout {
    type Traits = StackTraits;

    fn measure(&self, constraint: SizeConstraint, items: &[LayoutItem<'_, StackTraits>]) -> Size {
        if items.is_empty() {
            return constraint.constrain(Size::ZERO);
        }
        let (_, cross_bounds) = self.axis.split(constraint);
        let naturals = self.natural_sizes(cross_bounds, items);
        let main = naturals.iter().map(|s| self.axis.main(*s)).sum::<f64>()
            + self.total_spacing(items.len());
        let cross = naturals
            .iter()
            .map(|s| self.axis.cross(*s))
            .fold(0.0, f64::max);
        constraint.constrain(self.axis.size(main, cross))
    }

    fn layout(&self, size: Size, items: &[LayoutItem<'_, StackTraits>]) -> Vec<LayoutAttributes> {
        if items.is_empty() {
            return Vec::new();
        }
        let main_extent = self.axis.main(size);
        let cross_extent = self.axis.cross(size);
        let naturals = self.natural_sizes(AxisConstraint::at_most(cross_extent), items);

        let available = (main_extent - self.total_spacing(items.len())).max(0.0);
        let natural_main: Vec<f64> = naturals.iter().map(|s| self.axis.main(*s)).collect();
        let traits: Vec<StackTraits> = items.iter().map(|item| *item.traits).collect();
        let extents = distribute(available, &natural_main, &traits);

        let used = extents.iter().sum::<f64>();
        let (mut cursor, _) = self.main_alignment.place(available, used);
        let mut out = Vec::with_capacity(items.len());
        for (extent, natural) in extents.iter().zip(&naturals) {
            let (cross_at, cross_len) = self
                .cross_alignment
                .place(cross_extent, self.axis.cross(*natural));
            out.push(LayoutAttributes::new(
                self.axis.rect(cursor, *extent, cross_at, cross_len),
            ));
            cursor += extent + self.spacing;
        }
        out
    }

    fn default_traits() -> StackTraits {
        StackTraits::default()
    }
}

/// Main-axis extent per child after resolving surplus (`grow`) or deficit (`shrink`).
fn distribute(available: f64, naturals: &[f64], traits: &[StackTraits]) -> Vec<f64> {
    let total = naturals.iter().sum::<f64>();
    let diff = available - total;
    if !diff.is_finite() || diff == 0.0 {
        return naturals.to_vec();
    }

    if diff > 0.0 {
        let total_grow = traits.iter().map(|t| t.grow.max(0.0)).sum::<f64>();
        if total_grow <= 0.0 {
            return naturals.to_vec();
        }
        return naturals
            .iter()
            .zip(traits)
            .map(|(n, t)| n + diff * t.grow.max(0.0) / total_grow)
            .collect();
    }

    let weights: Vec<f64> = naturals
        .iter()
        .zip(traits)
        .map(|(n, t)| n * t.shrink.max(0.0))
        .collect();
    let total_weight = weights.iter().sum::<f64>();
    if total_weight <= 0.0 {
        return naturals.to_vec();
    }
    naturals
        .iter()
        .zip(&weights)
        .map(|(n, w)| (n + diff * w / total_weight).max(0.0))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/stack.rs"]
mod tests;
