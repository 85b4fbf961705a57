#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Placement of content along one axis of a larger region.
pub enum AxisAlignment {
    /// Leading edge.
    #[default]
    Start,
    /// Centered.
    Center,
    /// Trailing edge.
    End,
    /// Stretch to the whole region.
    Fill,
}

impl AxisAlignment {
    /// Offset and extent of content of natural extent `content` inside `available`.
    ///
    /// Content never exceeds `available`; `Fill` always takes all of it.
    pub fn place(self, available: f64, content: f64) -> (f64, f64) {
        let extent = content.min(available).max(0.0);
        let rem = (available - extent).max(0.0);
        match self {
            Self::Start => (0.0, extent),
            Self::Center => (rem * 0.5, extent),
            Self::End => (rem, extent),
            Self::Fill => (0.0, available.max(0.0)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Alignment on both axes.
pub struct Alignment {
    /// Horizontal component.
    pub horizontal: AxisAlignment,
    /// Vertical component.
    pub vertical: AxisAlignment,
}

impl Alignment {
    /// Creates an [`Alignment`] from explicit components.
    pub const fn new(horizontal: AxisAlignment, vertical: AxisAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Top-leading corner.
    pub const TOP_START: Self = Self::new(AxisAlignment::Start, AxisAlignment::Start);

    /// Center of the region.
    pub const CENTER: Self = Self::new(AxisAlignment::Center, AxisAlignment::Center);

    /// Bottom-trailing corner.
    pub const BOTTOM_END: Self = Self::new(AxisAlignment::End, AxisAlignment::End);

    /// Stretch on both axes.
    pub const FILL: Self = Self::new(AxisAlignment::Fill, AxisAlignment::Fill);
}

#[cfg(test)]
#[path = "../../tests/unit/layout/alignment.rs"]
mod tests;
