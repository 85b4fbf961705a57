use std::hash::{Hash, Hasher};

use crate::{
    foundation::core::Size,
    foundation::error::{TrellisError, TrellisResult},
    foundation::math::canonical_bits,
};

#[derive(Clone, Copy, Debug, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Bounds along a single axis.
///
/// Equality and hashing are semantic: `Exactly(5.0)` equals
/// `Between { min: 5.0, max: 5.0 }`, and `Unconstrained` equals
/// `Between { min: 0.0, max: f64::INFINITY }`.
pub enum AxisConstraint {
    /// The axis must measure exactly this value.
    Exactly(f64),
    /// The axis may measure anywhere in `[min, max]`. `max` may be infinite.
    Between {
        /// Lower bound, `>= 0`.
        min: f64,
        /// Upper bound, `>= min`.
        max: f64,
    },
    /// No bound at all.
    Unconstrained,
}

impl AxisConstraint {
    /// Exact bound. Negative or NaN values clamp to zero; infinity is unconstrained.
    pub fn exactly(value: f64) -> Self {
        if value == f64::INFINITY {
            return Self::Unconstrained;
        }
        Self::Exactly(sanitize(value))
    }

    /// Upper bound `[0, max]`. Infinite or NaN `max` is unconstrained.
    pub fn at_most(max: f64) -> Self {
        if max.is_nan() || max == f64::INFINITY {
            return Self::Unconstrained;
        }
        Self::Between {
            min: 0.0,
            max: sanitize(max),
        }
    }

    /// Validated range `[min, max]`.
    pub fn between(min: f64, max: f64) -> TrellisResult<Self> {
        if min.is_nan() || max.is_nan() {
            return Err(TrellisError::validation("axis bounds must not be NaN"));
        }
        if min < 0.0 || !min.is_finite() {
            return Err(TrellisError::validation(format!(
                "axis minimum must be finite and >= 0, got {min}"
            )));
        }
        if min > max {
            return Err(TrellisError::validation(format!(
                "axis minimum {min} exceeds maximum {max}"
            )));
        }
        Ok(Self::Between {
            min: min + 0.0,
            max: max + 0.0,
        })
    }

    /// Smallest admissible value.
    pub fn minimum(self) -> f64 {
        match self {
            Self::Exactly(v) => v,
            Self::Between { min, .. } => min,
            Self::Unconstrained => 0.0,
        }
    }

    /// Largest admissible value; infinite when unbounded.
    pub fn maximum(self) -> f64 {
        match self {
            Self::Exactly(v) => v,
            Self::Between { max, .. } => max,
            Self::Unconstrained => f64::INFINITY,
        }
    }

    /// True when the axis has no finite upper bound.
    pub fn is_unconstrained(self) -> bool {
        self.maximum() == f64::INFINITY
    }

    /// True when exactly one value is admissible.
    pub fn is_exact(self) -> bool {
        self.minimum() == self.maximum()
    }

    /// Whether `value` lies within the bounds.
    pub fn contains(self, value: f64) -> bool {
        value >= self.minimum() && value <= self.maximum()
    }

    /// Clamp `value` into the bounds.
    ///
    /// Total for any bounds: a NaN bound is ignored and an inverted range
    /// resolves to its maximum.
    pub fn constrain(self, value: f64) -> f64 {
        value.max(self.minimum()).min(self.maximum())
    }

    /// Shrink both bounds by `amount` (grow for negative amounts), never below zero.
    pub fn inset(self, amount: f64) -> Self {
        match self {
            Self::Exactly(v) => Self::Exactly((v - amount).max(0.0)),
            Self::Between { min, max } => Self::Between {
                min: (min - amount).max(0.0),
                max: (max - amount).max(0.0),
            },
            Self::Unconstrained => Self::Unconstrained,
        }
    }

    /// Tightest bounds admitted by both constraints.
    ///
    /// When the ranges are disjoint the lower of the two maxima wins.
    pub fn intersect(self, other: Self) -> Self {
        let max = self.maximum().min(other.maximum());
        let min = self.minimum().max(other.minimum()).min(max);
        if max == f64::INFINITY && min == 0.0 {
            Self::Unconstrained
        } else if min == max {
            Self::Exactly(min)
        } else {
            Self::Between { min, max }
        }
    }
}

impl Default for AxisConstraint {
    fn default() -> Self {
        Self::Unconstrained
    }
}

impl PartialEq for AxisConstraint {
    fn eq(&self, other: &Self) -> bool {
        canonical_bits(self.minimum()) == canonical_bits(other.minimum())
            && canonical_bits(self.maximum()) == canonical_bits(other.maximum())
    }
}

impl Eq for AxisConstraint {}

impl Hash for AxisConstraint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.minimum()).hash(state);
        canonical_bits(self.maximum()).hash(state);
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else {
        value + 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
/// Width and height bounds a measurement must respect.
pub struct SizeConstraint {
    /// Horizontal bounds.
    pub width: AxisConstraint,
    /// Vertical bounds.
    pub height: AxisConstraint,
}

impl SizeConstraint {
    /// No bounds on either axis.
    pub const UNCONSTRAINED: Self = Self {
        width: AxisConstraint::Unconstrained,
        height: AxisConstraint::Unconstrained,
    };

    /// Combine two axis constraints.
    pub fn new(width: AxisConstraint, height: AxisConstraint) -> Self {
        Self { width, height }
    }

    /// Treat `size` as an upper bound: each axis becomes `[0, value]`,
    /// infinite values become unconstrained.
    pub fn from_size(size: Size) -> Self {
        Self {
            width: AxisConstraint::at_most(size.width),
            height: AxisConstraint::at_most(size.height),
        }
    }

    /// Require exactly `size`.
    pub fn exactly(size: Size) -> Self {
        Self {
            width: AxisConstraint::exactly(size.width),
            height: AxisConstraint::exactly(size.height),
        }
    }

    /// Smallest admissible size.
    pub fn minimum(&self) -> Size {
        Size::new(self.width.minimum(), self.height.minimum())
    }

    /// Largest admissible size; unbounded axes are infinite.
    pub fn maximum(&self) -> Size {
        Size::new(self.width.maximum(), self.height.maximum())
    }

    /// Whether `size` satisfies both axes.
    pub fn contains(&self, size: Size) -> bool {
        self.width.contains(size.width) && self.height.contains(size.height)
    }

    /// Clamp `size` into the bounds.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            self.width.constrain(size.width),
            self.height.constrain(size.height),
        )
    }

    /// Shrink each axis by the given amounts.
    pub fn inset(&self, width: f64, height: f64) -> Self {
        Self {
            width: self.width.inset(width),
            height: self.height.inset(height),
        }
    }

    /// Per-axis intersection, see [`AxisConstraint::intersect`].
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            width: self.width.intersect(other.width),
            height: self.height.intersect(other.height),
        }
    }

    /// Replace the width bounds.
    pub fn with_width(self, width: AxisConstraint) -> Self {
        Self { width, ..self }
    }

    /// Replace the height bounds.
    pub fn with_height(self, height: AxisConstraint) -> Self {
        Self { height, ..self }
    }
}

impl Default for SizeConstraint {
    fn default() -> Self {
        Self::UNCONSTRAINED
    }
}

impl From<Size> for SizeConstraint {
    fn from(size: Size) -> Self {
        Self::from_size(size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/constraint/size_constraint.rs"]
mod tests;
