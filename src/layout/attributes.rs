use crate::{
    foundation::core::{Affine, Point, Rect, Size},
    foundation::error::{TrellisError, TrellisResult},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Placement computed for one node by its parent's layout.
pub struct LayoutAttributes {
    /// Frame in the parent's coordinate space.
    pub frame: Rect,
    /// Extra transform the backing view applies around its frame.
    pub transform: Affine,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
    /// Hidden nodes keep their frame but are not drawn.
    pub is_hidden: bool,
}

impl LayoutAttributes {
    /// Attributes for `frame` with identity transform, full opacity, visible.
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            transform: Affine::IDENTITY,
            alpha: 1.0,
            is_hidden: false,
        }
    }

    /// Attributes for a frame of `size` at the origin.
    pub fn with_size(size: Size) -> Self {
        Self::new(Rect::from_origin_size(Point::ZERO, size))
    }

    /// Frame size.
    pub fn size(&self) -> Size {
        self.frame.size()
    }

    /// Frame in the node's own coordinate space (origin at zero).
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.frame.size())
    }

    /// Frame center in the parent's coordinate space.
    pub fn center(&self) -> Point {
        self.frame.center()
    }

    /// Replace the transform.
    pub fn with_transform(self, transform: Affine) -> Self {
        Self { transform, ..self }
    }

    /// Replace the opacity; fails outside `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> TrellisResult<Self> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(TrellisError::validation(format!(
                "alpha must be in [0, 1], got {alpha}"
            )));
        }
        Ok(Self { alpha, ..self })
    }

    /// Mark hidden or visible.
    pub fn hidden(self, is_hidden: bool) -> Self {
        Self { is_hidden, ..self }
    }

    /// Re-express these attributes in the coordinate space `ancestor` lives in.
    pub fn within(&self, ancestor: &LayoutAttributes) -> Self {
        Self {
            frame: self.frame + ancestor.frame.origin().to_vec2(),
            transform: ancestor.transform * self.transform,
            alpha: self.alpha * ancestor.alpha,
            is_hidden: self.is_hidden || ancestor.is_hidden,
        }
    }
}

impl Default for LayoutAttributes {
    fn default() -> Self {
        Self::new(Rect::ZERO)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/attributes.rs"]
mod tests;
