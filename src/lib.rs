//! Trellis is a layout and measurement engine for trees of composable elements.
//!
//! Every [`Element`] exposes one [`ElementContent`]: either a leaf with an intrinsic
//! or computed size, or a list of children placed by a pluggable [`Layout`]. The
//! engine runs two passes:
//!
//! - measure: a bottom-up query of the size content wants under a [`SizeConstraint`]
//! - layout: a top-down assignment of [`LayoutAttributes`] to every child
//!
//! Expensive leaf measurements can be memoized with a [`MeasurementCachingKey`];
//! cached results are keyed by kind, input token, constraint and [`Environment`].
//! Trees can also be described as JSON [`TreeDocument`]s and inspected with the
//! `trellis` CLI.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod constraint;
pub(crate) mod content;
pub(crate) mod document;
pub(crate) mod element;
pub(crate) mod environment;
pub(crate) mod layout;

pub use crate::foundation::core::{Affine, Insets, Point, Rect, Size, Vec2};
pub use crate::foundation::error::{TrellisError, TrellisResult};

pub use crate::constraint::size_constraint::{AxisConstraint, SizeConstraint};
pub use crate::content::cache::{CacheStats, MeasurementCache, MeasurementCachingKey};
pub use crate::content::element_content::{ChildLayout, ElementContent, ElementContentBuilder};
pub use crate::document::schema::{
    BoundsDef, FramedChildDef, InsetsDef, NodeDef, StackChildDef, TreeDocument,
};
pub use crate::element::builtin::{
    Aligned, AspectRatio, ConstrainedSize, FrameGroup, Inset, Overlay, Spacer, Stack,
};
pub use crate::element::node::{Element, ViewDescription};
pub use crate::element::tree::{ElementTree, LayoutResultNode, layout_tree};
pub use crate::environment::values::{Environment, EnvironmentKey};
pub use crate::layout::aligned::AlignedLayout;
pub use crate::layout::alignment::{Alignment, AxisAlignment};
pub use crate::layout::attributes::LayoutAttributes;
pub use crate::layout::constrained::ConstrainedLayout;
pub use crate::layout::frame::FrameLayout;
pub use crate::layout::inset::InsetLayout;
pub use crate::layout::overlay::OverlayLayout;
pub use crate::layout::protocol::{Layout, LayoutItem, Measurable};
pub use crate::layout::stack::{Axis, StackLayout, StackTraits};
