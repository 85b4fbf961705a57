use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use crate::{
    foundation::error::{TrellisError, TrellisResult},
    layout::alignment::{Alignment, AxisAlignment},
    layout::stack::Axis,
};

/// JSON description of an element tree plus the environment to measure it in.
///
/// This is the human-edited boundary format; [`TreeDocument::into_element`]
/// validates it and builds the runtime elements.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeDocument {
    /// Root node.
    pub root: NodeDef,
    /// Raw environment values, keyed by slot name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub environment: BTreeMap<String, serde_json::Value>,
}

impl TreeDocument {
    /// Parse a document from a JSON string.
    pub fn from_json(s: &str) -> TrellisResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| TrellisError::validation(format!("parse tree document JSON: {e}")))
    }

    /// Parse a document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TrellisResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| TrellisError::validation(format!("parse tree document JSON: {e}")))
    }

    /// Parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TrellisResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TrellisError::validation(format!("open tree document '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty-printed JSON form.
    pub fn to_json_pretty(&self) -> TrellisResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One node of a [`TreeDocument`], tagged by `"type"`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum NodeDef {
    /// Fixed-size leaf.
    #[serde(alias = "fixed")]
    Spacer {
        /// Width in points.
        width: f64,
        /// Height in points.
        height: f64,
    },
    /// Leaf keeping `ratio` = width / height.
    AspectRatio {
        /// Positive ratio.
        ratio: f64,
    },
    /// Children at absolute frames.
    Frame {
        /// Framed children.
        #[serde(default)]
        children: Vec<FramedChildDef>,
    },
    /// Row or column.
    Stack {
        /// Direction children flow in.
        #[serde(default)]
        axis: Axis,
        /// Gap between children.
        #[serde(default)]
        spacing: f64,
        /// Run placement along the axis.
        #[serde(default)]
        main_alignment: AxisAlignment,
        /// Child placement across the axis.
        #[serde(default)]
        cross_alignment: AxisAlignment,
        /// Stack children.
        #[serde(default)]
        children: Vec<StackChildDef>,
    },
    /// Children layered over each other.
    Overlay {
        /// Layers, bottom first.
        #[serde(default)]
        children: Vec<NodeDef>,
    },
    /// Padding around one child.
    Inset {
        /// Padding per edge.
        #[serde(default)]
        insets: InsetsDef,
        /// Padded child.
        child: Box<NodeDef>,
    },
    /// One child positioned at its natural size.
    Aligned {
        /// Child placement.
        #[serde(default = "centered")]
        alignment: Alignment,
        /// Aligned child.
        child: Box<NodeDef>,
    },
    /// One child with narrowed size bounds.
    Constrained {
        /// Width bounds; unconstrained when absent.
        #[serde(default)]
        width: Option<BoundsDef>,
        /// Height bounds; unconstrained when absent.
        #[serde(default)]
        height: Option<BoundsDef>,
        /// Constrained child.
        child: Box<NodeDef>,
    },
}

fn centered() -> Alignment {
    Alignment::CENTER
}

/// Child of a `frame` node.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FramedChildDef {
    /// `[x, y, width, height]` in the parent's space.
    pub frame: [f64; 4],
    /// The child itself.
    pub node: NodeDef,
}

/// Child of a `stack` node.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StackChildDef {
    /// Surplus share; defaults to 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grow: Option<f64>,
    /// Deficit share; defaults to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shrink: Option<f64>,
    /// The child itself.
    pub node: NodeDef,
}

/// Per-edge padding; missing edges are zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InsetsDef {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
}

/// Bounds along one axis: either `exactly`, or a `min`/`max` range.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoundsDef {
    /// Exact extent; excludes `min` and `max`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exactly: Option<f64>,
    /// Lower bound; 0 when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper bound; unbounded when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[cfg(test)]
#[path = "../../tests/unit/document/schema.rs"]
mod tests;
