use std::rc::Rc;

use crate::{
    constraint::size_constraint::AxisConstraint,
    document::schema::{BoundsDef, InsetsDef, NodeDef, TreeDocument},
    element::builtin::{
        Aligned, AspectRatio, ConstrainedSize, FrameGroup, Inset, Overlay, Spacer, Stack,
    },
    element::node::Element,
    environment::values::Environment,
    foundation::core::{Insets, Rect},
    foundation::error::{TrellisError, TrellisResult},
    layout::stack::{StackLayout, StackTraits},
};

impl TreeDocument {
    /// Validate the document and build its element tree.
    #[tracing::instrument(skip(self))]
    pub fn into_element(&self) -> TrellisResult<Rc<dyn Element>> {
        build_node(&self.root, "root")
    }

    /// Environment described by the document.
    pub fn environment(&self) -> Environment {
        Environment::from_values(self.environment.clone())
    }
}

fn build_node(node: &NodeDef, path: &str) -> TrellisResult<Rc<dyn Element>> {
    let element: Rc<dyn Element> = match node {
        NodeDef::Spacer { width, height } => {
            non_negative(*width, path, "width")?;
            non_negative(*height, path, "height")?;
            Rc::new(Spacer::new(*width, *height))
        }
        NodeDef::AspectRatio { ratio } => {
            if !ratio.is_finite() || *ratio <= 0.0 {
                return Err(TrellisError::validation(format!(
                    "{path}.ratio must be finite and > 0, got {ratio}"
                )));
            }
            Rc::new(AspectRatio::new(*ratio))
        }
        NodeDef::Frame { children } => {
            let mut group = FrameGroup::new();
            for (i, child) in children.iter().enumerate() {
                let at = format!("{path}.children[{i}]");
                let [x, y, w, h] = child.frame;
                finite(x, &at, "frame.x")?;
                finite(y, &at, "frame.y")?;
                non_negative(w, &at, "frame.width")?;
                non_negative(h, &at, "frame.height")?;
                let frame = Rect::new(x, y, x + w, y + h);
                group = group.shared_child(frame, build_node(&child.node, &at)?);
            }
            Rc::new(group)
        }
        NodeDef::Stack {
            axis,
            spacing,
            main_alignment,
            cross_alignment,
            children,
        } => {
            non_negative(*spacing, path, "spacing")?;
            let layout = StackLayout::new(*axis)
                .with_spacing(*spacing)
                .with_main_alignment(*main_alignment)
                .with_cross_alignment(*cross_alignment);
            let mut stack = Stack::new(*axis).with_layout(layout);
            for (i, child) in children.iter().enumerate() {
                let at = format!("{path}.children[{i}]");
                let defaults = StackTraits::default();
                let traits = StackTraits {
                    grow: child.grow.unwrap_or(defaults.grow),
                    shrink: child.shrink.unwrap_or(defaults.shrink),
                };
                non_negative(traits.grow, &at, "grow")?;
                non_negative(traits.shrink, &at, "shrink")?;
                stack = stack.shared_child(traits, build_node(&child.node, &at)?);
            }
            Rc::new(stack)
        }
        NodeDef::Overlay { children } => {
            let mut overlay = Overlay::new();
            for (i, child) in children.iter().enumerate() {
                overlay = overlay.shared_child(build_node(child, &format!("{path}.children[{i}]"))?);
            }
            Rc::new(overlay)
        }
        NodeDef::Inset { insets, child } => {
            let insets = build_insets(insets, path)?;
            Rc::new(Inset::shared(insets, build_node(child, &format!("{path}.child"))?))
        }
        NodeDef::Aligned { alignment, child } => Rc::new(Aligned::shared(
            *alignment,
            build_node(child, &format!("{path}.child"))?,
        )),
        NodeDef::Constrained {
            width,
            height,
            child,
        } => {
            let width = build_bounds(width.as_ref(), path, "width")?;
            let height = build_bounds(height.as_ref(), path, "height")?;
            Rc::new(ConstrainedSize::shared(
                width,
                height,
                build_node(child, &format!("{path}.child"))?,
            ))
        }
    };
    Ok(element)
}

fn build_insets(def: &InsetsDef, path: &str) -> TrellisResult<Insets> {
    for (edge, value) in [
        ("left", def.left),
        ("top", def.top),
        ("right", def.right),
        ("bottom", def.bottom),
    ] {
        non_negative(value, path, &format!("insets.{edge}"))?;
    }
    Ok(Insets::new(def.left, def.top, def.right, def.bottom))
}

fn build_bounds(def: Option<&BoundsDef>, path: &str, field: &str) -> TrellisResult<AxisConstraint> {
    let Some(def) = def else {
        return Ok(AxisConstraint::Unconstrained);
    };
    match (def.exactly, def.min, def.max) {
        (Some(v), None, None) => {
            non_negative(v, path, field)?;
            Ok(AxisConstraint::exactly(v))
        }
        (Some(_), _, _) => Err(TrellisError::validation(format!(
            "{path}.{field}: 'exactly' cannot be combined with 'min'/'max'"
        ))),
        (None, min, max) => AxisConstraint::between(min.unwrap_or(0.0), max.unwrap_or(f64::INFINITY))
            .map_err(|e| TrellisError::validation(format!("{path}.{field}: {e}"))),
    }
}

fn finite(value: f64, path: &str, field: &str) -> TrellisResult<()> {
    if !value.is_finite() {
        return Err(TrellisError::validation(format!(
            "{path}.{field} must be finite, got {value}"
        )));
    }
    Ok(())
}

fn non_negative(value: f64, path: &str, field: &str) -> TrellisResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(TrellisError::validation(format!(
            "{path}.{field} must be finite and >= 0, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/document/build.rs"]
mod tests;
