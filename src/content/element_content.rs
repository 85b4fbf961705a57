use std::{fmt, rc::Rc};

use crate::{
    constraint::size_constraint::SizeConstraint,
    content::cache::MeasurementCachingKey,
    element::node::Element,
    environment::values::Environment,
    foundation::core::Size,
    layout::attributes::LayoutAttributes,
    layout::overlay::OverlayLayout,
    layout::protocol::{Layout, LayoutItem, Measurable},
};

/// The measurable, layoutable body of an element.
///
/// Either a leaf (fixed intrinsic size or a measurement function, optionally
/// cached) or a composite of children placed by a [`Layout`]. Content is
/// immutable once built; children are added through [`ElementContentBuilder`].
pub struct ElementContent {
    storage: Box<dyn ContentStorage>,
}

/// One child placed by [`ElementContent::perform_layout`].
pub struct ChildLayout<'a> {
    /// The child element.
    pub element: &'a Rc<dyn Element>,
    /// The child's content, built once when the child was added.
    pub content: &'a ElementContent,
    /// Placement in the parent's coordinate space.
    pub attributes: LayoutAttributes,
}

impl fmt::Debug for ChildLayout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildLayout")
            .field("element", &self.element.name())
            .field("attributes", &self.attributes)
            .finish()
    }
}

trait ContentStorage {
    fn child_count(&self) -> usize;

    fn measure(&self, constraint: SizeConstraint, environment: &Environment) -> Size;

    fn perform_layout<'a>(&'a self, size: Size, environment: &Environment) -> Vec<ChildLayout<'a>>;
}

impl ElementContent {
    /// Start building composite content placed by `layout`.
    pub fn builder<L: Layout>(layout: L) -> ElementContentBuilder<L> {
        ElementContentBuilder::new(layout)
    }

    /// Build composite content by running `build` against a fresh builder.
    pub fn with_layout<L: Layout>(
        layout: L,
        build: impl FnOnce(&mut ElementContentBuilder<L>),
    ) -> Self {
        let mut builder = ElementContentBuilder::new(layout);
        build(&mut builder);
        builder.build()
    }

    /// Content with a single child filling it.
    pub fn wrapping(element: impl Element + 'static) -> Self {
        Self::with_layout(OverlayLayout, |b| {
            b.add_child(element);
        })
    }

    /// Leaf that always measures to `size`.
    pub fn intrinsic_size(size: Size) -> Self {
        Self::leaf(LeafMeasure::Fixed(size), None)
    }

    /// Leaf measured by `measure` on every request.
    pub fn measuring(measure: impl Fn(SizeConstraint) -> Size + 'static) -> Self {
        Self::leaf(LeafMeasure::Constraint(Box::new(measure)), None)
    }

    /// Leaf measured by `measure`, memoized under `key`.
    ///
    /// Results live in the [`Environment::measurement_cache`] of the measuring
    /// traversal, so separately built content with an equal key shares them.
    pub fn measuring_cached(
        key: MeasurementCachingKey,
        measure: impl Fn(SizeConstraint) -> Size + 'static,
    ) -> Self {
        Self::leaf(LeafMeasure::Constraint(Box::new(measure)), Some(key))
    }

    /// Leaf whose measurement reads the environment.
    pub fn measuring_with_environment(
        measure: impl Fn(SizeConstraint, &Environment) -> Size + 'static,
    ) -> Self {
        Self::leaf(LeafMeasure::Environment(Box::new(measure)), None)
    }

    /// Leaf whose measurement reads the environment, memoized under `key`.
    pub fn measuring_with_environment_cached(
        key: MeasurementCachingKey,
        measure: impl Fn(SizeConstraint, &Environment) -> Size + 'static,
    ) -> Self {
        Self::leaf(LeafMeasure::Environment(Box::new(measure)), Some(key))
    }

    fn leaf(measure: LeafMeasure, key: Option<MeasurementCachingKey>) -> Self {
        Self {
            storage: Box::new(Leaf { measure, key }),
        }
    }

    /// Size of this content under `constraint`.
    pub fn measure(&self, constraint: SizeConstraint, environment: &Environment) -> Size {
        self.storage.measure(constraint, environment)
    }

    /// Number of direct children; zero for leaves.
    pub fn child_count(&self) -> usize {
        self.storage.child_count()
    }

    /// Place the children of a node laid out at `attributes`.
    ///
    /// Returns one entry per child in insertion order, with frames relative to
    /// this node's bounds.
    pub fn perform_layout(
        &self,
        attributes: &LayoutAttributes,
        environment: &Environment,
    ) -> Vec<ChildLayout<'_>> {
        self.storage.perform_layout(attributes.size(), environment)
    }
}

impl fmt::Debug for ElementContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementContent")
            .field("child_count", &self.child_count())
            .finish_non_exhaustive()
    }
}

/// Open phase of composite content: children can still be added.
///
/// Consumed by [`build`](ElementContentBuilder::build), after which the child
/// list is fixed.
pub struct ElementContentBuilder<L: Layout> {
    layout: L,
    children: Vec<Child<L::Traits>>,
}

impl<L: Layout> ElementContentBuilder<L> {
    /// Empty builder for `layout`.
    pub fn new(layout: L) -> Self {
        Self {
            layout,
            children: Vec::new(),
        }
    }

    /// Append `element` with explicit `traits`.
    pub fn add(&mut self, traits: L::Traits, element: impl Element + 'static) -> &mut Self {
        self.add_shared(traits, Rc::new(element))
    }

    /// Append `element` with the layout's default traits.
    pub fn add_child(&mut self, element: impl Element + 'static) -> &mut Self {
        self.add(L::default_traits(), element)
    }

    /// Append an already shared element.
    pub fn add_shared(&mut self, traits: L::Traits, element: Rc<dyn Element>) -> &mut Self {
        let content = element.content();
        self.children.push(Child {
            traits,
            element,
            content,
        });
        self
    }

    /// Number of children added so far.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True if no children were added.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Freeze into immutable content.
    pub fn build(self) -> ElementContent {
        ElementContent {
            storage: Box::new(Composite {
                layout: self.layout,
                children: self.children,
            }),
        }
    }
}

impl<L: Layout> From<ElementContentBuilder<L>> for ElementContent {
    fn from(builder: ElementContentBuilder<L>) -> Self {
        builder.build()
    }
}

struct Child<T> {
    traits: T,
    element: Rc<dyn Element>,
    content: ElementContent,
}

/// Child content with the traversal's environment attached.
struct BoundContent<'a> {
    content: &'a ElementContent,
    environment: &'a Environment,
}

impl Measurable for BoundContent<'_> {
    fn measure(&self, constraint: SizeConstraint) -> Size {
        self.content.measure(constraint, self.environment)
    }
}

struct Composite<L: Layout> {
    layout: L,
    children: Vec<Child<L::Traits>>,
}

impl<L: Layout> Composite<L> {
    fn with_items<R>(
        &self,
        environment: &Environment,
        f: impl FnOnce(&[LayoutItem<'_, L::Traits>]) -> R,
    ) -> R {
        let bound: Vec<BoundContent<'_>> = self
            .children
            .iter()
            .map(|child| BoundContent {
                content: &child.content,
                environment,
            })
            .collect();
        let items: Vec<LayoutItem<'_, L::Traits>> = self
            .children
            .iter()
            .zip(&bound)
            .map(|(child, content)| LayoutItem {
                traits: &child.traits,
                content,
            })
            .collect();
        f(&items)
    }
}

impl<L: Layout> ContentStorage for Composite<L> {
    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn measure(&self, constraint: SizeConstraint, environment: &Environment) -> Size {
        self.with_items(environment, |items| self.layout.measure(constraint, items))
    }

    fn perform_layout<'a>(&'a self, size: Size, environment: &Environment) -> Vec<ChildLayout<'a>> {
        let placements = self.with_items(environment, |items| self.layout.layout(size, items));
        if placements.len() != self.children.len() {
            tracing::warn!(
                expected = self.children.len(),
                got = placements.len(),
                "layout returned a mismatched number of placements"
            );
        }
        self.children
            .iter()
            .zip(placements)
            .map(|(child, attributes)| ChildLayout {
                element: &child.element,
                content: &child.content,
                attributes,
            })
            .collect()
    }
}

type ConstraintMeasure = Box<dyn Fn(SizeConstraint) -> Size>;
type EnvironmentMeasure = Box<dyn Fn(SizeConstraint, &Environment) -> Size>;

enum LeafMeasure {
    Fixed(Size),
    Constraint(ConstraintMeasure),
    Environment(EnvironmentMeasure),
}

struct Leaf {
    measure: LeafMeasure,
    key: Option<MeasurementCachingKey>,
}

impl Leaf {
    fn compute(&self, constraint: SizeConstraint, environment: &Environment) -> Size {
        match &self.measure {
            LeafMeasure::Fixed(size) => *size,
            LeafMeasure::Constraint(f) => f(constraint),
            LeafMeasure::Environment(f) => f(constraint, environment),
        }
    }
}

impl ContentStorage for Leaf {
    fn child_count(&self) -> usize {
        0
    }

    fn measure(&self, constraint: SizeConstraint, environment: &Environment) -> Size {
        match &self.key {
            Some(key) => environment.measurement_cache().cached_measure(
                key,
                constraint,
                environment,
                || self.compute(constraint, environment),
            ),
            None => self.compute(constraint, environment),
        }
    }

    fn perform_layout<'a>(&'a self, _size: Size, _environment: &Environment) -> Vec<ChildLayout<'a>> {
        Vec::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/element_content.rs"]
mod tests;
