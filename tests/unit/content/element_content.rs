use std::cell::Cell;

use super::*;
use crate::{
    content::cache::CacheStats,
    element::node::ViewDescription,
    environment::values::EnvironmentKey,
    foundation::core::Rect,
    layout::frame::FrameLayout,
    layout::stack::{StackLayout, StackTraits},
};

struct Fixed(Size);

impl Element for Fixed {
    fn content(&self) -> ElementContent {
        ElementContent::intrinsic_size(self.0)
    }

    fn backing_view_description(&self, _: Rect, _: Option<Rect>) -> Option<ViewDescription> {
        None
    }
}

struct Scale;

impl EnvironmentKey for Scale {
    const NAME: &'static str = "scale";
    type Value = f64;

    fn default_value() -> f64 {
        1.0
    }
}

fn counter() -> (Rc<Cell<u32>>, impl Fn(SizeConstraint) -> Size + 'static) {
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    let measure = move |_: SizeConstraint| {
        seen.set(seen.get() + 1);
        Size::new(7.0, 3.0)
    };
    (calls, measure)
}

#[test]
fn builder_counts_children_before_freezing() {
    let mut builder = ElementContent::builder(FrameLayout);
    assert!(builder.is_empty());
    builder
        .add(Rect::new(0.0, 0.0, 1.0, 1.0), Fixed(Size::ZERO))
        .add_child(Fixed(Size::ZERO));
    assert_eq!(builder.len(), 2);
    let content: ElementContent = builder.into();
    assert_eq!(content.child_count(), 2);
}

#[test]
fn with_layout_runs_the_closure_once() {
    let content = ElementContent::with_layout(StackLayout::row(), |b| {
        b.add(StackTraits::fixed(), Fixed(Size::new(5.0, 5.0)));
        b.add_child(Fixed(Size::new(5.0, 9.0)));
    });
    assert_eq!(content.child_count(), 2);
    assert_eq!(
        content.measure(SizeConstraint::UNCONSTRAINED, &Environment::empty()),
        Size::new(10.0, 9.0)
    );
}

#[test]
fn wrapping_fills_the_parent() {
    let content = ElementContent::wrapping(Fixed(Size::new(4.0, 6.0)));
    let env = Environment::empty();
    assert_eq!(content.measure(SizeConstraint::UNCONSTRAINED, &env), Size::new(4.0, 6.0));
    let placed = content.perform_layout(&LayoutAttributes::with_size(Size::new(40.0, 60.0)), &env);
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].attributes.frame, Rect::new(0.0, 0.0, 40.0, 60.0));
    assert_eq!(placed[0].element.name(), "Fixed");
}

#[test]
fn zero_intrinsic_size_measures_zero_everywhere() {
    let content = ElementContent::intrinsic_size(Size::ZERO);
    let env = Environment::empty();
    for constraint in [
        SizeConstraint::UNCONSTRAINED,
        SizeConstraint::from_size(Size::new(10.0, 10.0)),
        SizeConstraint::exactly(Size::new(3.0, 4.0)),
    ] {
        assert_eq!(content.measure(constraint, &env), Size::ZERO);
    }
    assert_eq!(content.child_count(), 0);
    assert!(env.measurement_cache().is_empty());
}

#[test]
fn uncached_leaf_recomputes_every_time() {
    let (calls, measure) = counter();
    let content = ElementContent::measuring(measure);
    let env = Environment::empty();
    for _ in 0..3 {
        assert_eq!(content.measure(SizeConstraint::UNCONSTRAINED, &env), Size::new(7.0, 3.0));
    }
    assert_eq!(calls.get(), 3);
}

#[test]
fn cached_leaf_computes_once_per_constraint() {
    let (calls, measure) = counter();
    let content = ElementContent::measuring_cached(MeasurementCachingKey::new("Label", "hi"), measure);
    let env = Environment::empty();
    for _ in 0..4 {
        content.measure(SizeConstraint::UNCONSTRAINED, &env);
    }
    assert_eq!(calls.get(), 1);

    content.measure(SizeConstraint::from_size(Size::new(2.0, 2.0)), &env);
    assert_eq!(calls.get(), 2);
    assert_eq!(env.measurement_cache().stats(), CacheStats { hits: 3, misses: 2 });
}

#[test]
fn equal_keys_share_results_and_new_tokens_recompute() {
    let calls = Rc::new(Cell::new(0));
    let env = Environment::empty();
    for text in ["a", "a", "b"] {
        let seen = Rc::clone(&calls);
        let content = ElementContent::measuring_cached(MeasurementCachingKey::new("Label", text), move |_| {
            seen.set(seen.get() + 1);
            Size::ZERO
        });
        content.measure(SizeConstraint::UNCONSTRAINED, &env);
        content.measure(SizeConstraint::UNCONSTRAINED, &env);
    }
    assert_eq!(calls.get(), 2);
}

#[test]
fn environment_leaf_reads_values_and_keys_the_cache() {
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    let content = ElementContent::measuring_with_environment_cached(
        MeasurementCachingKey::new("Glyph", 'x'),
        move |_, env| {
            seen.set(seen.get() + 1);
            let s = env.get::<Scale>();
            Size::new(10.0 * s, 10.0 * s)
        },
    );
    let plain = Environment::empty();
    let doubled = plain.with::<Scale>(2.0).unwrap();

    assert_eq!(content.measure(SizeConstraint::UNCONSTRAINED, &plain), Size::new(10.0, 10.0));
    assert_eq!(content.measure(SizeConstraint::UNCONSTRAINED, &doubled), Size::new(20.0, 20.0));
    assert_eq!(content.measure(SizeConstraint::UNCONSTRAINED, &doubled), Size::new(20.0, 20.0));
    assert_eq!(calls.get(), 2);

    let uncached = ElementContent::measuring_with_environment(|_, env| {
        Size::new(env.get::<Scale>(), 0.0)
    });
    assert_eq!(uncached.measure(SizeConstraint::UNCONSTRAINED, &doubled), Size::new(2.0, 0.0));
}

#[test]
fn child_caches_survive_between_measure_and_layout() {
    struct Counted(Rc<Cell<u32>>);

    impl Element for Counted {
        fn content(&self) -> ElementContent {
            let seen = Rc::clone(&self.0);
            ElementContent::measuring_cached(MeasurementCachingKey::new("Counted", ()), move |_| {
                seen.set(seen.get() + 1);
                Size::new(3.0, 3.0)
            })
        }

        fn backing_view_description(&self, _: Rect, _: Option<Rect>) -> Option<ViewDescription> {
            None
        }
    }

    let calls = Rc::new(Cell::new(0));
    let content = ElementContent::with_layout(StackLayout::column(), |b| {
        b.add_child(Counted(Rc::clone(&calls)));
    });
    let env = Environment::empty();
    let size = content.measure(SizeConstraint::UNCONSTRAINED, &env);
    content.perform_layout(&LayoutAttributes::with_size(size), &env);
    content.measure(SizeConstraint::UNCONSTRAINED, &env);
    // layout measures the child under a cross-axis bound, which is a new entry
    assert_eq!(calls.get(), 2);
}

#[test]
fn perform_layout_keeps_insertion_order() {
    let frames: Vec<Rect> = (0..6u32)
        .map(|i| {
            let x = f64::from(i) * 10.0;
            Rect::new(x, 0.0, x + 5.0, 5.0)
        })
        .collect();
    let content = ElementContent::with_layout(FrameLayout, |b| {
        for frame in &frames {
            b.add(*frame, Fixed(frame.size()));
        }
    });
    let placed = content.perform_layout(
        &LayoutAttributes::with_size(Size::new(55.0, 5.0)),
        &Environment::empty(),
    );
    let got: Vec<Rect> = placed.iter().map(|c| c.attributes.frame).collect();
    assert_eq!(got, frames);
    assert_eq!(placed[2].content.child_count(), 0);
    assert!(format!("{:?}", placed[0]).contains("Fixed"));
}

#[test]
fn fresh_content_of_one_element_hits_the_environment_cache() {
    struct Measured(Rc<Cell<u32>>);

    impl Element for Measured {
        fn content(&self) -> ElementContent {
            let seen = Rc::clone(&self.0);
            ElementContent::measuring_cached(
                MeasurementCachingKey::new("Measured", "element"),
                move |_| {
                    seen.set(seen.get() + 1);
                    Size::new(20.0, 20.0)
                },
            )
        }

        fn backing_view_description(&self, _: Rect, _: Option<Rect>) -> Option<ViewDescription> {
            None
        }
    }

    let env = Environment::empty();
    let calls = Rc::new(Cell::new(0));
    let element = Measured(Rc::clone(&calls));
    for _ in 0..3 {
        assert_eq!(
            element.content().measure(SizeConstraint::UNCONSTRAINED, &env),
            Size::new(20.0, 20.0)
        );
        assert_eq!(calls.get(), 1);
    }

    let isolated = env.with_fresh_measurement_cache();
    element.content().measure(SizeConstraint::UNCONSTRAINED, &isolated);
    assert_eq!(calls.get(), 2);
}
