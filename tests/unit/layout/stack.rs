use super::*;

fn fixed(w: f64, h: f64) -> impl Fn(SizeConstraint) -> Size {
    move |_| Size::new(w, h)
}

#[test]
fn row_measures_sum_plus_spacing_and_max_cross() {
    let a = fixed(10.0, 5.0);
    let b = fixed(20.0, 15.0);
    let t = StackTraits::default();
    let items = [
        LayoutItem {
            traits: &t,
            content: &a,
        },
        LayoutItem {
            traits: &t,
            content: &b,
        },
    ];
    let row = StackLayout::row().with_spacing(4.0);
    let size = row.measure(SizeConstraint::UNCONSTRAINED, &items);
    assert_eq!(size, Size::new(34.0, 15.0));

    let placed = row.layout(size, &items);
    assert_eq!(placed[0].frame, Rect::new(0.0, 0.0, 10.0, 5.0));
    assert_eq!(placed[1].frame, Rect::new(14.0, 0.0, 34.0, 15.0));
}

#[test]
fn column_swaps_axes() {
    let a = fixed(10.0, 5.0);
    let b = fixed(20.0, 15.0);
    let t = StackTraits::default();
    let items = [
        LayoutItem {
            traits: &t,
            content: &a,
        },
        LayoutItem {
            traits: &t,
            content: &b,
        },
    ];
    let column = StackLayout::column().with_cross_alignment(AxisAlignment::Center);
    let size = column.measure(SizeConstraint::UNCONSTRAINED, &items);
    assert_eq!(size, Size::new(20.0, 20.0));

    let placed = column.layout(size, &items);
    assert_eq!(placed[0].frame, Rect::new(5.0, 0.0, 15.0, 5.0));
    assert_eq!(placed[1].frame, Rect::new(0.0, 5.0, 20.0, 20.0));
}

#[test]
fn surplus_goes_to_growing_children_by_weight() {
    let a = fixed(10.0, 10.0);
    let b = fixed(10.0, 10.0);
    let c = fixed(10.0, 10.0);
    let rigid = StackTraits::fixed();
    let one = StackTraits::flexible(1.0);
    let three = StackTraits::flexible(3.0);
    let items = [
        LayoutItem {
            traits: &rigid,
            content: &a,
        },
        LayoutItem {
            traits: &one,
            content: &b,
        },
        LayoutItem {
            traits: &three,
            content: &c,
        },
    ];
    let placed = StackLayout::row().layout(Size::new(70.0, 10.0), &items);
    let widths: Vec<f64> = placed.iter().map(|a| a.frame.width()).collect();
    assert_eq!(widths, vec![10.0, 20.0, 40.0]);
    assert_eq!(placed[2].frame.x1, 70.0);
}

#[test]
fn surplus_without_growth_follows_main_alignment() {
    let a = fixed(10.0, 10.0);
    let t = StackTraits::default();
    let items = [LayoutItem {
        traits: &t,
        content: &a,
    }];
    let placed = StackLayout::row()
        .with_main_alignment(AxisAlignment::End)
        .layout(Size::new(50.0, 10.0), &items);
    assert_eq!(placed[0].frame, Rect::new(40.0, 0.0, 50.0, 10.0));
}

#[test]
fn deficit_shrinks_proportionally_to_natural_size() {
    let a = fixed(30.0, 10.0);
    let b = fixed(10.0, 10.0);
    let t = StackTraits::default();
    let items = [
        LayoutItem {
            traits: &t,
            content: &a,
        },
        LayoutItem {
            traits: &t,
            content: &b,
        },
    ];
    let row = StackLayout::row();
    let c = SizeConstraint::from_size(Size::new(20.0, 100.0));
    let size = row.measure(c, &items);
    assert_eq!(size, Size::new(20.0, 10.0));

    let placed = row.layout(size, &items);
    assert_eq!(placed[0].frame.width(), 15.0);
    assert_eq!(placed[1].frame.width(), 5.0);
    assert_eq!(placed[1].frame.x1, 20.0);
}

#[test]
fn empty_stack_is_zero() {
    let row = StackLayout::row().with_spacing(10.0);
    assert_eq!(row.measure(SizeConstraint::UNCONSTRAINED, &[]), Size::ZERO);
    assert!(row.layout(Size::new(10.0, 10.0), &[]).is_empty());
}

#[test]
fn cross_axis_bounds_reach_children() {
    let fill_height = |c: SizeConstraint| Size::new(10.0, c.height.maximum());
    let t = StackTraits::default();
    let items = [LayoutItem {
        traits: &t,
        content: &fill_height,
    }];
    let c = SizeConstraint::new(AxisConstraint::at_most(5.0), AxisConstraint::at_most(30.0));
    assert_eq!(StackLayout::row().measure(c, &items), Size::new(5.0, 30.0));
}

#[test]
fn measured_size_respects_exact_constraint() {
    let a = fixed(10.0, 5.0);
    let b = fixed(20.0, 15.0);
    let t = StackTraits::default();
    let items = [
        LayoutItem {
            traits: &t,
            content: &a,
        },
        LayoutItem {
            traits: &t,
            content: &b,
        },
    ];
    let exact = SizeConstraint::exactly(Size::new(100.0, 8.0));
    assert_eq!(StackLayout::row().measure(exact, &items), Size::new(100.0, 8.0));
    assert_eq!(StackLayout::column().measure(exact, &[]), Size::new(100.0, 8.0));
}
