use super::*;
use crate::layout::alignment::AxisAlignment;

#[test]
fn centered_child_sits_in_the_middle() {
    let fixed = |_: SizeConstraint| Size::new(20.0, 10.0);
    let items = [LayoutItem {
        traits: &(),
        content: &fixed,
    }];
    let layout = AlignedLayout::centered();
    assert_eq!(
        layout.measure(SizeConstraint::UNCONSTRAINED, &items),
        Size::new(20.0, 10.0)
    );
    let placed = layout.layout(Size::new(100.0, 50.0), &items);
    assert_eq!(placed[0].frame, Rect::new(40.0, 20.0, 60.0, 30.0));
}

#[test]
fn measured_size_places_child_flush() {
    let fixed = |_: SizeConstraint| Size::new(20.0, 10.0);
    let items = [LayoutItem {
        traits: &(),
        content: &fixed,
    }];
    let layout = AlignedLayout::new(Alignment::BOTTOM_END);
    let size = layout.measure(SizeConstraint::UNCONSTRAINED, &items);
    let placed = layout.layout(size, &items);
    assert_eq!(placed[0].frame, Rect::new(0.0, 0.0, 20.0, 10.0));
}

#[test]
fn mixed_axes_fill_and_end() {
    let fixed = |_: SizeConstraint| Size::new(20.0, 10.0);
    let items = [LayoutItem {
        traits: &(),
        content: &fixed,
    }];
    let layout = AlignedLayout::new(Alignment::new(AxisAlignment::Fill, AxisAlignment::End));
    let placed = layout.layout(Size::new(100.0, 50.0), &items);
    assert_eq!(placed[0].frame, Rect::new(0.0, 40.0, 100.0, 50.0));
}
