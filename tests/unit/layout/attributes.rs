use super::*;
use crate::foundation::core::Vec2;

#[test]
fn defaults_are_identity() {
    let a = LayoutAttributes::new(Rect::new(10.0, 20.0, 30.0, 60.0));
    assert_eq!(a.transform, Affine::IDENTITY);
    assert_eq!(a.alpha, 1.0);
    assert!(!a.is_hidden);
    assert_eq!(a.size(), Size::new(20.0, 40.0));
    assert_eq!(a.bounds(), Rect::new(0.0, 0.0, 20.0, 40.0));
    assert_eq!(a.center(), Point::new(20.0, 40.0));
}

#[test]
fn alpha_is_validated() {
    let a = LayoutAttributes::default();
    assert!(a.with_alpha(1.5).is_err());
    assert!(a.with_alpha(f64::NAN).is_err());
    assert_eq!(a.with_alpha(0.25).unwrap().alpha, 0.25);
}

#[test]
fn within_offsets_frame_and_combines_appearance() {
    let parent = LayoutAttributes::new(Rect::new(100.0, 50.0, 300.0, 150.0))
        .with_alpha(0.5)
        .unwrap()
        .with_transform(Affine::translate(Vec2::new(1.0, 0.0)));
    let child = LayoutAttributes::new(Rect::new(10.0, 10.0, 20.0, 20.0))
        .with_alpha(0.5)
        .unwrap()
        .hidden(false);

    let resolved = child.within(&parent);
    assert_eq!(resolved.frame, Rect::new(110.0, 60.0, 120.0, 70.0));
    assert_eq!(resolved.alpha, 0.25);
    assert_eq!(resolved.transform, Affine::translate(Vec2::new(1.0, 0.0)));
    assert!(!resolved.is_hidden);
    assert!(child.within(&parent.hidden(true)).is_hidden);
}
