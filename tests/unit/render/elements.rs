use super::*;
use crate::layout::presets::USQC26_LAYOUT;

#[test]
fn rounded_rect_starts_after_corner_and_closes() {
    let path = rounded_rect_path(10.0, 20.0, 100.0, 50.0, 8.0);
    let els = path.elements();
    assert_eq!(els.first(), Some(&kurbo::PathEl::MoveTo(Point::new(18.0, 20.0))));
    assert_eq!(els.last(), Some(&kurbo::PathEl::ClosePath));
    let quads = els
        .iter()
        .filter(|e| matches!(e, kurbo::PathEl::QuadTo(..)))
        .count();
    assert_eq!(quads, 4);
    let bb = path.bounding_box();
    assert_eq!((bb.x0, bb.y0, bb.x1, bb.y1), (10.0, 20.0, 110.0, 70.0));
}

#[test]
fn frame_window_is_covered_twice_so_even_odd_leaves_it_open() {
    let layout = &*USQC26_LAYOUT;
    let path = frame_path(layout);
    let f = &layout.frame;
    let inside = Point::new(f.inner_x + f.inner_width / 2.0, f.inner_y + f.inner_height / 2.0);
    assert_eq!(path.winding(inside).abs(), 2);
    assert_eq!(path.winding(Point::new(2.0, 2.0)).abs(), 1);
}

#[test]
fn star_points_up_and_alternates_radii() {
    let path = star_path(50.0, 50.0, 10.0);
    let els = path.elements();
    assert_eq!(els.len(), 11);
    let kurbo::PathEl::MoveTo(tip) = els[0] else {
        panic!("star must start with a move");
    };
    assert!((tip.x - 50.0).abs() < 1e-9);
    assert!((tip.y - 40.0).abs() < 1e-9);
    let kurbo::PathEl::LineTo(inner) = els[1] else {
        panic!("expected a line to the first inner vertex");
    };
    let d = ((inner.x - 50.0).powi(2) + (inner.y - 50.0).powi(2)).sqrt();
    assert!((d - 4.0).abs() < 1e-9);
}

#[test]
fn logo_is_fit_inside_max_box_but_never_upscaled() {
    assert_eq!(logo_size(200.0, 100.0, 100.0, 100.0), (100.0, 50.0));
    assert_eq!(logo_size(20.0, 10.0, 100.0, 100.0), (20.0, 10.0));
    assert_eq!(logo_size(0.0, 10.0, 100.0, 100.0), (0.0, 0.0));
}

#[test]
fn inks_fall_back_when_palette_is_garbage() {
    let mut layout = USQC26_LAYOUT.clone();
    layout.palette.primary = "not-a-color".into();
    let inks = Inks::from_layout(&layout);
    assert_eq!(inks.primary, Rgba8::BLACK);
    assert_eq!(inks.white, Rgba8::WHITE);
}
