use super::*;

#[test]
fn boxes_are_nested_and_centered() {
    assert_eq!(TRIM_BOX.w, 750.0);
    assert_eq!(TRIM_BOX.h, 1050.0);
    assert_eq!(SAFE_BOX.w, 675.0);
    assert_eq!(SAFE_BOX.h, 975.0);

    assert!(SAFE_BOX.x > TRIM_BOX.x && SAFE_BOX.right() < TRIM_BOX.right());
    assert!(SAFE_BOX.y > TRIM_BOX.y && SAFE_BOX.bottom() < TRIM_BOX.bottom());

    let w = f64::from(CARD_WIDTH);
    let h = f64::from(CARD_HEIGHT);
    assert_eq!(TRIM_BOX.x, w - TRIM_BOX.right());
    assert_eq!(TRIM_BOX.y, h - TRIM_BOX.bottom());
    assert_eq!(SAFE_BOX.x, w - SAFE_BOX.right());
}

#[test]
fn aspects_match_box_ratios() {
    assert!((CARD_ASPECT - 825.0 / 1125.0).abs() < 1e-12);
    assert!((TRIM_ASPECT - 750.0 / 1050.0).abs() < 1e-12);
}

#[test]
fn guide_percentages_are_rounded_and_symmetric() {
    let g = *GUIDE_PERCENTAGES;
    assert_eq!(g.trim.left, 4.545);
    assert_eq!(g.trim.top, 3.333);
    assert_eq!(g.trim.left, g.trim.right);
    assert_eq!(g.trim.top, g.trim.bottom);

    assert_eq!(g.safe.left, 9.091);
    assert_eq!(g.safe.top, 6.667);

    assert_eq!(g.safe_within_trim.left, 5.0);
    assert_eq!(g.safe_within_trim.top, 3.571);
    assert_eq!(g.safe_within_trim.right, 5.0);
    assert_eq!(g.safe_within_trim.bottom, 3.571);
}

#[test]
fn trim_window_snaps_inset_and_keeps_size() {
    assert_eq!(trim_window_px(), (37, 37, 750, 1050));
    let (x, y, w, h) = trim_window_px();
    assert!(x + w <= CARD_WIDTH);
    assert!(y + h <= CARD_HEIGHT);
}
