use super::*;

#[test]
fn source_in_keeps_only_alpha() {
    assert_eq!(source_in([10, 20, 30, 255], [200, 0, 0, 255]), [200, 0, 0, 255]);
    assert_eq!(source_in([10, 20, 30, 0], [200, 0, 0, 255]), [0, 0, 0, 0]);
    assert_eq!(source_in([0, 0, 0, 128], [255, 255, 255, 255]), [128, 128, 128, 128]);
}

#[test]
fn tint_turns_image_into_silhouette() {
    let mut buf = vec![50, 60, 70, 255, 0, 0, 0, 0, 20, 20, 20, 64];
    tint_in_place(&mut buf, Rgba8::rgba(0x1b, 0x42, 0x78, 255));
    assert_eq!(&buf[0..4], &[0x1b, 0x42, 0x78, 255]);
    assert_eq!(&buf[4..8], &[0, 0, 0, 0]);
    assert_eq!(buf[11], 64);
}

#[test]
fn gradient_endpoints_match_stops() {
    let start = Rgba8::rgba(15, 23, 42, 0);
    let end = Rgba8::rgba(15, 23, 42, 217);
    let g = vertical_gradient(start, end, 2, 11);
    assert_eq!(g.len(), 2 * 11 * 4);
    assert_eq!(&g[0..4], &[0, 0, 0, 0]);
    let last = &g[g.len() - 4..];
    assert_eq!(last, &end.to_premul());
    // Rows are uniform.
    assert_eq!(&g[0..4], &g[4..8]);
    // Alpha grows monotonically downward.
    let alphas: Vec<u8> = g.chunks_exact(8).map(|row| row[3]).collect();
    assert!(alphas.windows(2).all(|w| w[0] <= w[1]));
}
