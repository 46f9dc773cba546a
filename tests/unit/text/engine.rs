use super::*;

fn engine(roles: &[FontRole]) -> TextLayoutEngine {
    let mut book = FontBook::new();
    book.load_font_data(include_bytes!("../../fixtures/fonts/DejaVuSans.ttf").to_vec());
    TextLayoutEngine::new(&book, "sans-serif", roles)
}

#[test]
fn glyphs_advance_along_the_baseline() {
    let mut text = engine(&[FontRole::Medium]);
    let shaped = text
        .shape("WWWW", &TextStyle::new(FontRole::Medium, 50.0))
        .unwrap();

    assert_eq!(shaped.glyphs.len(), 4);
    assert_eq!(shaped.glyphs[0].x, 0.0);
    for pair in shaped.glyphs.windows(2) {
        let step = f64::from(pair[1].x - pair[0].x);
        assert!(step > 40.0, "glyphs overlap: {:?}", shaped.glyphs);
    }
    for g in &shaped.glyphs {
        assert!((f64::from(g.y) - shaped.baseline).abs() < 1e-3, "glyph off baseline: {g:?}");
    }
    assert!(shaped.baseline > 0.0);
    assert!(shaped.width > f64::from(shaped.glyphs[3].x) + 40.0);
}

#[test]
fn letter_spacing_widens_the_run() {
    let mut text = engine(&[FontRole::Medium]);
    let plain = TextStyle::new(FontRole::Medium, 20.0);
    let spaced = plain.spaced(5.0);
    let a = text.measure("KEEPER", &plain);
    let b = text.measure("KEEPER", &spaced);
    assert!((b - a - 30.0).abs() < 0.5, "plain {a}, spaced {b}");
}

#[test]
fn missing_role_shapes_nothing() {
    let mut text = engine(&[FontRole::Medium]);
    assert!(!text.has_face(FontRole::Bold));
    assert!(text.shape("7", &TextStyle::new(FontRole::Bold, 20.0)).is_none());
    assert_eq!(text.measure("7", &TextStyle::new(FontRole::Bold, 20.0)), 0.0);
}

#[test]
fn upright_face_stands_in_for_italic() {
    let mut text = engine(&[FontRole::MediumItalic]);
    let shaped = text
        .shape("Lopez", &TextStyle::new(FontRole::MediumItalic, 30.0))
        .unwrap();
    assert!(shaped.synthetic_italic);
    assert!(shaped.width > 0.0);
}
