use super::*;

#[test]
fn clamp_keeps_crop_inside_unit_square() {
    let c = CropRect {
        x: 0.8,
        y: -0.2,
        w: 0.5,
        h: 2.0,
        rotate_deg: RotateDeg::R90,
    }
    .clamped();
    assert_eq!(c.x, 0.8);
    assert_eq!(c.y, 0.0);
    assert!((c.w - 0.2).abs() < 1e-12);
    assert_eq!(c.h, 1.0);
    assert_eq!(c.rotate_deg, RotateDeg::R90);
}

#[test]
fn clamp_enforces_minimum_extent_and_edge_case() {
    let tiny = CropRect {
        x: 0.0,
        y: 0.0,
        w: 0.0,
        h: -1.0,
        rotate_deg: RotateDeg::R0,
    }
    .clamped();
    assert_eq!(tiny.w, 0.001);
    assert_eq!(tiny.h, 0.001);

    // A crop starting on the right edge keeps zero width.
    let edge = CropRect {
        x: 1.0,
        ..CropRect::FULL
    }
    .clamped();
    assert_eq!(edge.w, 0.0);

    let nan = CropRect {
        x: f64::NAN,
        ..CropRect::FULL
    }
    .clamped();
    assert_eq!(nan.x, 0.0);
}

#[test]
fn rotate_deg_parses_leniently() {
    let parse = |json: &str| serde_json::from_str::<RotateDeg>(json).unwrap();
    assert_eq!(parse("90"), RotateDeg::R90);
    assert_eq!(parse("\"180\""), RotateDeg::R180);
    assert_eq!(parse("270.0"), RotateDeg::R270);
    assert_eq!(parse("45"), RotateDeg::R0);
    assert_eq!(parse("\"sideways\""), RotateDeg::R0);
    assert_eq!(parse("null"), RotateDeg::R0);
    assert_eq!(serde_json::to_string(&RotateDeg::R270).unwrap(), "270");
}

#[test]
fn crop_wire_format_is_camel_case() {
    let c: CropRect =
        serde_json::from_str(r#"{"x":0.1,"y":0.2,"w":0.5,"h":0.6,"rotateDeg":"90"}"#).unwrap();
    assert_eq!(c.rotate_deg, RotateDeg::R90);
    let c: CropRect = serde_json::from_str(r#"{"x":0,"y":0,"w":1,"h":1}"#).unwrap();
    assert_eq!(c, CropRect::FULL);
}

#[test]
fn source_rect_and_output_size() {
    let c = CropRect {
        x: 0.25,
        y: 0.0,
        w: 0.5,
        h: 1.0,
        rotate_deg: RotateDeg::R0,
    };
    assert_eq!(c.source_rect(40, 20), Rect::new(10.0, 0.0, 30.0, 20.0));
    assert_eq!(c.output_size(40, 20), (20, 20));

    let sliver = CropRect {
        w: 0.001,
        h: 0.001,
        ..CropRect::FULL
    };
    assert_eq!(sliver.output_size(40, 20), (1, 1));
}
