use super::*;

#[test]
fn hex_forms() {
    assert_eq!(Rgba8::parse("#1b4278").unwrap(), Rgba8::rgba(0x1b, 0x42, 0x78, 255));
    assert_eq!(Rgba8::parse("#FFF").unwrap(), Rgba8::WHITE);
    assert_eq!(
        Rgba8::parse("#00000080").unwrap(),
        Rgba8::rgba(0, 0, 0, 0x80)
    );
    assert_eq!(Rgba8::parse("#f008").unwrap(), Rgba8::rgba(255, 0, 0, 0x88));
}

#[test]
fn rgba_function_forms() {
    assert_eq!(
        Rgba8::parse("rgba(255,255,255,0.67)").unwrap(),
        Rgba8::rgba(255, 255, 255, 171)
    );
    assert_eq!(
        Rgba8::parse("rgba(15, 23, 42, 0.85)").unwrap(),
        Rgba8::rgba(15, 23, 42, 217)
    );
    assert_eq!(
        Rgba8::parse("rgb(10 20 30 / 50%)").unwrap(),
        Rgba8::rgba(10, 20, 30, 128)
    );
    assert_eq!(Rgba8::parse("RGB(1, 2, 3)").unwrap(), Rgba8::rgba(1, 2, 3, 255));
}

#[test]
fn keywords_and_errors() {
    assert_eq!(Rgba8::parse("transparent").unwrap(), Rgba8::TRANSPARENT);
    assert!(Rgba8::parse("#12345").is_err());
    assert!(Rgba8::parse("#zzzzzz").is_err());
    assert!(Rgba8::parse("rgba(1,2)").is_err());
    assert!(Rgba8::parse("hsl(0, 0%, 0%)").is_err());
    assert_eq!(Rgba8::parse_or("nope", Rgba8::BLACK), Rgba8::BLACK);
}

#[test]
fn premul_scales_rgb() {
    assert_eq!(Rgba8::rgba(255, 255, 255, 171).to_premul(), [171, 171, 171, 171]);
    assert_eq!(Rgba8::WHITE.to_premul(), [255, 255, 255, 255]);
}
