use std::io::Cursor;

use super::*;
use crate::assets::loader::MemoryAssetLoader;
use crate::model::crop::RotateDeg;

fn png(w: u32, h: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_fn(w, h, |x, y| image::Rgba(f(x, y)));
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .unwrap();
    out
}

fn assert_close(got: [u8; 4], want: [u8; 4]) {
    let ok = got.iter().zip(want).all(|(&g, w)| g.abs_diff(w) <= 2);
    assert!(ok, "got {got:?}, want {want:?}");
}

fn renderer(loader: MemoryAssetLoader) -> CardRenderer {
    CardRenderer::with_font_book(FontBook::new(), Arc::new(loader))
}

#[test]
fn default_options_scan_system_fonts_with_bundled_icon() {
    let opts = RenderOptions::default();
    assert!(opts.system_fonts);
    assert!(opts.font_dirs.is_empty());
    assert!(opts.camera_icon_url.is_none());
}

#[test]
fn crop_render_has_crop_pixel_size() {
    let loader = MemoryAssetLoader::new().with("photo.png", png(40, 20, |_, _| [10, 20, 30, 255]));
    let crop = CropRect {
        x: 0.25,
        y: 0.0,
        w: 0.5,
        h: 1.0,
        rotate_deg: RotateDeg::R0,
    };
    let img = renderer(loader).render_crop("photo.png", crop).unwrap();
    assert_eq!((img.width, img.height), (20, 20));
    assert_close(img.pixel(10, 10), [10, 20, 30, 255]);
}

#[test]
fn crop_render_takes_the_requested_region() {
    // Left half red, right half blue; cropping the right half must be all blue.
    let loader = MemoryAssetLoader::new().with(
        "split.png",
        png(40, 10, |x, _| if x < 20 { [255, 0, 0, 255] } else { [0, 0, 255, 255] }),
    );
    let crop = CropRect {
        x: 0.5,
        y: 0.0,
        w: 0.5,
        h: 1.0,
        rotate_deg: RotateDeg::R0,
    };
    let img = renderer(loader).render_crop("split.png", crop).unwrap();
    assert_eq!((img.width, img.height), (20, 10));
    assert_close(img.pixel(10, 5), [0, 0, 255, 255]);
}

#[test]
fn crop_render_of_missing_photo_is_an_asset_error() {
    let err = renderer(MemoryAssetLoader::new())
        .render_crop("nope.png", CropRect::FULL)
        .unwrap_err();
    assert!(matches!(err, crate::CardError::Asset(_)), "{err}");
}

#[test]
fn error_card_is_solid_red_without_fonts() {
    let img = renderer(MemoryAssetLoader::new())
        .render_error_card()
        .unwrap();
    assert_eq!((img.width, img.height), (CARD_WIDTH, CARD_HEIGHT));
    assert_close(img.pixel(10, 10), [0xf8, 0x71, 0x71, 0xff]);
    assert_close(img.pixel(412, 542), [0xf8, 0x71, 0x71, 0xff]);
}

#[test]
fn render_meta_freezes_template_and_key() {
    let rendered = RenderedCard {
        image: CardImage {
            width: 1,
            height: 1,
            data: vec![0, 0, 0, 0],
        },
        template_id: "classic".into(),
        snapshot: TemplateSnapshot::default(),
    };
    let meta = rendered.render_meta("renders/abc.png", "2026-01-02T03:04:05Z");
    assert_eq!(meta.key, "renders/abc.png");
    assert_eq!(meta.template_id, "classic");
    assert_eq!(meta.rendered_at, "2026-01-02T03:04:05Z");
    assert_eq!(meta.template_snapshot, TemplateSnapshot::default());
}
