//! Painters for the individual card elements.
//!
//! Each function draws one element in card pixel space, reading positions and sizes from the
//! resolved [`CardLayout`]. Painters never fail on missing content: empty strings and absent
//! images simply draw less.

use kurbo::Shape;

use crate::assets::color::Rgba8;
use crate::assets::decode::PreparedImage;
use crate::foundation::core::{Affine, BezPath, CARD_HEIGHT, CARD_WIDTH, Point, Rect, TRIM_BOX};
use crate::foundation::error::CardResult;
use crate::layout::schema::{CardLayout, NameBox};
use crate::model::card::CardRarity;
use crate::model::crop::CropRect;
use crate::render::composite::{tint_in_place, vertical_gradient};
use crate::render::paint::{HAlign, Painter, VAlign, blit};
use crate::render::surface::{ImagePaint, render_surface};
use crate::template::model::TemplateTheme;
use crate::text::engine::TextStyle;
use crate::text::fonts::FontRole;
use crate::text::wrap::wrap_text;

/// Lines allowed in each angled name box.
const NAME_MAX_LINES: usize = 2;
/// Lines allowed in rare-card title and caption boxes.
const RARE_MAX_LINES: usize = 10;
/// Line pitch as a multiple of the font size.
const LINE_HEIGHT: f64 = 1.1;
const WATERMARK_SIZE: f64 = 240.0;
/// Vertical offset of the rarity glyph center from the bottom bar's `y`.
const RARITY_CENTER_DY: f64 = 13.0;
const CAMERA_FALLBACK_RADIUS: f64 = 2.0;
const STAR_POINTS: usize = 5;
const STAR_INNER_RATIO: f64 = 0.4;
/// Widest logo outline drawn, in pixels. The outline is stamped `(2s + 1)^2` times.
pub(crate) const MAX_LOGO_STROKE: f64 = 32.0;

fn canvas_rect() -> Rect {
    Rect::new(0.0, 0.0, f64::from(CARD_WIDTH), f64::from(CARD_HEIGHT))
}

/// Layout palette parsed once per render.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Inks {
    pub(crate) primary: Rgba8,
    pub(crate) secondary: Rgba8,
    pub(crate) white: Rgba8,
    pub(crate) number_overlay: Rgba8,
}

impl Inks {
    pub(crate) fn from_layout(layout: &CardLayout) -> Self {
        let p = &layout.palette;
        Self {
            primary: Rgba8::parse_or(&p.primary, Rgba8::BLACK),
            secondary: Rgba8::parse_or(&p.secondary, Rgba8::BLACK),
            white: Rgba8::parse_or(&p.white, Rgba8::WHITE),
            number_overlay: Rgba8::parse_or(&p.number_overlay, Rgba8::WHITE),
        }
    }
}

/// Subject photo, cropped and rotated about the center of `dest`.
pub(crate) fn draw_cropped_photo(
    p: &mut Painter<'_>,
    photo: &ImagePaint,
    crop: &CropRect,
    dest: Rect,
) {
    let src = crop.source_rect(photo.width as u32, photo.height as u32);
    p.with_transform(crop_rotation(crop, dest), |p| p.draw_image_region(photo, src, dest));
}

/// Rotation by the crop's quarter turns about the center of `dest`.
pub(crate) fn crop_rotation(crop: &CropRect, dest: Rect) -> Affine {
    let c = dest.center().to_vec2();
    Affine::translate(c) * Affine::rotate(crop.rotate_deg.radians()) * Affine::translate(-c)
}

pub(crate) fn draw_gradient(p: &mut Painter<'_>, theme: &TemplateTheme) -> CardResult<()> {
    let start = Rgba8::parse_or(&theme.gradient_start, Rgba8::TRANSPARENT);
    let end = Rgba8::parse_or(&theme.gradient_end, Rgba8::TRANSPARENT);
    // One column is enough: the blit stretches it across the card.
    let column = vertical_gradient(start, end, 1, CARD_HEIGHT);
    let paint = ImagePaint::from_premul(&column, 1, CARD_HEIGHT)?;
    p.draw_image(&paint, canvas_rect());
    Ok(())
}

/// Hairline around the trim box.
pub(crate) fn draw_borders(p: &mut Painter<'_>, theme: &TemplateTheme) {
    let color = Rgba8::parse_or(&theme.border, Rgba8::TRANSPARENT);
    p.stroke_rect(TRIM_BOX.to_rect(), 1.0, color);
}

pub(crate) fn draw_watermark(
    p: &mut Painter<'_>,
    jersey_number: &str,
    theme: &TemplateTheme,
) {
    let color = Rgba8::parse_or(&theme.watermark, Rgba8::TRANSPARENT);
    let style = TextStyle::new(FontRole::Bold, WATERMARK_SIZE);
    let center = canvas_rect().center();
    p.fill_text(jersey_number, &style, center, (HAlign::Center, VAlign::Middle), color);
}

/// Wrapped text for one box: the lines plus the widest line's advance.
struct Wrapped {
    lines: Vec<String>,
    width: f64,
}

fn wrap(p: &mut Painter<'_>, text: &str, style: TextStyle, max_width: f64, max_lines: usize) -> Wrapped {
    let lines = {
        let mut measure = p.measurer(style);
        wrap_text(&mut measure, text, max_width, max_lines)
    };
    let width = lines
        .iter()
        .map(|l| p.measure(l, &style))
        .fold(0.0, f64::max);
    Wrapped { lines, width }
}

impl Wrapped {
    fn extra_lines(&self) -> f64 {
        self.lines.len().saturating_sub(1) as f64
    }
}

/// A filled, bordered box with right-aligned outlined text lines.
struct TextBox<'t> {
    rect: Rect,
    fill: Rgba8,
    border: Rgba8,
    metrics: &'t NameBox,
    style: TextStyle,
    text_x: f64,
    text_stroke: Rgba8,
    text_fill: Rgba8,
}

impl TextBox<'_> {
    /// Draw the box, then each `(line, y)` with the outline under the fill.
    fn draw<'l>(&self, p: &mut Painter<'_>, lines: impl IntoIterator<Item = (&'l str, f64)>) {
        p.fill_rect(self.rect, self.fill);
        p.stroke_rect(self.rect, self.metrics.border_width, self.border);
        let align = (HAlign::Right, VAlign::Middle);
        for (line, y) in lines {
            let at = Point::new(self.text_x, y);
            p.stroke_text(line, &self.style, at, align, self.text_stroke, self.metrics.stroke_width);
            p.fill_text(line, &self.style, at, align, self.text_fill);
        }
    }
}

/// Two overlapping angled boxes: first name above (drawn first), last name below and on top.
///
/// Both boxes hang off the layout anchor and grow leftward with their text. The first-name box
/// keeps its bottom edge and grows upward; the last-name box keeps its top edge and grows down.
pub(crate) fn draw_name_boxes(
    p: &mut Painter<'_>,
    first_name: &str,
    last_name: &str,
    layout: &CardLayout,
    inks: &Inks,
) {
    let name = &layout.name;
    let pad = name.left_padding + name.right_padding + name.box_extension;

    let last_style = TextStyle::new(FontRole::MediumItalic, name.last_name_size)
        .spaced(name.letter_spacing.last_name);
    let last = wrap(p, &last_name.to_uppercase(), last_style, name.max_width, NAME_MAX_LINES);
    let last_lh = name.last_name_size * LINE_HEIGHT;
    let last_w = last.width + pad;
    let last_h = name.last_name_box.height + last.extra_lines() * last_lh;

    let first_style = TextStyle::new(FontRole::MediumItalic, name.first_name_size)
        .spaced(name.letter_spacing.first_name);
    let first = wrap(p, &first_name.to_uppercase(), first_style, name.max_width, NAME_MAX_LINES);
    let first_lh = name.first_name_size * LINE_HEIGHT;
    let first_w = first.width + pad;
    let first_h = name.first_name_box.height + first.extra_lines() * first_lh;

    let last_y = -name.last_name_box.height / 2.0;
    let first_y = last_y - first_h;

    let anchor = Affine::translate((name.anchor_x, name.anchor_y))
        * Affine::rotate(name.rotation.to_radians());
    p.with_transform(anchor, |p| {
        let x = -first_w + name.box_extension + name.box_offsets.first_name;
        let first_box = TextBox {
            rect: Rect::new(x, first_y, x + first_w, first_y + first_h),
            fill: inks.secondary,
            border: inks.white,
            metrics: &name.first_name_box,
            style: first_style,
            text_x: -name.right_padding + name.text_offsets.first_name,
            text_stroke: inks.white,
            text_fill: inks.primary,
        };
        let bottom_line_y =
            first_y + first_h - name.first_name_box.height / 2.0 + name.text_y_offset;
        first_box.draw(
            p,
            first
                .lines
                .iter()
                .rev()
                .enumerate()
                .map(|(i, l)| (l.as_str(), bottom_line_y - i as f64 * first_lh)),
        );

        let x = -last_w + name.box_extension + name.box_offsets.last_name;
        let last_box = TextBox {
            rect: Rect::new(x, last_y, x + last_w, last_y + last_h),
            fill: inks.white,
            border: inks.secondary,
            metrics: &name.last_name_box,
            style: last_style,
            text_x: -name.right_padding + name.text_offsets.last_name,
            text_stroke: inks.primary,
            text_fill: inks.white,
        };
        let top_line_y = last_y + name.last_name_box.height / 2.0 + name.text_y_offset;
        last_box.draw(
            p,
            last.lines
                .iter()
                .enumerate()
                .map(|(i, l)| (l.as_str(), top_line_y + i as f64 * last_lh)),
        );
    });
}

/// Rare-card title and caption, in the name-box visual language.
///
/// The title box sits above the anchor and grows upward; the caption box hangs below it and is
/// skipped entirely when the caption is empty.
pub(crate) fn draw_rare_content(
    p: &mut Painter<'_>,
    title: &str,
    caption: &str,
    layout: &CardLayout,
    inks: &Inks,
) {
    let rare = &layout.rare_card;
    let name = &layout.name;
    let pad = name.left_padding + name.right_padding + name.box_extension;

    let title_style = TextStyle::new(FontRole::MediumItalic, name.last_name_size)
        .spaced(rare.title_letter_spacing);
    let title_text = wrap(p, title, title_style, rare.max_width, RARE_MAX_LINES);
    let title_lh = name.last_name_size * LINE_HEIGHT;
    let title_w = title_text.width + pad;
    let title_h = name.last_name_box.height + title_text.extra_lines() * title_lh;

    let caption_style = TextStyle::new(FontRole::MediumItalic, name.first_name_size)
        .spaced(rare.caption_letter_spacing);
    let caption_text = (!caption.is_empty())
        .then(|| wrap(p, caption, caption_style, rare.max_width, RARE_MAX_LINES));

    let anchor = Affine::translate((rare.anchor_x, rare.anchor_y))
        * Affine::rotate(rare.rotation.to_radians());
    p.with_transform(anchor, |p| {
        let x = -title_w + name.box_extension;
        let title_box = TextBox {
            rect: Rect::new(x, -title_h, x + title_w, 0.0),
            fill: inks.white,
            border: inks.secondary,
            metrics: &name.last_name_box,
            style: title_style,
            text_x: -name.right_padding + rare.title_text_offset_x,
            text_stroke: inks.primary,
            text_fill: inks.white,
        };
        let bottom_line_y = -name.last_name_box.height / 2.0 + name.text_y_offset;
        title_box.draw(
            p,
            title_text
                .lines
                .iter()
                .rev()
                .enumerate()
                .map(|(i, l)| (l.as_str(), bottom_line_y - i as f64 * title_lh)),
        );

        let Some(caption_text) = caption_text else {
            return;
        };
        let caption_lh = name.first_name_size * LINE_HEIGHT;
        let caption_w = caption_text.width + pad;
        let caption_h = name.first_name_box.height + caption_text.extra_lines() * caption_lh;
        let x = -caption_w + name.box_extension;
        let caption_box = TextBox {
            rect: Rect::new(x, 0.0, x + caption_w, caption_h),
            fill: inks.secondary,
            border: inks.white,
            metrics: &name.first_name_box,
            style: caption_style,
            text_x: -name.right_padding + rare.caption_text_offset_x,
            text_stroke: inks.white,
            text_fill: inks.primary,
        };
        let top_line_y = name.first_name_box.height / 2.0 + name.text_y_offset;
        caption_box.draw(
            p,
            caption_text
                .lines
                .iter()
                .enumerate()
                .map(|(i, l)| (l.as_str(), top_line_y + i as f64 * caption_lh)),
        );
    });
}

/// Closed rounded rectangle with quadratic corners, clockwise from the top edge.
pub(crate) fn rounded_rect_path(x: f64, y: f64, w: f64, h: f64, r: f64) -> BezPath {
    let mut path = BezPath::new();
    append_rounded_rect(&mut path, x, y, w, h, r);
    path
}

fn append_rounded_rect(path: &mut BezPath, x: f64, y: f64, w: f64, h: f64, r: f64) {
    path.move_to((x + r, y));
    path.line_to((x + w - r, y));
    path.quad_to((x + w, y), (x + w, y + r));
    path.line_to((x + w, y + h - r));
    path.quad_to((x + w, y + h), (x + w - r, y + h));
    path.line_to((x + r, y + h));
    path.quad_to((x, y + h), (x, y + h - r));
    path.line_to((x, y + r));
    path.quad_to((x, y), (x + r, y));
    path.close_path();
}

/// Full-card rectangle plus the rounded photo window, for an even-odd fill.
pub(crate) fn frame_path(layout: &CardLayout) -> BezPath {
    let f = &layout.frame;
    let mut path = canvas_rect().to_path(0.1);
    append_rounded_rect(
        &mut path,
        f.inner_x,
        f.inner_y,
        f.inner_width,
        f.inner_height,
        f.inner_radius,
    );
    path
}

pub(crate) fn draw_frame(p: &mut Painter<'_>, layout: &CardLayout, inks: &Inks) {
    p.fill_path(&frame_path(layout), inks.white, true);
}

pub(crate) fn draw_overlay(p: &mut Painter<'_>, overlay: &ImagePaint) {
    p.draw_image(overlay, canvas_rect());
}

/// Where and how large a logo may be drawn, plus its outline.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LogoPlacement {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) max_width: f64,
    pub(crate) max_height: f64,
    pub(crate) stroke_width: f64,
    pub(crate) stroke_color: Rgba8,
}

/// Draw size of a `w` x `h` logo: fit inside the max box, never upscaled.
pub(crate) fn logo_size(w: f64, h: f64, max_w: f64, max_h: f64) -> (f64, f64) {
    if w <= 0.0 || h <= 0.0 {
        return (0.0, 0.0);
    }
    let ratio = (max_w / w).min(max_h / h).min(1.0);
    (w * ratio, h * ratio)
}

/// Logo with an outline made by stamping its tinted silhouette around the target position.
///
/// The logo is optional: a logo that cannot be turned into a paint is skipped, and an outline
/// wider than [`MAX_LOGO_STROKE`] is dropped while the logo itself is still drawn.
pub(crate) fn draw_logo(p: &mut Painter<'_>, logo: &PreparedImage, placement: &LogoPlacement) {
    let paint = match ImagePaint::from_prepared(logo) {
        Ok(paint) => paint,
        Err(err) => {
            tracing::warn!(%err, width = logo.width, height = logo.height, "skipping logo");
            return;
        }
    };
    let (w, h) = logo_size(
        paint.width,
        paint.height,
        placement.max_width,
        placement.max_height,
    );
    if w <= 0.0 || h <= 0.0 {
        return;
    }

    let s = placement.stroke_width;
    if s > MAX_LOGO_STROKE {
        tracing::warn!(stroke_width = s, max = MAX_LOGO_STROKE, "logo outline too wide, skipping it");
    } else if s > 0.0 {
        draw_logo_outline(p, &paint, (w, h), placement);
    }

    p.draw_image(
        &paint,
        Rect::new(placement.x, placement.y, placement.x + w, placement.y + h),
    );
}

fn draw_logo_outline(
    p: &mut Painter<'_>,
    paint: &ImagePaint,
    (w, h): (f64, f64),
    placement: &LogoPlacement,
) {
    let s = placement.stroke_width;
    let sw = (w + s * 2.0).ceil() as u32;
    let sh = (h + s * 2.0).ceil() as u32;
    let mask = match silhouette(paint, sw, sh, Rect::new(s, s, s + w, s + h), placement.stroke_color) {
        Ok(mask) => mask,
        Err(err) => {
            tracing::warn!(%err, "skipping logo outline");
            return;
        }
    };
    let size = (mask.width, mask.height);
    let mut dx = -s;
    while dx <= s {
        let mut dy = -s;
        while dy <= s {
            if dx != 0.0 || dy != 0.0 {
                let origin = Point::new(placement.x - s + dx, placement.y - s + dy);
                p.draw_image(&mask, Rect::from_origin_size(origin, size));
            }
            dy += 1.0;
        }
        dx += 1.0;
    }
}

/// Render `image` into `dest` on a fresh `width` x `height` surface and keep only its alpha,
/// filled with `color` (canvas `source-in`).
fn silhouette(
    image: &ImagePaint,
    width: u32,
    height: u32,
    dest: Rect,
    color: Rgba8,
) -> CardResult<ImagePaint> {
    let src = Rect::new(0.0, 0.0, image.width, image.height);
    let mut surface = render_surface(width, height, |ctx| {
        blit(ctx, Affine::IDENTITY, image, src, dest);
        Ok(())
    })?;
    tint_in_place(&mut surface.data, color);
    ImagePaint::from_premul(&surface.data, surface.width, surface.height)
}

pub(crate) fn draw_event_badge(p: &mut Painter<'_>, text: &str, layout: &CardLayout, inks: &Inks) {
    let b = &layout.event_badge;
    let badge = rounded_rect_path(b.x, b.y, b.width, b.height, b.border_radius);
    p.fill_path(&badge, inks.secondary, false);
    p.stroke_path(&badge, b.border_width, inks.primary);

    let style = TextStyle::new(FontRole::Bold, b.font_size);
    let at = Point::new(b.x + b.width / 2.0, b.y + b.height / 2.0 + b.text_y_offset);
    p.fill_text(text, &style, at, (HAlign::Center, VAlign::Middle), inks.primary);
}

/// Position label with the jersey number stacked below it, top-right of the card.
pub(crate) fn draw_position_number(
    p: &mut Painter<'_>,
    position: &str,
    number: Option<&str>,
    layout: &CardLayout,
    inks: &Inks,
) {
    let pn = &layout.position_number;
    let align = (HAlign::Center, VAlign::Top);

    let style = TextStyle::new(FontRole::Medium, pn.position_font_size)
        .spaced(pn.position_letter_spacing);
    let label = position.to_uppercase();
    let at = Point::new(pn.center_x, pn.top_y);
    p.stroke_text(&label, &style, at, align, inks.white, pn.position_stroke_width);
    p.fill_text(&label, &style, at, align, inks.primary);

    let Some(number) = number.filter(|n| !n.is_empty()) else {
        return;
    };
    let style =
        TextStyle::new(FontRole::Medium, pn.number_font_size).spaced(pn.number_letter_spacing);
    let at = Point::new(
        pn.center_x + pn.number_x_offset,
        pn.top_y + pn.position_font_size,
    );
    p.stroke_text(number, &style, at, align, inks.primary, pn.number_stroke_width);
    p.fill_text(number, &style, at, align, inks.number_overlay);
}

/// Centered, unboxed first name over an italic last name.
pub(crate) fn draw_super_rare_name(
    p: &mut Painter<'_>,
    first_name: &str,
    last_name: &str,
    layout: &CardLayout,
    inks: &Inks,
) {
    let sr = &layout.super_rare;
    let align = (HAlign::Center, VAlign::Middle);

    let style = TextStyle::new(FontRole::Medium, sr.first_name_size);
    let at = Point::new(sr.center_x, sr.first_name_y);
    p.fill_text(&first_name.to_uppercase(), &style, at, align, inks.white);

    let style = TextStyle::new(FontRole::MediumItalic, sr.last_name_size);
    let at = Point::new(sr.center_x, sr.last_name_y);
    p.fill_text(last_name, &style, at, align, inks.white);
}

/// Single angled box holding the full name, anchored at its left edge.
pub(crate) fn draw_national_team_name(
    p: &mut Painter<'_>,
    full_name: &str,
    layout: &CardLayout,
    inks: &Inks,
) {
    let nt = &layout.national_team;
    let anchor =
        Affine::translate((nt.anchor_x, nt.anchor_y)) * Affine::rotate(nt.rotation.to_radians());
    p.with_transform(anchor, |p| {
        let rect = Rect::new(0.0, -nt.box_height / 2.0, nt.box_width, nt.box_height / 2.0);
        p.fill_rect(rect, inks.white);
        p.stroke_rect(rect, nt.box_border_width, inks.secondary);

        let style = TextStyle::new(FontRole::Medium, nt.name_font_size);
        p.fill_text(
            &full_name.to_uppercase(),
            &style,
            Point::new(nt.text_padding_x, 0.0),
            (HAlign::Left, VAlign::Middle),
            inks.primary,
        );
    });
}

/// Five-point star centered on `(cx, cy)`, first point straight up.
pub(crate) fn star_path(cx: f64, cy: f64, radius: f64) -> BezPath {
    let inner = radius * STAR_INNER_RATIO;
    let mut path = BezPath::new();
    for i in 0..STAR_POINTS * 2 {
        let r = if i % 2 == 0 { radius } else { inner };
        let angle = std::f64::consts::PI / STAR_POINTS as f64 * i as f64 - std::f64::consts::FRAC_PI_2;
        let pt = Point::new(cx + r * angle.cos(), cy + r * angle.sin());
        if i == 0 {
            path.move_to(pt);
        } else {
            path.line_to(pt);
        }
    }
    path.close_path();
    path
}

/// Camera icon, photographer credit, rarity glyph and right-aligned team or role text.
pub(crate) fn draw_bottom_bar(
    p: &mut Painter<'_>,
    photographer: &str,
    right_text: &str,
    rarity: CardRarity,
    camera_icon: Option<&PreparedImage>,
    layout: &CardLayout,
    inks: &Inks,
) {
    let bar = &layout.bottom_bar;
    let text_y = bar.y + bar.text_y_offset;
    let icon = &bar.camera_icon;

    let tinted = camera_icon.and_then(|img| {
        let (w, h) = (icon.width.ceil().max(1.0) as u32, icon.height.ceil().max(1.0) as u32);
        let dest = Rect::new(0.0, 0.0, icon.width, icon.height);
        ImagePaint::from_prepared(img)
            .and_then(|paint| silhouette(&paint, w, h, dest, inks.primary))
            .inspect_err(|err| tracing::warn!(%err, "camera icon unusable, drawing the fallback shape"))
            .ok()
    });
    match tinted {
        Some(tinted) => {
            let origin = Point::new(icon.x, icon.y);
            p.draw_image(&tinted, Rect::from_origin_size(origin, (tinted.width, tinted.height)));
        }
        None => {
            let fallback =
                rounded_rect_path(icon.x, icon.y, icon.width, icon.height, CAMERA_FALLBACK_RADIUS);
            p.fill_path(&fallback, inks.primary, false);
        }
    }

    let style =
        TextStyle::new(FontRole::Medium, bar.font_size).spaced(bar.letter_spacing.photographer);
    p.fill_text(
        &photographer.to_uppercase(),
        &style,
        Point::new(bar.photographer_x, text_y),
        (HAlign::Left, VAlign::Middle),
        inks.primary,
    );

    let r = bar.rarity_size / 2.0;
    let cx = bar.rarity_x + r;
    let cy = bar.y + RARITY_CENTER_DY;
    match rarity {
        CardRarity::Common | CardRarity::Uncommon => {
            let dot = kurbo::Circle::new((cx, cy), r).to_path(0.1);
            p.fill_path(&dot, inks.primary, false);
        }
        CardRarity::Rare => p.fill_path(&star_path(cx, cy, r), inks.primary, false),
        CardRarity::SuperRare => {
            p.fill_path(&star_path(cx, cy, r), inks.primary, false);
            let cx2 = cx + bar.rarity_size + bar.rarity_gap;
            p.fill_path(&star_path(cx2, cy, r), inks.primary, false);
        }
    }

    let style = TextStyle::new(FontRole::Medium, bar.font_size).spaced(bar.letter_spacing.team_name);
    p.fill_text(
        &right_text.to_uppercase(),
        &style,
        Point::new(bar.team_name_x, text_y),
        (HAlign::Right, VAlign::Middle),
        inks.primary,
    );
}

#[cfg(test)]
#[path = "../../tests/unit/render/elements.rs"]
mod tests;
