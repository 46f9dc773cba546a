//! Canvas-style drawing facade over a `vello_cpu` render context.
//!
//! Every element painter draws through [`Painter`] in card pixel coordinates. The painter
//! carries a current transform (translate/rotate for angled boxes) and owns nothing: the
//! render context and the text engine are borrowed for the duration of one surface.

use crate::assets::color::Rgba8;
use crate::foundation::core::{Affine, BezPath, Point, Rect};
use crate::render::surface::ImagePaint;
use crate::text::engine::{ShapedText, TextLayoutEngine, TextStyle};

/// Horizontal anchor of a text run relative to its `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchor of a text run relative to its `y`, as in the 2D canvas API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Alphabetic,
}

/// Horizontal shear applied to upright faces standing in for an italic one.
const SYNTHETIC_ITALIC_SKEW: f64 = -0.2;

/// Miter limit used for outlined text.
const TEXT_MITER_LIMIT: f64 = 2.0;

pub(crate) struct Painter<'a> {
    ctx: &'a mut vello_cpu::RenderContext,
    text: &'a mut TextLayoutEngine,
    transform: Affine,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(ctx: &'a mut vello_cpu::RenderContext, text: &'a mut TextLayoutEngine) -> Self {
        ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Self {
            ctx,
            text,
            transform: Affine::IDENTITY,
        }
    }

    /// Run `f` with `local` applied on top of the current transform, then restore it.
    pub(crate) fn with_transform<R>(&mut self, local: Affine, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.transform;
        self.transform = saved * local;
        let out = f(self);
        self.transform = saved;
        out
    }

    pub(crate) fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.ctx.set_transform(affine_to_cpu(self.transform));
        self.ctx.set_paint(color.to_peniko());
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    /// Stroke centered on the rectangle edge, like `strokeRect`.
    pub(crate) fn stroke_rect(&mut self, rect: Rect, width: f64, color: Rgba8) {
        if width <= 0.0 {
            return;
        }
        self.ctx.set_transform(affine_to_cpu(self.transform));
        self.ctx.set_paint(color.to_peniko());
        self.ctx.set_stroke(miter_stroke(width, 10.0));
        self.ctx.stroke_rect(&rect_to_cpu(rect));
    }

    pub(crate) fn fill_path(&mut self, path: &BezPath, color: Rgba8, even_odd: bool) {
        self.ctx.set_transform(affine_to_cpu(self.transform));
        self.ctx.set_paint(color.to_peniko());
        if even_odd {
            self.ctx.set_fill_rule(vello_cpu::peniko::Fill::EvenOdd);
        }
        self.ctx.fill_path(&bezpath_to_cpu(path));
        if even_odd {
            self.ctx.set_fill_rule(vello_cpu::peniko::Fill::NonZero);
        }
    }

    pub(crate) fn stroke_path(&mut self, path: &BezPath, width: f64, color: Rgba8) {
        if width <= 0.0 {
            return;
        }
        self.ctx.set_transform(affine_to_cpu(self.transform));
        self.ctx.set_paint(color.to_peniko());
        self.ctx.set_stroke(miter_stroke(width, 10.0));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    /// Blit the whole image scaled into `dest`.
    pub(crate) fn draw_image(&mut self, image: &ImagePaint, dest: Rect) {
        let src = Rect::new(0.0, 0.0, image.width, image.height);
        self.draw_image_region(image, src, dest);
    }

    /// Blit the `src` pixel region of the image scaled into `dest`, like 9-argument `drawImage`.
    pub(crate) fn draw_image_region(&mut self, image: &ImagePaint, src: Rect, dest: Rect) {
        blit(self.ctx, self.transform, image, src, dest);
    }

    /// Advance width of `text`; zero when no face is available for the style.
    pub(crate) fn measure(&mut self, text: &str, style: &TextStyle) -> f64 {
        self.text.measure(text, style)
    }

    /// Measure with a fixed style; the closure form used by the wrapper.
    pub(crate) fn measurer<'p>(&'p mut self, style: TextStyle) -> impl FnMut(&str) -> f64 + 'p {
        move |s: &str| self.text.measure(s, &style)
    }

    pub(crate) fn fill_text(
        &mut self,
        text: &str,
        style: &TextStyle,
        at: Point,
        align: (HAlign, VAlign),
        color: Rgba8,
    ) {
        self.draw_text(text, style, at, align, color, None);
    }

    /// Outline `text` with a miter-joined stroke of `width`.
    pub(crate) fn stroke_text(
        &mut self,
        text: &str,
        style: &TextStyle,
        at: Point,
        align: (HAlign, VAlign),
        color: Rgba8,
        width: f64,
    ) {
        if width <= 0.0 {
            return;
        }
        self.draw_text(text, style, at, align, color, Some(width));
    }

    fn draw_text(
        &mut self,
        text: &str,
        style: &TextStyle,
        at: Point,
        (h, v): (HAlign, VAlign),
        color: Rgba8,
        stroke: Option<f64>,
    ) {
        if text.is_empty() || color.a == 0 {
            return;
        }
        let Some(shaped) = self.text.shape(text, style) else {
            return;
        };
        if shaped.glyphs.is_empty() {
            return;
        }

        let origin = text_origin(&shaped, at, h, v);
        let mut tr = self.transform * Affine::translate(origin.to_vec2());
        if shaped.synthetic_italic {
            tr = tr * italic_shear(shaped.baseline);
        }

        self.ctx.set_transform(affine_to_cpu(tr));
        self.ctx.set_paint(color.to_peniko());
        let glyphs = shaped.glyphs.iter().copied();
        match stroke {
            None => self
                .ctx
                .glyph_run(&shaped.font)
                .font_size(shaped.size)
                .fill_glyphs(glyphs),
            Some(width) => {
                self.ctx.set_stroke(miter_stroke(width, TEXT_MITER_LIMIT));
                self.ctx
                    .glyph_run(&shaped.font)
                    .font_size(shaped.size)
                    .stroke_glyphs(glyphs)
            }
        }
    }
}

/// Draw the `src` region of `image` into `dest`, both under `base`.
pub(crate) fn blit(
    ctx: &mut vello_cpu::RenderContext,
    base: Affine,
    image: &ImagePaint,
    src: Rect,
    dest: Rect,
) {
    if src.width() <= 0.0 || src.height() <= 0.0 || dest.width() <= 0.0 || dest.height() <= 0.0 {
        return;
    }
    let to_dest = Affine::translate((dest.x0, dest.y0))
        * Affine::scale_non_uniform(dest.width() / src.width(), dest.height() / src.height())
        * Affine::translate((-src.x0, -src.y0));
    ctx.set_transform(affine_to_cpu(base * to_dest));
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(image.paint.clone());
    ctx.fill_rect(&rect_to_cpu(src));
}

/// Layout-space offset that puts the run's anchor point at `at`.
pub(crate) fn text_origin(shaped: &ShapedText, at: Point, h: HAlign, v: VAlign) -> Point {
    let x = match h {
        HAlign::Left => at.x,
        HAlign::Center => at.x - shaped.width / 2.0,
        HAlign::Right => at.x - shaped.width,
    };
    // Glyph y values sit on `shaped.baseline`; move that baseline to where the anchor wants it.
    let baseline_y = match v {
        VAlign::Alphabetic => at.y,
        VAlign::Top => at.y + shaped.ascent,
        VAlign::Middle => at.y + (shaped.ascent - shaped.descent) / 2.0,
    };
    Point::new(x, baseline_y - shaped.baseline)
}

fn italic_shear(baseline: f64) -> Affine {
    Affine::new([
        1.0,
        0.0,
        SYNTHETIC_ITALIC_SKEW,
        1.0,
        -SYNTHETIC_ITALIC_SKEW * baseline,
        0.0,
    ])
}

fn miter_stroke(width: f64, miter_limit: f64) -> vello_cpu::kurbo::Stroke {
    vello_cpu::kurbo::Stroke::new(width)
        .with_join(vello_cpu::kurbo::Join::Miter)
        .with_miter_limit(miter_limit)
}

pub(crate) fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

pub(crate) fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
