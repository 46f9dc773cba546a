use std::io::Cursor;
use std::sync::Arc;

use anyhow::Context;

use crate::assets::decode::PreparedImage;
use crate::foundation::error::{CardError, CardResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;

/// A rendered raster in premultiplied RGBA8, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl CardImage {
    /// Premultiplied `[r, g, b, a]` at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Copy out a `w` x `h` window whose top-left corner is `(x, y)`.
    pub fn crop(&self, x: u32, y: u32, w: u32, h: u32) -> CardResult<Self> {
        if x.saturating_add(w) > self.width || y.saturating_add(h) > self.height {
            return Err(CardError::render(format!(
                "crop window {w}x{h}+{x}+{y} exceeds {}x{} image",
                self.width, self.height
            )));
        }
        let stride = self.width as usize * 4;
        let row_len = w as usize * 4;
        let mut data = Vec::with_capacity(row_len * h as usize);
        for row in y..y + h {
            let start = row as usize * stride + x as usize * 4;
            data.extend_from_slice(&self.data[start..start + row_len]);
        }
        Ok(Self {
            width: w,
            height: h,
            data,
        })
    }

    /// Straight-alpha copy of the pixels.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        unpremultiply_rgba8_in_place(&mut out);
        out
    }

    pub fn encode_png(&self) -> CardResult<Vec<u8>> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.to_straight_rgba())
            .ok_or_else(|| CardError::render("pixel buffer does not match image size"))?;
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .context("encode png")?;
        Ok(buf)
    }
}

pub(crate) fn canvas_dims(width: u32, height: u32) -> CardResult<(u16, u16)> {
    let w: u16 = width
        .try_into()
        .map_err(|_| CardError::render("surface width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CardError::render("surface height exceeds u16"))?;
    if w == 0 || h == 0 {
        return Err(CardError::render("surface must be at least 1x1"));
    }
    Ok((w, h))
}

/// Draw into a fresh transparent `width` x `height` surface and read the pixels back.
pub(crate) fn render_surface(
    width: u32,
    height: u32,
    draw: impl FnOnce(&mut vello_cpu::RenderContext) -> CardResult<()>,
) -> CardResult<CardImage> {
    let (w, h) = canvas_dims(width, height)?;
    let mut ctx = vello_cpu::RenderContext::new(w, h);
    draw(&mut ctx)?;
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);
    Ok(CardImage {
        width,
        height,
        data: pixmap.data_as_u8_slice().to_vec(),
    })
}

fn premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> CardResult<vello_cpu::Pixmap> {
    let (w, h) = canvas_dims(width, height)?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(CardError::render("prepared image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

/// An image paint plus its pixel size.
#[derive(Clone)]
pub(crate) struct ImagePaint {
    pub(crate) paint: vello_cpu::Image,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl ImagePaint {
    pub(crate) fn from_premul(rgba8_premul: &[u8], width: u32, height: u32) -> CardResult<Self> {
        let pixmap = premul_bytes_to_pixmap(rgba8_premul, width, height)?;
        Ok(Self {
            paint: vello_cpu::Image {
                image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
                sampler: vello_cpu::peniko::ImageSampler::default(),
            },
            width: f64::from(width),
            height: f64::from(height),
        })
    }

    pub(crate) fn from_prepared(img: &PreparedImage) -> CardResult<Self> {
        Self::from_premul(img.rgba8_premul.as_slice(), img.width, img.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
