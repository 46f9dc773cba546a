use crate::assets::color::Rgba8;
use crate::foundation::math::mul_div255_u8;

pub type PremulRgba8 = [u8; 4];

/// Canvas `source-in` of a solid color: the color, masked by the source alpha.
pub fn source_in(src: PremulRgba8, color: PremulRgba8) -> PremulRgba8 {
    let a = u16::from(src[3]);
    [
        mul_div255_u8(u16::from(color[0]), a),
        mul_div255_u8(u16::from(color[1]), a),
        mul_div255_u8(u16::from(color[2]), a),
        mul_div255_u8(u16::from(color[3]), a),
    ]
}

/// Replace every pixel with `color` masked by its own alpha, keeping the silhouette only.
pub fn tint_in_place(rgba8_premul: &mut [u8], color: Rgba8) {
    let c = color.to_premul();
    for px in rgba8_premul.chunks_exact_mut(4) {
        let out = source_in([px[0], px[1], px[2], px[3]], c);
        px.copy_from_slice(&out);
    }
}

/// Top-to-bottom linear gradient, interpolated in premultiplied space.
pub fn vertical_gradient(start: Rgba8, end: Rgba8, width: u32, height: u32) -> Vec<u8> {
    let start = start.to_premul();
    let end = end.to_premul();
    let row_len = width as usize * 4;
    let mut bytes = vec![0u8; row_len * height as usize];
    let h1 = (height.max(1) - 1) as f32;
    for (y, row) in bytes.chunks_exact_mut(row_len.max(1)).enumerate() {
        let t = if h1 <= 0.0 { 0.0 } else { (y as f32) / h1 };
        let lerp = |a: u8, b: u8| -> u8 {
            let af = a as f32;
            let bf = b as f32;
            (af + (bf - af) * t).round().clamp(0.0, 255.0) as u8
        };
        let c = [
            lerp(start[0], end[0]),
            lerp(start[1], end[1]),
            lerp(start[2], end[2]),
            lerp(start[3], end[3]),
        ];
        for px in row.chunks_exact_mut(4) {
            px.copy_from_slice(&c);
        }
    }
    bytes
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
