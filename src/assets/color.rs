//! CSS color strings as they appear in layouts and themes.

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a CSS color string.
    ///
    /// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(...)`, `rgba(...)` (comma or
    /// space separated, alpha as `0..1` or a percentage) and a handful of keywords.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        let lower = s.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
        {
            let args = args
                .strip_suffix(')')
                .ok_or_else(|| format!("unterminated color function \"{s}\""))?;
            return parse_rgb_args(args);
        }
        match lower.as_str() {
            "transparent" => Ok(Self::TRANSPARENT),
            "black" => Ok(Self::BLACK),
            "white" => Ok(Self::WHITE),
            "red" => Ok(Self::rgba(255, 0, 0, 255)),
            _ => Err(format!("unsupported color \"{s}\"")),
        }
    }

    /// Parse `s`, logging and returning `fallback` when it is not a color.
    pub fn parse_or(s: &str, fallback: Self) -> Self {
        Self::parse(s).unwrap_or_else(|err| {
            tracing::warn!(color = s, %err, "unparseable color, using fallback");
            fallback
        })
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Premultiplied `[r, g, b, a]`.
    pub fn to_premul(self) -> [u8; 4] {
        let a = u16::from(self.a);
        [
            crate::foundation::math::mul_div255_u8(u16::from(self.r), a),
            crate::foundation::math::mul_div255_u8(u16::from(self.g), a),
            crate::foundation::math::mul_div255_u8(u16::from(self.b), a),
            self.a,
        ]
    }

    pub(crate) fn to_peniko(self) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

fn parse_hex(hex: &str) -> Result<Rgba8, String> {
    fn nibble(c: u8) -> Result<u8, String> {
        (c as char)
            .to_digit(16)
            .map(|d| d as u8)
            .ok_or_else(|| format!("invalid hex digit '{}'", c as char))
    }

    let b = hex.as_bytes();
    let byte = |i: usize| -> Result<u8, String> { Ok(nibble(b[i])? << 4 | nibble(b[i + 1])?) };
    let short = |i: usize| -> Result<u8, String> { Ok(nibble(b[i])? * 17) };

    match b.len() {
        3 => Ok(Rgba8::rgba(short(0)?, short(1)?, short(2)?, 255)),
        4 => Ok(Rgba8::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
        6 => Ok(Rgba8::rgba(byte(0)?, byte(2)?, byte(4)?, 255)),
        8 => Ok(Rgba8::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => Err(format!("hex color must have 3, 4, 6 or 8 digits, got \"#{hex}\"")),
    }
}

fn parse_rgb_args(args: &str) -> Result<Rgba8, String> {
    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(format!("expected 3 or 4 color components, got {}", parts.len()));
    }

    let channel = |p: &str| -> Result<u8, String> {
        let v = match p.strip_suffix('%') {
            Some(pct) => parse_num(pct)? * 2.55,
            None => parse_num(p)?,
        };
        Ok(v.round().clamp(0.0, 255.0) as u8)
    };

    let alpha = match parts.get(3) {
        None => 255,
        Some(p) => {
            let v = match p.strip_suffix('%') {
                Some(pct) => parse_num(pct)? / 100.0,
                None => parse_num(p)?,
            };
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
    };

    Ok(Rgba8::rgba(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        alpha,
    ))
}

fn parse_num(s: &str) -> Result<f64, String> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("invalid color component \"{s}\""))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
