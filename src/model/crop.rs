use crate::foundation::core::Rect;

/// Quarter-turn rotation applied to the cropped photo, clockwise in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RotateDeg {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl RotateDeg {
    pub fn degrees(self) -> u16 {
        match self {
            Self::R0 => 0,
            Self::R90 => 90,
            Self::R180 => 180,
            Self::R270 => 270,
        }
    }

    /// Anything other than an exact quarter turn maps to no rotation.
    pub fn from_degrees(deg: f64) -> Self {
        match deg {
            d if d == 90.0 => Self::R90,
            d if d == 180.0 => Self::R180,
            d if d == 270.0 => Self::R270,
            _ => Self::R0,
        }
    }

    pub fn radians(self) -> f64 {
        f64::from(self.degrees()).to_radians()
    }
}

impl serde::Serialize for RotateDeg {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.degrees())
    }
}

impl<'de> serde::Deserialize<'de> for RotateDeg {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Clients have historically sent numbers, numeric strings and nulls here.
        let v = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
        let deg = match &v {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(deg.map(Self::from_degrees).unwrap_or_default())
    }
}

/// Normalized crop of a source photo. All values are fractions of the source dimensions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(default)]
    pub rotate_deg: RotateDeg,
}

impl Default for CropRect {
    fn default() -> Self {
        Self::FULL
    }
}

impl CropRect {
    /// The whole photo, unrotated.
    pub const FULL: Self = Self {
        x: 0.0,
        y: 0.0,
        w: 1.0,
        h: 1.0,
        rotate_deg: RotateDeg::R0,
    };

    const MIN_EXTENT: f64 = 0.001;

    /// Clamp into the unit square.
    ///
    /// `x`/`y` land in `[0, 1]`, `w`/`h` in `[0.001, 1]` and then shrink so the crop never
    /// extends past the right or bottom edge. Non-finite values count as zero.
    pub fn clamped(self) -> Self {
        fn finite(v: f64) -> f64 {
            if v.is_finite() { v } else { 0.0 }
        }
        let x = finite(self.x).clamp(0.0, 1.0);
        let y = finite(self.y).clamp(0.0, 1.0);
        let w = finite(self.w).clamp(Self::MIN_EXTENT, 1.0).min(1.0 - x);
        let h = finite(self.h).clamp(Self::MIN_EXTENT, 1.0).min(1.0 - y);
        Self {
            x,
            y,
            w,
            h,
            rotate_deg: self.rotate_deg,
        }
    }

    /// Source rectangle in pixels of an `img_w` x `img_h` photo.
    pub fn source_rect(&self, img_w: u32, img_h: u32) -> Rect {
        let (iw, ih) = (f64::from(img_w), f64::from(img_h));
        let x0 = self.x * iw;
        let y0 = self.y * ih;
        Rect::new(x0, y0, x0 + self.w * iw, y0 + self.h * ih)
    }

    /// Pixel size of a crop-only render: the crop at source resolution, at least 1x1.
    pub fn output_size(&self, img_w: u32, img_h: u32) -> (u32, u32) {
        let w = (self.w * f64::from(img_w)).round().max(1.0) as u32;
        let h = (self.h * f64::from(img_h)).round().max(1.0) as u32;
        (w, h)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/crop.rs"]
mod tests;
