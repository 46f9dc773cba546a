//! Print geometry shared by every renderer path.
//!
//! All coordinates are in canvas pixels at 300 DPI. The full-bleed canvas is the unit of
//! rendering; the trim box is where the card is cut and the safe box is where content is
//! guaranteed to survive the cut.

use std::sync::LazyLock;

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Full-bleed canvas width in pixels.
pub const CARD_WIDTH: u32 = 825;
/// Full-bleed canvas height in pixels.
pub const CARD_HEIGHT: u32 = 1125;
/// Full-bleed aspect ratio (width / height).
pub const CARD_ASPECT: f64 = CARD_WIDTH as f64 / CARD_HEIGHT as f64;

/// Distance from the canvas edge to the cut line.
pub const TRIM_INSET_PX: f64 = 37.5;
/// Distance from the canvas edge to the safe area.
pub const SAFE_INSET_PX: f64 = 75.0;

/// Axis-aligned box in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PrintBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl PrintBox {
    /// Box inset by `inset` on every side of the full-bleed canvas.
    pub const fn inset(inset: f64) -> Self {
        Self {
            x: inset,
            y: inset,
            w: CARD_WIDTH as f64 - 2.0 * inset,
            h: CARD_HEIGHT as f64 - 2.0 * inset,
        }
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.w, self.y + self.h)
    }

    pub fn right(self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(self) -> f64 {
        self.y + self.h
    }
}

/// The cut line.
pub const TRIM_BOX: PrintBox = PrintBox::inset(TRIM_INSET_PX);
/// The area that survives cutting tolerance.
pub const SAFE_BOX: PrintBox = PrintBox::inset(SAFE_INSET_PX);

pub const TRIM_WIDTH: f64 = TRIM_BOX.w;
pub const TRIM_HEIGHT: f64 = TRIM_BOX.h;
/// Trimmed aspect ratio (width / height).
pub const TRIM_ASPECT: f64 = TRIM_WIDTH / TRIM_HEIGHT;

/// Inset percentages of a box relative to its container, rounded to three decimals.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GuideInsets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl GuideInsets {
    /// Express `inner` as insets of a `container_w` x `container_h` container.
    pub fn of(inner: PrintBox, container_w: f64, container_h: f64) -> Self {
        Self {
            left: guide_percent(inner.x, container_w),
            top: guide_percent(inner.y, container_h),
            right: guide_percent(container_w - inner.right(), container_w),
            bottom: guide_percent(container_h - inner.bottom(), container_h),
        }
    }
}

/// Overlay guide percentages for responsive editors.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidePercentages {
    /// Trim box relative to the full-bleed canvas.
    pub trim: GuideInsets,
    /// Safe box relative to the full-bleed canvas.
    pub safe: GuideInsets,
    /// Safe box relative to the trim box.
    pub safe_within_trim: GuideInsets,
}

pub static GUIDE_PERCENTAGES: LazyLock<GuidePercentages> = LazyLock::new(|| {
    let card_w = f64::from(CARD_WIDTH);
    let card_h = f64::from(CARD_HEIGHT);
    let safe_in_trim = PrintBox {
        x: SAFE_BOX.x - TRIM_BOX.x,
        y: SAFE_BOX.y - TRIM_BOX.y,
        w: SAFE_BOX.w,
        h: SAFE_BOX.h,
    };
    GuidePercentages {
        trim: GuideInsets::of(TRIM_BOX, card_w, card_h),
        safe: GuideInsets::of(SAFE_BOX, card_w, card_h),
        safe_within_trim: GuideInsets::of(safe_in_trim, TRIM_WIDTH, TRIM_HEIGHT),
    }
});

fn guide_percent(value: f64, total: f64) -> f64 {
    (((value / total) * 100.0 + f64::EPSILON) * 1000.0).round() / 1000.0
}

/// Pixel-snapped trim window `(x, y, width, height)` used for trim previews.
///
/// The half-pixel inset floors to the nearest whole pixel; width and height keep the exact
/// trim size.
pub fn trim_window_px() -> (u32, u32, u32, u32) {
    (
        TRIM_BOX.x.floor() as u32,
        TRIM_BOX.y.floor() as u32,
        TRIM_WIDTH.round() as u32,
        TRIM_HEIGHT.round() as u32,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
