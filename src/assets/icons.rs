use crate::assets::decode::{PreparedImage, parse_svg, rasterize_svg};
use crate::foundation::error::CardResult;

/// Bundled photographer credit icon: a white camera with a see-through lens.
pub const CAMERA_ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="22" height="15" viewBox="0 0 22 15"><path fill="#ffffff" fill-rule="evenodd" d="M7 0h8l1.6 2.5H20a2 2 0 0 1 2 2V13a2 2 0 0 1-2 2H2a2 2 0 0 1-2-2V4.5a2 2 0 0 1 2-2h3.4Z M11 4.2a4.2 4.2 0 1 0 0 8.4a4.2 4.2 0 1 0 0-8.4Z"/></svg>"##;

/// Rasterize the bundled camera icon at `width` x `height` pixels.
pub fn camera_icon(width: u32, height: u32) -> CardResult<PreparedImage> {
    let tree = parse_svg(CAMERA_ICON_SVG.as_bytes())?;
    rasterize_svg(&tree, width.max(1), height.max(1))
}
