//! Cardsmith renders print-ready sports trading cards.
//!
//! A card render takes a [`Card`] record, its [`TournamentConfig`], a subject photo and a way
//! to resolve asset keys, and composites an 825x1125 premultiplied RGBA8 image that encodes
//! to PNG.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: pick a template for the card and freeze it into a [`TemplateSnapshot`]
//!    (theme, flags, overlay and a fully merged [`CardLayout`]).
//! 2. **Load**: fetch the photo and the optional logo, overlay and camera icon through an
//!    [`AssetLoader`].
//! 3. **Compose**: draw the photo, decorations, name boxes, frame, logo, badge and bottom bar
//!    in a fixed z-order with `vello_cpu`.
//! 4. **Encode**: [`CardImage::encode_png`].
//!
//! Layouts are data: a tournament reskins cards by storing a partial [`LayoutPatch`] on its
//! template. Anything the patch leaves out comes from the built-in `usqc26-v1` layout.
//!
//! Only a missing or undecodable subject photo fails a render. A template without a usable
//! layout renders a red "not configured" card, and unavailable logos, overlays, icons or
//! fonts are left out.
#![forbid(unsafe_code)]

mod assets;
mod foundation;
mod layout;
mod model;
mod render;
mod template;
mod text;

pub use assets::color::Rgba8;
pub use assets::decode::{PreparedImage, decode_image, parse_svg, rasterize_svg};
pub use assets::icons::{CAMERA_ICON_SVG, camera_icon};
pub use assets::loader::{
    AssetLoader, FsAssetLoader, MemoryAssetLoader, load_image, load_optional_image,
    normalize_rel_path,
};
pub use foundation::core::{
    Affine, BezPath, CARD_ASPECT, CARD_HEIGHT, CARD_WIDTH, GUIDE_PERCENTAGES, GuideInsets,
    GuidePercentages, Point, PrintBox, Rect, SAFE_BOX, SAFE_INSET_PX, TRIM_ASPECT, TRIM_BOX,
    TRIM_HEIGHT, TRIM_INSET_PX, TRIM_WIDTH, Vec2, trim_window_px,
};
pub use foundation::error::{CardError, CardResult};
pub use layout::merge::Merge;
pub use layout::presets::{QCN26_LAYOUT, USQC26_LAYOUT, preset};
pub use layout::resolve::{resolve_layout, resolve_template_layout};
pub use layout::schema::{
    BottomBarLayout, BottomBarLayoutPatch, BottomBarSpacing, BottomBarSpacingPatch, CardLayout,
    EventBadgeLayout, EventBadgeLayoutPatch, FrameLayout, FrameLayoutPatch, IconBox,
    IconBoxPatch, LAYOUT_KIND, LayoutPatch, LogoBox, LogoBoxPatch, NameBox, NameBoxPatch,
    NameLayout, NameLayoutPatch, NamePair, NamePairPatch, NationalTeamLayout,
    NationalTeamLayoutPatch, Palette, PalettePatch, PositionNumberLayout,
    PositionNumberLayoutPatch, RareCardLayout, RareCardLayoutPatch, SuperRareLayout,
    SuperRareLayoutPatch, TeamLogoLayout, TeamLogoLayoutPatch, Typography, TypographyPatch,
};
pub use model::card::{
    Card, CardDetails, CardPhoto, CardRarity, CardStatus, CardType, PersonDetails, RareDetails,
};
pub use model::crop::{CropRect, RotateDeg};
pub use model::tournament::{Branding, CardTypeConfig, Team, TeamInfo, TournamentConfig};
pub use render::composite::{PremulRgba8, source_in, tint_in_place, vertical_gradient};
pub use render::renderer::{CardRenderer, RenderCardInput, RenderOptions, RenderedCard};
pub use render::surface::CardImage;
pub use template::model::{
    FlagsPatch, OverlayPlacement, RenderMeta, TemplateDefaults, TemplateDefinition,
    TemplateFlags, TemplateSnapshot, TemplateTheme, ThemePatch,
};
pub use template::resolve::{
    DEFAULT_TEMPLATE_ID, FALLBACK_TEMPLATES, ResolvedTemplate, fallback_template, find_template,
    resolve_template_id, resolve_template_snapshot, snapshot_template,
};
pub use text::engine::{ShapedText, TextLayoutEngine, TextStyle};
pub use text::fonts::{FamilyName, FontBook, FontFace, FontRole, parse_family_list};
pub use text::wrap::{TextMeasure, wrap_text};
