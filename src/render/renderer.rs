use std::path::PathBuf;
use std::sync::Arc;

use crate::assets::decode::PreparedImage;
use crate::assets::icons::camera_icon;
use crate::assets::loader::{AssetLoader, load_image, load_optional_image};
use crate::foundation::core::{CARD_HEIGHT, CARD_WIDTH, Rect, trim_window_px};
use crate::foundation::error::CardResult;
use crate::layout::schema::CardLayout;
use crate::model::card::Card;
use crate::model::crop::CropRect;
use crate::model::tournament::{TeamInfo, TournamentConfig};
use crate::render::compositor::{
    CARD_FONT_ROLES, CardAssets, CardScene, compose_card, compose_error_card,
};
use crate::render::elements::crop_rotation;
use crate::render::paint::{Painter, blit};
use crate::render::surface::{CardImage, ImagePaint, render_surface};
use crate::template::model::{RenderMeta, TemplateSnapshot};
use crate::template::resolve::{resolve_template_id, resolve_template_snapshot};
use crate::text::engine::TextLayoutEngine;
use crate::text::fonts::{FontBook, FontRole};

/// Renderer configuration.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Extra directories scanned for `.ttf`/`.otf`/`.ttc` files.
    pub font_dirs: Vec<PathBuf>,
    /// Also search the fonts installed on this machine.
    pub system_fonts: bool,
    /// Camera icon to load instead of the bundled one.
    pub camera_icon_url: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font_dirs: Vec::new(),
            system_fonts: true,
            camera_icon_url: None,
        }
    }
}

impl RenderOptions {
    /// Defaults adjusted by `CARDSMITH_FONT_DIRS` (a path list) and `CARDSMITH_SYSTEM_FONTS`
    /// (`0` or `false` disables system font scanning).
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Some(dirs) = std::env::var_os("CARDSMITH_FONT_DIRS") {
            opts.font_dirs = std::env::split_paths(&dirs)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
        }
        if let Ok(v) = std::env::var("CARDSMITH_SYSTEM_FONTS") {
            opts.system_fonts = !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false");
        }
        opts
    }
}

/// Inputs of one card render.
pub struct RenderCardInput<'a> {
    pub card: &'a Card,
    pub config: &'a TournamentConfig,
    /// Subject photo. Failing to load it fails the render.
    pub image_url: &'a str,
    /// Maps an asset key (logo, overlay) to a URL the loader understands.
    pub resolve_asset_url: &'a (dyn Fn(&str) -> String + Sync),
    /// Overrides the card's stored template.
    pub template_id: Option<&'a str>,
}

/// A rendered card and the template it was rendered with.
#[derive(Clone, Debug)]
pub struct RenderedCard {
    pub image: CardImage,
    pub template_id: String,
    pub snapshot: TemplateSnapshot,
}

impl RenderedCard {
    pub fn encode_png(&self) -> CardResult<Vec<u8>> {
        self.image.encode_png()
    }

    /// Freeze the template used for this render so it can be stored with the image.
    pub fn render_meta(&self, key: impl Into<String>, rendered_at: impl Into<String>) -> RenderMeta {
        RenderMeta {
            key: key.into(),
            template_id: self.template_id.clone(),
            rendered_at: rendered_at.into(),
            template_snapshot: self.snapshot.clone(),
        }
    }
}

/// Card rendering entry points.
///
/// A renderer holds the font database and an asset loader; every call allocates its own
/// surfaces, so one renderer can serve concurrent renders.
#[derive(Clone)]
pub struct CardRenderer {
    fonts: Arc<FontBook>,
    loader: Arc<dyn AssetLoader>,
    camera_icon_url: Option<String>,
}

impl std::fmt::Debug for CardRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardRenderer")
            .field("fonts", &self.fonts)
            .field("camera_icon_url", &self.camera_icon_url)
            .finish_non_exhaustive()
    }
}

impl CardRenderer {
    pub fn new(options: RenderOptions, loader: Arc<dyn AssetLoader>) -> Self {
        let mut fonts = if options.system_fonts {
            FontBook::with_system_fonts()
        } else {
            FontBook::new()
        };
        for dir in &options.font_dirs {
            fonts.load_fonts_dir(dir);
        }
        if fonts.is_empty() {
            tracing::warn!("no fonts available, card text will be omitted");
        }
        Self {
            fonts: Arc::new(fonts),
            loader,
            camera_icon_url: options.camera_icon_url,
        }
    }

    /// A renderer over an already populated font book.
    pub fn with_font_book(fonts: FontBook, loader: Arc<dyn AssetLoader>) -> Self {
        Self {
            fonts: Arc::new(fonts),
            loader,
            camera_icon_url: None,
        }
    }

    pub fn with_camera_icon_url(mut self, url: impl Into<String>) -> Self {
        self.camera_icon_url = Some(url.into());
        self
    }

    /// Full-bleed `CARD_WIDTH` x `CARD_HEIGHT` render with the live template.
    #[tracing::instrument(skip(self, input), fields(card_type = input.card.card_type().as_str()))]
    pub fn render_card(&self, input: &RenderCardInput<'_>) -> CardResult<RenderedCard> {
        let resolved = resolve_template_snapshot(input.card, input.config, input.template_id);
        let image = self.render_frame(input, &resolved.snapshot)?;
        Ok(RenderedCard {
            image,
            template_id: resolved.template_id,
            snapshot: resolved.snapshot,
        })
    }

    /// The trim-box window of the full render, pixel for pixel.
    #[tracing::instrument(skip(self, input), fields(card_type = input.card.card_type().as_str()))]
    pub fn render_preview_trim(&self, input: &RenderCardInput<'_>) -> CardResult<RenderedCard> {
        let mut rendered = self.render_card(input)?;
        let (x, y, w, h) = trim_window_px();
        rendered.image = rendered.image.crop(x, y, w, h)?;
        Ok(rendered)
    }

    /// Re-render with a stored snapshot instead of the live template.
    #[tracing::instrument(skip(self, input, snapshot), fields(card_type = input.card.card_type().as_str()))]
    pub fn render_snapshot(
        &self,
        input: &RenderCardInput<'_>,
        snapshot: &TemplateSnapshot,
    ) -> CardResult<RenderedCard> {
        let template_id = resolve_template_id(
            input.template_id.or(input.card.template_id()),
            Some(input.card.card_type()),
            Some(input.config),
        );
        let image = self.render_frame(input, snapshot)?;
        Ok(RenderedCard {
            image,
            template_id,
            snapshot: snapshot.clone(),
        })
    }

    /// Only the crop step: the cropped, rotated photo at source resolution.
    #[tracing::instrument(skip(self))]
    pub fn render_crop(&self, image_url: &str, crop: CropRect) -> CardResult<CardImage> {
        let photo = load_image(self.loader.as_ref(), image_url)?;
        let crop = crop.clamped();
        let (w, h) = crop.output_size(photo.width, photo.height);
        let paint = ImagePaint::from_prepared(&photo)?;
        let src = crop.source_rect(photo.width, photo.height);
        let dest = Rect::new(0.0, 0.0, f64::from(w), f64::from(h));
        let spin = crop_rotation(&crop, dest);
        render_surface(w, h, |ctx| {
            blit(ctx, spin, &paint, src, dest);
            Ok(())
        })
    }

    fn render_frame(
        &self,
        input: &RenderCardInput<'_>,
        snapshot: &TemplateSnapshot,
    ) -> CardResult<CardImage> {
        let Some(layout) = snapshot.supported_layout() else {
            tracing::warn!(
                kind = snapshot.layout.as_ref().map(|l| l.kind.as_str()),
                "template has no usable layout, rendering error card"
            );
            return self.render_error_card();
        };

        let person = input.card.person();
        let team = input.config.team_info(person);
        let assets = self.load_assets(input, snapshot, layout, team.as_ref())?;

        let mut text = TextLayoutEngine::new(
            &self.fonts,
            &layout.typography.font_family,
            &CARD_FONT_ROLES,
        );
        let scene = CardScene {
            card: input.card,
            config: input.config,
            team: team.as_ref(),
            snapshot,
            layout,
            assets: &assets,
        };
        render_surface(CARD_WIDTH, CARD_HEIGHT, |ctx| {
            let mut painter = Painter::new(ctx, &mut text);
            compose_card(&mut painter, &scene)
        })
    }

    fn render_error_card(&self) -> CardResult<CardImage> {
        let mut text = TextLayoutEngine::new(&self.fonts, "sans-serif", &[FontRole::Fallback]);
        render_surface(CARD_WIDTH, CARD_HEIGHT, |ctx| {
            let mut painter = Painter::new(ctx, &mut text);
            compose_error_card(&mut painter);
            Ok(())
        })
    }

    /// Fetch the photo and the optional images side by side.
    fn load_assets(
        &self,
        input: &RenderCardInput<'_>,
        snapshot: &TemplateSnapshot,
        layout: &CardLayout,
        team: Option<&TeamInfo>,
    ) -> CardResult<CardAssets> {
        let loader = self.loader.as_ref();
        let resolve = input.resolve_asset_url;
        let overlay_url = snapshot.overlay_key.as_deref().map(resolve);
        let logo_url = input
            .config
            .logo_key(input.card.card_type(), team)
            .map(resolve);

        let (photo, (overlay, (logo, camera_icon))) = rayon::join(
            || load_image(loader, input.image_url),
            || {
                rayon::join(
                    || load_optional_image(loader, overlay_url.as_deref(), "overlay"),
                    || {
                        rayon::join(
                            || load_optional_image(loader, logo_url.as_deref(), "logo"),
                            || self.load_camera_icon(layout),
                        )
                    },
                )
            },
        );

        Ok(CardAssets {
            photo: photo?,
            overlay,
            logo,
            camera_icon,
        })
    }

    fn load_camera_icon(&self, layout: &CardLayout) -> Option<PreparedImage> {
        if let Some(url) = &self.camera_icon_url {
            return load_optional_image(self.loader.as_ref(), Some(url), "camera icon");
        }
        let icon = &layout.bottom_bar.camera_icon;
        let w = icon.width.ceil().max(1.0) as u32;
        let h = icon.height.ceil().max(1.0) as u32;
        match camera_icon(w, h) {
            Ok(img) => Some(img),
            Err(err) => {
                tracing::warn!(%err, "bundled camera icon unavailable, using fallback shape");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
