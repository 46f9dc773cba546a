//! The card pipeline: one linear pass of element painters in fixed z-order.

use crate::assets::color::Rgba8;
use crate::assets::decode::PreparedImage;
use crate::foundation::core::{CARD_HEIGHT, CARD_WIDTH, Point, Rect};
use crate::foundation::error::CardResult;
use crate::layout::schema::CardLayout;
use crate::model::card::{Card, CardDetails, CardRarity};
use crate::model::tournament::{TeamInfo, TournamentConfig};
use crate::render::elements::{self, Inks, LogoPlacement};
use crate::render::paint::{HAlign, Painter, VAlign};
use crate::render::surface::ImagePaint;
use crate::template::model::{OverlayPlacement, TemplateSnapshot};
use crate::text::engine::TextStyle;
use crate::text::fonts::FontRole;

/// Background of the "not configured" card.
pub(crate) const ERROR_CARD_FILL: Rgba8 = Rgba8::rgba(0xf8, 0x71, 0x71, 0xff);

const RARE_TITLE_DEFAULT: &str = "Rare Card";
const RARE_BOTTOM_TEXT: &str = "RARE CARD";
const NATIONAL_TEAM_DEFAULT: &str = "NATIONAL TEAM";

/// Images a card render draws. Only the photo is required.
pub(crate) struct CardAssets {
    pub(crate) photo: PreparedImage,
    pub(crate) overlay: Option<PreparedImage>,
    pub(crate) logo: Option<PreparedImage>,
    pub(crate) camera_icon: Option<PreparedImage>,
}

/// Everything the pipeline reads besides the painter.
pub(crate) struct CardScene<'a> {
    pub(crate) card: &'a Card,
    pub(crate) config: &'a TournamentConfig,
    pub(crate) team: Option<&'a TeamInfo>,
    pub(crate) snapshot: &'a TemplateSnapshot,
    pub(crate) layout: &'a CardLayout,
    pub(crate) assets: &'a CardAssets,
}

/// Fonts the card pipeline sets text in.
pub(crate) const CARD_FONT_ROLES: [FontRole; 3] =
    [FontRole::Medium, FontRole::MediumItalic, FontRole::Bold];

pub(crate) fn compose_card(p: &mut Painter<'_>, scene: &CardScene<'_>) -> CardResult<()> {
    let CardScene {
        card,
        config,
        team,
        snapshot,
        layout,
        assets,
    } = *scene;
    let inks = Inks::from_layout(layout);
    let canvas = Rect::new(0.0, 0.0, f64::from(CARD_WIDTH), f64::from(CARD_HEIGHT));
    let flags = &snapshot.flags;

    let photo = ImagePaint::from_prepared(&assets.photo)?;
    elements::draw_cropped_photo(p, &photo, &card.crop(), canvas);

    if flags.show_gradient {
        elements::draw_gradient(p, &snapshot.theme)?;
    }
    if flags.show_borders {
        elements::draw_borders(p, &snapshot.theme);
    }
    if flags.show_watermark_jersey
        && let Some(number) = card.person().jersey_number()
    {
        elements::draw_watermark(p, number, &snapshot.theme);
    }

    // Content boxes go under the frame so its window trims them.
    match &card.details {
        CardDetails::Rare(rare) => {
            let title = rare.title.as_deref().unwrap_or(RARE_TITLE_DEFAULT);
            let caption = rare.caption.as_deref().unwrap_or_default();
            elements::draw_rare_content(p, title, caption, layout, &inks);
        }
        CardDetails::SuperRare(_) | CardDetails::NationalTeam(_) => {}
        CardDetails::Player(person)
        | CardDetails::TeamStaff(person)
        | CardDetails::Media(person)
        | CardDetails::Official(person)
        | CardDetails::TournamentStaff(person) => {
            let first = person.first_name().unwrap_or_default();
            let last = person.last_name().unwrap_or_default();
            if !first.is_empty() || !last.is_empty() {
                elements::draw_name_boxes(p, first, last, layout, &inks);
            }
        }
    }

    elements::draw_frame(p, layout, &inks);

    let overlay = assets.overlay.as_ref().and_then(|img| {
        ImagePaint::from_prepared(img)
            .inspect_err(|err| tracing::warn!(%err, "skipping overlay"))
            .ok()
    });
    if let Some(overlay) = &overlay
        && snapshot.overlay_placement == OverlayPlacement::BelowText
    {
        elements::draw_overlay(p, overlay);
    }

    if let Some(logo) = &assets.logo {
        let team_logo = &layout.team_logo;
        let (x, y, max_width, max_height) = match card.details {
            CardDetails::NationalTeam(_) => {
                let b = &layout.national_team.logo;
                (b.x, b.y, b.max_width, b.max_height)
            }
            _ => (
                team_logo.x,
                team_logo.y,
                team_logo.max_width,
                team_logo.max_height,
            ),
        };
        let placement = LogoPlacement {
            x,
            y,
            max_width,
            max_height,
            stroke_width: team_logo.stroke_width,
            stroke_color: Rgba8::parse_or(&team_logo.stroke_color, Rgba8::WHITE),
        };
        elements::draw_logo(p, logo, &placement);
    }

    if let Some(text) = config.event_indicator() {
        elements::draw_event_badge(p, text, layout, &inks);
    }

    let photographer = card.photographer().unwrap_or_default();
    let camera = assets.camera_icon.as_ref();
    let team_name = team.map(|t| t.name.as_str()).unwrap_or_default();
    match &card.details {
        CardDetails::Rare(_) => {
            elements::draw_bottom_bar(
                p,
                photographer,
                RARE_BOTTOM_TEXT,
                CardRarity::Rare,
                camera,
                layout,
                &inks,
            );
        }
        CardDetails::SuperRare(rare) => {
            let person = &rare.person;
            elements::draw_super_rare_name(
                p,
                person.first_name().unwrap_or_default(),
                person.last_name().unwrap_or_default(),
                layout,
                &inks,
            );
            if let (Some(position), Some(number)) = (person.position(), person.jersey_number()) {
                elements::draw_position_number(p, position, Some(number), layout, &inks);
            }
            elements::draw_bottom_bar(
                p,
                photographer,
                team_name,
                CardRarity::SuperRare,
                camera,
                layout,
                &inks,
            );
        }
        CardDetails::NationalTeam(person) => {
            let full_name = format!(
                "{} {}",
                person.first_name().unwrap_or_default(),
                person.last_name().unwrap_or_default()
            );
            elements::draw_national_team_name(p, full_name.trim(), layout, &inks);

            let team_name = team
                .map(|t| t.name.as_str())
                .or(config.branding.default_team_name.as_deref())
                .unwrap_or(NATIONAL_TEAM_DEFAULT);
            let bottom_text = match person.jersey_number() {
                Some(number) => format!("{team_name} #{number}"),
                None => team_name.to_string(),
            };
            elements::draw_bottom_bar(
                p,
                photographer,
                &bottom_text,
                CardRarity::Uncommon,
                camera,
                layout,
                &inks,
            );
        }
        CardDetails::Player(person)
        | CardDetails::TeamStaff(person)
        | CardDetails::Media(person)
        | CardDetails::Official(person)
        | CardDetails::TournamentStaff(person) => {
            let rarity = card.rarity.unwrap_or(CardRarity::Common);
            let position = person.position().unwrap_or_default();
            let right_text = if card.card_type().shows_position_in_bottom_bar() {
                position
            } else {
                if !position.is_empty() {
                    elements::draw_position_number(
                        p,
                        position,
                        person.jersey_number(),
                        layout,
                        &inks,
                    );
                }
                team_name
            };
            elements::draw_bottom_bar(p, photographer, right_text, rarity, camera, layout, &inks);
        }
    }

    if let Some(overlay) = &overlay
        && snapshot.overlay_placement == OverlayPlacement::AboveText
    {
        elements::draw_overlay(p, overlay);
    }
    Ok(())
}

/// Red "not configured" card drawn when no usable layout is available.
pub(crate) fn compose_error_card(p: &mut Painter<'_>) {
    let w = f64::from(CARD_WIDTH);
    let h = f64::from(CARD_HEIGHT);
    p.fill_rect(Rect::new(0.0, 0.0, w, h), ERROR_CARD_FILL);

    let align = (HAlign::Center, VAlign::Middle);
    p.fill_text(
        "Tournament not configured",
        &TextStyle::new(FontRole::Fallback, 24.0),
        Point::new(w / 2.0, h / 2.0 - 20.0),
        align,
        Rgba8::WHITE,
    );
    p.fill_text(
        "Please contact support",
        &TextStyle::new(FontRole::Fallback, 16.0),
        Point::new(w / 2.0, h / 2.0 + 20.0),
        align,
        Rgba8::WHITE,
    );
}
