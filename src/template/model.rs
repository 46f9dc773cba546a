use std::collections::BTreeMap;

use crate::layout::merge::mergeable;
use crate::layout::schema::{CardLayout, LayoutPatch};
use crate::model::card::CardType;

mergeable! {
    /// Colors used by the generic decorations (gradient, borders, watermark).
    pub struct TemplateTheme => ThemePatch {
        pub gradient_start: String,
        pub gradient_end: String,
        pub border: String,
        pub accent: String,
        pub label: String,
        pub name_color: String,
        pub meta: String,
        pub watermark: String,
    }
}

impl Default for TemplateTheme {
    fn default() -> Self {
        Self {
            gradient_start: "rgba(15, 23, 42, 0)".into(),
            gradient_end: "rgba(15, 23, 42, 0.85)".into(),
            border: "rgba(255, 255, 255, 0.1)".into(),
            accent: "rgba(255, 255, 255, 0.5)".into(),
            label: "#ffffff".into(),
            name_color: "#ffffff".into(),
            meta: "#ffffff".into(),
            watermark: "rgba(255, 255, 255, 0.12)".into(),
        }
    }
}

mergeable! {
    /// Optional decorations. All off unless a template turns them on.
    #[derive(Default)]
    pub struct TemplateFlags => FlagsPatch {
        pub show_gradient: bool,
        pub show_borders: bool,
        pub show_watermark_jersey: bool,
    }
}

/// Where the template overlay image sits relative to the text layers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlayPlacement {
    #[default]
    BelowText,
    AboveText,
}

/// A named template as configured on a tournament.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDefinition {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_key: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::layout::merge::lenient"
    )]
    pub theme: Option<ThemePatch>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::layout::merge::lenient"
    )]
    pub flags: Option<FlagsPatch>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::layout::merge::lenient"
    )]
    pub overlay_placement: Option<OverlayPlacement>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::layout::merge::lenient"
    )]
    pub layout: Option<LayoutPatch>,
}

impl TemplateDefinition {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            overlay_key: None,
            theme: None,
            flags: None,
            overlay_placement: None,
            layout: None,
        }
    }
}

/// Tournament-level template selection.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDefaults {
    #[serde(default)]
    pub fallback: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub by_card_type: BTreeMap<CardType, String>,
}

/// Everything a render needs from a template, frozen at render time.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_key: Option<String>,
    #[serde(default)]
    pub theme: TemplateTheme,
    #[serde(default)]
    pub flags: TemplateFlags,
    #[serde(default)]
    pub overlay_placement: OverlayPlacement,
    /// Resolved layout. A snapshot without a usable layout renders the error card.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::layout::merge::lenient"
    )]
    pub layout: Option<CardLayout>,
}

impl TemplateSnapshot {
    /// The layout, if it is one the compositor can draw.
    pub fn supported_layout(&self) -> Option<&CardLayout> {
        self.layout.as_ref().filter(|l| l.is_supported())
    }
}

/// Persisted record of a final render.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderMeta {
    pub key: String,
    pub template_id: String,
    pub rendered_at: String,
    pub template_snapshot: TemplateSnapshot,
}
