use std::sync::LazyLock;

use crate::layout::merge::Merge;
use crate::layout::resolve::resolve_template_layout;
use crate::model::card::{Card, CardType};
use crate::model::tournament::TournamentConfig;
use crate::template::model::{TemplateDefinition, TemplateFlags, TemplateSnapshot, TemplateTheme};

/// Template id used when neither the card nor the tournament picks one.
pub const DEFAULT_TEMPLATE_ID: &str = "classic";

/// Built-in templates used when a resolved id is not configured on the tournament.
pub static FALLBACK_TEMPLATES: LazyLock<[TemplateDefinition; 2]> = LazyLock::new(|| {
    [
        TemplateDefinition::new("usqc26", "USQC26"),
        TemplateDefinition::new("classic", "Classic"),
    ]
});

pub fn fallback_template(id: &str) -> Option<&'static TemplateDefinition> {
    FALLBACK_TEMPLATES.iter().find(|t| t.id == id)
}

/// Pick a template id.
///
/// Precedence: explicit id (trimmed, if non-empty), then the tournament's per-card-type
/// default, then the tournament fallback, then [`DEFAULT_TEMPLATE_ID`].
pub fn resolve_template_id(
    explicit: Option<&str>,
    card_type: Option<CardType>,
    config: Option<&TournamentConfig>,
) -> String {
    if let Some(direct) = explicit.map(str::trim).filter(|s| !s.is_empty()) {
        return direct.to_string();
    }

    let defaults = config.and_then(|c| c.default_templates.as_ref());
    let by_type = card_type
        .zip(defaults)
        .and_then(|(t, d)| d.by_card_type.get(&t))
        .filter(|s| !s.is_empty());
    if let Some(id) = by_type {
        return id.clone();
    }

    match defaults.map(|d| d.fallback.as_str()) {
        Some(fallback) if !fallback.is_empty() => fallback.to_string(),
        _ => DEFAULT_TEMPLATE_ID.to_string(),
    }
}

/// Configured template with id `id`, if any.
pub fn find_template<'a>(
    config: Option<&'a TournamentConfig>,
    id: Option<&str>,
) -> Option<&'a TemplateDefinition> {
    let id = id.filter(|s| !s.is_empty())?;
    config?.templates.iter().find(|t| t.id == id)
}

/// Freeze a template into the values a render reads.
pub fn snapshot_template(template: &TemplateDefinition) -> TemplateSnapshot {
    let mut theme = TemplateTheme::default();
    if let Some(patch) = &template.theme {
        theme.merge(patch.clone());
    }
    let mut flags = TemplateFlags::default();
    if let Some(patch) = &template.flags {
        flags.merge(patch.clone());
    }

    TemplateSnapshot {
        overlay_key: template.overlay_key.clone().filter(|k| !k.is_empty()),
        theme,
        flags,
        overlay_placement: template.overlay_placement.unwrap_or_default(),
        layout: Some(resolve_template_layout(Some(template))),
    }
}

/// Template id and frozen snapshot chosen for a render.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTemplate {
    pub template_id: String,
    pub snapshot: TemplateSnapshot,
}

/// Resolve the effective template for `card`.
///
/// `template_id` overrides the card's stored template. An id that is neither configured nor
/// built in falls back to the `usqc26` template while keeping the requested id.
pub fn resolve_template_snapshot(
    card: &Card,
    config: &TournamentConfig,
    template_id: Option<&str>,
) -> ResolvedTemplate {
    let requested = template_id.or(card.template_id.as_deref());
    let template_id = resolve_template_id(requested, Some(card.card_type()), Some(config));

    let template = find_template(Some(config), Some(&template_id))
        .or_else(|| fallback_template(&template_id))
        .unwrap_or(&FALLBACK_TEMPLATES[0]);
    tracing::debug!(template_id, template = %template.id, "resolved template");

    ResolvedTemplate {
        snapshot: snapshot_template(template),
        template_id,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/resolve.rs"]
mod tests;
