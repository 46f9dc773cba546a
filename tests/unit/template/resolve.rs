use super::*;
use crate::layout::presets::USQC26_LAYOUT;
use crate::model::card::{CardDetails, PersonDetails};
use crate::template::model::OverlayPlacement;

fn config() -> TournamentConfig {
    TournamentConfig::from_json(
        r##"{
            "id": "t",
            "defaultTemplates": {"fallback": "classic", "byCardType": {"rare": "gold", "media": ""}},
            "templates": [
                {
                    "id": "gold",
                    "label": "Gold",
                    "overlayKey": "overlays/gold.png",
                    "theme": {"watermark": "#ffd700"},
                    "flags": {"showGradient": true},
                    "overlayPlacement": "aboveText",
                    "layout": {"frame": {"innerRadius": 0}}
                },
                {"id": "alien", "label": "Alien", "layout": {"kind": "other-v9", "frame": {"innerX": 0}}}
            ]
        }"##,
    )
    .unwrap()
}

#[test]
fn template_id_precedence() {
    let cfg = config();
    assert_eq!(
        resolve_template_id(Some("  custom "), Some(CardType::Rare), Some(&cfg)),
        "custom"
    );
    assert_eq!(resolve_template_id(Some(" "), Some(CardType::Rare), Some(&cfg)), "gold");
    assert_eq!(resolve_template_id(None, Some(CardType::Media), Some(&cfg)), "classic");
    assert_eq!(resolve_template_id(None, Some(CardType::Player), Some(&cfg)), "classic");
    assert_eq!(resolve_template_id(None, None, None), DEFAULT_TEMPLATE_ID);

    let mut bare = cfg.clone();
    bare.default_templates.as_mut().unwrap().fallback.clear();
    assert_eq!(resolve_template_id(None, Some(CardType::Player), Some(&bare)), "classic");
}

#[test]
fn find_template_requires_config_and_id() {
    let cfg = config();
    assert_eq!(find_template(Some(&cfg), Some("gold")).unwrap().label, "Gold");
    assert!(find_template(Some(&cfg), Some("missing")).is_none());
    assert!(find_template(Some(&cfg), Some("")).is_none());
    assert!(find_template(Some(&cfg), None).is_none());
    assert!(find_template(None, Some("gold")).is_none());
}

#[test]
fn snapshot_merges_theme_flags_and_layout() {
    let card = Card::new(CardDetails::Rare(Default::default()));
    let resolved = resolve_template_snapshot(&card, &config(), None);
    assert_eq!(resolved.template_id, "gold");

    let snap = resolved.snapshot;
    assert_eq!(snap.overlay_key.as_deref(), Some("overlays/gold.png"));
    assert_eq!(snap.theme.watermark, "#ffd700");
    assert_eq!(snap.theme.gradient_end, TemplateTheme::default().gradient_end);
    assert!(snap.flags.show_gradient);
    assert!(!snap.flags.show_borders);
    assert_eq!(snap.overlay_placement, OverlayPlacement::AboveText);

    let layout = snap.layout.unwrap();
    assert_eq!(layout.kind, "usqc26-v1");
    assert_eq!(layout.frame.inner_radius, 0.0);
}

#[test]
fn foreign_layout_kind_falls_back_to_base_layout() {
    let mut card = Card::new(CardDetails::Player(PersonDetails::default()));
    card.template_id = Some("alien".into());
    let resolved = resolve_template_snapshot(&card, &config(), None);
    assert_eq!(resolved.snapshot.layout.as_ref(), Some(&*USQC26_LAYOUT));
}

#[test]
fn unknown_template_uses_builtin_fallback_and_keeps_id() {
    let card = Card::new(CardDetails::Player(PersonDetails::default()));
    let resolved = resolve_template_snapshot(&card, &config(), Some("vintage"));
    assert_eq!(resolved.template_id, "vintage");
    assert_eq!(resolved.snapshot.flags, TemplateFlags::default());
    assert_eq!(resolved.snapshot.overlay_placement, OverlayPlacement::BelowText);
    assert_eq!(resolved.snapshot.overlay_key, None);
    assert_eq!(resolved.snapshot.layout.as_ref(), Some(&*USQC26_LAYOUT));
}

#[test]
fn explicit_id_beats_card_template() {
    let mut card = Card::new(CardDetails::Player(PersonDetails::default()));
    card.template_id = Some("gold".into());
    assert_eq!(
        resolve_template_snapshot(&card, &config(), None).template_id,
        "gold"
    );
    assert_eq!(
        resolve_template_snapshot(&card, &config(), Some("classic")).template_id,
        "classic"
    );
}

#[test]
fn snapshot_json_is_camel_case_and_lenient() {
    let snap = snapshot_template(&TemplateDefinition::new("x", "X"));
    let v = serde_json::to_value(&snap).unwrap();
    assert_eq!(v["overlayPlacement"], "belowText");
    assert_eq!(v["flags"]["showWatermarkJersey"], false);
    assert_eq!(v["layout"]["kind"], "usqc26-v1");

    let legacy: TemplateSnapshot =
        serde_json::from_str(r#"{"layout": {"kind": "legacy"}}"#).unwrap();
    assert!(legacy.layout.is_none());
    assert!(legacy.supported_layout().is_none());
    assert_eq!(legacy.theme, TemplateTheme::default());
}
