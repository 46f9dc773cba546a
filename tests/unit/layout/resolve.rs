use super::*;
use crate::layout::presets::{QCN26_LAYOUT, preset};

fn patch(json: serde_json::Value) -> LayoutPatch {
    LayoutPatch::from_value(json)
}

#[test]
fn absent_override_is_identity() {
    assert_eq!(resolve_layout(&USQC26_LAYOUT, None), *USQC26_LAYOUT);
    assert_eq!(
        resolve_layout(&USQC26_LAYOUT, Some(&LayoutPatch::default())),
        *USQC26_LAYOUT
    );
}

#[test]
fn foreign_kind_returns_base_unchanged() {
    let p = patch(serde_json::json!({
        "kind": "classic-v0",
        "frame": {"innerRadius": 0}
    }));
    assert_eq!(resolve_layout(&USQC26_LAYOUT, Some(&p)), *USQC26_LAYOUT);
}

#[test]
fn missing_kind_is_merged_and_tagged() {
    let p = patch(serde_json::json!({"frame": {"innerRadius": 0}}));
    let out = resolve_layout(&USQC26_LAYOUT, Some(&p));
    assert_eq!(out.kind, LAYOUT_KIND);
    assert_eq!(out.frame.inner_radius, 0.0);
    assert_eq!(out.frame.inner_x, USQC26_LAYOUT.frame.inner_x);
    assert_eq!(out.name, USQC26_LAYOUT.name);
}

#[test]
fn nested_override_touches_only_named_leaves() {
    let p = patch(serde_json::json!({
        "kind": "usqc26-v1",
        "name": {"lastNameBox": {"height": 90}, "letterSpacing": {"firstName": 2}},
        "palette": {"primary": "#000000"}
    }));
    let out = resolve_layout(&USQC26_LAYOUT, Some(&p));
    assert_eq!(out.name.last_name_box.height, 90.0);
    assert_eq!(out.name.last_name_box.width, 1000.0);
    assert_eq!(out.name.first_name_box, USQC26_LAYOUT.name.first_name_box);
    assert_eq!(out.name.letter_spacing.first_name, 2.0);
    assert_eq!(out.name.letter_spacing.last_name, 6.0);
    assert_eq!(out.palette.primary, "#000000");
    assert_eq!(out.palette.secondary, "#c8d7e9");
}

#[test]
fn mistyped_and_null_fields_are_skipped() {
    let p = patch(serde_json::json!({
        "frame": {"innerRadius": "round", "innerX": null, "innerY": 10},
        "bottomBar": 42
    }));
    let out = resolve_layout(&USQC26_LAYOUT, Some(&p));
    assert_eq!(out.frame.inner_radius, 29.0);
    assert_eq!(out.frame.inner_x, 56.0);
    assert_eq!(out.frame.inner_y, 10.0);
    assert_eq!(out.bottom_bar, USQC26_LAYOUT.bottom_bar);
}

#[test]
fn non_object_override_is_empty() {
    assert_eq!(patch(serde_json::json!("nope")), LayoutPatch::default());
    assert_eq!(patch(serde_json::json!([1, 2])), LayoutPatch::default());
}

#[test]
fn result_does_not_alias_base() {
    let mut out = resolve_layout(&USQC26_LAYOUT, None);
    out.palette.primary.push_str("ff");
    assert_eq!(USQC26_LAYOUT.palette.primary, "#1b4278");
}

#[test]
fn qcn26_preset_differs_only_in_palette_and_corners() {
    let q = &*QCN26_LAYOUT;
    assert_eq!(q.palette.primary, "#1f1f1f");
    assert_eq!(q.palette.secondary, "#8a1f2f");
    assert_eq!(q.frame.inner_radius, 0.0);
    assert_eq!(q.name, USQC26_LAYOUT.name);
    assert_eq!(q.bottom_bar, USQC26_LAYOUT.bottom_bar);
    assert!(q.is_supported());
    assert!(preset("usqc26").is_some());
    assert!(preset("retro").is_none());
}

#[test]
fn layout_round_trips_through_camel_case_json() {
    let v = serde_json::to_value(&*USQC26_LAYOUT).unwrap();
    assert_eq!(v["kind"], "usqc26-v1");
    assert_eq!(v["name"]["firstNameBox"]["height"], 46.0);
    assert_eq!(v["positionNumber"]["numberXOffset"], -2.0);
    let back: CardLayout = serde_json::from_value(v).unwrap();
    assert_eq!(back, *USQC26_LAYOUT);
}

#[test]
fn template_layout_uses_canonical_base() {
    assert_eq!(resolve_template_layout(None), *USQC26_LAYOUT);
}
