use crate::layout::merge::Merge;
use crate::layout::presets::USQC26_LAYOUT;
use crate::layout::schema::{CardLayout, LAYOUT_KIND, LayoutPatch};
use crate::template::model::TemplateDefinition;

/// Apply a deep-partial override to `base`.
///
/// An override tagged with a foreign `kind` is discarded and `base` is returned unchanged;
/// an override without a `kind` is accepted. The result is always tagged [`LAYOUT_KIND`] and
/// shares nothing with `base`.
pub fn resolve_layout(base: &CardLayout, patch: Option<&LayoutPatch>) -> CardLayout {
    let Some(patch) = patch else {
        return base.clone();
    };
    if let Some(kind) = patch.kind.as_deref()
        && kind != LAYOUT_KIND
    {
        tracing::warn!(kind, "discarding layout override for unsupported layout kind");
        return base.clone();
    }

    let mut out = base.merged(patch.clone());
    out.kind = LAYOUT_KIND.to_string();
    out
}

/// Effective layout of a template over the canonical base layout.
pub fn resolve_template_layout(template: Option<&TemplateDefinition>) -> CardLayout {
    resolve_layout(&USQC26_LAYOUT, template.and_then(|t| t.layout.as_ref()))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/resolve.rs"]
mod tests;
