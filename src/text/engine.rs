use std::borrow::Cow;
use std::collections::HashMap;

use crate::text::fonts::{FontBook, FontFace, FontRole};

/// Font role, size and tracking for one run of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub role: FontRole,
    pub size: f64,
    pub letter_spacing: f64,
}

impl TextStyle {
    pub fn new(role: FontRole, size: f64) -> Self {
        Self {
            role,
            size,
            letter_spacing: 0.0,
        }
    }

    pub fn spaced(mut self, letter_spacing: f64) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }
}

/// A shaped single-line string, positioned with its baseline at `y = baseline`.
pub struct ShapedText {
    pub(crate) glyphs: Vec<vello_cpu::Glyph>,
    pub(crate) font: vello_cpu::peniko::FontData,
    pub(crate) size: f32,
    /// Advance width including trailing whitespace and tracking.
    pub width: f64,
    pub ascent: f64,
    pub descent: f64,
    pub baseline: f64,
    /// Slant the glyphs because no italic face was available.
    pub synthetic_italic: bool,
}

struct LoadedFace {
    font_ctx: parley::FontContext,
    family: String,
    weight: u16,
    italic: bool,
    font: vello_cpu::peniko::FontData,
    synthetic_italic: bool,
}

/// Shapes and measures card text with Parley, one font context per role.
///
/// Roles without a resolvable face measure as zero width and shape to nothing.
pub struct TextLayoutEngine {
    layout_ctx: parley::LayoutContext<()>,
    faces: HashMap<FontRole, LoadedFace>,
}

impl TextLayoutEngine {
    /// Resolve a face for every role in `roles` from `family_list` (a CSS font-family value).
    pub fn new(book: &FontBook, family_list: &str, roles: &[FontRole]) -> Self {
        let mut faces = HashMap::new();
        for &role in roles {
            let list = if role == FontRole::Fallback {
                "sans-serif"
            } else {
                family_list
            };
            let Some(face) = book.resolve(list, role) else {
                tracing::warn!(?role, families = list, "no font face available, text will be omitted");
                continue;
            };
            match load_face(face, role) {
                Some(loaded) => {
                    tracing::debug!(?role, family = %loaded.family, "font face ready");
                    faces.insert(role, loaded);
                }
                None => tracing::warn!(?role, "font face could not be registered"),
            }
        }

        Self {
            layout_ctx: parley::LayoutContext::new(),
            faces,
        }
    }

    pub fn has_face(&self, role: FontRole) -> bool {
        self.faces.contains_key(&role)
    }

    /// Shape `text` on a single line.
    pub fn shape(&mut self, text: &str, style: &TextStyle) -> Option<ShapedText> {
        if !style.size.is_finite() || style.size <= 0.0 {
            return None;
        }
        let face = self.faces.get_mut(&style.role)?;
        let size = style.size as f32;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut face.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(face.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::new(f32::from(face.weight)),
        ));
        builder.push_default(parley::style::StyleProperty::FontStyle(if face.italic {
            parley::style::FontStyle::Italic
        } else {
            parley::style::FontStyle::Normal
        }));
        builder.push_default(parley::style::StyleProperty::LetterSpacing(
            style.letter_spacing as f32,
        ));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);

        let mut glyphs = Vec::new();
        let (mut ascent, mut descent, mut baseline) = (0.0, 0.0, 0.0);
        for (i, line) in layout.lines().enumerate() {
            if i == 0 {
                let m = line.metrics();
                ascent = f64::from(m.ascent);
                descent = f64::from(m.descent);
                baseline = f64::from(m.baseline);
            }
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                glyphs.extend(run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                }));
            }
        }

        Some(ShapedText {
            glyphs,
            font: face.font.clone(),
            size,
            width: f64::from(layout.full_width()),
            ascent,
            descent,
            baseline,
            synthetic_italic: face.synthetic_italic,
        })
    }

    /// Advance width of `text`; zero when the role has no face.
    pub fn measure(&mut self, text: &str, style: &TextStyle) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        self.shape(text, style).map_or(0.0, |s| s.width)
    }
}

fn load_face(face: FontFace, role: FontRole) -> Option<LoadedFace> {
    // Only the registered face may be shaped; glyph ids must match the data we draw with.
    let mut font_ctx = parley::FontContext {
        collection: parley::fontique::Collection::new(parley::fontique::CollectionOptions {
            shared: false,
            system_fonts: false,
        }),
        source_cache: parley::fontique::SourceCache::default(),
    };
    let families = font_ctx
        .collection
        .register_fonts(parley::fontique::Blob::from(face.data.as_ref().clone()), None);
    let family_id = families.first().map(|(id, _)| *id)?;
    let family = font_ctx.collection.family_name(family_id)?.to_string();

    let font = vello_cpu::peniko::FontData::new(
        vello_cpu::peniko::Blob::from(face.data.as_ref().clone()),
        face.index,
    );

    Some(LoadedFace {
        font_ctx,
        family,
        weight: face.weight,
        italic: face.italic,
        font,
        synthetic_italic: role.italic() && !face.italic,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/text/engine.rs"]
mod tests;
