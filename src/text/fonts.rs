//! Font discovery.
//!
//! Faces are found in a `fontdb` database (system fonts plus any extra directories) by CSS
//! family list, weight and style. Fonts are optional: when nothing matches, text that needs
//! the face is simply not drawn.

use std::path::Path;
use std::sync::Arc;

use usvg::fontdb;

/// Weight and slant a piece of card text is set in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontRole {
    /// 500 upright: bottom bar, position/number, centered names.
    Medium,
    /// 500 italic: angled name boxes and rare-card text.
    MediumItalic,
    /// 700 upright: event badge and watermark.
    Bold,
    /// 400 upright sans-serif, for the error card.
    Fallback,
}

impl FontRole {
    pub fn weight(self) -> u16 {
        match self {
            Self::Medium | Self::MediumItalic => 500,
            Self::Bold => 700,
            Self::Fallback => 400,
        }
    }

    pub fn italic(self) -> bool {
        matches!(self, Self::MediumItalic)
    }
}

/// A resolved face: raw font bytes plus the face index inside them.
#[derive(Clone, Debug)]
pub struct FontFace {
    pub data: Arc<Vec<u8>>,
    pub index: u32,
    pub family: String,
    pub weight: u16,
    /// The face itself is italic or oblique.
    pub italic: bool,
}

/// Searchable collection of font faces.
pub struct FontBook {
    db: fontdb::Database,
}

impl Default for FontBook {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBook")
            .field("faces", &self.db.len())
            .finish()
    }
}

impl FontBook {
    /// An empty book. Every lookup misses until fonts are added.
    pub fn new() -> Self {
        Self {
            db: fontdb::Database::new(),
        }
    }

    /// A book seeded with the fonts installed on this machine.
    pub fn with_system_fonts() -> Self {
        let mut book = Self::new();
        book.db.load_system_fonts();
        tracing::debug!(faces = book.db.len(), "loaded system fonts");
        book
    }

    /// Add every `.ttf`, `.otf` and `.ttc` file directly inside `dir`. Missing directories and
    /// unreadable files are skipped.
    pub fn load_fonts_dir(&mut self, dir: &Path) {
        let Ok(rd) = std::fs::read_dir(dir) else {
            tracing::warn!(dir = %dir.display(), "font directory not readable");
            return;
        };

        for entry in rd.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
                continue;
            };
            let ext = ext.to_ascii_lowercase();
            if ext != "ttf" && ext != "otf" && ext != "ttc" {
                continue;
            }
            if let Err(err) = self.db.load_font_file(&path) {
                tracing::warn!(path = %path.display(), %err, "skipping unreadable font");
            }
        }
    }

    pub fn load_font_data(&mut self, bytes: Vec<u8>) {
        self.db.load_font_data(bytes);
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    /// Best face for a CSS `font-family` list at the given role.
    ///
    /// Named families are tried in order, then generic families; if nothing matches, any
    /// face in the book is used so that text still renders.
    pub fn resolve(&self, family_list: &str, role: FontRole) -> Option<FontFace> {
        if self.db.is_empty() {
            return None;
        }

        let parsed = parse_family_list(family_list);
        let mut families: Vec<fontdb::Family<'_>> = parsed.iter().map(|f| f.as_fontdb()).collect();
        families.push(fontdb::Family::SansSerif);

        let query = fontdb::Query {
            families: &families,
            weight: fontdb::Weight(role.weight()),
            stretch: fontdb::Stretch::Normal,
            style: if role.italic() {
                fontdb::Style::Italic
            } else {
                fontdb::Style::Normal
            },
        };

        let id = self
            .db
            .query(&query)
            .or_else(|| self.db.faces().next().map(|f| f.id))?;
        let info = self.db.face(id)?;
        let family = info
            .families
            .first()
            .map(|(name, _)| name.clone())
            .unwrap_or_default();
        let weight = info.weight.0;
        let italic = info.style != fontdb::Style::Normal;
        let (data, index) = self
            .db
            .with_face_data(id, |data, index| (data.to_vec(), index))?;

        Some(FontFace {
            data: Arc::new(data),
            index,
            family,
            weight,
            italic,
        })
    }
}

/// One entry of a CSS `font-family` list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FamilyName {
    Named(String),
    Serif,
    SansSerif,
    Monospace,
    Cursive,
    Fantasy,
}

impl FamilyName {
    fn as_fontdb(&self) -> fontdb::Family<'_> {
        match self {
            Self::Named(name) => fontdb::Family::Name(name),
            Self::Serif => fontdb::Family::Serif,
            Self::SansSerif => fontdb::Family::SansSerif,
            Self::Monospace => fontdb::Family::Monospace,
            Self::Cursive => fontdb::Family::Cursive,
            Self::Fantasy => fontdb::Family::Fantasy,
        }
    }
}

/// Parse a CSS `font-family` value such as `"Avenir Next", Helvetica, sans-serif`.
pub fn parse_family_list(list: &str) -> Vec<FamilyName> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|entry| {
            let quoted = entry.len() >= 2
                && ((entry.starts_with('"') && entry.ends_with('"'))
                    || (entry.starts_with('\'') && entry.ends_with('\'')));
            if quoted {
                return FamilyName::Named(entry[1..entry.len() - 1].to_string());
            }
            match entry.to_ascii_lowercase().as_str() {
                "serif" => FamilyName::Serif,
                "sans-serif" => FamilyName::SansSerif,
                "monospace" => FamilyName::Monospace,
                "cursive" => FamilyName::Cursive,
                "fantasy" => FamilyName::Fantasy,
                _ => FamilyName::Named(entry.to_string()),
            }
        })
        .collect()
}
