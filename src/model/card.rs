use std::path::Path;

use anyhow::Context;

use crate::foundation::error::CardResult;
use crate::model::crop::CropRect;
use crate::template::model::RenderMeta;

/// Kind of card, which decides the render layout.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum CardType {
    Player,
    TeamStaff,
    Media,
    Official,
    TournamentStaff,
    Rare,
    SuperRare,
    NationalTeam,
}

impl CardType {
    pub const ALL: [Self; 8] = [
        Self::Player,
        Self::TeamStaff,
        Self::Media,
        Self::Official,
        Self::TournamentStaff,
        Self::Rare,
        Self::SuperRare,
        Self::NationalTeam,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::TeamStaff => "team-staff",
            Self::Media => "media",
            Self::Official => "official",
            Self::TournamentStaff => "tournament-staff",
            Self::Rare => "rare",
            Self::SuperRare => "super-rare",
            Self::NationalTeam => "national-team",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// Card types whose role is shown in the bottom bar instead of a team name.
    pub fn shows_position_in_bottom_bar(self) -> bool {
        matches!(self, Self::Media | Self::Official | Self::TournamentStaff)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardRarity {
    Common,
    Uncommon,
    Rare,
    SuperRare,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardStatus {
    #[default]
    Draft,
    Submitted,
    Rendered,
}

/// Subject photo metadata.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPhoto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<CropRect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_key: Option<String>,
}

/// Who is on the card. Every field is optional; empty strings count as absent.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<String>,
}

impl PersonDetails {
    pub fn first_name(&self) -> Option<&str> {
        non_empty(&self.first_name)
    }

    pub fn last_name(&self) -> Option<&str> {
        non_empty(&self.last_name)
    }

    pub fn team_id(&self) -> Option<&str> {
        non_empty(&self.team_id)
    }

    pub fn team_name(&self) -> Option<&str> {
        non_empty(&self.team_name)
    }

    pub fn position(&self) -> Option<&str> {
        non_empty(&self.position)
    }

    pub fn jersey_number(&self) -> Option<&str> {
        non_empty(&self.jersey_number)
    }
}

/// Editorial content of rare and super-rare cards.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RareDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(flatten)]
    pub person: PersonDetails,
}

/// Per-type card content, tagged on the wire by `cardType`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "cardType", rename_all = "kebab-case")]
pub enum CardDetails {
    Player(PersonDetails),
    TeamStaff(PersonDetails),
    Media(PersonDetails),
    Official(PersonDetails),
    TournamentStaff(PersonDetails),
    NationalTeam(PersonDetails),
    Rare(RareDetails),
    SuperRare(RareDetails),
}

impl CardDetails {
    pub fn card_type(&self) -> CardType {
        match self {
            Self::Player(_) => CardType::Player,
            Self::TeamStaff(_) => CardType::TeamStaff,
            Self::Media(_) => CardType::Media,
            Self::Official(_) => CardType::Official,
            Self::TournamentStaff(_) => CardType::TournamentStaff,
            Self::NationalTeam(_) => CardType::NationalTeam,
            Self::Rare(_) => CardType::Rare,
            Self::SuperRare(_) => CardType::SuperRare,
        }
    }

    pub fn person(&self) -> &PersonDetails {
        match self {
            Self::Player(p)
            | Self::TeamStaff(p)
            | Self::Media(p)
            | Self::Official(p)
            | Self::TournamentStaff(p)
            | Self::NationalTeam(p) => p,
            Self::Rare(r) | Self::SuperRare(r) => &r.person,
        }
    }

    pub fn rare(&self) -> Option<&RareDetails> {
        match self {
            Self::Rare(r) | Self::SuperRare(r) => Some(r),
            _ => None,
        }
    }
}

/// A card as stored by the card service. Read-only input to rendering.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub tournament_id: String,
    #[serde(flatten)]
    pub details: CardDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<CardRarity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default)]
    pub status: CardStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photographer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<CardPhoto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_meta: Option<RenderMeta>,
}

impl Card {
    /// A draft card with no photo metadata.
    pub fn new(details: CardDetails) -> Self {
        Self {
            id: String::new(),
            tournament_id: String::new(),
            details,
            rarity: None,
            template_id: None,
            status: CardStatus::Draft,
            photographer: None,
            photo: None,
            render_key: None,
            render_meta: None,
        }
    }

    pub fn from_json(s: &str) -> CardResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> CardResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read card json from '{}'", path.display()))?;
        Self::from_json(&s)
    }

    pub fn card_type(&self) -> CardType {
        self.details.card_type()
    }

    pub fn person(&self) -> &PersonDetails {
        self.details.person()
    }

    pub fn photographer(&self) -> Option<&str> {
        non_empty(&self.photographer)
    }

    pub fn template_id(&self) -> Option<&str> {
        non_empty(&self.template_id)
    }

    /// Normalized crop of the subject photo; the whole photo when none was saved.
    pub fn crop(&self) -> CropRect {
        self.photo
            .as_ref()
            .and_then(|p| p.crop)
            .unwrap_or(CropRect::FULL)
            .clamped()
    }
}

pub(crate) fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "../../tests/unit/model/card.rs"]
mod tests;
