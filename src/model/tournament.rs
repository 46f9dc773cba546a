use std::path::Path;

use anyhow::Context;

use crate::foundation::error::CardResult;
use crate::model::card::{CardType, PersonDetails, non_empty};
use crate::template::model::{TemplateDefaults, TemplateDefinition};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    #[serde(default)]
    pub tournament_logo_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_logo_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    /// Short label shown in the event badge, e.g. `"USQC26"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_indicator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_team_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo_key: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTypeConfig {
    #[serde(rename = "type")]
    pub card_type: CardType,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub show_team_field: bool,
    #[serde(default)]
    pub show_jersey_number: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub positions: Vec<String>,
    /// Replaces the team/tournament logo for every card of this type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_override_key: Option<String>,
}

fn enabled_by_default() -> bool {
    true
}

/// Per-tournament configuration: branding, roster, card types and templates.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentConfig {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub branding: Branding,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub card_types: Vec<CardTypeConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub templates: Vec<TemplateDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_templates: Option<TemplateDefaults>,
}

/// Team shown on a card: a roster entry, or a free-form name without a logo.
#[derive(Clone, Debug, PartialEq)]
pub struct TeamInfo {
    pub name: String,
    pub logo_key: Option<String>,
}

impl TournamentConfig {
    pub fn from_json(s: &str) -> CardResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> CardResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read tournament config from '{}'", path.display()))?;
        Self::from_json(&s)
    }

    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn card_type_config(&self, card_type: CardType) -> Option<&CardTypeConfig> {
        self.card_types.iter().find(|c| c.card_type == card_type)
    }

    /// Roster team by id when it exists, otherwise the free-form team name.
    pub fn team_info(&self, person: &PersonDetails) -> Option<TeamInfo> {
        if let Some(team) = person.team_id().and_then(|id| self.team(id)) {
            return Some(TeamInfo {
                name: team.name.clone(),
                logo_key: Some(team.logo_key.clone()).filter(|k| !k.is_empty()),
            });
        }
        person.team_name().map(|name| TeamInfo {
            name: name.to_string(),
            logo_key: None,
        })
    }

    /// Logo for a card: card-type override, then team logo, then tournament logo.
    pub fn logo_key<'a>(&'a self, card_type: CardType, team: Option<&'a TeamInfo>) -> Option<&'a str> {
        self.card_type_config(card_type)
            .and_then(|c| non_empty(&c.logo_override_key))
            .or_else(|| team.and_then(|t| non_empty(&t.logo_key)))
            .or_else(|| Some(self.branding.tournament_logo_key.as_str()).filter(|k| !k.is_empty()))
    }

    pub fn event_indicator(&self) -> Option<&str> {
        non_empty(&self.branding.event_indicator)
    }
}
