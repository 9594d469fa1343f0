use std::fmt;

use serde::Deserialize;

// ============================================================================
// Profile service response
// ============================================================================

/// Aggregated player statistics returned by the profile service.
///
/// Every field is optional on the wire: presenters render placeholders for
/// whatever the service leaves out.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub puuid: Option<String>,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
    pub summoner_level: Option<u32>,
    pub profile_icon_url: Option<String>,
    pub ranking: Option<Ranking>,
    pub main_champions: Option<Vec<ChampionStat>>,
    pub match_history: Option<Vec<MatchSummary>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ranking {
    pub tier: Option<String>,
    pub rank: Option<String>,
    pub league_points: Option<i64>,
    pub win_rate: Option<StatValue>,
}

impl Ranking {
    pub fn is_ranked(&self) -> bool {
        let tier = self.tier.as_deref().unwrap_or_default();
        !tier.is_empty() && !tier.eq_ignore_ascii_case("UNRANKED")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionStat {
    pub name: Option<String>,
    pub games: Option<StatValue>,
    pub win_rate: Option<StatValue>,
    pub kda: Option<StatValue>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub match_id: Option<String>,
    pub champion_name: Option<String>,
    pub kills: Option<u32>,
    pub deaths: Option<u32>,
    pub assists: Option<u32>,
    pub win: Option<bool>,
}

impl MatchSummary {
    pub fn outcome(&self) -> MatchOutcome {
        match self.win {
            Some(true) => MatchOutcome::Victory,
            Some(false) => MatchOutcome::Defeat,
            None => MatchOutcome::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Victory,
    Defeat,
    Unknown,
}

/// A statistic the service may send either as a number or as preformatted text
/// (`"54%"`, `"3.2:1"`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{v:.2}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
pub use tests::dummy_profile;
