//! Pure view models derived from a [`PlayerProfile`].
//!
//! Presenters never fail: any field the profile service leaves out is
//! replaced by [`PLACEHOLDER`] or a fixed "no data" message.

use reqwest::Url;

use crate::profile::assets::{broken_icon_url, champion_icon_url, placeholder_icon_url};
use crate::profile::{MatchOutcome, PlayerProfile, StatValue};

pub const PLACEHOLDER: &str = "N/A";
pub const UNRANKED: &str = "Unranked";
pub const NO_CHAMPIONS: &str = "No main champion data available.";
pub const NO_MATCHES: &str = "No recent match history available.";

/// Icon reference with a single fallback for when it fails to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileIcon {
    pub primary: String,
    pub on_error: String,
}

impl ProfileIcon {
    pub fn resolve(&self, loaded: bool) -> &str {
        if loaded { &self.primary } else { &self.on_error }
    }

    /// The primary icon when it can be fetched at all, the error fallback
    /// otherwise.
    pub fn current(&self) -> &str {
        let loadable = Url::parse(&self.primary)
            .is_ok_and(|url| matches!(url.scheme(), "http" | "https"));
        self.resolve(loadable)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub initial: char,
    pub riot_id: String,
    pub level: String,
    pub rank: String,
    pub win_rate: Option<String>,
    pub icon: ProfileIcon,
}

pub fn profile_header(profile: &PlayerProfile) -> HeaderView {
    let initial = profile
        .game_name
        .as_deref()
        .and_then(|name| name.chars().next())
        .unwrap_or('?');

    let primary = profile
        .profile_icon_url
        .clone()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| placeholder_icon_url(initial));

    let riot_id = format!(
        "{}#{}",
        profile.game_name.as_deref().unwrap_or("Unknown"),
        profile.tag_line.as_deref().unwrap_or("???")
    );

    let level = match profile.summoner_level {
        Some(level) => format!("Level {level}"),
        None => format!("Level {PLACEHOLDER}"),
    };

    let ranked = profile.ranking.as_ref().filter(|r| r.is_ranked());

    let rank = match ranked {
        Some(r) => {
            let division = [r.tier.as_deref(), r.rank.as_deref()]
                .into_iter()
                .flatten()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            let lp = r
                .league_points
                .map(|lp| lp.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string());
            format!("{division} ({lp} LP)")
        }
        None => UNRANKED.to_string(),
    };

    let win_rate = ranked
        .and_then(|r| r.win_rate.as_ref())
        .map(|wr| format!("Winrate: {wr}"));

    HeaderView {
        initial,
        riot_id,
        level,
        rank,
        win_rate,
        icon: ProfileIcon {
            primary,
            on_error: broken_icon_url(),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionRow {
    pub name: String,
    pub games: String,
    pub win_rate: String,
    pub kda: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChampionPanel {
    Empty,
    Rows(Vec<ChampionRow>),
}

pub fn champion_table(profile: &PlayerProfile) -> ChampionPanel {
    let Some(champions) = profile.main_champions.as_ref().filter(|c| !c.is_empty()) else {
        return ChampionPanel::Empty;
    };

    ChampionPanel::Rows(
        champions
            .iter()
            .map(|champ| ChampionRow {
                name: champ
                    .name
                    .clone()
                    .unwrap_or_else(|| PLACEHOLDER.to_string()),
                games: stat_or_placeholder(champ.games.as_ref()),
                win_rate: stat_or_placeholder(champ.win_rate.as_ref()),
                kda: stat_or_placeholder(champ.kda.as_ref()),
            })
            .collect(),
    )
}

fn stat_or_placeholder(value: Option<&StatValue>) -> String {
    value
        .map(StatValue::to_string)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEntry {
    pub match_id: String,
    pub champion: String,
    pub champion_icon_url: Option<String>,
    pub kda: String,
    pub outcome: MatchOutcome,
}

impl MatchEntry {
    pub fn result_label(&self) -> &'static str {
        match self.outcome {
            MatchOutcome::Victory => "Victory",
            MatchOutcome::Defeat => "Defeat",
            MatchOutcome::Unknown => PLACEHOLDER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchPanel {
    Empty,
    Entries(Vec<MatchEntry>),
}

pub fn match_history(profile: &PlayerProfile, ddragon_version: &str) -> MatchPanel {
    let Some(matches) = profile.match_history.as_ref().filter(|m| !m.is_empty()) else {
        return MatchPanel::Empty;
    };

    MatchPanel::Entries(
        matches
            .iter()
            .map(|m| {
                let stat = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_else(|| "-".into());

                MatchEntry {
                    match_id: m.match_id.clone().unwrap_or_default(),
                    champion: m
                        .champion_name
                        .clone()
                        .unwrap_or_else(|| PLACEHOLDER.to_string()),
                    champion_icon_url: m
                        .champion_name
                        .as_deref()
                        .map(|name| champion_icon_url(ddragon_version, name)),
                    kda: format!("{}/{}/{}", stat(m.kills), stat(m.deaths), stat(m.assists)),
                    outcome: m.outcome(),
                }
            })
            .collect(),
    )
}
