use super::enums::Faction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregated mission/kill statistics, used both galaxy-wide and per planet
/// by the community API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalStatistics {
    pub missions_won: u64,
    pub missions_lost: u64,
    pub mission_time: u64,
    pub terminid_kills: u64,
    pub automaton_kills: u64,
    pub illuminate_kills: u64,
    pub bullets_fired: u64,
    pub bullets_hit: u64,
    pub time_played: u64,
    pub deaths: u64,
    pub revives: u64,
    pub friendlies: u64,
    pub mission_success_rate: u64,
    pub accuracy: u64,
    pub player_count: u64,
}

/// Current war summary from `/api/v1/war`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarInfo {
    pub started: DateTime<Utc>,
    pub ended: DateTime<Utc>,
    pub now: DateTime<Utc>,
    #[serde(rename = "clientVersion", default)]
    pub client_version: String,
    #[serde(default)]
    pub factions: Vec<String>,
    #[serde(rename = "impactMultiplier", default)]
    pub impact_multiplier: f64,
    #[serde(default)]
    pub statistics: GlobalStatistics,
}

impl WarInfo {
    /// Factions taking part in the war; unknown names are skipped.
    pub fn parsed_factions(&self) -> Vec<Faction> {
        self.factions
            .iter()
            .filter_map(|name| Faction::from_name(name))
            .collect()
    }
}
