use super::enums::Faction;
use super::planet::Position;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Static war layout from the Diveharder `raw/war_info` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawWarInfo {
    #[serde(rename = "warId")]
    pub war_id: i64,
    /// Unix timestamp (seconds).
    #[serde(rename = "startDate")]
    pub start_date: i64,
    /// Unix timestamp (seconds).
    #[serde(rename = "endDate")]
    pub end_date: i64,
    #[serde(rename = "layoutVersion", default)]
    pub layout_version: i64,
    #[serde(rename = "minimumClientVersion", default)]
    pub minimum_client_version: String,
    #[serde(rename = "planetInfos", default)]
    pub planet_infos: Vec<PlanetInfo>,
    #[serde(rename = "homeWorlds", default)]
    pub home_worlds: Vec<HomeWorld>,
    #[serde(rename = "capitalInfos", default)]
    pub capital_infos: Vec<Value>,
    #[serde(rename = "planetPermanentEffects", default)]
    pub planet_permanent_effects: Vec<Value>,
}

impl RawWarInfo {
    pub fn start_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.start_date, 0)
    }

    pub fn end_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.end_date, 0)
    }

    /// Converts in-game time (seconds since the war started) to wall-clock time.
    pub fn game_time_to_utc(&self, game_seconds: i64) -> Option<DateTime<Utc>> {
        self.start_datetime()?
            .checked_add_signed(Duration::try_seconds(game_seconds)?)
    }

    pub fn planet_info(&self, planet_index: i32) -> Option<&PlanetInfo> {
        self.planet_infos.iter().find(|p| p.index == planet_index)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetInfo {
    pub index: i32,
    #[serde(rename = "settingsHash", default)]
    pub settings_hash: i64,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub waypoints: Vec<i32>,
    #[serde(default)]
    pub sector: i32,
    #[serde(rename = "maxHealth", default)]
    pub max_health: i64,
    #[serde(default)]
    pub disabled: bool,
    #[serde(rename = "initialOwner", default)]
    pub initial_owner: i32,
}

impl PlanetInfo {
    pub fn initial_faction(&self) -> Option<Faction> {
        Faction::parse(self.initial_owner)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeWorld {
    pub race: i32,
    #[serde(rename = "planetIndices", default)]
    pub planet_indices: Vec<i32>,
}

impl HomeWorld {
    pub fn faction(&self) -> Option<Faction> {
        Faction::parse(self.race)
    }
}
