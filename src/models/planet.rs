use super::enums::Faction;
use super::war::GlobalStatistics;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Biome {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Environmental condition on a planet (e.g. "Intense Heat").
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Hazard {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Active defence event on a planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetEvent {
    pub id: i64,
    #[serde(rename = "eventType", default)]
    pub event_type: i32,
    #[serde(default)]
    pub faction: String,
    #[serde(default)]
    pub health: i64,
    #[serde(rename = "maxHealth", default)]
    pub max_health: i64,
    #[serde(rename = "startTime")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(rename = "endTime")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(rename = "campaignId", default)]
    pub campaign_id: i64,
    #[serde(rename = "jointOperationIds", default)]
    pub joint_operation_ids: Vec<i64>,
}

/// Planet as served by `/api/v1/planets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub index: i32,
    pub name: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub biome: Option<Biome>,
    #[serde(default)]
    pub hazards: Vec<Hazard>,
    #[serde(default)]
    pub hash: i64,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub waypoints: Vec<i32>,
    #[serde(rename = "maxHealth", default)]
    pub max_health: i64,
    #[serde(default)]
    pub health: i64,
    #[serde(default)]
    pub disabled: bool,
    #[serde(rename = "initialOwner", default)]
    pub initial_owner: String,
    #[serde(rename = "currentOwner", default)]
    pub current_owner: String,
    #[serde(rename = "regenPerSecond", default)]
    pub regen_per_second: f64,
    #[serde(default)]
    pub event: Option<PlanetEvent>,
    #[serde(default)]
    pub statistics: GlobalStatistics,
    #[serde(default)]
    pub attacking: Vec<i32>,
}

impl Planet {
    /// How much of the planet's health has been taken, in percent.
    /// Returns 0.0 for planets without a health pool.
    pub fn liberation_percentage(&self) -> f64 {
        if self.max_health <= 0 {
            return 0.0;
        }
        let remaining = self.health as f64 / self.max_health as f64;
        ((1.0 - remaining) * 100.0).clamp(0.0, 100.0)
    }

    pub fn owner(&self) -> Option<Faction> {
        Faction::from_name(&self.current_owner)
    }

    pub fn players(&self) -> u64 {
        self.statistics.player_count
    }
}
