use super::enums::{CampaignType, Faction};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Live war state from the Diveharder `raw/status` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarStatus {
    #[serde(rename = "warId")]
    pub war_id: i64,
    /// Seconds since the war started.
    pub time: i64,
    #[serde(rename = "impactMultiplier", default)]
    pub impact_multiplier: f64,
    #[serde(rename = "storyBeatId32", default)]
    pub story_beat_id32: i64,
    #[serde(rename = "planetStatus", default)]
    pub planet_status: Vec<PlanetStatus>,
    #[serde(rename = "planetAttacks", default)]
    pub planet_attacks: Vec<PlanetAttack>,
    #[serde(default)]
    pub campaigns: Vec<RawCampaign>,
    #[serde(rename = "jointOperations", default)]
    pub joint_operations: Vec<Value>,
    #[serde(rename = "planetEvents", default)]
    pub planet_events: Vec<Value>,
    #[serde(rename = "globalEvents", default)]
    pub global_events: Vec<Value>,
}

impl WarStatus {
    pub fn planet_status(&self, planet_index: i32) -> Option<&PlanetStatus> {
        self.planet_status.iter().find(|s| s.index == planet_index)
    }

    /// Sum of players over every planet.
    pub fn total_players(&self) -> u64 {
        self.planet_status.iter().map(|s| s.players).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetStatus {
    pub index: i32,
    #[serde(default)]
    pub owner: i32,
    #[serde(default)]
    pub health: i64,
    #[serde(rename = "regenPerSecond", default)]
    pub regen_per_second: f64,
    #[serde(default)]
    pub players: u64,
}

impl PlanetStatus {
    pub fn faction(&self) -> Option<Faction> {
        Faction::parse(self.owner)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetAttack {
    pub source: i32,
    pub target: i32,
}

/// Campaign entry of the raw status document (planet referenced by index).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCampaign {
    pub id: i64,
    #[serde(rename = "planetIndex")]
    pub planet_index: i32,
    #[serde(rename = "type", default)]
    pub campaign_type: i32,
    #[serde(default)]
    pub count: u64,
}

impl RawCampaign {
    pub fn kind(&self) -> Option<CampaignType> {
        CampaignType::parse(self.campaign_type)
    }
}
