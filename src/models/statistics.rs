use serde::{Deserialize, Serialize};

/// Galaxy-wide statistics from the Diveharder `raw/planet_stats` endpoint.
/// Wire names follow the game's own spelling (`bugKills`, `accurracy`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyStatistics {
    #[serde(rename = "missionsWon")]
    pub missions_won: u64,
    #[serde(rename = "missionsLost")]
    pub missions_lost: u64,
    #[serde(rename = "missionTime")]
    pub mission_time: u64,
    #[serde(rename = "bugKills")]
    pub bug_kills: u64,
    #[serde(rename = "automatonKills")]
    pub automaton_kills: u64,
    #[serde(rename = "illuminateKills")]
    pub illuminate_kills: u64,
    #[serde(rename = "bulletsFired")]
    pub bullets_fired: u64,
    #[serde(rename = "bulletsHit")]
    pub bullets_hit: u64,
    #[serde(rename = "timePlayed")]
    pub time_played: u64,
    pub deaths: u64,
    pub revives: u64,
    pub friendlies: u64,
    #[serde(rename = "missionSuccessRate")]
    pub mission_success_rate: u64,
    #[serde(rename = "accurracy")]
    pub accuracy: u64,
}

impl GalaxyStatistics {
    /// Label/value pairs in display order.
    pub fn rows(&self) -> Vec<(&'static str, u64)> {
        vec![
            ("Missions Won", self.missions_won),
            ("Missions Lost", self.missions_lost),
            ("Mission Time", self.mission_time),
            ("Bug Kills", self.bug_kills),
            ("Automaton Kills", self.automaton_kills),
            ("Illuminate Kills", self.illuminate_kills),
            ("Bullets Fired", self.bullets_fired),
            ("Bullets Hit", self.bullets_hit),
            ("Time Played", self.time_played),
            ("Deaths", self.deaths),
            ("Revives", self.revives),
            ("Friendlies", self.friendlies),
        ]
    }
}

/// Statistics for a single planet; same counters as the galaxy plus its index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetStatistics {
    #[serde(rename = "planetIndex")]
    pub planet_index: i32,
    #[serde(flatten)]
    pub stats: GalaxyStatistics,
}

/// Raw `planet_stats` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetStatsResponse {
    pub galaxy_stats: GalaxyStatistics,
    #[serde(default)]
    pub planets_stats: Vec<PlanetStatistics>,
}

/// Galaxy statistics together with every planet's statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalStatisticsReport {
    pub galaxy: GalaxyStatistics,
    pub planets: Vec<PlanetStatistics>,
}

impl From<PlanetStatsResponse> for GlobalStatisticsReport {
    fn from(response: PlanetStatsResponse) -> Self {
        Self {
            galaxy: response.galaxy_stats,
            planets: response.planets_stats,
        }
    }
}
