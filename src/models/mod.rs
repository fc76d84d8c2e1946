pub mod assignment;
pub mod campaign;
pub mod dispatch;
pub mod enums;
pub mod planet;
pub mod statistics;
pub mod status;
pub mod steam;
pub mod update;
pub mod war;
pub mod war_info;

pub use assignment::{Assignment, Reward, Task, TaskValues};
pub use campaign::Campaign;
pub use dispatch::{Dispatch, DispatchOrder};
pub use enums::{CampaignType, Faction, MajorOrderType, RewardType, ValueType};
pub use planet::{Biome, Hazard, Planet, PlanetEvent, Position};
pub use statistics::{GalaxyStatistics, GlobalStatisticsReport, PlanetStatistics, PlanetStatsResponse};
pub use status::{PlanetAttack, PlanetStatus, RawCampaign, WarStatus};
pub use steam::SteamNews;
pub use update::Update;
pub use war::{GlobalStatistics, WarInfo};
pub use war_info::{HomeWorld, PlanetInfo, RawWarInfo};
