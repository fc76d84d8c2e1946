pub mod assignment_api;
pub mod campaign_api;
pub mod client;
pub mod dispatch_api;
mod fetch_utils;
pub mod http_client;
pub mod planet_api;
pub mod statistics_api;
pub mod status_api;
pub mod steam_api;
pub mod update_api;
pub mod urls;
pub mod war_api;
pub mod war_info_api;

pub use assignment_api::AssignmentApi;
pub use campaign_api::CampaignApi;
pub use client::{ApiClient, ClientSettings};
pub use dispatch_api::DispatchApi;
pub use http_client::create_http_client;
pub use planet_api::PlanetApi;
pub use statistics_api::StatisticsApi;
pub use status_api::StatusApi;
pub use steam_api::SteamApi;
pub use update_api::UpdateApi;
pub use urls::{DiveharderRoute, build_community_url, build_diveharder_url, url_join};
pub use war_api::WarApi;
pub use war_info_api::WarInfoApi;
