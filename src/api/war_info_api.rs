//! Static war layout from the Diveharder raw feed.

use tracing::instrument;

use super::client::ApiClient;
use super::urls::DiveharderRoute;
use crate::constants::diveharder;
use crate::error::AppError;
use crate::models::{PlanetInfo, RawWarInfo};

pub struct WarInfoApi<'a> {
    client: &'a ApiClient,
}

impl<'a> WarInfoApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn get_war_info(&self) -> Result<RawWarInfo, AppError> {
        self.client
            .get_diveharder(DiveharderRoute::Raw, diveharder::WAR_INFO)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_planet_info(&self, planet_index: i32) -> Result<Option<PlanetInfo>, AppError> {
        let war_info = self.get_war_info().await?;
        Ok(war_info.planet_info(planet_index).cloned())
    }
}
