//! Galaxy and planet statistics from the Diveharder raw feed.

use tracing::instrument;

use super::client::ApiClient;
use super::urls::DiveharderRoute;
use crate::constants::diveharder;
use crate::error::AppError;
use crate::models::{GalaxyStatistics, GlobalStatisticsReport, PlanetStatistics, PlanetStatsResponse};

pub struct StatisticsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> StatisticsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    async fn fetch_planet_stats(&self) -> Result<PlanetStatsResponse, AppError> {
        self.client
            .get_diveharder(DiveharderRoute::Raw, diveharder::PLANET_STATS)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_global_statistics(&self) -> Result<GlobalStatisticsReport, AppError> {
        Ok(self.fetch_planet_stats().await?.into())
    }

    #[instrument(skip(self))]
    pub async fn get_galaxy_statistics(&self) -> Result<GalaxyStatistics, AppError> {
        Ok(self.fetch_planet_stats().await?.galaxy_stats)
    }

    #[instrument(skip(self))]
    pub async fn get_planet_statistics(
        &self,
        planet_index: i32,
    ) -> Result<Option<PlanetStatistics>, AppError> {
        let response = self.fetch_planet_stats().await?;
        Ok(response
            .planets_stats
            .into_iter()
            .find(|stats| stats.planet_index == planet_index))
    }
}
