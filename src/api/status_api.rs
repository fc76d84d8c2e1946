//! Live war status from the Diveharder raw feed.

use tracing::instrument;

use super::client::ApiClient;
use super::urls::DiveharderRoute;
use crate::constants::diveharder;
use crate::error::AppError;
use crate::models::{PlanetStatus, WarStatus};

pub struct StatusApi<'a> {
    client: &'a ApiClient,
}

impl<'a> StatusApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn get_status(&self) -> Result<WarStatus, AppError> {
        self.client
            .get_diveharder(DiveharderRoute::Raw, diveharder::STATUS)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_planet_status(
        &self,
        planet_index: i32,
    ) -> Result<Option<PlanetStatus>, AppError> {
        let status = self.get_status().await?;
        Ok(status.planet_status(planet_index).cloned())
    }
}
