//! Active campaigns from the community API.

use tracing::{info, instrument};

use super::client::ApiClient;
use crate::constants::community;
use crate::error::AppError;
use crate::models::Campaign;

pub struct CampaignApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CampaignApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn get_campaigns(&self) -> Result<Vec<Campaign>, AppError> {
        let campaigns: Vec<Campaign> = self.client.get_community(&[community::CAMPAIGNS]).await?;
        info!("Fetched {} campaigns", campaigns.len());
        Ok(campaigns)
    }

    #[instrument(skip(self))]
    pub async fn get_campaign(&self, id: i64) -> Result<Campaign, AppError> {
        let id = id.to_string();
        self.client
            .get_community(&[community::CAMPAIGNS, &id])
            .await
    }

    /// The campaign being fought on the given planet, if any.
    #[instrument(skip(self))]
    pub async fn get_campaign_by_planet(
        &self,
        planet_index: i32,
    ) -> Result<Option<Campaign>, AppError> {
        let campaigns = self.get_campaigns().await?;
        Ok(campaigns
            .into_iter()
            .find(|campaign| campaign.planet.index == planet_index))
    }
}
