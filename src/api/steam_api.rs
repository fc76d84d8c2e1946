//! Steam news mirrored by the community API.

use tracing::{info, instrument};

use super::client::ApiClient;
use crate::constants::community;
use crate::error::AppError;
use crate::models::SteamNews;

pub struct SteamApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SteamApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn get_all_steam_news(&self) -> Result<Vec<SteamNews>, AppError> {
        let news: Vec<SteamNews> = self.client.get_community(&[community::STEAM]).await?;
        info!("Fetched {} Steam news entries", news.len());
        Ok(news)
    }

    /// A single entry by its Steam `gid`.
    #[instrument(skip(self))]
    pub async fn get_steam_news(&self, gid: &str) -> Result<SteamNews, AppError> {
        self.client.get_community(&[community::STEAM, gid]).await
    }
}
