//! Patch notes from the Diveharder `v1/updates` feed.

use chrono::NaiveDateTime;
use tracing::{info, instrument};

use super::client::ApiClient;
use super::urls::DiveharderRoute;
use crate::constants::{date_formats, diveharder};
use crate::error::AppError;
use crate::models::Update;

pub struct UpdateApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UpdateApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn get_updates(&self) -> Result<Vec<Update>, AppError> {
        let updates: Vec<Update> = self
            .client
            .get_diveharder(DiveharderRoute::V1, diveharder::UPDATES)
            .await?;
        info!("Fetched {} updates", updates.len());
        Ok(updates)
    }

    /// Finds the update published at `date`, given as `05-Apr-2024 14:30`.
    ///
    /// The date is validated before any request is made.
    #[instrument(skip(self))]
    pub async fn get_update_by_date(&self, date: &str) -> Result<Option<Update>, AppError> {
        let wanted = NaiveDateTime::parse_from_str(date.trim(), date_formats::UPDATE_LOOKUP)
            .map_err(|e| {
                AppError::datetime_parse_error(format!(
                    "'{date}' does not match {}: {e}",
                    date_formats::UPDATE_LOOKUP
                ))
            })?;

        let updates = self.get_updates().await?;
        Ok(updates
            .into_iter()
            .find(|update| update.parsed_date() == Some(wanted)))
    }

    #[instrument(skip(self))]
    pub async fn get_update_by_url(&self, url: &str) -> Result<Option<Update>, AppError> {
        let updates = self.get_updates().await?;
        Ok(updates.into_iter().find(|update| update.url == url))
    }

    #[instrument(skip(self))]
    pub async fn get_update_by_title(&self, title: &str) -> Result<Option<Update>, AppError> {
        let updates = self.get_updates().await?;
        Ok(updates.into_iter().find(|update| update.title == title))
    }

    /// The last entry of the feed, which is the newest one.
    #[instrument(skip(self))]
    pub async fn get_latest_update(&self) -> Result<Option<Update>, AppError> {
        let updates = self.get_updates().await?;
        Ok(updates.into_iter().last())
    }
}
