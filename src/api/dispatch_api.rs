//! In-game dispatches (news feed) from the community API.

use tracing::{info, instrument};

use super::client::ApiClient;
use crate::constants::community;
use crate::error::AppError;
use crate::models::{Dispatch, DispatchOrder};

pub struct DispatchApi<'a> {
    client: &'a ApiClient,
}

impl<'a> DispatchApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Every dispatch, sorted by publication time in the requested order.
    #[instrument(skip(self))]
    pub async fn get_dispatches(&self, order: DispatchOrder) -> Result<Vec<Dispatch>, AppError> {
        let mut dispatches: Vec<Dispatch> =
            self.client.get_community(&[community::DISPATCHES]).await?;

        match order {
            DispatchOrder::OldestFirst => dispatches.sort_by_key(|d| d.published),
            DispatchOrder::NewestFirst => {
                dispatches.sort_by(|a, b| b.published.cmp(&a.published))
            }
        }

        info!("Fetched {} dispatches", dispatches.len());
        Ok(dispatches)
    }

    #[instrument(skip(self))]
    pub async fn get_dispatch(&self, id: i64) -> Result<Dispatch, AppError> {
        let id = id.to_string();
        self.client
            .get_community(&[community::DISPATCHES, &id])
            .await
    }

    /// The most recently published dispatch, or `None` when the feed is empty.
    ///
    /// The feed is not assumed to arrive in any particular order.
    #[instrument(skip(self))]
    pub async fn get_latest_dispatch(&self) -> Result<Option<Dispatch>, AppError> {
        let dispatches: Vec<Dispatch> =
            self.client.get_community(&[community::DISPATCHES]).await?;

        let latest = dispatches.into_iter().max_by_key(|d| d.published);
        match &latest {
            Some(dispatch) => info!("Latest dispatch is {} ({})", dispatch.id, dispatch.published),
            None => info!("Dispatch feed is empty"),
        }
        Ok(latest)
    }
}
