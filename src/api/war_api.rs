//! Current war summary from the community API.

use tracing::instrument;

use super::client::ApiClient;
use crate::constants::community;
use crate::error::AppError;
use crate::models::WarInfo;

pub struct WarApi<'a> {
    client: &'a ApiClient,
}

impl<'a> WarApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn get_war_info(&self) -> Result<WarInfo, AppError> {
        self.client.get_community(&[community::WAR]).await
    }
}
