//! Assignments (major orders) from the community API.

use tracing::{info, instrument};

use super::client::ApiClient;
use crate::constants::community;
use crate::error::AppError;
use crate::models::Assignment;

pub struct AssignmentApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AssignmentApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn get_all_assignments(&self) -> Result<Vec<Assignment>, AppError> {
        let assignments: Vec<Assignment> =
            self.client.get_community(&[community::ASSIGNMENTS]).await?;
        info!("Fetched {} assignments", assignments.len());
        Ok(assignments)
    }

    #[instrument(skip(self))]
    pub async fn get_assignment(&self, id: i64) -> Result<Assignment, AppError> {
        let id = id.to_string();
        self.client
            .get_community(&[community::ASSIGNMENTS, &id])
            .await
    }

    /// The current major order: the first listed assignment, if any.
    #[instrument(skip(self))]
    pub async fn get_major_order(&self) -> Result<Option<Assignment>, AppError> {
        let assignments = self.get_all_assignments().await?;
        Ok(assignments.into_iter().next())
    }
}
