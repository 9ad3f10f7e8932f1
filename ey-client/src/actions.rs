//! State-changing environment actions

use crate::CloudClient;
use crate::error::Result;
use ey_core::dto::deploy::{ActionOutcome, DeployRequest};
use reqwest::Method;

impl CloudClient {
    // =============================================================================
    // Environment Actions
    // =============================================================================

    /// Trigger a deploy on an environment
    ///
    /// # Arguments
    /// * `environment_id` - The target environment's id
    /// * `req` - The deploy request (ref, migration settings)
    ///
    /// # Returns
    /// The outcome reported by the API; `successful: false` means the deploy
    /// was rejected or failed server-side.
    pub async fn deploy(&self, environment_id: u64, req: DeployRequest) -> Result<ActionOutcome> {
        let path = format!("/api/v2/environments/{}/deploy", environment_id);
        let response = self.request(Method::POST, &path).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// Re-run an environment's configuration (rebuild/update)
    pub async fn rebuild(&self, environment_id: u64) -> Result<ActionOutcome> {
        let path = format!("/api/v2/environments/{}/rebuild", environment_id);
        let response = self.request(Method::PUT, &path).send().await?;

        self.handle_response(response).await
    }

    /// Roll an environment back to its previous deploy
    pub async fn rollback(&self, environment_id: u64) -> Result<ActionOutcome> {
        let path = format!("/api/v2/environments/{}/rollback", environment_id);
        let response = self.request(Method::PUT, &path).send().await?;

        self.handle_response(response).await
    }

    /// Put up or take down the maintenance page
    ///
    /// # Arguments
    /// * `environment_id` - The target environment's id
    /// * `maintenance_on` - `true` puts the maintenance page up (site down)
    pub async fn set_maintenance(
        &self,
        environment_id: u64,
        maintenance_on: bool,
    ) -> Result<ActionOutcome> {
        let action = if maintenance_on { "enable" } else { "disable" };
        let path = format!("/api/v2/environments/{}/maintenance", environment_id);
        let response = self
            .request(Method::PUT, &path)
            .query(&[("action", action)])
            .send()
            .await?;

        self.handle_response(response).await
    }
}
