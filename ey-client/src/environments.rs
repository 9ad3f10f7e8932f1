//! Environment listing endpoints

use crate::CloudClient;
use crate::error::Result;
use ey_core::domain::environment::Environment;
use reqwest::Method;

impl CloudClient {
    // =============================================================================
    // Environment Listing
    // =============================================================================

    /// List every environment on the account
    pub async fn list_environments(&self) -> Result<Vec<Environment>> {
        let response = self
            .request(Method::GET, "/api/v2/environments")
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// List the environments linked to a specific app
    ///
    /// # Arguments
    /// * `app_id` - The app's numeric id
    pub async fn app_environments(&self, app_id: u64) -> Result<Vec<Environment>> {
        let path = format!("/api/v2/apps/{}/environments", app_id);
        let response = self.request(Method::GET, &path).send().await?;

        self.handle_response(response).await
    }
}
