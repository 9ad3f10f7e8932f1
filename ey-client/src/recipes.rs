//! Chef recipe endpoints

use crate::CloudClient;
use crate::error::Result;
use ey_core::dto::deploy::ActionOutcome;
use reqwest::Method;

impl CloudClient {
    // =============================================================================
    // Recipes
    // =============================================================================

    /// Upload a cookbooks archive (tar.gz) to an environment
    ///
    /// # Arguments
    /// * `environment_id` - The target environment's id
    /// * `archive` - The gzipped tarball of the local `cookbooks/` directory
    pub async fn upload_recipes(&self, environment_id: u64, archive: Vec<u8>) -> Result<()> {
        let path = format!("/api/v2/environments/{}/recipes", environment_id);
        let response = self
            .request(Method::POST, &path)
            .header("Content-Type", "application/gzip")
            .body(archive)
            .send()
            .await?;

        self.handle_empty_response(response).await
    }

    /// Trigger a run of the uploaded recipes on an environment
    pub async fn run_recipes(&self, environment_id: u64) -> Result<ActionOutcome> {
        let path = format!("/api/v2/environments/{}/recipes/run", environment_id);
        let response = self.request(Method::PUT, &path).send().await?;

        self.handle_response(response).await
    }
}
