//! Log retrieval endpoints

use crate::CloudClient;
use crate::error::Result;
use ey_core::domain::log::LogEntry;
use reqwest::Method;

impl CloudClient {
    /// Get the latest logs for an environment, one entry per instance
    pub async fn environment_logs(&self, environment_id: u64) -> Result<Vec<LogEntry>> {
        let path = format!("/api/v2/environments/{}/logs", environment_id);
        let response = self.request(Method::GET, &path).send().await?;

        self.handle_response(response).await
    }
}
