//! App lookup endpoints

use crate::CloudClient;
use crate::error::{ClientError, Result};
use ey_core::domain::app::App;
use reqwest::Method;

impl CloudClient {
    // =============================================================================
    // App Lookup
    // =============================================================================

    /// List all apps on the account
    pub async fn list_apps(&self) -> Result<Vec<App>> {
        let response = self.request(Method::GET, "/api/v2/apps").send().await?;

        self.handle_response(response).await
    }

    /// Fetch a single app by name
    ///
    /// # Errors
    /// Returns `ClientError::NotFound` if no app with that name exists.
    pub async fn fetch_app(&self, name: &str) -> Result<App> {
        let response = self
            .request(Method::GET, "/api/v2/apps")
            .query(&[("name", name)])
            .send()
            .await?;

        let apps: Vec<App> = self.handle_response(response).await?;
        apps.into_iter()
            .find(|a| a.name == name)
            .ok_or_else(|| ClientError::NotFound(format!("app '{}'", name)))
    }

    /// Find the apps whose repository matches any of the given remote URLs
    ///
    /// Issues one lookup per remote and unions the results by app id, so a
    /// repository with several remotes pointing at the same app yields that
    /// app once.
    pub async fn apps_for_repo(&self, remotes: &[String]) -> Result<Vec<App>> {
        let mut apps: Vec<App> = Vec::new();

        for remote in remotes {
            let response = self
                .request(Method::GET, "/api/v2/apps")
                .query(&[("repository", remote.as_str())])
                .send()
                .await?;

            let matches: Vec<App> = self.handle_response(response).await?;
            for app in matches {
                if !apps.iter().any(|a| a.id == app.id) {
                    apps.push(app);
                }
            }
        }

        Ok(apps)
    }
}
