//! App domain types

use serde::{Deserialize, Serialize};

/// An application registered with the Cloud API
///
/// Apps are matched against local repositories by their `repository_uri`,
/// which is compared to the fetch URLs of the local git remotes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct App {
    pub id: u64,
    pub name: String,
    pub repository_uri: String,
    pub account_name: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
