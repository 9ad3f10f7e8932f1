//! Log domain types

use serde::{Deserialize, Serialize};

/// A log entry for one instance of an environment
///
/// Either section may be absent; the CLI prints whichever are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Name of the instance this log belongs to
    pub instance_name: String,
    /// Main (platform) log text
    pub main: Option<String>,
    /// Custom (user recipe) log text
    pub custom: Option<String>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
