//! Deploy DTOs for Cloud API calls

use serde::{Deserialize, Serialize};

/// Request to deploy an app to an environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployRequest {
    /// Git ref to deploy (branch, tag, or SHA)
    #[serde(rename = "ref")]
    pub git_ref: String,
    /// Whether to run migrations after the code push
    pub migrate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migration_command: Option<String>,
}

/// Outcome reported by state-changing environment actions
/// (deploy, rebuild, rollback, recipe runs, maintenance toggles)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub successful: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deploy_request_renames_ref() {
        let req = DeployRequest {
            git_ref: "main".to_string(),
            migrate: true,
            migration_command: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["ref"], "main");
        assert!(json.get("migration_command").is_none());
    }

    #[test]
    fn test_action_outcome_message_defaults_to_none() {
        let outcome: ActionOutcome = serde_json::from_str(r#"{"successful": false}"#).unwrap();
        assert!(!outcome.successful);
        assert!(outcome.message.is_none());
    }
}
