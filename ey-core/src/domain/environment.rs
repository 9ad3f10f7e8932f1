//! Environment domain types

use serde::{Deserialize, Serialize};

/// A deployment target: a named set of servers linked to one or more apps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    pub id: u64,
    pub name: String,
    /// Username for SSH sessions into this environment's instances
    pub ssh_username: String,
    /// Framework environment (e.g. "production", "staging")
    pub framework_env: String,
    #[serde(default)]
    pub instances: Vec<Instance>,
    /// Names of the apps linked to this environment
    #[serde(default)]
    pub app_names: Vec<String>,
}

impl Environment {
    /// The primary/control server of this environment's cluster
    ///
    /// Single-instance environments have a `solo` instance instead of a
    /// dedicated app master; it fills the same role.
    pub fn app_master(&self) -> Option<&Instance> {
        self.instances
            .iter()
            .find(|i| i.role == InstanceRole::AppMaster)
            .or_else(|| self.instances.iter().find(|i| i.role == InstanceRole::Solo))
    }
}

/// A single server within an environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    pub id: u64,
    pub role: InstanceRole,
    pub public_hostname: String,
    pub status: String,
    /// Instance name shown in log listings (e.g. "app_master i-0123")
    pub name: Option<String>,
}

/// Role of an instance within its environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceRole {
    AppMaster,
    App,
    DbMaster,
    DbSlave,
    Util,
    Solo,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(id: u64, role: InstanceRole) -> Instance {
        Instance {
            id,
            role,
            public_hostname: format!("ec2-{}.example.com", id),
            status: "running".to_string(),
            name: None,
        }
    }

    fn environment(instances: Vec<Instance>) -> Environment {
        Environment {
            id: 1,
            name: "production".to_string(),
            ssh_username: "deploy".to_string(),
            framework_env: "production".to_string(),
            instances,
            app_names: vec!["todo".to_string()],
        }
    }

    #[test]
    fn test_app_master_prefers_dedicated_master() {
        let env = environment(vec![
            instance(1, InstanceRole::App),
            instance(2, InstanceRole::AppMaster),
            instance(3, InstanceRole::DbMaster),
        ]);
        assert_eq!(env.app_master().unwrap().id, 2);
    }

    #[test]
    fn test_solo_instance_counts_as_app_master() {
        let env = environment(vec![instance(7, InstanceRole::Solo)]);
        assert_eq!(env.app_master().unwrap().id, 7);
    }

    #[test]
    fn test_no_app_master_without_master_or_solo() {
        let env = environment(vec![
            instance(1, InstanceRole::App),
            instance(2, InstanceRole::Util),
        ]);
        assert!(env.app_master().is_none());
    }

    #[test]
    fn test_instance_role_wire_format() {
        let role: InstanceRole = serde_json::from_str(r#""app_master""#).unwrap();
        assert_eq!(role, InstanceRole::AppMaster);
        assert_eq!(serde_json::to_string(&InstanceRole::DbSlave).unwrap(), r#""db_slave""#);
    }
}
