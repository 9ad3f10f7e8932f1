//! SSH session plumbing
//!
//! The target is derived from the resolved environment before any subprocess
//! starts, so a missing app master fails cleanly. On Unix the `ssh` binary
//! replaces the current process image; elsewhere it is spawned and waited on,
//! with its exit code passed through.

use anyhow::Result;
use ey_core::domain::environment::Environment;

use crate::error::CliError;

/// Build the `user@host` SSH target for an environment's app master
pub fn ssh_target(environment: &Environment) -> Result<String, CliError> {
    let master = environment
        .app_master()
        .ok_or_else(|| CliError::NoAppMaster(environment.name.clone()))?;
    Ok(format!(
        "{}@{}",
        environment.ssh_username, master.public_hostname
    ))
}

/// Hand the terminal over to `ssh`
///
/// `remote_cmd` is passed through to run on the remote host instead of an
/// interactive shell when non-empty.
pub fn run(target: &str, remote_cmd: &[String]) -> Result<()> {
    let mut command = std::process::Command::new("ssh");
    command.arg(target).args(remote_cmd);

    exec(command)
}

#[cfg(unix)]
fn exec(mut command: std::process::Command) -> Result<()> {
    use std::os::unix::process::CommandExt;

    // exec does not return unless it failed
    let err = command.exec();
    Err(anyhow::anyhow!("Failed to exec ssh: {}", err))
}

#[cfg(not(unix))]
fn exec(mut command: std::process::Command) -> Result<()> {
    let status = command.status()?;
    std::process::exit(status.code().unwrap_or(1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ey_core::domain::environment::{Instance, InstanceRole};

    fn environment(instances: Vec<Instance>) -> Environment {
        Environment {
            id: 1,
            name: "production".to_string(),
            ssh_username: "deploy".to_string(),
            framework_env: "production".to_string(),
            instances,
            app_names: vec![],
        }
    }

    fn instance(role: InstanceRole, host: &str) -> Instance {
        Instance {
            id: 1,
            role,
            public_hostname: host.to_string(),
            status: "running".to_string(),
            name: None,
        }
    }

    #[test]
    fn test_target_uses_app_master_hostname() {
        let env = environment(vec![
            instance(InstanceRole::App, "app1.example.com"),
            instance(InstanceRole::AppMaster, "master.example.com"),
        ]);
        assert_eq!(ssh_target(&env).unwrap(), "deploy@master.example.com");
    }

    #[test]
    fn test_no_app_master_is_an_error() {
        let env = environment(vec![instance(InstanceRole::Util, "util.example.com")]);
        assert_eq!(
            ssh_target(&env),
            Err(CliError::NoAppMaster("production".to_string()))
        );
    }

    #[test]
    fn test_solo_environment_is_reachable() {
        let env = environment(vec![instance(InstanceRole::Solo, "solo.example.com")]);
        assert_eq!(ssh_target(&env).unwrap(), "deploy@solo.example.com");
    }
}
