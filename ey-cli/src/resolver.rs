//! App and environment resolution
//!
//! Determines which app and environment a command acts on, from an explicit
//! flag, the local repository's remotes, or a configured default. The
//! selection logic is pure functions over fetched lists; the async wrappers
//! do the fetching.
//!
//! Environment names match exactly, or by unambiguous prefix as a
//! convenience. A name that matches nothing linked to the app triggers a
//! secondary account-wide lookup so the error can say "not linked to this
//! app" instead of the misleading "not found".

use anyhow::Result;

use crate::config::EyConfig;
use crate::error::CliError;
use crate::git;
use ey_client::CloudClient;
use ey_core::domain::app::App;
use ey_core::domain::environment::Environment;

/// Resolve the app a command acts on
///
/// An explicit `--app` name wins outright and skips repository inference.
/// Otherwise the app is inferred from the local git remotes.
pub async fn resolve_app(
    client: &CloudClient,
    cwd: &std::path::Path,
    requested: Option<&str>,
) -> Result<App> {
    if let Some(name) = requested {
        return client
            .fetch_app(name)
            .await
            .map_err(|e| map_fetch_error(name, e));
    }

    let remotes = git::remote_urls(cwd).await?;
    let apps = client.apps_for_repo(&remotes).await?;
    Ok(select_app(apps)?)
}

/// Map a fetch failure for an explicitly named app to the CLI error space
///
/// A 404 means the name is wrong and deserves the specific message; anything
/// else is a transport/API failure passed through as-is.
pub fn map_fetch_error(name: &str, e: ey_client::ClientError) -> anyhow::Error {
    if e.is_not_found() {
        CliError::AppNotFound(name.to_string()).into()
    } else {
        e.into()
    }
}

/// Pick the single app matching the repository, or fail
pub fn select_app(mut apps: Vec<App>) -> Result<App, CliError> {
    match apps.len() {
        0 => Err(CliError::NoAppFound),
        1 => Ok(apps.remove(0)),
        _ => {
            let names: Vec<&str> = apps.iter().map(|a| a.name.as_str()).collect();
            Err(CliError::AmbiguousApp(names.join(", ")))
        }
    }
}

/// Resolve the environment a command acts on
///
/// Fetches the app's linked environments and applies [`choose_environment`];
/// a not-found result triggers the account-wide lookup that distinguishes
/// "unlinked" from "missing".
pub async fn resolve_environment(
    client: &CloudClient,
    config: &EyConfig,
    app: &App,
    requested: Option<&str>,
) -> Result<Environment> {
    let linked = client.app_environments(app.id).await?;

    match choose_environment(&linked, &app.name, requested, config.default_environment()) {
        Ok(env) => Ok(env.clone()),
        Err(CliError::EnvironmentNotFound(name)) if requested.is_some() => {
            let all = client.list_environments().await?;
            Err(classify_missing(name, &app.name, &all).into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Decide what a name that matched nothing linked to the app means
///
/// If the name exists among the account's environments it is merely not
/// linked to this app; otherwise it does not exist at all.
pub fn classify_missing(environment: String, app_name: &str, all: &[Environment]) -> CliError {
    if match_by_name(all, &environment).is_some() {
        CliError::EnvironmentUnlinked {
            environment,
            app: app_name.to_string(),
        }
    } else {
        CliError::EnvironmentNotFound(environment)
    }
}

/// Pick one environment from the app's linked environments
///
/// With a name: match it (exact, then unambiguous prefix). Without one: a
/// single linked environment is used as-is, otherwise the configured default
/// decides; anything else is ambiguous or empty.
pub fn choose_environment<'a>(
    linked: &'a [Environment],
    app_name: &str,
    requested: Option<&str>,
    default: Option<&str>,
) -> Result<&'a Environment, CliError> {
    match requested {
        Some(name) => match_by_name(linked, name)
            .ok_or_else(|| CliError::EnvironmentNotFound(name.to_string())),
        None => match linked {
            [] => Err(CliError::NoEnvironments(app_name.to_string())),
            [only] => Ok(only),
            _ => {
                if let Some(default) = default {
                    if let Some(env) = match_by_name(linked, default) {
                        return Ok(env);
                    }
                }
                let names: Vec<&str> = linked.iter().map(|e| e.name.as_str()).collect();
                Err(CliError::AmbiguousEnvironment {
                    app: app_name.to_string(),
                    candidates: names.join(", "),
                })
            }
        },
    }
}

/// Match an environment by exact name, falling back to a unique prefix
pub fn match_by_name<'a>(environments: &'a [Environment], name: &str) -> Option<&'a Environment> {
    if let Some(env) = environments.iter().find(|e| e.name == name) {
        return Some(env);
    }

    let matches: Vec<&Environment> = environments
        .iter()
        .filter(|e| e.name.starts_with(name))
        .collect();
    match matches.as_slice() {
        [only] => Some(only),
        _ => None,
    }
}

/// Resolve the git ref a deploy ships
///
/// Precedence: explicit `--ref` (accepted only when forced or no default
/// branch is configured) > configured default branch > current local branch.
pub fn resolve_ref(
    explicit: Option<&str>,
    default_branch: Option<&str>,
    current_branch: Option<&str>,
    force: bool,
) -> Result<String, CliError> {
    match (explicit, default_branch) {
        (Some(requested), Some(default)) if !force && requested != default => {
            Err(CliError::RefConflict {
                requested: requested.to_string(),
                default: default.to_string(),
            })
        }
        (Some(requested), _) => Ok(requested.to_string()),
        (None, Some(default)) => Ok(default.to_string()),
        (None, None) => current_branch
            .map(str::to_string)
            .ok_or(CliError::MissingRef),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(id: u64, name: &str) -> Environment {
        Environment {
            id,
            name: name.to_string(),
            ssh_username: "deploy".to_string(),
            framework_env: "production".to_string(),
            instances: vec![],
            app_names: vec![],
        }
    }

    fn app(id: u64, name: &str) -> App {
        App {
            id,
            name: name.to_string(),
            repository_uri: "git@github.com:acme/todo.git".to_string(),
            account_name: None,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_select_app_single_match() {
        let selected = select_app(vec![app(1, "todo")]).unwrap();
        assert_eq!(selected.name, "todo");
    }

    #[test]
    fn test_select_app_none_found() {
        assert_eq!(select_app(vec![]).unwrap_err(), CliError::NoAppFound);
    }

    #[test]
    fn test_select_app_ambiguous_lists_names() {
        let err = select_app(vec![app(1, "todo"), app(2, "todo-admin")]).unwrap_err();
        assert_eq!(err, CliError::AmbiguousApp("todo, todo-admin".to_string()));
    }

    #[test]
    fn test_missing_named_app_maps_to_app_not_found() {
        let err = map_fetch_error("todo", ey_client::ClientError::api_error(404, "no such app"));
        assert_eq!(
            err.downcast::<CliError>().unwrap(),
            CliError::AppNotFound("todo".to_string())
        );
    }

    #[test]
    fn test_other_fetch_errors_pass_through() {
        let err = map_fetch_error("todo", ey_client::ClientError::api_error(500, "boom"));
        assert!(err.downcast::<CliError>().is_err());
    }

    #[test]
    fn test_named_environment_found_among_linked() {
        let linked = vec![env(1, "production"), env(2, "staging")];
        let chosen = choose_environment(&linked, "todo", Some("staging"), None).unwrap();
        assert_eq!(chosen.id, 2);
    }

    #[test]
    fn test_named_environment_matches_unique_prefix() {
        let linked = vec![env(1, "production"), env(2, "staging")];
        let chosen = choose_environment(&linked, "todo", Some("prod"), None).unwrap();
        assert_eq!(chosen.id, 1);
    }

    #[test]
    fn test_ambiguous_prefix_is_not_found() {
        let linked = vec![env(1, "staging-eu"), env(2, "staging-us")];
        let err = choose_environment(&linked, "todo", Some("staging"), None).unwrap_err();
        assert_eq!(err, CliError::EnvironmentNotFound("staging".to_string()));
    }

    #[test]
    fn test_single_linked_environment_used_without_name() {
        let linked = vec![env(1, "production")];
        let chosen = choose_environment(&linked, "todo", None, None).unwrap();
        assert_eq!(chosen.id, 1);
    }

    #[test]
    fn test_no_linked_environments() {
        let err = choose_environment(&[], "todo", None, None).unwrap_err();
        assert_eq!(err, CliError::NoEnvironments("todo".to_string()));
    }

    #[test]
    fn test_default_breaks_ambiguity() {
        let linked = vec![env(1, "production"), env(2, "staging")];
        let chosen = choose_environment(&linked, "todo", None, Some("staging")).unwrap();
        assert_eq!(chosen.id, 2);
    }

    #[test]
    fn test_multiple_environments_without_default_is_ambiguous() {
        let linked = vec![env(1, "production"), env(2, "staging")];
        let err = choose_environment(&linked, "todo", None, None).unwrap_err();
        assert_eq!(
            err,
            CliError::AmbiguousEnvironment {
                app: "todo".to_string(),
                candidates: "production, staging".to_string(),
            }
        );
    }

    #[test]
    fn test_unlinked_environment_is_distinguished_from_missing() {
        let all = vec![env(1, "production"), env(2, "demo")];
        assert_eq!(
            classify_missing("demo".to_string(), "todo", &all),
            CliError::EnvironmentUnlinked {
                environment: "demo".to_string(),
                app: "todo".to_string(),
            }
        );
    }

    #[test]
    fn test_globally_unknown_environment_is_not_found() {
        let all = vec![env(1, "production")];
        assert_eq!(
            classify_missing("demo".to_string(), "todo", &all),
            CliError::EnvironmentNotFound("demo".to_string())
        );
    }

    #[test]
    fn test_default_naming_unlinked_environment_is_still_ambiguous() {
        let linked = vec![env(1, "production"), env(2, "staging")];
        let err = choose_environment(&linked, "todo", None, Some("demo")).unwrap_err();
        assert!(matches!(err, CliError::AmbiguousEnvironment { .. }));
    }

    #[test]
    fn test_ref_explicit_wins_with_no_default() {
        assert_eq!(
            resolve_ref(Some("feature/x"), None, Some("main"), false).unwrap(),
            "feature/x"
        );
    }

    #[test]
    fn test_ref_explicit_conflicts_with_default() {
        let err = resolve_ref(Some("feature/x"), Some("main"), None, false).unwrap_err();
        assert_eq!(
            err,
            CliError::RefConflict {
                requested: "feature/x".to_string(),
                default: "main".to_string(),
            }
        );
    }

    #[test]
    fn test_ref_force_overrides_default() {
        assert_eq!(
            resolve_ref(Some("feature/x"), Some("main"), None, true).unwrap(),
            "feature/x"
        );
    }

    #[test]
    fn test_ref_explicit_equal_to_default_needs_no_force() {
        assert_eq!(
            resolve_ref(Some("main"), Some("main"), None, false).unwrap(),
            "main"
        );
    }

    #[test]
    fn test_ref_falls_back_to_default_branch() {
        assert_eq!(
            resolve_ref(None, Some("main"), Some("feature/x"), false).unwrap(),
            "main"
        );
    }

    #[test]
    fn test_ref_falls_back_to_current_branch() {
        assert_eq!(
            resolve_ref(None, None, Some("feature/x"), false).unwrap(),
            "feature/x"
        );
    }

    #[test]
    fn test_ref_nothing_resolvable_is_missing() {
        assert_eq!(
            resolve_ref(None, None, None, false).unwrap_err(),
            CliError::MissingRef
        );
    }
}
