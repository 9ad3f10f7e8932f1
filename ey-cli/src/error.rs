//! User-facing CLI errors
//!
//! Every way a command can refuse to run gets its own variant so the message
//! tells the user exactly what to do next. All of these terminate the command;
//! there is no recovery or retry at this layer.

use thiserror::Error;

/// Errors raised by command handlers and the app/environment resolver
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// An explicitly named app does not exist on the account
    #[error("App '{0}' not found")]
    AppNotFound(String),

    /// No app matches the local repository's remotes
    #[error("No application found for this repository; specify one with --app")]
    NoAppFound,

    /// More than one app matches the local repository's remotes
    #[error("Multiple applications match this repository ({0}); specify one with --app")]
    AmbiguousApp(String),

    /// A named environment exists neither on the app nor on the account
    #[error("Environment '{0}' not found")]
    EnvironmentNotFound(String),

    /// A named environment exists on the account but is not linked to the app
    #[error("Environment '{environment}' is not linked to app '{app}'")]
    EnvironmentUnlinked { environment: String, app: String },

    /// The app has no linked environments at all
    #[error("App '{0}' has no environments")]
    NoEnvironments(String),

    /// No name given and more than one environment is linked to the app
    #[error(
        "App '{app}' has multiple environments ({candidates}); specify one with --environment"
    )]
    AmbiguousEnvironment { app: String, candidates: String },

    /// No deploy ref from any source
    #[error(
        "No ref to deploy; pass --ref, set a default branch in ey.toml, or check out a branch"
    )]
    MissingRef,

    /// Explicit ref conflicts with the configured default branch
    #[error("Default deploy branch is '{default}'; pass --force to deploy '{requested}'")]
    RefConflict { requested: String, default: String },

    /// SSH target cannot be determined
    #[error("Environment '{0}' has no app master to connect to")]
    NoAppMaster(String),

    /// The API reported a falsy outcome for an action
    #[error("{0} failed")]
    OperationFailed(&'static str),

    /// No API token from flag or environment
    #[error("No API token; pass --api-token or set EY_API_TOKEN")]
    MissingToken,
}
