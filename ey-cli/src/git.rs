//! Local repository context
//!
//! Reads the current branch and remote URLs by shelling out to `git`. Not
//! being in a repository (or being on a detached HEAD) is a normal condition
//! here; it surfaces later as a missing-ref or no-app error if a command
//! actually needed the information.

use std::path::Path;

use anyhow::Result;
use tokio::process::Command;

/// Current branch name, or `None` on a detached HEAD or outside a repository
pub async fn current_branch(dir: &Path) -> Result<Option<String>> {
    let output = Command::new("git")
        .args(["symbolic-ref", "--short", "HEAD"])
        .current_dir(dir)
        .output()
        .await?;

    if !output.status.success() {
        return Ok(None);
    }

    let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok((!branch.is_empty()).then_some(branch))
}

/// Unique fetch URLs of the repository's remotes, empty outside a repository
pub async fn remote_urls(dir: &Path) -> Result<Vec<String>> {
    let output = Command::new("git")
        .args(["remote", "-v"])
        .current_dir(dir)
        .output()
        .await?;

    if !output.status.success() {
        return Ok(Vec::new());
    }

    Ok(parse_remotes(&String::from_utf8_lossy(&output.stdout)))
}

/// Parse `git remote -v` output into unique fetch URLs
///
/// Lines look like `origin\tgit@github.com:acme/todo.git (fetch)`.
fn parse_remotes(output: &str) -> Vec<String> {
    let mut urls = Vec::new();
    for line in output.lines() {
        let mut fields = line.split_whitespace();
        let (Some(_name), Some(url)) = (fields.next(), fields.next()) else {
            continue;
        };
        if fields.next() == Some("(push)") {
            continue;
        }
        if !urls.iter().any(|u| u == url) {
            urls.push(url.to_string());
        }
    }
    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_remotes_dedupes_fetch_and_push() {
        let output = "origin\tgit@github.com:acme/todo.git (fetch)\n\
                      origin\tgit@github.com:acme/todo.git (push)\n";
        assert_eq!(parse_remotes(output), vec!["git@github.com:acme/todo.git"]);
    }

    #[test]
    fn test_parse_remotes_keeps_distinct_urls() {
        let output = "origin\tgit@github.com:acme/todo.git (fetch)\n\
                      upstream\thttps://github.com/acme/todo.git (fetch)\n";
        assert_eq!(
            parse_remotes(output),
            vec![
                "git@github.com:acme/todo.git",
                "https://github.com/acme/todo.git"
            ]
        );
    }

    #[test]
    fn test_parse_remotes_empty_output() {
        assert!(parse_remotes("").is_empty());
    }

    #[test]
    fn test_parse_remotes_skips_push_only_mirrors() {
        let output = "mirror\tgit@mirror.example.com:acme/todo.git (push)\n";
        assert!(parse_remotes(output).is_empty());
    }
}
