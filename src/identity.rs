//! Author identity discovery
//!
//! Field defaults that depend on who is running the tool (name, email,
//! current year, working directory) come through the [`IdentityProvider`]
//! trait so tests can substitute fixed values. The production
//! implementation consults the config file first, then well-known
//! environment variables, then `git config`.

use std::env;
use std::process::Command;

use chrono::{Datelike, Local};

use crate::config::Config;

/// Source of environment-derived field defaults
pub trait IdentityProvider {
    /// Current calendar year, formatted as a string
    fn current_year(&self) -> String;
    /// Author name, if one can be discovered
    fn full_name(&self) -> Option<String>;
    /// Author email, if one can be discovered
    fn email(&self) -> Option<String>;
    /// File name of the current working directory
    fn working_dir_name(&self) -> Option<String>;
}

const NAME_VARS: &[&str] = &[
    "GIT_AUTHOR_NAME",
    "AUTHOR",
    "FULLNAME",
    "NAME",
    "USER",
    "USERNAME",
];

const EMAIL_VARS: &[&str] = &["GIT_AUTHOR_EMAIL", "EMAIL", "AUTHOR_EMAIL"];

/// Identity backed by the config file, the environment, and git
pub struct SystemIdentity {
    config: Config,
}

impl SystemIdentity {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

fn clean(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn first_env(vars: &[&str]) -> Option<String> {
    vars.iter()
        .find_map(|var| clean(env::var(var).ok().as_deref()))
}

/// Run `git config --get <key>`, treating any failure (no git binary,
/// not a repository, unset key) as an absent value
fn git_config(key: &str) -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", key])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    clean(Some(&String::from_utf8_lossy(&output.stdout)))
}

impl IdentityProvider for SystemIdentity {
    fn current_year(&self) -> String {
        Local::now().year().to_string()
    }

    fn full_name(&self) -> Option<String> {
        clean(self.config.name.as_deref())
            .or_else(|| first_env(NAME_VARS))
            .or_else(|| git_config("user.name"))
    }

    fn email(&self) -> Option<String> {
        clean(self.config.email.as_deref())
            .or_else(|| first_env(EMAIL_VARS))
            .or_else(|| git_config("user.email"))
    }

    fn working_dir_name(&self) -> Option<String> {
        env::current_dir()
            .ok()?
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_year_is_numeric() {
        let identity = SystemIdentity::new(Config::default());
        let year = identity.current_year();
        assert_eq!(year.len(), 4);
        assert!(year.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_config_name_wins_over_environment() {
        let identity = SystemIdentity::new(Config {
            name: Some("Configured Name".to_string()),
            email: None,
        });
        assert_eq!(identity.full_name(), Some("Configured Name".to_string()));
    }

    #[test]
    fn test_config_email_wins_over_environment() {
        let identity = SystemIdentity::new(Config {
            name: None,
            email: Some("cfg@example.com".to_string()),
        });
        assert_eq!(identity.email(), Some("cfg@example.com".to_string()));
    }

    #[test]
    fn test_blank_config_value_is_ignored() {
        let identity = SystemIdentity::new(Config {
            name: Some("   ".to_string()),
            email: None,
        });
        // Falls through to environment/git discovery, which may or may not
        // produce a value, but never the blank string.
        if let Some(name) = identity.full_name() {
            assert!(!name.trim().is_empty());
        }
    }

    #[test]
    fn test_working_dir_name_is_non_empty() {
        let identity = SystemIdentity::new(Config::default());
        let name = identity.working_dir_name().expect("cwd should have a name");
        assert!(!name.is_empty());
    }

    #[test]
    fn test_clean_trims_and_drops_empty() {
        assert_eq!(clean(Some("  Ann  ")), Some("Ann".to_string()));
        assert_eq!(clean(Some("   ")), None);
        assert_eq!(clean(None), None);
    }
}
