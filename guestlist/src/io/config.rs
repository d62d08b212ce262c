//! Application configuration stored in a TOML file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Startup options for the interactive session (TOML).
///
/// This file is intended to be edited by humans and must remain stable and
/// automatable. Missing fields default to sensible values. It carries no
/// registry state; the guest list itself is volatile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Seed the session with the demo roster on startup.
    pub seed_demo_roster: bool,

    /// Prompt shown before each command line.
    pub prompt: String,

    /// Answer delete confirmations affirmatively without prompting
    /// (scripted input).
    pub assume_yes: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_demo_roster: true,
            prompt: "guestlist> ".to_string(),
            assume_yes: false,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.prompt.is_empty() {
            return Err(anyhow!("prompt must be non-empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `AppConfig::default()`.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        let cfg = AppConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AppConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &AppConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("guestlist.toml");
        let cfg = AppConfig {
            seed_demo_roster: false,
            prompt: "> ".to_string(),
            assume_yes: true,
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("guestlist.toml");
        fs::write(&path, "assume_yes = true\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert!(cfg.assume_yes);
        assert!(cfg.seed_demo_roster);
        assert_eq!(cfg.prompt, AppConfig::default().prompt);
    }

    #[test]
    fn empty_prompt_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("guestlist.toml");
        fs::write(&path, "prompt = \"\"\n").expect("write");

        let err = load_config(&path).expect_err("expected validation error");
        assert!(err.to_string().contains("prompt"));
    }
}
