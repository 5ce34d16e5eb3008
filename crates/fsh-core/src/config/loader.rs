//! Config loader: reads `~/.fsh/config.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.fsh/config.json`
//! 3. Environment variables `FSH_<SECTION>__<FIELD>` (override JSON)

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::schema::Config;

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load configuration from the default path + env vars.
///
/// Falls back to `Config::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);
    let config = load_config_from_path(&config_path);
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Load config from a specific file path, without env overrides.
fn load_config_from_path(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return Config::default();
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return Config::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to parse config JSON: {}", e);
            Config::default()
        }
    }
}

/// Apply environment variable overrides on top of a loaded config.
///
/// Env var format: `FSH_<SECTION>__<FIELD>` (double underscore as delimiter).
///
/// Supported overrides:
/// - `FSH_LOG__ENABLED` → `log.enabled`
/// - `FSH_LOG__DIR` → `log.dir`
/// - `FSH_SHELL__PROMPT` → `shell.prompt`
/// - `FSH_SHELL__HISTORY` → `shell.history`
/// - `FSH_SHELL__HISTORY_SIZE` → `shell.history_size`
/// - `FSH_SHELL__SYNC_PROCESS_CWD` → `shell.sync_process_cwd`
///
/// Values that fail to parse are ignored with a warning.
fn apply_env_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(val) = var("FSH_LOG__ENABLED") {
        override_bool(&mut config.log.enabled, "FSH_LOG__ENABLED", &val);
    }
    if let Some(val) = var("FSH_LOG__DIR") {
        config.log.dir = val;
    }
    if let Some(val) = var("FSH_SHELL__PROMPT") {
        config.shell.prompt = val;
    }
    if let Some(val) = var("FSH_SHELL__HISTORY") {
        override_bool(&mut config.shell.history, "FSH_SHELL__HISTORY", &val);
    }
    if let Some(val) = var("FSH_SHELL__HISTORY_SIZE") {
        match val.parse::<usize>() {
            Ok(n) => config.shell.history_size = n,
            Err(_) => warn!(key = "FSH_SHELL__HISTORY_SIZE", value = %val, "ignoring invalid number"),
        }
    }
    if let Some(val) = var("FSH_SHELL__SYNC_PROCESS_CWD") {
        override_bool(
            &mut config.shell.sync_process_cwd,
            "FSH_SHELL__SYNC_PROCESS_CWD",
            &val,
        );
    }
    config
}

fn override_bool(target: &mut bool, key: &str, val: &str) {
    match parse_bool(val) {
        Some(b) => *target = b,
        None => warn!(key, value = %val, "ignoring invalid boolean"),
    }
}

/// Accepts `true/false`, `1/0`, `yes/no`, `on/off` (case-insensitive).
fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = load_config_from_path(&tmp.path().join("nope.json"));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_invalid_json_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config_from_path(&path), Config::default());
    }

    #[test]
    fn test_env_overrides() {
        let cfg = apply_env_overrides(
            Config::default(),
            env(&[
                ("FSH_LOG__DIR", "/tmp/fsh-logs"),
                ("FSH_LOG__ENABLED", "off"),
                ("FSH_SHELL__PROMPT", "fs"),
                ("FSH_SHELL__HISTORY_SIZE", "50"),
                ("FSH_SHELL__SYNC_PROCESS_CWD", "false"),
            ]),
        );
        assert_eq!(cfg.log.dir, "/tmp/fsh-logs");
        assert!(!cfg.log.enabled);
        assert_eq!(cfg.shell.prompt, "fs");
        assert_eq!(cfg.shell.history_size, 50);
        assert!(!cfg.shell.sync_process_cwd);
    }

    #[test]
    fn test_invalid_env_values_ignored() {
        let cfg = apply_env_overrides(
            Config::default(),
            env(&[
                ("FSH_SHELL__HISTORY_SIZE", "lots"),
                ("FSH_SHELL__HISTORY", "maybe"),
            ]),
        );
        assert_eq!(cfg.shell.history_size, 1000);
        assert!(cfg.shell.history);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool("yes"), Some(true));
        assert_eq!(parse_bool("nah"), None);
    }
}
