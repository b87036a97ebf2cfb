//! Config file upgrades: detect keys missing from an older file and write
//! them back with their default values, leaving existing values untouched.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

pub const KNOWN_KEYS: [&str; 7] = [
    "database",
    "start_instant",
    "recurrence_years_back",
    "recurrence_years_forward",
    "page_size",
    "week_starts_on",
    "log_level",
];

fn read_mapping(content: &str) -> AppResult<Mapping> {
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(
            "configuration file is not a YAML mapping".to_string(),
        )),
    }
}

/// Keys from `KNOWN_KEYS` that are absent from the YAML text.
pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(content)?;
    Ok(KNOWN_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Merge defaults for every missing key into the YAML text.
pub fn fill_missing(content: &str) -> AppResult<(String, Vec<&'static str>)> {
    let mut map = read_mapping(content)?;
    let missing = missing_keys(content)?;
    if missing.is_empty() {
        return Ok((content.to_string(), missing));
    }

    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => Mapping::new(),
    };

    for key in &missing {
        let k = Value::String((*key).to_string());
        if let Some(v) = defaults.get(&k) {
            map.insert(k, v.clone());
        }
    }

    Ok((serde_yaml::to_string(&Value::Mapping(map))?, missing))
}

/// Report missing keys of the config file at `path`.
pub fn check_config_file(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        info(format!("No configuration file at {}", path.display()));
        return Ok(KNOWN_KEYS.to_vec());
    }
    missing_keys(&fs::read_to_string(path)?)
}

/// Rewrite the config file at `path` with any missing key filled in.
/// Returns `true` when the file changed.
pub fn migrate_config_file(path: &Path) -> AppResult<bool> {
    let content = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    let (updated, added) = fill_missing(&content)?;
    if added.is_empty() {
        info("Configuration is up to date.");
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, updated)?;
    success(format!("Configuration migrated, added: {}", added.join(", ")));
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_only_absent_keys() {
        let yaml = "database: /tmp/a.sqlite\nstart_instant: 2024-01-01T00:00:00Z\n";
        let missing = missing_keys(yaml).expect("yaml");
        assert!(!missing.contains(&"database"));
        assert!(missing.contains(&"page_size"));
        assert_eq!(missing.len(), KNOWN_KEYS.len() - 2);
    }

    #[test]
    fn filling_keeps_existing_values() {
        let yaml = "database: /tmp/a.sqlite\npage_size: 3\n";
        let (out, added) = fill_missing(yaml).expect("fill");
        assert!(added.contains(&"recurrence_years_back"));

        let cfg = Config::from_yaml(&out).expect("reparse");
        assert_eq!(cfg.database, "/tmp/a.sqlite");
        assert_eq!(cfg.page_size, 3);
        assert!(missing_keys(&out).expect("yaml").is_empty());
    }

    #[test]
    fn non_mapping_is_a_config_error() {
        assert!(matches!(
            missing_keys("- a\n- b\n"),
            Err(AppError::Config(_))
        ));
    }
}
