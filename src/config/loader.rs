// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::ConfigFile;
use crate::config::validate::validate_config;
use crate::errors::{Result, VmcliError};

/// Environment variable that overrides `settings.vmcli_path`.
pub const VMCLI_PATH_ENV: &str = "VMCLI_PATH";

/// Load a settings file from a given path.
///
/// This only performs TOML deserialization; use [`load_and_validate`] to
/// also check the values.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: ConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a settings file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let config = load_from_path(&path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Resolve the effective configuration for the binary.
///
/// - An explicit path must exist.
/// - Without one, [`default_config_path`] is read if present, otherwise
///   defaults apply.
/// - `VMCLI_PATH` from the process environment is applied last.
pub fn load_settings(explicit: Option<&Path>) -> Result<ConfigFile> {
    let mut config = match explicit {
        Some(path) => load_from_path(path)?,
        None => {
            let path = default_config_path();
            if path.is_file() {
                load_from_path(&path)?
            } else {
                debug!(path = %path.display(), "no settings file; using defaults");
                ConfigFile::default()
            }
        }
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config)?;
    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
///
/// Blank values are ignored.
pub fn apply_env_overrides(config: &mut ConfigFile, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(path) = lookup(VMCLI_PATH_ENV).filter(|v| !v.trim().is_empty()) {
        debug!(path = %path, "vmcli path taken from {VMCLI_PATH_ENV}");
        config.settings.vmcli_path = Some(PathBuf::from(path));
    }
}

/// Default settings file: `vmcli.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("vmcli.toml")
}

impl TryFrom<&str> for ConfigFile {
    type Error = VmcliError;

    fn try_from(contents: &str) -> std::result::Result<Self, Self::Error> {
        let config: ConfigFile = toml::from_str(contents)?;
        validate_config(&config)?;
        Ok(config)
    }
}
