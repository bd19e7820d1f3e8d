// src/config/validate.rs

use std::path::Component;

use crate::config::model::ConfigFile;
use crate::errors::{Result, VmcliError};

pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_vmcli_path(cfg)?;
    Ok(())
}

fn validate_vmcli_path(cfg: &ConfigFile) -> Result<()> {
    let Some(path) = cfg.settings.configured_vmcli_path() else {
        return Ok(());
    };

    let raw = path.as_os_str().to_string_lossy();
    let ends_with_separator = raw.ends_with('/') || raw.ends_with(std::path::MAIN_SEPARATOR);
    let last_is_file = matches!(path.components().next_back(), Some(Component::Normal(_)));

    if ends_with_separator || !last_is_file {
        return Err(VmcliError::ConfigError(format!(
            "[settings].vmcli_path must name an executable file (got '{}')",
            raw
        )));
    }

    Ok(())
}
