// src/config/model.rs

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::exec::RunnerOptions;
use crate::types::LineDecoding;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [settings]
/// vmcli_path = "/opt/vmware/bin/vmcli"
/// kill_on_drop = false
/// stdout_decoding = "lossy"
/// stderr_decoding = "strict"
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub settings: Settings,
}

/// `[settings]` section.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Settings {
    /// Explicit path to the vmcli executable.
    ///
    /// When unset (or blank) the platform default location is used.
    #[serde(default)]
    pub vmcli_path: Option<PathBuf>,

    /// Kill the child process when an invocation is abandoned, e.g. on
    /// cancellation. Defaults to `false`.
    #[serde(default)]
    pub kill_on_drop: bool,

    #[serde(default)]
    pub stdout_decoding: LineDecoding,

    #[serde(default)]
    pub stderr_decoding: LineDecoding,
}

impl Settings {
    pub fn with_vmcli_path(path: impl Into<PathBuf>) -> Self {
        Self {
            vmcli_path: Some(path.into()),
            ..Self::default()
        }
    }

    /// The configured executable path, treating a blank value as unset.
    pub fn configured_vmcli_path(&self) -> Option<&Path> {
        self.vmcli_path
            .as_deref()
            .filter(|p| !p.as_os_str().to_string_lossy().trim().is_empty())
    }

    pub fn runner_options(&self) -> RunnerOptions {
        RunnerOptions {
            stdout_decoding: self.stdout_decoding,
            stderr_decoding: self.stderr_decoding,
            kill_on_drop: self.kill_on_drop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_path_counts_as_unset() {
        let settings = Settings::with_vmcli_path("   ");
        assert!(settings.configured_vmcli_path().is_none());

        let settings = Settings::with_vmcli_path("/usr/bin/vmcli");
        assert_eq!(
            settings.configured_vmcli_path(),
            Some(Path::new("/usr/bin/vmcli"))
        );
    }

    #[test]
    fn runner_options_follow_settings() {
        let settings = Settings {
            kill_on_drop: true,
            stderr_decoding: LineDecoding::Strict,
            ..Settings::default()
        };
        let options = settings.runner_options();
        assert!(options.kill_on_drop);
        assert_eq!(options.stdout_decoding, LineDecoding::Lossy);
        assert_eq!(options.stderr_decoding, LineDecoding::Strict);
    }
}
