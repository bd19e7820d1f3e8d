// src/locator.rs

//! Resolves the path of the vmcli executable.
//!
//! Resolution order, evaluated on every call:
//! 1. `settings.vmcli_path` (blank counts as unset)
//! 2. the platform default location, if the platform has one
//! 3. otherwise [`VmcliError::NotConfigured`]

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::errors::{Result, VmcliError};

/// Host platform as far as the default vmcli location is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Windows,
    Other,
}

impl HostPlatform {
    pub fn current() -> Self {
        if cfg!(windows) {
            HostPlatform::Windows
        } else {
            HostPlatform::Other
        }
    }
}

/// Default install location of vmcli on `platform`.
///
/// `program_files_x86` is the value of `%ProgramFiles(x86)%`, if known.
pub fn default_vmcli_path(
    platform: HostPlatform,
    program_files_x86: Option<PathBuf>,
) -> Option<PathBuf> {
    match platform {
        HostPlatform::Windows => {
            let base = program_files_x86
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| PathBuf::from(r"C:\Program Files (x86)"));
            Some(base.join("VMware").join("VMware Workstation").join("vmcli.exe"))
        }
        HostPlatform::Other => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VmcliLocator {
    configured: Option<PathBuf>,
    platform: Option<HostPlatform>,
}

impl VmcliLocator {
    pub fn new(settings: &Settings) -> Self {
        Self {
            configured: settings.configured_vmcli_path().map(Path::to_path_buf),
            platform: None,
        }
    }

    /// Locator that always resolves to `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self::new(&Settings::with_vmcli_path(path))
    }

    /// Pin the platform instead of querying the host on each call.
    pub fn for_platform(mut self, platform: HostPlatform) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn default_path(&self) -> Option<PathBuf> {
        let platform = self.platform.unwrap_or_else(HostPlatform::current);
        let program_files = std::env::var_os("ProgramFiles(x86)").map(PathBuf::from);
        default_vmcli_path(platform, program_files)
    }

    pub fn locate(&self) -> Result<PathBuf> {
        if let Some(path) = &self.configured {
            return Ok(path.clone());
        }
        self.default_path().ok_or(VmcliError::NotConfigured)
    }
}
