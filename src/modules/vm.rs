// src/modules/vm.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::catalog::guest_os;
use crate::errors::Result;
use crate::exec::VmcliExecutor;
use crate::modules::ModuleClient;

/// `VM` module: create new virtual machines.
#[derive(Debug, Clone)]
pub struct Vm {
    client: ModuleClient,
}

impl Vm {
    pub const NAME: &'static str = "VM";

    pub fn new(executor: Arc<dyn VmcliExecutor>) -> Self {
        Self {
            client: ModuleClient::new(Self::NAME, executor),
        }
    }

    pub fn client(&self) -> &ModuleClient {
        &self.client
    }

    /// Create VM `name` in `directory` and return the path of its `.vmx`.
    ///
    /// A missing or blank `guest_os` falls back to [`guest_os::OTHER_64`].
    pub async fn create(
        &self,
        directory: impl AsRef<Path>,
        name: &str,
        guest_os: Option<&str>,
    ) -> Result<PathBuf> {
        let directory = directory.as_ref();
        let guest_os = guest_os
            .filter(|g| !g.trim().is_empty())
            .unwrap_or(guest_os::OTHER_64);

        let cmd = self
            .client
            .command("Create")
            .arg("--name")
            .arg(name)
            .arg("--dirpath")
            .target(directory)
            .arg("--custom-guesttype")
            .arg(guest_os);
        self.client.run(cmd).await?;

        Ok(directory.join(format!("{name}.vmx")))
    }
}
