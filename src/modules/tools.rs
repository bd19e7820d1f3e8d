// src/modules/tools.rs

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::Result;
use crate::exec::VmcliExecutor;
use crate::modules::ModuleClient;

/// Optional arguments shared by `Tools Install` and `Tools Upgrade`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolsSource {
    /// Installer command line (`-c`).
    pub cmdline: Option<String>,
    /// Backing type of the tools image (`-bt`).
    pub backing_type: Option<String>,
    /// Backing path of the tools image (`-bp`).
    pub backing_path: Option<String>,
}

/// `Tools` module: the guest tools package.
#[derive(Debug, Clone)]
pub struct Tools {
    client: ModuleClient,
}

impl Tools {
    pub const NAME: &'static str = "Tools";

    pub fn new(executor: Arc<dyn VmcliExecutor>) -> Self {
        Self {
            client: ModuleClient::new(Self::NAME, executor),
        }
    }

    pub fn client(&self) -> &ModuleClient {
        &self.client
    }

    pub async fn install(&self, vmx: impl AsRef<Path>, source: &ToolsSource) -> Result<()> {
        self.run_with_source(vmx, "Install", source).await
    }

    pub async fn upgrade(&self, vmx: impl AsRef<Path>, source: &ToolsSource) -> Result<()> {
        self.run_with_source(vmx, "Upgrade", source).await
    }

    /// Tools state. The operation is spelled `Query` for this module.
    pub async fn query(&self, vmx: impl AsRef<Path>) -> Result<Value> {
        self.client.query_json(self.client.on(vmx, "Query").json()).await
    }

    async fn run_with_source(
        &self,
        vmx: impl AsRef<Path>,
        operation: &str,
        source: &ToolsSource,
    ) -> Result<()> {
        let backing_path = source
            .backing_path
            .as_deref()
            .filter(|p| !p.trim().is_empty());

        let cmd = self
            .client
            .on(vmx, operation)
            .option("-c", source.cmdline.as_deref())
            .option("-bt", source.backing_type.as_deref())
            .option("-bp", backing_path);
        self.client.run(cmd).await?;
        Ok(())
    }
}
