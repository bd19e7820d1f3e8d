// src/modules/template.rs

use std::path::Path;
use std::sync::Arc;

use crate::errors::Result;
use crate::exec::VmcliExecutor;
use crate::modules::ModuleClient;

/// `VMTemplate` module.
#[derive(Debug, Clone)]
pub struct VmTemplate {
    client: ModuleClient,
}

impl VmTemplate {
    pub const NAME: &'static str = "VMTemplate";

    pub fn new(executor: Arc<dyn VmcliExecutor>) -> Self {
        Self {
            client: ModuleClient::new(Self::NAME, executor),
        }
    }

    pub fn client(&self) -> &ModuleClient {
        &self.client
    }

    /// Deploy the template stored at `vmtx`.
    pub async fn deploy(&self, vmtx: impl AsRef<Path>) -> Result<()> {
        let cmd = self.client.command("Deploy").arg("--path").target(vmtx);
        self.client.run(cmd).await?;
        Ok(())
    }
}
