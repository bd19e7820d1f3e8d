// src/modules/config_params.rs

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::Result;
use crate::exec::VmcliExecutor;
use crate::modules::ModuleClient;

/// `ConfigParams` module: raw entries of the `.vmx` file.
///
/// Common entry names live in [`crate::catalog::entry_names`].
#[derive(Debug, Clone)]
pub struct ConfigParams {
    client: ModuleClient,
}

impl ConfigParams {
    pub const NAME: &'static str = "ConfigParams";

    pub fn new(executor: Arc<dyn VmcliExecutor>) -> Self {
        Self {
            client: ModuleClient::new(Self::NAME, executor),
        }
    }

    pub fn client(&self) -> &ModuleClient {
        &self.client
    }

    pub async fn query(&self, vmx: impl AsRef<Path>) -> Result<Value> {
        self.client.query(vmx).await
    }

    pub async fn set_entry(&self, vmx: impl AsRef<Path>, name: &str, value: &str) -> Result<()> {
        let cmd = self.client.on(vmx, "setentry").arg(name).arg(value);
        self.client.run(cmd).await?;
        Ok(())
    }
}
