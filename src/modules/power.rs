// src/modules/power.rs

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::Result;
use crate::exec::VmcliExecutor;
use crate::modules::ModuleClient;
use crate::types::PowerOpType;

/// `Power` module: query and change the power state of a VM.
#[derive(Debug, Clone)]
pub struct Power {
    client: ModuleClient,
}

impl Power {
    pub const NAME: &'static str = "Power";

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

    /// Power on. `paused` starts the VM paused (`-p`), `soft` runs the
    /// guest's power-on scripts (`-s`).
    pub async fn start(&self, vmx: impl AsRef<Path>, paused: bool, soft: bool) -> Result<()> {
        let cmd = self
            .client
            .on(vmx, "Start")
            .flag("-p", paused)
            .flag("-s", soft);
        self.client.run(cmd).await?;
        Ok(())
    }

    /// Power off. `for_revert` (`-r`) and `snapshot_id` (`-si`) are used when
    /// stopping ahead of a snapshot revert.
    pub async fn stop(
        &self,
        vmx: impl AsRef<Path>,
        op_type: PowerOpType,
        for_revert: bool,
        snapshot_id: Option<u32>,
    ) -> Result<()> {
        let cmd = self
            .client
            .on(vmx, "Stop")
            .arg("-o")
            .arg(op_type.as_arg())
            .flag("-r", for_revert)
            .option("-si", snapshot_id.map(|id| id.to_string()));
        self.client.run(cmd).await?;
        Ok(())
    }

    pub async fn pause(&self, vmx: impl AsRef<Path>) -> Result<()> {
        self.client.run(self.client.on(vmx, "Pause")).await?;
        Ok(())
    }

    pub async fn unpause(&self, vmx: impl AsRef<Path>) -> Result<()> {
        self.client.run(self.client.on(vmx, "Unpause")).await?;
        Ok(())
    }

    pub async fn reset(&self, vmx: impl AsRef<Path>, op_type: PowerOpType) -> Result<()> {
        let cmd = self.client.on(vmx, "Reset").arg("-o").arg(op_type.as_arg());
        self.client.run(cmd).await?;
        Ok(())
    }

    pub async fn suspend(&self, vmx: impl AsRef<Path>, op_type: PowerOpType) -> Result<()> {
        let cmd = self.client.on(vmx, "Suspend").arg("-o").arg(op_type.as_arg());
        self.client.run(cmd).await?;
        Ok(())
    }
}
