// src/modules/chipset.rs

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::Result;
use crate::exec::VmcliExecutor;
use crate::modules::ModuleClient;

/// `Chipset` module: CPU and memory sizing.
#[derive(Debug, Clone)]
pub struct Chipset {
    client: ModuleClient,
}

impl Chipset {
    pub const NAME: &'static str = "Chipset";

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

    pub async fn set_vcpu_count(&self, vmx: impl AsRef<Path>, count: u32) -> Result<()> {
        self.set(vmx, "SetVCpuCount", count).await
    }

    pub async fn set_mem_size(&self, vmx: impl AsRef<Path>, size_mb: u64) -> Result<()> {
        self.set(vmx, "SetMemSize", size_mb).await
    }

    pub async fn set_simultaneous_threads(
        &self,
        vmx: impl AsRef<Path>,
        threads: u32,
    ) -> Result<()> {
        self.set(vmx, "SetSimultaneousThreads", threads).await
    }

    pub async fn set_cores_per_socket(&self, vmx: impl AsRef<Path>, cores: u32) -> Result<()> {
        self.set(vmx, "SetCoresPerSocket", cores).await
    }

    async fn set(
        &self,
        vmx: impl AsRef<Path>,
        operation: &str,
        value: impl ToString,
    ) -> Result<()> {
        let cmd = self.client.on(vmx, operation).arg(value.to_string());
        self.client.run(cmd).await?;
        Ok(())
    }
}
