// src/modules/snapshot.rs

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::Result;
use crate::exec::VmcliExecutor;
use crate::modules::ModuleClient;

/// `Snapshot` module.
#[derive(Debug, Clone)]
pub struct Snapshot {
    client: ModuleClient,
}

impl Snapshot {
    pub const NAME: &'static str = "Snapshot";

    pub fn new(executor: Arc<dyn VmcliExecutor>) -> Self {
        Self {
            client: ModuleClient::new(Self::NAME, executor),
        }
    }

    pub fn client(&self) -> &ModuleClient {
        &self.client
    }

    /// The snapshot tree of the VM.
    pub async fn query(&self, vmx: impl AsRef<Path>) -> Result<Value> {
        self.client.query(vmx).await
    }

    /// Clone snapshot `uid` into a new VM at `file_path` named `name`.
    pub async fn clone_vm(
        &self,
        vmx: impl AsRef<Path>,
        overwrite: bool,
        linked: bool,
        uid: &str,
        file_path: impl AsRef<Path>,
        name: &str,
    ) -> Result<()> {
        let cmd = self
            .client
            .on(vmx, "Clone")
            .flag("-o", overwrite)
            .flag("-l", linked)
            .arg(uid)
            .target(file_path)
            .arg(name);
        self.client.run(cmd).await?;
        Ok(())
    }

    pub async fn delete(
        &self,
        vmx: impl AsRef<Path>,
        delete_children: bool,
        uid: &str,
    ) -> Result<()> {
        let cmd = self
            .client
            .on(vmx, "Delete")
            .flag("-d", delete_children)
            .arg(uid);
        self.client.run(cmd).await?;
        Ok(())
    }

    /// Take a snapshot called `name`.
    pub async fn take(
        &self,
        vmx: impl AsRef<Path>,
        native: bool,
        memory: bool,
        description: Option<&str>,
        name: &str,
    ) -> Result<()> {
        let cmd = self
            .client
            .on(vmx, "Take")
            .flag("-n", native)
            .flag("-m", memory)
            .option("-d", description)
            .arg(name);
        self.client.run(cmd).await?;
        Ok(())
    }

    pub async fn revert(&self, vmx: impl AsRef<Path>, native: bool, uid: &str) -> Result<()> {
        let cmd = self.client.on(vmx, "Revert").flag("-n", native).arg(uid);
        self.client.run(cmd).await?;
        Ok(())
    }
}
