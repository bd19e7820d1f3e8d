// src/modules/sata.rs

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::Result;
use crate::exec::VmcliExecutor;
use crate::modules::ModuleClient;

/// `Sata` module: SATA controllers, addressed as `sata0`, `sata1`, ...
#[derive(Debug, Clone)]
pub struct Sata {
    client: ModuleClient,
}

impl Sata {
    pub const NAME: &'static str = "Sata";

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

    pub async fn purge(&self, vmx: impl AsRef<Path>, label: &str) -> Result<()> {
        self.client.invoke(vmx, "Purge", [label]).await
    }

    pub async fn move_controller(&self, vmx: impl AsRef<Path>, from: &str, to: &str) -> Result<()> {
        self.client.invoke(vmx, "Move", [from, to]).await
    }

    pub async fn find_first_free(&self, vmx: impl AsRef<Path>, label: &str) -> Result<Value> {
        self.client.invoke_json(vmx, "FindFirstFree", [label]).await
    }

    pub async fn set_present(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        present: bool,
    ) -> Result<()> {
        self.client
            .invoke(vmx, "SetPresent", [label.to_string(), present.to_string()])
            .await
    }

    pub async fn set_type(&self, vmx: impl AsRef<Path>, label: &str, hba_type: &str) -> Result<()> {
        self.client.invoke(vmx, "SetType", [label, hba_type]).await
    }

    pub async fn set_pci_slot_number(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        slot: u32,
    ) -> Result<()> {
        self.client
            .invoke(vmx, "SetPciSlotNumber", [label.to_string(), slot.to_string()])
            .await
    }

    pub async fn set_max_devices(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        max: u32,
    ) -> Result<()> {
        self.client
            .invoke(vmx, "SetMaxDevices", [label.to_string(), max.to_string()])
            .await
    }

    pub async fn is_present(&self, vmx: impl AsRef<Path>, label: &str) -> Result<Value> {
        self.client.invoke_json(vmx, "IsPresent", [label]).await
    }

    pub async fn is_child_present(&self, vmx: impl AsRef<Path>, label: &str) -> Result<Value> {
        self.client
            .invoke_json(vmx, "IsChildPresent", [label])
            .await
    }

    /// Plain-text answer; this operation has no JSON form.
    pub async fn has_no_device(&self, vmx: impl AsRef<Path>, label: &str) -> Result<String> {
        self.client
            .run(self.client.on(vmx, "HasNoDevice").arg(label))
            .await
    }

    pub async fn set_numa_node(&self, vmx: impl AsRef<Path>, label: &str, node: u32) -> Result<()> {
        self.client
            .invoke(vmx, "SetNumaNode", [label.to_string(), node.to_string()])
            .await
    }
}
