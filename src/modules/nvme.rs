// src/modules/nvme.rs

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::Result;
use crate::exec::VmcliExecutor;
use crate::modules::ModuleClient;

/// `Nvme` module: NVMe controllers, addressed as `nvme0`, `nvme1`, ...
#[derive(Debug, Clone)]
pub struct Nvme {
    client: ModuleClient,
}

impl Nvme {
    pub const NAME: &'static str = "Nvme";

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

    pub async fn set_bus_type(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        bus_type: &str,
    ) -> Result<()> {
        self.client
            .invoke(vmx, "SetBusType", [label, bus_type])
            .await
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

    /// The tool spells this operation `SetMaxDevice`, unlike Sata.
    pub async fn set_max_devices(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        max: u32,
    ) -> Result<()> {
        self.client
            .invoke(vmx, "SetMaxDevice", [label.to_string(), max.to_string()])
            .await
    }

    pub async fn is_child_present(&self, vmx: impl AsRef<Path>, label: &str) -> Result<Value> {
        self.client
            .invoke_json(vmx, "IsChildPresent", [label])
            .await
    }

    /// First free unit on the controller.
    pub async fn find_first_free(&self, vmx: impl AsRef<Path>, label: &str) -> Result<Value> {
        self.client.invoke_json(vmx, "FindFirstFree", [label]).await
    }
}
