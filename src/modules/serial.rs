// src/modules/serial.rs

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::Result;
use crate::exec::VmcliExecutor;
use crate::modules::ModuleClient;

/// Where a serial port is connected, for [`Serial::set_backing_info`].
#[derive(Debug, Clone, Default)]
pub struct SerialBacking {
    pub backing_type: String,
    pub path: String,
    pub net_proxy_path: String,
    pub pipe_end_point: String,
    pub net_end_point: String,
}

/// `Serial` module: virtual serial ports (`serial0`, ...).
#[derive(Debug, Clone)]
pub struct Serial {
    client: ModuleClient,
}

impl Serial {
    pub const NAME: &'static str = "Serial";

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

    pub async fn connection_control(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        op: &str,
    ) -> Result<()> {
        self.client
            .invoke(vmx, "ConnectionControl", [label, op])
            .await
    }

    pub async fn purge(&self, vmx: impl AsRef<Path>, label: &str) -> Result<()> {
        self.client.invoke(vmx, "Purge", [label]).await
    }

    pub async fn set_allow_guest_control(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        allow: bool,
    ) -> Result<()> {
        self.set(vmx, "SetAllowGuestControl", label, allow).await
    }

    pub async fn set_backing_info(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        backing: &SerialBacking,
    ) -> Result<()> {
        self.client
            .invoke(
                vmx,
                "SetBackingInfo",
                [
                    label,
                    backing.backing_type.as_str(),
                    backing.path.as_str(),
                    backing.net_proxy_path.as_str(),
                    backing.pipe_end_point.as_str(),
                    backing.net_end_point.as_str(),
                ],
            )
            .await
    }

    pub async fn set_present(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        present: bool,
    ) -> Result<()> {
        self.set(vmx, "SetPresent", label, present).await
    }

    pub async fn start_connected(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        start_connected: bool,
    ) -> Result<()> {
        self.set(vmx, "StartConnected", label, start_connected).await
    }

    pub async fn try_no_rx_loss(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        enabled: bool,
    ) -> Result<()> {
        self.set(vmx, "TryNoRxLoss", label, enabled).await
    }

    pub async fn yield_on_msr_read(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        enabled: bool,
    ) -> Result<()> {
        self.set(vmx, "YieldOnMsrRead", label, enabled).await
    }

    async fn set(
        &self,
        vmx: impl AsRef<Path>,
        operation: &str,
        label: &str,
        value: bool,
    ) -> Result<()> {
        self.client
            .invoke(vmx, operation, [label.to_string(), value.to_string()])
            .await
    }
}
