// src/modules/ethernet.rs

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::Result;
use crate::exec::VmcliExecutor;
use crate::modules::ModuleClient;

/// Distributed virtual switch port a NIC is backed by.
#[derive(Debug, Clone, Default)]
pub struct DvsBacking {
    pub switch_id: String,
    pub port_id: String,
    pub portgroup_id: String,
    pub connection_id: String,
}

/// Fault injection and bandwidth limits for [`Ethernet::set_transfer_rate`].
#[derive(Debug, Clone, Default)]
pub struct TransferRate {
    pub tx_drop_rate: String,
    pub rx_drop_rate: String,
    pub tx_drop_size: String,
    pub rx_drop_size: String,
    pub tx_bandwidth_limit: String,
    pub rx_bandwidth_limit: String,
}

/// `Ethernet` module: virtual NICs, identified by labels like `ethernet0`.
#[derive(Debug, Clone)]
pub struct Ethernet {
    client: ModuleClient,
}

impl Ethernet {
    pub const NAME: &'static str = "Ethernet";

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

    /// Connect or disconnect the VM's network (`connect_op` as the tool
    /// spells it).
    pub async fn connection_control(&self, vmx: impl AsRef<Path>, connect_op: &str) -> Result<()> {
        self.client
            .invoke(vmx, "ConnectionControl", [connect_op])
            .await
    }

    pub async fn is_present(&self, vmx: impl AsRef<Path>, label: &str) -> Result<Value> {
        self.client.invoke_json(vmx, "IsPresent", [label]).await
    }

    pub async fn move_device(&self, vmx: impl AsRef<Path>, from: &str, to: &str) -> Result<()> {
        self.client.invoke(vmx, "MoveDevice", [from, to]).await
    }

    pub async fn purge(&self, vmx: impl AsRef<Path>, label: &str) -> Result<()> {
        self.client.invoke(vmx, "Purge", [label]).await
    }

    pub async fn set_address_type(
        &self,
        vmx: impl AsRef<Path>,
        first: &str,
        second: &str,
    ) -> Result<()> {
        self.client
            .invoke(vmx, "SetAddressType", [first, second])
            .await
    }

    pub async fn set_allow_guest_control(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        allow: bool,
    ) -> Result<()> {
        self.set(vmx, "SetAllowGuestControl", label, allow.to_string())
            .await
    }

    /// e.g. `bridged`, `nat`, `hostonly` or `custom`.
    pub async fn set_connection_type(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        connection_type: &str,
    ) -> Result<()> {
        self.set(vmx, "SetConnectionType", label, connection_type)
            .await
    }

    pub async fn set_custom_type_backing(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        vnet: &str,
        bsd_name: &str,
        display_name: &str,
    ) -> Result<()> {
        self.client
            .invoke(
                vmx,
                "SetCustomTypeBacking",
                [label, vnet, bsd_name, display_name],
            )
            .await
    }

    pub async fn set_dvs_type_backing(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        backing: &DvsBacking,
    ) -> Result<()> {
        self.client
            .invoke(
                vmx,
                "SetDvsTypeBacking",
                [
                    label,
                    backing.switch_id.as_str(),
                    backing.port_id.as_str(),
                    backing.portgroup_id.as_str(),
                    backing.connection_id.as_str(),
                ],
            )
            .await
    }

    pub async fn set_external_id(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        external_id: &str,
    ) -> Result<()> {
        self.set(vmx, "SetExternalId", label, external_id).await
    }

    pub async fn set_features(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        features: &str,
    ) -> Result<()> {
        self.set(vmx, "SetFeatures", label, features).await
    }

    pub async fn set_link_state_propagation(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        enabled: bool,
    ) -> Result<()> {
        self.set(vmx, "SetLinkStatePropagation", label, enabled.to_string())
            .await
    }

    pub async fn set_network_name(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        network_name: &str,
    ) -> Result<()> {
        self.set(vmx, "SetNetworkName", label, network_name).await
    }

    pub async fn set_migrate_control(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        migrate_control: &str,
    ) -> Result<()> {
        self.set(vmx, "SetMigrateControl", label, migrate_control)
            .await
    }

    pub async fn set_nioc_type_backing(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        reservation: &str,
        shares: &str,
        limit: &str,
    ) -> Result<()> {
        self.client
            .invoke(
                vmx,
                "SetNiocTypeBacking",
                [label, reservation, shares, limit],
            )
            .await
    }

    pub async fn set_opaque_network_type_backing(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        network_id: &str,
        network_type: &str,
    ) -> Result<()> {
        self.client
            .invoke(
                vmx,
                "SetOpaqueNetworkTypeBacking",
                [label, network_id, network_type],
            )
            .await
    }

    pub async fn set_pci_slot_number(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        slot: u32,
    ) -> Result<()> {
        self.set(vmx, "SetPciSlotNumber", label, slot.to_string())
            .await
    }

    pub async fn set_present(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        present: bool,
    ) -> Result<()> {
        self.set(vmx, "SetPresent", label, present.to_string())
            .await
    }

    pub async fn set_pvn_type_backing(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        pvn_id: &str,
    ) -> Result<()> {
        self.set(vmx, "SetPvnTypeBacking", label, pvn_id).await
    }

    pub async fn set_security_policy(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        no_promiscuous: bool,
        down_when_addr_mismatch: bool,
        no_forged_src_addr: bool,
    ) -> Result<()> {
        self.client
            .invoke(
                vmx,
                "SetSecurityPolicy",
                [
                    label.to_string(),
                    no_promiscuous.to_string(),
                    down_when_addr_mismatch.to_string(),
                    no_forged_src_addr.to_string(),
                ],
            )
            .await
    }

    pub async fn set_start_connected(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        start_connected: bool,
    ) -> Result<()> {
        self.set(vmx, "SetStartConnected", label, start_connected.to_string())
            .await
    }

    pub async fn set_transfer_latency(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        tx_latency: &str,
        rx_latency: &str,
    ) -> Result<()> {
        self.client
            .invoke(vmx, "SetTransferLatency", [label, tx_latency, rx_latency])
            .await
    }

    pub async fn set_transfer_rate(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        rate: &TransferRate,
    ) -> Result<()> {
        self.client
            .invoke(
                vmx,
                "SetTransferRate",
                [
                    label,
                    rate.tx_drop_rate.as_str(),
                    rate.rx_drop_rate.as_str(),
                    rate.tx_drop_size.as_str(),
                    rate.rx_drop_size.as_str(),
                    rate.tx_bandwidth_limit.as_str(),
                    rate.rx_bandwidth_limit.as_str(),
                ],
            )
            .await
    }

    pub async fn set_upt_compatibility(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        enabled: bool,
    ) -> Result<()> {
        self.set(vmx, "SetUptCompatibility", label, enabled.to_string())
            .await
    }

    /// NIC model, e.g. `e1000e` or `vmxnet3`.
    pub async fn set_virtual_device(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        device: &str,
    ) -> Result<()> {
        self.set(vmx, "SetVirtualDevice", label, device).await
    }

    pub async fn set_wake_on_packet_receive(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        enabled: bool,
    ) -> Result<()> {
        self.set(vmx, "SetWakeOnPcktRcv", label, enabled.to_string())
            .await
    }

    async fn set(
        &self,
        vmx: impl AsRef<Path>,
        operation: &str,
        label: &str,
        value: impl Into<String>,
    ) -> Result<()> {
        self.client
            .invoke(vmx, operation, [label.to_string(), value.into()])
            .await
    }
}
