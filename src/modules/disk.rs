// src/modules/disk.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use globset::{Glob, GlobMatcher};
use serde_json::Value;
use tracing::debug;

use crate::errors::{Result, VmcliError};
use crate::exec::VmcliExecutor;
use crate::modules::{ModuleClient, NO_VALUES};
use crate::types::{DiskAdapterType, VirtualDiskType};

/// `Disk` module: virtual disk files and their attachment to a VM.
#[derive(Debug, Clone)]
pub struct Disk {
    client: ModuleClient,
}

impl Disk {
    pub const NAME: &'static str = "Disk";

    pub fn new(executor: Arc<dyn VmcliExecutor>) -> Self {
        Self {
            client: ModuleClient::new(Self::NAME, executor),
        }
    }

    pub fn client(&self) -> &ModuleClient {
        &self.client
    }

    /// Create a virtual disk at `file_path` and return the files that make
    /// it up.
    ///
    /// Split disks produce several extents named after the requested file,
    /// so the result is every `<stem>*.vmdk` next to `file_path`, sorted.
    /// A bare file name with no directory yields just `file_path`.
    pub async fn create(
        &self,
        file_path: impl AsRef<Path>,
        adapter: DiskAdapterType,
        size: &str,
        disk_type: VirtualDiskType,
    ) -> Result<Vec<PathBuf>> {
        let file_path = file_path.as_ref();

        let cmd = self
            .client
            .command("create")
            .arg("--filepath")
            .target(file_path)
            .arg("--adapter")
            .arg(adapter.as_arg())
            .arg("--size")
            .arg(size)
            .arg("--type")
            .arg(disk_type.as_arg());
        self.client.run(cmd).await?;

        let parent = match file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => return Ok(vec![file_path.to_path_buf()]),
        };

        let stem = file_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        find_extents(parent, &stem).await
    }

    pub async fn query(&self, vmx: impl AsRef<Path>) -> Result<Value> {
        self.client.query(vmx).await
    }

    pub async fn is_present(&self, vmx: impl AsRef<Path>, label: &str) -> Result<Value> {
        self.client.invoke_json(vmx, "IsPresent", [label]).await
    }

    pub async fn branch(&self, vmx: impl AsRef<Path>, label: &str) -> Result<()> {
        self.client.invoke(vmx, "Branch", [label]).await
    }

    pub async fn branch_cancel(&self, vmx: impl AsRef<Path>) -> Result<()> {
        self.client.invoke(vmx, "BranchCancel", NO_VALUES).await
    }

    /// Connect or disconnect a removable disk device.
    pub async fn connection_control(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        connect_op: &str,
    ) -> Result<()> {
        self.client
            .invoke(vmx, "ConnectionControl", [label, connect_op])
            .await
    }

    /// Convert the allocation type of the disk backing file at `disk_path`.
    pub async fn convert_alloc_type(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        disk_path: &str,
        alloc_type: &str,
    ) -> Result<()> {
        self.client
            .invoke(vmx, "ConvertAllocType", [label, disk_path, alloc_type])
            .await
    }

    pub async fn convert_alloc_type_cancel(&self, vmx: impl AsRef<Path>) -> Result<()> {
        self.client
            .invoke(vmx, "ConvertAllocTypeCancel", NO_VALUES)
            .await
    }

    /// Grow the disk to `sectors` sectors.
    pub async fn extend(&self, vmx: impl AsRef<Path>, label: &str, sectors: u64) -> Result<()> {
        self.client
            .invoke(vmx, "Extended", [label.to_string(), sectors.to_string()])
            .await
    }

    pub async fn purge(&self, vmx: impl AsRef<Path>, label: &str) -> Result<()> {
        self.client.invoke(vmx, "Purge", [label]).await
    }

    /// Move a disk from one device slot to another, e.g. `sata0:1` to `nvme0:0`.
    pub async fn move_disk(&self, vmx: impl AsRef<Path>, from: &str, to: &str) -> Result<()> {
        self.client.invoke(vmx, "Move", [from, to]).await
    }

    pub async fn set_allow_guest_control(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        allow: bool,
    ) -> Result<()> {
        self.set_flag(vmx, "SetAllowGuestControl", label, allow).await
    }

    pub async fn set_backing_info(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        backing_type: &str,
        backing_path: &str,
        client_device: &str,
    ) -> Result<()> {
        self.client
            .invoke(
                vmx,
                "SetBackingInfo",
                [label, backing_type, backing_path, client_device],
            )
            .await
    }

    pub async fn set_bandwidth_cap(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        cap: &str,
    ) -> Result<()> {
        self.client.invoke(vmx, "SetBandwidthCap", [label, cap]).await
    }

    /// Content based read cache for the whole VM.
    pub async fn set_cbrc_cache_enabled(&self, vmx: impl AsRef<Path>, enabled: bool) -> Result<()> {
        self.client
            .invoke(vmx, "SetCbrcCacheEnabled", [enabled.to_string()])
            .await
    }

    /// Changed block tracking for one disk.
    pub async fn set_ctk_enabled(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        enabled: bool,
    ) -> Result<()> {
        self.set_flag(vmx, "SetCtkEnabled", label, enabled).await
    }

    pub async fn set_digest(&self, vmx: impl AsRef<Path>, label: &str, digest: bool) -> Result<()> {
        self.set_flag(vmx, "SetDigest", label, digest).await
    }

    pub async fn set_uuid(&self, vmx: impl AsRef<Path>, label: &str, uuid: &str) -> Result<()> {
        self.client.invoke(vmx, "SetDiskUUID", [label, uuid]).await
    }

    pub async fn set_uuid_enabled(&self, vmx: impl AsRef<Path>, enabled: bool) -> Result<()> {
        self.client
            .invoke(vmx, "SetDiskUuidEnabled", [enabled.to_string()])
            .await
    }

    pub async fn set_exclusive_access(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        exclusive: bool,
    ) -> Result<()> {
        self.set_flag(vmx, "SetExclusiveAccess", label, exclusive).await
    }

    pub async fn set_global_ctk_disallowed(
        &self,
        vmx: impl AsRef<Path>,
        disallow: bool,
    ) -> Result<()> {
        self.client
            .invoke(vmx, "SetGlobalCtkDisallowed", [disallow.to_string()])
            .await
    }

    pub async fn set_hard_disk_host_buffer(&self, vmx: impl AsRef<Path>, mode: &str) -> Result<()> {
        self.client.invoke(vmx, "SetHardDiskHostBuffer", [mode]).await
    }

    pub async fn set_hard_disk_page_align(&self, vmx: impl AsRef<Path>, mode: &str) -> Result<()> {
        self.client.invoke(vmx, "SetHardDiskPageAlign", [mode]).await
    }

    pub async fn set_hide_type_of_read_only_part(
        &self,
        vmx: impl AsRef<Path>,
        hide: bool,
    ) -> Result<()> {
        self.client
            .invoke(vmx, "SetHideTypeOfROnlyPart", [hide.to_string()])
            .await
    }

    /// Disk mode, e.g. `persistent` or `independent-nonpersistent`.
    pub async fn set_mode(&self, vmx: impl AsRef<Path>, label: &str, mode: &str) -> Result<()> {
        self.client.invoke(vmx, "SetMode", [label, mode]).await
    }

    pub async fn set_policy(&self, vmx: impl AsRef<Path>, label: &str, policy: &str) -> Result<()> {
        self.client.invoke(vmx, "SetPolicy", [label, policy]).await
    }

    pub async fn set_present(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        present: bool,
    ) -> Result<()> {
        self.set_flag(vmx, "SetPresent", label, present).await
    }

    pub async fn set_read_only(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        read_only: bool,
    ) -> Result<()> {
        self.set_flag(vmx, "SetReadOnly", label, read_only).await
    }

    pub async fn set_reservation(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        reservation: &str,
    ) -> Result<()> {
        self.client
            .invoke(vmx, "SetReservation", [label, reservation])
            .await
    }

    pub async fn set_shares(&self, vmx: impl AsRef<Path>, label: &str, shares: &str) -> Result<()> {
        self.client.invoke(vmx, "SetShares", [label, shares]).await
    }

    pub async fn set_sharing(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        sharing: &str,
    ) -> Result<()> {
        self.client.invoke(vmx, "SetSharing", [label, sharing]).await
    }

    pub async fn set_spif_filters(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        filters: &str,
    ) -> Result<()> {
        self.client
            .invoke(vmx, "SetSpifFilters", [label, filters])
            .await
    }

    pub async fn set_start_connected(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        start_connected: bool,
    ) -> Result<()> {
        self.set_flag(vmx, "SetStartConnected", label, start_connected)
            .await
    }

    pub async fn set_throughput_cap(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        cap: &str,
    ) -> Result<()> {
        self.client
            .invoke(vmx, "SetThroughputCap", [label, cap])
            .await
    }

    pub async fn set_write_through(
        &self,
        vmx: impl AsRef<Path>,
        label: &str,
        write_through: bool,
    ) -> Result<()> {
        self.set_flag(vmx, "SetWriteThrough", label, write_through)
            .await
    }

    async fn set_flag(
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

fn extent_matcher(stem: &str) -> Result<GlobMatcher> {
    let pattern = format!("{}*.vmdk", globset::escape(stem));
    let glob = Glob::new(&pattern)
        .map_err(|e| VmcliError::Other(anyhow::anyhow!("invalid extent pattern '{pattern}': {e}")))?;
    Ok(glob.compile_matcher())
}

async fn find_extents(dir: &Path, stem: &str) -> Result<Vec<PathBuf>> {
    let matcher = extent_matcher(stem)?;

    let mut found = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        if matcher.is_match(entry.file_name()) {
            found.push(entry.path());
        }
    }
    found.sort();

    debug!(dir = %dir.display(), stem, extents = found.len(), "collected disk extents");
    Ok(found)
}
