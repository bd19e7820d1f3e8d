// src/modules/hgfs.rs

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::Result;
use crate::exec::VmcliExecutor;
use crate::modules::ModuleClient;

/// `HGFS` module: host folders shared into the guest. Shares are addressed
/// by their label, e.g. `sharedFolder0`.
#[derive(Debug, Clone)]
pub struct Hgfs {
    client: ModuleClient,
}

impl Hgfs {
    pub const NAME: &'static str = "HGFS";

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

    pub async fn set_enabled(
        &self,
        vmx: impl AsRef<Path>,
        share: &str,
        enabled: bool,
    ) -> Result<()> {
        self.set(vmx, "SetEnabled", share, enabled.to_string()).await
    }

    pub async fn set_expiration(
        &self,
        vmx: impl AsRef<Path>,
        share: &str,
        expiration: &str,
    ) -> Result<()> {
        self.set(vmx, "SetExpiration", share, expiration).await
    }

    pub async fn set_follow_symlinks(
        &self,
        vmx: impl AsRef<Path>,
        share: &str,
        follow: bool,
    ) -> Result<()> {
        self.set(vmx, "SetFollowSymlinks", share, follow.to_string())
            .await
    }

    /// Name the share appears under inside the guest.
    pub async fn set_guest_name(
        &self,
        vmx: impl AsRef<Path>,
        share: &str,
        guest_name: &str,
    ) -> Result<()> {
        self.set(vmx, "SetGuestName", share, guest_name).await
    }

    pub async fn set_host_default_case(
        &self,
        vmx: impl AsRef<Path>,
        share: &str,
        default_case: bool,
    ) -> Result<()> {
        self.set(vmx, "SetHostDefaultCase", share, default_case.to_string())
            .await
    }

    pub async fn set_host_path(
        &self,
        vmx: impl AsRef<Path>,
        share: &str,
        host_path: impl AsRef<Path>,
    ) -> Result<()> {
        let host_path = host_path.as_ref().to_string_lossy().into_owned();
        self.set(vmx, "SetHostPath", share, host_path).await
    }

    pub async fn set_present(
        &self,
        vmx: impl AsRef<Path>,
        share: &str,
        present: bool,
    ) -> Result<()> {
        self.set(vmx, "SetPresent", share, present.to_string()).await
    }

    pub async fn set_read_access(
        &self,
        vmx: impl AsRef<Path>,
        share: &str,
        readable: bool,
    ) -> Result<()> {
        self.set(vmx, "SetReadAccess", share, readable.to_string())
            .await
    }

    pub async fn set_tags(&self, vmx: impl AsRef<Path>, share: &str, tags: &str) -> Result<()> {
        self.set(vmx, "SetTags", share, tags).await
    }

    pub async fn set_write_access(
        &self,
        vmx: impl AsRef<Path>,
        share: &str,
        writable: bool,
    ) -> Result<()> {
        self.set(vmx, "SetWriteAccess", share, writable.to_string())
            .await
    }

    async fn set(
        &self,
        vmx: impl AsRef<Path>,
        operation: &str,
        share: &str,
        value: impl Into<String>,
    ) -> Result<()> {
        self.client
            .invoke(vmx, operation, [share.to_string(), value.into()])
            .await
    }
}
