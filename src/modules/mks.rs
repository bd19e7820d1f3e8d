// src/modules/mks.rs

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::Result;
use crate::exec::VmcliExecutor;
use crate::modules::ModuleClient;

/// `MKS` module: the VM's mouse, keyboard and screen.
#[derive(Debug, Clone)]
pub struct Mks {
    client: ModuleClient,
}

impl Mks {
    pub const NAME: &'static str = "MKS";

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

    /// Save the guest screen to `file` on the host.
    pub async fn capture_screenshot(
        &self,
        vmx: impl AsRef<Path>,
        file: impl AsRef<Path>,
    ) -> Result<()> {
        let file = file.as_ref().to_string_lossy().into_owned();
        self.client.invoke(vmx, "captureScreenshot", [file]).await
    }

    /// Send one USB HID key code with a modifier mask.
    pub async fn send_key_event(
        &self,
        vmx: impl AsRef<Path>,
        hid_code: &str,
        modifier: &str,
    ) -> Result<()> {
        self.client
            .invoke(vmx, "sendKeyEvent", [hid_code, modifier])
            .await
    }

    pub async fn send_key_sequence(&self, vmx: impl AsRef<Path>, sequence: &str) -> Result<()> {
        self.client.invoke(vmx, "sendKeySequence", [sequence]).await
    }

    pub async fn set_accel_3d(&self, vmx: impl AsRef<Path>, enabled: bool) -> Result<()> {
        self.client
            .invoke(vmx, "SetAccel3d", [enabled.to_string()])
            .await
    }

    pub async fn set_fullscreen_at_power_on(
        &self,
        vmx: impl AsRef<Path>,
        enabled: bool,
    ) -> Result<()> {
        self.client
            .invoke(vmx, "SetFullscreenAtPowerOn", [enabled.to_string()])
            .await
    }

    pub async fn set_fullscreen_on_all_host_displays(
        &self,
        vmx: impl AsRef<Path>,
        enabled: bool,
    ) -> Result<()> {
        self.client
            .invoke(vmx, "SetFullScreenOnAllHostDisplays", [enabled.to_string()])
            .await
    }

    pub async fn set_graphics_memory_kb(
        &self,
        vmx: impl AsRef<Path>,
        kilobytes: u64,
    ) -> Result<()> {
        self.client
            .invoke(vmx, "SetGraphicsMemoryKB", [kilobytes.to_string()])
            .await
    }

    pub async fn set_guest_resolution(
        &self,
        vmx: impl AsRef<Path>,
        width: u32,
        height: u32,
    ) -> Result<()> {
        self.client
            .invoke(
                vmx,
                "SetGuestResolution",
                [width.to_string(), height.to_string()],
            )
            .await
    }

    pub async fn set_num_displays(&self, vmx: impl AsRef<Path>, displays: u32) -> Result<()> {
        self.client
            .invoke(vmx, "SetNumDisplays", [displays.to_string()])
            .await
    }

    pub async fn set_renderer_3d(&self, vmx: impl AsRef<Path>, renderer: &str) -> Result<()> {
        self.client.invoke(vmx, "SetRenderer3d", [renderer]).await
    }

    pub async fn set_vram_size(&self, vmx: impl AsRef<Path>, bytes: u64) -> Result<()> {
        self.client
            .invoke(vmx, "SetVramSize", [bytes.to_string()])
            .await
    }
}
