// src/modules/vprobes.rs

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::Result;
use crate::exec::VmcliExecutor;
use crate::modules::{ModuleClient, NO_VALUES};

/// `VProbes` module: load and reset VProbes scripts.
#[derive(Debug, Clone)]
pub struct VProbes {
    client: ModuleClient,
}

impl VProbes {
    pub const NAME: &'static str = "VProbes";

    pub fn new(executor: Arc<dyn VmcliExecutor>) -> Self {
        Self {
            client: ModuleClient::new(Self::NAME, executor),
        }
    }

    pub fn client(&self) -> &ModuleClient {
        &self.client
    }

    /// Capitalised `Query`, as with Guest.
    pub async fn query(&self, vmx: impl AsRef<Path>) -> Result<Value> {
        self.client.invoke_json(vmx, "Query", NO_VALUES).await
    }

    pub async fn load(&self, vmx: impl AsRef<Path>, script: impl AsRef<Path>) -> Result<()> {
        let script = script.as_ref().to_string_lossy().into_owned();
        self.client.invoke(vmx, "Load", [script]).await
    }

    pub async fn reset(&self, vmx: impl AsRef<Path>) -> Result<()> {
        self.client.invoke(vmx, "Reset", NO_VALUES).await
    }

    pub async fn set_enabled(&self, vmx: impl AsRef<Path>, enabled: bool) -> Result<()> {
        self.client
            .invoke(vmx, "SetEnabled", [enabled.to_string()])
            .await
    }
}
