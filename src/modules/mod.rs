// src/modules/mod.rs

//! Typed wrappers around vmcli's command modules.
//!
//! Each wrapper only builds argument vectors and hands them to a
//! [`VmcliExecutor`]; some parse the returned text as JSON. Operations the
//! wrappers do not cover can still be driven through [`ModuleClient::run`]
//! with a hand-built [`CommandBuilder`].

pub mod chipset;
pub mod config_params;
pub mod disk;
pub mod ethernet;
pub mod guest;
pub mod hgfs;
pub mod mks;
pub mod nvme;
pub mod power;
pub mod sata;
pub mod serial;
pub mod snapshot;
pub mod template;
pub mod tools;
pub mod vm;
pub mod vprobes;

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::trace;

use crate::command::CommandBuilder;
use crate::errors::Result;
use crate::exec::VmcliExecutor;

pub use chipset::Chipset;
pub use config_params::ConfigParams;
pub use disk::Disk;
pub use ethernet::Ethernet;
pub use guest::{Guest, GuestCredentials};
pub use hgfs::Hgfs;
pub use mks::Mks;
pub use nvme::Nvme;
pub use power::Power;
pub use sata::Sata;
pub use serial::Serial;
pub use snapshot::Snapshot;
pub use template::VmTemplate;
pub use tools::Tools;
pub use vm::Vm;
pub use vprobes::VProbes;

/// Empty value list for operations that take no arguments.
pub(crate) const NO_VALUES: [&str; 0] = [];

/// What every module wrapper shares: a module name and an executor.
#[derive(Clone)]
pub struct ModuleClient {
    name: &'static str,
    executor: Arc<dyn VmcliExecutor>,
}

impl ModuleClient {
    /// `name` is the module token passed to vmcli; empty for the root.
    pub fn new(name: &'static str, executor: Arc<dyn VmcliExecutor>) -> Self {
        Self { name, executor }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `vmcli --version`
    pub async fn version(&self) -> Result<String> {
        self.run(CommandBuilder::new().arg("--version")).await
    }

    /// `vmcli [<module>] --help`
    pub async fn help(&self) -> Result<String> {
        let mut cmd = CommandBuilder::new();
        if !self.name.is_empty() {
            cmd = cmd.arg(self.name);
        }
        self.run(cmd.arg("--help")).await
    }

    /// `<vmx> <module> <operation>`
    pub fn on(&self, vmx: impl AsRef<Path>, operation: &str) -> CommandBuilder {
        CommandBuilder::new()
            .target(vmx)
            .module(self.name)
            .op(operation)
    }

    /// `<module> <operation>`, for operations that take no target file.
    pub fn command(&self, operation: &str) -> CommandBuilder {
        CommandBuilder::new().module(self.name).op(operation)
    }

    pub async fn run(&self, command: CommandBuilder) -> Result<String> {
        let output = self.executor.execute(command.build()).await?;
        trace!(module = self.name, output = %output, "vmcli output");
        Ok(output)
    }

    /// Run `command` and parse its stdout as one JSON document.
    pub async fn query_json(&self, command: CommandBuilder) -> Result<Value> {
        let output = self.run(command).await?;
        Ok(serde_json::from_str(&output)?)
    }

    /// `<vmx> <module> query --format json`
    pub async fn query(&self, vmx: impl AsRef<Path>) -> Result<Value> {
        self.query_json(self.on(vmx, "query").json()).await
    }

    /// `<vmx> <module> <operation> <values...>`, discarding the output.
    pub async fn invoke<I, S>(
        &self,
        vmx: impl AsRef<Path>,
        operation: &str,
        values: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.run(self.on(vmx, operation).args(values)).await?;
        Ok(())
    }

    /// `<vmx> <module> <operation> <values...> --format json`
    pub async fn invoke_json<I, S>(
        &self,
        vmx: impl AsRef<Path>,
        operation: &str,
        values: I,
    ) -> Result<Value>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query_json(self.on(vmx, operation).args(values).json())
            .await
    }
}

impl fmt::Debug for ModuleClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleClient").field("name", &self.name).finish()
    }
}

/// Entry point handing out the module wrappers over one shared executor.
#[derive(Clone)]
pub struct VmcliClient {
    executor: Arc<dyn VmcliExecutor>,
}

impl VmcliClient {
    pub fn new(executor: Arc<dyn VmcliExecutor>) -> Self {
        Self { executor }
    }

    /// Client for module-less invocations (`--version`, `--help`).
    pub fn root(&self) -> ModuleClient {
        ModuleClient::new("", self.executor.clone())
    }

    /// Generic client for any module name.
    pub fn module(&self, name: &'static str) -> ModuleClient {
        ModuleClient::new(name, self.executor.clone())
    }

    pub async fn version(&self) -> Result<String> {
        self.root().version().await
    }

    pub fn power(&self) -> Power {
        Power::new(self.executor.clone())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.executor.clone())
    }

    pub fn config_params(&self) -> ConfigParams {
        ConfigParams::new(self.executor.clone())
    }

    pub fn chipset(&self) -> Chipset {
        Chipset::new(self.executor.clone())
    }

    pub fn vm(&self) -> Vm {
        Vm::new(self.executor.clone())
    }

    pub fn template(&self) -> VmTemplate {
        VmTemplate::new(self.executor.clone())
    }

    pub fn disk(&self) -> Disk {
        Disk::new(self.executor.clone())
    }

    pub fn tools(&self) -> Tools {
        Tools::new(self.executor.clone())
    }

    pub fn ethernet(&self) -> Ethernet {
        Ethernet::new(self.executor.clone())
    }

    pub fn guest(&self) -> Guest {
        Guest::new(self.executor.clone())
    }

    pub fn hgfs(&self) -> Hgfs {
        Hgfs::new(self.executor.clone())
    }

    pub fn mks(&self) -> Mks {
        Mks::new(self.executor.clone())
    }

    pub fn nvme(&self) -> Nvme {
        Nvme::new(self.executor.clone())
    }

    pub fn sata(&self) -> Sata {
        Sata::new(self.executor.clone())
    }

    pub fn serial(&self) -> Serial {
        Serial::new(self.executor.clone())
    }

    pub fn vprobes(&self) -> VProbes {
        VProbes::new(self.executor.clone())
    }
}

impl fmt::Debug for VmcliClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VmcliClient").finish_non_exhaustive()
    }
}
