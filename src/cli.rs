// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::types::{DiskAdapterType, PowerOpType, VirtualDiskType};

/// Command-line arguments for `vmcli-wrapper`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "vmcli-wrapper",
    version,
    about = "Typed front end for the vmcli virtual machine control tool.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the settings file (TOML).
    ///
    /// Default: `vmcli.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Path to the vmcli executable. Overrides the settings file and `VMCLI_PATH`.
    #[arg(long, value_name = "PATH", global = true)]
    pub vmcli_path: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `VMCLI_WRAPPER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the vmcli version.
    Version,

    /// Print vmcli's help for a module, or the top-level help.
    ModuleHelp {
        #[arg(value_enum)]
        module: Option<ModuleName>,
    },

    /// Pass the remaining arguments to vmcli unchanged and print its stdout.
    Exec {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// `<VMX> <MODULE> query --format json` for any module.
    Query {
        #[arg(value_enum)]
        module: ModuleName,
        vmx: PathBuf,
    },

    /// Power state of a VM.
    Power {
        #[command(subcommand)]
        action: PowerAction,
    },

    /// Snapshots of a VM.
    Snapshot {
        #[command(subcommand)]
        action: SnapshotAction,
    },

    /// Raw `.vmx` entries.
    ConfigParams {
        #[command(subcommand)]
        action: ConfigParamsAction,
    },

    /// CPU and memory sizing.
    Chipset {
        #[command(subcommand)]
        action: ChipsetAction,
    },

    /// Create virtual machines.
    Vm {
        #[command(subcommand)]
        action: VmAction,
    },

    /// Virtual disks.
    Disk {
        #[command(subcommand)]
        action: DiskAction,
    },

    /// Guest tools.
    Tools {
        #[command(subcommand)]
        action: ToolsAction,
    },

    /// VM templates.
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum PowerAction {
    Query {
        vmx: PathBuf,
    },
    Start {
        vmx: PathBuf,
        #[arg(long)]
        paused: bool,
        #[arg(long)]
        soft: bool,
    },
    Stop {
        vmx: PathBuf,
        #[arg(long, value_parser = parse_power_op, default_value = "trySoft")]
        op: PowerOpType,
        #[arg(long)]
        for_revert: bool,
        #[arg(long, value_name = "ID")]
        snapshot_id: Option<u32>,
    },
    Pause {
        vmx: PathBuf,
    },
    Unpause {
        vmx: PathBuf,
    },
    Reset {
        vmx: PathBuf,
        #[arg(long, value_parser = parse_power_op, default_value = "trySoft")]
        op: PowerOpType,
    },
    Suspend {
        vmx: PathBuf,
        #[arg(long, value_parser = parse_power_op, default_value = "trySoft")]
        op: PowerOpType,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum SnapshotAction {
    Query {
        vmx: PathBuf,
    },
    Take {
        vmx: PathBuf,
        name: String,
        #[arg(long)]
        native: bool,
        #[arg(long)]
        memory: bool,
        #[arg(long)]
        description: Option<String>,
    },
    Revert {
        vmx: PathBuf,
        uid: String,
        #[arg(long)]
        native: bool,
    },
    Delete {
        vmx: PathBuf,
        uid: String,
        #[arg(long)]
        children: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigParamsAction {
    Query { vmx: PathBuf },
    SetEntry { vmx: PathBuf, name: String, value: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ChipsetAction {
    Query { vmx: PathBuf },
    SetVcpuCount { vmx: PathBuf, count: u32 },
    SetMemSize { vmx: PathBuf, size_mb: u64 },
}

#[derive(Debug, Clone, Subcommand)]
pub enum VmAction {
    Create {
        #[arg(long, value_name = "DIR")]
        dir: PathBuf,
        #[arg(long)]
        name: String,
        #[arg(long, value_name = "GUEST_OS")]
        guest_os: Option<String>,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum DiskAction {
    Query {
        vmx: PathBuf,
    },
    Create {
        file: PathBuf,
        #[arg(long, value_parser = parse_adapter, default_value = "lsilogic")]
        adapter: DiskAdapterType,
        #[arg(long)]
        size: String,
        #[arg(long = "type", value_parser = parse_disk_type, default_value = "0")]
        disk_type: VirtualDiskType,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ToolsAction {
    Query { vmx: PathBuf },
}

#[derive(Debug, Clone, Subcommand)]
pub enum TemplateAction {
    Deploy { vmtx: PathBuf },
}

/// vmcli command modules.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ModuleName {
    Chipset,
    ConfigParams,
    Disk,
    Ethernet,
    Guest,
    Hgfs,
    Mks,
    Nvme,
    Power,
    Sata,
    Serial,
    Snapshot,
    Tools,
    Vprobes,
    VmTemplate,
    Vm,
}

impl ModuleName {
    /// The token vmcli expects on its command line.
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleName::Chipset => "Chipset",
            ModuleName::ConfigParams => "ConfigParams",
            ModuleName::Disk => "Disk",
            ModuleName::Ethernet => "Ethernet",
            ModuleName::Guest => "Guest",
            ModuleName::Hgfs => "HGFS",
            ModuleName::Mks => "MKS",
            ModuleName::Nvme => "Nvme",
            ModuleName::Power => "Power",
            ModuleName::Sata => "Sata",
            ModuleName::Serial => "Serial",
            ModuleName::Snapshot => "Snapshot",
            ModuleName::Tools => "Tools",
            ModuleName::Vprobes => "VProbes",
            ModuleName::VmTemplate => "VMTemplate",
            ModuleName::Vm => "VM",
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn parse_power_op(s: &str) -> Result<PowerOpType, String> {
    s.parse()
}

fn parse_adapter(s: &str) -> Result<DiskAdapterType, String> {
    s.parse()
}

fn parse_disk_type(s: &str) -> Result<VirtualDiskType, String> {
    s.parse()
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
