// src/lib.rs

pub mod catalog;
pub mod cli;
pub mod command;
pub mod config;
pub mod errors;
pub mod exec;
pub mod locator;
pub mod logging;
pub mod modules;
pub mod types;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use serde_json::Value;
use tokio::sync::oneshot;
use tracing::{debug, info};

use crate::cli::{
    ChipsetAction, CliArgs, Command, ConfigParamsAction, DiskAction, PowerAction,
    SnapshotAction, TemplateAction, ToolsAction, VmAction,
};
use crate::command::CommandBuilder;
use crate::config::{load_settings, validate_config};
use crate::exec::{cancellable, Vmcli};
use crate::modules::VmcliClient;

/// What a subcommand produced, before it is printed.
#[derive(Debug)]
enum Outcome {
    Text(String),
    Json(Value),
    Paths(Vec<PathBuf>),
    Done,
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - settings loading (file, `VMCLI_PATH`, `--vmcli-path`)
/// - the vmcli gateway and typed client
/// - Ctrl-C handling, which abandons the running invocation
pub async fn run(args: CliArgs) -> Result<()> {
    let mut cfg = load_settings(args.config.as_deref())?;
    if let Some(path) = args.vmcli_path.clone() {
        debug!(path = %path.display(), "vmcli path taken from --vmcli-path");
        cfg.settings.vmcli_path = Some(path);
        validate_config(&cfg)?;
    }

    let client = VmcliClient::new(Arc::new(Vmcli::from_settings(&cfg.settings)));

    // Ctrl-C → cancel the in-flight invocation.
    let (cancel_tx, cancel_rx) = oneshot::channel();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("failed to listen for Ctrl+C: {e}");
            return;
        }
        info!("Ctrl+C received");
        let _ = cancel_tx.send(());
    });

    let outcome = cancellable(dispatch(&client, args.command), cancel_rx).await?;
    print_outcome(outcome)
}

async fn dispatch(client: &VmcliClient, command: Command) -> errors::Result<Outcome> {
    let outcome = match command {
        Command::Version => Outcome::Text(client.version().await?),
        Command::ModuleHelp { module } => {
            let module = match module {
                Some(name) => client.module(name.as_str()),
                None => client.root(),
            };
            Outcome::Text(module.help().await?)
        }
        Command::Exec { args } => {
            Outcome::Text(client.root().run(CommandBuilder::new().args(args)).await?)
        }
        Command::Query { module, vmx } => {
            Outcome::Json(client.module(module.as_str()).query(vmx).await?)
        }
        Command::Power { action } => dispatch_power(client, action).await?,
        Command::Snapshot { action } => dispatch_snapshot(client, action).await?,
        Command::ConfigParams { action } => {
            let params = client.config_params();
            match action {
                ConfigParamsAction::Query { vmx } => Outcome::Json(params.query(vmx).await?),
                ConfigParamsAction::SetEntry { vmx, name, value } => {
                    params.set_entry(vmx, &name, &value).await?;
                    Outcome::Done
                }
            }
        }
        Command::Chipset { action } => {
            let chipset = client.chipset();
            match action {
                ChipsetAction::Query { vmx } => Outcome::Json(chipset.query(vmx).await?),
                ChipsetAction::SetVcpuCount { vmx, count } => {
                    chipset.set_vcpu_count(vmx, count).await?;
                    Outcome::Done
                }
                ChipsetAction::SetMemSize { vmx, size_mb } => {
                    chipset.set_mem_size(vmx, size_mb).await?;
                    Outcome::Done
                }
            }
        }
        Command::Vm {
            action: VmAction::Create { dir, name, guest_os },
        } => {
            let vmx = client.vm().create(dir, &name, guest_os.as_deref()).await?;
            Outcome::Paths(vec![vmx])
        }
        Command::Disk { action } => {
            let disk = client.disk();
            match action {
                DiskAction::Query { vmx } => Outcome::Json(disk.query(vmx).await?),
                DiskAction::Create {
                    file,
                    adapter,
                    size,
                    disk_type,
                } => Outcome::Paths(disk.create(file, adapter, &size, disk_type).await?),
            }
        }
        Command::Tools {
            action: ToolsAction::Query { vmx },
        } => Outcome::Json(client.tools().query(vmx).await?),
        Command::Template {
            action: TemplateAction::Deploy { vmtx },
        } => {
            client.template().deploy(vmtx).await?;
            Outcome::Done
        }
    };

    Ok(outcome)
}

async fn dispatch_power(client: &VmcliClient, action: PowerAction) -> errors::Result<Outcome> {
    let power = client.power();
    match action {
        PowerAction::Query { vmx } => return Ok(Outcome::Json(power.query(vmx).await?)),
        PowerAction::Start { vmx, paused, soft } => power.start(vmx, paused, soft).await?,
        PowerAction::Stop {
            vmx,
            op,
            for_revert,
            snapshot_id,
        } => power.stop(vmx, op, for_revert, snapshot_id).await?,
        PowerAction::Pause { vmx } => power.pause(vmx).await?,
        PowerAction::Unpause { vmx } => power.unpause(vmx).await?,
        PowerAction::Reset { vmx, op } => power.reset(vmx, op).await?,
        PowerAction::Suspend { vmx, op } => power.suspend(vmx, op).await?,
    }
    Ok(Outcome::Done)
}

async fn dispatch_snapshot(
    client: &VmcliClient,
    action: SnapshotAction,
) -> errors::Result<Outcome> {
    let snapshot = client.snapshot();
    match action {
        SnapshotAction::Query { vmx } => return Ok(Outcome::Json(snapshot.query(vmx).await?)),
        SnapshotAction::Take {
            vmx,
            name,
            native,
            memory,
            description,
        } => {
            snapshot
                .take(vmx, native, memory, description.as_deref(), &name)
                .await?
        }
        SnapshotAction::Revert { vmx, uid, native } => snapshot.revert(vmx, native, &uid).await?,
        SnapshotAction::Delete { vmx, uid, children } => {
            snapshot.delete(vmx, children, &uid).await?
        }
    }
    Ok(Outcome::Done)
}

fn print_outcome(outcome: Outcome) -> Result<()> {
    match outcome {
        Outcome::Text(text) => print!("{text}"),
        Outcome::Json(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Outcome::Paths(paths) => {
            for path in paths {
                println!("{}", path.display());
            }
        }
        Outcome::Done => {}
    }
    Ok(())
}
