// src/main.rs

use vmcli_wrapper::errors::VmcliError;
use vmcli_wrapper::{cli, logging, run};

#[tokio::main]
async fn main() {
    if let Err(err) = run_main().await {
        eprintln!("vmcli-wrapper error: {err:#}");
        std::process::exit(exit_code_for(&err));
    }
}

async fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}

/// A failed vmcli call passes its exit code through; anything else is 1.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<VmcliError>()
        .and_then(VmcliError::command_failed)
        .map(|failed| failed.exit_code())
        .filter(|code| *code != 0)
        .unwrap_or(1)
}
