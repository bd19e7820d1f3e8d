// src/exec/gateway.rs

//! The single place that turns an argument vector into a vmcli process and
//! its result into text or a [`CommandFailed`] error.

use std::future::Future;

use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::errors::{CommandFailed, Result, VmcliError};
use crate::exec::collector::OutputCollector;
use crate::exec::runner::{ProcessRunner, RunnerOptions};
use crate::locator::VmcliLocator;

/// Everything captured from one vmcli process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessExecutionResult {
    pub output: String,
    pub error: String,
    pub exit_code: i32,
}

/// Executes vmcli. Every call spawns a fresh child process; nothing is shared
/// between invocations, so concurrent calls are independent.
#[derive(Debug, Clone, Default)]
pub struct Vmcli {
    locator: VmcliLocator,
    options: RunnerOptions,
}

impl Vmcli {
    pub fn new(locator: VmcliLocator, options: RunnerOptions) -> Self {
        Self { locator, options }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(VmcliLocator::new(settings), settings.runner_options())
    }

    pub fn locator(&self) -> &VmcliLocator {
        &self.locator
    }

    pub fn options(&self) -> RunnerOptions {
        self.options
    }

    /// Run vmcli with `arguments` and return its stdout.
    ///
    /// Text on stderr is logged as a warning but only a non-zero exit code
    /// makes this fail, with [`VmcliError::CommandFailed`].
    pub async fn execute<I, S>(&self, arguments: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let arguments: Vec<String> = arguments.into_iter().map(Into::into).collect();
        let result = self.run(&arguments).await?;

        if !result.error.trim().is_empty() {
            warn!(
                args = ?arguments,
                exit_code = result.exit_code,
                "vmcli stderr: {}",
                result.error.trim_end()
            );
        }

        if result.exit_code != 0 {
            return Err(CommandFailed::new(
                result.exit_code,
                arguments,
                result.output,
                result.error,
            )
            .into());
        }

        Ok(result.output)
    }

    /// Like [`execute`](Self::execute), but gives up with
    /// [`VmcliError::Cancelled`] once `cancel` fires.
    ///
    /// A cancel sender dropped without sending does not cancel. The child is
    /// left running unless `kill_on_drop` is enabled in the options.
    pub async fn execute_with_cancel<I, S>(
        &self,
        arguments: I,
        cancel: oneshot::Receiver<()>,
    ) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        cancellable(self.execute(arguments), cancel).await
    }

    /// Spawn vmcli, collect both streams and the exit code.
    ///
    /// Fails with [`VmcliError::NotConfigured`] before anything is spawned
    /// when no executable can be located.
    pub async fn run(&self, arguments: &[String]) -> Result<ProcessExecutionResult> {
        let program = self.locator.locate()?;

        let mut output = OutputCollector::new();
        let mut error = OutputCollector::new();

        debug!(program = %program.display(), args = ?arguments, "starting vmcli");

        let mut runner = ProcessRunner::spawn(
            &program,
            arguments,
            Some(output.receiver()),
            Some(error.receiver()),
            self.options,
        )?;

        // vmcli is never fed input; EOF keeps a prompting child from hanging.
        runner.close_input();

        let exit_code = runner.wait_for_exit().await?;

        Ok(ProcessExecutionResult {
            output: output.finalize(),
            error: error.finalize(),
            exit_code,
        })
    }
}

/// Drive `work` until it finishes or `cancel` fires.
///
/// On cancellation `work` is dropped and [`VmcliError::Cancelled`] returned.
/// A cancel sender dropped without sending does not cancel.
pub async fn cancellable<T, F>(work: F, cancel: oneshot::Receiver<()>) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::pin!(work);

    let cancelled = tokio::select! {
        result = &mut work => return result,
        signal = cancel => signal.is_ok(),
    };

    if cancelled {
        info!("cancellation requested; abandoning vmcli invocation");
        return Err(VmcliError::Cancelled);
    }

    debug!("cancel sender dropped without signalling; waiting for completion");
    work.await
}
