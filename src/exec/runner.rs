// src/exec/runner.rs

//! One child process and the tasks draining its output streams.
//!
//! The child is started as soon as the runner is created. Standard input is
//! always piped so lines can be sent later; stdout and stderr are piped only
//! when a callback is supplied for them and inherited otherwise.
//!
//! Every piped stream gets its own Tokio task that reads it line by line
//! until end-of-stream and awaits the callback for each line before reading
//! the next one. [`ProcessRunner::wait_for_exit`] joins both drain tasks
//! before it waits on the process, so the exit code is never reported while
//! output is still in flight.

use std::ffi::OsStr;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::process::Stdio;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, Command};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::errors::{Result, VmcliError};
use crate::exec::collector::LINE_ENDING;
use crate::types::LineDecoding;

/// Future returned by a [`LineCallback`].
pub type LineFuture = Pin<Box<dyn Future<Output = io::Result<()>> + Send>>;

/// Invoked once per line read from a child stream, without its terminator.
pub type LineCallback = Box<dyn FnMut(String) -> LineFuture + Send>;

/// Knobs applied when spawning a child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunnerOptions {
    pub stdout_decoding: LineDecoding,
    pub stderr_decoding: LineDecoding,
    /// Kill the child when the runner is dropped before it exited.
    ///
    /// Off by default: an abandoned invocation only releases its handle.
    pub kill_on_drop: bool,
}

pub struct ProcessRunner {
    program: PathBuf,
    child: Child,
    stdin: Option<ChildStdin>,
    stdout_task: Option<JoinHandle<io::Result<()>>>,
    stderr_task: Option<JoinHandle<io::Result<()>>>,
}

impl ProcessRunner {
    /// Start `program` with `args` and begin draining the streams that have
    /// a callback.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn<I, S>(
        program: impl AsRef<Path>,
        args: I,
        on_stdout: Option<LineCallback>,
        on_stderr: Option<LineCallback>,
        options: RunnerOptions,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let program = program.as_ref().to_path_buf();

        let mut cmd = Command::new(&program);
        cmd.args(args)
            .stdin(Stdio::piped())
            .stdout(piped_if(on_stdout.is_some()))
            .stderr(piped_if(on_stderr.is_some()))
            .kill_on_drop(options.kill_on_drop);

        let mut child = cmd.spawn().map_err(|source| VmcliError::ProcessStart {
            program: program.clone(),
            source,
        })?;

        debug!(program = %program.display(), pid = ?child.id(), "child process started");

        let stdin = child.stdin.take();

        let stdout_task = match (child.stdout.take(), on_stdout) {
            (Some(stdout), Some(callback)) => Some(tokio::spawn(drain_lines(
                "stdout",
                stdout,
                callback,
                options.stdout_decoding,
            ))),
            _ => None,
        };

        let stderr_task = match (child.stderr.take(), on_stderr) {
            (Some(stderr), Some(callback)) => Some(tokio::spawn(drain_lines(
                "stderr",
                stderr,
                callback,
                options.stderr_decoding,
            ))),
            _ => None,
        };

        Ok(Self {
            program,
            child,
            stdin,
            stdout_task,
            stderr_task,
        })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// OS process id, `None` once the child has been reaped.
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Best-effort snapshot of whether the OS process is still alive.
    ///
    /// Not synchronised with the drain tasks.
    pub fn is_running(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }

    /// Write `input` plus a line terminator to the child's stdin and flush.
    ///
    /// Does nothing when stdin has been closed, either by
    /// [`close_input`](Self::close_input) or because the child stopped
    /// reading it.
    pub async fn send_input(&mut self, input: &str) -> Result<()> {
        let Some(stdin) = self.stdin.as_mut() else {
            return Ok(());
        };

        let mut line = String::with_capacity(input.len() + LINE_ENDING.len());
        line.push_str(input);
        line.push_str(LINE_ENDING);

        let written = write_line(stdin, &line).await;
        match written {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                debug!(program = %self.program.display(), "stdin no longer writable; dropping input");
                self.stdin = None;
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Close the child's stdin so it observes end-of-file.
    pub fn close_input(&mut self) {
        self.stdin = None;
    }

    /// Wait for the stdout drain, then the stderr drain, then the process
    /// itself, and return the exit code.
    ///
    /// A process killed by a signal reports `-1`. An error raised by a line
    /// callback or by reading a stream is returned here, after both drains
    /// have finished and the child has been killed and reaped; the first
    /// such error wins.
    pub async fn wait_for_exit(&mut self) -> Result<i32> {
        let mut failure = None;

        for (stream, task) in [
            ("stdout", self.stdout_task.take()),
            ("stderr", self.stderr_task.take()),
        ] {
            let Some(task) = task else { continue };
            if let Err(err) = join_drain(stream, task).await {
                // Nobody reads this stream any more; a child blocked writing
                // to it would never exit.
                if failure.is_none() {
                    warn!(
                        program = %self.program.display(),
                        stream,
                        "drain failed; killing child"
                    );
                    let _ = self.child.start_kill();
                    failure = Some(err);
                }
            }
        }

        let status = self.child.wait().await?;
        if let Some(err) = failure {
            return Err(err);
        }

        let code = status.code().unwrap_or(-1);

        debug!(
            program = %self.program.display(),
            exit_code = code,
            success = status.success(),
            "child process exited"
        );

        Ok(code)
    }
}

impl Drop for ProcessRunner {
    fn drop(&mut self) {
        for task in [self.stdout_task.take(), self.stderr_task.take()]
            .into_iter()
            .flatten()
        {
            task.abort();
        }
    }
}

fn piped_if(redirect: bool) -> Stdio {
    if redirect {
        Stdio::piped()
    } else {
        Stdio::inherit()
    }
}

async fn write_line(stdin: &mut ChildStdin, line: &str) -> io::Result<()> {
    stdin.write_all(line.as_bytes()).await?;
    stdin.flush().await
}

async fn join_drain(stream: &'static str, task: JoinHandle<io::Result<()>>) -> Result<()> {
    match task.await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(source)) => Err(VmcliError::Drain { stream, source }),
        Err(join_err) => Err(VmcliError::Drain {
            stream,
            source: io::Error::other(join_err),
        }),
    }
}

/// Read `reader` line by line until end-of-stream, handing each line to
/// `callback` and waiting for it before reading on.
async fn drain_lines<R>(
    stream: &'static str,
    reader: R,
    mut callback: LineCallback,
    decoding: LineDecoding,
) -> io::Result<()>
where
    R: AsyncRead + Unpin + Send,
{
    let mut reader = BufReader::new(reader);
    let mut raw = Vec::new();
    let mut after_cr = false;
    let mut lines = 0usize;

    loop {
        raw.clear();
        if !read_raw_line(&mut reader, &mut raw, &mut after_cr).await? {
            break;
        }
        callback(decode_line(&raw, decoding)?).await?;
        lines += 1;
    }

    debug!(stream, lines, "drain task reached end of stream");
    Ok(())
}

/// Append the next line to `raw`, without its terminator.
///
/// `\n`, `\r\n` and a lone `\r` each end a line. `after_cr` carries a
/// trailing `\r` across calls so the `\n` of a split `\r\n` is swallowed
/// instead of producing an empty line. Returns `false` at end-of-stream when
/// nothing was read.
async fn read_raw_line<R>(
    reader: &mut R,
    raw: &mut Vec<u8>,
    after_cr: &mut bool,
) -> io::Result<bool>
where
    R: AsyncBufRead + Unpin,
{
    let mut read_any = false;

    loop {
        let buf = reader.fill_buf().await?;
        if buf.is_empty() {
            return Ok(read_any);
        }

        let start = usize::from(std::mem::take(after_cr) && buf[0] == b'\n');

        match buf[start..].iter().position(|b| matches!(b, b'\n' | b'\r')) {
            Some(offset) => {
                let end = start + offset;
                raw.extend_from_slice(&buf[start..end]);
                *after_cr = buf[end] == b'\r';
                reader.consume(end + 1);
                return Ok(true);
            }
            None => {
                let len = buf.len();
                raw.extend_from_slice(&buf[start..]);
                read_any |= len > start;
                reader.consume(len);
            }
        }
    }
}

fn decode_line(raw: &[u8], decoding: LineDecoding) -> io::Result<String> {
    match decoding {
        LineDecoding::Lossy => Ok(String::from_utf8_lossy(raw).into_owned()),
        LineDecoding::Strict => String::from_utf8(raw.to_vec())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
    }
}
