// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`collector`] accumulates the lines of one child stream.
//! - [`runner`] owns one child process and the tasks draining its streams.
//! - [`gateway`] is the single entry point that runs vmcli and maps its exit
//!   code to text or a typed error.
//! - [`backend`] provides the `VmcliExecutor` trait the module wrappers use,
//!   so tests can swap in a fake.

pub mod backend;
pub mod collector;
pub mod gateway;
pub mod runner;

pub use backend::{ExecuteFuture, VmcliExecutor};
pub use collector::{OutputCollector, LINE_ENDING};
pub use gateway::{cancellable, ProcessExecutionResult, Vmcli};
pub use runner::{LineCallback, LineFuture, ProcessRunner, RunnerOptions};
