// src/exec/backend.rs

//! Pluggable executor abstraction.
//!
//! Module wrappers talk to a `VmcliExecutor` instead of a concrete [`Vmcli`].
//! Production code hands them a `Vmcli`; tests can provide an executor that
//! records argument vectors and returns canned output without spawning
//! anything.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;

use super::gateway::Vmcli;

/// Boxed future returned by [`VmcliExecutor::execute`].
pub type ExecuteFuture<'a> = Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;

/// Runs one vmcli invocation and returns its stdout.
pub trait VmcliExecutor: Send + Sync {
    fn execute(&self, arguments: Vec<String>) -> ExecuteFuture<'_>;
}

impl VmcliExecutor for Vmcli {
    fn execute(&self, arguments: Vec<String>) -> ExecuteFuture<'_> {
        Box::pin(Vmcli::execute(self, arguments))
    }
}
