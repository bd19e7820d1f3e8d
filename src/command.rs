// src/command.rs

//! Ordered argument-vector builder shared by the module wrappers.
//!
//! vmcli invocations have the shape
//! `[<target.vmx>] <Module> <Operation> [operation args...] [--format json]`;
//! the builder only preserves order, it does not know the tool's grammar.

use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandBuilder {
    args: Vec<String>,
}

impl CommandBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The virtual machine configuration file the tool operates on.
    pub fn target(self, vmx: impl AsRef<Path>) -> Self {
        let vmx = vmx.as_ref().to_string_lossy().into_owned();
        self.arg(vmx)
    }

    /// Module token, e.g. `Power`.
    pub fn module(self, name: &str) -> Self {
        self.arg(name)
    }

    /// Operation token, e.g. `Start`.
    pub fn op(self, name: &str) -> Self {
        self.arg(name)
    }

    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn args<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(values.into_iter().map(Into::into));
        self
    }

    /// Append `name` only when `enabled`.
    pub fn flag(self, name: &str, enabled: bool) -> Self {
        if enabled { self.arg(name) } else { self }
    }

    /// Append `name value` when a non-empty value is present.
    pub fn option<V: Into<String>>(self, name: &str, value: Option<V>) -> Self {
        match value.map(Into::into) {
            Some(v) if !v.is_empty() => self.arg(name).arg(v),
            _ => self,
        }
    }

    /// Request JSON output (`--format json`).
    pub fn json(self) -> Self {
        self.arg("--format").arg("json")
    }

    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    pub fn build(self) -> Vec<String> {
        self.args
    }
}

impl From<CommandBuilder> for Vec<String> {
    fn from(builder: CommandBuilder) -> Self {
        builder.build()
    }
}
