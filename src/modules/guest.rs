// src/modules/guest.rs

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::command::CommandBuilder;
use crate::errors::Result;
use crate::exec::VmcliExecutor;
use crate::modules::ModuleClient;

/// Guest account used for in-guest operations (`-u` / `-p`).
#[derive(Clone, PartialEq, Eq)]
pub struct GuestCredentials {
    pub username: String,
    pub password: String,
}

impl GuestCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for GuestCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuestCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Paging and filtering for [`Guest::ls`].
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub regexp: Option<String>,
    pub index: Option<u32>,
    pub max: Option<u32>,
    pub seen: Option<u32>,
}

/// How [`Guest::run`] launches a program.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub activate_window: bool,
    pub no_wait: bool,
    pub interactive: bool,
    pub working_directory: Option<String>,
    pub environment: Option<String>,
}

/// `Guest` module: file and process operations inside a running guest.
///
/// Everything except [`Guest::query`] and [`Guest::tools_properties`] needs
/// guest credentials; they follow the operation token.
#[derive(Debug, Clone)]
pub struct Guest {
    client: ModuleClient,
}

impl Guest {
    pub const NAME: &'static str = "Guest";

    pub fn new(executor: Arc<dyn VmcliExecutor>) -> Self {
        Self {
            client: ModuleClient::new(Self::NAME, executor),
        }
    }

    pub fn client(&self) -> &ModuleClient {
        &self.client
    }

    /// `Guest Query --format json`; this module spells the operation with a
    /// capital Q.
    pub async fn query(&self, vmx: impl AsRef<Path>) -> Result<Value> {
        self.client
            .query_json(self.client.on(vmx, "Query").json())
            .await
    }

    pub async fn copy_from(
        &self,
        vmx: impl AsRef<Path>,
        creds: &GuestCredentials,
        overwrite: bool,
        from: &str,
        to: &str,
    ) -> Result<()> {
        self.transfer(vmx, "copyFrom", creds, overwrite, from, to)
            .await
    }

    pub async fn copy_to(
        &self,
        vmx: impl AsRef<Path>,
        creds: &GuestCredentials,
        overwrite: bool,
        from: &str,
        to: &str,
    ) -> Result<()> {
        self.transfer(vmx, "copyTo", creds, overwrite, from, to).await
    }

    pub async fn create_temp_dir(
        &self,
        vmx: impl AsRef<Path>,
        creds: &GuestCredentials,
        prefix: &str,
        suffix: &str,
        directory: &str,
    ) -> Result<String> {
        let cmd = self
            .authed(vmx, "createTempDir", creds)
            .args([prefix, suffix, directory]);
        self.client.run(cmd).await
    }

    pub async fn create_temp_file(
        &self,
        vmx: impl AsRef<Path>,
        creds: &GuestCredentials,
        prefix: &str,
        suffix: &str,
        directory: &str,
    ) -> Result<String> {
        let cmd = self
            .authed(vmx, "createTempFile", creds)
            .args([prefix, suffix, directory]);
        self.client.run(cmd).await
    }

    /// The guest environment as printed by the tool.
    pub async fn env(&self, vmx: impl AsRef<Path>, creds: &GuestCredentials) -> Result<String> {
        self.client.run(self.authed(vmx, "env", creds)).await
    }

    pub async fn kill(
        &self,
        vmx: impl AsRef<Path>,
        creds: &GuestCredentials,
        pid: u32,
    ) -> Result<()> {
        self.client
            .run(self.authed(vmx, "kill", creds).arg(pid.to_string()))
            .await?;
        Ok(())
    }

    /// List a guest directory; returns the tool's listing text.
    pub async fn ls(
        &self,
        vmx: impl AsRef<Path>,
        creds: &GuestCredentials,
        path: &str,
        options: &ListOptions,
    ) -> Result<String> {
        let cmd = self
            .authed(vmx, "ls", creds)
            .option("-r", options.regexp.as_deref())
            .option("-i", options.index.map(|v| v.to_string()))
            .option("-m", options.max.map(|v| v.to_string()))
            .option("-s", options.seen.map(|v| v.to_string()))
            .arg(path);
        self.client.run(cmd).await
    }

    pub async fn mkdir(
        &self,
        vmx: impl AsRef<Path>,
        creds: &GuestCredentials,
        parents: bool,
        path: &str,
    ) -> Result<()> {
        let cmd = self
            .authed(vmx, "mkdir", creds)
            .flag("--parent", parents)
            .arg(path);
        self.client.run(cmd).await?;
        Ok(())
    }

    pub async fn mv(
        &self,
        vmx: impl AsRef<Path>,
        creds: &GuestCredentials,
        overwrite: bool,
        from: &str,
        to: &str,
    ) -> Result<()> {
        self.transfer(vmx, "mv", creds, overwrite, from, to).await
    }

    pub async fn mv_dir(
        &self,
        vmx: impl AsRef<Path>,
        creds: &GuestCredentials,
        overwrite: bool,
        from: &str,
        to: &str,
    ) -> Result<()> {
        self.transfer(vmx, "mvdir", creds, overwrite, from, to).await
    }

    /// Guest processes as JSON, optionally narrowed to one pid.
    pub async fn ps(
        &self,
        vmx: impl AsRef<Path>,
        creds: &GuestCredentials,
        pid: Option<u32>,
    ) -> Result<Value> {
        let cmd = self
            .authed(vmx, "ps", creds)
            .option("--pid", pid.map(|p| p.to_string()))
            .json();
        self.client.query_json(cmd).await
    }

    pub async fn rm(
        &self,
        vmx: impl AsRef<Path>,
        creds: &GuestCredentials,
        path: &str,
    ) -> Result<()> {
        self.client
            .run(self.authed(vmx, "rm", creds).arg(path))
            .await?;
        Ok(())
    }

    pub async fn rmdir(
        &self,
        vmx: impl AsRef<Path>,
        creds: &GuestCredentials,
        recursive: bool,
        path: &str,
    ) -> Result<()> {
        let cmd = self
            .authed(vmx, "rmdir", creds)
            .flag("-r", recursive)
            .arg(path);
        self.client.run(cmd).await?;
        Ok(())
    }

    /// Start `program` in the guest. `program_args` is passed as a single
    /// token, the tool splits it.
    pub async fn run(
        &self,
        vmx: impl AsRef<Path>,
        creds: &GuestCredentials,
        program: &str,
        program_args: Option<&str>,
        options: &RunOptions,
    ) -> Result<String> {
        let cmd = self
            .authed(vmx, "run", creds)
            .flag("-aw", options.activate_window)
            .flag("-nw", options.no_wait)
            .flag("-i", options.interactive)
            .option("-w", options.working_directory.as_deref())
            .option("-e", options.environment.as_deref())
            .arg(program);
        let cmd = match program_args {
            Some(args) if !args.trim().is_empty() => cmd.arg(args),
            _ => cmd,
        };
        self.client.run(cmd).await
    }

    pub async fn tools_properties(&self, vmx: impl AsRef<Path>) -> Result<String> {
        self.client
            .run(self.client.on(vmx, "toolsproperties"))
            .await
    }

    fn authed(
        &self,
        vmx: impl AsRef<Path>,
        operation: &str,
        creds: &GuestCredentials,
    ) -> CommandBuilder {
        self.client
            .on(vmx, operation)
            .arg("-u")
            .arg(creds.username.as_str())
            .arg("-p")
            .arg(creds.password.as_str())
    }

    async fn transfer(
        &self,
        vmx: impl AsRef<Path>,
        operation: &str,
        creds: &GuestCredentials,
        overwrite: bool,
        from: &str,
        to: &str,
    ) -> Result<()> {
        let cmd = self
            .authed(vmx, operation, creds)
            .flag("-o", overwrite)
            .args([from, to]);
        self.client.run(cmd).await?;
        Ok(())
    }
}
