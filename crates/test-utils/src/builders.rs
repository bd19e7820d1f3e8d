#![allow(dead_code)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use vmcli_wrapper::exec::{RunnerOptions, Vmcli};
use vmcli_wrapper::locator::VmcliLocator;

/// Builder for a POSIX `sh` script standing in for vmcli.
///
/// The script writes, in this order: its arguments (one per line) when
/// `echo_args` is set, the fixed stdout lines, `numbered_lines` generated
/// lines, the stderr lines, then sleeps and exits with `exit_code`.
#[derive(Debug, Clone, Default)]
pub struct StubVmcliBuilder {
    stdout: Vec<String>,
    stderr: Vec<String>,
    numbered_lines: usize,
    echo_args: bool,
    sleep_secs: Option<u32>,
    exit_code: i32,
    raw_body: Option<String>,
}

/// A stub executable living in its own temporary directory.
pub struct StubVmcli {
    dir: TempDir,
    path: PathBuf,
}

impl StubVmcli {
    pub fn builder() -> StubVmcliBuilder {
        StubVmcliBuilder::default()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Gateway pointed at this stub with default options.
    pub fn vmcli(&self) -> Vmcli {
        self.vmcli_with(RunnerOptions::default())
    }

    pub fn vmcli_with(&self, options: RunnerOptions) -> Vmcli {
        Vmcli::new(VmcliLocator::with_path(self.path.clone()), options)
    }
}

impl StubVmcliBuilder {
    pub fn stdout_line(mut self, line: &str) -> Self {
        self.stdout.push(line.to_string());
        self
    }

    pub fn stderr_line(mut self, line: &str) -> Self {
        self.stderr.push(line.to_string());
        self
    }

    /// Emit `count` lines `line 0` .. `line {count - 1}` on stdout.
    pub fn numbered_lines(mut self, count: usize) -> Self {
        self.numbered_lines = count;
        self
    }

    pub fn echo_args(mut self) -> Self {
        self.echo_args = true;
        self
    }

    pub fn sleep(mut self, secs: u32) -> Self {
        self.sleep_secs = Some(secs);
        self
    }

    pub fn exit_code(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }

    /// Replace the generated body with a hand-written script body.
    pub fn script(mut self, body: &str) -> Self {
        self.raw_body = Some(body.to_string());
        self
    }

    pub fn render(&self) -> String {
        let mut script = String::from("#!/bin/sh\n");

        if let Some(body) = &self.raw_body {
            script.push_str(body);
            script.push('\n');
            return script;
        }

        if self.echo_args {
            script.push_str("for arg in \"$@\"; do printf '%s\\n' \"$arg\"; done\n");
        }
        for line in &self.stdout {
            let _ = writeln!(script, "printf '%s\\n' {}", sh_quote(line));
        }
        if self.numbered_lines > 0 {
            let _ = writeln!(
                script,
                "i=0\nwhile [ \"$i\" -lt {} ]; do echo \"line $i\"; i=$((i + 1)); done",
                self.numbered_lines
            );
        }
        for line in &self.stderr {
            let _ = writeln!(script, "printf '%s\\n' {} >&2", sh_quote(line));
        }
        if let Some(secs) = self.sleep_secs {
            let _ = writeln!(script, "sleep {secs}");
        }
        let _ = writeln!(script, "exit {}", self.exit_code);
        script
    }

    /// Write the script as an executable file named `vmcli`.
    #[cfg(unix)]
    pub fn build(self) -> StubVmcli {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("create stub dir");
        let path = dir.path().join("vmcli");
        std::fs::write(&path, self.render()).expect("write stub script");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("make stub executable");

        StubVmcli { dir, path }
    }
}

fn sh_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_quotes_single_quotes() {
        let script = StubVmcli::builder().stdout_line("it's").render();
        assert!(script.contains(r"printf '%s\n' 'it'\''s'"));
    }

    #[test]
    fn render_ends_with_exit_code() {
        let script = StubVmcli::builder().exit_code(3).render();
        assert!(script.trim_end().ends_with("exit 3"));
    }
}
