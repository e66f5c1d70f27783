//! Command runner.
//!
//! Every external tool is reached through a shell command string. [`run_checked`]
//! executes one, reports the outcome and turns an unexpected exit status into a
//! [`CommandError`] that the caller propagates to the top-level handler.

mod types;

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::env::BuildEnv;
use crate::output;

pub use types::{CommandError, ProcessExit};

/// Seam between the orchestration logic and the operating system.
pub trait Shell {
  /// Run `cmd` to completion with inherited stdio and return how it ended.
  fn status(&self, cmd: &str, cwd: &Path, env: &BuildEnv) -> std::io::Result<ProcessExit>;

  /// Run `cmd` and return its trimmed stdout. The exit status is ignored.
  fn capture(&self, cmd: &str, cwd: &Path, env: &BuildEnv) -> std::io::Result<String>;
}

/// Runs commands through the platform shell.
///
/// Children inherit the process environment, with every [`BuildEnv`] entry applied on top.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

impl SystemShell {
  pub fn new() -> Self {
    Self
  }

  fn command(&self, cmd: &str, cwd: &Path, env: &BuildEnv) -> Command {
    let (shell_cmd, shell_args) = get_shell();
    debug!(shell = %shell_cmd, cwd = ?cwd, "spawning process");

    let mut command = Command::new(shell_cmd);
    command.args(shell_args).arg(cmd).current_dir(cwd).envs(env.iter());
    command
  }
}

impl Shell for SystemShell {
  fn status(&self, cmd: &str, cwd: &Path, env: &BuildEnv) -> std::io::Result<ProcessExit> {
    let status = self
      .command(cmd, cwd, env)
      .stdin(Stdio::inherit())
      .stdout(Stdio::inherit())
      .stderr(Stdio::inherit())
      .status()?;
    Ok(ProcessExit::from_code(status.code()))
  }

  fn capture(&self, cmd: &str, cwd: &Path, env: &BuildEnv) -> std::io::Result<String> {
    let output = self.command(cmd, cwd, env).stderr(Stdio::inherit()).output()?;
    if !output.status.success() {
      debug!(cmd, code = ?output.status.code(), "captured command failed");
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }
}

/// Get the shell command and the arguments that precede the command string.
fn get_shell() -> (&'static str, &'static [&'static str]) {
  #[cfg(unix)]
  {
    ("/bin/sh", &["-c"])
  }

  #[cfg(windows)]
  {
    ("powershell.exe", &["-NoProfile", "-ExecutionPolicy", "Bypass", "-Command"])
  }
}

/// Run `cmd` in `cwd` and require it to exit with `expected`.
///
/// Prints `title` (or the command and directory) before running, then a success or
/// failure line. Returns the exit code on success.
pub fn run_checked(
  shell: &dyn Shell,
  cmd: &str,
  title: Option<&str>,
  expected: i32,
  cwd: &Path,
  env: &BuildEnv,
) -> Result<i32, CommandError> {
  match title {
    Some(title) => output::print_title(title),
    None => output::print_running(cmd, cwd),
  }
  info!(cmd, cwd = %cwd.display(), "running command");

  let actual = shell.status(cmd, cwd, env).map_err(|source| CommandError::Spawn {
    cmd: cmd.to_string(),
    cwd: cwd.to_path_buf(),
    source,
  })?;

  if actual != ProcessExit::Code(expected) {
    output::print_error(&format!("ERROR: Command expected to return {} (was {})", expected, actual));
    return Err(CommandError::UnexpectedExit {
      cmd: cmd.to_string(),
      expected,
      actual,
    });
  }

  output::print_success("SUCCESS");
  Ok(expected)
}
