//! Execution context threaded through every action.
//!
//! A [`Session`] owns the shell, the child environment and the working directory.
//! Nothing here touches the process-wide current directory: commands receive the
//! session's directory explicitly, and [`Session::enter`] hands out a guard that
//! restores the previous directory when dropped, on the error path as well.

use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::env::BuildEnv;
use crate::error::BuildError;
use crate::runner::{self, CommandError, Shell};

pub struct Session {
  shell: Box<dyn Shell>,
  env: BuildEnv,
  root: PathBuf,
  cwd: PathBuf,
}

impl Session {
  /// Create a session rooted at the project directory `root`.
  pub fn new(shell: Box<dyn Shell>, env: BuildEnv, root: PathBuf) -> Self {
    Self {
      shell,
      env,
      cwd: root.clone(),
      root,
    }
  }

  /// Project root the session started in.
  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Directory commands currently run in.
  pub fn cwd(&self) -> &Path {
    &self.cwd
  }

  pub fn env(&self) -> &BuildEnv {
    &self.env
  }

  pub fn env_mut(&mut self) -> &mut BuildEnv {
    &mut self.env
  }

  /// Run `cmd`, requiring exit status 0.
  pub fn run(&self, cmd: &str) -> Result<i32, CommandError> {
    self.run_with(cmd, None, 0)
  }

  /// Run `cmd` with an optional title, requiring exit status `expected`.
  pub fn run_with(&self, cmd: &str, title: Option<&str>, expected: i32) -> Result<i32, CommandError> {
    runner::run_checked(self.shell.as_ref(), cmd, title, expected, &self.cwd, &self.env)
  }

  /// Run `cmd` and return its trimmed stdout without checking the exit status.
  pub fn capture(&self, cmd: &str) -> Result<String, CommandError> {
    self
      .shell
      .capture(cmd, &self.cwd, &self.env)
      .map_err(|source| CommandError::Spawn {
        cmd: cmd.to_string(),
        cwd: self.cwd.clone(),
        source,
      })
  }

  /// Change into `dir` (relative to the current directory) until the guard is dropped.
  pub fn enter(&mut self, dir: impl AsRef<Path>) -> Result<DirScope<'_>, BuildError> {
    let target = self.cwd.join(dir.as_ref());
    if !target.is_dir() {
      return Err(BuildError::MissingDirectory(target));
    }

    debug!(from = %self.cwd.display(), to = %target.display(), "entering directory");
    let previous = std::mem::replace(&mut self.cwd, target);
    Ok(DirScope {
      session: self,
      previous,
    })
  }
}

/// Guard returned by [`Session::enter`].
pub struct DirScope<'a> {
  session: &'a mut Session,
  previous: PathBuf,
}

impl Deref for DirScope<'_> {
  type Target = Session;

  fn deref(&self) -> &Session {
    self.session
  }
}

impl DerefMut for DirScope<'_> {
  fn deref_mut(&mut self) -> &mut Session {
    self.session
  }
}

impl Drop for DirScope<'_> {
  fn drop(&mut self) {
    debug!(to = %self.previous.display(), "leaving directory");
    std::mem::swap(&mut self.session.cwd, &mut self.previous);
  }
}
