//! Test utilities for nukit-lib.
//!
//! [`RecordingShell`] stands in for the real shell: it records every command with the
//! directory and environment it would have run with, and answers with scripted
//! exit codes and captured output.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::env::BuildEnv;
use crate::runner::{ProcessExit, Shell};

/// One recorded command.
#[derive(Debug, Clone)]
pub struct Invocation {
  pub cmd: String,
  pub cwd: PathBuf,
  pub env: BuildEnv,
}

#[derive(Default)]
struct State {
  calls: Vec<Invocation>,
  exits: HashMap<String, i32>,
  outputs: HashMap<String, String>,
}

/// Fake shell shared between a session and the test inspecting it.
#[derive(Clone, Default)]
pub struct RecordingShell {
  state: Rc<RefCell<State>>,
}

impl RecordingShell {
  pub fn new() -> Self {
    Self::default()
  }

  /// Make `cmd` exit with `code` instead of 0.
  pub fn fail_on(self, cmd: &str, code: i32) -> Self {
    self.state.borrow_mut().exits.insert(cmd.to_string(), code);
    self
  }

  /// Make `capture(cmd)` return `output`.
  pub fn with_output(self, cmd: &str, output: &str) -> Self {
    self.state.borrow_mut().outputs.insert(cmd.to_string(), output.to_string());
    self
  }

  pub fn invocations(&self) -> Vec<Invocation> {
    self.state.borrow().calls.clone()
  }

  pub fn commands(&self) -> Vec<String> {
    self.state.borrow().calls.iter().map(|c| c.cmd.clone()).collect()
  }

  fn record(&self, cmd: &str, cwd: &Path, env: &BuildEnv) {
    self.state.borrow_mut().calls.push(Invocation {
      cmd: cmd.to_string(),
      cwd: cwd.to_path_buf(),
      env: env.clone(),
    });
  }
}

impl Shell for RecordingShell {
  fn status(&self, cmd: &str, cwd: &Path, env: &BuildEnv) -> std::io::Result<ProcessExit> {
    self.record(cmd, cwd, env);
    let code = self.state.borrow().exits.get(cmd).copied().unwrap_or(0);
    Ok(ProcessExit::Code(code))
  }

  fn capture(&self, cmd: &str, cwd: &Path, env: &BuildEnv) -> std::io::Result<String> {
    self.record(cmd, cwd, env);
    Ok(self.state.borrow().outputs.get(cmd).cloned().unwrap_or_default())
  }
}
