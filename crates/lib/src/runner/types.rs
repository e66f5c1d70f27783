use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessExit {
  Code(i32),
  /// Terminated by a signal, so there is no exit code.
  Signal,
}

impl ProcessExit {
  pub fn from_code(code: Option<i32>) -> Self {
    code.map_or(Self::Signal, Self::Code)
  }
}

impl fmt::Display for ProcessExit {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Code(code) => write!(f, "{}", code),
      Self::Signal => write!(f, "signal"),
    }
  }
}

/// Errors from running an external command.
#[derive(Debug, Error)]
pub enum CommandError {
  /// The command ran but did not end with the expected status.
  #[error("command `{cmd}` expected to return {expected} (was {actual})")]
  UnexpectedExit {
    cmd: String,
    expected: i32,
    actual: ProcessExit,
  },

  /// The shell itself could not be started.
  #[error("failed to spawn `{cmd}` in {cwd}: {source}")]
  Spawn {
    cmd: String,
    cwd: PathBuf,
    #[source]
    source: std::io::Error,
  },
}
