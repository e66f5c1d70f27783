//! Error types for manifest loading and action execution.

use std::path::PathBuf;

use thiserror::Error;

use crate::runner::CommandError;

/// Errors raised while loading or validating the project manifest.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read manifest {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse manifest {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },

  #[error("component name must not be empty")]
  EmptyName,

  /// Names become a long flag and a directory under `Libraries/`.
  #[error("invalid component name {name:?}: must not start with '-' or contain whitespace, path separators or '..'")]
  InvalidName { name: String },

  /// Flags must be a single ASCII letter or digit.
  #[error("invalid flag {flag:?} for component {name}")]
  InvalidFlag { name: String, flag: String },

  #[error("theme {name} cannot override its build command")]
  ThemeBuildCommand { name: String },

  /// The short or long flag is already taken by a built-in option or another component.
  #[error("component {name} reuses flag {flag}")]
  FlagConflict { name: String, flag: String },
}

/// Errors that abort a build or clean run.
#[derive(Debug, Error)]
pub enum BuildError {
  /// An external command did not return the expected status.
  #[error(transparent)]
  Command(#[from] CommandError),

  /// A component directory the action needs to enter does not exist.
  #[error("directory not found: {0}")]
  MissingDirectory(PathBuf),

  #[error("failed to write {path}: {source}")]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to rename {from} to {to}: {source}")]
  Rename {
    from: PathBuf,
    to: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to create build directory {path}: {source}")]
  CreateBuildDir {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}
