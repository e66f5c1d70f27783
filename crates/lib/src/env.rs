//! Environment handed to every external command.
//!
//! The process environment is never mutated. Changes are recorded in a [`BuildEnv`]
//! and applied on top of the inherited environment of each child process.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::consts::{JAVA_OPTS_VALUE, vars};
use crate::error::BuildError;
use crate::platform::Os;

#[cfg(windows)]
const PATH_SEPARATOR: char = ';';
#[cfg(not(windows))]
const PATH_SEPARATOR: char = ':';

/// Environment variables seen by child processes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildEnv {
  vars: BTreeMap<String, String>,
}

impl BuildEnv {
  /// Snapshot the current process environment.
  ///
  /// Variables that are not valid UTF-8 are left out of the snapshot but still reach
  /// children, which inherit the full process environment.
  pub fn from_process() -> Self {
    Self::from_vars(
      std::env::vars_os().filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?))),
    )
  }

  pub fn from_vars<I, K, V>(vars: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    Self {
      vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
    }
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self.vars.get(key).map(String::as_str)
  }

  pub fn contains(&self, key: &str) -> bool {
    self.vars.contains_key(key)
  }

  pub fn set(&mut self, key: &str, value: impl Into<String>) {
    let value = value.into();
    debug!(key, value = %value, "setting environment variable");
    self.vars.insert(key.to_string(), value);
  }

  /// Whether a debug deployment build was requested.
  pub fn is_debug_build(&self) -> bool {
    self.contains(vars::BUILD_DEBUG)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  /// Prepare the environment for the Cappuccino toolchain.
  ///
  /// Creates `build_dir` if needed, then sets the JVM heap limit, the build directory,
  /// disables sudo prompts and puts `<install_dir>/bin` first on `PATH`. A Narwhal
  /// engine is chosen for `os` unless one is already set.
  pub fn initialize(&mut self, install_dir: &Path, build_dir: &Path, os: Os) -> Result<(), BuildError> {
    std::fs::create_dir_all(build_dir).map_err(|source| BuildError::CreateBuildDir {
      path: build_dir.to_path_buf(),
      source,
    })?;

    self.set(vars::JAVA_OPTS, JAVA_OPTS_VALUE);
    self.set(vars::CAPP_BUILD, build_dir.display().to_string());
    self.set(vars::CAPP_NOSUDO, "1");

    let bin_dir = install_dir.join("bin").display().to_string();
    let path = match self.get(vars::PATH) {
      Some(existing) if !existing.is_empty() => format!("{}{}{}", bin_dir, PATH_SEPARATOR, existing),
      _ => bin_dir,
    };
    self.set(vars::PATH, path);

    if !self.contains(vars::NARWHAL_ENGINE) {
      let engine = os.default_script_engine();
      debug!(%os, engine, "choosing default narwhal engine");
      self.set(vars::NARWHAL_ENGINE, engine);
    }

    Ok(())
  }
}
