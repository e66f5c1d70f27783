//! Project manifest and resolved build configuration.
//!
//! The manifest (`nukit.toml`) declares the project's own libraries and themes on top
//! of the core ones. Each of them gets a generated command-line flag, so names and
//! flags are validated against the fixed flags and each other.
//!
//! ```toml
//! war_name = "ui"
//!
//! [[libraries]]
//! name = "Widgets"
//! flag = "g"
//! build_command = "jake release"
//!
//! [[themes]]
//! name = "DarkTheme"
//! flag = "m"
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::consts::{
  DEFAULT_BUILD_DIR, DEFAULT_BUILD_VERSION, DEFAULT_INSTALL_DIR, DEFAULT_LOCAL_DISTRIB, DEFAULT_REPORTS_ARCHIVE,
  DEFAULT_WAR_NAME, MANIFEST_FILE, RESERVED_LONG_FLAGS, RESERVED_SHORT_FLAGS, vars,
};
use crate::dispatch::Options;
use crate::env::BuildEnv;
use crate::error::ConfigError;
use crate::platform::paths::expand_home;

/// A library or theme living under `Libraries/<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Component {
  pub name: String,
  /// Short command-line flag selecting this component.
  pub flag: char,
  /// Replaces `jake release; jake debug` for libraries.
  #[serde(default)]
  pub build_command: Option<String>,
}

impl Component {
  pub fn new(name: impl Into<String>, flag: char) -> Self {
    Self {
      name: name.into(),
      flag,
      build_command: None,
    }
  }

  /// Long command-line flag, the lowercased name.
  pub fn long_flag(&self) -> String {
    self.name.to_lowercase()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectManifest {
  pub libraries: Vec<Component>,
  pub themes: Vec<Component>,
  /// Base name of the generated `.war` file.
  pub war_name: String,
  /// Pre-bootstrapped Cappuccino archive used instead of downloading one.
  pub local_distrib: PathBuf,
  /// Report bundle unpacked into the web application before packaging.
  pub reports_archive: PathBuf,
}

impl Default for ProjectManifest {
  fn default() -> Self {
    Self {
      libraries: Vec::new(),
      themes: Vec::new(),
      war_name: DEFAULT_WAR_NAME.to_string(),
      local_distrib: PathBuf::from(DEFAULT_LOCAL_DISTRIB),
      reports_archive: PathBuf::from(DEFAULT_REPORTS_ARCHIVE),
    }
  }
}

impl ProjectManifest {
  /// Load and validate the manifest at `path`.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    Self::parse(&content, path)
  }

  /// Like [`ProjectManifest::load`], but a missing file yields the default manifest.
  pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
    if !path.exists() {
      debug!(path = %path.display(), "no project manifest, using defaults");
      return Ok(Self::default());
    }
    Self::load(path)
  }

  /// Parse manifest text; `path` is only used in error messages.
  pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
    let manifest: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })?;
    manifest.validate()?;
    Ok(manifest)
  }

  /// Libraries and themes, in declaration order.
  pub fn components(&self) -> impl Iterator<Item = &Component> {
    self.libraries.iter().chain(self.themes.iter())
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    let mut shorts: HashSet<char> = RESERVED_SHORT_FLAGS.iter().copied().collect();
    let mut longs: HashSet<String> = RESERVED_LONG_FLAGS.iter().map(|s| s.to_string()).collect();

    for theme in &self.themes {
      if theme.build_command.is_some() {
        return Err(ConfigError::ThemeBuildCommand {
          name: theme.name.clone(),
        });
      }
    }

    for component in self.components() {
      if component.name.trim().is_empty() {
        return Err(ConfigError::EmptyName);
      }
      if !is_valid_name(&component.name) {
        return Err(ConfigError::InvalidName {
          name: component.name.clone(),
        });
      }
      if !component.flag.is_ascii_alphanumeric() {
        return Err(ConfigError::InvalidFlag {
          name: component.name.clone(),
          flag: component.flag.to_string(),
        });
      }
      if !shorts.insert(component.flag) {
        return Err(ConfigError::FlagConflict {
          name: component.name.clone(),
          flag: format!("-{}", component.flag),
        });
      }
      let long = component.long_flag();
      if !longs.insert(long.clone()) {
        return Err(ConfigError::FlagConflict {
          name: component.name.clone(),
          flag: format!("--{}", long),
        });
      }
    }

    Ok(())
  }
}

/// A name must work both as `--<name>` and as a single directory under `Libraries/`.
fn is_valid_name(name: &str) -> bool {
  !name.starts_with('-')
    && !name.contains("..")
    && !name.contains(['/', '\\'])
    && !name.chars().any(char::is_whitespace)
}

/// Manifest location: `$NUKIT_MANIFEST` if set, otherwise `nukit.toml` in `cwd`.
pub fn manifest_path(cwd: &Path) -> PathBuf {
  match std::env::var_os(vars::NUKIT_MANIFEST) {
    Some(path) if !path.is_empty() => cwd.join(PathBuf::from(path)),
    _ => cwd.join(MANIFEST_FILE),
  }
}

/// Settings resolved once at startup and read by every action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
  pub install_dir: PathBuf,
  pub build_dir: PathBuf,
  pub build_version: String,
  pub debug: bool,
  pub no_manifest: bool,
  pub verbose: bool,
  pub war_name: String,
  pub local_distrib: PathBuf,
  pub reports_archive: PathBuf,
}

impl BuildConfig {
  /// Resolve directories as flag, then environment, then fallback, expanding `~`.
  pub fn resolve(options: &Options, manifest: &ProjectManifest, env: &BuildEnv) -> Self {
    let install_dir = resolve_dir(
      options.install_dir.as_deref(),
      env.get(vars::CAPP_INSTALL_DIR),
      DEFAULT_INSTALL_DIR,
    );
    let build_dir = resolve_dir(options.build_dir.as_deref(), env.get(vars::CAPP_BUILD), DEFAULT_BUILD_DIR);

    Self {
      install_dir,
      build_dir,
      build_version: options
        .build_version
        .clone()
        .unwrap_or_else(|| DEFAULT_BUILD_VERSION.to_string()),
      debug: options.debug,
      no_manifest: options.no_manifest,
      verbose: options.verbose,
      war_name: manifest.war_name.clone(),
      local_distrib: expand_home(&manifest.local_distrib),
      reports_archive: expand_home(&manifest.reports_archive),
    }
  }
}

fn resolve_dir(flag: Option<&Path>, env_value: Option<&str>, fallback: &str) -> PathBuf {
  let chosen = match (flag, env_value) {
    (Some(flag), _) => flag.to_path_buf(),
    (None, Some(value)) if !value.is_empty() => PathBuf::from(value),
    _ => PathBuf::from(fallback),
  };
  expand_home(&chosen)
}
