//! Build and clean actions.
//!
//! Each action is a fixed sequence of shell commands run through the [`Session`].

pub mod framework;
pub mod library;
pub mod project;
pub mod theme;
pub mod war;

use std::fmt;

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::session::Session;

/// One unit of work selected by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  InstallFramework,
  CleanFramework,
  BuildLibrary {
    name: String,
    build_command: Option<String>,
  },
  CleanLibrary {
    name: String,
  },
  BuildTheme {
    name: String,
  },
  CleanTheme {
    name: String,
  },
  BuildProject,
  CleanProject,
  BuildWar,
  CleanWar,
}

impl Action {
  pub fn execute(&self, session: &mut Session, config: &BuildConfig) -> Result<(), BuildError> {
    match self {
      Action::InstallFramework => framework::install_framework(session, &config.install_dir, &config.local_distrib),
      Action::CleanFramework => framework::clean_framework(session, &config.install_dir, &config.build_dir),
      Action::BuildLibrary { name, build_command } => library::build_library(session, name, build_command.as_deref()),
      Action::CleanLibrary { name } => library::clean_library(session, name),
      Action::BuildTheme { name } => theme::build_theme(session, name),
      Action::CleanTheme { name } => theme::clean_theme(session, name),
      Action::BuildProject => project::build_project(session, &config.build_version),
      Action::CleanProject => project::clean_project(session),
      Action::BuildWar => war::build_war(session, &config.war_name, &config.reports_archive),
      Action::CleanWar => war::clean_war(session),
    }
  }
}

impl fmt::Display for Action {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Action::InstallFramework => write!(f, "install cappuccino"),
      Action::CleanFramework => write!(f, "clean cappuccino"),
      Action::BuildLibrary { name, .. } => write!(f, "build library {}", name),
      Action::CleanLibrary { name } => write!(f, "clean library {}", name),
      Action::BuildTheme { name } => write!(f, "build theme {}", name),
      Action::CleanTheme { name } => write!(f, "clean theme {}", name),
      Action::BuildProject => write!(f, "build project"),
      Action::CleanProject => write!(f, "clean project"),
      Action::BuildWar => write!(f, "build war"),
      Action::CleanWar => write!(f, "clean war"),
    }
  }
}

/// Quote `value` for a POSIX shell command line.
pub(crate) fn shell_quote(value: &str) -> String {
  format!("'{}'", value.replace('\'', r"'\''"))
}
