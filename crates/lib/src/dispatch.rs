//! Option evaluation and plan execution.
//!
//! [`plan`] decides, independently per component, whether it is cleaned or built.
//! Clean and clobber runs never build anything. Build runs follow a fixed order:
//! framework, core libraries, project libraries, themes, project, WAR.

use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::{error, info};

use crate::actions::Action;
use crate::config::{BuildConfig, ProjectManifest};
use crate::consts::{CORE_LIBRARIES, CORE_LIBRARIES_CLEAN_ORDER, vars};
use crate::error::BuildError;
use crate::session::Session;

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
  pub cappuccino: bool,
  pub tnkit: bool,
  pub bambou: bool,
  pub nukit: bool,
  pub project: bool,
  pub all: bool,
  pub everything: bool,
  pub libraries: bool,
  pub war: bool,
  pub verbose: bool,
  pub clean: bool,
  pub clobber: bool,
  pub no_manifest: bool,
  pub debug: bool,
  pub build_version: Option<String>,
  pub install_dir: Option<PathBuf>,
  pub build_dir: Option<PathBuf>,
  /// Manifest components whose generated flag was given.
  pub selected: BTreeSet<String>,
}

impl Options {
  fn core_library_flag(&self, name: &str) -> bool {
    match name {
      "TNKit" => self.tnkit,
      "Bambou" => self.bambou,
      "NUKit" => self.nukit,
      _ => false,
    }
  }

  /// Whether `all` or anything implying it was given.
  fn all_components(&self) -> bool {
    self.everything || self.all
  }

  fn library_selected(&self, flag: bool) -> bool {
    self.all_components() || flag || self.libraries
  }
}

/// Actions chosen for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
  Clean(Vec<Action>),
  Build(Vec<Action>),
}

impl Plan {
  pub fn actions(&self) -> &[Action] {
    match self {
      Plan::Clean(actions) | Plan::Build(actions) => actions,
    }
  }

  pub fn is_clean(&self) -> bool {
    matches!(self, Plan::Clean(_))
  }
}

/// Select the actions for `options`.
pub fn plan(options: &Options, manifest: &ProjectManifest) -> Plan {
  if options.clean || options.clobber {
    let mut actions: Vec<Action> = CORE_LIBRARIES_CLEAN_ORDER
      .iter()
      .map(|name| Action::CleanLibrary {
        name: name.to_string(),
      })
      .collect();
    actions.extend(manifest.libraries.iter().map(|lib| Action::CleanLibrary {
      name: lib.name.clone(),
    }));
    actions.extend(manifest.themes.iter().map(|theme| Action::CleanTheme {
      name: theme.name.clone(),
    }));
    actions.push(Action::CleanProject);
    actions.push(Action::CleanWar);
    if options.clobber {
      actions.push(Action::CleanFramework);
    }
    return Plan::Clean(actions);
  }

  let mut actions = Vec::new();

  if options.everything || options.cappuccino {
    actions.push(Action::InstallFramework);
  }

  for name in CORE_LIBRARIES {
    if options.library_selected(options.core_library_flag(name)) {
      actions.push(Action::BuildLibrary {
        name: name.to_string(),
        build_command: None,
      });
    }
  }

  for lib in &manifest.libraries {
    if options.library_selected(options.selected.contains(&lib.name)) {
      actions.push(Action::BuildLibrary {
        name: lib.name.clone(),
        build_command: lib.build_command.clone(),
      });
    }
  }

  for theme in &manifest.themes {
    if options.library_selected(options.selected.contains(&theme.name)) {
      actions.push(Action::BuildTheme {
        name: theme.name.clone(),
      });
    }
  }

  if options.all_components() || options.project {
    actions.push(Action::BuildProject);
  }

  if options.all_components() || options.war {
    actions.push(Action::BuildWar);
  }

  Plan::Build(actions)
}

/// Execute `plan` in order, stopping at the first failure.
pub fn run(plan: &Plan, config: &BuildConfig, session: &mut Session) -> Result<(), BuildError> {
  if !plan.is_clean() {
    if config.no_manifest {
      session.env_mut().set(vars::CAPP_NOMANIFEST, "1");
    }
    if config.debug {
      session.env_mut().set(vars::BUILD_DEBUG, "1");
    }
  }

  for action in plan.actions() {
    info!(%action, "starting");
    action
      .execute(session, config)
      .inspect_err(|err| error!(%action, %err, "action failed"))?;
  }

  Ok(())
}
