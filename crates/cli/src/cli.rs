//! Command-line surface.
//!
//! The fixed flags are declared with clap's derive API. Every library and theme in the
//! project manifest adds one boolean flag on top, registered on the derived command.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, CommandFactory, FromArgMatches, Parser};
use nukit_lib::{Component, Options, ProjectManifest};

/// nukit - build and deploy Cappuccino applications
#[derive(Debug, Parser)]
#[command(name = "nukit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
  /// Build and install Cappuccino
  #[arg(short = 'c', long)]
  pub cappuccino: bool,

  /// Build and install TNKit
  #[arg(short = 't', long)]
  pub tnkit: bool,

  /// Build and install Bambou
  #[arg(short = 'b', long)]
  pub bambou: bool,

  /// Build and deploy NUKit
  #[arg(short = 'k', long)]
  pub nukit: bool,

  /// Build and deploy project
  #[arg(short = 'd', long)]
  pub project: bool,

  /// Build and deploy everything without Cappuccino
  #[arg(short = 'a', long)]
  pub all: bool,

  /// Build and deploy everything + Cappuccino
  #[arg(short = 'E', long)]
  pub everything: bool,

  /// Build all libraries
  #[arg(short = 'L', long)]
  pub libraries: bool,

  /// Generate the WAR file for JBoss deployment
  #[arg(short = 'w', long)]
  pub war: bool,

  /// Enable verbose output
  #[arg(short = 'v', long)]
  pub verbose: bool,

  /// Set the build version
  #[arg(long = "setversion", value_name = "VERSION")]
  pub build_version: Option<String>,

  /// Clean all libraries and project
  #[arg(short = 'C', long)]
  pub clean: bool,

  /// Clean all libraries, project and Cappuccino
  #[arg(long)]
  pub clobber: bool,

  /// Cappuccino install directory [default: $CAPP_INSTALL_DIR or /usr/local/narwhal]
  #[arg(long = "cappinstalldir", value_name = "PATH")]
  pub install_dir: Option<PathBuf>,

  /// Cappuccino build directory [default: $CAPP_BUILD or /usr/local/cappuccino]
  #[arg(long = "cappbuilddir", value_name = "PATH")]
  pub build_dir: Option<PathBuf>,

  /// Disable the HTML5 app.manifest generation
  #[arg(long = "nomanifest")]
  pub no_manifest: bool,

  /// Generate a debug deployment build
  #[arg(long)]
  pub debug: bool,
}

impl Cli {
  fn into_options(self, selected: BTreeSet<String>) -> Options {
    Options {
      cappuccino: self.cappuccino,
      tnkit: self.tnkit,
      bambou: self.bambou,
      nukit: self.nukit,
      project: self.project,
      all: self.all,
      everything: self.everything,
      libraries: self.libraries,
      war: self.war,
      verbose: self.verbose,
      clean: self.clean,
      clobber: self.clobber,
      no_manifest: self.no_manifest,
      debug: self.debug,
      build_version: self.build_version,
      install_dir: self.install_dir,
      build_dir: self.build_dir,
      selected,
    }
  }
}

fn component_id(component: &Component) -> String {
  format!("component-{}", component.long_flag())
}

/// The full command: fixed flags plus one flag per manifest component.
pub fn command(manifest: &ProjectManifest) -> Command {
  manifest.components().fold(Cli::command(), |command, component| {
    command.arg(
      Arg::new(component_id(component))
        .short(component.flag)
        .long(component.long_flag())
        .action(ArgAction::SetTrue)
        .help(format!("Build and install {}", component.name)),
    )
  })
}

fn selected_components(manifest: &ProjectManifest, matches: &ArgMatches) -> BTreeSet<String> {
  manifest
    .components()
    .filter(|component| matches.get_flag(&component_id(component)))
    .map(|component| component.name.clone())
    .collect()
}

/// Parse `args` (program name first) against the manifest's command.
pub fn parse_from<I, T>(manifest: &ProjectManifest, args: I) -> Result<Options, clap::Error>
where
  I: IntoIterator<Item = T>,
  T: Into<OsString> + Clone,
{
  let matches = command(manifest).try_get_matches_from(args)?;
  let cli = Cli::from_arg_matches(&matches)?;
  Ok(cli.into_options(selected_components(manifest, &matches)))
}

/// Help and version requests, answered against the fixed flags only.
///
/// Used when the manifest cannot be loaded, so `--help` keeps working in a broken project.
pub fn info_request<I, T>(args: I) -> Option<clap::Error>
where
  I: IntoIterator<Item = T>,
  T: Into<OsString> + Clone,
{
  use clap::error::ErrorKind;

  let err = command(&ProjectManifest::default()).try_get_matches_from(args).err()?;
  match err.kind() {
    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
      Some(err)
    }
    _ => None,
  }
}
