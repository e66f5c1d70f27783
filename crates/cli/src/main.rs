use std::process::ExitCode;

use anyhow::{Context, Result};
use nukit_lib::config::manifest_path;
use nukit_lib::consts::FAILURE_EXIT_CODE;
use nukit_lib::output::{print_error, print_info};
use nukit_lib::platform::Os;
use nukit_lib::{BuildConfig, BuildEnv, ProjectManifest, Session, SystemShell, dispatch};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;

fn init_tracing(verbose: bool) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .without_time()
    .init();
}

fn main() -> ExitCode {
  match run() {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      print_error(&format!("{:#}", err));
      ExitCode::from(FAILURE_EXIT_CODE)
    }
  }
}

fn run() -> Result<()> {
  let cwd = std::env::current_dir().context("Failed to determine working directory")?;
  let manifest_path = manifest_path(&cwd);
  let manifest = match ProjectManifest::load_or_default(&manifest_path) {
    Ok(manifest) => manifest,
    Err(err) => match cli::info_request(std::env::args_os()) {
      Some(info) => info.exit(),
      None => return Err(err.into()),
    },
  };

  let options = cli::parse_from(&manifest, std::env::args_os()).unwrap_or_else(|e| e.exit());
  let mut env = BuildEnv::from_process();
  let config = BuildConfig::resolve(&options, &manifest, &env);

  init_tracing(config.verbose);
  debug!(manifest = %manifest_path.display(), ?options, "parsed options");

  env.initialize(&config.install_dir, &config.build_dir, Os::current())?;

  let plan = dispatch::plan(&options, &manifest);
  let mut session = Session::new(Box::new(SystemShell::new()), env, cwd);
  dispatch::run(&plan, &config, &mut session).context("Build aborted")?;

  if plan.is_clean() {
    print_info("Clean complete");
  }

  Ok(())
}
