use crate::consts::{BUILD_OUTPUT_DIR, VERSION_STAMP_FILE};
use crate::error::BuildError;
use crate::session::Session;

const GIT_REVISION: &str = "git log --pretty=format:'%h' -n 1";
const GIT_HEAD: &str = "git symbolic-ref HEAD";

/// Contents of `Resources/app-version.js`.
pub fn version_stamp(branch: &str, revision: &str, build_version: &str) -> String {
  format!(
    "APP_GITVERSION = '{}-{}'\nAPP_BUILDVERSION='{}'\n",
    branch, revision, build_version
  )
}

/// Stamp the version file, regenerate framework links and deploy the application.
pub fn build_project(session: &mut Session, build_version: &str) -> Result<(), BuildError> {
  let revision = session.capture(GIT_REVISION)?;
  let head = session.capture(GIT_HEAD)?;
  let branch = head.rsplit('/').next().unwrap_or_default();

  let debug = session.env().is_debug_build();
  let build_version = if debug {
    format!("{}-debug", build_version)
  } else {
    build_version.to_string()
  };

  let path = session.cwd().join(VERSION_STAMP_FILE);
  std::fs::write(&path, version_stamp(branch, &revision, &build_version))
    .map_err(|source| BuildError::Write { path, source })?;

  session.run("capp gen -fl . --force")?;
  session.run(if debug { "jake devdeploy" } else { "jake deploy" })?;
  Ok(())
}

pub fn clean_project(session: &mut Session) -> Result<(), BuildError> {
  session.run(&format!("rm -rf {}", BUILD_OUTPUT_DIR))?;
  Ok(())
}
