use std::path::Path;

use crate::actions::shell_quote;
use crate::consts::{BUILD_OUTPUT_DIR, WEBAPP_DIR};
use crate::error::BuildError;
use crate::session::Session;

/// Files the deployment leaves in the web application directory.
const GENERATED_FILES: &str = "Application.js *.environment Frameworks Info.plist Resources index.html";

/// War file name and `Build/` subdirectory for the current build flavor.
pub fn war_target(name: &str, debug: bool) -> (String, &'static str) {
  if debug {
    (format!("{}-debug", name), "Debug")
  } else {
    (name.to_string(), "Deployment")
  }
}

/// Package `webapp/` with the report bundle into `Build/<target>/<name>.war`.
pub fn build_war(session: &mut Session, name: &str, reports_archive: &Path) -> Result<(), BuildError> {
  let (name, target) = war_target(name, session.env().is_debug_build());
  let webapp = session.enter(WEBAPP_DIR)?;

  webapp.run(&format!("unzip {}", shell_quote(&reports_archive.display().to_string())))?;

  let from = webapp.cwd().join("build");
  let to = webapp.cwd().join("reports");
  std::fs::rename(&from, &to).map_err(|source| BuildError::Rename { from, to, source })?;

  webapp.run(&format!("jar -cf {}.war .", name))?;
  webapp.run(&format!("mv {}.war ../{}/{}/", name, BUILD_OUTPUT_DIR, target))?;

  Ok(())
}

pub fn clean_war(session: &mut Session) -> Result<(), BuildError> {
  let webapp = session.enter(WEBAPP_DIR)?;
  webapp.run(&format!("rm -rf {}", GENERATED_FILES))?;
  Ok(())
}
