use std::path::Path;

use crate::actions::shell_quote;
use crate::consts::{FRAMEWORK_DIR, LIBRARIES_DIR};
use crate::error::BuildError;
use crate::session::Session;

/// Reinstall the Cappuccino runtime into `install_dir`.
///
/// Any previous installation is removed first. `local_distrib` is copied instead of
/// downloaded when it exists.
pub fn install_framework(session: &mut Session, install_dir: &Path, local_distrib: &Path) -> Result<(), BuildError> {
  let framework = session.enter(Path::new(LIBRARIES_DIR).join(FRAMEWORK_DIR))?;
  let install = shell_quote(&install_dir.display().to_string());

  framework.run(&format!("rm -rf {}", install))?;

  if framework.cwd().join(local_distrib).exists() {
    framework.run(&format!(
      "./bootstrap.sh --noprompt --directory {} --copy-local {}",
      install,
      shell_quote(&local_distrib.display().to_string())
    ))?;
  } else {
    framework.run(&format!("./bootstrap.sh --noprompt --directory {}", install))?;
  }
  framework.run("jake install")?;

  Ok(())
}

/// Clobber the Cappuccino build and delete both the install and build directories.
pub fn clean_framework(session: &mut Session, install_dir: &Path, build_dir: &Path) -> Result<(), BuildError> {
  session.run("jake clobber-theme; jake clobber")?;
  session.run(&format!("rm -rf {}", shell_quote(&install_dir.display().to_string())))?;
  session.run(&format!("rm -rf {}", shell_quote(&build_dir.display().to_string())))?;
  Ok(())
}
