use std::path::Path;

use crate::actions::library::set_include_paths;
use crate::consts::{BUILD_OUTPUT_DIR, LIBRARIES_DIR};
use crate::error::BuildError;
use crate::session::Session;

/// Build the theme in `Libraries/<name>` and regenerate its theme links.
pub fn build_theme(session: &mut Session, name: &str) -> Result<(), BuildError> {
  set_include_paths(session);
  {
    let theme = session.enter(Path::new(LIBRARIES_DIR).join(name))?;
    theme.run("jake build")?;
  }
  session.run(&format!("capp gen -fl --force -T {} .", name))?;
  Ok(())
}

/// Themes have no clean task; their output directory is removed directly.
pub fn clean_theme(session: &mut Session, name: &str) -> Result<(), BuildError> {
  let theme = session.enter(Path::new(LIBRARIES_DIR).join(name))?;
  theme.run(&format!("rm -rf {}", BUILD_OUTPUT_DIR))?;
  Ok(())
}
