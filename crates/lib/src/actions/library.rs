use std::path::Path;

use crate::consts::{LIBRARIES_DIR, vars};
use crate::error::BuildError;
use crate::session::Session;

pub const DEFAULT_BUILD_COMMAND: &str = "jake release; jake debug";

/// Point the Objective-J compiler at the project's `Frameworks` directory.
pub(crate) fn set_include_paths(session: &mut Session) {
  let frameworks = session.root().join("Frameworks").display().to_string();
  session.env_mut().set(vars::OBJJ_INCLUDE_PATHS, frameworks);
}

/// Build `Libraries/<name>` and regenerate the project's framework links for it.
pub fn build_library(session: &mut Session, name: &str, build_command: Option<&str>) -> Result<(), BuildError> {
  set_include_paths(session);
  {
    let lib = session.enter(Path::new(LIBRARIES_DIR).join(name))?;
    lib.run(build_command.unwrap_or(DEFAULT_BUILD_COMMAND))?;
  }
  session.run(&format!("capp gen -fl --force -F {} .", name))?;
  Ok(())
}

pub fn clean_library(session: &mut Session, name: &str) -> Result<(), BuildError> {
  let lib = session.enter(Path::new(LIBRARIES_DIR).join(name))?;
  lib.run("jake clean")?;
  Ok(())
}
