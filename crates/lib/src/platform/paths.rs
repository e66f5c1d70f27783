use std::path::{Path, PathBuf};

/// Expands a leading `~` to the user's home directory.
///
/// `~user` forms are left untouched, as is everything when no home directory is known.
pub fn expand_home(path: &Path) -> PathBuf {
  let Some(home) = dirs::home_dir() else {
    return path.to_path_buf();
  };
  expand_home_with(path, &home)
}

fn expand_home_with(path: &Path, home: &Path) -> PathBuf {
  match path.strip_prefix("~") {
    Ok(rest) if rest.as_os_str().is_empty() => home.to_path_buf(),
    Ok(rest) => home.join(rest),
    Err(_) => path.to_path_buf(),
  }
}
