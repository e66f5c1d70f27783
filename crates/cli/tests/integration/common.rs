//! Shared test helpers for CLI integration tests.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Records every invocation as `<tool> <args> @ <cwd>` and exits with `$FAKE_EXIT`.
const FAKE_TOOL: &str = r#"#!/bin/sh
echo "$(basename "$0") $* @ $(pwd)" >> "$NUKIT_TEST_LOG"
exit "${FAKE_EXIT:-0}"
"#;

/// Answers the two queries the project build makes.
const FAKE_GIT: &str = r#"#!/bin/sh
echo "git $* @ $(pwd)" >> "$NUKIT_TEST_LOG"
case "$1" in
  log) printf 'abc1234' ;;
  symbolic-ref) echo 'refs/heads/release/main' ;;
esac
"#;

/// Extracts the report bundle as an empty `build/` folder.
const FAKE_UNZIP: &str = r#"#!/bin/sh
echo "unzip $* @ $(pwd)" >> "$NUKIT_TEST_LOG"
mkdir build
"#;

/// `jar -cf <file> .` creates an empty archive.
const FAKE_JAR: &str = r#"#!/bin/sh
echo "jar $* @ $(pwd)" >> "$NUKIT_TEST_LOG"
touch "$2"
"#;

/// Installs the fake toolchain into `<directory>/bin`.
const FAKE_BOOTSTRAP: &str = r#"#!/bin/sh
echo "bootstrap.sh $* @ $(pwd)" >> "$NUKIT_TEST_LOG"
mkdir -p "$3/bin"
cp "$NUKIT_TEST_TOOLS"/* "$3/bin/"
"#;

/// Isolated project tree.
///
/// Layout inside the temp directory:
/// - `project/`: working directory of the binary
/// - `tools/`: fake `jake`, `capp`, `git`, `unzip` and `jar`
/// - `install/bin/`: copy of `tools/`, first on the child `PATH`
/// - `build/`: Cappuccino build directory
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    let temp = TempDir::new().unwrap();
    let env = Self { temp };
    std::fs::create_dir_all(env.project()).unwrap();
    std::fs::create_dir_all(env.tools_dir()).unwrap();
    std::fs::create_dir_all(env.install_dir().join("bin")).unwrap();
    for (name, script) in [
      ("jake", FAKE_TOOL),
      ("capp", FAKE_TOOL),
      ("git", FAKE_GIT),
      ("unzip", FAKE_UNZIP),
      ("jar", FAKE_JAR),
    ] {
      write_executable(&env.tools_dir().join(name), script);
      write_executable(&env.install_dir().join("bin").join(name), script);
    }
    env
  }

  pub fn root(&self) -> PathBuf {
    dunce::canonicalize(self.temp.path()).unwrap()
  }

  pub fn project(&self) -> PathBuf {
    self.root().join("project")
  }

  pub fn install_dir(&self) -> PathBuf {
    self.root().join("install")
  }

  pub fn build_dir(&self) -> PathBuf {
    self.root().join("build")
  }

  fn tools_dir(&self) -> PathBuf {
    self.root().join("tools")
  }

  fn log_path(&self) -> PathBuf {
    self.root().join("tools.log")
  }

  /// Create a directory relative to the project.
  pub fn mkdir(&self, relative_path: &str) -> PathBuf {
    let path = self.project().join(relative_path);
    std::fs::create_dir_all(&path).unwrap();
    path
  }

  /// Write a file relative to the project.
  pub fn write_file(&self, relative_path: &str, content: &str) {
    let path = self.project().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
  }

  pub fn exists(&self, relative_path: &str) -> bool {
    self.project().join(relative_path).exists()
  }

  /// Add `Libraries/Cappuccino` with a bootstrap script that installs the fake tools.
  pub fn framework_tree(&self) {
    let dir = self.mkdir("Libraries/Cappuccino");
    write_executable(&dir.join("bootstrap.sh"), FAKE_BOOTSTRAP);
  }

  /// Logged tool invocations, with the project path shown as `.` and the temp root as `$ROOT`.
  pub fn log(&self) -> Vec<String> {
    let project = self.project().display().to_string();
    let root = self.root().display().to_string();
    std::fs::read_to_string(self.log_path())
      .unwrap_or_default()
      .lines()
      .map(|line| line.replace(&project, ".").replace(&root, "$ROOT"))
      .collect()
  }

  /// A nukit command running in the project, without directory flags.
  pub fn base_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("nukit");
    cmd.current_dir(self.project());
    cmd.env("NUKIT_TEST_LOG", self.log_path());
    cmd.env("NUKIT_TEST_TOOLS", self.tools_dir());
    for var in [
      "NUKIT_MANIFEST",
      "CAPP_BUILD",
      "CAPP_INSTALL_DIR",
      "NARWHAL_ENGINE",
      "ARCHITECT_BUILD_DEBUG",
      "CAPP_NOMANIFEST",
      "FAKE_EXIT",
      "RUST_LOG",
    ] {
      cmd.env_remove(var);
    }
    cmd
  }

  /// A nukit command using the isolated install and build directories.
  pub fn nukit_cmd(&self) -> Command {
    let mut cmd = self.base_cmd();
    cmd.arg("--cappinstalldir").arg(self.install_dir());
    cmd.arg("--cappbuilddir").arg(self.build_dir());
    cmd
  }
}

fn write_executable(path: &Path, script: &str) {
  std::fs::write(path, script).unwrap();
  std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

pub fn read(path: &Path) -> String {
  std::fs::read_to_string(path).unwrap()
}
