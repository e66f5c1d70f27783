//! Fixed names, paths and environment variables shared across the crate.

/// Project manifest looked up in the working directory.
pub const MANIFEST_FILE: &str = "nukit.toml";

/// Exit status used when a run is aborted.
pub const FAILURE_EXIT_CODE: u8 = 255;

pub const DEFAULT_INSTALL_DIR: &str = "/usr/local/narwhal";
pub const DEFAULT_BUILD_DIR: &str = "/usr/local/cappuccino";
pub const DEFAULT_BUILD_VERSION: &str = "dev";
pub const DEFAULT_WAR_NAME: &str = "ui";
pub const DEFAULT_LOCAL_DISTRIB: &str = "/usr/local/cappuccino-base/current";
pub const DEFAULT_REPORTS_ARCHIVE: &str = "/var/archive/supplement/visualization_framework/build.zip";

/// Directory holding every library and theme source tree.
pub const LIBRARIES_DIR: &str = "Libraries";
pub const FRAMEWORK_DIR: &str = "Cappuccino";
pub const WEBAPP_DIR: &str = "webapp";
pub const BUILD_OUTPUT_DIR: &str = "Build";
pub const VERSION_STAMP_FILE: &str = "Resources/app-version.js";

/// Libraries every project depends on, in build order.
pub const CORE_LIBRARIES: [&str; 3] = ["TNKit", "Bambou", "NUKit"];

/// Core libraries in clean order.
pub const CORE_LIBRARIES_CLEAN_ORDER: [&str; 3] = ["NUKit", "TNKit", "Bambou"];

/// Short flags owned by the fixed command-line surface.
pub const RESERVED_SHORT_FLAGS: &[char] = &['c', 't', 'b', 'k', 'd', 'a', 'E', 'L', 'w', 'v', 'C', 'h', 'V'];

/// Long flags owned by the fixed command-line surface.
pub const RESERVED_LONG_FLAGS: &[&str] = &[
  "cappuccino",
  "tnkit",
  "bambou",
  "nukit",
  "project",
  "all",
  "everything",
  "libraries",
  "war",
  "verbose",
  "setversion",
  "clean",
  "clobber",
  "cappinstalldir",
  "cappbuilddir",
  "nomanifest",
  "debug",
  "help",
  "version",
];

pub mod vars {
  pub const PATH: &str = "PATH";
  pub const JAVA_OPTS: &str = "JAVA_OPTS";
  pub const CAPP_BUILD: &str = "CAPP_BUILD";
  pub const CAPP_INSTALL_DIR: &str = "CAPP_INSTALL_DIR";
  pub const CAPP_NOSUDO: &str = "CAPP_NOSUDO";
  pub const CAPP_NOMANIFEST: &str = "CAPP_NOMANIFEST";
  pub const NARWHAL_ENGINE: &str = "NARWHAL_ENGINE";
  pub const OBJJ_INCLUDE_PATHS: &str = "OBJJ_INCLUDE_PATHS";
  pub const BUILD_DEBUG: &str = "ARCHITECT_BUILD_DEBUG";
  pub const NUKIT_MANIFEST: &str = "NUKIT_MANIFEST";
}

/// Heap limit handed to the JVM hosting the Objective-J toolchain.
pub const JAVA_OPTS_VALUE: &str = "-Xmx1024M";
