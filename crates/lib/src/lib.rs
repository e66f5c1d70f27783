//! nukit-lib: build orchestration for Cappuccino application trees.
//!
//! This crate sequences the external tools (`jake`, `capp`, `bootstrap.sh`, `jar`, ...)
//! that build a Cappuccino project:
//! - `Session`: the working directory, environment and shell every command runs with
//! - `Component`: a library or theme declared by the project manifest
//! - `Plan`: the ordered actions selected by the command-line options
//! - `Action`: a single build or clean step

pub mod actions;
pub mod config;
pub mod consts;
pub mod dispatch;
pub mod env;
pub mod error;
pub mod output;
pub mod platform;
pub mod runner;
pub mod session;
pub mod util;

pub use actions::Action;
pub use config::{BuildConfig, Component, ProjectManifest};
pub use dispatch::{Options, Plan, plan, run};
pub use env::BuildEnv;
pub use error::{BuildError, ConfigError};
pub use runner::{CommandError, Shell, SystemShell};
pub use session::Session;
