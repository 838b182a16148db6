//! Server configuration.
//!
//! Layered with the `config` crate: built-in defaults, then an optional TOML
//! file, then `CROPLOG_*` environment variables.

use std::path::{Path, PathBuf};

use config::{
  Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState,
};
use serde::Deserialize;

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  /// SQLite database file. A leading `~/` is expanded by the binary.
  pub database_path: PathBuf,
}

impl ServerConfig {
  /// Load settings from `path` (if it exists) and the environment.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::builder(path)?
      .add_source(Environment::with_prefix("CROPLOG"))
      .build()?
      .try_deserialize()
  }

  fn builder(path: &Path) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(
      Config::builder()
        .set_default("host", "127.0.0.1")?
        .set_default("port", 8501_i64)?
        .set_default("database_path", "crop_management.db")?
        .add_source(File::from(path).required(false)),
    )
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}
