//! `javelin.toml` configuration and `tracing` setup.

#![forbid(unsafe_code)]

mod logging;
mod schema;

use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use logging::{init_tracing, LoggingConfig};
pub use schema::json_schema;

/// Top-level Javelin configuration loaded from TOML.
///
/// ```toml
/// [logging]
/// level = "javelin.resolve=debug,info"
///
/// [resolver]
/// stubs = ["stubs/project.json"]
/// builtin_jdk = true
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct JavelinConfig {
    /// Global logging settings for Javelin crates.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Declaration providers used to build a resolution context.
    #[serde(default)]
    pub resolver: ResolverConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    /// JSON stub files, consulted in order. Earlier files shadow later ones.
    #[serde(default)]
    #[schemars(with = "Vec<String>")]
    pub stubs: Vec<PathBuf>,

    /// Append the built-in minimal JDK after the stub files.
    #[serde(default = "ResolverConfig::default_builtin_jdk")]
    pub builtin_jdk: bool,
}

impl ResolverConfig {
    fn default_builtin_jdk() -> bool {
        true
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        for stub in &mut self.stubs {
            if stub.is_relative() {
                *stub = base.join(&*stub);
            }
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            stubs: Vec::new(),
            builtin_jdk: Self::default_builtin_jdk(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // The default `Display` embeds a source snippet; keep only the message.
        ConfigError::Toml(err.message().to_owned())
    }
}

impl JavelinConfig {
    /// Load a config file from TOML.
    ///
    /// Relative stub paths are resolved against the directory containing `path`.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut config = Self::load_from_str(&text)?;
        if let Some(dir) = path.parent() {
            config.resolver.resolve_relative_to(dir);
        }
        Ok(config)
    }

    /// Parse a config from TOML text. Stub paths are kept as written.
    pub fn load_from_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

/// Discover the Javelin configuration file for a workspace root.
///
/// Search order:
/// 1) `javelin.toml` in `workspace_root`
/// 2) `.javelin/config.toml` in `workspace_root`
pub fn discover_config_path(workspace_root: &Path) -> Option<PathBuf> {
    ["javelin.toml", ".javelin/config.toml"]
        .into_iter()
        .map(|name| workspace_root.join(name))
        .find(|path| path.is_file())
}

/// Load the Javelin configuration for a workspace root.
///
/// If no config is present, returns [`JavelinConfig::default`] and `None`.
pub fn load_for_workspace(
    workspace_root: &Path,
) -> Result<(JavelinConfig, Option<PathBuf>), ConfigError> {
    match discover_config_path(workspace_root) {
        Some(path) => {
            tracing::debug!(target = "javelin.config", path = %path.display(), "loading config");
            let config = JavelinConfig::load_from_path(&path)?;
            Ok((config, Some(path)))
        }
        None => Ok((JavelinConfig::default(), None)),
    }
}
