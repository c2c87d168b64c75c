use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use mirath_core::ServiceConfig;
use serde::Deserialize;

/// Host settings read from `mirath.toml`.
///
/// ```toml
/// [service]
/// base_url = "http://127.0.0.1:5000"
///
/// [output]
/// directory = "reports"
///
/// [logging]
/// level = "debug"
/// file = "mirath.log"
/// console = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub service: ServiceConfig,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Where downloaded reports are written.
    pub directory: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// EnvFilter directive; `None` keeps the default or `RUST_LOG`.
    pub level: Option<String>,
    pub file: Option<PathBuf>,
    pub console: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: None,
            file: None,
            console: true,
        }
    }
}

impl Settings {
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        toml::from_str(raw).context("invalid settings")
    }

    /// Reads `path` when given, otherwise `./mirath.toml` if it exists,
    /// otherwise the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let local = PathBuf::from("mirath.toml");
                if !local.is_file() {
                    return Ok(Self::default());
                }
                local
            }
        };

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("cannot read settings file '{}'", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("in '{}'", path.display()))
    }
}
