//! Settings for the doctor binary.
//!
//! Settings come from an optional TOML file and from environment variables
//! prefixed with `FEEDER_DOCTOR_`, environment winning. Command line flags
//! override both.
//!
//! ```toml
//! status_file = "/run/piaware/status.txt"
//! refresh_secs = 30
//! optional_modules = ["faup978", "dump978-fa"]
//! ```
//!
//! The same settings from the environment:
//!
//! ```bash
//! FEEDER_DOCTOR_STATUS_FILE=/run/piaware/status.txt
//! FEEDER_DOCTOR_REFRESH_SECS=30
//! FEEDER_DOCTOR_OPTIONAL_MODULES=faup978,dump978-fa
//! ```

use std::path::{Path, PathBuf};

use anyhow::Result;
use config::{Config, Environment, File};
use feeder_types::ModuleKind;
use serde::Deserialize;
use tracing::warn;

use crate::data::HealthPolicy;
use crate::status::normalize;

const ENV_PREFIX: &str = "FEEDER_DOCTOR";

/// Default refresh interval for watch mode, in seconds.
pub const DEFAULT_REFRESH_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Status report file to read when no input flag is given.
    pub status_file: Option<PathBuf>,
    pub refresh_secs: u64,
    /// Modules that may be stopped without being critical.
    pub optional_modules: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            status_file: None,
            refresh_secs: DEFAULT_REFRESH_SECS,
            optional_modules: vec![
                ModuleKind::Faup978.as_str().to_string(),
                ModuleKind::Dump978Fa.as_str().to_string(),
            ],
        }
    }
}

impl Settings {
    /// Load settings from the given file (if any) and the environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(config_path, Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("optional_modules")
            .try_parsing(true)
    }

    fn load_with_env(config_path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        }
        let config = builder.add_source(env).build()?;
        Ok(config.try_deserialize()?)
    }

    /// Build the health policy from the configured optional modules.
    ///
    /// Names go through the same normalizer as report lines, so
    /// `"Dump978 FA"` and `"dump978-fa"` are the same module.
    pub fn health_policy(&self) -> HealthPolicy {
        let optional_modules = self
            .optional_modules
            .iter()
            .filter_map(|name| match normalize(name) {
                ModuleKind::Unknown => {
                    warn!("ignoring unknown optional module {:?}", name);
                    None
                }
                kind => Some(kind),
            })
            .collect();
        HealthPolicy { optional_modules }
    }
}
