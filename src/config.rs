//! Configuration System
//!
//! Settings for the patcher itself (which file to edit, how to log), layered with the
//! `config` crate. Precedence, lowest to highest:
//!
//! 1. built-in defaults
//! 2. `.deployment-patch.toml` in the working directory, when present
//! 3. `DEPLOYMENT_PATCH_*` environment variables (`__` separates nested keys)
//! 4. command-line flags, applied by the binary after loading

use crate::error::PatchError;
use crate::logging::LoggingConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Deployment file edited when nothing else is configured.
pub const DEFAULT_DEPLOYMENT_FILE: &str = "deployment.toml";

/// Optional settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = ".deployment-patch.toml";

/// Prefix for environment overrides, e.g. `DEPLOYMENT_PATCH_FILE`.
pub const ENV_PREFIX: &str = "DEPLOYMENT_PATCH";

/// Root settings structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Deployment file to patch
    #[serde(default = "default_file")]
    pub file: PathBuf,

    /// Color the report and error glyphs
    #[serde(default = "default_true")]
    pub color: bool,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_file() -> PathBuf {
    PathBuf::from(DEFAULT_DEPLOYMENT_FILE)
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            file: default_file(),
            color: default_true(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), PatchError> {
        if self.file.as_os_str().is_empty() {
            return Err(PatchError::Settings(
                "deployment file path cannot be empty".to_string(),
            ));
        }
        self.logging.validate()
    }
}

/// Loads [`Settings`] from defaults, the settings file and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings, looking for the settings file in `work_dir`.
    pub fn load(work_dir: &Path) -> Result<Settings, PatchError> {
        Self::load_from_file(&work_dir.join(SETTINGS_FILE))
    }

    /// Load settings from an explicit settings file path (ignored when absent).
    pub fn load_from_file(settings_path: &Path) -> Result<Settings, PatchError> {
        let settings: Settings = Config::builder()
            .set_default("file", DEFAULT_DEPLOYMENT_FILE)?
            .set_default("logging.level", "off")?
            .add_source(File::from(settings_path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }
}
