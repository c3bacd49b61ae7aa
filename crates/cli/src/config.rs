//! CLI configuration loading

use std::path::{Path, PathBuf};

use autodiag_catalog::Catalog;
use autodiag_engine::EngineConfig;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Default config file location, `<config dir>/autodiag/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("autodiag").join("config.toml"))
}

/// Load engine configuration.
///
/// An explicit path must exist. Without one, the default location is used
/// when present, otherwise built-in defaults.
pub fn load_engine_config(path: Option<&Path>) -> CliResult<EngineConfig> {
    let path = match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                debug!("No config file, using defaults");
                return Ok(EngineConfig::default());
            }
        },
    };

    debug!(path = %path.display(), "Loading engine config");
    Ok(EngineConfig::load(&path)?)
}

/// Load an external catalog, or the built-in one.
pub fn load_catalog(path: Option<&Path>) -> CliResult<Catalog> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading catalog");
            Ok(Catalog::load(path)?)
        }
        None => Ok(Catalog::builtin()),
    }
}
