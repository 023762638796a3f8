//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info, warn};

use figures_core::config::AppConfig;

use crate::error::{ConfigError, FiguresError};

/// Config file name looked up in the local and system directories.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (figures/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, FiguresError> {
    let system_dir = ProjectDirs::from("com", "figures", "figures")
        .map(|proj_dirs| proj_dirs.config_dir().to_path_buf());
    if system_dir.is_none() {
        debug!("Could not determine platform-specific config directory");
    }

    load_config_from(explicit_path, Path::new("figures"), system_dir.as_deref())
}

/// Same as [`load_config`] with the local and system directories supplied by the caller.
pub(crate) fn load_config_from(
    explicit_path: Option<impl AsRef<Path>>,
    local_dir: &Path,
    system_dir: Option<&Path>,
) -> Result<AppConfig, FiguresError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = local_dir.join(CONFIG_FILE_NAME);
    if local_config.exists() {
        warn!(path = local_config.display().to_string(); "Using configuration found in local path");
        return load_config_file(&local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(system_config) = system_dir.map(|dir| dir.join(CONFIG_FILE_NAME)) {
        if system_config.exists() {
            warn!(path = system_config.display().to_string(); "Using configuration found in system path");
            return load_config_file(&system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
fn load_config_file(path: &Path) -> Result<AppConfig, FiguresError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(PathBuf::from(path)).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig = toml::from_str(&content)
        .map_err(|err| ConfigError::from_toml(&err, path, content.as_str()))?;

    Ok(config)
}
