use std::path::PathBuf;

use thiserror::Error;

use crate::configuration::cli::{Args, CLIConfiguration};
use crate::configuration::default::DefaultConfiguration;
use crate::configuration::env::EnvironmentVariablesConfiguration;
use crate::configuration::files::FSConfiguration;

pub mod cli;

pub mod env;

pub mod files;

pub mod default;

pub const CONFIGURATION_FILE_NAME: &str = "steam-pricer.toml";

#[derive(Debug, Error)]
pub enum ConfigurationInitializationError {
    #[error(transparent)]
    EnvVarError {
        #[from]
        source: env::UnreadableVarError,
    },
    #[error(transparent)]
    ConfigurationFileLoadingError {
        #[from]
        source: files::MainConfigurationInitError,
    },
}

pub fn get(args: &Args) -> Result<impl Configuration, ConfigurationInitializationError> {
    let cfg_file = get_config_file(args)?;
    let cfg = FSConfiguration::new(cfg_file, DefaultConfiguration)?;
    let env_var_cfg = EnvironmentVariablesConfiguration::new(cfg);
    Ok(CLIConfiguration::new(args, env_var_cfg))
}

pub fn get_config_file(args: &Args) -> Result<Option<PathBuf>, env::UnreadableVarError> {
    if let Some(cfg_path) = args.config.clone() {
        return Ok(Some(cfg_path));
    } else if let Some(cfg_path) = env::get_config_file()? {
        return Ok(Some(cfg_path));
    } else if let Some(mut cfg_dir) = files::get_directory() {
        cfg_dir.push(CONFIGURATION_FILE_NAME);
        return Ok(Some(cfg_dir));
    }
    Ok(None)
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error(transparent)]
    EnvVarError(#[from] env::UnreadableVarError),
    #[error("value '{got}' is not valid ('{expected}') - loaded from {origin}")]
    InvalidValueError {
        got: String,
        expected: String,
        origin: String,
    },
}

pub trait Configuration {
    /// Storefront country code, drives prices and currency.
    fn region(&self) -> Result<String, ConfigurationError>;

    /// Language of the titles returned by the storefront.
    fn language(&self) -> Result<String, ConfigurationError>;

    fn base_api_url(&self) -> Result<String, ConfigurationError>;

    fn no_color(&self) -> Result<Option<bool>, ConfigurationError>;
}

pub fn validate_region(region: &str, origin: &str) -> Result<String, ConfigurationError> {
    let region = region.trim();
    if region.len() != 2 || !region.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ConfigurationError::InvalidValueError {
            got: region.to_string(),
            expected: "two letters country code".to_string(),
            origin: origin.to_string(),
        });
    }
    Ok(region.to_lowercase())
}

pub fn validate_language(language: &str, origin: &str) -> Result<String, ConfigurationError> {
    let language = language.trim();
    if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
        return Err(ConfigurationError::InvalidValueError {
            got: language.to_string(),
            expected: "language code or name".to_string(),
            origin: origin.to_string(),
        });
    }
    Ok(language.to_string())
}
