use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::configuration::{validate_language, validate_region, Configuration, ConfigurationError};

#[derive(Debug, Error, PartialEq)]
#[error("Could not read value of environment variable {name}: {source}")]
pub struct UnreadableVarError {
    name: String,
    source: env::VarError,
}

fn var(name: &str) -> Result<Option<String>, UnreadableVarError> {
    match std::env::var(name) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(UnreadableVarError {
            name: name.to_string(),
            source: e,
        }),
    }
}

fn with_prefix(base_name: &str) -> String {
    format!("STEAMPRICER_{}", base_name)
}

pub fn get_config_file() -> Result<Option<PathBuf>, UnreadableVarError> {
    if let Some(cfg_file) = var(&with_prefix("CONFIG"))? {
        return Ok(Some(PathBuf::from(cfg_file)));
    }
    Ok(None)
}

pub struct EnvironmentVariablesConfiguration<T: Configuration> {
    default: T,
}

impl<T: Configuration> EnvironmentVariablesConfiguration<T> {
    pub fn new(default: T) -> Self {
        EnvironmentVariablesConfiguration { default }
    }
}

impl<T: Configuration> Configuration for EnvironmentVariablesConfiguration<T> {
    fn region(&self) -> Result<String, ConfigurationError> {
        let var_name = with_prefix("REGION");
        if let Some(region) = var(&var_name)? {
            return validate_region(&region, &format!("env var '{}'", var_name));
        }
        self.default.region()
    }

    fn language(&self) -> Result<String, ConfigurationError> {
        let var_name = with_prefix("LANGUAGE");
        if let Some(language) = var(&var_name)? {
            return validate_language(&language, &format!("env var '{}'", var_name));
        }
        self.default.language()
    }

    fn base_api_url(&self) -> Result<String, ConfigurationError> {
        if let Some(base_api_url) = var(&with_prefix("BASE_API_URL"))? {
            return Ok(base_api_url);
        }
        self.default.base_api_url()
    }

    fn no_color(&self) -> Result<Option<bool>, ConfigurationError> {
        let var_name = with_prefix("NO_COLOR");
        if let Some(val) = var(&var_name)? {
            let no_color = if val == "1" {
                true
            } else if val == "0" {
                false
            } else {
                return Err(ConfigurationError::InvalidValueError {
                    got: val,
                    expected: "[0,1]".to_string(),
                    origin: format!("env var '{}'", var_name),
                });
            };
            return Ok(Some(no_color));
        }
        self.default.no_color()
    }
}
