use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::configuration::{validate_language, validate_region, Configuration, ConfigurationError};
use crate::display::Display;
use crate::logging;

pub fn get_directory() -> Option<PathBuf> {
    dirs::config_dir().map(|mut d| {
        d.push("steam-pricer");
        d
    })
}

pub struct FSConfiguration<T: Configuration> {
    cfg: Option<MainConfiguration>,
    origin: String,
    default: T,
}

impl<T: Configuration> FSConfiguration<T> {
    pub fn new(cfg_file: Option<PathBuf>, default: T) -> Result<Self, MainConfigurationInitError> {
        let origin = match &cfg_file {
            Some(path) => format!("configuration file '{}'", path.to_display()),
            None => "configuration file".to_string(),
        };
        let cfg = MainConfiguration::from(cfg_file)?;
        Ok(FSConfiguration {
            cfg,
            origin,
            default,
        })
    }

    fn store(&self) -> Option<&StoreConfiguration> {
        self.cfg.as_ref().and_then(|cfg| cfg.store.as_ref())
    }
}

impl<T: Configuration> Configuration for FSConfiguration<T> {
    fn region(&self) -> Result<String, ConfigurationError> {
        if let Some(region) = self.store().and_then(|s| s.region.as_ref()) {
            return validate_region(region, &self.origin);
        }
        self.default.region()
    }

    fn language(&self) -> Result<String, ConfigurationError> {
        if let Some(language) = self.store().and_then(|s| s.language.as_ref()) {
            return validate_language(language, &self.origin);
        }
        self.default.language()
    }

    fn base_api_url(&self) -> Result<String, ConfigurationError> {
        if let Some(url) = self.store().and_then(|s| s.base_url.as_ref()) {
            return Ok(url.to_string());
        }
        self.default.base_api_url()
    }

    fn no_color(&self) -> Result<Option<bool>, ConfigurationError> {
        if let Some(cfg) = &self.cfg {
            if let Some(display) = &cfg.display {
                if let Some(no_color) = display.no_color {
                    return Ok(Some(no_color));
                }
            }
        }
        self.default.no_color()
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct MainConfiguration {
    pub store: Option<StoreConfiguration>,
    pub display: Option<DisplayConfiguration>,
}

#[derive(Debug, Error)]
pub enum MainConfigurationInitError {
    #[error("Check existence of configuration file ({path}): {source}")]
    ExistenceCheck {
        path: String,
        source: std::io::Error,
    },
    #[error("Read configuration file ({path}): {source}")]
    ReadConfigurationFile {
        path: String,
        source: std::io::Error,
    },
    #[error("Could not deserialize configuration file ({path}): {source}")]
    ConfigurationFileDeserialization {
        path: String,
        source: toml::de::Error,
    },
}

impl MainConfiguration {
    fn from(path: Option<PathBuf>) -> Result<Option<Self>, MainConfigurationInitError> {
        let Some(path) = &path else {
            return Ok(None);
        };
        let exists =
            path.try_exists()
                .map_err(|source| MainConfigurationInitError::ExistenceCheck {
                    path: path.to_display(),
                    source,
                })?;
        if !exists {
            logging::trace!("No configuration file at {}", path.to_display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| {
            MainConfigurationInitError::ReadConfigurationFile {
                path: path.to_display(),
                source,
            }
        })?;
        let result: MainConfiguration = toml::from_str(&content).map_err(|source| {
            MainConfigurationInitError::ConfigurationFileDeserialization {
                path: path.to_display(),
                source,
            }
        })?;
        logging::debug!("Configuration loaded from {}", path.to_display());
        Ok(Some(result))
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct StoreConfiguration {
    pub region: Option<String>,
    pub language: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct DisplayConfiguration {
    pub no_color: Option<bool>,
}
