use colored::{ColoredString, Colorize};
use thiserror::Error;

use crate::api::storefront::StorefrontInitError;
use crate::configuration::{self, ConfigurationInitializationError};
use crate::input::InputError;
use crate::logging::StdoutError;

pub trait Advice {
    fn advice(&self) -> Option<ColoredString>;
}

#[derive(Debug, Error)]
pub enum PricerError {
    #[error(transparent)]
    InputError(#[from] InputError),
    #[error(transparent)]
    EnvironmentError(#[from] EnvironmentError),
    #[error(transparent)]
    ConfigurationInitializationError(#[from] ConfigurationInitializationError),
    #[error(transparent)]
    StdoutError(#[from] StdoutError),
}

impl Advice for PricerError {
    fn advice(&self) -> Option<ColoredString> {
        match self {
            PricerError::InputError(InputError::ReadFile { .. }) => Some(
                "Check that the file exists and is readable. It should contain one AppID per line."
                    .yellow(),
            ),
            PricerError::ConfigurationInitializationError(_) => Some(
                "Fix or remove the configuration file, or point to another one with '--config'."
                    .yellow(),
            ),
            PricerError::EnvironmentError(EnvironmentError::StorefrontInitialization {
                ..
            }) => Some(
                "Check the storefront base URL ('STEAMPRICER_BASE_API_URL' or '[store] base_url')."
                    .yellow(),
            ),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum EnvironmentError {
    #[error("Error when reading input '{description}': {source}")]
    SpecificInputError {
        description: String,
        source: inquire::InquireError,
    },
    #[error("Could not load configuration '{option_name}': {source}")]
    ConfigurationOptionLoading {
        option_name: String,
        source: configuration::ConfigurationError,
    },
    #[error("Could not initialize storefront client: {source}")]
    StorefrontInitialization { source: StorefrontInitError },
}
