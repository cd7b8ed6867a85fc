use crate::api::storefront::DEFAULT_BASE_URL;
use crate::configuration::{Configuration, ConfigurationError};

pub struct DefaultConfiguration;

impl Configuration for DefaultConfiguration {
    fn region(&self) -> Result<String, ConfigurationError> {
        Ok("fr".to_string())
    }

    fn language(&self) -> Result<String, ConfigurationError> {
        Ok("fr".to_string())
    }

    fn base_api_url(&self) -> Result<String, ConfigurationError> {
        Ok(DEFAULT_BASE_URL.to_string())
    }

    fn no_color(&self) -> Result<Option<bool>, ConfigurationError> {
        Ok(None)
    }
}
