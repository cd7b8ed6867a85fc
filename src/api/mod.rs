use async_trait::async_trait;
use thiserror::Error;

use crate::model::prices::{AppId, Locale};

use self::storefront::AppDetails;

#[cfg(test)]
pub mod mocks;
pub mod storefront;

#[derive(Debug, Error)]
pub enum APIError {
    #[error("request to '{url}' failed: {source}")]
    RequestFailure { url: String, source: reqwest::Error },
    #[error("could not parse storefront response for AppID {id}: {source}")]
    ParseFailure {
        id: AppId,
        source: serde_json::Error,
    },
    #[error("storefront response does not contain AppID {id}")]
    MissingEntry { id: AppId },
    #[error("could not build request URL for AppID {id}: {source}")]
    InvalidURL { id: AppId, source: url::ParseError },
}

/// Loads the storefront details of a single application.
#[async_trait]
pub trait AppDetailsLoader: Send + Sync {
    async fn get_app_details(&self, id: AppId, locale: &Locale) -> Result<AppDetails, APIError>;
}
