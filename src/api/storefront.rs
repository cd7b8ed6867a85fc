use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::logging;
use crate::model::prices::{AppId, Locale};

use super::{APIError, AppDetailsLoader};

pub const DEFAULT_BASE_URL: &str = "https://store.steampowered.com/";

const APP_DETAILS_PATH: &str = "api/appdetails";

#[derive(Debug, Error)]
pub enum StorefrontInitError {
    #[error("invalid storefront base URL '{url}': {source}")]
    InvalidBaseURL {
        url: String,
        source: url::ParseError,
    },
    #[error("could not initialize HTTP client: {source}")]
    HTTPClientInit { source: reqwest::Error },
}

/// Entry of the `appdetails` response, keyed by the requested identifier.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppDetails {
    pub success: bool,
    pub data: Option<AppData>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppData {
    pub name: String,
    pub price_overview: Option<PriceOverview>,
    #[serde(default)]
    pub dlc: Vec<u64>,
}

/// Prices are integer cents, the discount an integer percentage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceOverview {
    pub currency: Option<String>,
    pub initial: u64,
    #[serde(rename = "final")]
    pub final_price: u64,
    pub discount_percent: u8,
}

pub struct StorefrontClient {
    client: Client,
    base_url: Url,
}

impl StorefrontClient {
    pub fn new(base_url: &str) -> Result<Self, StorefrontInitError> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url =
            Url::parse(&normalized).map_err(|source| StorefrontInitError::InvalidBaseURL {
                url: base_url.to_string(),
                source,
            })?;
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| StorefrontInitError::HTTPClientInit { source })?;
        Ok(Self { client, base_url })
    }

    fn app_details_url(&self, id: AppId, locale: &Locale) -> Result<Url, APIError> {
        let mut url = self
            .base_url
            .join(APP_DETAILS_PATH)
            .map_err(|source| APIError::InvalidURL { id, source })?;
        url.query_pairs_mut()
            .append_pair("appids", &id.to_string())
            .append_pair("cc", &locale.region)
            .append_pair("l", &locale.language);
        Ok(url)
    }
}

#[async_trait]
impl AppDetailsLoader for StorefrontClient {
    async fn get_app_details(&self, id: AppId, locale: &Locale) -> Result<AppDetails, APIError> {
        let url = self.app_details_url(id, locale)?;
        logging::trace!("GET {}", url);

        let body = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|source| APIError::RequestFailure {
                url: url.to_string(),
                source,
            })?
            .text()
            .await
            .map_err(|source| APIError::RequestFailure {
                url: url.to_string(),
                source,
            })?;

        parse_app_details(id, &body)
    }
}

pub fn parse_app_details(id: AppId, body: &str) -> Result<AppDetails, APIError> {
    let mut entries: HashMap<String, AppDetails> =
        serde_json::from_str(body).map_err(|source| APIError::ParseFailure { id, source })?;
    entries
        .remove(&id.to_string())
        .ok_or(APIError::MissingEntry { id })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_priced_app() {
        let body = r#"{"440":{"success":true,"data":{
            "type":"game","name":"Team Fortress 2","steam_appid":440,
            "price_overview":{"currency":"EUR","initial":1999,"final":999,"discount_percent":50,
                "initial_formatted":"19,99€","final_formatted":"9,99€"},
            "dlc":[1001,1002]}}}"#;

        let got = parse_app_details(AppId::new(440), body).unwrap();

        assert_eq!(
            got,
            AppDetails {
                success: true,
                data: Some(AppData {
                    name: "Team Fortress 2".to_string(),
                    price_overview: Some(PriceOverview {
                        currency: Some("EUR".to_string()),
                        initial: 1999,
                        final_price: 999,
                        discount_percent: 50,
                    }),
                    dlc: vec![1001, 1002],
                }),
            }
        );
    }

    #[test]
    fn test_parse_app_without_price_nor_dlc() {
        let body = r#"{"570":{"success":true,"data":{"name":"Dota 2","is_free":true}}}"#;

        let got = parse_app_details(AppId::new(570), body).unwrap();

        let data = got.data.unwrap();
        assert_eq!(data.name, "Dota 2");
        assert_eq!(data.price_overview, None);
        assert!(data.dlc.is_empty());
    }

    #[test]
    fn test_parse_unsuccessful_app() {
        let got = parse_app_details(AppId::new(1), r#"{"1":{"success":false}}"#).unwrap();
        assert_eq!(
            got,
            AppDetails {
                success: false,
                data: None
            }
        );
    }

    #[test]
    fn test_parse_missing_entry() {
        let got = parse_app_details(AppId::new(2), r#"{"1":{"success":false}}"#);
        assert!(matches!(got, Err(APIError::MissingEntry { .. })));
    }

    #[test]
    fn test_parse_malformed_body() {
        let got = parse_app_details(AppId::new(2), "null");
        assert!(matches!(got, Err(APIError::ParseFailure { .. })));

        let got = parse_app_details(AppId::new(2), r#"{"2":{"success":true,"data":{}}}"#);
        assert!(matches!(got, Err(APIError::ParseFailure { .. })));
    }

    #[test]
    fn test_app_details_url() {
        let client = StorefrontClient::new("http://localhost:1234").unwrap();
        let url = client
            .app_details_url(AppId::new(440), &Locale::new("us", "english"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:1234/api/appdetails?appids=440&cc=us&l=english"
        );

        let client = StorefrontClient::new("http://localhost:1234/store/").unwrap();
        let url = client
            .app_details_url(AppId::new(10), &Locale::default())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:1234/store/api/appdetails?appids=10&cc=fr&l=fr"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            StorefrontClient::new("not an url"),
            Err(StorefrontInitError::InvalidBaseURL { .. })
        ));
    }
}
