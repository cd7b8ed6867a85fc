use std::collections::HashMap;
use std::sync::Mutex;

use super::storefront::{AppData, PriceOverview};
use super::*;

#[derive(Clone)]
enum MockResponse {
    Details(AppDetails),
    Malformed,
}

pub struct MockStorefrontBuilder {
    responses: HashMap<AppId, MockResponse>,
}

impl MockStorefrontBuilder {
    pub fn new() -> Self {
        Self {
            responses: HashMap::default(),
        }
    }

    pub fn with_priced(
        mut self,
        id: u64,
        name: &str,
        initial: u64,
        final_price: u64,
        discount_percent: u8,
        dlc: Vec<u64>,
    ) -> Self {
        self.responses.insert(
            AppId::new(id),
            MockResponse::Details(AppDetails {
                success: true,
                data: Some(AppData {
                    name: name.to_string(),
                    price_overview: Some(PriceOverview {
                        currency: Some("EUR".to_string()),
                        initial,
                        final_price,
                        discount_percent,
                    }),
                    dlc,
                }),
            }),
        );
        self
    }

    pub fn with_unpriced(mut self, id: u64, name: &str, dlc: Vec<u64>) -> Self {
        self.responses.insert(
            AppId::new(id),
            MockResponse::Details(AppDetails {
                success: true,
                data: Some(AppData {
                    name: name.to_string(),
                    price_overview: None,
                    dlc,
                }),
            }),
        );
        self
    }

    pub fn with_not_found(mut self, id: u64) -> Self {
        self.responses.insert(
            AppId::new(id),
            MockResponse::Details(AppDetails {
                success: false,
                data: None,
            }),
        );
        self
    }

    pub fn with_success_without_data(mut self, id: u64) -> Self {
        self.responses.insert(
            AppId::new(id),
            MockResponse::Details(AppDetails {
                success: true,
                data: None,
            }),
        );
        self
    }

    pub fn with_malformed(mut self, id: u64) -> Self {
        self.responses.insert(AppId::new(id), MockResponse::Malformed);
        self
    }

    pub fn build(self) -> MockStorefront {
        MockStorefront {
            responses: self.responses,
            calls: Mutex::new(Vec::new()),
        }
    }
}

pub struct MockStorefront {
    responses: HashMap<AppId, MockResponse>,
    calls: Mutex<Vec<(AppId, Locale)>>,
}

impl MockStorefront {
    pub fn calls(&self) -> Vec<(AppId, Locale)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AppDetailsLoader for MockStorefront {
    async fn get_app_details(&self, id: AppId, locale: &Locale) -> Result<AppDetails, APIError> {
        self.calls.lock().unwrap().push((id, locale.clone()));
        match self.responses.get(&id) {
            Some(MockResponse::Details(details)) => Ok(details.clone()),
            Some(MockResponse::Malformed) => {
                let source = serde_json::from_str::<serde_json::Value>("{\"broken\":")
                    .expect_err("truncated JSON must not parse");
                Err(APIError::ParseFailure { id, source })
            }
            None => Err(APIError::MissingEntry { id }),
        }
    }
}
