use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::api::storefront::{AppData, AppDetails};
use crate::api::{APIError, AppDetailsLoader};
use crate::logging::{Diagnostics, Level};
use crate::model::common::Named;
use crate::model::prices::{AppId, FetchOutcome, Locale, Price, PriceRecord};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("AppID {id} not found or access denied")]
    NotFound { id: AppId },
    #[error("storefront response for AppID {id} has no data")]
    MissingData { id: AppId },
    #[error(transparent)]
    API(#[from] APIError),
}

/// Resolves the priced state of one identifier.
///
/// Never fails: every transport, parse or lookup problem is folded into
/// [`FetchOutcome::Failed`] so a batch can carry on with the next identifier.
#[async_trait]
pub trait PriceFetcher: Send + Sync {
    async fn fetch(&self, id: AppId, locale: &Locale) -> FetchOutcome;
}

pub struct Fetcher {
    loader: Arc<dyn AppDetailsLoader>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl Fetcher {
    pub fn new(loader: Arc<dyn AppDetailsLoader>, diagnostics: Arc<dyn Diagnostics>) -> Self {
        Self {
            loader,
            diagnostics,
        }
    }

    async fn load(&self, id: AppId, locale: &Locale) -> Result<AppData, FetchError> {
        let details = self.loader.get_app_details(id, locale).await?;
        resolve(id, details)
    }

    async fn load_add_ons(&self, parent: &str, dlc: &[u64], locale: &Locale) -> Vec<PriceRecord> {
        if dlc.is_empty() {
            self.diagnostics
                .record(Level::Debug, &format!("No DLC for {}", parent));
            return Vec::new();
        }
        self.diagnostics.record(
            Level::Debug,
            &format!("{} DLC(s) found for {}", dlc.len(), parent),
        );

        let mut add_ons = Vec::new();
        for dlc_id in dlc.iter().copied().map(AppId::new) {
            // Unpriced and failed add-ons (usually delisted) stay out of the report.
            match self.load(dlc_id, locale).await {
                Ok(data) => match priced(dlc_id, &data) {
                    Some(record) => {
                        self.diagnostics
                            .record(Level::Debug, &format!("DLC added: {}", record.name()));
                        add_ons.push(record);
                    }
                    None => self.diagnostics.record(
                        Level::Debug,
                        &format!("DLC {} has no price (probably delisted)", dlc_id),
                    ),
                },
                Err(e) => self.diagnostics.record(
                    Level::Debug,
                    &format!("DLC {} of {} skipped: {}", dlc_id, parent, e),
                ),
            }
        }
        add_ons
    }
}

#[async_trait]
impl PriceFetcher for Fetcher {
    async fn fetch(&self, id: AppId, locale: &Locale) -> FetchOutcome {
        let data = match self.load(id, locale).await {
            Ok(data) => data,
            Err(e) => {
                self.diagnostics
                    .record(Level::Warn, &format!("AppID {}: {}", id, e));
                return FetchOutcome::Failed {
                    id,
                    message: e.to_string(),
                };
            }
        };
        self.diagnostics.record(
            Level::Debug,
            &format!("Fetched {} (AppID {})", data.name, id),
        );

        // An unpriced title carries no add-ons, so its DLC are not requested.
        let Some(record) = priced(id, &data) else {
            self.diagnostics
                .record(Level::Debug, &format!("No price found for {}", data.name));
            return FetchOutcome::Unpriced {
                title: data.name,
                id,
            };
        };

        let add_ons = self.load_add_ons(&data.name, &data.dlc, locale).await;
        FetchOutcome::Priced(record.with_add_ons(add_ons))
    }
}

fn resolve(id: AppId, details: AppDetails) -> Result<AppData, FetchError> {
    if !details.success {
        return Err(FetchError::NotFound { id });
    }
    details.data.ok_or(FetchError::MissingData { id })
}

fn priced(id: AppId, data: &AppData) -> Option<PriceRecord> {
    data.price_overview.as_ref().map(|p| {
        PriceRecord::new(
            id,
            &data.name,
            Price::from_cents(p.initial),
            Price::from_cents(p.final_price),
            p.discount_percent,
            p.currency.clone(),
        )
    })
}
