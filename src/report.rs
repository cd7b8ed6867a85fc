use std::sync::Arc;

use colored::ColoredString;
use indicatif::ProgressBar;
use serde::Serialize;

use crate::display::Display;
use crate::fetcher::PriceFetcher;
use crate::logging::{Diagnostics, Level, Message, Stdout, Verbosity};
use crate::model::common::{Identified, Named};
use crate::model::prices::{AppId, FetchOutcome, Locale, Price, PriceRecord};

pub const DEFAULT_CURRENCY: &str = "EUR";

const SEPARATOR_WIDTH: usize = 50;

/// Result of one batch: the outcomes in input order, both totals and the rendered report.
///
/// Totals are exact sums of cents, so their two-decimal rendering never rounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub entries: Vec<FetchOutcome>,
    pub total_original: Price,
    pub total_current: Price,
    pub currency: String,
    #[serde(skip)]
    pub text: String,
}

impl Message for Summary {
    fn standard(&self, _: Verbosity) -> ColoredString {
        ColoredString::from(self.text.trim_end())
    }
}

impl Stdout for Summary {}

pub struct PriceAggregator {
    fetcher: Arc<dyn PriceFetcher>,
    locale: Locale,
    diagnostics: Arc<dyn Diagnostics>,
    progress: ProgressBar,
}

impl PriceAggregator {
    pub fn new(
        fetcher: Arc<dyn PriceFetcher>,
        locale: Locale,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Self {
        Self {
            fetcher,
            locale,
            diagnostics,
            progress: ProgressBar::hidden(),
        }
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Fetches every identifier in order and folds the outcomes into the report.
    ///
    /// Entries that are not plain decimal identifiers are skipped. A failed
    /// identifier only adds an error line; the batch always runs to the end.
    pub async fn summarize<S: AsRef<str>>(&self, identifiers: &[S]) -> Summary {
        let ids: Vec<AppId> = identifiers
            .iter()
            .filter_map(|line| {
                let id = AppId::parse_line(line.as_ref());
                if id.is_none() {
                    self.diagnostics.record(
                        Level::Trace,
                        &format!("Ignored input entry '{}'", line.as_ref()),
                    );
                }
                id
            })
            .collect();

        self.progress.set_length(ids.len() as u64);
        let mut entries = Vec::with_capacity(ids.len());
        for id in ids {
            self.progress.set_message(format!("AppID {}", id));
            entries.push(self.fetcher.fetch(id, &self.locale).await);
            self.progress.inc(1);
        }
        self.progress.finish_and_clear();

        let summary = Summary::from(entries);
        self.diagnostics.record(
            Level::Info,
            &format!(
                "{} identifier(s) processed, {} {} without discount, {} {} with discount",
                summary.entries.len(),
                summary.total_original.to_display(),
                summary.currency,
                summary.total_current.to_display(),
                summary.currency
            ),
        );
        summary
    }
}

impl From<Vec<FetchOutcome>> for Summary {
    fn from(entries: Vec<FetchOutcome>) -> Self {
        let mut total_original = Price::ZERO;
        let mut total_current = Price::ZERO;
        let mut currency = None;
        let mut text = String::new();

        for entry in &entries {
            match entry {
                FetchOutcome::Failed { id, message } => {
                    text += format!("AppID {}: error - {}\n", id, message).as_str();
                }
                FetchOutcome::Unpriced { title, id } => {
                    text += format!("{} (AppID {}): no price available\n", title, id).as_str();
                }
                FetchOutcome::Priced(record) => {
                    if currency.is_none() {
                        currency = record.currency.clone();
                    }
                    text += format!("\n🎮 {}\n", record.name()).as_str();
                    text += price_lines(record, "  ").as_str();
                    total_original = total_original + record.original;
                    total_current = total_current + record.current;

                    for add_on in &record.add_ons {
                        text += format!("    🧩 DLC - {}\n", add_on.name()).as_str();
                        text += price_lines(add_on, "      ").as_str();
                        total_original = total_original + add_on.original;
                        total_current = total_current + add_on.current;
                    }
                }
            }
        }

        let currency = currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        text += format!("\n{}\n", "=".repeat(SEPARATOR_WIDTH)).as_str();
        text += format!(
            "💰 Total without discount: {} {}\n",
            total_original.to_display(),
            currency
        )
        .as_str();
        text += format!(
            "💸 Total with discount: {} {}\n",
            total_current.to_display(),
            currency
        )
        .as_str();

        Self {
            entries,
            total_original,
            total_current,
            currency,
            text,
        }
    }
}

impl Summary {
    pub fn priced_ids(&self) -> Vec<AppId> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                FetchOutcome::Priced(record) => Some(record.id()),
                _ => None,
            })
            .collect()
    }
}

fn price_lines(record: &PriceRecord, indent: &str) -> String {
    let currency = record.currency.as_deref().unwrap_or(DEFAULT_CURRENCY);
    format!(
        "{indent}Original price: {} {currency}\n{indent}Current price: {} {currency} (-{}%)\n",
        record.original.to_display(),
        record.current.to_display(),
        record.discount_percent
    )
}
