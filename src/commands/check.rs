use std::path::Path;
use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};

use crate::api::storefront::StorefrontClient;
use crate::configuration::Configuration;
use crate::display::Display;
use crate::errors::{EnvironmentError, PricerError};
use crate::fetcher::Fetcher;
use crate::input;
use crate::logging::{self, ConsoleDiagnostics, Verbosity};
use crate::model::prices::Locale;
use crate::report::PriceAggregator;

pub async fn check(
    file: &Path,
    cfg: &impl Configuration,
    show_progress: bool,
) -> Result<(), PricerError> {
    let identifiers = input::read_identifiers(file).await?;
    if identifiers.is_empty() {
        logging::warning!("No AppID found in {}", file.to_display());
    }

    let locale = Locale::new(
        &cfg.region().map_err(|source| EnvironmentError::ConfigurationOptionLoading {
            option_name: "region".to_string(),
            source,
        })?,
        &cfg.language()
            .map_err(|source| EnvironmentError::ConfigurationOptionLoading {
                option_name: "language".to_string(),
                source,
            })?,
    );
    let base_url = cfg
        .base_api_url()
        .map_err(|source| EnvironmentError::ConfigurationOptionLoading {
            option_name: "base_api_url".to_string(),
            source,
        })?;
    logging::info!(
        "Checking {} identifier(s) on {} (region: {}, language: {})",
        identifiers.len(),
        base_url,
        locale.region,
        locale.language
    );

    let client = StorefrontClient::new(&base_url)
        .map_err(|source| EnvironmentError::StorefrontInitialization { source })?;
    let diagnostics = Arc::new(ConsoleDiagnostics);
    let fetcher = Fetcher::new(Arc::new(client), diagnostics.clone());
    let mut aggregator = PriceAggregator::new(Arc::new(fetcher), locale, diagnostics);
    if show_progress && logging::get_verbosity() == Verbosity::Normal {
        aggregator = aggregator.with_progress(progress_bar());
    }

    let summary = aggregator.summarize(&identifiers).await;
    logging::stdoutln(summary)?;
    Ok(())
}

fn progress_bar() -> ProgressBar {
    let progress_bar = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
    {
        progress_bar.set_style(style.progress_chars("=>-"));
    }
    progress_bar
}
