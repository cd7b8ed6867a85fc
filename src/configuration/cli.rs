use std::path::PathBuf;

use clap::Parser;

use crate::configuration::{validate_language, validate_region, Configuration, ConfigurationError};

/// Steam Price Checker
///
/// Read AppIDs from a text file and report their storefront prices, DLC included, with and without the active discounts.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text file containing one AppID per line. Other lines are ignored. Asked interactively when omitted.
    #[clap(index = 1)]
    pub file: Option<PathBuf>,
    /// Storefront region, used for prices and currency (ex: fr, us, gb).
    #[arg(long)]
    pub region: Option<String>,
    /// Language of the titles returned by the storefront (ex: fr, english).
    #[arg(long)]
    pub language: Option<String>,
    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Generate the report as JSON output on stdout.
    #[arg(long)]
    pub json: bool,
    /// Disable all output formating options.
    #[arg(long)]
    pub no_color: bool,
    /// Force enabling formating options, useful in context where it wouldn't be supported (such as piping to another command).
    #[arg(long)]
    pub force_color: bool,
    /// Disable all logging and progress display.
    #[arg(short, long)]
    pub quiet: bool,
    /// Set verbosity level ('v', 'vv' or 'vvv')
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub struct CLIConfiguration<T: Configuration> {
    args: Args,
    default: T,
}

impl<T: Configuration> CLIConfiguration<T> {
    pub fn new(args: &Args, default: T) -> Self {
        CLIConfiguration {
            args: args.clone(),
            default,
        }
    }
}

impl<T: Configuration> Configuration for CLIConfiguration<T> {
    fn region(&self) -> Result<String, ConfigurationError> {
        if let Some(region) = &self.args.region {
            return validate_region(region, "argument '--region'");
        }
        self.default.region()
    }

    fn language(&self) -> Result<String, ConfigurationError> {
        if let Some(language) = &self.args.language {
            return validate_language(language, "argument '--language'");
        }
        self.default.language()
    }

    fn base_api_url(&self) -> Result<String, ConfigurationError> {
        self.default.base_api_url()
    }

    fn no_color(&self) -> Result<Option<bool>, ConfigurationError> {
        if self.args.no_color {
            return Ok(Some(true));
        }
        self.default.no_color()
    }
}
