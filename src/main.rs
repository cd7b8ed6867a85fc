use std::process;

use clap::Parser;

use steam_pricer::commands::check::check;
use steam_pricer::configuration::cli::Args;
use steam_pricer::configuration::{self, Configuration};
use steam_pricer::errors::{Advice, EnvironmentError, PricerError};
use steam_pricer::interactive;
use steam_pricer::logging::{self, Verbosity};

#[tokio::main]
async fn main() -> Result<(), PricerError> {
    let args = Args::parse();
    let verbosity = Verbosity::new(args.verbose, args.quiet);
    logging::init(args.json, verbosity);

    if let Err(e) = run(args).await {
        let mut advice = None;
        if let Verbosity::Normal = verbosity {
            if let Some(adv) = e.advice() {
                advice = Some(adv)
            }
        }

        let any_err = anyhow::Error::from(e);
        logging::err(any_err);

        if let Some(adv) = advice {
            logging::println_stderr("");
            logging::println_stderr(&adv.to_string())
        }

        process::exit(1);
    }
    Ok(())
}

async fn run(args: Args) -> Result<(), PricerError> {
    let cfg = configuration::get(&args)?;

    if args.force_color {
        colored::control::set_override(true);
    } else if let Some(no_color) =
        cfg.no_color()
            .map_err(|source| EnvironmentError::ConfigurationOptionLoading {
                option_name: "no_color".to_string(),
                source,
            })?
    {
        if no_color {
            colored::control::set_override(false);
        }
    }

    let file = match &args.file {
        Some(file) => file.clone(),
        None => match interactive::prompt_identifiers_file()? {
            Some(file) => file,
            None => return Ok(()),
        },
    };

    check(&file, &cfg, !args.json).await
}
