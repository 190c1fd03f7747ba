use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rental_quote::format::{format_duration, format_receipt, price_label};
use rental_quote::{
    quote_or_unavailable, quote_rental_with_options, rental_duration_or_default,
    rental_duration_with_options, Clock, FixedClock, PriceQuote, QuoteOptions, Rates,
    RentalDuration, SystemClock,
};
use serde::Serialize;

mod config;
mod logging;

#[derive(Parser)]
#[command(name = "rentquote", version, about = "Quote vehicle rentals from date-range strings")]
struct Cli {
    /// Log resolved ranges and pricing steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Price a rental range
    Quote {
        #[command(flatten)]
        input: InputArgs,

        /// Daily rate in VND
        #[arg(long)]
        daily_rate: u64,

        /// Hourly rate in VND (default: daily rate / 24, rounded up)
        #[arg(long)]
        hourly_rate: Option<u64>,

        /// Minimum billable hours (overrides the config file)
        #[arg(long)]
        min_hours: Option<u32>,
    },
    /// Show the display duration of a rental range
    Duration {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// e.g. "Nov 13 | 6:00 AM - Nov 19 | 9:00 AM" or "13 Thg 11 | 6:00 SA - 19 Thg 11 | 9:00 SA"
    range: String,

    /// Pin "today" for year inference instead of reading the system clock
    #[arg(long, value_name = "YYYY-MM-DD")]
    today: Option<NaiveDate>,

    /// TOML file with quote options
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Fail on an unparseable range instead of falling back
    #[arg(long)]
    strict: bool,
}

impl InputArgs {
    fn clock(&self) -> Box<dyn Clock> {
        match self.today {
            Some(date) => Box::new(FixedClock(date)),
            None => Box::new(SystemClock),
        }
    }
}

#[derive(Serialize)]
struct QuoteReport {
    label: String,
    quote: Option<PriceQuote>,
}

#[derive(Serialize)]
struct DurationReport {
    label: String,
    duration: RentalDuration,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    match cli.command {
        Command::Quote {
            input,
            daily_rate,
            hourly_rate,
            min_hours,
        } => {
            let mut options = config::load_options(input.config.as_deref())?;
            if let Some(hours) = min_hours {
                options.minimum_charge_hours = hours;
            }
            let rates = Rates {
                daily: daily_rate,
                hourly: hourly_rate,
            };
            run_quote(&input, rates, &options)
        }
        Command::Duration { input } => {
            let options = config::load_options(input.config.as_deref())?;
            run_duration(&input, &options)
        }
    }
}

fn run_quote(input: &InputArgs, rates: Rates, options: &QuoteOptions) -> Result<()> {
    let clock = input.clock();
    tracing::debug!(?options, ?rates, "quoting");

    let quote = if input.strict {
        let quote = quote_rental_with_options(&input.range, rates, &*clock, options)
            .with_context(|| format!("cannot quote '{}'", input.range))?;
        Some(quote)
    } else {
        quote_or_unavailable(&input.range, rates, &*clock, options)
    };

    let report = QuoteReport {
        label: price_label(quote.as_ref(), rates),
        quote,
    };
    if input.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match &report.quote {
            Some(q) => println!("{}", format_receipt(q)),
            None => println!("{}", report.label),
        }
    }
    Ok(())
}

fn run_duration(input: &InputArgs, options: &QuoteOptions) -> Result<()> {
    let clock = input.clock();

    let duration = if input.strict {
        rental_duration_with_options(&input.range, &*clock, options)
            .with_context(|| format!("cannot measure '{}'", input.range))?
    } else {
        rental_duration_or_default(&input.range, &*clock, options)
    };

    let report = DurationReport {
        label: format_duration(&duration),
        duration,
    };
    if input.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.label);
    }
    Ok(())
}
