//! Bourse CLI
//!
//! Reduces money expressions against the configured exchange rates and runs
//! the string calculator.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bourse_core::calculator::{self, StringCalculator};
use bourse_core::money::{Bank, Expression, Money, MoneyError};
use bourse_shared::{AppConfig, Currency};

#[derive(Parser)]
#[command(name = "bourse", about = "Money expressions and exchange-rate reduction")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sum amounts and reduce them to one currency (negative amounts go after `--`)
    Reduce {
        /// Currency to reduce into, e.g. USD
        target: Currency,
        /// Amounts such as 5USD or "10 CHF"
        #[arg(required = true)]
        amounts: Vec<Money>,
        /// Scale the whole sum before reducing
        #[arg(long)]
        times: Option<i64>,
    },

    /// Print the registered rate for a currency pair
    Rate {
        /// Source currency
        from: Currency,
        /// Target currency
        to: Currency,
    },

    /// Sum delimited positive integers (`\n` escapes accepted)
    Add {
        /// Input such as "1,2\n3" or "//;\n1;2"
        input: String,
        /// Replace the default `,` and newline delimiters
        #[arg(long)]
        delimiters: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let bank = build_bank(&config)?;
    let output = run(&bank, cli.command)?;
    println!("{output}");
    Ok(())
}

fn build_bank(config: &AppConfig) -> anyhow::Result<Bank> {
    let bank = Bank::from_config(&config.bank).context("Invalid [[bank.rates]] configuration")?;
    info!(rates = bank.len(), "Bank configured");
    Ok(bank)
}

fn run(bank: &Bank, command: Commands) -> anyhow::Result<String> {
    match command {
        Commands::Reduce {
            target,
            amounts,
            times,
        } => reduce(bank, target, amounts, times),
        Commands::Rate { from, to } => Ok(bank.rate(from, to).map_err(explain)?.to_string()),
        Commands::Add { input, delimiters } => add(&input, delimiters.as_deref()),
    }
}

fn reduce(
    bank: &Bank,
    target: Currency,
    amounts: Vec<Money>,
    times: Option<i64>,
) -> anyhow::Result<String> {
    let mut expression = amounts
        .into_iter()
        .map(Expression::from)
        .reduce(|sum, addend| sum.plus(addend))
        .context("reduce needs at least one amount")?;

    if let Some(multiplier) = times {
        expression = expression.times(multiplier)?;
    }

    let result = bank.reduce(&expression, target).map_err(explain)?;
    info!(%expression, %result, "Expression reduced");
    Ok(result.to_string())
}

fn add(input: &str, delimiters: Option<&str>) -> anyhow::Result<String> {
    // Shells make a literal newline awkward to pass, so accept `\n` escapes.
    let input = input.replace("\\n", "\n");
    let sum = match delimiters {
        Some(delimiters) => StringCalculator::with_delimiters(delimiters.chars()).add(&input)?,
        None => calculator::add(&input)?,
    };
    Ok(sum.to_string())
}

/// Adds a fix-it hint to errors that only a rate table change can resolve.
fn explain(err: MoneyError) -> anyhow::Error {
    if err.is_configuration_error() {
        anyhow::Error::new(err)
            .context("exchange rates are incomplete; register the pair under [[bank.rates]]")
    } else {
        anyhow::Error::new(err)
    }
}
