//! fxhist CLI - convert USD amounts using historical central-bank rates
//!
//! ## Example Usage
//!
//! ```bash
//! # Convert 1500 USD to PLN on a given date
//! fxhist convert 1500 PLN 2025-01-18
//!
//! # List available currencies and their coverage
//! fxhist list
//!
//! # Point at a custom rates directory and widen the lookback window
//! fxhist convert 99.95 EUR 01/15/2025 --rates-dir ./rates --lookback-days 45
//! ```
//!
//! Results are printed as JSON on stdout; the exit code is 0 on success and
//! 1 when the conversion fails.

use clap::{Parser, Subcommand};
use colored::Colorize;
use fxhist::convert::{convert_usd, Conversion};
use fxhist::currency::Currency;
use fxhist::error::{FxError, Result as FxResult};
use fxhist::loader::load_registry;
use fxhist::lookup::{parse_date, resolve, LookupPolicy, DEFAULT_LOOKBACK_DAYS};
use fxhist::registry::RateRegistry;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// fxhist: historical USD currency conversion
#[derive(Parser)]
#[command(name = "fxhist")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert USD to foreign currencies using historical exchange rates", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory containing exchange rate CSV files
    #[arg(long, global = true)]
    rates_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a USD amount to a target currency
    Convert {
        /// Amount in USD
        #[arg(value_name = "AMOUNT", allow_hyphen_values = true)]
        amount: f64,

        /// Target currency code (EUR, PLN, AUD)
        #[arg(value_name = "CURRENCY")]
        currency: String,

        /// Date for conversion (YYYY-MM-DD, MM/DD/YYYY, or DD-MM-YYYY)
        #[arg(value_name = "DATE")]
        date: String,

        /// Maximum days to search backwards for a rate
        #[arg(long)]
        lookback_days: Option<i64>,
    },

    /// List available currencies and their date ranges
    List,
}

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Config {
    #[serde(default = "default_rates_dir")]
    rates_dir: PathBuf,
    #[serde(default = "default_lookback_days")]
    lookback_days: i64,
}

fn default_rates_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".fxhist")
        .join("rates")
}

fn default_lookback_days() -> i64 {
    DEFAULT_LOOKBACK_DAYS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rates_dir: default_rates_dir(),
            lookback_days: default_lookback_days(),
        }
    }
}

impl Config {
    fn load(path: Option<&Path>) -> Self {
        if let Some(config_path) = path {
            if config_path.exists() {
                match fs::read_to_string(config_path) {
                    Ok(contents) => match toml::from_str(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            eprintln!("{} Failed to parse config: {}", "Warning:".yellow(), e);
                        }
                    },
                    Err(e) => {
                        eprintln!("{} Failed to read config: {}", "Warning:".yellow(), e);
                    }
                }
            }
        } else if let Some(home) = dirs::home_dir() {
            let default_config = home.join(".fxhist").join("config.toml");
            if default_config.exists() {
                if let Ok(contents) = fs::read_to_string(&default_config) {
                    if let Ok(config) = toml::from_str(&contents) {
                        return config;
                    }
                }
            }
        }

        Config::default()
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref());
    let rates_dir = cli.rates_dir.clone().unwrap_or(config.rates_dir.clone());

    if cli.verbose {
        eprintln!("{} v{}", "fxhist".cyan().bold(), env!("CARGO_PKG_VERSION"));
        eprintln!(
            "Rates dir: {}",
            rates_dir.display().to_string().dimmed()
        );
    }

    let registry = match load_registry(&rates_dir) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("{} Failed to load rate data: {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Convert {
            amount,
            currency,
            date,
            lookback_days,
        } => {
            let policy = LookupPolicy::with_lookback(
                lookback_days.unwrap_or(config.lookback_days),
            );
            run_convert(&registry, amount, &currency, &date, policy)
                .and_then(|conversion| print_conversion(&conversion))
        }
        Commands::List => print_listing(&registry),
    };

    if let Err(e) = result {
        match print_error(&e) {
            Ok(()) => process::exit(1),
            Err(io) => {
                eprintln!("{} {}", "Error:".red().bold(), io);
                process::exit(1);
            }
        }
    }
}

/// Resolve and convert a single request against the loaded registry
fn run_convert(
    registry: &RateRegistry,
    amount: f64,
    currency: &str,
    date: &str,
    policy: LookupPolicy,
) -> FxResult<Conversion> {
    let currency = Currency::from_code(currency).ok_or_else(|| FxError::UnsupportedCurrency {
        requested: currency.to_string(),
        available: registry.supported_codes(),
    })?;

    let requested = parse_date(date)?;
    let resolved = resolve(registry, currency, requested, policy)?;
    convert_usd(amount, &resolved)
}

fn print_conversion(conversion: &Conversion) -> FxResult<()> {
    let mut payload = serde_json::to_value(conversion)?;
    payload["status"] = json!("success");
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn print_listing(registry: &RateRegistry) -> FxResult<()> {
    let mut currencies = serde_json::Map::new();
    for coverage in registry.coverage() {
        currencies.insert(
            coverage.currency.code().to_string(),
            json!({
                "earliest_date": coverage.earliest_date,
                "latest_date": coverage.latest_date,
                "total_days": coverage.total_days,
            }),
        );
    }

    let payload = json!({
        "status": "success",
        "currencies": currencies,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

/// Emit a structured error payload on stdout
///
/// User-correctable failures carry remediation context: the supported
/// currency list for unknown currencies, the available date range for
/// out-of-range dates.
fn print_error(err: &FxError) -> FxResult<()> {
    let mut payload = json!({
        "status": "error",
        "error": err.to_string(),
    });

    match err {
        FxError::UnsupportedCurrency {
            requested,
            available,
        } => {
            payload["requested_currency"] = json!(requested);
            payload["available_currencies"] = json!(available);
        }
        FxError::NoRateFound {
            currency,
            requested,
            earliest,
            latest,
            ..
        } => {
            payload["currency"] = json!(currency);
            payload["requested_date"] = json!(requested);
            payload["earliest_date"] = json!(earliest);
            payload["latest_date"] = json!(latest);
        }
        FxError::InvalidDate(raw) => {
            payload["requested_date"] = json!(raw);
        }
        _ => {}
    }

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
