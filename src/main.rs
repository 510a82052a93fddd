use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use payg_engine::api::{AppState, create_router};
use payg_engine::calculation::TaxCalculator;
use payg_engine::config::{CalculatorSettings, ConfigLoader, SampleSettings};
use payg_engine::error::EngineError;
use payg_engine::report::{batch_report, compact_report};
use payg_engine::sample::generate_from_settings;

/// Australian income tax, PAYG withholding and superannuation calculator.
#[derive(Parser, Debug)]
#[command(name = "payg")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing calculator.yaml
    #[arg(short, long, default_value = "./config")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the configured demonstration batch and print both report formats
    Demo {
        /// Print JSON instead of text reports
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Calculate breakdowns for the given weekly amounts
    Calculate {
        /// Weekly amounts, one per employee
        #[arg(required = true, allow_negative_numbers = true)]
        amounts: Vec<Decimal>,

        /// Treat amounts as base salary with super paid on top
        #[arg(long, default_value_t = false)]
        exclude_super: bool,

        /// Override the configured superannuation rate
        #[arg(long)]
        super_rate: Option<Decimal>,

        /// Print JSON instead of text reports
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Generate reproducible sample weekly salaries
    Sample {
        /// Number of salaries to generate
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Mean weekly salary
        #[arg(long)]
        mean: Option<f64>,

        /// Standard deviation of weekly salary
        #[arg(long)]
        std_dev: Option<f64>,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Also run the salaries through the calculator and print the report
        #[arg(long, default_value_t = false)]
        report: bool,
    },

    /// Serve the HTTP API
    Serve {
        /// Override the configured bind address
        #[arg(long)]
        bind: Option<String>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads settings, falling back to built-in defaults when the file is absent.
fn load_settings(dir: &Path) -> Result<CalculatorSettings> {
    match ConfigLoader::load(dir) {
        Ok(loader) => {
            info!(path = %dir.display(), "Loaded configuration");
            Ok(loader.into_settings())
        }
        Err(EngineError::ConfigNotFound { path }) => {
            warn!(path = %path, "Configuration not found, using defaults");
            Ok(CalculatorSettings::default())
        }
        Err(err) => Err(err).context("Failed to load configuration"),
    }
}

fn print_results(
    calculator: &TaxCalculator,
    amounts: &[Decimal],
    include_super: bool,
    json: bool,
) -> Result<()> {
    let results = calculator.process_batch(amounts, include_super);

    if json {
        let response = payg_engine::api::BatchResponse::from_results(results);
        let body =
            serde_json::to_string_pretty(&response).context("Failed to serialize results")?;
        println!("{}", body);
        return Ok(());
    }

    println!("{}", batch_report(&results, calculator.super_rate()));
    println!("{}", "=".repeat(80));
    println!("COMPACT OUTPUT FORMAT");
    println!("{}", "=".repeat(80));
    print!("{}", compact_report(&results));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    let settings = load_settings(&args.config)?;

    match args.command {
        Command::Demo { json } => {
            let calculator =
                TaxCalculator::from_settings(&settings).context("Invalid superannuation rate")?;
            let amounts = &settings.demo.weekly_amounts;
            info!(employees = amounts.len(), "Running demonstration batch");
            print_results(&calculator, amounts, settings.include_super_in_amount, json)?;
        }
        Command::Calculate {
            amounts,
            exclude_super,
            super_rate,
            json,
        } => {
            let calculator = TaxCalculator::new(super_rate.unwrap_or(settings.super_rate))
                .context("Invalid superannuation rate")?;
            let include_super = !exclude_super && settings.include_super_in_amount;
            print_results(&calculator, &amounts, include_super, json)?;
        }
        Command::Sample {
            count,
            mean,
            std_dev,
            seed,
            report,
        } => {
            let defaults = &settings.sample;
            let sample = SampleSettings {
                count: count.unwrap_or(defaults.count),
                mean: mean.unwrap_or(defaults.mean),
                std_dev: std_dev.unwrap_or(defaults.std_dev),
                seed: seed.unwrap_or(defaults.seed),
            };
            let amounts =
                generate_from_settings(&sample).context("Failed to generate sample salaries")?;

            println!("Weekly Salaries: {:?}", amounts);

            if report {
                let calculator = TaxCalculator::from_settings(&settings)
                    .context("Invalid superannuation rate")?;
                print_results(&calculator, &amounts, settings.include_super_in_amount, false)?;
            }
        }
        Command::Serve { bind } => {
            let state = AppState::from_settings(settings).context("Invalid configuration")?;
            let address = bind.unwrap_or_else(|| state.settings().server.bind_address.clone());
            let router = create_router(state);

            let listener = tokio::net::TcpListener::bind(&address)
                .await
                .with_context(|| format!("Failed to bind {}", address))?;
            info!(address = %address, "Serving PAYG API");

            axum::serve(listener, router)
                .await
                .context("Server error")?;
        }
    }

    Ok(())
}
