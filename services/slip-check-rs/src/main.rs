use clap::Parser;
use dotenvy::dotenv;
use slip_check::{check_slip, Config, ErrorReport, TesseractExtractor};
use std::{path::PathBuf, process::ExitCode};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Score a payment slip image against the amount the customer claims to have paid.
#[derive(Parser, Debug)]
#[command(name = "slip-check", version)]
struct Args {
    /// Path to the slip image
    #[arg(long)]
    image: PathBuf,

    /// Claimed amount, thousands separators allowed (e.g. "25,000")
    #[arg(long)]
    amount: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    dotenv().ok();
    // stdout is reserved for the JSON record
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load()?;
    let extractor = TesseractExtractor::new(config.tesseract_bin);

    match check_slip(&args.image, args.amount.as_deref(), &extractor) {
        Ok(outcome) => {
            println!("{}", outcome.to_json()?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("slip check failed: {}", e);
            println!("{}", serde_json::to_string(&ErrorReport::from(&e))?);
            Ok(ExitCode::FAILURE)
        }
    }
}
