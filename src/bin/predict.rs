use anyhow::{Context, Result};
use clap::Parser;
use salescast::application::ml::{SalesPredictor, SmartcoreSalesModel};
use salescast::config::DataEnvConfig;
use salescast::domain::formatting::format_currency;
use salescast::domain::ml::SalesFeatures;
use salescast::domain::ports::SalesModel;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Predict daily sales from the six dashboard inputs", long_about = None)]
struct Args {
    /// Path to the model artifact (defaults to MODEL_PATH / DATA_DIR)
    #[arg(long)]
    model: Option<PathBuf>,

    /// Units ordered
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..=200))]
    quantity: u32,

    /// Profit in dollars (may be negative)
    #[arg(long, default_value_t = 500.0, allow_hyphen_values = true)]
    profit: f64,

    /// Discount rate between 0.0 and 1.0
    #[arg(long, default_value_t = 0.1, value_parser = parse_discount)]
    discount: f64,

    /// Month of the year (1-12)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: u32,

    /// Day of the month (1-31)
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..=31))]
    day: u32,

    /// Day of the week, 0 = Monday (0-6)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=6))]
    day_of_week: u32,
}

fn parse_discount(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("discount must be between 0.0 and 1.0, got {}", value))
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    let model_path = match args.model {
        Some(path) => path,
        None => DataEnvConfig::from_lookup(|key| std::env::var(key).ok()).model_path,
    };

    let model = SmartcoreSalesModel::new(model_path.clone());
    if !model.is_loaded() {
        anyhow::bail!("No usable sales model at {:?}", model_path);
    }

    let predictor = SalesPredictor::new(Arc::new(model));
    let features = SalesFeatures::new(
        args.quantity as f64,
        args.profit,
        args.discount,
        args.month as f64,
        args.day as f64,
        args.day_of_week as f64,
    );

    info!("Predicting with {:?}", features);
    let prediction = predictor
        .predict(&features)
        .context("Sales prediction failed")?;

    println!("Predicted Sales: {}", format_currency(prediction));
    Ok(())
}
