use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use stargauge::analysis::detect::WhatlangDetector;
use stargauge::analysis::profanity::{self, WordListFilter};
use stargauge::analysis::sentiment::LexiconScorer;
use stargauge::analysis::translate::GoogleTranslator;
use stargauge::config::Config;
use stargauge::pipeline::RatingPipeline;

/// Stargauge: star ratings for free-text reviews.
///
/// Serves one endpoint: POST /rate takes review text in any language
/// and returns a 1-5 star rating, or rejects the review for profanity.
#[derive(Parser)]
#[command(name = "stargauge", version, about)]
struct Cli {
    /// Address to bind (overrides STARGAUGE_BIND)
    #[arg(long)]
    bind: Option<String>,

    /// Port to listen on (overrides STARGAUGE_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("stargauge=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let bind = cli.bind.unwrap_or_else(|| config.bind.clone());
    let port = cli.port.unwrap_or(config.port);

    // Parse the embedded profanity word list before accepting traffic.
    profanity::preload();

    let translator = GoogleTranslator::new(
        &config.translate_url,
        Duration::from_secs(config.http_timeout_secs),
    )?;

    let pipeline = RatingPipeline::new(
        Box::new(WhatlangDetector),
        Box::new(translator),
        Box::new(LexiconScorer::new()),
        Box::new(WordListFilter::new()),
    );

    println!("{}", "Stargauge review rating service".bold());
    println!("  Translation endpoint: {}", config.translate_url);
    println!("  POST http://{bind}:{port}/rate");

    stargauge::web::run_server(Arc::new(pipeline), &bind, port).await
}
