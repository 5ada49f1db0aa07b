use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use reel::core::config::{self, ReelConfig};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "reel", about = "Find movies you'll enjoy without the hassle")]
struct Args {
    /// Start with this search already typed in
    #[arg(short, long)]
    query: Option<String>,

    /// Do not read or write trending search counters
    #[arg(long)]
    no_trending: bool,

    /// Settings file to use instead of ~/.reel/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (settings, config_error) = match config::load_config(args.config.as_deref()) {
        Ok(settings) => (settings, None),
        Err(e) => (ReelConfig::default(), Some(e)),
    };
    let resolved = config::resolve(&settings, args.no_trending);

    // Initialize file logger - writes to reel.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = LevelFilter::from_str(&resolved.log_level).unwrap_or(LevelFilter::Debug);
    if let Ok(log_file) = File::create("reel.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::error!("Failed to load config, using defaults: {}", e);
    }
    log::info!(
        "Reel starting up (trending {})",
        if resolved.appwrite.is_some() { "on" } else { "off" }
    );

    reel::tui::run(resolved, args.query)
}
