use clap::Parser;
use dexter::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "dexter", about = "A terminal Pokédex")]
struct Args {
    /// Base URL of the remote data source
    #[arg(long)]
    base_url: Option<String>,

    /// Summary records per list page
    #[arg(short, long)]
    limit: Option<u32>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to dexter.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("dexter.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {e}");
        Default::default()
    });
    let resolved = config::resolve(&file_config, args.base_url.as_deref(), args.limit);

    log::info!(
        "Dexter starting up (base_url: {}, page_limit: {})",
        resolved.base_url,
        resolved.page_limit
    );

    dexter::tui::run(resolved)
}
