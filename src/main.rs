//! Pixmon main entry point

use clap::Parser;
use pixmon_api::start_server;
use pixmon_config::Config;
use pixmon_core::Monitor;
use pixmon_store::{JsonFileStore, SampleStore, StoreRef};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;

#[derive(Parser, Debug)]
#[command(name = "pixmon")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight municipal PIX monitoring dashboard", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let rt = Runtime::new()?;

    rt.block_on(async {
        let config = Config::load_or_default(args.config.clone())
            .expect("Failed to load configuration");

        log::info!(
            "Config loaded: data path={}, sample data={}",
            config.data.path.display(),
            config.data.use_sample_data
        );

        let store: StoreRef = if config.data.path.exists() {
            Arc::new(JsonFileStore::new(
                config.data.path.clone(),
                config.data.use_sample_data,
            ))
        } else if config.data.use_sample_data {
            log::warn!(
                "Data directory {} not found, serving built-in sample data",
                config.data.path.display()
            );
            Arc::new(SampleStore)
        } else {
            log::warn!(
                "Data directory {} not found and sample data disabled, collections load empty",
                config.data.path.display()
            );
            Arc::new(JsonFileStore::new(config.data.path.clone(), false))
        };

        let monitor = Arc::new(RwLock::new(Monitor::new(config.clone(), store)));

        {
            let mut guard = monitor.write().await;
            match guard.load().await {
                Ok(_) => log::info!("Snapshot loaded successfully"),
                Err(e) => log::error!("Failed to load snapshot: {}", e),
            }
        }

        start_server(config, monitor).await
    });

    Ok(())
}
