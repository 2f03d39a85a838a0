mod config;

use config::AppConfig;
use env_logger::Env;
use log::info;
use sportsdb::SportsDbClient;
use std::sync::Arc;
use web::{LineupAppData, LineupServer};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let config = AppConfig::from_env();

    let host = hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "localhost".to_string());

    info!(
        "lineup builder on {}: player search via {} (debounce {} ms)",
        host,
        config.sportsdb.base_url,
        config.debounce.as_millis()
    );

    let client = SportsDbClient::new(&config.sportsdb)?;

    let data = LineupAppData::new(
        Arc::new(client),
        config.debounce,
        config.show_search_errors,
    );

    LineupServer::new(data, config.port).run().await?;

    Ok(())
}
