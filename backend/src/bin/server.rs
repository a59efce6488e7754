//! Festival schedule HTTP server.
//!
//! Loads `festival.toml`, seeds the registration store and serves the REST
//! API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin festival-server
//!
//! FESTIVAL_CONFIG=/etc/festival/festival.toml PORT=9000 cargo run --bin festival-server
//! ```
//!
//! # Environment Variables
//!
//! - `FESTIVAL_CONFIG`: Config file path (default: `festival.toml` lookup)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use festival_schedule::config::FestivalConfig;
use festival_schedule::db::RepositoryFactory;
use festival_schedule::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting festival schedule server");

    let config = FestivalConfig::from_env_or_default().context("Failed to load configuration")?;
    let schedule_defaults = config.schedule_config()?;
    info!(
        "Schedule defaults: start {} / {} min per item / {} min buffer / {} min judging break",
        schedule_defaults.start_time,
        schedule_defaults.duration_per_item,
        schedule_defaults.buffer_between_items,
        schedule_defaults.judging_break_duration
    );

    let repository = RepositoryFactory::from_settings(&config.repository)?;
    info!("Repository initialized successfully");

    let state = AppState::new(repository)
        .with_schedule_defaults(schedule_defaults)
        .with_sections(config.section_metadata());

    let app = create_router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
