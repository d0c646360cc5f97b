use crate::{
    http::{AppState, build_router},
    prelude::{AppError, command::Cli, store::JsonStore},
};
use clap::Parser;
use dotenv::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    init_logging();

    let storage = Arc::new(JsonStore::new(&cli.data_file));
    tracing::info!(path = %cli.data_file.display(), "using contacts file");

    let state = AppState::new(storage).with_static_dir(&cli.static_dir);
    let app = build_router(state);

    let addr = cli.addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        "Contacts API & static server listening on http://localhost:{}",
        addr.port()
    );

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
