use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use trove::{Catalog, Config, Server, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let config = Config::parse();
    config.validate()?;

    let catalog = Catalog::load(config.data_dir.as_deref()).context("loading fixtures")?;
    let app = routes::app(Arc::new(catalog), config.api_token());

    Server::bind(config.addr())
        .serve(app)
        .await
        .with_context(|| format!("serving on {}", config.addr()))
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("trove=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}
