use std::sync::Arc;

use almanac_app::app::api::routes;
use almanac_app::config::ConfigHandler;
use almanac_app::store_handler::StoreHandler;
use almanac_core::config::load_config;
use almanac_core::constants::CALDAV_ROUTE_PREFIX;
use almanac_rfc::rfc::dav::core::Href;
use almanac_service::store::memory::InMemoryStore;
use salvo::conn::TcpListener;
use salvo::{Listener, Router};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Almanac CalDAV server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let store = InMemoryStore::new(Href::new(CALDAV_ROUTE_PREFIX));
    for home in &config.storage.homes {
        let href = store.add_home(home)?;
        tracing::info!(href = %href, "Home collection ready");
    }

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(StoreHandler {
            store: Arc::new(store),
        })
        .hoop(ConfigHandler {
            settings: config.clone(),
        })
        .push(routes()?);

    tracing::info!(origin = %config.server.origin(), "Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
