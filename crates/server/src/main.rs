#![deny(clippy::all)]
#![deny(missing_debug_implementations)]

use stellation_backend_cli::Cli;
use stellation_backend_tower::TowerEndpoint;

mod app;
mod bridge;
mod config;
use app::ServerApp;
use bridge::create_backend_bridge;
use config::ServerConfig;

#[cfg(stellation_embedded_frontend)]
#[derive(rust_embed::RustEmbed)]
#[folder = "$STELLATION_FRONTEND_BUILD_DIR"]
struct Frontend;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Read before tracing starts so the log filter can come from .env as well.
    let config = ServerConfig::from_env()?;
    stellation_backend_cli::trace::init_default("SEARCH_APP_SERVER_LOG");

    let catalog = config.load_catalog()?;
    tracing::info!(documents = catalog.len(), "search catalog loaded");
    if search_index::install(catalog).is_err() {
        anyhow::bail!("search catalog is already installed");
    }

    let endpoint = TowerEndpoint::<ServerApp<_>>::new().with_create_bridge(create_backend_bridge);

    #[cfg(stellation_embedded_frontend)]
    let endpoint =
        endpoint.with_frontend(stellation_backend_tower::Frontend::new_embedded::<Frontend>());

    Cli::builder().endpoint(endpoint).build().run().await?;

    Ok(())
}
