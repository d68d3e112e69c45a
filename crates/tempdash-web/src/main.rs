mod error;
mod routes;
mod state;

use anyhow::Context;
use tempdash_core::{
    logging,
    ConfigLoader,
    CoreContext,
};

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tempdash_plugin_api::utils::install_crypto_provider();

    if std::env::var_os(logging::ENV_DEV_LOGGING).is_some() {
        logging::init_dev();
    } else {
        logging::init();
    }

    tracing::info!("Starting Tempdash server");

    let config = ConfigLoader::load_default().context("Failed to load config")?;

    let bind_addr = config
        .server
        .socket_addr()
        .with_context(|| format!("Invalid bind address: {}", config.server.bind_addr))?;
    let cors_allow_all = config.server.cors_allow_all;

    let core_context = CoreContext::new(config).context("Failed to initialize providers")?;
    let app_state = AppState::new(&core_context);

    let app = routes::router(app_state, cors_allow_all);

    tracing::info!("Listening on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
