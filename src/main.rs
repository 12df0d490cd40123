#![recursion_limit = "256"]

mod config;
mod routes;

use config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
    }

    let config = ServerConfig::from_env()?;
    let app = routes::app(&config);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    tracing::info!(addr = %config.addr, "portfolio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
