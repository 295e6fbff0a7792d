mod config;
mod routes;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    Router(String),
    #[error("failed to bind: {0}")]
    Bind(std::io::Error),
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let cfg = config::ServerConfig::from_env()?;
    let app = routes::app().map_err(StartupError::Router)?;

    let addr = cfg.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(StartupError::Bind)?;

    tracing::info!(%addr, "console listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
