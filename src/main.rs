use actix_web::HttpServer;
use forecast_api::{ServerConfig, create_base_app};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging (honors RUST_LOG; defaults to info so request logs
    // show up out of the box). LOG_FORMAT=json switches to JSON output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if std::env::var("LOG_FORMAT").is_ok_and(|v| v == "json") {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        "Starting forecast API server"
    );

    HttpServer::new(create_base_app)
        .bind((config.host.clone(), config.port))?
        .run()
        .await
}
