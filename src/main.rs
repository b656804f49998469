use faq_agent::api::{create_router, AppState};
use faq_agent::infrastructure::{build_resolver, AppConfig};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "faq_agent=debug,api=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("LOG_FORMAT").is_ok_and(|f| f == "json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    let config = AppConfig::load()?;
    info!(
        backend = ?config.index.backend,
        threshold = config.resolver.threshold,
        "configuration loaded"
    );

    let resolver = build_resolver(&config).await?;
    info!("knowledge base ready");

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let app = create_router(AppState::new(resolver, config));

    info!("API server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
