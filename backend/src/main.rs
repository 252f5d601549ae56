use std::net::SocketAddr;

use parmis_backend::{build_router, config, db, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> config::Result<()> {
    // 1. Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load configuration
    let cfg = config::load()?;
    info!("Starting site in {} mode", cfg.env.as_str());

    // 3. Open SQLite and make sure the leads table exists
    let pool = db::create_pool(&cfg.database_url).await?;
    db::init_schema(&pool).await?;
    info!("Lead store ready at {}", cfg.database_url);
    info!("Leads also go to {}", cfg.workbook_path.display());

    // 4. Build application state
    let state = AppState::new(pool, cfg.clone());

    // 5. Build router
    let app = build_router(state);

    // 6. Start HTTP server
    let addr = SocketAddr::new(cfg.http_host, cfg.http_port);
    info!("Listening on http://{}", addr);

    axum::serve(
        tokio::net::TcpListener::bind(addr).await?,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
