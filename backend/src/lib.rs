// src/lib.rs

pub mod config;
pub mod db;
pub mod leads;
pub mod routes;
pub mod site;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use config::Config;
use db::DbPool;
use leads::{DynLeadSink, SqliteLeadStore, WorkbookAppender};

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Config,
    /// Where accepted leads go, in write order: table first, then workbook.
    pub sinks: Arc<[DynLeadSink]>,
}

impl AppState {
    pub fn new(db: DbPool, config: Config) -> Self {
        let sinks: Vec<DynLeadSink> = vec![
            Arc::new(SqliteLeadStore::new(db.clone())) as DynLeadSink,
            Arc::new(WorkbookAppender::new(config.workbook_path.clone())) as DynLeadSink,
        ];

        Self {
            db,
            config,
            sinks: sinks.into(),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(routes::pages::home))
        .route("/services", get(routes::pages::services))
        .route("/learn/:slug", get(routes::pages::learn))
        .route("/portfolio", get(routes::pages::portfolio))
        .route("/contact", get(routes::pages::contact))
        .route("/api/quote", post(routes::quote::submit_quote_handler))
        .route("/img/brand.svg", get(routes::images::brandmark))
        .route("/img/figma-bg.svg", get(routes::images::hero_background))
        .route("/img/art/:file", get(routes::images::portfolio_art))
        .route("/robots.txt", get(routes::meta::robots))
        .route("/sitemap.xml", get(routes::meta::sitemap))
        .route("/health", get(routes::meta::health_check))
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
