// src/routes/meta.rs

use std::path::Path;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::{error, warn};

use crate::site::content::SITEMAP_PATHS;
use crate::AppState;

pub async fn robots() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\nSitemap: /sitemap.xml\n",
    )
}

pub async fn sitemap() -> impl IntoResponse {
    let mut xml = vec![
        r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string(),
        r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#.to_string(),
    ];
    xml.extend(
        SITEMAP_PATHS
            .iter()
            .map(|p| format!("  <url><loc>{}</loc></url>", p)),
    );
    xml.push("</urlset>".to_string());

    ([(header::CONTENT_TYPE, "application/xml")], xml.join("\n"))
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub env: &'static str,
    pub database: &'static str,
    pub workbook: WorkbookHealth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkbookHealth {
    /// File exists and can be rewritten.
    Writable,
    /// Not created yet; the first accepted lead creates it.
    Pending,
    ReadOnly,
    /// Path is a directory or its parent directory is missing.
    Unavailable,
}

/// GET /health
///
/// 200 when both lead sinks can take a write, 503 otherwise.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let database = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => "up",
        Err(err) => {
            error!("Lead store health check failed: {:?}", err);
            "down"
        }
    };
    let workbook = workbook_health(&state.config.workbook_path).await;
    if matches!(workbook, WorkbookHealth::ReadOnly | WorkbookHealth::Unavailable) {
        warn!(
            "Workbook {} is {:?}",
            state.config.workbook_path.display(),
            workbook
        );
    }

    let healthy = database == "up"
        && matches!(workbook, WorkbookHealth::Writable | WorkbookHealth::Pending);
    let code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        code,
        Json(HealthReport {
            status: if healthy { "ok" } else { "error" },
            env: state.config.env.as_str(),
            database,
            workbook,
        }),
    )
}

async fn workbook_health(path: &Path) -> WorkbookHealth {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => WorkbookHealth::Unavailable,
        Ok(meta) if meta.permissions().readonly() => WorkbookHealth::ReadOnly,
        Ok(_) => WorkbookHealth::Writable,
        Err(_) => {
            let parent = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            match tokio::fs::metadata(parent).await {
                Ok(meta) if meta.is_dir() => WorkbookHealth::Pending,
                _ => WorkbookHealth::Unavailable,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn workbook_health_tracks_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("leads.xlsx");
        assert_eq!(workbook_health(&path).await, WorkbookHealth::Pending);

        std::fs::write(&path, b"xlsx").expect("write");
        assert_eq!(workbook_health(&path).await, WorkbookHealth::Writable);

        let mut perms = std::fs::metadata(&path).expect("metadata").permissions();
        perms.set_readonly(true);
        std::fs::set_permissions(&path, perms).expect("set readonly");
        assert_eq!(workbook_health(&path).await, WorkbookHealth::ReadOnly);

        let missing = dir.path().join("nope").join("leads.xlsx");
        assert_eq!(workbook_health(&missing).await, WorkbookHealth::Unavailable);
        assert_eq!(workbook_health(dir.path()).await, WorkbookHealth::Unavailable);
    }
}
