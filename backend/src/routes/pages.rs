// src/routes/pages.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::debug;

use crate::routes::AppError;
use crate::site::{content, pages};
use crate::AppState;

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(pages::home(&state.config.site_name)?))
}

pub async fn services(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(pages::services(&state.config.site_name)?))
}

/// GET /learn/:slug
pub async fn learn(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let Some(page) = content::learn_page(&slug) else {
        debug!("No learn page for slug '{}'", slug);
        return Ok((StatusCode::NOT_FOUND, Html("Not Found".to_string())).into_response());
    };

    Ok(Html(pages::learn(&state.config.site_name, page)?).into_response())
}

pub async fn portfolio(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(pages::portfolio(&state.config.site_name)?))
}

pub async fn contact(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(pages::contact(&state.config.site_name)?))
}
