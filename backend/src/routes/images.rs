// src/routes/images.rs

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::site::svg;

const SVG: [(header::HeaderName, &str); 1] = [(header::CONTENT_TYPE, "image/svg+xml")];

pub async fn brandmark() -> impl IntoResponse {
    (SVG, svg::BRANDMARK)
}

pub async fn hero_background() -> impl IntoResponse {
    (SVG, svg::HERO_BACKGROUND)
}

/// GET /img/art/{seed}.svg
pub async fn portfolio_art(Path(file): Path<String>) -> Response {
    let seed = file
        .strip_suffix(".svg")
        .and_then(|s| s.parse::<i64>().ok());

    match seed {
        Some(seed) => (SVG, svg::portfolio_art(seed)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
