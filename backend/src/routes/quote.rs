// src/routes/quote.rs

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    response::Html,
    Form,
};

use crate::leads::{render, submit_quote, QuoteForm, QuoteOutcome};
use crate::routes::AppError;
use crate::AppState;

/// POST /api/quote
///
/// Always answers 200 with an HTML fragment when the lead was either rejected
/// by validation or stored; the fragment tells the visitor which. Storage
/// failures become a plain 500.
pub async fn submit_quote_handler(
    State(state): State<AppState>,
    peer: Option<ConnectInfo<SocketAddr>>,
    Form(form): Form<QuoteForm>,
) -> Result<Html<String>, AppError> {
    let source_address = peer
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_default();

    let fragment = match submit_quote(&state.sinks, form, source_address).await? {
        QuoteOutcome::Rejected(errors) => render::error_fragment(&errors)?,
        QuoteOutcome::Accepted(fields) => render::success_fragment(&fields)?,
    };

    Ok(Html(fragment))
}
