// src/leads/mod.rs

pub mod models;
pub mod render;
pub mod service;
pub mod sink;
pub mod validation;
pub mod workbook;

pub use models::{LeadSubmission, QuoteFields, QuoteForm, SpreadsheetRow, SHEET_HEADERS};
pub use service::{submit_quote, QuoteOutcome};
pub use sink::{DynLeadSink, LeadError, LeadSink, SqliteLeadStore};
pub use workbook::WorkbookAppender;
