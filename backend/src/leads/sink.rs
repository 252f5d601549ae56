// src/leads/sink.rs
//
// Persistence targets for accepted quote requests.
//
// Two sinks receive every valid lead, one after the other:
// - SqliteLeadStore: the `leads` table
// - WorkbookAppender (see workbook.rs): the `Leads` sheet of leads.xlsx
//
// They are NOT written atomically together. If the table insert succeeds and
// the workbook append fails, the lead exists in SQLite only and the request
// still fails. Nothing compensates for that.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::db::DbPool;
use crate::leads::models::LeadSubmission;

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("lead store error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("workbook error: {0}")]
    Workbook(#[from] umya_spreadsheet::XlsxError),

    #[error("sheet error: {0}")]
    Sheet(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("workbook task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[async_trait]
pub trait LeadSink: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    async fn record_lead(&self, lead: &LeadSubmission) -> Result<(), LeadError>;
}

/// Convenient type alias for dyn sink.
pub type DynLeadSink = Arc<dyn LeadSink>;

/// The `leads` table.
#[derive(Debug, Clone)]
pub struct SqliteLeadStore {
    pool: DbPool,
}

impl SqliteLeadStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert one lead and return the id SQLite assigned to it.
    pub async fn insert(&self, lead: &LeadSubmission) -> Result<i64, LeadError> {
        let fields = &lead.fields;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO leads (
                created_at,
                name,
                phone,
                email,
                suburb,
                service,
                message,
                page
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            RETURNING id
            "#,
        )
        .bind(lead.record_timestamp())
        .bind(&fields.name)
        .bind(&fields.phone)
        .bind(fields.email.as_deref())
        .bind(&fields.suburb)
        .bind(&fields.service)
        .bind(&fields.message)
        .bind(&fields.page)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}

#[async_trait]
impl LeadSink for SqliteLeadStore {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    async fn record_lead(&self, lead: &LeadSubmission) -> Result<(), LeadError> {
        let id = self.insert(lead).await?;
        info!("Stored lead {} from page {}", id, lead.fields.page);
        Ok(())
    }
}
