use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `leads` table. `created_at` is stored as ISO-8601 text.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LeadRecord {
    pub id: i64,
    pub created_at: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub suburb: String,
    pub service: String,
    pub message: String,
    pub page: Option<String>,
}
