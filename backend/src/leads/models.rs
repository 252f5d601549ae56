// src/leads/models.rs

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

/// Raw `POST /api/quote` form body. Every field is optional on the wire so a
/// missing input reaches the validator as an empty string instead of a 422.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuoteForm {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub suburb: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
    pub page: Option<String>,
}

/// Trimmed copy of a quote form, ready for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteFields {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub suburb: String,
    pub service: String,
    pub message: String,
    pub page: String,
}

fn trimmed(value: Option<String>) -> String {
    value.as_deref().unwrap_or("").trim().to_string()
}

impl From<QuoteForm> for QuoteFields {
    fn from(form: QuoteForm) -> Self {
        let email = Some(trimmed(form.email)).filter(|e| !e.is_empty());
        let page = Some(trimmed(form.page))
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "/".to_string());

        Self {
            name: trimmed(form.name),
            phone: trimmed(form.phone),
            email,
            suburb: trimmed(form.suburb),
            service: trimmed(form.service),
            message: trimmed(form.message),
            page,
        }
    }
}

/// A validated quote request plus what the handler stamped on it.
#[derive(Debug, Clone)]
pub struct LeadSubmission {
    pub fields: QuoteFields,
    pub submitted_at: DateTime<Utc>,
    /// Peer address of the request, empty when the server could not see it.
    pub source_address: String,
}

impl LeadSubmission {
    /// `created_at` as stored in the `leads` table, e.g.
    /// `2026-10-18T08:30:12.345678+00:00`.
    pub fn record_timestamp(&self) -> String {
        self.submitted_at
            .to_rfc3339_opts(SecondsFormat::Micros, false)
    }

    /// `created_at` as written to the workbook, e.g. `2026-10-18T08:30:12`.
    pub fn sheet_timestamp(&self) -> String {
        self.submitted_at.format("%Y-%m-%dT%H:%M:%S").to_string()
    }

    pub fn to_sheet_row(&self) -> SpreadsheetRow {
        SpreadsheetRow {
            created_at: self.sheet_timestamp(),
            name: self.fields.name.clone(),
            phone: self.fields.phone.clone(),
            email: self.fields.email.clone(),
            state: self.fields.suburb.clone(),
            service: self.fields.service.clone(),
            message: self.fields.message.clone(),
            ip: self.source_address.clone(),
        }
    }
}

/// Column order of the `Leads` sheet.
pub const SHEET_HEADERS: [&str; 8] = [
    "created_at",
    "name",
    "phone",
    "email",
    "state",
    "service",
    "message",
    "ip",
];

/// One workbook row. `state` holds the suburb the customer typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpreadsheetRow {
    pub created_at: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub state: String,
    pub service: String,
    pub message: String,
    pub ip: String,
}

impl SpreadsheetRow {
    /// Value for a header name; unknown headers and a missing email map to "".
    pub fn value_for(&self, header: &str) -> &str {
        match header {
            "created_at" => &self.created_at,
            "name" => &self.name,
            "phone" => &self.phone,
            "email" => self.email.as_deref().unwrap_or(""),
            "state" => &self.state,
            "service" => &self.service,
            "message" => &self.message,
            "ip" => &self.ip,
            _ => "",
        }
    }

    pub fn cells(&self) -> Vec<&str> {
        SHEET_HEADERS.iter().map(|h| self.value_for(h)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn form(name: &str, email: Option<&str>, page: Option<&str>) -> QuoteForm {
        QuoteForm {
            name: Some(name.to_string()),
            phone: Some(" 0400111222 ".to_string()),
            email: email.map(str::to_string),
            suburb: Some("Bondi".to_string()),
            service: Some("Residential painting".to_string()),
            message: Some("  Repaint two bedrooms\n".to_string()),
            page: page.map(str::to_string),
        }
    }

    #[test]
    fn trims_every_field() {
        let fields = QuoteFields::from(form("  Jo ", Some(" jo@example.com "), Some(" /contact ")));
        assert_eq!(fields.name, "Jo");
        assert_eq!(fields.phone, "0400111222");
        assert_eq!(fields.email.as_deref(), Some("jo@example.com"));
        assert_eq!(fields.message, "Repaint two bedrooms");
        assert_eq!(fields.page, "/contact");
    }

    #[test]
    fn blank_email_is_absent_and_page_defaults_to_root() {
        let fields = QuoteFields::from(form("Jane", Some("   "), None));
        assert_eq!(fields.email, None);
        assert_eq!(fields.page, "/");

        let fields = QuoteFields::from(form("Jane", None, Some("  ")));
        assert_eq!(fields.email, None);
        assert_eq!(fields.page, "/");
    }

    #[test]
    fn missing_required_fields_become_empty() {
        let fields = QuoteFields::from(QuoteForm::default());
        assert_eq!(fields.name, "");
        assert_eq!(fields.message, "");
    }

    #[test]
    fn sheet_row_follows_header_order() {
        let submission = LeadSubmission {
            fields: QuoteFields::from(form("Jane Doe", None, None)),
            submitted_at: Utc.with_ymd_and_hms(2026, 10, 18, 8, 30, 12).unwrap(),
            source_address: "10.0.0.7".to_string(),
        };
        let row = submission.to_sheet_row();
        assert_eq!(
            row.cells(),
            vec![
                "2026-10-18T08:30:12",
                "Jane Doe",
                "0400111222",
                "",
                "Bondi",
                "Residential painting",
                "Repaint two bedrooms",
                "10.0.0.7",
            ]
        );
        assert_eq!(submission.record_timestamp(), "2026-10-18T08:30:12.000000+00:00");
    }
}
