// src/leads/workbook.rs
//
// Appends accepted leads to an .xlsx workbook.
//
// The file format has no append primitive: every row means load the whole
// workbook, add a row, save the whole workbook. Two of those cycles running
// at once lose a row, so the cycle runs under one mutex shared by every
// clone of the appender.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};
use umya_spreadsheet::{Spreadsheet, Worksheet};

use crate::leads::models::{LeadSubmission, SpreadsheetRow, SHEET_HEADERS};
use crate::leads::sink::{LeadError, LeadSink};

pub const SHEET_NAME: &str = "Leads";

#[derive(Debug, Clone)]
pub struct WorkbookAppender {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl WorkbookAppender {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Append one row, creating the workbook and header first if needed.
    ///
    /// The lock guard moves into the blocking task, so the critical section
    /// lasts until the file is saved even if the calling request is dropped.
    pub async fn append(&self, row: SpreadsheetRow) -> Result<(), LeadError> {
        let guard = self.lock.clone().lock_owned().await;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || {
            let _guard = guard;
            append_row(&path, &row)
        })
        .await?
    }
}

#[async_trait]
impl LeadSink for WorkbookAppender {
    fn name(&self) -> &'static str {
        "workbook"
    }

    async fn record_lead(&self, lead: &LeadSubmission) -> Result<(), LeadError> {
        self.append(lead.to_sheet_row()).await?;
        info!("Appended lead to {}", self.path.display());
        Ok(())
    }
}

/// Load → append → save. Callers must hold the appender lock.
fn append_row(path: &Path, row: &SpreadsheetRow) -> Result<(), LeadError> {
    let mut book = if path.exists() {
        umya_spreadsheet::reader::xlsx::read(path)?
    } else {
        info!("Creating workbook {}", path.display());
        umya_spreadsheet::new_file_empty_worksheet()
    };

    let sheet = leads_sheet(&mut book)?;
    if sheet.get_highest_row() == 0 {
        write_row(sheet, 1, &SHEET_HEADERS);
    }

    let next_row = sheet.get_highest_row() + 1;
    write_row(sheet, next_row, &row.cells());
    debug!("Writing lead to row {} of {}", next_row, path.display());

    save(&book, path)
}

/// The `Leads` sheet, else the first sheet, else a new `Leads` sheet.
fn leads_sheet(book: &mut Spreadsheet) -> Result<&mut Worksheet, LeadError> {
    if book.get_sheet_by_name(SHEET_NAME).is_some() {
        return book
            .get_sheet_by_name_mut(SHEET_NAME)
            .ok_or_else(|| missing_sheet(SHEET_NAME));
    }
    if book.get_sheet_count() > 0 {
        return book.get_sheet_mut(&0).ok_or_else(|| missing_sheet("#0"));
    }
    book.new_sheet(SHEET_NAME)
        .map_err(|e| LeadError::Sheet(e.to_string()))
}

fn missing_sheet(name: &str) -> LeadError {
    LeadError::Sheet(format!("sheet {} disappeared", name))
}

fn write_row<S: AsRef<str>>(sheet: &mut Worksheet, row: u32, values: &[S]) {
    for (idx, value) in values.iter().enumerate() {
        let col = idx as u32 + 1;
        // Stored as text so phone numbers keep their leading zero.
        sheet
            .get_cell_mut((col, row))
            .set_value_string(value.as_ref());
    }
}

/// Save next to the target and rename over it, so a crash mid-write never
/// leaves a truncated workbook behind.
fn save(book: &Spreadsheet, path: &Path) -> Result<(), LeadError> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    umya_spreadsheet::writer::xlsx::write(book, &tmp)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}
