#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use parmis_backend::config::Config;
use parmis_backend::db::{self, DbPool};
use parmis_backend::{build_router, AppState};
use tempfile::{tempdir, TempDir};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: DbPool,
    pub workbook: PathBuf,
    _dir: TempDir,
}

/// Start the full router on an ephemeral port, backed by a throwaway
/// database and workbook.
pub async fn spawn_app() -> TestApp {
    let dir = tempdir().expect("tempdir");
    let workbook = dir.path().join("leads.xlsx");

    let mut vars = HashMap::new();
    vars.insert(
        "DATABASE_URL",
        format!("sqlite://{}", dir.path().join("leads.sqlite3").display()),
    );
    vars.insert("LEADS_WORKBOOK_PATH", workbook.display().to_string());
    vars.insert("STATIC_DIR", dir.path().join("static").display().to_string());
    let cfg = Config::from_lookup(|key| vars.get(key).cloned()).expect("test config");

    let pool = db::create_pool(&cfg.database_url).await.expect("open sqlite");
    db::init_schema(&pool).await.expect("schema");

    let app = build_router(AppState::new(pool.clone(), cfg));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("serve app")
    });

    TestApp {
        addr,
        pool,
        workbook,
        _dir: dir,
    }
}

pub fn form_body(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// One HTTP/1.1 exchange over a fresh connection; returns (status, head, body).
pub async fn send_raw(
    addr: SocketAddr,
    method: &str,
    path: &str,
    body: Option<&str>,
) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    if let Some(body) = body {
        req.push_str("Content-Type: application/x-www-form-urlencoded\r\n");
        req.push_str(&format!("Content-Length: {}\r\n", body.len()));
    }
    req.push_str("\r\n");
    if let Some(body) = body {
        req.push_str(body);
    }
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, head.to_string(), body.to_string())
}

pub async fn post_quote(addr: SocketAddr, fields: &[(&str, &str)]) -> (u16, String) {
    let body = form_body(fields);
    let (status, _, body) = send_raw(addr, "POST", "/api/quote", Some(&body)).await;
    (status, body)
}

pub async fn lead_count(pool: &DbPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM leads")
        .fetch_one(pool)
        .await
        .expect("count leads")
}

/// Every row of the `Leads` sheet, header included. Empty when the workbook
/// was never written.
pub fn sheet_rows(path: &Path) -> Vec<Vec<String>> {
    if !path.exists() {
        return Vec::new();
    }
    let book = umya_spreadsheet::reader::xlsx::read(path).expect("read workbook");
    let sheet = book.get_sheet_by_name("Leads").expect("Leads sheet");
    (1..=sheet.get_highest_row())
        .map(|r| (1..=8u32).map(|c| sheet.get_value((c, r))).collect())
        .collect()
}

pub const VALID_QUOTE: [(&str, &str); 7] = [
    ("name", "Jane Doe"),
    ("phone", "0400111222"),
    ("email", ""),
    ("suburb", "Bondi"),
    ("service", "Residential painting"),
    ("message", "Repaint two bedrooms"),
    ("page", "/contact"),
];
