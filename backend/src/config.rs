// src/config.rs

use std::{env, net::IpAddr, path::PathBuf};

use tracing::debug;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub const DEFAULT_SITE_NAME: &str = "PARMIS Painting Services";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Staging,
    Production,
}

impl AppEnv {
    /// Accepts the long and short spellings in any case. Anything else is
    /// treated as development.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => AppEnv::Production,
            "staging" | "stage" => AppEnv::Staging,
            _ => AppEnv::Development,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AppEnv::Development => "development",
            AppEnv::Staging => "staging",
            AppEnv::Production => "production",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub env: AppEnv,
    pub http_host: IpAddr,
    pub http_port: u16,

    /// SQLite connection string for the `leads` table,
    /// e.g. `sqlite://leads.sqlite3`.
    pub database_url: String,

    /// Workbook every accepted quote request is appended to.
    pub workbook_path: PathBuf,

    /// Directory served under `/static` (portfolio photos, previews).
    pub static_dir: PathBuf,

    /// Brand name shown in page titles and the header.
    pub site_name: String,
}

/// Read `.env`, then the file for the selected environment, then the
/// process environment. Values already set in the environment win.
pub fn load() -> Result<Config> {
    load_dotenv();
    Config::from_env()
}

fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded {}", path.display());
    }

    // `prod` and `production` both select `.env.production`.
    let selected = AppEnv::from_name(&env::var("APP_ENV").unwrap_or_default());
    if let Ok(path) = dotenvy::from_filename(format!(".env.{}", selected.as_str())) {
        debug!("Loaded {}", path.display());
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source. `from_env` is the
    /// process-environment flavour of this.
    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = AppEnv::from_name(&get("APP_ENV").unwrap_or_default());

        let http_host: IpAddr = get("HTTP_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse()
            .map_err(|_| "HTTP_HOST must be a valid IP address")?;

        let http_port: u16 = get("HTTP_PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse()
            .map_err(|_| "HTTP_PORT must be a valid u16")?;

        let database_url =
            get("DATABASE_URL").unwrap_or_else(|| "sqlite://leads.sqlite3".to_string());
        if !database_url.starts_with("sqlite:") {
            return Err("DATABASE_URL must be a sqlite: URL".into());
        }

        let workbook_path = get("LEADS_WORKBOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("leads.xlsx"));

        let static_dir = get("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("static"));

        let site_name = get("SITE_NAME").unwrap_or_else(|| DEFAULT_SITE_NAME.to_string());

        Ok(Self {
            env,
            http_host,
            http_port,
            database_url,
            workbook_path,
            static_dir,
            site_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_local_files() {
        let cfg = from_pairs(&[]).expect("defaults load");
        assert_eq!(cfg.env, AppEnv::Development);
        assert_eq!(cfg.http_port, 8000);
        assert_eq!(cfg.database_url, "sqlite://leads.sqlite3");
        assert_eq!(cfg.workbook_path, PathBuf::from("leads.xlsx"));
        assert_eq!(cfg.static_dir, PathBuf::from("static"));
        assert_eq!(cfg.site_name, DEFAULT_SITE_NAME);
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = from_pairs(&[
            ("APP_ENV", "prod"),
            ("HTTP_HOST", "127.0.0.1"),
            ("HTTP_PORT", "9090"),
            ("DATABASE_URL", "sqlite:///var/lib/parmis/leads.db"),
            ("LEADS_WORKBOOK_PATH", "/var/lib/parmis/leads.xlsx"),
        ])
        .expect("config loads");
        assert_eq!(cfg.env, AppEnv::Production);
        assert_eq!(cfg.http_host.to_string(), "127.0.0.1");
        assert_eq!(cfg.http_port, 9090);
        assert_eq!(
            cfg.workbook_path,
            PathBuf::from("/var/lib/parmis/leads.xlsx")
        );
    }

    #[test]
    fn unknown_env_falls_back_to_development() {
        assert_eq!(AppEnv::from_name("qa"), AppEnv::Development);
        assert_eq!(AppEnv::from_name(" STAGE "), AppEnv::Staging);
        assert_eq!(AppEnv::from_name("prod").as_str(), "production");
    }

    #[test]
    fn rejects_bad_port_and_non_sqlite_url() {
        assert!(from_pairs(&[("HTTP_PORT", "70000")]).is_err());
        assert!(from_pairs(&[("DATABASE_URL", "postgres://localhost/leads")]).is_err());
    }
}
