use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

use crate::content::site;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub site_base_url: String,
    pub shell_template_path: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let site_base_url = env::var("SITE_BASE_URL")
            .unwrap_or_else(|_| site::BASE_URL.to_string());
        let site_base_url = parse_base_url(&site_base_url)
            .context("SITE_BASE_URL must be an absolute http(s) URL")?;

        let shell_template_path = env::var("SHELL_TEMPLATE_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let static_dir = env::var("STATIC_DIR")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            service_port,
            service_host,
            site_base_url,
            shell_template_path,
            static_dir,
            log_level,
        })
    }

    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Site base URL: {}", self.site_base_url);
        tracing::info!(
            "  Shell template: {}",
            self.shell_template_path
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "embedded".to_string())
        );
        tracing::info!(
            "  Static assets: {}",
            self.static_dir
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "disabled".to_string())
        );
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
            site_base_url: site::BASE_URL.to_string(),
            shell_template_path: None,
            static_dir: None,
            log_level: "info".to_string(),
        }
    }
}

/// Validates the scheme and drops trailing slashes so that
/// `base + path` never produces `//`.
fn parse_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .with_context(|| format!("unsupported scheme in '{}'", raw))?;
    if rest.is_empty() || rest.contains('/') {
        anyhow::bail!("expected an origin like 'https://example.com', got '{}'", raw);
    }
    Ok(trimmed.to_string())
}
