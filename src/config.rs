use anyhow::Context;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server_host: IpAddr,
    pub server_port: u16,
    /// Optional cap on listing page size. `None` leaves `limit` uncapped.
    pub list_max_limit: Option<usize>,
    pub cors_allowed_origins: Vec<String>,
    pub log_format: LogFormat,
    pub log_request_body: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = lookup("SERVER_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse()
            .context("SERVER_HOST must be an IP address")?;

        let server_port = lookup("SERVER_PORT")
            .or_else(|| lookup("PORT"))
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("SERVER_PORT must be a valid port number")?;

        let list_max_limit = match lookup("LIST_MAX_LIMIT").filter(|v| !v.trim().is_empty()) {
            Some(raw) => {
                let limit: usize = raw
                    .trim()
                    .parse()
                    .context("LIST_MAX_LIMIT must be a positive integer")?;
                if limit == 0 {
                    anyhow::bail!("LIST_MAX_LIMIT must be greater than 0");
                }
                Some(limit)
            }
            None => None,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => anyhow::bail!("LOG_FORMAT must be 'pretty' or 'json', got '{}'", other),
        };

        let log_request_body = lookup("LOG_REQUEST_BODY")
            .map(|v| v.trim().parse::<bool>())
            .transpose()
            .context("LOG_REQUEST_BODY must be 'true' or 'false'")?
            .unwrap_or(false);

        Ok(Config {
            server_host,
            server_port,
            list_max_limit,
            cors_allowed_origins: parse_origins(&lookup("CORS_ALLOWED_ORIGINS").unwrap_or_default()),
            log_format,
            log_request_body,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
