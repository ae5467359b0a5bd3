use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Server settings. Gemini settings are read by `GeminiService::from_env`.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub allowed_origin: HeaderValue,
    pub max_upload_bytes: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR is not a socket address: {}", bind_addr))?;

        let allowed_origin =
            lookup("ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());
        let allowed_origin = HeaderValue::from_str(&allowed_origin)
            .with_context(|| format!("ALLOWED_ORIGIN is not a valid header value: {}", allowed_origin))?;

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("MAX_UPLOAD_BYTES must be a byte count: {}", raw))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            bind_addr,
            allowed_origin,
            max_upload_bytes,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            allowed_origin: HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}
