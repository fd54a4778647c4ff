// src/config.rs
use std::{env, fmt, path::PathBuf, time::Duration};

use anyhow::{Context, bail};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Process configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// `None` means chat runs on the local fallback matcher.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub completion_timeout: Duration,
    pub templates_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "<redacted>"))
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("completion_timeout", &self.completion_timeout)
            .field("templates_dir", &self.templates_dir)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            gemini_api_key: None,
            gemini_model: DEFAULT_MODEL.to_string(),
            gemini_base_url: DEFAULT_BASE_URL.to_string(),
            completion_timeout: Duration::from_secs(10),
            templates_dir: PathBuf::from("templates"),
        }
    }
}

impl Config {
    /// Build the config from environment variables, falling back to defaults.
    ///
    /// A missing or blank `GEMINI_API_KEY` is not an error.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match var("PORT") {
            Some(p) => p.parse().with_context(|| format!("PORT is not a valid port: {p}"))?,
            None => defaults.port,
        };

        let completion_timeout = match var("COMPLETION_TIMEOUT_SECS") {
            Some(s) => {
                let secs: u64 = s
                    .parse()
                    .with_context(|| format!("COMPLETION_TIMEOUT_SECS is not a number: {s}"))?;
                if secs == 0 {
                    bail!("COMPLETION_TIMEOUT_SECS must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            None => defaults.completion_timeout,
        };

        Ok(Self {
            host: var("HOST").unwrap_or(defaults.host),
            port,
            gemini_api_key: var("GEMINI_API_KEY"),
            gemini_model: var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_base_url: var("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            completion_timeout,
            templates_dir: var("TEMPLATES_DIR").map(PathBuf::from).unwrap_or(defaults.templates_dir),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Unset and whitespace-only values are treated alike.
fn var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
