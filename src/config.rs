//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `BASE_URL` (or `DOMAIN`) - Public base of short links (default: `http://localhost:8080`)
//! - `LISTEN` (or `ADDR`) - Bind address (default: `0.0.0.0:8080`, `:8080` is accepted)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CODE_STRATEGY` - `random` or `sequential` (default: `random`)
//! - `CODE_LENGTH` - Length of random codes (default: 6, range: 4..=32)
//! - `CODE_MAX_ATTEMPTS` - Candidate codes tried per request (default: 5, range: 1..=100)
//! - `DEDUPLICATE_URLS` - Reuse generated codes for repeated URLs (default: `false`)
//! - `RATE_LIMIT_PER_SECOND` - Tokens replenished per IP per second (default: 1)
//! - `RATE_LIMIT_BURST` - Token bucket size per IP (default: 60)
//!
//! Nothing is persisted: restarting the process discards every link.

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

use crate::api::middleware::rate_limit::RateLimitSettings;
use crate::application::services::ShortenSettings;
use crate::utils::code_generator::{CodeStrategy, DEFAULT_CODE_LENGTH};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub code_strategy: CodeStrategy,
    pub code_length: usize,
    pub code_max_attempts: usize,
    pub deduplicate_urls: bool,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            code_strategy: CodeStrategy::Random,
            code_length: DEFAULT_CODE_LENGTH,
            code_max_attempts: 5,
            deduplicate_urls: false,
            rate_limit_per_second: 1,
            rate_limit_burst: 60,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable or `CODE_STRATEGY` cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let base_url = env_with_alias("BASE_URL", "DOMAIN")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);

        let listen_addr = env_with_alias("LISTEN", "ADDR")
            .map(|v| normalize_listen_addr(&v))
            .unwrap_or(defaults.listen_addr);

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let code_strategy = match env::var("CODE_STRATEGY") {
            Ok(v) => v
                .parse()
                .map_err(anyhow::Error::msg)
                .context("Failed to parse CODE_STRATEGY")?,
            Err(_) => defaults.code_strategy,
        };

        let code_length = parse_var("CODE_LENGTH")?.unwrap_or(defaults.code_length);
        let code_max_attempts =
            parse_var("CODE_MAX_ATTEMPTS")?.unwrap_or(defaults.code_max_attempts);

        let deduplicate_urls = env::var("DEDUPLICATE_URLS")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.deduplicate_urls);

        let rate_limit_per_second =
            parse_var("RATE_LIMIT_PER_SECOND")?.unwrap_or(defaults.rate_limit_per_second);
        let rate_limit_burst = parse_var("RATE_LIMIT_BURST")?.unwrap_or(defaults.rate_limit_burst);

        Ok(Self {
            base_url,
            listen_addr,
            log_level,
            log_format,
            code_strategy,
            code_length,
            code_max_attempts,
            deduplicate_urls,
            rate_limit_per_second,
            rate_limit_burst,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_url` is not an `http://` or `https://` URL
    /// - `listen_addr` is not a socket address
    /// - `log_format` is not `text` or `json`
    /// - `code_length` or `code_max_attempts` is out of range
    /// - a rate limit value is zero
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        self.socket_addr()?;

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !(4..=32).contains(&self.code_length) {
            anyhow::bail!(
                "CODE_LENGTH must be between 4 and 32, got {}",
                self.code_length
            );
        }

        if !(1..=100).contains(&self.code_max_attempts) {
            anyhow::bail!(
                "CODE_MAX_ATTEMPTS must be between 1 and 100, got {}",
                self.code_max_attempts
            );
        }

        if self.rate_limit_per_second == 0 {
            anyhow::bail!("RATE_LIMIT_PER_SECOND must be at least 1");
        }
        if self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_BURST must be at least 1");
        }

        Ok(())
    }

    /// Parsed bind address.
    ///
    /// # Errors
    ///
    /// Returns an error if `listen_addr` is not `host:port`.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr.parse().with_context(|| {
            format!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            )
        })
    }

    /// Settings for the shortening service.
    pub fn shorten_settings(&self) -> ShortenSettings {
        ShortenSettings {
            base_url: self.base_url.clone(),
            max_attempts: self.code_max_attempts,
            deduplicate: self.deduplicate_urls,
        }
    }

    /// Settings for the per-IP rate limiter.
    pub fn rate_limit_settings(&self) -> RateLimitSettings {
        RateLimitSettings {
            per_second: self.rate_limit_per_second,
            burst: self.rate_limit_burst,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Code strategy: {} (length {}, max attempts {})",
            self.code_strategy,
            self.code_length,
            self.code_max_attempts
        );
        tracing::info!("  Deduplicate URLs: {}", self.deduplicate_urls);
        tracing::info!(
            "  Rate limit: {}/s, burst {}",
            self.rate_limit_per_second,
            self.rate_limit_burst
        );
    }
}

/// Reads `primary`, falling back to `alias`. Empty values count as unset.
fn env_with_alias(primary: &str, alias: &str) -> Option<String> {
    [primary, alias]
        .into_iter()
        .filter_map(|key| env::var(key).ok())
        .find(|v| !v.trim().is_empty())
}

fn parse_var<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(v) => v
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("Failed to parse {key}='{v}'")),
        Err(_) => Ok(None),
    }
}

/// Expands a bare `:port` into `0.0.0.0:port`.
fn normalize_listen_addr(addr: &str) -> String {
    let addr = addr.trim();
    if addr.starts_with(':') {
        format!("0.0.0.0{addr}")
    } else {
        addr.to_string()
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
