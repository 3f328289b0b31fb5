//! Validation of target URLs and caller-supplied aliases.
//!
//! URLs are checked but never rewritten: the string that passes validation is
//! the exact string that is stored and later redirected to.

use crate::domain::error::ShortenError;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Longest custom alias accepted.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Aliases that would shadow service routes.
pub const RESERVED_ALIASES: &[&str] = &["api", "health", "stats"];

static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias pattern is valid"));

/// Checks that `raw` is an absolute `http`/`https` URL with a non-empty host.
///
/// # Errors
///
/// Returns [`ShortenError::InvalidUrl`] for unparseable input, any other
/// scheme, or a missing host.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com/path?q=1").is_ok());
/// assert!(validate_url("ftp://example.com").is_err());
/// assert!(validate_url("example.com").is_err());
/// ```
pub fn validate_url(raw: &str) -> Result<(), ShortenError> {
    let parsed = Url::parse(raw).map_err(|_| ShortenError::InvalidUrl)?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ShortenError::InvalidUrl);
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(ShortenError::InvalidUrl),
    }
}

/// Validates a caller-supplied alias.
///
/// # Rules
///
/// - Non-empty, at most [`MAX_ALIAS_LENGTH`] characters
/// - ASCII letters, digits, `-` and `_` only
/// - Not one of [`RESERVED_ALIASES`] (case-insensitive)
///
/// # Errors
///
/// Returns [`ShortenError::InvalidAlias`] naming the violated rule.
pub fn validate_alias(alias: &str) -> Result<(), ShortenError> {
    if alias.is_empty() {
        return Err(ShortenError::InvalidAlias("alias must not be empty".to_string()));
    }

    if alias.len() > MAX_ALIAS_LENGTH {
        return Err(ShortenError::InvalidAlias(format!(
            "alias must be at most {MAX_ALIAS_LENGTH} characters"
        )));
    }

    if !ALIAS_REGEX.is_match(alias) {
        return Err(ShortenError::InvalidAlias(
            "use ASCII letters, digits, '-' and '_' only".to_string(),
        ));
    }

    if RESERVED_ALIASES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(alias))
    {
        return Err(ShortenError::InvalidAlias(format!(
            "'{alias}' is reserved"
        )));
    }

    Ok(())
}
