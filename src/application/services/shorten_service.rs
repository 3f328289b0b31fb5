//! Short link creation service.

use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, info, warn};

use crate::domain::clock::Clock;
use crate::domain::entities::NewEntry;
use crate::domain::error::{ShortenError, StoreError};
use crate::domain::repositories::EntryStore;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_validator::{validate_alias, validate_url};

/// A generated code that loses the race to `save` is regenerated once.
const SAVE_ROUNDS: usize = 2;

/// Input for creating a short link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateShortRequest {
    pub url: String,
    pub custom_alias: Option<String>,
    /// Lifetime in seconds. `None`, zero or negative means the link never expires.
    pub expire_in_seconds: Option<i64>,
}

impl CreateShortRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.custom_alias = Some(alias.into());
        self
    }

    pub fn with_ttl(mut self, seconds: i64) -> Self {
        self.expire_in_seconds = Some(seconds);
        self
    }
}

/// The allocated code and the public URL that redirects through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub code: String,
    pub short_url: String,
}

/// Tunables for [`ShortenService`].
#[derive(Debug, Clone)]
pub struct ShortenSettings {
    /// Public base URL, e.g. `https://sho.rt`. A trailing `/` is ignored.
    pub base_url: String,
    /// Candidate codes tried before giving up with
    /// [`ShortenError::CodeAllocationFailed`].
    pub max_attempts: usize,
    /// Return the existing generated code when an alias-less request repeats a URL.
    pub deduplicate: bool,
}

impl ShortenSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            max_attempts: 5,
            deduplicate: false,
        }
    }
}

/// Service turning long URLs into stored short codes.
///
/// Handles URL and alias validation, code allocation with bounded collision
/// retries, and optional expiry.
pub struct ShortenService<S: EntryStore + ?Sized> {
    store: Arc<S>,
    generator: Arc<dyn CodeGenerator>,
    clock: Arc<dyn Clock>,
    base_url: String,
    max_attempts: usize,
    deduplicate: bool,
}

impl<S: EntryStore + ?Sized> ShortenService<S> {
    /// Creates a new shortening service.
    pub fn new(
        store: Arc<S>,
        generator: Arc<dyn CodeGenerator>,
        clock: Arc<dyn Clock>,
        settings: ShortenSettings,
    ) -> Self {
        Self {
            store,
            generator,
            clock,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            max_attempts: settings.max_attempts.max(1),
            deduplicate: settings.deduplicate,
        }
    }

    /// Creates a short link.
    ///
    /// # Flow
    ///
    /// 1. Validate the URL (absolute, `http`/`https`, non-empty host)
    /// 2. With an alias: validate it and claim it, failing if taken
    /// 3. Without one: reuse an existing code without expiry when
    ///    deduplication is on, otherwise allocate a fresh generated code
    /// 4. Apply a positive TTL; failing to do so is logged, not returned
    ///
    /// # Errors
    ///
    /// - [`ShortenError::InvalidUrl`] / [`ShortenError::InvalidAlias`] on bad input
    /// - [`ShortenError::AliasTaken`] if the alias is already present
    /// - [`ShortenError::CodeAllocationFailed`] if every candidate collided
    /// - [`ShortenError::Storage`] on store failures
    pub async fn create_short(&self, request: CreateShortRequest) -> Result<ShortLink, ShortenError> {
        let CreateShortRequest {
            url,
            custom_alias,
            expire_in_seconds,
        } = request;

        validate_url(&url)?;

        let ttl = expire_in_seconds.filter(|s| *s > 0);

        let code = match custom_alias {
            Some(alias) => self.claim_alias(alias, url).await?,
            None => {
                if self.deduplicate
                    && let Some(existing) = self.find_reusable_code(&url).await?
                {
                    debug!(code = %existing, "Reusing existing code for URL");
                    return Ok(self.short_link(existing));
                }
                self.claim_generated(url, ttl.is_some()).await?
            }
        };

        if let Some(seconds) = ttl {
            self.apply_ttl(&code, seconds).await;
        }

        Ok(self.short_link(code))
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Public base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn short_link(&self, code: String) -> ShortLink {
        ShortLink {
            short_url: self.short_url(&code),
            code,
        }
    }

    async fn claim_alias(&self, alias: String, url: String) -> Result<String, ShortenError> {
        validate_alias(&alias)?;

        if self.store.exists(&alias).await? {
            return Err(ShortenError::AliasTaken(alias));
        }

        // A concurrent claim between the check and the insert surfaces as
        // CodeExists, which converts to AliasTaken.
        self.store.save(NewEntry::alias(alias.clone(), url)).await?;
        info!(code = %alias, "Created short link with custom alias");

        Ok(alias)
    }

    /// Code previously generated for `url` that carries no expiry.
    async fn find_reusable_code(&self, url: &str) -> Result<Option<String>, ShortenError> {
        let Some(code) = self.store.find_code_by_url(url).await? else {
            return Ok(None);
        };

        match self.store.get(&code).await? {
            Some(entry) if entry.expire_at.is_none() => Ok(Some(code)),
            _ => {
                debug!(code = %code, "Indexed code has an expiry, not reusing it");
                Ok(None)
            }
        }
    }

    async fn claim_generated(&self, url: String, expiring: bool) -> Result<String, ShortenError> {
        let mut drawn = 0;

        for _ in 0..SAVE_ROUNDS {
            let code = self.generate_unique_code(&mut drawn).await?;

            let mut new_entry = NewEntry::generated(code.clone(), url.clone());
            if expiring {
                new_entry = new_entry.expiring();
            }

            match self.store.save(new_entry).await {
                Ok(()) => {
                    info!(code = %code, "Created short link");
                    return Ok(code);
                }
                Err(StoreError::CodeExists(code)) => {
                    warn!(code = %code, "Generated code was claimed concurrently, regenerating");
                }
                Err(err) => return Err(ShortenError::Storage(err)),
            }
        }

        Err(ShortenError::CodeAllocationFailed { attempts: drawn })
    }

    /// Draws candidates until one is free in the store, at most
    /// `max_attempts` times. `drawn` accumulates every candidate drawn.
    async fn generate_unique_code(&self, drawn: &mut usize) -> Result<String, ShortenError> {
        for attempt in 1..=self.max_attempts {
            let candidate = self.generator.next_code();
            *drawn += 1;

            if !self.store.exists(&candidate).await? {
                return Ok(candidate);
            }

            debug!(code = %candidate, attempt, "Generated code collides");
        }

        warn!(attempts = *drawn, "Could not allocate a unique code");
        Err(ShortenError::CodeAllocationFailed { attempts: *drawn })
    }

    async fn apply_ttl(&self, code: &str, seconds: i64) {
        let Some(expire_at) = Duration::try_seconds(seconds)
            .and_then(|ttl| self.clock.now().checked_add_signed(ttl))
        else {
            warn!(code, seconds, "TTL out of range, link created without expiry");
            return;
        };

        match self.store.set_expire(code, expire_at).await {
            Ok(true) => debug!(code, %expire_at, "Expiry set"),
            Ok(false) => warn!(code, "Entry vanished before expiry could be set"),
            Err(err) => warn!(code, error = %err, "Failed to set expiry, link created without it"),
        }
    }
}
