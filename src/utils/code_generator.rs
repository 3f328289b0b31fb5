//! Short code generation strategies.
//!
//! Both strategies draw from the same base62 alphabet (`0-9A-Z a-z`). A
//! generator only proposes candidates; confirming a candidate is free is the
//! job of [`crate::application::services::ShortenService`].

use rand::Rng;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Base62 alphabet: digits, then uppercase, then lowercase.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BASE: u64 = ALPHABET.len() as u64;

/// Default length of randomly generated codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Produces candidate short codes.
pub trait CodeGenerator: Send + Sync {
    /// Returns the next candidate code.
    fn next_code(&self) -> String;
}

/// Which [`CodeGenerator`] the service runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeStrategy {
    /// Counter rendered in base62: short, unique, enumerable.
    Sequential,
    /// Fixed-length random codes: non-enumerable, needs collision checks.
    Random,
}

impl CodeStrategy {
    /// Builds the generator for this strategy.
    ///
    /// `length` only applies to [`CodeStrategy::Random`].
    pub fn build(self, length: usize) -> Box<dyn CodeGenerator> {
        match self {
            CodeStrategy::Sequential => Box::new(SequentialGenerator::new()),
            CodeStrategy::Random => Box::new(RandomGenerator::new(length)),
        }
    }
}

impl FromStr for CodeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" => Ok(CodeStrategy::Sequential),
            "random" => Ok(CodeStrategy::Random),
            other => Err(format!(
                "unknown code strategy '{other}', expected 'sequential' or 'random'"
            )),
        }
    }
}

impl fmt::Display for CodeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeStrategy::Sequential => f.write_str("sequential"),
            CodeStrategy::Random => f.write_str("random"),
        }
    }
}

/// Strictly increasing counter starting at 1, rendered in base62.
///
/// The counter is a lone atomic, so it never contends with the store lock
/// and no two callers can observe the same value.
#[derive(Debug)]
pub struct SequentialGenerator {
    counter: AtomicU64,
}

impl SequentialGenerator {
    pub fn new() -> Self {
        Self::starting_after(0)
    }

    /// Creates a generator whose first code encodes `last + 1`.
    pub fn starting_after(last: u64) -> Self {
        Self {
            counter: AtomicU64::new(last),
        }
    }
}

impl Default for SequentialGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for SequentialGenerator {
    fn next_code(&self) -> String {
        let value = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        encode_base62(value)
    }
}

/// Fixed-length codes drawn uniformly from [`ALPHABET`].
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    length: usize,
}

impl RandomGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomGenerator {
    fn next_code(&self) -> String {
        let mut rng = rand::rng();
        (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

/// Renders `value` in base62 without padding. Zero encodes as `"0"`.
pub fn encode_base62(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % BASE) as usize]);
        value /= BASE;
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}
