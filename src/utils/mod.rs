//! Utility functions for code generation and input validation.
//!
//! - [`code_generator`] - Short code generation strategies
//! - [`url_validator`] - Target URL and custom alias validation

pub mod code_generator;
pub mod url_validator;
