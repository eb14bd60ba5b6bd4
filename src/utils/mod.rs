//! Utility functions for code generation, URL checks, and storage error
//! classification.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - Syntactic absolute-URL validation
//! - [`db_error`] - SQLite error classification

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
