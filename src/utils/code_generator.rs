//! Short code generation and validation utilities.
//!
//! Codes are fixed-length random strings over a 64-symbol URL-safe alphabet.
//! Every call draws from a thread-local RNG, so generators hold no shared
//! mutable state and are safe to use from any number of tasks at once.

use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// URL-safe alphabet: ASCII letters, digits, `_` and `-`.
pub const ALPHABET: &[u8; 64] =
    b"useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";

/// Length of generated codes when none is configured.
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Upper bound on the length of any code accepted from a client.
pub const MAX_CODE_LENGTH: usize = 32;

/// Shape every code this service could have issued.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("static regex is valid"));

/// Source of candidate short codes.
///
/// Implementations must be independent per call: no input beyond internal
/// randomness and no side effects.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces a new candidate code.
    fn generate(&self) -> String;
}

/// Random fixed-length code generator.
///
/// With the default 7 characters over 64 symbols there are 2^42 codes, so
/// collisions are rare but possible; the link service retries on them.
#[derive(Debug, Clone, Copy)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    /// Creates a generator producing codes of `length` characters.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Length of the codes this generator produces.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

/// Returns true if `code` has the shape of a code this service issues.
///
/// Used to turn obviously bogus lookups into a not-found answer without
/// touching storage.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty() && code.len() <= MAX_CODE_LENGTH && CODE_REGEX.is_match(code)
}
