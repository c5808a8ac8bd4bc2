//! Short code generation and validation.
//!
//! Codes are 6-8 characters drawn from `[A-Za-z0-9]`. Generation is plain
//! random sampling: collisions are possible and are resolved by the registry's
//! bounded retry, not prevented here.

use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// Alphabet for generated codes: 26 upper + 26 lower + 10 digits.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub const MIN_CODE_LENGTH: usize = 6;
pub const MAX_CODE_LENGTH: usize = 8;

static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").expect("valid code regex"));

/// Generates a random short code using the thread-local RNG.
pub fn generate_code() -> String {
    generate_code_with(&mut rand::rng())
}

/// Generates a random short code from the given RNG.
///
/// The length is drawn uniformly from 6..=8, then every position uniformly
/// from [`CODE_ALPHABET`].
pub fn generate_code_with<R: Rng>(rng: &mut R) -> String {
    let len = rng.random_range(MIN_CODE_LENGTH..=MAX_CODE_LENGTH);

    (0..len)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}

/// Returns `true` if `code` matches `^[A-Za-z0-9]{6,8}$`.
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}
