// src/generators/password.rs
use rand::{Rng, distributions::Uniform};
use rand::distributions::Distribution;
use crate::models::GenerationConfig;

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// Characters dropped from the pool when `exclude_ambiguous` is set.
pub const AMBIGUOUS: &[u8] = b"il1Lo0";

// Draws allowed per requested character before the unconstrained fill kicks in
const ATTEMPTS_PER_CHAR: usize = 10;

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generates a password with the thread-local RNG. Returns an empty
    /// string when the config selects no characters.
    pub fn generate_password(&self, config: &GenerationConfig) -> String {
        self.generate_with_rng(config, &mut rand::thread_rng())
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(&self, config: &GenerationConfig, rng: &mut R) -> String {
        let pool = build_pool(config);
        generate_from_pool(&pool, config.length, config.prevent_repeat, config.prevent_sequential, rng)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Concatenates the selected alphabets (upper, lower, digits, symbols) and
/// strips ambiguous characters afterwards if requested.
pub fn build_pool(config: &GenerationConfig) -> Vec<u8> {
    let mut chars = Vec::new();

    if config.include_uppercase {
        chars.extend(UPPERCASE);
    }
    if config.include_lowercase {
        chars.extend(LOWERCASE);
    }
    if config.include_numbers {
        chars.extend(NUMBERS);
    }
    if config.include_symbols {
        chars.extend(SYMBOLS);
    }

    if config.exclude_ambiguous {
        chars.retain(|c| !AMBIGUOUS.contains(c));
    }

    chars
}

fn is_sequential(prev: u8, next: u8) -> bool {
    (prev as i16 - next as i16).abs() == 1
}

/// Rejection-samples `length` characters from `pool`. Every draw counts
/// against a budget of `length * 10`; once it runs out the remainder is
/// filled without checking the adjacency rules, so the result is always
/// exactly `length` long for a non-empty pool.
pub fn generate_from_pool<R: Rng + ?Sized>(
    pool: &[u8],
    length: usize,
    prevent_repeat: bool,
    prevent_sequential: bool,
    rng: &mut R,
) -> String {
    if pool.is_empty() {
        return String::new();
    }

    let dist = Uniform::from(0..pool.len());
    let mut password: Vec<u8> = Vec::with_capacity(length);
    let max_attempts = length.saturating_mul(ATTEMPTS_PER_CHAR);
    let mut attempts = 0;

    while password.len() < length && attempts < max_attempts {
        let next = pool[dist.sample(rng)];
        attempts += 1;

        if let Some(&prev) = password.last() {
            if prevent_repeat && prev == next {
                continue;
            }
            if prevent_sequential && is_sequential(prev, next) {
                continue;
            }
        }

        password.push(next);
    }

    if password.len() < length {
        log::debug!(
            "Attempt budget of {} exhausted at {}/{} characters, filling the rest unconstrained",
            max_attempts,
            password.len(),
            length
        );
        while password.len() < length {
            password.push(pool[dist.sample(rng)]);
        }
    }

    password.into_iter().map(char::from).collect()
}
