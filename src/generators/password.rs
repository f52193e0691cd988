// src/generators/password.rs
use lazy_static::lazy_static;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use thiserror::Error;

use crate::metrics::PUNCTUATION;

/// Letters + digits + the full punctuation set.
pub const GENERATION_ALPHABET_SIZE: usize = 26 + 26 + 10 + 32;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("password length must be at least 1 character")]
    InvalidLength,
}

lazy_static! {
    static ref ALPHABET: Vec<char> = {
        let mut chars: Vec<char> = ('A'..='Z').collect();
        chars.extend('a'..='z');
        chars.extend('0'..='9');
        chars.extend(PUNCTUATION.chars());
        debug_assert_eq!(chars.len(), GENERATION_ALPHABET_SIZE);
        chars
    };
}

/// Generate a password of exactly `length` characters, drawn uniformly
/// and independently from the 94-character alphabet. Uses the OS CSPRNG,
/// which is safe to call from multiple threads.
pub fn generate_secure_password(length: usize) -> Result<String, GeneratorError> {
    if length == 0 {
        return Err(GeneratorError::InvalidLength);
    }

    let dist = Uniform::from(0..ALPHABET.len());
    let password = (0..length).map(|_| ALPHABET[dist.sample(&mut OsRng)]).collect();
    Ok(password)
}
