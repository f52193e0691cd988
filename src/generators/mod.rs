// src/generators/mod.rs
mod password;

pub use password::{generate_secure_password, GeneratorError, GENERATION_ALPHABET_SIZE};
