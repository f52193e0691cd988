// src/lib.rs
pub mod cli;
pub mod core;
pub mod generators;
pub mod metrics;
pub mod models;
pub mod utils;
