// src/cli/menu.rs
use inquire::{InquireError, Password, Select, Text};
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cli::handlers;
use crate::core::config::Config;
use crate::generators::generate_secure_password;
use crate::metrics;

pub fn run_cli_menu(config: &Config, should_exit: Arc<AtomicBool>) -> Result<(), Box<dyn Error>> {
    println!("🦀🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║        🦀 PASSCHECK ANALYZER         ║");
    println!("╚══════════════════════════════════════╝");

    // Main application loop
    let mut exit_requested = false;
    while !exit_requested && !should_exit.load(Ordering::SeqCst) {
        let options = vec![
            "1️⃣  Analyze a password",
            "🔐  Generate secure password",
            "❌  Exit",
        ];

        let choice = match Select::new("What would you like to do?", options).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(Box::new(e)),
        };

        match choice {
            c if c.contains("Analyze") => {
                let password = Password::new("Enter password to analyze:")
                    .with_display_mode(inquire::PasswordDisplayMode::Hidden)
                    .without_confirmation()
                    .prompt()?;

                if let Err(e) = handlers::check_length(config, &password) {
                    println!("❌ {}", e);
                    continue;
                }

                handlers::render_report(&metrics::analyze(&password));
            }
            c if c.contains("Generate") => {
                let input = Text::new("Password length:")
                    .with_default(&config.default_password_length.to_string())
                    .prompt()?;

                let length: usize = match input.trim().parse() {
                    Ok(length) => length,
                    Err(_) => {
                        println!("❌ '{}' is not a valid length", input.trim());
                        continue;
                    }
                };

                match generate_secure_password(length) {
                    Ok(password) => {
                        println!("🔐 Generated password: {}", password);
                        handlers::render_report(&metrics::analyze(&password));
                    }
                    Err(e) => println!("❌ Failed to generate password: {}", e),
                }
            }
            _ => exit_requested = true,
        }
    }

    println!("👋 Goodbye! Stay secure.");
    Ok(())
}
