// src/cli/handlers.rs
use std::error::Error;

use console::Style;
use inquire::Password;

use crate::core::config::Config;
use crate::generators::generate_secure_password;
use crate::metrics;
use crate::models::{StrengthLevel, StrengthReport};

// Handlers for CLI commands
pub fn handle_analyze(
    config: &Config,
    password: Option<String>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let password = match password {
        Some(password) => password,
        None => Password::new("Enter password to analyze:")
            .with_display_mode(inquire::PasswordDisplayMode::Hidden)
            .without_confirmation()
            .prompt()?,
    };

    check_length(config, &password)?;

    log::debug!("Analyzing password of {} characters", password.chars().count());
    let report = metrics::analyze(&password);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report);
    }

    Ok(())
}

pub fn handle_generate(
    config: &Config,
    length: Option<usize>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let length = length.unwrap_or(config.default_password_length);
    let password = generate_secure_password(length)?;
    let report = metrics::analyze(&password);

    if json {
        let payload = serde_json::json!({ "password": password, "report": report });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("🔐 Generated password: {}", Style::new().bold().apply_to(&password));
        render_report(&report);
    }

    Ok(())
}

// The analysis itself is O(length), but the keyspace exponentiation is not;
// oversized input is rejected at this boundary so the core can stay total.
pub fn check_length(config: &Config, password: &str) -> Result<(), Box<dyn Error>> {
    let length = password.chars().count();
    if length > config.max_password_length {
        return Err(format!(
            "password is {} characters; analysis is capped at {}",
            length, config.max_password_length
        )
        .into());
    }
    Ok(())
}

pub fn render_report(report: &StrengthReport) {
    println!();
    println!("🔎 Security Analysis");
    println!("──────────────────────────────");
    for (label, passed) in report.criteria.entries() {
        if passed {
            println!("  {} {}", Style::new().green().apply_to("✓"), label);
        } else {
            println!("  {} {}", Style::new().red().apply_to("✗"), label);
        }
    }
    println!("──────────────────────────────");
    println!("Password Entropy: {} bits", report.entropy_bits);
    println!("Estimated Time to Crack:");
    for estimate in &report.crack_times {
        println!("  • {}: {}", estimate.profile, estimate.display);
    }
    println!("SHA-256: {}", report.sha256);
    println!(
        "Password Strength: {}",
        level_style(report.level).apply_to(report.level.as_str())
    );
}

// Terminal approximations of the advisory hex colors.
fn level_style(level: StrengthLevel) -> Style {
    match level {
        StrengthLevel::Critical => Style::new().red().bold(),
        StrengthLevel::Weak => Style::new().color256(208).bold(),
        StrengthLevel::Moderate => Style::new().yellow().bold(),
        StrengthLevel::Strong => Style::new().green(),
        StrengthLevel::Maximum => Style::new().green().bold(),
    }
}
