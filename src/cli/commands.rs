// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Analyze a password's strength
    Analyze {
        /// Password to analyze (prompted for securely if omitted)
        password: Option<String>,
    },

    /// Generate a secure password and analyze it
    Generate {
        /// Password length
        #[arg(long, short, env = "DEFAULT_PASSWORD_LENGTH")]
        length: Option<usize>,
    },
}
