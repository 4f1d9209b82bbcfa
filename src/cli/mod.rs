pub mod commands;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "dispatch")]
#[command(about = "Dispatch CLI - issue and inspect API tokens")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(long, global = true, help = "Signing secret (defaults to JWT_SECRET)")]
    pub secret: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Issue a signed token for a subject")]
    Token {
        #[arg(long, help = "Subject (user ID) the token is issued for")]
        subject: String,
        #[arg(long, default_value = "user", help = "Role claim: guest, user, moderator, admin")]
        role: String,
        #[arg(long, help = "Validity in hours (defaults to SECURITY_JWT_EXPIRY_HOURS)")]
        hours: Option<u64>,
    },

    #[command(about = "Validate a token or Authorization header value")]
    Verify {
        #[arg(help = "Token, with or without the Bearer prefix")]
        token: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let config = crate::config::config();
    let secret = cli.secret.unwrap_or_else(|| config.security.jwt_secret.clone());

    match cli.command {
        Commands::Token { subject, role, hours } => {
            let hours = hours.unwrap_or(config.security.jwt_expiry_hours);
            commands::token::issue(&subject, &role, hours, &secret, output_format)
        }
        Commands::Verify { token } => commands::token::verify(&token, &secret, output_format),
    }
}
