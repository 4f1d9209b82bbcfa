use anyhow::{anyhow, Context};
use serde_json::json;

use crate::auth::{generate_jwt, Claims, JwtValidator, TokenValidator};
use crate::cli::OutputFormat;
use crate::models::Role;

/// Sign a token for `subject` and print it
pub fn issue(subject: &str, role: &str, hours: u64, secret: &str, format: OutputFormat) -> anyhow::Result<()> {
    let role: Role = role.parse()?;
    let claims = Claims::new(subject, role, hours)?;
    let token = generate_jwt(&claims, secret).context("failed to sign token")?;

    match format {
        OutputFormat::Json => println!("{}", json!({ "token": token, "claims": claims })),
        OutputFormat::Text => println!("{}", token),
    }
    Ok(())
}

/// Validate a token and print its claims, or fail with the reason code
pub fn verify(token: &str, secret: &str, format: OutputFormat) -> anyhow::Result<()> {
    let claims = JwtValidator::default()
        .validate(token, secret)
        .map_err(|e| anyhow!("{} ({})", e, e.reason().as_str()))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&claims)?),
        OutputFormat::Text => println!("subject: {}\nrole: {}\nexpires: {}", claims.sub, claims.role, claims.exp),
    }
    Ok(())
}
