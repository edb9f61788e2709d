//! Environment inputs.
//!
//! The only configuration is the GitHub token and username, read once
//! at startup. A `.env` file in the working directory is loaded first
//! if present.

use anyhow::{Context, Result};

/// Credentials for the GitHub GraphQL API.
#[derive(Debug)]
pub struct Config {
    pub username: String,
    pub token: String,
}

impl Config {
    /// Read `GITHUB_TOKEN` and `GITHUB_USERNAME` from the environment.
    /// Neither is validated locally; a bad value surfaces as a fetch
    /// failure.
    pub fn from_env() -> Result<Self> {
        // A missing .env file is fine; the variables may come from the shell.
        dotenvy::dotenv().ok();

        let token = std::env::var("GITHUB_TOKEN")
            .context("GITHUB_TOKEN is not set (a personal access token with read:user scope)")?;

        let username =
            std::env::var("GITHUB_USERNAME").context("GITHUB_USERNAME is not set")?;

        Ok(Config { username, token })
    }
}
