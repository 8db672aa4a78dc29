use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3000;

/// Process-wide configuration, read once at startup and passed explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let openai_api_key =
            dotenvy::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?;
        let port = parse_port(dotenvy::var("PORT").ok())?;

        Ok(Self {
            openai_api_key,
            port,
        })
    }
}

fn parse_port(raw: Option<String>) -> Result<u16> {
    match raw {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("PORT is not a valid port number: {raw:?}")),
        None => Ok(DEFAULT_PORT),
    }
}
