use anyhow::{bail, Context};

const DEFAULT_DATABASE_URL: &str = "appointments.db";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8002";
const DEFAULT_POOL_SIZE: u32 = 8;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub pool_size: u32,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pool_size = match lookup("DATABASE_POOL_SIZE") {
            Some(size) => size
                .trim()
                .parse::<u32>()
                .with_context(|| format!("Invalid DATABASE_POOL_SIZE `{}`", size))?,
            None => DEFAULT_POOL_SIZE,
        };
        if pool_size == 0 {
            bail!("DATABASE_POOL_SIZE must be at least 1");
        }

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            pool_size,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}
