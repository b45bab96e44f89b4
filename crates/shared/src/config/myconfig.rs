use anyhow::{Context, Result, anyhow};
use std::time::Duration;

const DEFAULT_SURCHARGE_PERCENTAGE: f64 = 5.0;
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub mongo_uri: String,
    pub mongo_database: String,
    pub run_migrations: bool,
    pub port: u16,
    pub is_dev: bool,
    pub surcharge_percentage: f64,
    pub store_timeout: Duration,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| lookup(key).with_context(|| format!("Missing env: {key}"));

        let database_url = require("DATABASE_URL")?;
        let mongo_uri = require("MONGODB_URI")?;
        let mongo_database = require("MONGODB_DATABASE")?;
        let run_migrations_str = require("RUN_MIGRATIONS")?;
        let port_str = require("PORT")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{other}'",
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let is_dev = lookup("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let surcharge_percentage = match lookup("SURCHARGE_PERCENTAGE") {
            Some(raw) => raw
                .parse::<f64>()
                .context("SURCHARGE_PERCENTAGE must be a number")?,
            None => DEFAULT_SURCHARGE_PERCENTAGE,
        };
        if !surcharge_percentage.is_finite() || surcharge_percentage < 0.0 {
            return Err(anyhow!(
                "SURCHARGE_PERCENTAGE must be a non-negative number, got {surcharge_percentage}"
            ));
        }

        let store_timeout_secs = match lookup("STORE_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("STORE_TIMEOUT_SECS must be a valid u64 integer")?,
            None => DEFAULT_STORE_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url,
            mongo_uri,
            mongo_database,
            run_migrations,
            port,
            is_dev,
            surcharge_percentage,
            store_timeout: Duration::from_secs(store_timeout_secs),
        })
    }
}
