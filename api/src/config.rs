use std::env;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Create the `employees` table on startup when it is missing
    pub auto_create_schema: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = match env::var("PORT") {
            Ok(p) => p.parse().with_context(|| format!("Invalid PORT: {}", p))?,
            Err(_) => 8080,
        };

        let auto_create_schema = match env::var("DB_AUTO_CREATE_SCHEMA") {
            Ok(v) => parse_bool(&v)
                .with_context(|| format!("Invalid DB_AUTO_CREATE_SCHEMA: {}", v))?,
            Err(_) => true,
        };

        Ok(Self {
            database_url,
            port,
            auto_create_schema,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
