//! Central module for application-wide configuration settings.
//!
//! This module handles loading configuration parameters such as the listen
//! port, the database URL, and the token-signing secret from the environment,
//! falling back to fixed development defaults.

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite://todos.db?mode=rwc";
const DEFAULT_JWT_SECRET: &str = "dev-only-jwt-secret";

/// Runtime configuration, built once in `main` and injected from there.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
}

impl Config {
    /// Reads `PORT`, `DATABASE_URL`, and `JWT_SECRET` from the environment.
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            port: parse_port(std::env::var("PORT").ok()),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned()),
            jwt_secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_owned()),
        }
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset() {
        assert_eq!(parse_port(None), DEFAULT_PORT);
    }

    #[test]
    fn port_defaults_when_not_a_number() {
        assert_eq!(parse_port(Some("not-a-port".into())), DEFAULT_PORT);
    }

    #[test]
    fn port_parses_when_valid() {
        assert_eq!(parse_port(Some("8080".into())), 8080);
    }
}
