use crate::error::{AppError, Result};

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-1106";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Service configuration, loaded once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    pub port: u16,
}

impl Config {
    /// Load from the environment (and `.env`). A port given here wins over `PORT`.
    pub fn from_env(port_override: Option<u16>) -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok(), port_override)
    }

    pub fn from_lookup<F>(lookup: F, port_override: Option<u16>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = lookup("OPENAI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(AppError::MissingEnv("OPENAI_API_KEY"))?;

        let openai_model = lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let openai_base_url =
            lookup("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());

        let port = match (port_override, lookup("PORT")) {
            (Some(port), _) => port,
            (None, Some(value)) => parse_port(&value)?,
            (None, None) => DEFAULT_PORT,
        };

        Ok(Self {
            openai_api_key,
            openai_model,
            openai_base_url,
            port,
        })
    }
}

/// Base URL the client uses to reach the playlist service.
pub fn client_api_url() -> String {
    dotenvy::dotenv().ok();

    std::env::var("MOODTUNES_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

fn parse_port(value: &str) -> Result<u16> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::Config(format!("PORT must be a number, got '{}'", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn load(env: &HashMap<String, String>, port: Option<u16>) -> Result<Config> {
        Config::from_lookup(|key| env.get(key).cloned(), port)
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("8080").unwrap(), 8080);
        assert_eq!(parse_port(" 3001 ").unwrap(), 3001);
        assert!(matches!(parse_port("eighty"), Err(AppError::Config(_))));
        assert!(parse_port("70000").is_err());
    }

    #[test]
    fn test_defaults() {
        let config = load(&vars(&[("OPENAI_API_KEY", "sk-test")]), None).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.openai_model, DEFAULT_MODEL);
        assert_eq!(config.openai_base_url, DEFAULT_OPENAI_BASE_URL);
    }

    #[test]
    fn test_missing_key() {
        for env in [vars(&[]), vars(&[("OPENAI_API_KEY", "  ")])] {
            assert!(matches!(
                load(&env, Some(8080)),
                Err(AppError::MissingEnv("OPENAI_API_KEY"))
            ));
        }
    }

    #[test]
    fn test_port_override_skips_invalid_env_port() {
        let env = vars(&[("OPENAI_API_KEY", "sk-test"), ("PORT", "not-a-port")]);

        let config = load(&env, Some(8080)).unwrap();
        assert_eq!(config.port, 8080);

        assert!(matches!(load(&env, None), Err(AppError::Config(_))));
    }

    #[test]
    fn test_env_port() {
        let env = vars(&[("OPENAI_API_KEY", "sk-test"), ("PORT", "4000")]);
        assert_eq!(load(&env, None).unwrap().port, 4000);
    }
}
