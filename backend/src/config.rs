//! Runtime settings of the static host, read from the environment.
//!
//! | variable                 | default     |
//! |--------------------------|-------------|
//! | `TICKETHUB_HOST`         | `127.0.0.1` |
//! | `TICKETHUB_PORT`         | `8080`      |
//! | `TICKETHUB_OPEN_BROWSER` | `true`      |

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("TICKETHUB_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("TICKETHUB_OPEN_BROWSER must be true/false/1/0, got {0:?}")]
    InvalidFlag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Open the page in the default browser once the server is up.
    pub open_browser: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("TICKETHUB_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("TICKETHUB_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let open_browser = match lookup("TICKETHUB_OPEN_BROWSER") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::InvalidFlag(raw)),
            },
            None => true,
        };

        Ok(Self {
            host,
            port,
            open_browser,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.open_browser);
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("TICKETHUB_HOST", "0.0.0.0"),
            ("TICKETHUB_PORT", "3000"),
            ("TICKETHUB_OPEN_BROWSER", "false"),
        ])
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(!config.open_browser);
    }

    #[test]
    fn bad_port() {
        assert_eq!(
            config(&[("TICKETHUB_PORT", "eighty")]),
            Err(ConfigError::InvalidPort("eighty".to_string()))
        );
        assert!(config(&[("TICKETHUB_PORT", "70000")]).is_err());
    }

    #[test]
    fn bad_flag() {
        assert_eq!(
            config(&[("TICKETHUB_OPEN_BROWSER", "maybe")]),
            Err(ConfigError::InvalidFlag("maybe".to_string()))
        );
    }
}
