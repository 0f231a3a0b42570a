use anyhow::{Context, Result};
use dotenvy::dotenv;
use serpapi_client::Credential;
use std::env;
use std::path::PathBuf;

const DEFAULT_INPI_URL: &str = "https://crawler3-production.up.railway.app/api/data/inpi/patents";
const DEFAULT_POOL_PATH: &str = "/tmp/serpapi_pool.json";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Seed credentials for the SerpAPI pool, `name:key` pairs.
    pub serpapi_keys: Vec<Credential>,
    pub serpapi_pool_path: PathBuf,
    pub inpi_url: String,
    pub expected_baseline: Option<usize>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let serpapi_keys = env::var("SERPAPI_KEYS")
            .context("SERPAPI_KEYS must be set (comma-separated name:key pairs)")?;

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            serpapi_keys: parse_credentials(&serpapi_keys)?,
            serpapi_pool_path: env::var("SERPAPI_POOL_PATH")
                .unwrap_or_else(|_| DEFAULT_POOL_PATH.to_string())
                .into(),
            inpi_url: env::var("INPI_URL").unwrap_or_else(|_| DEFAULT_INPI_URL.to_string()),
            expected_baseline: match env::var("EXPECTED_BASELINE") {
                Ok(raw) => Some(raw.parse().context("EXPECTED_BASELINE must be a number")?),
                Err(_) => None,
            },
        })
    }
}

/// Parse `name:key,name:key` into seed credentials.
fn parse_credentials(raw: &str) -> Result<Vec<Credential>> {
    let mut credentials = Vec::new();
    for pair in raw.split(',') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        let (name, key) = pair
            .split_once(':')
            .with_context(|| format!("SERPAPI_KEYS entry '{pair}' is not a name:key pair"))?;
        credentials.push(Credential::new(name.trim(), key.trim()));
    }
    if credentials.is_empty() {
        anyhow::bail!("SERPAPI_KEYS contains no credentials");
    }
    Ok(credentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_credential_pairs() {
        let credentials = parse_credentials("daniel:abc123, nova:def456").unwrap();
        assert_eq!(credentials.len(), 2);
        assert_eq!(credentials[0].name, "daniel");
        assert_eq!(credentials[0].key, "abc123");
        assert_eq!(credentials[1].name, "nova");
        assert_eq!(credentials[1].used, 0);
    }

    #[test]
    fn rejects_malformed_entries() {
        assert!(parse_credentials("no-separator").is_err());
        assert!(parse_credentials("").is_err());
    }
}
