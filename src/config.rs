use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// PostgreSQL user
    pub db_user: String,

    /// PostgreSQL host
    pub db_host: String,

    /// PostgreSQL database name
    pub db_database: String,

    /// PostgreSQL password
    pub db_password: String,

    /// PostgreSQL port
    pub db_port: u16,

    /// Upper bound on concurrently open pooled connections
    #[serde(default = "default_pool_size")]
    pub db_pool_size: u32,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_pool_size() -> u32 {
    10
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// All `DB_*` values are checked here, before any connection attempt, so
    /// a bad environment surfaces as a configuration error rather than a
    /// connection failure later on.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values envy accepts but the pool cannot use.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("DB_USER", &self.db_user),
            ("DB_HOST", &self.db_host),
            ("DB_DATABASE", &self.db_database),
            ("DB_PASSWORD", &self.db_password),
        ] {
            if value.is_empty() {
                anyhow::bail!("{} must not be empty", name);
            }
        }
        if self.db_port == 0 {
            anyhow::bail!("DB_PORT must be a valid TCP port");
        }
        if self.db_pool_size == 0 {
            anyhow::bail!("DB_POOL_SIZE must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn base() -> Vec<(String, String)> {
        env(&[
            ("DB_USER", "catalog"),
            ("DB_HOST", "localhost"),
            ("DB_DATABASE", "catalog"),
            ("DB_PASSWORD", "secret"),
            ("DB_PORT", "5432"),
        ])
    }

    #[test]
    fn test_numeric_port_parses() {
        let config: Config = envy::from_iter(base()).unwrap();
        assert_eq!(config.db_port, 5432);
        config.validate().unwrap();
    }

    #[test]
    fn test_non_numeric_port_is_rejected() {
        let mut vars = base();
        vars.retain(|(k, _)| k != "DB_PORT");
        vars.push(("DB_PORT".to_string(), "abc".to_string()));
        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }

    #[test]
    fn test_missing_password_is_rejected() {
        let vars: Vec<_> = base()
            .into_iter()
            .filter(|(k, _)| k != "DB_PASSWORD")
            .collect();
        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }

    #[test]
    fn test_empty_user_fails_validation() {
        let mut vars = base();
        vars.retain(|(k, _)| k != "DB_USER");
        vars.push(("DB_USER".to_string(), String::new()));
        let config: Config = envy::from_iter(vars).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_defaults() {
        let config: Config = envy::from_iter(base()).unwrap();
        assert_eq!(config.db_pool_size, 10);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_pool_size_override() {
        let mut vars = base();
        vars.push(("DB_POOL_SIZE".to_string(), "25".to_string()));
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.db_pool_size, 25);
    }
}
