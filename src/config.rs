use std::net::{IpAddr, SocketAddr};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: IpAddr,
    pub server_port: u16,
    pub environment: Environment,
    pub log_level: String,
    pub frontend_url: String,
    pub db_min_connections: u32,
    pub db_max_connections: u32,
}

/// Deployment environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        match value {
            "production" => Self::Production,
            "staging" => Self::Staging,
            _ => Self::Development,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required: `DATABASE_URL`
    /// Optional with defaults: `SERVER_HOST`, `SERVER_PORT`, `ENVIRONMENT`, `LOG_LEVEL`,
    /// `FRONTEND_URL`, `DB_MIN_CONNECTIONS`, `DB_MAX_CONNECTIONS`
    ///
    /// `PORT` overrides `SERVER_PORT`, and the host defaults to `0.0.0.0` in production.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is not set, if any numeric or address
    /// variable is malformed, or if the pool bounds are inverted.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let environment = Environment::parse(
            &std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        );

        let server_port = std::env::var("PORT")
            .or_else(|_| std::env::var("SERVER_PORT"))
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("SERVER_PORT / PORT must be a valid u16"))?;

        let default_host = if environment == Environment::Production {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        };

        let server_host = std::env::var("SERVER_HOST")
            .unwrap_or_else(|_| default_host.to_string())
            .parse::<IpAddr>()
            .map_err(|_| anyhow::anyhow!("SERVER_HOST must be a valid IP address"))?;

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3001".to_string());

        let db_min_connections = parse_pool_size("DB_MIN_CONNECTIONS", 1)?;
        let db_max_connections = parse_pool_size("DB_MAX_CONNECTIONS", 10)?;

        let config = Self {
            database_url,
            server_host,
            server_port,
            environment,
            log_level,
            frontend_url,
            db_min_connections,
            db_max_connections,
        };
        config.validate()?;

        Ok(config)
    }

    /// Check invariants that span several variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool maximum is zero or below the minimum.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_min_connections > self.db_max_connections {
            anyhow::bail!(
                "DB_MIN_CONNECTIONS ({}) must not exceed DB_MAX_CONNECTIONS ({})",
                self.db_min_connections,
                self.db_max_connections
            );
        }
        Ok(())
    }

    /// Build the socket address for the server to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }
}

fn parse_pool_size(var: &str, default: u32) -> anyhow::Result<u32> {
    std::env::var(var).map_or(Ok(default), |raw| {
        raw.parse::<u32>()
            .map_err(|_| anyhow::anyhow!("{var} must be a non-negative integer"))
    })
}
