use std::net::IpAddr;
use std::str::FromStr;

use axum::http::HeaderValue;

/// Which [`bookshelf_db::store::BookStore`] implementation to open at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            _ => Err(()),
        }
    }
}

/// An environment variable held a value that could not be used.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be {expected}, got '{value}'")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Store implementation (default: postgres).
    pub store_backend: StoreBackend,
    /// PostgreSQL connection string. Ignored by the memory backend.
    pub database_url: String,
    /// Upper bound on pooled database connections (default: `20`).
    pub db_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                      |
    /// |------------------------|------------------------------|
    /// | `HOST`                 | `0.0.0.0`                    |
    /// | `PORT`                 | `3000`                       |
    /// | `STORE_BACKEND`        | `postgres`                   |
    /// | `DATABASE_URL`         | `postgres://localhost/books` |
    /// | `DB_MAX_CONNECTIONS`   | `20`                         |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                         |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_var(&lookup, "HOST", "0.0.0.0", "an IP address")?;
        let port = parse_var(&lookup, "PORT", "3000", "a valid u16")?;
        let store_backend =
            parse_var(&lookup, "STORE_BACKEND", "postgres", "'postgres' or 'memory'")?;

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "postgres://localhost/books".into());

        let db_max_connections: u32 =
            parse_var(&lookup, "DB_MAX_CONNECTIONS", "20", "a positive u32")?;
        if db_max_connections == 0 {
            return Err(ConfigError {
                var: "DB_MAX_CONNECTIONS",
                expected: "a positive u32",
                value: "0".into(),
            });
        }

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|o| {
                o.parse::<HeaderValue>().map_err(|_| ConfigError {
                    var: "CORS_ORIGINS",
                    expected: "a comma-separated list of origins",
                    value: o.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs =
            parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "30", "a valid u64")?;

        Ok(Self {
            host,
            port,
            store_backend,
            database_url,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
        })
    }
}

fn parse_var<T, F>(
    lookup: &F,
    var: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    value.trim().parse().map_err(|_| ConfigError {
        var,
        expected,
        value,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::net::Ipv4Addr;

    use super::*;

    fn origins(config: &ServerConfig) -> Vec<&str> {
        config
            .cors_origins
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect()
    }

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();

        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.port, 3000);
        assert_eq!(config.store_backend, StoreBackend::Postgres);
        assert_eq!(config.database_url, "postgres://localhost/books");
        assert_eq!(config.db_max_connections, 20);
        assert_eq!(origins(&config), vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn overrides_are_read() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("STORE_BACKEND", "Memory"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
        ])
        .unwrap();

        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.port, 8080);
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(origins(&config), vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn invalid_port_names_the_variable() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.var, "PORT");
        assert_eq!(err.value, "eighty");
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let err = load(&[("STORE_BACKEND", "mongo")]).unwrap_err();
        assert_eq!(err.var, "STORE_BACKEND");
    }

    #[test]
    fn zero_connections_is_rejected() {
        let err = load(&[("DB_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert_eq!(err.var, "DB_MAX_CONNECTIONS");
    }
}
