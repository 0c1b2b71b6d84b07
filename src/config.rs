use std::{env, fmt::Display, net::IpAddr, net::SocketAddr, str::FromStr};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: IpAddr,
    pub port: u16,
    pub max_connections: u32,
}

#[derive(Debug, Error)]
#[error("invalid value {value:?} for {key}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: try_load(&lookup, "DATABASE_URL", "sqlite://university.db")?,
            bind_addr: try_load(&lookup, "BIND_ADDR", "127.0.0.1")?,
            port: try_load(&lookup, "PORT", "3010")?,
            max_connections: try_load(&lookup, "DB_MAX_CONNECTIONS", "10")?,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_else(|| {
        debug!("{key} not set, using default: {default}");
        default.to_string()
    });

    let parsed: Result<T, T::Err> = value.parse();
    parsed.map_err(|e| ConfigError {
        key,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_listen_on_port_3010() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3010);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.database_url, "sqlite://university.db");
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3010");
    }

    #[test]
    fn overrides_are_parsed() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("BIND_ADDR", "0.0.0.0"),
            ("DATABASE_URL", "sqlite::memory:"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.database_url, "sqlite::memory:");
    }

    #[test]
    fn bad_values_name_the_variable() {
        let err = Config::from_lookup(lookup(&[("DB_MAX_CONNECTIONS", "many")])).unwrap_err();
        assert_eq!(err.key, "DB_MAX_CONNECTIONS");
        assert_eq!(err.value, "many");
    }
}
