use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;

const DEFAULT_STATIC_DIR: &str = "../frontend/dist";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(ConfigError::InvalidEnvironment(other.to_string())),
        }
    }
}

impl Environment {
    pub fn default_port(self) -> u16 {
        match self {
            Environment::Staging => 3100,
            _ => 3000,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub environment: Environment,
    pub bind_addr: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl SiteConfig {
    /// Reads `ENVIRONMENT`, `BIND_ADDR`, `PORT` and `STATIC_DIR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("ENVIRONMENT") {
            Some(value) => value.parse()?,
            None => Environment::Production,
        };
        let bind_addr = match lookup("BIND_ADDR") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr(value))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value))?,
            None => environment.default_port(),
        };
        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self {
            environment,
            bind_addr,
            port,
            static_dir,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// Fails when there is no built bundle to serve.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.static_dir.is_dir() {
            Ok(())
        } else {
            Err(ConfigError::MissingStaticDir(self.static_dir.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_production_on_3000() {
        let config = config(&[]).unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("../frontend/dist"));
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn staging_listens_on_3100() {
        let config = config(&[("ENVIRONMENT", "staging")]).unwrap();
        assert_eq!(config.port, 3100);
    }

    #[test]
    fn explicit_port_wins() {
        let config = config(&[("ENVIRONMENT", "staging"), ("PORT", "8080")]).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config(&[("PORT", "eighty")]),
            Err(ConfigError::InvalidPort(_))
        ));
        assert!(matches!(
            config(&[("ENVIRONMENT", "prod")]),
            Err(ConfigError::InvalidEnvironment(_))
        ));
        assert!(matches!(
            config(&[("BIND_ADDR", "localhost")]),
            Err(ConfigError::InvalidBindAddr(_))
        ));
    }

    #[test]
    fn validate_requires_static_dir() {
        let config = config(&[("STATIC_DIR", "/definitely/not/here")]).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingStaticDir(_))
        ));
    }
}
