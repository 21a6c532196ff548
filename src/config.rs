use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: IpAddr,
    pub port: u16,

    // Messages: bundled files are used when no directory is configured
    pub messages_dir: Option<PathBuf>,

    // Static assets served under /static
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: match std::env::var("HOST") {
                Ok(v) => v.parse().context(format!("HOST is not an IP address: {}", v))?,
                Err(_) => IpAddr::from([0, 0, 0, 0]),
            },
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().context(format!("PORT is not a valid port: {}", v))?,
                Err(_) => 3000,
            },

            messages_dir: std::env::var("MESSAGES_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),

            static_dir: std::env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static")),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            messages_dir: None,
            static_dir: PathBuf::from("static"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert!(config.messages_dir.is_none());
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_bind_addr() {
        let config = Config {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
    }
}
