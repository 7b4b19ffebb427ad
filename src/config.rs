use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::net::SocketAddr;

fn default_max_upload_size() -> usize {
    // 10 MB in bytes
    10 * 1024 * 1024
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub max_upload_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            max_upload_size: default_max_upload_size(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self> {
        // Load .env file first
        dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let listen_addr = match lookup("LISTEN_ADDR") {
            Some(addr) => addr
                .parse()
                .with_context(|| format!("Invalid LISTEN_ADDR: {}", addr))?,
            None => default_listen_addr(),
        };

        let max_upload_size = match lookup("MAX_UPLOAD_SIZE") {
            Some(size) => size
                .parse()
                .with_context(|| format!("Invalid MAX_UPLOAD_SIZE: {}", size))?,
            None => default_max_upload_size(),
        };

        Ok(Config {
            listen_addr,
            max_upload_size,
        })
    }
}

pub fn load_config() -> Result<Config> {
    let config = Config::new()?;
    tracing::info!(
        "Loaded configuration: listen_addr={}, max_upload_size={}",
        config.listen_addr,
        config.max_upload_size
    );
    Ok(config)
}
