//! Application configuration
//!
//! Command-line flags with environment variable fallbacks and sensible
//! defaults.

use clap::Parser;
use std::path::PathBuf;

/// Default upload limit for a single photo (10 MiB)
pub const DEFAULT_MAX_PHOTO_BYTES: usize = 10 * 1024 * 1024;

/// Command-line arguments
#[derive(Debug, Clone, Parser)]
#[command(name = "inventory-service", version)]
#[command(about = "Inventory tracking HTTP service with photo uploads")]
pub struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the server to
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Directory where uploaded photos are stored and served from
    #[arg(short, long = "cache", env = "CACHE_DIR", default_value = "./cache")]
    pub cache_dir: PathBuf,

    /// Base address used in photo URLs (defaults to http://{host}:{port})
    #[arg(long, env = "PUBLIC_URL")]
    pub public_url: Option<String>,

    /// Largest accepted photo upload in bytes
    #[arg(long, env = "MAX_PHOTO_BYTES", default_value_t = DEFAULT_MAX_PHOTO_BYTES)]
    pub max_photo_bytes: usize,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Photo storage configuration
    pub storage: StorageConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
    /// Externally reachable base address, if different from host:port
    pub public_url: Option<String>,
}

/// Photo storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Cache directory for uploaded photos
    pub cache_dir: PathBuf,
    /// Largest accepted photo upload in bytes
    pub max_photo_bytes: usize,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            server: ServerConfig {
                port: cli.port,
                host: cli.host,
                public_url: cli.public_url.filter(|url| !url.trim().is_empty()),
            },
            storage: StorageConfig {
                cache_dir: cli.cache_dir,
                max_photo_bytes: cli.max_photo_bytes,
            },
        }
    }
}

impl Config {
    /// Parse command-line arguments and environment variables
    pub fn load() -> Self {
        Cli::parse().into()
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Base address for photo URLs
    pub fn public_url(&self) -> String {
        match &self.server.public_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://{}", self.server_addr()),
        }
    }
}
