//! Application settings loaded via OrthoConfig.
//!
//! Values layer from defaults, an optional config file, `LEARNXCEL_*`
//! environment variables, and command-line flags.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_URL: &str = "learnxcel.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Process-wide settings for the HTTP server and its database.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LEARNXCEL")]
pub struct AppSettings {
    /// Interface to listen on.
    pub bind_host: Option<IpAddr>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// SQLite database path or `file:` URL.
    pub database_url: Option<String>,
    /// Upper bound on pooled connections.
    pub max_connections: Option<u32>,
    /// Skip applying embedded migrations before serving.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

impl AppSettings {
    /// Socket address assembled from `bind_host` and `port`.
    pub fn bind_addr(&self) -> SocketAddr {
        let host = self
            .bind_host
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        SocketAddr::new(host, self.port.unwrap_or(DEFAULT_PORT))
    }

    /// Return the configured database location, falling back to the default.
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Return the configured pool size, falling back to the default.
    pub fn max_connections(&self) -> u32 {
        self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    /// Whether migrations run at startup. Enabled unless skipped.
    pub fn run_migrations(&self) -> bool {
        !self.skip_migrations
    }
}
