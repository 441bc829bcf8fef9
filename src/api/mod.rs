//! HTTP surface over the conversion engine
//!
//! | Method | Path | Input |
//! |---|---|---|
//! | GET | `/api/to-utm` | `latitude`, `longitude`, optional `unit` |
//! | GET | `/api/to-latlon` | `easting`, `northing`, `zone`, optional `hemisphere`, `unit` |
//! | POST | `/api/upload` | multipart `csv` file, optional `unit` |
//!
//! Invalid coordinates are answered with `400` and an [`models::ErrorResponse`].

pub mod handlers;
pub mod models;
pub mod routes;

use std::fmt;
use std::net::SocketAddr;

pub use routes::create_router;

/// Environment variable holding the bind address
pub const ADDR_ENV: &str = "UTM_API_ADDR";

/// Address used when [`ADDR_ENV`] is unset
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

/// Invalid server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {} value: {:?}", ADDR_ENV, self.value)
    }
}

impl std::error::Error for ConfigError {}

impl ServerConfig {
    /// Reads the configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_addr(std::env::var(ADDR_ENV).ok().as_deref())
    }

    /// Builds the configuration from an optional address string
    pub fn from_addr(addr: Option<&str>) -> Result<Self, ConfigError> {
        let value = addr.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_ADDR);
        let addr = value.parse().map_err(|_| ConfigError {
            value: value.to_string(),
        })?;
        Ok(Self { addr })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
        }
    }
}
