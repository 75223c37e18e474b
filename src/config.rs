use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use dotenvy::dotenv;

pub const DEFAULT_BACKEND_PORT: u16 = 3001;
pub const DEFAULT_FRONTEND_PORT: u16 = 3000;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Listen address for one of the two services.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    /// Loads the JSON API config from `BACKEND_HOST` / `BACKEND_PORT`.
    pub fn backend() -> Result<Self, anyhow::Error> {
        Self::load("BACKEND_HOST", "BACKEND_PORT", DEFAULT_BACKEND_PORT)
    }

    /// Loads the page server config from `FRONTEND_HOST` / `FRONTEND_PORT`.
    pub fn frontend() -> Result<Self, anyhow::Error> {
        Self::load("FRONTEND_HOST", "FRONTEND_PORT", DEFAULT_FRONTEND_PORT)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    fn load(host_var: &str, port_var: &str, default_port: u16) -> Result<Self, anyhow::Error> {
        dotenv().ok(); // Load .env if present (dev mode)

        let host = match std::env::var(host_var) {
            Ok(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|e| anyhow::anyhow!("{host_var} is not a valid IP address ({raw:?}): {e}"))?,
            Err(_) => DEFAULT_HOST,
        };

        let raw_port = std::env::var(port_var).ok();
        let port = parse_port(raw_port.as_deref(), default_port);
        if raw_port.is_some() && port == default_port {
            tracing::debug!(var = port_var, value = ?raw_port, "using default port {default_port}");
        }

        Ok(Self { host, port })
    }
}

/// Resolves a port setting, falling back to `default` when the value is
/// missing, not a number, out of range, or zero.
pub fn parse_port(raw: Option<&str>, default: u16) -> u16 {
    raw.and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|port| *port != 0)
        .unwrap_or(default)
}
