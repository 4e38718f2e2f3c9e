use std::net::{Ipv4Addr, SocketAddr};

use crate::error::{ServerError, ServerResult};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Allow any origin, method and header.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            cors: true,
        }
    }
}

impl ServerConfig {
    /// Read `PORT` and `TODO_CORS` from the process environment.
    pub fn from_env() -> ServerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> ServerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT") {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|_| ServerError::Config(format!("invalid PORT: {port:?}")))?;
            config.bind_addr.set_port(port);
        }

        if let Some(cors) = lookup("TODO_CORS") {
            config.cors = match cors.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ServerError::Config(format!("invalid TODO_CORS: {cors:?}")));
                }
            };
        }

        Ok(config)
    }
}
