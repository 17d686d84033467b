//! Listen address parsing.
//!
//! Addresses follow the `host:port` form; a bare `:port` listens on every
//! interface and is opened in the browser as `localhost`.

use super::ServerStartError;

/// Host bound when the address omits one.
const ANY_HOST: &str = "0.0.0.0";

/// Host used in the browser URL when the server listens on every interface.
const BROWSER_HOST: &str = "localhost";

/// A parsed `[host]:port` listen address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenAddress {
    host: Option<String>,
    port: u16,
}

impl ListenAddress {
    /// Parses `:8080`, `127.0.0.1:8080`, or `[::1]:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`ServerStartError::InvalidAddress`] if the port is missing or invalid.
    pub fn parse(address: &str) -> Result<Self, ServerStartError> {
        let invalid = |message: &str| ServerStartError::InvalidAddress {
            address: address.to_string(),
            message: message.to_string(),
        };

        let (host, port) = address
            .rsplit_once(':')
            .ok_or_else(|| invalid("expected [host]:port"))?;
        let port = port
            .parse::<u16>()
            .map_err(|_| invalid("port must be a number between 0 and 65535"))?;

        let host = match host {
            "" => None,
            host => Some(host.to_string()),
        };
        Ok(Self { host, port })
    }

    /// Returns the port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the `host:port` string handed to the socket.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host.as_deref().unwrap_or(ANY_HOST), self.port)
    }

    /// Returns the host to use in the browser URL.
    pub fn browser_host(&self) -> &str {
        match self.host.as_deref() {
            None | Some(ANY_HOST) | Some("[::]") => BROWSER_HOST,
            Some(host) => host,
        }
    }
}
