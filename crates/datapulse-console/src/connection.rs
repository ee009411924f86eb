//! Connection Status
//!
//! Whether the seller has a marketplace account connected. The status comes
//! from an external source; pages read it once per render.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Connection status of the seller's marketplace account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Connected,
    #[default]
    NotConnected,
}

impl ConnectionStatus {
    pub fn is_connected(self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::NotConnected => "not_connected",
        }
    }

    /// Human-readable badge text
    pub fn label(self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::NotConnected => "Not connected",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known connection status
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown connection status '{0}', expected 'connected' or 'not_connected'")]
pub struct ParseStatusError(pub String);

impl FromStr for ConnectionStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "connected" => Ok(ConnectionStatus::Connected),
            "not_connected" | "not-connected" => Ok(ConnectionStatus::NotConnected),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Source of the connection status for the current session
pub trait ConnectionStatusSource {
    fn status(&self) -> ConnectionStatus;
}

/// A source that always reports the same status
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedConnectionStatus(pub ConnectionStatus);

impl ConnectionStatusSource for FixedConnectionStatus {
    fn status(&self) -> ConnectionStatus {
        self.0
    }
}

impl<S: ConnectionStatusSource + ?Sized> ConnectionStatusSource for &S {
    fn status(&self) -> ConnectionStatus {
        (**self).status()
    }
}

/// Marketplaces a seller account can be connected to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Marketplace {
    Wildberries,
    Ozon,
}

impl Marketplace {
    pub const ALL: [Marketplace; 2] = [Marketplace::Wildberries, Marketplace::Ozon];

    pub fn label(self) -> &'static str {
        match self {
            Marketplace::Wildberries => "Wildberries",
            Marketplace::Ozon => "Ozon",
        }
    }

    pub fn test_id(self) -> &'static str {
        match self {
            Marketplace::Wildberries => "connection-wildberries",
            Marketplace::Ozon => "connection-ozon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_connected() {
        assert_eq!(ConnectionStatus::default(), ConnectionStatus::NotConnected);
        assert!(!ConnectionStatus::default().is_connected());
    }

    #[test]
    fn test_parse() {
        assert_eq!("connected".parse(), Ok(ConnectionStatus::Connected));
        assert_eq!(" Not_Connected ".parse(), Ok(ConnectionStatus::NotConnected));
        assert_eq!("not-connected".parse(), Ok(ConnectionStatus::NotConnected));

        let err = "maybe".parse::<ConnectionStatus>().unwrap_err();
        assert_eq!(err, ParseStatusError("maybe".to_string()));
    }

    #[test]
    fn test_display_matches_parse() {
        for status in [ConnectionStatus::Connected, ConnectionStatus::NotConnected] {
            assert_eq!(status.to_string().parse(), Ok(status));
        }
    }

    #[test]
    fn test_fixed_source() {
        let source = FixedConnectionStatus(ConnectionStatus::Connected);
        assert_eq!(source.status(), ConnectionStatus::Connected);
        assert_eq!((&source).status(), ConnectionStatus::Connected);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&ConnectionStatus::NotConnected).unwrap();
        assert_eq!(json, "\"not_connected\"");
        let json = serde_json::to_string(&Marketplace::Wildberries).unwrap();
        assert_eq!(json, "\"WILDBERRIES\"");
    }
}
