//! Feeder identity and the decoder's data endpoint.

use core::fmt;
use core::str::FromStr;

use uuid::Uuid;

/// Stable identity token of a feeder installation.
///
/// The all-zero value is reserved as the "empty" sentinel for reports that
/// carry no (or an unreadable) feeder id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FeederId(Uuid);

impl FeederId {
    /// The sentinel for "no feeder id".
    pub const EMPTY: FeederId = FeederId(Uuid::nil());

    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_nil()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for FeederId {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromStr for FeederId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for FeederId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

/// Host and port the decoder publishes its data on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DumpEndpoint {
    pub host: String,
    pub port: u16,
}

impl DumpEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for DumpEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feeder_id_round_trips_canonical_form() {
        let id: FeederId = "335bb436-4746-41d3-81b1-ce05b8ba8ecb".parse().unwrap();
        assert!(!id.is_empty());
        assert_eq!(id.to_string(), "335bb436-4746-41d3-81b1-ce05b8ba8ecb");
    }

    #[test]
    fn test_empty_feeder_id() {
        assert!(FeederId::EMPTY.is_empty());
        assert_eq!(FeederId::default(), FeederId::EMPTY);
        assert!("not-a-uuid".parse::<FeederId>().is_err());
    }

    #[test]
    fn test_endpoint_display() {
        assert_eq!(DumpEndpoint::new("localhost", 30005).to_string(), "localhost:30005");
    }
}
