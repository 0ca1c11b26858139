//! Connection records reported by feeder modules.

use core::fmt;

use crate::ModuleKind;

/// What a module reports being connected to (or listening for).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ConnectionTarget {
    /// The local decoder, as seen by a bridge.
    AdsbReceiver,
    /// The upstream aggregation service, as seen by the master process.
    FlightAware,
    /// Extended-squitter clients, as announced by a decoder.
    EsConnections,
    #[default]
    Unknown,
}

/// Literal phrases used by the status report for each target.
const TARGET_PHRASES: &[(&str, ConnectionTarget)] = &[
    ("ADS-B receiver", ConnectionTarget::AdsbReceiver),
    ("FlightAware", ConnectionTarget::FlightAware),
    ("ES connections", ConnectionTarget::EsConnections),
];

impl ConnectionTarget {
    /// Map the phrase printed by the feeder to a target.
    ///
    /// Surrounding whitespace is ignored; anything not in the phrase table
    /// becomes `Unknown`.
    pub fn from_phrase(phrase: &str) -> Self {
        let phrase = phrase.trim();
        TARGET_PHRASES
            .iter()
            .find(|(literal, _)| *literal == phrase)
            .map(|(_, target)| *target)
            .unwrap_or(ConnectionTarget::Unknown)
    }

    /// The phrase the feeder prints for this target, empty for `Unknown`.
    pub fn as_phrase(&self) -> &'static str {
        TARGET_PHRASES
            .iter()
            .find(|(_, target)| target == self)
            .map(|(literal, _)| *literal)
            .unwrap_or("")
    }
}

impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionTarget::Unknown => f.write_str("unknown"),
            other => f.write_str(other.as_phrase()),
        }
    }
}

/// Role-specific part of a connection record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "role", rename_all = "snake_case"))]
pub enum ConnectionDetail {
    /// A decoder listening for clients on a TCP port.
    Decoder {
        target: ConnectionTarget,
        port: Option<u16>,
    },
    /// A bridge connected to the local decoder.
    Bridge { target: ConnectionTarget },
    /// The master process connected upstream.
    Master { target: ConnectionTarget },
    /// A module kind whose connection lines are not interpreted.
    Unsupported,
}

/// One connection line of a status report.
///
/// Refers to the [`ModuleStatus`](crate::ModuleStatus) of the same kind but
/// does not own it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectionStatus {
    kind: ModuleKind,
    connected: bool,
    detail: ConnectionDetail,
}

impl ConnectionStatus {
    pub fn decoder(
        kind: ModuleKind,
        connected: bool,
        target: ConnectionTarget,
        port: Option<u16>,
    ) -> Self {
        Self {
            kind,
            connected,
            detail: ConnectionDetail::Decoder { target, port },
        }
    }

    pub fn bridge(kind: ModuleKind, connected: bool, target: ConnectionTarget) -> Self {
        Self {
            kind,
            connected,
            detail: ConnectionDetail::Bridge { target },
        }
    }

    pub fn master(kind: ModuleKind, connected: bool, target: ConnectionTarget) -> Self {
        Self {
            kind,
            connected,
            detail: ConnectionDetail::Master { target },
        }
    }

    /// A connection line for a kind that carries no interpretable detail.
    /// Never counts as connected.
    pub fn unsupported(kind: ModuleKind) -> Self {
        Self {
            kind,
            connected: false,
            detail: ConnectionDetail::Unsupported,
        }
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn detail(&self) -> &ConnectionDetail {
        &self.detail
    }

    pub fn target(&self) -> ConnectionTarget {
        match &self.detail {
            ConnectionDetail::Decoder { target, .. }
            | ConnectionDetail::Bridge { target }
            | ConnectionDetail::Master { target } => *target,
            ConnectionDetail::Unsupported => ConnectionTarget::Unknown,
        }
    }

    /// Listening port; only decoders report one.
    pub fn port(&self) -> Option<u16> {
        match &self.detail {
            ConnectionDetail::Decoder { port, .. } => *port,
            _ => None,
        }
    }
}
