//! Connection line parsing.
//!
//! Three shapes appear in reports, one per module role:
//!
//! ```text
//! dump1090-fa (pid 3739) is listening for ES connections on port 30005.
//! faup1090 is connected to the ADS-B receiver.
//! piaware is connected to FlightAware.
//! ```
//!
//! The first word names the module and selects the shape.

use feeder_types::{ConnectionStatus, ConnectionTarget, ModuleKind, ModuleStatus};

use super::normalize::normalize;
use crate::error::StatusError;

const IS_CONNECTED_TO: &str = "is connected to";
const LISTENING_FOR: &str = "is listening for ";
const ON_PORT: &str = " on port";

/// Parse a connection line.
///
/// `modules` is the module list already built from the same report; decoder
/// lines must refer to one of its entries.
pub fn parse_connection_line(
    line: &str,
    modules: &[ModuleStatus],
) -> Result<ConnectionStatus, StatusError> {
    let line = line.trim().trim_end_matches('.');
    let words: Vec<&str> = line.split_whitespace().collect();
    let kind = words.first().map(|w| normalize(w)).unwrap_or_default();

    let status = match kind {
        ModuleKind::Dump1090Fa | ModuleKind::Dump978Fa => {
            if !modules.iter().any(|m| m.kind() == kind) {
                return Err(StatusError::MissingModule {
                    kind,
                    line: line.to_string(),
                });
            }
            parse_decoder(kind, line)
        }
        ModuleKind::Faup1090 | ModuleKind::Faup978 => {
            let target = match words.as_slice() {
                [.., a, b] => ConnectionTarget::from_phrase(&format!("{} {}", a, b)),
                _ => ConnectionTarget::Unknown,
            };
            ConnectionStatus::bridge(kind, line.contains(IS_CONNECTED_TO), target)
        }
        ModuleKind::Piaware => {
            let target = words
                .last()
                .map(|w| ConnectionTarget::from_phrase(w))
                .unwrap_or_default();
            ConnectionStatus::master(kind, line.contains(IS_CONNECTED_TO), target)
        }
        ModuleKind::FaMlatClient | ModuleKind::Unknown => ConnectionStatus::unsupported(kind),
    };

    Ok(status)
}

fn parse_decoder(kind: ModuleKind, line: &str) -> ConnectionStatus {
    let Some(start) = line.find(LISTENING_FOR) else {
        return ConnectionStatus::decoder(kind, false, ConnectionTarget::Unknown, None);
    };
    let rest = &line[start + LISTENING_FOR.len()..];

    let (target, port) = match rest.find(ON_PORT) {
        Some(at) => {
            let port = rest[at + ON_PORT.len()..]
                .split_whitespace()
                .next()
                .and_then(|p| p.parse().ok());
            (ConnectionTarget::from_phrase(&rest[..at]), port)
        }
        None => (ConnectionTarget::from_phrase(rest), None),
    };

    ConnectionStatus::decoder(kind, true, target, port)
}
