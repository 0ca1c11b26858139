//! Feeder id and dump endpoint lines.

use feeder_types::{DumpEndpoint, FeederId};

const FEEDER_ID_PREFIX: &str = "Your feeder ID is ";

/// Port assumed when the endpoint line carries no readable port.
pub const FALLBACK_PORT: u16 = 80;

/// Parse `Your feeder ID is <uuid> (from ...)`.
///
/// Anything that does not yield a valid UUID gives [`FeederId::EMPTY`].
pub fn parse_feeder_id(line: &str) -> FeederId {
    line.strip_prefix(FEEDER_ID_PREFIX)
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|token| token.parse().ok())
        .unwrap_or(FeederId::EMPTY)
}

/// Parse `dump1090 is producing data on <host>:<port>.`
///
/// The last word is taken as the endpoint. A missing or unreadable port
/// falls back to [`FALLBACK_PORT`]; an empty host yields no endpoint.
pub fn parse_dump_endpoint(line: &str) -> Option<DumpEndpoint> {
    let last = line.split_whitespace().last()?;
    let last = last.strip_suffix('.').unwrap_or(last);

    let (host, port) = match last.split_once(':') {
        Some((host, port)) => (host.trim(), port.parse().unwrap_or(FALLBACK_PORT)),
        None => (last.trim(), FALLBACK_PORT),
    };

    if host.is_empty() {
        return None;
    }
    Some(DumpEndpoint::new(host, port))
}
