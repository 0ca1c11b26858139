//! fr24feed status lines.

use feeder_types::{Fr24Field, Fr24Link, Fr24Status};

/// Split `Label: value.` into its field and value.
///
/// The value is trimmed and loses one trailing `.`. A line without a colon
/// or with a label no field answers to gives `None`.
pub fn parse_fr24_line(line: &str) -> Option<(Fr24Field, &str)> {
    let (label, value) = line.split_once(':')?;
    let field = Fr24Field::from_label(label);
    if field == Fr24Field::Unknown {
        return None;
    }

    let value = value.trim();
    let value = value.strip_suffix('.').unwrap_or(value).trim_end();
    Some((field, value))
}

/// Fold fr24feed lines into one status.
///
/// The first readable line of each field wins. Unrecognized lines are
/// skipped.
pub fn parse_fr24_status<'a>(lines: impl IntoIterator<Item = &'a str>) -> Fr24Status {
    let mut status = Fr24Status::default();
    for (field, value) in lines.into_iter().filter_map(parse_fr24_line) {
        apply(&mut status, field, value);
    }
    status
}

fn apply(status: &mut Fr24Status, field: Fr24Field, value: &str) {
    match field {
        Fr24Field::FeederDecoder => {
            first(&mut status.feeder_running, Some(starts_with(value, "running")))
        }
        Fr24Field::StatsTimestamp => first(&mut status.stats_timestamp, text(value)),
        Fr24Field::Link => first(&mut status.link, Some(link(value, "connected"))),
        Fr24Field::Radar => first(&mut status.radar, text(value)),
        Fr24Field::TrackedAircraft => first(&mut status.tracked_aircraft, count(value)),
        Fr24Field::Receiver => first(&mut status.receiver, Some(link(value, "connected"))),
        Fr24Field::Mlat => first(&mut status.mlat, Some(link(value, "ok"))),
        Fr24Field::MlatAircraftSeen => first(&mut status.mlat_aircraft_seen, count(value)),
        Fr24Field::Unknown => {}
    }
}

fn first<T>(slot: &mut Option<T>, value: Option<T>) {
    if slot.is_none() {
        *slot = value;
    }
}

fn starts_with(value: &str, word: &str) -> bool {
    value
        .get(..word.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(word))
}

fn link(value: &str, up: &str) -> Fr24Link {
    Fr24Link {
        connected: starts_with(value, up),
        detail: detail(value),
    }
}

/// Text inside the first `[...]` or `(...)`.
fn detail(value: &str) -> Option<String> {
    let start = value.find(['[', '('])?;
    let close = if value[start..].starts_with('[') { ']' } else { ')' };
    let inner = &value[start + 1..];
    let inner = inner.find(close).map_or(inner, |end| &inner[..end]).trim();
    (!inner.is_empty()).then(|| inner.to_string())
}

fn count(value: &str) -> Option<u32> {
    value.split_whitespace().next()?.parse().ok()
}

fn text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
