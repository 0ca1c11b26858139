//! Report aggregation: raw report text in, snapshot out.

use feeder_types::Snapshot;
use tracing::{debug, warn};

use super::classify::{classify, LineKind};
use super::connection_line::parse_connection_line;
use super::fr24::{parse_fr24_line, parse_fr24_status};
use super::identity::{parse_dump_endpoint, parse_feeder_id};
use super::module_line::parse_module_line;
use crate::error::StatusError;

/// A snapshot together with what the engine could not use.
#[derive(Debug, Clone, Default)]
pub struct StatusReport {
    pub snapshot: Snapshot,
    /// Non-empty lines no rule recognized, in report order.
    pub unknown_lines: Vec<String>,
    /// Places where the report contradicts itself.
    pub issues: Vec<StatusError>,
}

impl StatusReport {
    pub fn into_snapshot(self) -> Snapshot {
        self.snapshot
    }

    pub fn is_consistent(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Lines of one report grouped by kind, report order kept within a group.
#[derive(Debug, Default)]
struct GroupedLines<'a> {
    modules: Vec<&'a str>,
    connections: Vec<&'a str>,
    dump_endpoints: Vec<&'a str>,
    feeder_ids: Vec<&'a str>,
    fr24: Vec<&'a str>,
    unknown: Vec<&'a str>,
}

impl<'a> GroupedLines<'a> {
    fn from_report(report: &'a str) -> Self {
        let mut grouped = Self::default();
        for line in report.split(['\r', '\n']) {
            match classify(line) {
                LineKind::Module => grouped.modules.push(line),
                LineKind::Connection => grouped.connections.push(line),
                LineKind::DumpEndpoint => grouped.dump_endpoints.push(line),
                LineKind::FeederId => grouped.feeder_ids.push(line),
                LineKind::Fr24 if parse_fr24_line(line).is_some() => grouped.fr24.push(line),
                LineKind::Fr24 => grouped.unknown.push(line),
                LineKind::Unknown if line.trim().is_empty() => {}
                LineKind::Unknown => grouped.unknown.push(line),
            }
        }
        grouped
    }
}

/// Interpret a full status report.
///
/// Module lines are parsed before connection lines whatever their order in
/// the report, since decoder connections refer back to the module list.
/// Only the first feeder id and the first dump endpoint line are used.
/// fr24feed lines with a known label fill the snapshot's fr24 status;
/// those with an unknown label are kept as unknown lines.
pub fn interpret(report: &str) -> StatusReport {
    let grouped = GroupedLines::from_report(report);
    debug!(
        "classified report: {} module, {} connection, {} endpoint, {} feeder id, {} fr24, {} unknown lines",
        grouped.modules.len(),
        grouped.connections.len(),
        grouped.dump_endpoints.len(),
        grouped.feeder_ids.len(),
        grouped.fr24.len(),
        grouped.unknown.len()
    );

    let mut builder = Snapshot::builder();
    for line in &grouped.modules {
        if let Some(module) = parse_module_line(line) {
            builder = builder.module(module);
        }
    }

    let mut issues = Vec::new();
    for line in &grouped.connections {
        match parse_connection_line(line, builder.modules()) {
            Ok(connection) => builder = builder.connection(connection),
            Err(e) => {
                warn!("inconsistent status report: {}", e);
                issues.push(e);
            }
        }
    }

    if let Some(line) = grouped.feeder_ids.first() {
        builder = builder.feeder_id(parse_feeder_id(line));
    }
    if let Some(endpoint) = grouped
        .dump_endpoints
        .first()
        .and_then(|line| parse_dump_endpoint(line))
    {
        builder = builder.dump_endpoint(endpoint);
    }
    if !grouped.fr24.is_empty() {
        builder = builder.fr24(parse_fr24_status(grouped.fr24.iter().copied()));
    }

    StatusReport {
        snapshot: builder.build(),
        unknown_lines: grouped.unknown.into_iter().map(str::to_string).collect(),
        issues,
    }
}

/// Build a snapshot from a full status report, discarding diagnostics.
pub fn build(report: &str) -> Snapshot {
    interpret(report).into_snapshot()
}
