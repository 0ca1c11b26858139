//! Status report interpretation.
//!
//! Turns the free-text output of a feeder status command into a
//! [`Snapshot`](feeder_types::Snapshot).
//!
//! ## Submodules
//!
//! - [`normalize`]: raw module names to [`ModuleKind`](feeder_types::ModuleKind)
//! - [`classify`]: routes each line to a parser by its literal prefix
//! - [`module_line`]: module identity, run state, pid and notice
//! - [`connection_line`]: per-role connection records
//! - [`identity`]: feeder id and dump endpoint lines
//! - [`fr24`]: labelled fields of an fr24feed report
//! - [`aggregate`]: the whole report to a [`StatusReport`]
//!
//! ## Data Flow
//!
//! ```text
//! report text
//!      │
//!      ▼
//! classify() per line ──▶ grouped lines
//!      │
//!      ├──▶ parse_module_line()      ──▶ modules
//!      ├──▶ parse_connection_line()  ──▶ connections (cross-referencing modules)
//!      ├──▶ parse_feeder_id()        ──▶ feeder id (first line only)
//!      ├──▶ parse_dump_endpoint()    ──▶ endpoint (first line only)
//!      └──▶ parse_fr24_status()      ──▶ fr24feed fields (first line per field)
//! ```
//!
//! Every function here is a pure text transform. Malformed input narrows
//! the snapshot, it never fails the call.

pub mod aggregate;
pub mod classify;
pub mod connection_line;
pub mod fr24;
pub mod identity;
pub mod module_line;
pub mod normalize;

pub use aggregate::{build, interpret, StatusReport};
pub use classify::{classify, LineKind};
pub use connection_line::parse_connection_line;
pub use fr24::{parse_fr24_line, parse_fr24_status};
pub use identity::{parse_dump_endpoint, parse_feeder_id, FALLBACK_PORT};
pub use module_line::parse_module_line;
pub use normalize::normalize;

#[cfg(test)]
mod tests {
    use super::*;

    /// Whatever a line is classified as, its parser must cope with it.
    #[test]
    fn test_classify_then_parse_never_panics() {
        let lines = [
            "",
            "(",
            ")(",
            "PiAware ",
            "PiAware ()",
            "PiAware (piaware) is running with pid ",
            "PiAware (piaware) is running with pid .",
            "PiAware (piaware) is running with pid 99999999999999999999.",
            "Local ADS-B (",
            "dump1090-fa",
            "dump1090-fa .",
            "dump1090-fa is listening for ",
            "dump1090-fa is listening for  on port",
            "faup1090 is",
            "piaware is .",
            "dump1090 is ",
            "dump1090 is :",
            "dump1090 is x:y:z.",
            "Your feeder ID is",
            "Your feeder ID is (",
            "Your feeder ID is 335bb436-4746-41d3-81b1-ce05b8ba8ecb",
            "FR24",
            "FR24 :",
            "FR24 Link: [",
            "FR24 Tracked AC: -1.",
            "Receiver: (",
            "Receiver: ü(",
            "ünïcödé (dümp) is running with pid ①.",
        ];
        let modules = [feeder_types::ModuleStatus::running(
            feeder_types::ModuleKind::Dump1090Fa,
            None,
            "",
        )];

        for line in lines {
            match classify(line) {
                LineKind::Module => {
                    let _ = parse_module_line(line);
                }
                LineKind::Connection => {
                    let _ = parse_connection_line(line, &modules);
                    let _ = parse_connection_line(line, &[]);
                }
                LineKind::DumpEndpoint => {
                    let _ = parse_dump_endpoint(line);
                }
                LineKind::FeederId => {
                    let _ = parse_feeder_id(line);
                }
                LineKind::Fr24 => {
                    let _ = parse_fr24_status([line]);
                }
                LineKind::Unknown => {}
            }
            let _ = interpret(line);
        }
    }
}
