//! # feeder-doctor
//!
//! Interprets the free-text status report of an ADS-B feeder (the output of
//! `piaware-status` or `fr24feed-status`) and decides whether the feeder
//! needs a restart.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Application                         │
//! │  ┌─────────┐    ┌──────────┐    ┌──────────┐                 │
//! │  │   app   │───▶│  status  │───▶│   data   │──▶ JSON/summary │
//! │  │ (state) │    │ (engine) │    │ (health) │                 │
//! │  └────┬────┘    └──────────┘    └──────────┘                 │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  ┌─────────┐                                                 │
//! │  │ source  │◀── FileSource | StreamSource | ChannelSource    │
//! │  │ (input) │                                                 │
//! │  └─────────┘                                                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`status`]**: the interpretation engine, report text to
//!   [`Snapshot`](feeder_types::Snapshot)
//! - **[`data`]**: health annotation, keep/restart [`Verdict`] and export
//! - **[`source`]**: the [`ReportSource`] trait with file, stream and
//!   channel implementations
//! - **[`app`]**: state for one-shot and watch runs
//! - **[`config`]**: settings from a TOML file and the environment
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! piaware-status | feeder-doctor --stdin
//! feeder-doctor --file /run/piaware/status.txt --watch --refresh 30
//! ```
//!
//! ### As a library
//!
//! ```
//! use feeder_doctor::status;
//!
//! let snapshot = status::build(
//!     "PiAware master process (piaware) is running with pid 25826.\n\
//!      Local ADS-B receiver (dump1090-fa) is not running.",
//! );
//! assert_eq!(snapshot.running_count(), 1);
//! assert!(!snapshot.is_critical());
//! ```
//!
//! ### With a report source
//!
//! ```
//! use feeder_doctor::{App, ChannelSource, HealthPolicy};
//!
//! let (tx, source) = ChannelSource::create("piaware-status");
//! let mut app = App::new(Box::new(source), HealthPolicy::default());
//! tx.send("piaware is connected to FlightAware.".to_string()).unwrap();
//! app.reload_data();
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod source;
pub mod status;

// Re-export main types for convenience
pub use app::App;
pub use config::Settings;
pub use data::{FeederData, HealthPolicy, HealthStatus, ModuleData, Verdict};
pub use error::{SourceError, StatusError};
pub use source::{ChannelSource, FileSource, ReportSource, StreamSource};
pub use status::StatusReport;
