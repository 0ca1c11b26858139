//! # feeder-types
//!
//! Core types for ADS-B feeder status snapshots. This crate defines the
//! structured form of a feeder status report (the text printed by
//! `piaware-status` and its relatives): which sub-modules exist, whether
//! they run, which of them hold live connections, the feeder identity and
//! the endpoint the decoder publishes data on. fr24feed reports, which print
//! labelled fields instead of module lines, are kept as an [`Fr24Status`].
//!
//! ## Design Goals
//!
//! - **Invariants by construction**: a stopped module never carries a pid,
//!   a running module never carries a notice
//! - **Closed vocabularies**: module kinds and connection targets are
//!   enumerations with an explicit `Unknown` variant
//! - **Derived health**: the running count and the critical flag are
//!   computed from the module list, never stored
//! - **Optional serialization**: enable the `serde` feature as needed
//!
//! ## Features
//!
//! - `serde`: JSON/TOML/etc. serialization via serde
//!
//! ## Example
//!
//! ```rust
//! use feeder_types::{ModuleKind, ModuleStatus, Snapshot};
//!
//! let snapshot = Snapshot::builder()
//!     .module(ModuleStatus::running(ModuleKind::Piaware, Some(25826), ""))
//!     .module(ModuleStatus::running(ModuleKind::Faup1090, Some(25876), ""))
//!     .module(ModuleStatus::stopped(ModuleKind::Faup978, None, ""))
//!     .build();
//!
//! assert_eq!(snapshot.running_count(), 2);
//! assert!(!snapshot.is_critical());
//! ```
//!
//! ## Schema Version
//!
//! The current schema version is **1**. The version is included in
//! serialized snapshots so that consumers of exported files can detect
//! format changes.

mod connection;
mod fr24;
mod identity;
mod module;
mod snapshot;
mod version;

pub use connection::*;
pub use fr24::*;
pub use identity::*;
pub use module::*;
pub use snapshot::*;
pub use version::*;

/// Current schema version.
///
/// Increment this when making breaking changes to the snapshot format.
pub const SCHEMA_VERSION: u32 = 1;
