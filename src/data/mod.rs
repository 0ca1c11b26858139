//! Processed feeder data.
//!
//! This module turns an interpreted status report into health-annotated
//! data suitable for display, export and the keep/restart decision.
//!
//! ## Data Flow
//!
//! ```text
//! report text
//!        │
//!        ▼
//! status::interpret()
//!        │
//!        ▼
//! FeederData::from_report()
//!        │
//!        ├──▶ ModuleData (health computed from HealthPolicy)
//!        │
//!        ├──▶ Verdict (Restart when the snapshot is critical)
//!        │
//!        └──▶ to_json() / summary_line()
//! ```

mod export;
pub mod feeder;

pub use feeder::{FeederData, HealthPolicy, HealthStatus, ModuleData, Verdict};
