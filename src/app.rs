//! Application state for the doctor loop.

use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::data::{FeederData, HealthPolicy, Verdict};
use crate::source::ReportSource;

/// Main application state.
///
/// Holds a report source and the data from the most recent report. The
/// binary drives it either once (`reload_data` then exit) or in a loop.
pub struct App {
    source: Box<dyn ReportSource>,
    pub data: Option<FeederData>,
    pub load_error: Option<String>,
    pub policy: HealthPolicy,
    /// Verdict of the previous report, for change detection.
    last_verdict: Option<Verdict>,
}

impl App {
    /// Create a new App with the given report source and health policy.
    pub fn new(source: Box<dyn ReportSource>, policy: HealthPolicy) -> Self {
        Self {
            source,
            data: None,
            load_error: None,
            policy,
            last_verdict: None,
        }
    }

    /// Returns a description of the current report source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Poll the report source for a new report.
    ///
    /// Returns true if a new report was interpreted.
    pub fn reload_data(&mut self) -> bool {
        match self.source.poll() {
            Some(text) => self.accept_report(&text),
            None => {
                if let Some(err) = self.source.error() {
                    self.load_error = Some(err.to_string());
                }
                false
            }
        }
    }

    /// Interpret report text obtained outside the source.
    ///
    /// A blank report says nothing about the feeder: it is recorded as a
    /// load error and the previous data and verdict are kept. Returns true
    /// if the report was interpreted.
    pub fn accept_report(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            warn!("{}: empty status report", self.source.description());
            self.load_error = Some("empty status report".to_string());
            return false;
        }

        let data = FeederData::parse(text, &self.policy);

        if self.last_verdict.is_some_and(|last| last != data.verdict) {
            info!(
                "verdict changed to {}: {}",
                data.verdict.label(),
                data.summary_line()
            );
        }
        if data.verdict == Verdict::Restart {
            warn!("feeder needs a restart: {}", data.summary_line());
        }

        self.last_verdict = Some(data.verdict);
        self.data = Some(data);
        self.load_error = None;
        true
    }

    /// Verdict of the most recent report, if one was read.
    pub fn verdict(&self) -> Option<Verdict> {
        self.data.as_ref().map(|d| d.verdict)
    }

    /// Export current state to a file.
    pub fn export_state(&self, path: &Path) -> Result<()> {
        let Some(ref data) = self.data else {
            anyhow::bail!("No data to export");
        };
        data.export(path)
    }
}
