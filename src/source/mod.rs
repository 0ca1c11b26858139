//! Report source abstraction.
//!
//! This module provides a trait-based abstraction for obtaining status
//! report text from various places (a file written by a cron job, an
//! in-process producer, stdin or a piped status command).

mod channel;
mod file;
mod stream;

pub use channel::ChannelSource;
pub use file::FileSource;
pub use stream::{StreamSource, MAX_REPORT_BYTES};

use std::fmt::Debug;

/// Trait for receiving status report text from various sources.
///
/// # Example
///
/// ```
/// use feeder_doctor::{FileSource, ReportSource};
///
/// let mut source = FileSource::new("piaware-status.txt");
/// if let Some(text) = source.poll() {
///     println!("Got {} bytes", text.len());
/// }
/// ```
pub trait ReportSource: Send + Debug {
    /// Poll for the latest report.
    ///
    /// Returns `Some(text)` if a new report is available, `None` otherwise.
    /// This method should be non-blocking.
    fn poll(&mut self) -> Option<String>;

    /// Returns a human-readable description of the source.
    fn description(&self) -> &str;

    /// Returns the error message if the last poll failed.
    fn error(&self) -> Option<&str>;
}
