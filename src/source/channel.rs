//! Channel-based report source.
//!
//! Receives report text via a tokio watch channel, for producers running
//! in the same process (a task that periodically runs the status command).

use tokio::sync::watch;

use super::ReportSource;

/// A report source that receives report text via a channel.
///
/// The empty placeholder a channel starts with is never returned; the first
/// poll yields nothing until a producer sends a report.
///
/// # Example
///
/// ```
/// use feeder_doctor::ChannelSource;
///
/// let (tx, source) = ChannelSource::create("piaware-status every 60s");
/// tx.send("piaware is connected to FlightAware.".to_string()).unwrap();
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<String>,
    description: String,
}

impl ChannelSource {
    /// Create a new channel source.
    ///
    /// `source_description` says where the reports come from, for display.
    /// A report already present in the channel is returned by the first poll.
    pub fn new(mut receiver: watch::Receiver<String>, source_description: &str) -> Self {
        if !receiver.borrow().is_empty() {
            receiver.mark_changed();
        }
        let description = format!("channel: {}", source_description);
        Self {
            receiver,
            description,
        }
    }

    /// Create a channel pair. The sender pushes reports into the source.
    pub fn create(source_description: &str) -> (watch::Sender<String>, Self) {
        let (tx, rx) = watch::channel(String::new());
        let source = Self::new(rx, source_description);
        (tx, source)
    }
}

impl ReportSource for ChannelSource {
    fn poll(&mut self) -> Option<String> {
        if self.receiver.has_changed().unwrap_or(false) {
            Some(self.receiver.borrow_and_update().clone())
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        None
    }
}
