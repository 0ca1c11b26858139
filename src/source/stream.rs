//! Stream-based report source.
//!
//! Reads report text from an async byte stream such as stdin or the
//! stdout of a spawned status command.

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::ReportSource;
use crate::error::SourceError;

/// Largest report accepted from a stream, in bytes.
pub const MAX_REPORT_BYTES: usize = 1024 * 1024;

/// A report source that receives report text from an async stream.
///
/// A background task reads the stream to EOF and delivers the whole text
/// as one report.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use feeder_doctor::StreamSource;
///
/// # tokio_test::block_on(async {
/// let data = b"piaware is connected to FlightAware.\n";
/// let mut source = StreamSource::spawn(Cursor::new(data.to_vec()), "example");
/// let text = source.recv().await;
/// assert!(text.is_some());
/// # });
/// ```
#[derive(Debug)]
pub struct StreamSource {
    receiver: mpsc::Receiver<Result<String, SourceError>>,
    description: String,
    last_error: Option<String>,
    received: bool,
}

impl StreamSource {
    /// Spawn a background task that reads the given async reader to EOF.
    pub fn spawn<R>(reader: R, description: &str) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        Self::spawn_with_limit(reader, description, MAX_REPORT_BYTES)
    }

    /// Like [`spawn`](Self::spawn) with a custom size limit.
    pub fn spawn_with_limit<R>(reader: R, description: &str, limit: usize) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(1);

        tokio::spawn(async move {
            let result = read_report(reader, limit).await;
            // Receiver dropped; nobody wants the report.
            let _ = tx.send(result).await;
        });

        Self::with_receiver(rx, description)
    }

    fn with_receiver(
        receiver: mpsc::Receiver<Result<String, SourceError>>,
        description: &str,
    ) -> Self {
        Self {
            receiver,
            description: format!("stream: {}", description),
            last_error: None,
            received: false,
        }
    }

    /// Wait for the next report.
    ///
    /// Returns `None` when the stream failed or has nothing more to give;
    /// [`error`](ReportSource::error) then says why.
    pub async fn recv(&mut self) -> Option<String> {
        let message = self.receiver.recv().await;
        self.accept(message)
    }

    fn accept(&mut self, message: Option<Result<String, SourceError>>) -> Option<String> {
        match message {
            Some(Ok(text)) => {
                debug!("{}: received {} bytes", self.description, text.len());
                self.received = true;
                self.last_error = None;
                Some(text)
            }
            Some(Err(e)) => {
                warn!("{}: {}", self.description, e);
                self.last_error = Some(e.to_string());
                None
            }
            None => {
                if !self.received && self.last_error.is_none() {
                    self.last_error = Some(SourceError::Disconnected.to_string());
                }
                None
            }
        }
    }
}

async fn read_report<R>(reader: R, limit: usize) -> Result<String, SourceError>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    // One byte past the limit tells an oversize report from an exact fit.
    reader.take(limit as u64 + 1).read_to_end(&mut buf).await?;
    if buf.len() > limit {
        return Err(SourceError::TooLarge { limit });
    }
    String::from_utf8(buf)
        .map_err(|e| SourceError::Read(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

impl ReportSource for StreamSource {
    fn poll(&mut self) -> Option<String> {
        match self.receiver.try_recv() {
            Ok(message) => self.accept(Some(message)),
            Err(mpsc::error::TryRecvError::Empty) => None,
            Err(mpsc::error::TryRecvError::Disconnected) => self.accept(None),
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const REPORT: &str = "\
PiAware master process (piaware) is running with pid 25826.
piaware is connected to FlightAware.
";

    #[tokio::test]
    async fn test_stream_source_reads_to_eof() {
        let mut source = StreamSource::spawn(Cursor::new(REPORT), "test");

        let text = source.recv().await;
        assert_eq!(text.as_deref(), Some(REPORT));
        assert!(source.error().is_none());

        // Only one report per stream
        assert!(source.recv().await.is_none());
        assert!(source.error().is_none());
    }

    #[tokio::test]
    async fn test_stream_source_poll() {
        let mut source = StreamSource::spawn(Cursor::new(REPORT), "test");

        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        assert!(source.poll().is_some());
        assert!(source.poll().is_none());
    }

    #[tokio::test]
    async fn test_stream_source_description() {
        let source = StreamSource::spawn(Cursor::new(""), "stdin");
        assert_eq!(source.description(), "stream: stdin");
    }

    #[tokio::test]
    async fn test_stream_source_empty_stream() {
        let mut source = StreamSource::spawn(Cursor::new(""), "test");
        assert_eq!(source.recv().await.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_stream_source_too_large() {
        let mut source = StreamSource::spawn_with_limit(Cursor::new(REPORT), "test", 16);

        assert!(source.recv().await.is_none());
        assert!(source.error().unwrap().contains("too large"));
    }

    #[tokio::test]
    async fn test_stream_source_exact_limit() {
        let mut source =
            StreamSource::spawn_with_limit(Cursor::new(REPORT), "test", REPORT.len());
        assert_eq!(source.recv().await.as_deref(), Some(REPORT));
    }

    #[tokio::test]
    async fn test_stream_source_invalid_utf8() {
        let data: Vec<u8> = vec![0xff, 0xfe, b'\n'];
        let mut source = StreamSource::spawn(Cursor::new(data), "test");

        assert!(source.recv().await.is_none());
        assert!(source.error().unwrap().contains("Read error"));
    }

    #[tokio::test]
    async fn test_stream_source_disconnected_without_report() {
        let (tx, rx) = mpsc::channel(1);
        let mut source = StreamSource::with_receiver(rx, "test");
        drop(tx);

        assert!(source.recv().await.is_none());
        assert_eq!(source.error(), Some("Source disconnected"));
    }
}
