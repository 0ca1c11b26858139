//! Error types for report interpretation and report sources.

use feeder_types::ModuleKind;
use thiserror::Error;

/// Conditions the interpretation engine reports to the caller.
///
/// Malformed lines never produce one of these; they degrade to absent
/// fields. These are reserved for reports that contradict themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    /// A connection line names a module that no module line listed.
    #[error("connection line refers to {kind}, but the report lists no such module: {line}")]
    MissingModule { kind: ModuleKind, line: String },
}

/// Errors that can occur while obtaining report text from a source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading the underlying file or stream failed.
    #[error("Read error: {0}")]
    Read(#[from] std::io::Error),

    /// The report exceeded the maximum accepted size.
    #[error("Report too large: more than {limit} bytes")]
    TooLarge { limit: usize },

    /// The producer side went away.
    #[error("Source disconnected")]
    Disconnected,
}
