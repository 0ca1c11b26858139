//! File-based report source.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::warn;

use super::ReportSource;
use crate::error::SourceError;

/// A report source that reads a status report from a text file.
///
/// The usual setup is a cron job or systemd timer redirecting the output
/// of the status command into a file. The source tracks the file's
/// modification time and only returns a report when the file changed.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    last_error: Option<String>,
    last_modified: Option<SystemTime>,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            last_error: None,
            last_modified: None,
        }
    }

    /// Returns the path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn get_modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }

    fn read_file(&mut self) -> Option<String> {
        match fs::read_to_string(&self.path).map_err(SourceError::from) {
            Ok(content) => {
                self.last_error = None;
                Some(content)
            }
            Err(e) => {
                warn!("{}: {}", self.description, e);
                self.last_error = Some(e.to_string());
                None
            }
        }
    }
}

impl ReportSource for FileSource {
    fn poll(&mut self) -> Option<String> {
        let current_modified = self.get_modified_time();

        let file_changed = match (&self.last_modified, &current_modified) {
            (None, _) => true,
            // File disappeared; keep the last report.
            (Some(_), None) => false,
            (Some(last), Some(current)) => current > last,
        };

        if file_changed {
            if let Some(content) = self.read_file() {
                self.last_modified = current_modified;
                return Some(content);
            }
        }

        None
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
