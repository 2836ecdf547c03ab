//! File destination implementation
//!
//! Appends rendered lines to a text file at a caller-supplied path. Each
//! write opens the file in append mode and closes it again, so the path can
//! be changed between writes and no handle is held across calls.
//!
//! A trailing newline is appended to every line, matching the console
//! destination, so both variants produce line-oriented output.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::{Destination, LineFormat, LogEntry, MinilogError, Result};

#[derive(Debug)]
pub struct FileDestination {
    path: PathBuf,
    format: LineFormat,
}

impl FileDestination {
    /// Create a file destination with default templates.
    ///
    /// An empty path is a configuration error and fails construction.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_formats(path, None, None)
    }

    /// Create a file destination with template overrides.
    pub fn with_formats(
        path: impl Into<PathBuf>,
        date_format: Option<&str>,
        message_format: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            path: Self::require_path(path.into())?,
            format: LineFormat::new(date_format, message_format),
        })
    }

    /// Change the path subsequent writes append to.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        self.path = Self::require_path(path.into())?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn require_path(path: PathBuf) -> Result<PathBuf> {
        if path.as_os_str().is_empty() {
            return Err(MinilogError::config(
                "FileDestination",
                "A log path must be configured",
            ));
        }
        Ok(path)
    }
}

impl Destination for FileDestination {
    fn log(&mut self, entry: &LogEntry) -> Result<()> {
        let mut line = self
            .format
            .render(&entry.message, entry.level.as_str(), &entry.timestamp);
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| {
                MinilogError::io_operation(
                    "opening log file",
                    self.path.display().to_string(),
                    source,
                )
            })?;
        file.write_all(line.as_bytes()).map_err(|source| {
            MinilogError::io_operation(
                "appending log line",
                self.path.display().to_string(),
                source,
            )
        })?;
        Ok(())
    }

    fn set_date_format(&mut self, template: &str) {
        self.format.set_date_format(template);
    }

    fn set_message_format(&mut self, template: &str) {
        self.format.set_message_format(template);
    }

    fn flush(&mut self) -> Result<()> {
        // Nothing buffered, the file is opened and closed per write
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;
    use chrono::{TimeZone, Utc};
    use std::fs;
    use tempfile::TempDir;

    fn entry(level: Severity, message: &str) -> LogEntry {
        LogEntry::new(
            level,
            message.to_string(),
            Some(Utc.timestamp_opt(0, 0).unwrap()),
        )
    }

    #[test]
    fn test_empty_path_fails_construction() {
        let err = FileDestination::new("").unwrap_err();
        assert!(matches!(err, MinilogError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_empty_path_rejected_by_set_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut dest = FileDestination::new(temp_dir.path().join("app.log")).unwrap();
        assert!(dest.set_path("").is_err());
    }

    #[test]
    fn test_appends_plain_lines() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_file = temp_dir.path().join("app.log");
        let mut dest = FileDestination::new(&log_file).unwrap();

        dest.log(&entry(Severity::Warning, "disk low")).unwrap();
        dest.log(&entry(Severity::Error, "disk full")).unwrap();

        let content = fs::read_to_string(&log_file).unwrap();
        assert_eq!(
            content,
            "01-01-1970 12:00AM - [Warning] - disk low\n\
             01-01-1970 12:00AM - [Error] - disk full\n"
        );
    }

    #[test]
    fn test_level_token_is_uncolored() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_file = temp_dir.path().join("plain.log");
        let mut dest = FileDestination::new(&log_file).unwrap();

        dest.log(&entry(Severity::Critical, "x")).unwrap();

        let content = fs::read_to_string(&log_file).unwrap();
        assert!(!content.contains('\x1b'));
        assert!(content.contains("[Critical]"));
    }

    #[test]
    fn test_set_path_switches_target_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let first = temp_dir.path().join("first.log");
        let second = temp_dir.path().join("second.log");

        let mut dest = FileDestination::new(&first).unwrap();
        dest.log(&entry(Severity::Info, "one")).unwrap();

        dest.set_path(&second).unwrap();
        dest.log(&entry(Severity::Info, "two")).unwrap();

        assert!(fs::read_to_string(&first).unwrap().contains("one"));
        assert!(fs::read_to_string(&second).unwrap().contains("two"));
    }

    #[test]
    fn test_unwritable_path_propagates_write_error() {
        let missing_dir = Path::new("/nonexistent-minilog-dir/app.log");
        let mut dest = FileDestination::new(missing_dir).unwrap();

        let err = dest.log(&entry(Severity::Error, "x")).unwrap_err();
        assert!(matches!(err, MinilogError::IoOperation { .. }));
    }
}
