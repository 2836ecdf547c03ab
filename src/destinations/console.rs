//! Console destination implementation

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{Destination, LineFormat, LogEntry, Result};

/// Writes colorized lines to the standard and error streams.
///
/// Both streams are opened at construction. Error-class entries (rank at or
/// above `Error`) go to the error stream, everything else to the standard
/// stream. The level token is wrapped in a color matching its class, with a
/// reset sequence after it, and each line gets a trailing newline.
pub struct ConsoleDestination {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
    format: LineFormat,
}

impl ConsoleDestination {
    pub fn new() -> Self {
        Self::with_formats(None, None)
    }

    /// Create a console destination with template overrides.
    pub fn with_formats(date_format: Option<&str>, message_format: Option<&str>) -> Self {
        Self::with_streams(
            Box::new(io::stdout()),
            Box::new(io::stderr()),
            LineFormat::new(date_format, message_format),
        )
    }

    fn with_streams(
        out: Box<dyn Write + Send>,
        err: Box<dyn Write + Send>,
        format: LineFormat,
    ) -> Self {
        Self { out, err, format }
    }
}

impl Default for ConsoleDestination {
    fn default() -> Self {
        Self::new()
    }
}

impl Destination for ConsoleDestination {
    fn log(&mut self, entry: &LogEntry) -> Result<()> {
        let level_name = entry
            .level
            .as_str()
            .color(entry.level.color_code())
            .to_string();

        let mut line = self
            .format
            .render(&entry.message, &level_name, &entry.timestamp);
        line.push('\n');

        let stream = if entry.level.is_error_class() {
            &mut self.err
        } else {
            &mut self.out
        };
        stream.write_all(line.as_bytes())?;
        Ok(())
    }

    fn set_date_format(&mut self, template: &str) {
        self.format.set_date_format(template);
    }

    fn set_message_format(&mut self, template: &str) {
        self.format.set_message_format(template);
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both streams since we write to both
        self.out.flush()?;
        self.err.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;
    use chrono::{TimeZone, Utc};
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Writer that keeps its bytes readable after the destination takes
    /// ownership of the boxed handle.
    #[derive(Clone)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn new() -> Self {
            Self(Arc::new(Mutex::new(Vec::new())))
        }

        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_console() -> (ConsoleDestination, SharedBuf, SharedBuf) {
        let out = SharedBuf::new();
        let err = SharedBuf::new();
        let dest = ConsoleDestination::with_streams(
            Box::new(out.clone()),
            Box::new(err.clone()),
            LineFormat::default(),
        );
        (dest, out, err)
    }

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for escaped in chars.by_ref() {
                    if escaped == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn entry(level: Severity, message: &str) -> LogEntry {
        LogEntry::new(
            level,
            message.to_string(),
            Some(Utc.timestamp_opt(0, 0).unwrap()),
        )
    }

    #[test]
    fn test_routing_below_error_goes_to_stdout() {
        let (mut dest, out, err) = capture_console();

        dest.log(&entry(Severity::Warning, "disk low")).unwrap();

        assert_eq!(
            strip_ansi(&out.contents()),
            "01-01-1970 12:00AM - [Warning] - disk low\n"
        );
        assert!(err.contents().is_empty());
    }

    #[test]
    fn test_routing_error_class_goes_to_stderr() {
        let (mut dest, out, err) = capture_console();

        dest.log(&entry(Severity::Error, "it broke")).unwrap();
        dest.log(&entry(Severity::Emergency, "all down")).unwrap();

        assert!(out.contents().is_empty());
        let lines: Vec<String> = err.contents().lines().map(|l| strip_ansi(l)).collect();
        assert_eq!(
            lines,
            vec![
                "01-01-1970 12:00AM - [Error] - it broke",
                "01-01-1970 12:00AM - [Emergency] - all down",
            ]
        );
    }

    #[test]
    fn test_color_wraps_level_token_only() {
        colored::control::set_override(true);
        let (mut dest, out, err) = capture_console();

        dest.log(&entry(Severity::Info, "fine")).unwrap();
        dest.log(&entry(Severity::Critical, "not fine")).unwrap();

        // Green for below Error, red at or above, reset after the name
        assert!(out.contents().contains("\x1b[32mInfo\x1b[0m"));
        assert!(err.contents().contains("\x1b[31mCritical\x1b[0m"));

        // The message itself stays uncolored
        assert!(out.contents().contains("- fine\n"));
        colored::control::unset_override();
    }

    #[test]
    fn test_set_message_format_applies_to_next_log_only() {
        let (mut dest, out, _err) = capture_console();

        dest.log(&entry(Severity::Info, "first")).unwrap();
        dest.set_message_format("@message!");
        dest.log(&entry(Severity::Info, "second")).unwrap();

        let content = strip_ansi(&out.contents());
        assert_eq!(content, "01-01-1970 12:00AM - [Info] - first\nsecond!\n");
    }
}
