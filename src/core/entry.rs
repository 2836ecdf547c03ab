//! Log entry structure

use chrono::{DateTime, Utc};

use crate::core::severity::Severity;

/// One logged event, created per `log` call and consumed immediately by each
/// destination. Entries are never stored by the logger.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Severity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    /// Build an entry, stamping it with the current time when no explicit
    /// timestamp is supplied.
    pub fn new(level: Severity, message: String, time: Option<DateTime<Utc>>) -> Self {
        Self {
            level,
            message,
            timestamp: time.unwrap_or_else(Utc::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_explicit_timestamp_is_kept() {
        let t = Utc.timestamp_opt(0, 0).unwrap();
        let entry = LogEntry::new(Severity::Info, "hello".to_string(), Some(t));
        assert_eq!(entry.timestamp, t);
        assert_eq!(entry.level, Severity::Info);
        assert_eq!(entry.message, "hello");
    }

    #[test]
    fn test_default_timestamp_is_now() {
        let before = Utc::now();
        let entry = LogEntry::new(Severity::Debug, "x".to_string(), None);
        let after = Utc::now();
        assert!(entry.timestamp >= before && entry.timestamp <= after);
    }
}
