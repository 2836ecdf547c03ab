//! Main logger implementation

use chrono::{DateTime, Utc};

use super::{
    destination::SharedDestination,
    entry::LogEntry,
    error::{DestinationFailure, DispatchError, MinilogError, Result},
    severity::Severity,
};

/// One registered destination with its acceptance threshold.
struct Registration {
    destination: SharedDestination,
    min_level: Severity,
}

/// Fans each logged message out to every registered destination whose
/// threshold is satisfied.
///
/// Destinations are dispatched in registration order. The list only grows;
/// there is no removal API. The same destination handle may be registered
/// multiple times with different thresholds, and each registration fires
/// independently.
pub struct Logger {
    registrations: Vec<Registration>,
}

impl Logger {
    /// Create a logger with one mandatory initial destination.
    ///
    /// The threshold defaults to [`Severity::Debug`], i.e. accept everything.
    pub fn new(destination: SharedDestination, min_level: Option<Severity>) -> Self {
        let mut logger = Self {
            registrations: Vec::new(),
        };
        logger.add_destination(destination, min_level);
        logger
    }

    /// Append a destination registration.
    ///
    /// No de-duplication is performed.
    pub fn add_destination(&mut self, destination: SharedDestination, min_level: Option<Severity>) {
        self.registrations.push(Registration {
            destination,
            min_level: min_level.unwrap_or(Severity::Debug),
        });
    }

    /// Log a message at the given level.
    ///
    /// The timestamp defaults to now. Every registration whose threshold is
    /// satisfied (`level.rank() >= min_level.rank()`) receives the entry, in
    /// registration order. A failing destination never prevents dispatch to
    /// the destinations after it; if any failed, the per-destination errors
    /// are collected into [`MinilogError::Dispatch`].
    pub fn log(
        &self,
        message: impl Into<String>,
        level: Severity,
        time: Option<DateTime<Utc>>,
    ) -> Result<()> {
        let entry = LogEntry::new(level, message.into(), time);
        let mut failures = Vec::new();

        for (index, registration) in self.registrations.iter().enumerate() {
            if entry.level.rank() < registration.min_level.rank() {
                continue;
            }

            // Per-destination panic isolation: a panicking sink is reported
            // like a write failure instead of unwinding through dispatch.
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                registration.destination.lock().log(&entry)
            }));

            match result {
                Ok(Ok(())) => {}
                Ok(Err(error)) => {
                    failures.push(DestinationFailure {
                        index,
                        destination: registration.destination.lock().name().to_string(),
                        error: Box::new(error),
                    });
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    failures.push(DestinationFailure {
                        index,
                        destination: registration.destination.lock().name().to_string(),
                        error: Box::new(MinilogError::Panicked(panic_msg)),
                    });
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(MinilogError::Dispatch(DispatchError { failures }))
        }
    }

    /// Flush every registered destination.
    pub fn flush(&self) -> Result<()> {
        for registration in &self.registrations {
            registration.destination.lock().flush()?;
        }
        Ok(())
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log(message, Severity::Debug, None)
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log(message, Severity::Info, None)
    }

    #[inline]
    pub fn notice(&self, message: impl Into<String>) -> Result<()> {
        self.log(message, Severity::Notice, None)
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) -> Result<()> {
        self.log(message, Severity::Warning, None)
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) -> Result<()> {
        self.log(message, Severity::Error, None)
    }

    #[inline]
    pub fn critical(&self, message: impl Into<String>) -> Result<()> {
        self.log(message, Severity::Critical, None)
    }

    #[inline]
    pub fn alert(&self, message: impl Into<String>) -> Result<()> {
        self.log(message, Severity::Alert, None)
    }

    #[inline]
    pub fn emergency(&self, message: impl Into<String>) -> Result<()> {
        self.log(message, Severity::Emergency, None)
    }
}
