//! Core logger types and traits

pub mod destination;
pub mod entry;
pub mod error;
pub mod format;
pub mod logger;
pub mod severity;

pub use destination::{shared, Destination, SharedDestination};
pub use entry::LogEntry;
pub use error::{DestinationFailure, DispatchError, MinilogError, Result};
pub use format::{LineFormat, DEFAULT_DATE_FORMAT, DEFAULT_MESSAGE_FORMAT};
pub use logger::Logger;
pub use severity::{Severity, ALL_SEVERITIES};
