//! # minilog
//!
//! A very small leveled logging facade. One [`Logger`] fans each message out
//! to the destinations registered with it; every destination carries its own
//! minimum severity and its own date/message templates.
//!
//! ## Features
//!
//! - **Eight fixed severity levels**: `Debug` (100) through `Emergency` (600)
//! - **Multiple destinations**: console (dual-stream, colorized) and
//!   append-only file, plus anything implementing [`Destination`]
//! - **Per-destination filtering**: each registration has its own threshold
//! - **Templated output**: `@date`, `@level` and `@message` placeholders
//!
//! ## Example
//!
//! ```no_run
//! use minilog::prelude::*;
//!
//! let mut logger = Logger::new(shared(ConsoleDestination::new()), None);
//! logger.add_destination(
//!     shared(FileDestination::new("app.log")?),
//!     Some(Severity::Warning),
//! );
//!
//! logger.info("started")?;          // console only
//! logger.warning("disk low")?;      // console and file
//! # Ok::<(), minilog::MinilogError>(())
//! ```

pub mod core;
pub mod destinations;

pub mod prelude {
    pub use crate::core::{
        shared, Destination, LineFormat, LogEntry, Logger, MinilogError, Result, Severity,
        SharedDestination,
    };
    pub use crate::destinations::{ConsoleDestination, FileDestination};
}

pub use crate::core::{
    shared, Destination, DestinationFailure, DispatchError, LineFormat, LogEntry, Logger,
    MinilogError, Result, Severity, SharedDestination, ALL_SEVERITIES, DEFAULT_DATE_FORMAT,
    DEFAULT_MESSAGE_FORMAT,
};
pub use crate::destinations::{ConsoleDestination, FileDestination};
