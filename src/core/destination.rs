//! Destination trait for log output sinks

use std::sync::Arc;

use parking_lot::Mutex;

use super::{entry::LogEntry, error::Result};

/// A sink that receives filtered, formatted log lines.
///
/// Implementations render each entry with their own [`LineFormat`] and write
/// the result to their underlying sink. Write failures propagate; the logger
/// isolates them per destination during fan-out.
///
/// [`LineFormat`]: crate::core::format::LineFormat
pub trait Destination: Send {
    /// Format the entry and write it to the underlying sink.
    fn log(&mut self, entry: &LogEntry) -> Result<()>;

    /// Replace the date template; takes effect on the next render.
    fn set_date_format(&mut self, template: &str);

    /// Replace the message template; takes effect on the next render.
    fn set_message_format(&mut self, template: &str);

    /// Drain any stream buffering in the underlying sink.
    fn flush(&mut self) -> Result<()>;

    /// Short name used to identify this destination in dispatch errors.
    fn name(&self) -> &str;
}

/// A destination handle that can be registered with a logger.
///
/// The mutex serializes writes when the same destination is registered more
/// than once or logged to from multiple threads.
pub type SharedDestination = Arc<Mutex<dyn Destination>>;

/// Wrap a concrete destination for registration.
pub fn shared<D: Destination + 'static>(destination: D) -> SharedDestination {
    Arc::new(Mutex::new(destination))
}
