//! Destination implementations

pub mod console;
pub mod file;

pub use console::ConsoleDestination;
pub use file::FileDestination;

// Re-export the trait alongside its implementations
pub use crate::core::Destination;
