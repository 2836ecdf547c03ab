//! Severity level definitions

use std::fmt;
use std::str::FromStr;

use crate::core::error::MinilogError;

/// Named logging importance tiers with fixed integer ranks.
///
/// The ranks are part of the public contract: filtering compares ranks, and
/// anything at or above [`Severity::Error`] is routed and colored as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Default)]
#[repr(u32)]
pub enum Severity {
    /// Detailed debug information.
    #[default]
    Debug = 100,
    /// Interesting events. Examples: user logs in, SQL logs.
    Info = 200,
    /// Normal but significant events.
    Notice = 250,
    /// Exceptional occurrences that are not errors, e.g. use of deprecated APIs.
    Warning = 300,
    /// Runtime errors that do not require immediate action.
    Error = 400,
    /// Critical conditions, e.g. application component unavailable.
    Critical = 500,
    /// Action must be taken immediately, e.g. entire site down.
    Alert = 550,
    /// System is unusable.
    Emergency = 600,
}

/// All levels in ascending rank order.
///
/// This is the process-wide level table destinations render names from; it
/// never changes at runtime.
pub const ALL_SEVERITIES: [Severity; 8] = [
    Severity::Debug,
    Severity::Info,
    Severity::Notice,
    Severity::Warning,
    Severity::Error,
    Severity::Critical,
    Severity::Alert,
    Severity::Emergency,
];

impl Severity {
    /// The integer rank used for filtering and routing.
    pub fn rank(&self) -> u32 {
        *self as u32
    }

    /// The human readable display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "Debug",
            Severity::Info => "Info",
            Severity::Notice => "Notice",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Critical => "Critical",
            Severity::Alert => "Alert",
            Severity::Emergency => "Emergency",
        }
    }

    /// Look up a level by its numeric rank.
    ///
    /// Unknown ranks are a caller error and surface as
    /// [`MinilogError::UnknownRank`] rather than panicking.
    pub fn from_rank(rank: u32) -> Result<Self, MinilogError> {
        ALL_SEVERITIES
            .iter()
            .copied()
            .find(|level| level.rank() == rank)
            .ok_or(MinilogError::UnknownRank(rank))
    }

    /// Whether this level is at or above [`Severity::Error`].
    ///
    /// Error-class entries go to the error stream and are colored red.
    pub fn is_error_class(&self) -> bool {
        self.rank() >= Severity::Error.rank()
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        if self.is_error_class() {
            Red
        } else {
            Green
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = MinilogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "notice" => Ok(Severity::Notice),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "critical" => Ok(Severity::Critical),
            "alert" => Ok(Severity::Alert),
            "emergency" => Ok(Severity::Emergency),
            _ => Err(MinilogError::UnknownName(s.to_string())),
        }
    }
}
