//! Line rendering shared by all destinations
//!
//! Every destination owns a [`LineFormat`]: a strftime-style date template
//! plus a message template with `@date`, `@level` and `@message` placeholder
//! tokens. Rendering never appends a trailing newline; destinations that want
//! line-oriented output add the terminator themselves.

use chrono::{DateTime, Utc};

/// Default date template, a `01-01-1970 12:00AM` style stamp.
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y %I:%M%p";

/// Default message template.
pub const DEFAULT_MESSAGE_FORMAT: &str = "@date - [@level] - @message";

/// Per-destination render configuration.
///
/// Mutable at any time; changes only affect subsequent renders.
#[derive(Debug, Clone)]
pub struct LineFormat {
    date_format: String,
    message_format: String,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl LineFormat {
    /// Create a format, falling back to the defaults for any template not
    /// supplied.
    pub fn new(date_format: Option<&str>, message_format: Option<&str>) -> Self {
        Self {
            date_format: date_format.unwrap_or(DEFAULT_DATE_FORMAT).to_string(),
            message_format: message_format.unwrap_or(DEFAULT_MESSAGE_FORMAT).to_string(),
        }
    }

    /// Set a new date template, effective from the next render.
    pub fn set_date_format(&mut self, template: &str) {
        self.date_format = template.to_string();
    }

    /// Set a new message template, effective from the next render.
    pub fn set_message_format(&mut self, template: &str) {
        self.message_format = template.to_string();
    }

    /// Render a log line.
    ///
    /// `level_name` is the already-rendered level token, so the console
    /// destination can pass a colorized name while the file destination
    /// passes the plain one.
    pub fn render(&self, message: &str, level_name: &str, timestamp: &DateTime<Utc>) -> String {
        let date = timestamp.format(&self.date_format).to_string();
        expand_template(&self.message_format, &date, level_name, message)
    }
}

/// Expand placeholder tokens in a single left-to-right scan of the template.
///
/// Each token is substituted exactly once and substituted values are never
/// re-scanned, so a placeholder-like payload inside the message (or the
/// rendered date) cannot trigger a second substitution.
fn expand_template(template: &str, date: &str, level: &str, message: &str) -> String {
    let mut out = String::with_capacity(template.len() + date.len() + message.len());
    let mut rest = template;

    while let Some(at) = rest.find('@') {
        out.push_str(&rest[..at]);
        let tail = &rest[at..];

        if let Some(after) = tail.strip_prefix("@date") {
            out.push_str(date);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("@level") {
            out.push_str(level);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("@message") {
            out.push_str(message);
            rest = after;
        } else {
            // Not a known token, keep the '@' literally
            out.push('@');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}
