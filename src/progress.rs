//! Fetch progress events and sinks.
//!
//! Long fetches report what they have downloaded so an operator can follow
//! along. The trace is informational only and is not part of the data a
//! fetch returns.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A progress event emitted while fetching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProgressEvent {
    /// An issue was received on an issue listing page.
    IssueFetched {
        /// Issue number.
        number: u64,
        /// Last update time reported by GitHub.
        updated_at: Option<DateTime<Utc>>,
    },
    /// An issue-event page is about to be requested. Each retry of a failed
    /// page records the event again.
    EventPageRequested {
        /// Page number (1-based).
        page: u32,
    },
}

/// A sink that can record progress events.
pub trait ProgressSink: Send + Sync {
    /// Records a progress event.
    fn record(&self, event: ProgressEvent);
}

/// Progress sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgressSink;

impl ProgressSink for NoopProgressSink {
    fn record(&self, _event: ProgressEvent) {}
}

/// Writes the progress trace to stdout as plain lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutProgressSink;

impl ProgressSink for StdoutProgressSink {
    fn record(&self, event: ProgressEvent) {
        let mut stdout = io::stdout().lock();
        if let Err(error) = write_progress_line(&mut stdout, &event) {
            tracing::debug!("failed to write progress line: {error}");
        }
    }
}

/// Formats a progress event as a single trace line.
///
/// # Errors
///
/// Returns any error raised by the writer.
pub fn write_progress_line<W: Write>(writer: &mut W, event: &ProgressEvent) -> io::Result<()> {
    match event {
        ProgressEvent::IssueFetched { number, updated_at } => match updated_at {
            Some(updated) => writeln!(writer, "Issue {number} last updated {updated}"),
            None => writeln!(writer, "Issue {number} last updated unknown"),
        },
        ProgressEvent::EventPageRequested { page } => {
            writeln!(writer, "Downloading events page: {page}")
        }
    }
}
