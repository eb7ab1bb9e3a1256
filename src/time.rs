use chrono::Local;
use std::fmt;
use tracing_subscriber::fmt::time::FormatTime;

/// Log timer that prints only the local time of day (HH:MM:SS.mmm)
pub struct LocalTimeOnly;

impl FormatTime for LocalTimeOnly {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format("%H:%M:%S%.3f"))
    }
}
