use indicatif::{ProgressState, ProgressStyle};

/// Spinner style shown while a scan is in flight.
pub fn get_spinner_style() -> ProgressStyle {
    let style = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg} [{elapsed_precise_subsec}]");

    let style = match style {
        Ok(s) => s,
        Err(_) => ProgressStyle::default_spinner(),
    };

    style
        .with_key("elapsed_precise_subsec", elapsed_precise_subsec)
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
}

/// Elapsed time as MM:SS.mmm
fn elapsed_precise_subsec(state: &ProgressState, writer: &mut dyn std::fmt::Write) {
    let elapsed = state.elapsed();
    let secs = elapsed.as_secs();
    let _ = write!(writer, "{:02}:{:02}.{:03}", secs / 60, secs % 60, elapsed.subsec_millis());
}
