use anyhow::Result;

use crate::{
    cli::CheckArgs,
    cmd::common::{emit_result, open_theme_settings, scan_with_spinner, OutputOptions},
    output::palette::Palette,
    scan::{HttpTransport, ScanController},
};
use std::path::Path;

/// Check a single URL
pub async fn run(
    args: CheckArgs,
    endpoint: &str,
    settings_file: Option<&Path>,
    opts: OutputOptions,
) -> Result<()> {
    let theme = open_theme_settings(settings_file)?;
    let palette = Palette::for_theme(theme.current());
    let transport = HttpTransport::new(endpoint);
    tracing::debug!("Using endpoint {}", transport.endpoint());

    let mut controller = ScanController::new(transport);
    let state = scan_with_spinner(&mut controller, &args.url).await;
    emit_result(state, &palette, &opts);
    Ok(())
}
