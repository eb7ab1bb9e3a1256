use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::{
    config::default::SETTINGS_FILE_NAME,
    output::{palette::Palette, record::ScanRecord, report::print_result_tree},
    scan::{ScanController, ScanState, ScanTransport},
    settings::{FileSettingsStore, ThemeSettings},
    util::json::save_json_output,
};

/// Where a settled scan goes.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    pub no_stdout: bool,
    pub output: Option<PathBuf>,
}

/// Open the theme preference, reading it once.
pub fn open_theme_settings(settings_file: Option<&Path>) -> Result<ThemeSettings<FileSettingsStore>> {
    let path = match settings_file {
        Some(path) => path.to_path_buf(),
        None => crate::config::get_user_file_path(SETTINGS_FILE_NAME)?,
    };
    ThemeSettings::load(FileSettingsStore::new(path))
}

/// Submit a URL while a spinner is shown, and return the settled state.
pub async fn scan_with_spinner<'a, T: ScanTransport>(
    controller: &'a mut ScanController<T>,
    url: &str,
) -> &'a ScanState {
    let span = tracing::info_span!("scan");
    span.pb_set_style(&crate::output::progress::get_spinner_style());
    span.pb_set_message("Scanning...");
    span.pb_start();
    let state = controller.submit(url).await;
    drop(span);
    state
}

/// Print the state and save it if requested.
pub fn emit_result(state: &ScanState, palette: &Palette, opts: &OutputOptions) {
    if !opts.no_stdout {
        print_result_tree(state, palette);
    }
    if let Some(path) = &opts.output {
        match save_json_output(&ScanRecord::from_state(state), path) {
            Ok(_) => {
                if !opts.no_stdout {
                    tracing::info!("JSON output saved to {}", path.display());
                }
            }
            Err(e) => tracing::error!("Failed to save JSON output: {}", e),
        }
    }
}
