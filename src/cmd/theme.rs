use std::path::Path;

use anyhow::Result;

use crate::{cli::ThemeArgs, cmd::common::open_theme_settings};

/// Show or toggle the theme
pub fn run(args: ThemeArgs, settings_file: Option<&Path>) -> Result<()> {
    let mut theme = open_theme_settings(settings_file)?;
    if args.toggle {
        let next = theme.toggle()?;
        tracing::info!("Theme switched to {}", next);
    }
    println!("{}", theme.current());
    Ok(())
}
