use std::path::Path;

use anyhow::Result;
use inquire::{validator::ValueRequiredValidator, InquireError, Text};

use crate::{
    cmd::common::{emit_result, open_theme_settings, scan_with_spinner, OutputOptions},
    output::{palette::Palette, report::print_result_tree},
    scan::{HttpTransport, ScanController},
    settings::ThemePreference,
};

const THEME_COMMAND: &str = ":theme";
const QUIT_COMMANDS: [&str; 2] = [":quit", ":q"];

/// What one line of prompt input asks for.
#[derive(Debug, PartialEq, Eq)]
enum PromptAction<'a> {
    Scan(&'a str),
    ToggleTheme,
    Quit,
    Nothing,
}

/// Commands are matched on trimmed input; URLs are passed on as typed.
fn parse_input(input: &str) -> PromptAction<'_> {
    let command = input.trim();
    if command.is_empty() {
        PromptAction::Nothing
    } else if command == THEME_COMMAND {
        PromptAction::ToggleTheme
    } else if QUIT_COMMANDS.contains(&command) {
        PromptAction::Quit
    } else {
        PromptAction::Scan(input)
    }
}

/// Line announcing a theme switch, if stdout output is enabled.
fn theme_switch_line(next: ThemePreference, no_stdout: bool) -> Option<String> {
    (!no_stdout).then(|| format!("Theme: {}", next))
}

/// Prompt for URLs and scan each one until the user quits
pub async fn run(endpoint: &str, settings_file: Option<&Path>, opts: OutputOptions) -> Result<()> {
    let mut theme = open_theme_settings(settings_file)?;
    let mut palette = Palette::for_theme(theme.current());
    let mut controller = ScanController::new(HttpTransport::new(endpoint));

    loop {
        let help = format!(
            "{} switches to the {} theme, {} exits",
            THEME_COMMAND,
            theme.current().toggled(),
            QUIT_COMMANDS[0]
        );
        let answer = Text::new("URL:")
            .with_placeholder("https://example.com")
            .with_help_message(&help)
            .with_validator(ValueRequiredValidator::default())
            .prompt();
        let input = match answer {
            Ok(input) => input,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };
        match parse_input(&input) {
            PromptAction::Scan(url) => {
                let state = scan_with_spinner(&mut controller, url).await;
                emit_result(state, &palette, &opts);
            }
            PromptAction::ToggleTheme => {
                let next = theme.toggle()?;
                palette = Palette::for_theme(next);
                if let Some(line) = theme_switch_line(next, opts.no_stdout) {
                    println!("{}", line);
                    print_result_tree(controller.state(), &palette);
                }
            }
            PromptAction::Quit => break,
            PromptAction::Nothing => continue,
        }
    }
    Ok(())
}
