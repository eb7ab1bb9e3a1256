pub mod cli;
pub mod cmd;
pub mod config;
pub mod log;
pub mod output;
pub mod scan;
pub mod settings;
pub mod time;
pub mod util;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};
use cmd::common::OutputOptions;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    log::init_logger(&cli)?;

    let opts = OutputOptions {
        no_stdout: cli.no_stdout,
        output: cli.output.clone(),
    };
    let settings_file = cli.settings_file.as_deref();

    match cli.command {
        Command::Check(args) => cmd::check::run(args, &cli.endpoint, settings_file, opts).await,
        Command::Interactive => cmd::interactive::run(&cli.endpoint, settings_file, opts).await,
        Command::Theme(args) => cmd::theme::run(args, settings_file),
    }
}
