use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use rmi_dup::app::{self, RunOutcome};
use rmi_dup::config::Config;
use rmi_dup::core::DEFAULT_HASH_SIZE;
use rmi_dup::interrupt::{INTERRUPTED_EXIT_CODE, Interrupt};
use rmi_dup::prompt::TerminalPrompt;

#[derive(Parser, Debug)]
#[command(
    name = "rmi-dup",
    version,
    about = "Removes all duplicate images from the specified directory",
    long_about = "Removes all duplicate images from the specified directory.\n\
                  Duplicates can be in different resolution and/or format."
)]
struct Cli {
    /// Directory from which to remove duplicate images
    #[arg(short, long, value_name = "DIR")]
    directory: PathBuf,

    /// List duplicates instead of deleting them
    #[arg(short, long)]
    list: bool,

    /// Hash size; higher is more accurate and slower
    #[arg(
        short,
        long,
        value_name = "N",
        default_value_t = DEFAULT_HASH_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    size: u32,

    /// Also delete files with this extension sharing a duplicate's name (e.g. `.txt`)
    #[arg(short, long, value_name = "EXT", value_parser = clap::builder::NonEmptyStringValueParser::new())]
    remove: Option<String>,
}

const USAGE_FAILURE: u8 = 1;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if missing_operand(std::env::args_os()) {
        eprintln!("rmi-dup: missing operand\nTry 'rmi-dup --help' for more information.");
        return ExitCode::from(USAGE_FAILURE);
    }

    let cli = Cli::parse();
    let result = execute(cli);
    match &result {
        Ok(RunOutcome::Interrupted) => eprintln!("Interrupted."),
        Ok(_) => {}
        Err(e) => eprintln!("{e:#}"),
    }
    ExitCode::from(exit_status(&result))
}

/// True when only the program name was given.
fn missing_operand(args: impl ExactSizeIterator) -> bool {
    args.len() <= 1
}

fn exit_status(result: &Result<RunOutcome>) -> u8 {
    match result {
        Ok(RunOutcome::Interrupted) => INTERRUPTED_EXIT_CODE as u8,
        Ok(_) => 0,
        Err(_) => USAGE_FAILURE,
    }
}

fn execute(cli: Cli) -> Result<RunOutcome> {
    let config = Config::new(cli.directory, cli.list, cli.size, cli.remove)?;

    let interrupt = Interrupt::new();
    interrupt
        .install_handler()
        .context("Failed to install Ctrl-C handler")?;

    app::run(&config, &mut TerminalPrompt, &interrupt)
}
