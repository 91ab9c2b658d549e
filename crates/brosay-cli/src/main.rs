//! brosay: prints the Brootal figure with a speech bubble.

mod cli;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        Cli::print_completions(shell);
        return Ok(());
    }

    let message = match cli.message {
        Some(message) => message,
        None if io::stdin().is_terminal() => {
            // Nothing to render and nothing piped in; show usage instead of
            // blocking on a terminal read.
            Cli::command()
                .print_help()
                .context("Failed to print usage")?;
            return Ok(());
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read message from stdin")?;
            buf
        }
    };

    log::debug!("rendering {} byte message", message.len());

    let options = brosay::RenderOptions {
        max_length: cli.max_length,
    };
    println!("{}", brosay::render(&message, options));

    Ok(())
}
