//! Command-line interface definition using clap.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::io;

/// Tell Brootal what to say.
#[derive(Parser, Debug)]
#[command(name = "brosay")]
#[command(author, version, about, long_about = None)]
#[command(after_help = sample_render())]
pub struct Cli {
    /// Message to display; read from standard input when omitted
    pub message: Option<String>,

    /// Lower bound on the speech bubble's wrap width, in columns
    #[arg(long = "max-length", alias = "maxLength", value_name = "N")]
    pub max_length: Option<usize>,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Print shell completions to stdout.
    pub fn print_completions(shell: Shell) {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "brosay", &mut io::stdout());
    }
}

/// A live render appended to the help text, so `--help` doubles as a demo.
fn sample_render() -> String {
    format!(
        "Example:\n  $ brosay 'Sindre is a horse'\n{}",
        brosay::render("Sindre is a horse", brosay::RenderOptions::default())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn help_includes_a_sample_bubble() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("Sindre is a horse"));
        assert!(help.contains('╭'));
    }

    #[test]
    fn max_length_flag_keeps_the_original_spelling_as_alias() {
        let cli = Cli::try_parse_from(["brosay", "hi", "--maxLength", "40"]).unwrap();
        assert_eq!(cli.max_length, Some(40));
        let cli = Cli::try_parse_from(["brosay", "hi", "--max-length", "40"]).unwrap();
        assert_eq!(cli.max_length, Some(40));
    }
}
