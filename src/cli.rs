//! CLI module containing the main entry point logic.
//!
//! This is the controller: it reads the sub-command, dispatches to the config
//! store and the pipeline runner, and maps every outcome to the process exit
//! code that `main` terminates with.

use std::fmt::Write as _;
use std::io::IsTerminal;

use anstyle::{AnsiColor, Reset, Style};
use clap::{CommandFactory, Parser as ClapParser, Subcommand};

use crate::config::{ConfigStore, Registry};
use crate::error::UgError;
use crate::{parser, runner};

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

const COMMAND_COLOR: Style = Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Green)));

/// CLI arguments for the ug tool.
#[derive(ClapParser)]
#[command(name = "ug")]
#[command(version = PKG_VERSION)]
#[command(about = "A personal command-alias manager", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register (or overwrite) an alias for a command pipeline
    Set {
        /// Alias name to register
        #[arg(long)]
        name: String,
        /// Command to run; stages separated by `|`
        #[arg(long)]
        command: String,
    },
    /// Remove a registered alias
    Unset {
        /// Alias name to remove
        #[arg(long)]
        name: String,
    },
    /// List all registered aliases
    List,
    /// Any other sub-command is an alias name to run
    #[command(external_subcommand)]
    Run(Vec<String>),
}

/// Run the CLI and return the exit code for `main` to terminate with.
pub fn run_cli() -> i32 {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        eprint!("{}", Cli::command().render_help());
        return 1;
    };

    // Without a resolvable home directory there is nowhere to keep the
    // registry, so every sub-command fails fast.
    let store = match ConfigStore::from_home() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("ug: {err}");
            return 1;
        }
    };

    match command {
        Commands::Set { name, command } => match store.set_entry(&name, &command) {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("ug: {err}");
                1
            }
        },
        Commands::Unset { name } => {
            // Read/parse errors are reported but the exit code stays 0;
            // `unset` has never had a distinct failure code.
            if let Err(err) = store.unset_entry(&name) {
                eprintln!("ug: {err}");
            }
            0
        }
        Commands::List => match store.load() {
            Ok(registry) => {
                print!(
                    "{}",
                    render_entries(&registry, std::io::stdout().is_terminal())
                );
                0
            }
            Err(err) => {
                eprintln!("ug: {err}");
                0
            }
        },
        Commands::Run(args) => run_alias(&store, &args),
    }
}

/// Render `name = command` rows, names left-padded to the widest name.
///
/// An empty registry renders as an empty string. With `color` set the
/// command text is green, as the original tool printed it.
fn render_entries(registry: &Registry, color: bool) -> String {
    let width = registry
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (name, command) in registry.iter() {
        if color {
            let _ = writeln!(out, "{name:<width$} = {COMMAND_COLOR}{command}{Reset}");
        } else {
            let _ = writeln!(out, "{name:<width$} = {command}");
        }
    }
    out
}

/// Resolve an alias invocation (`ug <name> ...`) to an exit code.
///
/// Arguments after the alias name are accepted and ignored, as the original
/// tool ignored them.
fn run_alias(store: &ConfigStore, args: &[String]) -> i32 {
    let Some(name) = args.first() else {
        eprint!("{}", Cli::command().render_help());
        return 1;
    };

    match invoke(store, name) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("ug: {err}");
            1
        }
    }
}

/// Look up, parse, and run a registered alias; the `Ok` value is the
/// pipeline's exit code.
fn invoke(store: &ConfigStore, name: &str) -> Result<i32, UgError> {
    let registry = store.load()?;
    let command = registry
        .get(name)
        .ok_or_else(|| UgError::UnknownCommand(name.to_string()))?;
    let stages = parser::parse_pipeline(command)?;
    runner::run_pipeline(&stages)
}
