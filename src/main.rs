//! # ug
//!
//! A personal command-alias manager. Register a shell pipeline under a short
//! name and run it later by that name.
//!
//! ## Usage
//!
//! - Register an alias: `ug set --name logs --command "journalctl -f | grep ssh"`
//! - Run it: `ug logs`
//! - List all aliases: `ug list`
//! - Remove one: `ug unset --name logs`

/// Entry point for the CLI tool.
///
/// All command logic returns an exit code up to here; this is the only place
/// that terminates the process.
fn main() {
    std::process::exit(ug::cli::run_cli());
}
