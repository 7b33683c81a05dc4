//! # ug
//!
//! A personal command-alias manager. Register a shell pipeline under a short
//! name with `ug set`, then run it with `ug <name>`. Aliases live in
//! `~/.ug/cmd.json`.
//!
//! Commands are split on the literal `|` character and on whitespace; there is
//! no quoting or escaping, so arguments containing pipes or embedded spaces
//! cannot be represented. This is a stated non-goal, not a bug.

pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod runner;
